//! upat CLI
//!
//! Scans and analyzes URL templates and instances.

use std::io::IsTerminal;

use upat_analyze::{Analyzed, TemplateAnalyzer};
use upat_diagnostic::{ColorMode, TerminalEmitter};
use upatc::commands::{
    check_input, encode_input, explain_error, match_report, node_table, split_color_flag,
};

fn main() {
    upatc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let (color, rest) = match split_color_flag(&args[2..]) {
        Ok(split) => split,
        Err(value) => {
            eprintln!("error: unknown color mode '{value}'");
            eprintln!("Valid modes: auto, always, never");
            std::process::exit(1);
        }
    };

    tracing::debug!(command = %args[1], positional = rest.len(), ?color, "dispatch");

    match args[1].as_str() {
        "lex" => {
            let [input] = rest.as_slice() else {
                eprintln!("Usage: upat lex <input>");
                std::process::exit(1);
            };
            let output = upat_lexer::scan(input);
            print!("{}", node_table(&output.nodes, input));
            if !output.errors.is_empty() {
                let mut emitter = stderr_emitter(color);
                for entry in &output.errors {
                    emitter.emit(entry, input);
                    eprintln!();
                }
                emitter.emit_summary(output.errors.len());
            }
        }
        "check" => {
            let [input] = rest.as_slice() else {
                eprintln!("Usage: upat check <input> [--color=auto|always|never]");
                std::process::exit(1);
            };
            let mut emitter = TerminalEmitter::stdout(color, std::io::stdout().is_terminal());
            if check_input(input, &mut emitter) {
                std::process::exit(1);
            }
        }
        "match" => {
            let [template, instance] = rest.as_slice() else {
                eprintln!("Usage: upat match <template> <instance>");
                eprintln!("Example: upat match '/users/:id=number' '/users/42'");
                std::process::exit(1);
            };
            let template = TemplateAnalyzer::new(template);
            if template.has_errors() {
                let mut emitter = stderr_emitter(color);
                emitter.emit_log(template.log(), template.input());
                eprintln!();
            }
            match match_report(&template, instance) {
                Ok(report) => print!("{report}"),
                Err(error) => {
                    eprintln!("{error}");
                    std::process::exit(1);
                }
            }
        }
        "encode" => {
            let [input] = rest.as_slice() else {
                eprintln!("Usage: upat encode <input>");
                std::process::exit(1);
            };
            match encode_input(input) {
                Ok(dump) => print!("{dump}"),
                Err(error) => {
                    eprintln!("error: {error}");
                    std::process::exit(1);
                }
            }
        }
        "explain" | "--explain" => {
            let [code] = rest.as_slice() else {
                eprintln!("Usage: upat explain <ERROR_CODE>");
                eprintln!("Example: upat explain E_CAST_NUMBER");
                std::process::exit(1);
            };
            if let Some(doc) = explain_error(code) {
                println!("{doc}");
            } else {
                eprintln!("Unknown error code: {code}");
                eprintln!();
                eprintln!("Codes look like E_INVALID_SYNTAX; the E_ prefix is optional.");
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("upat {}", env!("CARGO_PKG_VERSION"));
        }
        command => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn stderr_emitter(color: ColorMode) -> TerminalEmitter<std::io::Stderr> {
    TerminalEmitter::stderr(color, std::io::stderr().is_terminal())
}

fn print_usage() {
    println!("upat - URL template scanner and analyzer");
    println!();
    println!("Usage: upat <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <input>                  Show the scanned node table");
    println!("  check <input>                Report every error in a template");
    println!("  match <template> <instance>  Extract typed values from an instance");
    println!("  encode <input>               Dump the binary node record as hex");
    println!("  explain <code>               Explain an error code");
    println!("  help                         Show this help message");
    println!("  version                      Show version information");
    println!();
    println!("Options:");
    println!("  --color=<mode>     auto (default), always, never");
    println!();
    println!("Environment:");
    println!("  RUST_LOG           Enable tracing, e.g. RUST_LOG=upat_lexer=trace");
    println!();
    println!("Examples:");
    println!("  upat lex '/users/:id=number?sort=string'");
    println!("  upat check '/files/[..slug]'");
    println!("  upat match '/docs/[...path]/view' '/docs/guides/intro/view'");
    println!("  upat explain E_DUPLICATE_PARAM");
}
