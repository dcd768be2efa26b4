use pretty_assertions::assert_eq;
use upat_analyze::parse;
use upat_diagnostic::{ColorMode, TerminalEmitter};
use upat_lexer::scan;

use super::*;

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn color_flag_is_split_out() {
    let raw = args(&["/a", "--color=never", "/b"]);
    let Ok((mode, rest)) = split_color_flag(&raw) else {
        panic!("flag should parse");
    };
    assert_eq!(mode, ColorMode::Never);
    assert_eq!(rest, vec!["/a", "/b"]);

    let raw = args(&["/a"]);
    let Ok((mode, _)) = split_color_flag(&raw) else {
        panic!("no flag is fine");
    };
    assert_eq!(mode, ColorMode::Auto);

    let raw = args(&["--color=sometimes"]);
    assert_eq!(split_color_flag(&raw), Err("sometimes".to_owned()));
}

#[test]
fn node_table_rows() {
    let input = "/:id=number";
    let table = node_table(&scan(input).nodes, input);
    let lines: Vec<_> = table.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].trim_start().starts_with("id  symbol"));
    assert_eq!(
        lines[5].split_whitespace().collect::<Vec<_>>(),
        vec!["4", "number", "Value", "number", "5", "11"]
    );
    assert_eq!(
        lines[1].split_whitespace().collect::<Vec<_>>(),
        vec!["0", "/", "Delimiter", "-", "0", "1"]
    );
}

#[test]
fn check_reports_errors() {
    let mut out = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut out, ColorMode::Never, false);
    assert!(check_input("/users/:id/posts/:id", &mut emitter));
    let text = String::from_utf8_lossy(&out);
    assert!(text.contains("Error [E_DUPLICATE_PARAM] at col 18"));
    assert!(text.contains("error: 1 problem found"));
}

#[test]
fn check_clean_template() {
    let mut out = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut out, ColorMode::Never, false);
    assert!(!check_input("/users/[id]?active=true", &mut emitter));
    assert_eq!(String::from_utf8_lossy(&out), "No errors found.\n");
}

#[test]
fn match_sections() {
    let template = parse("/files/[...slug]?v=number#top");
    let Ok(report) = match_report(&template, "/files/a/b?v=2#intro") else {
        panic!("instance should match");
    };
    assert_eq!(
        report,
        "params:\n  (none)\n\
         search params:\n  v = 2\n\
         fragment:\n  top = intro\n\
         static props:\n  slug = [\"a\", \"b\"]\n"
    );
}

#[test]
fn match_cast_failure() {
    let template = parse("/items/:n=number");
    let Err(error) = match_report(&template, "/items/x") else {
        panic!("cast should fail");
    };
    assert!(error.to_string().starts_with("Error [E_CAST_NUMBER]"));
}

#[test]
fn hex_dump_one_record_per_line() {
    let Ok(dump) = encode_input("/a") else {
        panic!("should encode");
    };
    assert_eq!(dump, "000: 00 2f 00 00 01 00 00\n001: 01 fb 01 00 02 00 00\n");
    assert_eq!(hex_dump(&[]), "");
}

#[test]
fn explain_known_and_unknown() {
    let Some(doc) = explain_error("cast_number") else {
        panic!("code should be documented");
    };
    assert!(doc.starts_with("# E_CAST_NUMBER"));
    assert_eq!(explain_error("E9999"), None);
}
