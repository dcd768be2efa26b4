//! Analysis of scanned URL templates and instances.
//!
//! A template declares names and types:
//!
//! ```text
//! /users/:id=number/[tab]?sort=string#section
//! ```
//!
//! An instance is a concrete URL read against that template. The analyzers
//! here walk the node sequence produced by [`upat_lexer::scan`] and extract:
//!
//! - path variables (`:id`) and their cast values
//! - search parameters (`?sort=...`), repeated keys collected in order
//! - the fragment
//! - bracket-style static props (`[tab]`, `[...rest]`)
//!
//! Problems are recorded in an [`ErrorLog`](upat_diagnostic::ErrorLog) and
//! never abort analysis. Only a failed value cast is returned as an error.
//!
//! ```
//! use upat_analyze::{parse, Analyzed, Value};
//!
//! let template = parse("/users/:id=number");
//! let mut instance = template.instance("/users/100");
//! let Ok(params) = instance.params() else { panic!() };
//! assert_eq!(params.get("id"), Some(&Value::Number(100.0)));
//! assert!(!template.has_errors());
//! ```

mod analyzed;
mod bindings;
mod cast;
mod instance;
mod static_props;
mod template;
mod value;

pub use analyzed::Analyzed;
pub use bindings::Bindings;
pub use cast::{cast_value, CastError};
pub use instance::InstanceAnalyzer;
pub use template::TemplateAnalyzer;
pub use value::{SearchValue, StaticValue, Value};

/// Scan `input` as a template.
pub fn parse(input: &str) -> TemplateAnalyzer {
    TemplateAnalyzer::new(input)
}

/// Scan `input` as an instance of `template`.
pub fn parse_instance<'t>(input: &str, template: &'t TemplateAnalyzer) -> InstanceAnalyzer<'t> {
    template.instance(input)
}
