//! `upat match`: values of an instance read against a template.

use std::fmt::{Display, Write};

use upat_analyze::{Bindings, CastError, TemplateAnalyzer};

/// Params, search params, fragment and static props of `instance`, one
/// section each.
///
/// Stops at the first value that does not cast to its declared type.
pub fn match_report(template: &TemplateAnalyzer, instance: &str) -> Result<String, CastError> {
    let mut instance = template.instance(instance);
    let params = instance.params()?;
    let search_params = instance.search_params()?;
    let fragment = instance.fragment();
    let static_props = instance.static_props();

    let mut out = String::new();
    section(&mut out, "params", &params);
    section(&mut out, "search params", &search_params);
    section(&mut out, "fragment", &fragment);
    section(&mut out, "static props", &static_props);
    Ok(out)
}

fn section<V: Display>(out: &mut String, title: &str, bindings: &Bindings<V>) {
    let _ = writeln!(out, "{title}:");
    if bindings.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for (name, value) in bindings.iter() {
        let _ = writeln!(out, "  {name} = {value}");
    }
}
