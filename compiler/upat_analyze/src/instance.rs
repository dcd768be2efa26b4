//! Instance analysis.

use upat_diagnostic::{ErrorLog, ErrorLogEntry};
use upat_ir::{ContentType, NodeKind, NodeList, Span};

use crate::analyzed::{decode, record};
use crate::static_props::{match_static, path_nodes};
use crate::template::assigned_value;
use crate::{cast_value, Analyzed, Bindings, CastError, StaticValue, TemplateAnalyzer, Value};

/// A concrete URL read against a [`TemplateAnalyzer`].
///
/// Accessors that extract values take `&mut self` because decode and cast
/// failures are appended to this instance's log. The template is never
/// written to.
pub struct InstanceAnalyzer<'t> {
    input: String,
    nodes: NodeList,
    log: ErrorLog,
    template: &'t TemplateAnalyzer,
}

impl<'t> InstanceAnalyzer<'t> {
    #[tracing::instrument(level = "debug", skip_all, fields(len = input.len()))]
    pub(crate) fn new(input: &str, template: &'t TemplateAnalyzer) -> Self {
        let output = upat_lexer::scan(input);
        InstanceAnalyzer {
            input: input.to_owned(),
            nodes: output.nodes,
            log: ErrorLog::from_entries(output.errors),
            template,
        }
    }

    /// The template this instance is read against.
    #[inline]
    pub fn template(&self) -> &'t TemplateAnalyzer {
        self.template
    }

    /// Path variables, cast to their declared types.
    ///
    /// The template's Nth `/:name` reads the segment after the instance's
    /// Nth `/`. Variables without a matching segment are left out.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn params(&mut self) -> Result<Bindings<Value>, CastError> {
        let template = self.template;
        let mut params = Bindings::new();
        for slot in template.slots() {
            let Some(segment) = self
                .nodes
                .nth_of_kind(NodeKind::SLASH, slot.slash)
                .and_then(|slash| self.nodes.after(slash.id, 1))
                .filter(|next| next.kind == NodeKind::PATH)
                .copied()
            else {
                continue;
            };
            let Some(raw) = decode(segment.text(&self.input)) else {
                record(
                    &mut self.log,
                    ErrorLogEntry::decode_failure("a path segment", segment.span),
                );
                continue;
            };
            let value = self.cast(&raw, slot.ty, segment.span)?;
            params.insert(slot.name.clone(), value);
        }
        Ok(params)
    }

    /// Search parameters the template declares, cast to their types.
    ///
    /// Undeclared parameters are skipped. A parameter without `=value`
    /// casts the empty string. A repeated parameter keeps the last value.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn search_params(&mut self) -> Result<Bindings<Value>, CastError> {
        let template = self.template;
        let parameters: Vec<_> = self.nodes.of_kind(NodeKind::PARAMETER).copied().collect();
        let mut params = Bindings::new();
        for node in parameters {
            let Some(name) = decode(node.text(&self.input)) else {
                record(
                    &mut self.log,
                    ErrorLogEntry::decode_failure("a search parameter", node.span),
                );
                continue;
            };
            let Some(ty) = template.declared_type(&name) else {
                continue;
            };
            let (text, span) = match assigned_value(&self.nodes, node.id) {
                Some(value) => (value.text(&self.input), value.span),
                None => ("", node.span),
            };
            let Some(raw) = decode(text) else {
                record(
                    &mut self.log,
                    ErrorLogEntry::decode_failure("a search parameter value", span),
                );
                continue;
            };
            let value = self.cast(&raw, ty, span)?;
            params.insert(name, value);
        }
        Ok(params)
    }

    /// `{template fragment: instance fragment}`, or empty unless both
    /// inputs have a fragment.
    pub fn fragment(&mut self) -> Bindings<String> {
        let mut fragment = Bindings::new();
        let Some(key) = self.template.fragment_key() else {
            return fragment;
        };
        let Some(node) = self.nodes.first_of_kind(NodeKind::FRAGMENT).copied() else {
            return fragment;
        };
        match decode(node.text(&self.input)) {
            Some(value) => {
                fragment.insert(key, value);
            }
            None => record(&mut self.log, ErrorLogEntry::decode_failure("the fragment", node.span)),
        }
        fragment
    }

    /// Bindings of the template's `[name]` and `[...name]` segments.
    ///
    /// Empty when the instance path does not fit the template: a static
    /// segment differs, a segment is missing, or segments are left over.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn static_props(&mut self) -> Bindings<StaticValue> {
        if !self.template.nodes().kinds().has_brackets() {
            return Bindings::new();
        }
        let mut segments = Vec::new();
        for node in path_nodes(&self.nodes) {
            if node.kind != NodeKind::PATH {
                continue;
            }
            let Some(segment) = decode(node.text(&self.input)) else {
                record(
                    &mut self.log,
                    ErrorLogEntry::decode_failure("a path segment", node.span),
                );
                return Bindings::new();
            };
            segments.push(segment);
        }
        match_static(self.template.nodes(), self.template.input(), &segments).unwrap_or_default()
    }

    /// Cast `raw`, logging the failure before returning it.
    fn cast(&mut self, raw: &str, ty: ContentType, span: Span) -> Result<Value, CastError> {
        cast_value(raw, ty, span).map_err(|entry| {
            record(&mut self.log, entry.clone());
            CastError::new(entry, &self.input)
        })
    }
}

impl Analyzed for InstanceAnalyzer<'_> {
    fn input(&self) -> &str {
        &self.input
    }

    fn nodes(&self) -> &NodeList {
        &self.nodes
    }

    fn log(&self) -> &ErrorLog {
        &self.log
    }
}

impl std::fmt::Debug for InstanceAnalyzer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstanceAnalyzer")
            .field("input", &self.input)
            .field("template", &self.template.input())
            .field("nodes", &self.nodes.len())
            .field("errors", &self.log.len())
            .finish()
    }
}
