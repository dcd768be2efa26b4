//! Template analysis.

use rustc_hash::FxHashMap;
use upat_diagnostic::{ErrorLog, ErrorLogEntry};
use upat_ir::{codec, CodecError, ContentType, Node, NodeId, NodeKind, NodeList};

use crate::analyzed::{decode, record};
use crate::{Analyzed, Bindings, InstanceAnalyzer, SearchValue};

/// A path variable that directly follows a `/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct VariableSlot {
    /// Ordinal of the `/` among all slashes.
    pub slash: usize,
    pub name: String,
    pub ty: ContentType,
}

/// A scanned URL template.
///
/// Holds everything an instance needs to read values: the variable slots,
/// the declared search parameter types and the fragment key. These are
/// computed once, so a template can be shared by any number of instances.
pub struct TemplateAnalyzer {
    input: String,
    nodes: NodeList,
    log: ErrorLog,
    slots: Vec<VariableSlot>,
    search_types: FxHashMap<String, ContentType>,
    fragment_key: Option<String>,
}

impl TemplateAnalyzer {
    /// Scan `input`. Syntax errors are recorded in the log.
    #[tracing::instrument(level = "debug", skip_all, fields(len = input.len()))]
    pub fn new(input: &str) -> Self {
        let output = upat_lexer::scan(input);
        Self::from_parts(input, output.nodes, ErrorLog::from_entries(output.errors))
    }

    /// Rebuild a template from its binary record without scanning.
    ///
    /// The log starts empty: scan diagnostics are not part of the record.
    pub fn from_encoded(input: &str, bytes: &[u8]) -> Result<Self, CodecError> {
        let nodes = codec::decode(bytes)?;
        codec::check_spans(&nodes, input)?;
        let nodes = NodeList::from_nodes(nodes)?;
        Ok(Self::from_parts(input, nodes, ErrorLog::new()))
    }

    fn from_parts(input: &str, nodes: NodeList, log: ErrorLog) -> Self {
        let slots = variable_slots(&nodes, input);
        let search_types = search_types(&nodes, input);
        let fragment_key = nodes
            .first_of_kind(NodeKind::FRAGMENT)
            .and_then(|node| decode(node.text(input)));
        TemplateAnalyzer {
            input: input.to_owned(),
            nodes,
            log,
            slots,
            search_types,
            fragment_key,
        }
    }

    /// Scan `input` as an instance of this template.
    pub fn instance(&self, input: &str) -> InstanceAnalyzer<'_> {
        InstanceAnalyzer::new(input, self)
    }

    /// Decoded variable names, in order of appearance.
    ///
    /// A name seen twice records `E_DUPLICATE_PARAM` against the repeat and
    /// is still listed.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn params(&mut self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for node in self.nodes.of_kind(NodeKind::VARIABLE) {
            let Some(name) = decode(node.text(&self.input)) else {
                record(&mut self.log, ErrorLogEntry::decode_failure("a variable", node.span));
                continue;
            };
            if names.contains(&name) {
                record(&mut self.log, ErrorLogEntry::duplicate_param(&name, node.span));
            }
            names.push(name);
        }
        names
    }

    /// Decoded search parameter names mapped to their raw value text.
    ///
    /// A name without `=value` maps to `""`. Repeated names collect every
    /// value in order.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn search_params(&mut self) -> Bindings<SearchValue> {
        let mut params: Bindings<SearchValue> = Bindings::new();
        for node in self.nodes.of_kind(NodeKind::PARAMETER) {
            let Some(name) = decode(node.text(&self.input)) else {
                record(
                    &mut self.log,
                    ErrorLogEntry::decode_failure("a search parameter", node.span),
                );
                continue;
            };
            let value = assigned_value(&self.nodes, node.id)
                .map_or_else(String::new, |value| value.text(&self.input).to_owned());
            match params.get_mut(&name) {
                Some(existing) => existing.push(value),
                None => {
                    params.insert(name, SearchValue::Single(value));
                }
            }
        }
        params
    }

    /// Decoded text of the first fragment.
    pub fn fragment(&mut self) -> Option<String> {
        let node = *self.nodes.first_of_kind(NodeKind::FRAGMENT)?;
        let decoded = decode(node.text(&self.input));
        if decoded.is_none() {
            record(&mut self.log, ErrorLogEntry::decode_failure("the fragment", node.span));
        }
        decoded
    }

    /// Type declared for search parameter `name`, if it is declared at all.
    pub fn declared_type(&self, name: &str) -> Option<ContentType> {
        self.search_types.get(name).copied()
    }

    pub(crate) fn slots(&self) -> &[VariableSlot] {
        &self.slots
    }

    pub(crate) fn fragment_key(&self) -> Option<&str> {
        self.fragment_key.as_deref()
    }
}

impl Analyzed for TemplateAnalyzer {
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

impl std::fmt::Debug for TemplateAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateAnalyzer")
            .field("input", &self.input)
            .field("nodes", &self.nodes.len())
            .field("errors", &self.log.len())
            .finish_non_exhaustive()
    }
}

/// The `Value` node of `name=value`, if the parameter has one.
pub(crate) fn assigned_value(nodes: &NodeList, parameter: NodeId) -> Option<&Node> {
    nodes
        .after(parameter, 1)
        .filter(|next| next.kind == NodeKind::EQUAL)?;
    nodes
        .after(parameter, 2)
        .filter(|value| value.kind == NodeKind::VALUE)
}

/// `/:name` and `/:name=type` slots, keyed by slash ordinal.
fn variable_slots(nodes: &NodeList, input: &str) -> Vec<VariableSlot> {
    nodes
        .of_kind(NodeKind::SLASH)
        .enumerate()
        .filter_map(|(slash, node)| {
            nodes.after(node.id, 1).filter(|n| n.kind == NodeKind::COLON)?;
            let variable = nodes
                .after(node.id, 2)
                .filter(|n| n.kind == NodeKind::VARIABLE)?;
            let name = decode(variable.text(input))?;
            let ty = nodes
                .after(variable.id, 2)
                .filter(|n| n.kind == NodeKind::VALUE)
                .map_or(ContentType::String, |value| declared(value.ty));
            Some(VariableSlot { slash, name, ty })
        })
        .collect()
}

/// Declared type of every search parameter. A later declaration of the
/// same name wins.
fn search_types(nodes: &NodeList, input: &str) -> FxHashMap<String, ContentType> {
    let mut types = FxHashMap::default();
    for node in nodes.of_kind(NodeKind::PARAMETER) {
        let Some(name) = decode(node.text(input)) else {
            continue;
        };
        let ty = if node.ty == ContentType::None {
            assigned_value(nodes, node.id).map_or(ContentType::String, |value| declared(value.ty))
        } else {
            node.ty
        };
        types.insert(name, ty);
    }
    types
}

fn declared(ty: ContentType) -> ContentType {
    if ty == ContentType::None {
        ContentType::String
    } else {
        ty
    }
}
