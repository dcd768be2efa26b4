//! Extracted values.

use std::fmt;

/// A cast path variable or search parameter.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    String(String),
    Number(f64),
    Boolean(bool),
    /// Comma-separated items, untrimmed. Empty items are kept.
    Array(Vec<String>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[String]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{s:?}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Array(items) => write_list(f, items),
        }
    }
}

/// A template search parameter: one raw value, or every value of a
/// repeated key in order of occurrence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchValue {
    Single(String),
    Multiple(Vec<String>),
}

impl SearchValue {
    /// Add another occurrence of the same key.
    pub(crate) fn push(&mut self, value: String) {
        match self {
            SearchValue::Single(first) => {
                let first = std::mem::take(first);
                *self = SearchValue::Multiple(vec![first, value]);
            }
            SearchValue::Multiple(values) => values.push(value),
        }
    }
}

impl fmt::Display for SearchValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchValue::Single(value) => write!(f, "{value:?}"),
            SearchValue::Multiple(values) => write_list(f, values),
        }
    }
}

/// A bracket-style path binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StaticValue {
    /// `[name]`: exactly one segment.
    Segment(String),
    /// `[...name]`: zero or more segments.
    CatchAll(Vec<String>),
}

impl fmt::Display for StaticValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaticValue::Segment(segment) => write!(f, "{segment:?}"),
            StaticValue::CatchAll(segments) => write_list(f, segments),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[String]) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item:?}")?;
    }
    f.write_str("]")
}

#[cfg(test)]
mod tests;
