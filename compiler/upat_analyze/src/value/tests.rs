use pretty_assertions::assert_eq;

use super::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn accessors_match_variant() {
    assert_eq!(Value::String("a".into()).as_str(), Some("a"));
    assert_eq!(Value::Number(1.5).as_number(), Some(1.5));
    assert_eq!(Value::Boolean(true).as_bool(), Some(true));
    assert_eq!(
        Value::Array(strings(&["a", "b"])).as_array(),
        Some(&strings(&["a", "b"])[..])
    );
    assert_eq!(Value::Number(1.0).as_str(), None);
    assert_eq!(Value::String("1".into()).as_number(), None);
}

#[test]
fn display() {
    assert_eq!(Value::String("john".into()).to_string(), "\"john\"");
    assert_eq!(Value::Number(100.0).to_string(), "100");
    assert_eq!(Value::Number(-99.5).to_string(), "-99.5");
    assert_eq!(Value::Boolean(false).to_string(), "false");
    assert_eq!(Value::Array(strings(&["a", "", "c"])).to_string(), "[\"a\", \"\", \"c\"]");
    assert_eq!(StaticValue::Segment("42".into()).to_string(), "\"42\"");
    assert_eq!(StaticValue::CatchAll(vec![]).to_string(), "[]");
}

#[test]
fn search_value_push_promotes_to_multiple() {
    let mut value = SearchValue::Single("news".into());

    value.push("tech".into());
    assert_eq!(value, SearchValue::Multiple(strings(&["news", "tech"])));

    value.push("art".into());
    assert_eq!(value, SearchValue::Multiple(strings(&["news", "tech", "art"])));
    assert_eq!(value.to_string(), "[\"news\", \"tech\", \"art\"]");
}
