use pretty_assertions::assert_eq;
use proptest::prelude::*;
use upat_diagnostic::ErrorCode;

use super::*;

fn cast(raw: &str, ty: ContentType) -> Result<Value, ErrorLogEntry> {
    cast_value(raw, ty, Span::new(0, 1))
}

fn code(raw: &str, ty: ContentType) -> Option<ErrorCode> {
    cast(raw, ty).err().map(|e| e.code)
}

#[test]
fn boolean_table() {
    for raw in ["true", "TRUE", "True", "1"] {
        assert_eq!(cast(raw, ContentType::Boolean), Ok(Value::Boolean(true)), "{raw}");
    }
    for raw in ["false", "FALSE", "fAlSe", "0"] {
        assert_eq!(cast(raw, ContentType::Boolean), Ok(Value::Boolean(false)), "{raw}");
    }
    for raw in ["maybe", "yes", "", "01", " true"] {
        assert_eq!(code(raw, ContentType::Boolean), Some(ErrorCode::CastBoolean), "{raw}");
    }
}

#[test]
fn numbers() {
    assert_eq!(cast("100", ContentType::Number), Ok(Value::Number(100.0)));
    assert_eq!(cast("-42", ContentType::Number), Ok(Value::Number(-42.0)));
    assert_eq!(cast("99.99", ContentType::Number), Ok(Value::Number(99.99)));
    for raw in ["abc", "", "1,5", "inf", "NaN", "12px"] {
        assert_eq!(code(raw, ContentType::Number), Some(ErrorCode::CastNumber), "{raw}");
    }
}

#[test]
fn arrays_are_not_trimmed() {
    let items = |v: &[&str]| Value::Array(v.iter().map(|s| (*s).to_owned()).collect());
    assert_eq!(cast("red,green,blue", ContentType::Array), Ok(items(&["red", "green", "blue"])));
    assert_eq!(cast("tech", ContentType::Array), Ok(items(&["tech"])));
    assert_eq!(cast("a,,c", ContentType::Array), Ok(items(&["a", "", "c"])));
    assert_eq!(cast(" a, b", ContentType::Array), Ok(items(&[" a", " b"])));
}

#[test]
fn strings_pass_through() {
    assert_eq!(
        cast("john-doe_123", ContentType::String),
        Ok(Value::String("john-doe_123".into()))
    );
    assert_eq!(cast("42", ContentType::None), Ok(Value::String("42".into())));
}

#[test]
fn failure_message_quotes_raw_text() {
    let Err(entry) = cast_value("twenty", ContentType::Number, Span::new(5, 11)) else {
        panic!("expected a cast failure");
    };
    assert_eq!(entry.span, Span::new(5, 11));
    assert!(entry.message.contains("\"twenty\""));
}

#[test]
fn cast_error_displays_full_report() {
    let input = "?age=twenty";
    let entry = ErrorLogEntry::cast_number("twenty", Span::new(5, 11));
    let error = CastError::new(entry.clone(), input);
    assert_eq!(error.to_string(), entry.display(input));
    assert!(error.to_string().starts_with("Error [E_CAST_NUMBER] at col 5"));
}

proptest! {
    #[test]
    fn integers_cast_exactly(n in -1_000_000i32..1_000_000) {
        prop_assert_eq!(
            cast(&n.to_string(), ContentType::Number),
            Ok(Value::Number(f64::from(n)))
        );
    }

    #[test]
    fn fractions_are_accepted(whole in -9999i32..9999, frac in 0u32..9999) {
        let raw = format!("{whole}.{frac}");
        prop_assert!(cast(&raw, ContentType::Number).is_ok());
    }

    #[test]
    fn letters_never_cast_to_number(raw in "[a-z]{1,8}") {
        prop_assert_eq!(code(&raw, ContentType::Number), Some(ErrorCode::CastNumber));
    }

    #[test]
    fn array_item_count_is_comma_count_plus_one(raw in "[a-z,]{0,16}") {
        let Ok(Value::Array(items)) = cast(&raw, ContentType::Array) else {
            return Err(TestCaseError::fail("array cast failed"));
        };
        prop_assert_eq!(items.len(), raw.matches(',').count() + 1);
    }
}
