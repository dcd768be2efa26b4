use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::InvalidSyntax.to_string(), "E_INVALID_SYNTAX");
    assert_eq!(ErrorCode::CastNumber.as_str(), "E_CAST_NUMBER");
    assert_eq!(ErrorCode::DecodeUri.as_str(), "E_DECODE_URI");
}

#[test]
fn test_from_code() {
    assert_eq!(ErrorCode::from_code("E_DUPLICATE_PARAM"), Some(ErrorCode::DuplicateParam));
    assert_eq!(ErrorCode::from_code("invalid_catch_all"), Some(ErrorCode::InvalidCatchAll));
    assert_eq!(ErrorCode::from_code(" e_cast_boolean "), Some(ErrorCode::CastBoolean));
    assert_eq!(ErrorCode::from_code("E1001"), None);
    assert_eq!(ErrorCode::from_code(""), None);
}

#[test]
fn test_from_code_round_trips_all() {
    for code in ErrorCode::ALL {
        assert_eq!(ErrorCode::from_code(code.as_str()), Some(code));
    }
}

#[test]
fn test_predicate_exclusivity() {
    for code in ErrorCode::ALL {
        assert!(
            !(code.is_syntax_error() && code.is_cast_error()),
            "{code} is both a syntax and a cast error"
        );
    }
}

#[test]
fn test_only_unexpected_token_is_fatal() {
    let fatal: Vec<_> = ErrorCode::ALL.into_iter().filter(ErrorCode::is_fatal).collect();
    assert_eq!(fatal, vec![ErrorCode::UnexpectedToken]);
}

#[test]
fn test_every_code_explains_itself() {
    for code in ErrorCode::ALL {
        let Some(doc) = code.explain() else {
            panic!("{code} has no documentation");
        };
        assert!(doc.starts_with(&format!("# {code}")));
    }
}
