//! Property tests over generated templates and instances.

use proptest::prelude::*;
use upat_analyze::{parse, Analyzed, StaticValue, Value};

fn segment() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,8}"
}

proptest! {
    #[test]
    fn analysis_is_deterministic(input in "[a-z0-9/:?&=#\\[\\].]{0,32}") {
        let mut first = parse(&input);
        let mut second = parse(&input);
        prop_assert_eq!(first.params(), second.params());
        prop_assert_eq!(first.search_params(), second.search_params());
        prop_assert_eq!(first.fragment(), second.fragment());
        prop_assert_eq!(first.pathname(), second.pathname());
        prop_assert_eq!(first.errors(), second.errors());
    }

    #[test]
    fn repeated_accessors_do_not_grow_the_log(input in "[a-z/:?&=#]{0,24}") {
        let mut template = parse(&input);
        template.params();
        template.search_params();
        let after_first = template.errors().len();
        template.params();
        template.search_params();
        prop_assert_eq!(template.errors().len(), after_first);
    }

    #[test]
    fn number_params_round_trip(n in -100_000i32..100_000) {
        let template = parse("/items/:n=number");
        let mut instance = template.instance(&format!("/items/{n}"));
        let params = instance.params().map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(params.get("n"), Some(&Value::Number(f64::from(n))));
    }

    #[test]
    fn catch_all_binds_every_middle_segment(
        middle in proptest::collection::vec(segment(), 0..6),
    ) {
        let template = parse("/root/[...rest]/end");
        let path = std::iter::once("root".to_owned())
            .chain(middle.iter().cloned())
            .chain(std::iter::once("end".to_owned()))
            .collect::<Vec<_>>()
            .join("/");
        let mut instance = template.instance(&format!("/{path}"));
        let props = instance.static_props();
        prop_assert_eq!(props.get("rest"), Some(&StaticValue::CatchAll(middle)));
    }
}
