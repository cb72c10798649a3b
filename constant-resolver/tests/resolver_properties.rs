//! Property-based tests for resolution.
//!
//! - Strictness: values of another kind never match, whatever their contents
//! - Completeness: every declared constant resolves to a label naming it
//! - Consistency: joined output is the mapping's labels joined by the separator
//! - Idempotence: resolving twice yields the same output

mod common;

use common::{NonUniqueValueConstants, registry};
use constant_resolver::{
    ConstValue, Constants, ResolveError, ReturnType, resolve_static, resolve_with_separator,
};
use proptest::prelude::*;

fn separator_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ |,;/-]{1,4}").unwrap()
}

proptest! {
    #[test]
    fn stringified_integers_never_match(n in any::<i64>()) {
        let registry = registry();
        let result = resolve_static(
            &registry,
            "NonUniqueValueConstants",
            n.to_string(),
            &ReturnType::JOINED,
            " or ",
        );
        let is_no_match = matches!(result, Err(ResolveError::NoMatchingConstant { .. }));
        prop_assert!(is_no_match);
    }

    #[test]
    fn other_integers_never_match(n in any::<i64>().prop_filter("declared value", |n| *n != 100)) {
        let registry = registry();
        let result = resolve_static(
            &registry,
            "NonUniqueValueConstants",
            n,
            &ReturnType::MAPPING,
            " or ",
        );
        let is_no_match = matches!(result, Err(ResolveError::NoMatchingConstant { .. }));
        prop_assert!(is_no_match);
    }

    #[test]
    fn floats_never_match_integers(x in any::<f64>()) {
        let registry = registry();
        let result = resolve_with_separator(&registry, "UniqueValueConstants", x, " or ");
        prop_assert!(result.is_err());
    }

    #[test]
    fn joined_matches_mapping_labels(sep in separator_strategy()) {
        let registry = registry();
        for binding in NonUniqueValueConstants::constants() {
            let value: ConstValue = binding.value().clone();
            let joined = resolve_static(
                &registry,
                "NonUniqueValueConstants",
                value.clone(),
                &ReturnType::JOINED,
                &sep,
            )
            .unwrap()
            .into_joined()
            .unwrap();
            let mapping = resolve_static(
                &registry,
                "NonUniqueValueConstants",
                value,
                &ReturnType::MAPPING,
                &sep,
            )
            .unwrap()
            .into_mapping()
            .unwrap();

            prop_assert_eq!(joined.split(sep.as_str()).collect::<Vec<_>>(), mapping.labels().collect::<Vec<_>>());
            let expected = binding.qualified("NonUniqueValueConstants");
            prop_assert_eq!(mapping.get(binding.name()), Some(expected.as_str()));
        }
    }

    #[test]
    fn resolution_is_idempotent(sep in separator_strategy(), use_mapping in any::<bool>()) {
        let registry = registry();
        let return_type = if use_mapping { ReturnType::MAPPING } else { ReturnType::JOINED };
        let first = resolve_static(&registry, "ZipArchive", 1, &return_type, &sep).unwrap();
        let second = resolve_static(&registry, "ZipArchive", 1, &return_type, &sep).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn unknown_return_types_are_rejected(name in "[a-z]{1,12}") {
        let registry = registry();
        let result = resolve_static(
            &registry,
            "UniqueValueConstants",
            100,
            &ReturnType::named(name),
            " or ",
        );
        let is_invalid = matches!(result, Err(ResolveError::InvalidConfiguration(_)));
        prop_assert!(is_invalid);
    }
}
