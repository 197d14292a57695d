//! Property-based tests for the normalization pipeline.
//!
//! These tests use proptest to generate random YAML value trees and verify
//! that the pipeline's invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::flat::{namespaced, nested};
    use crate::normalize::{is_stable, normalize_yaml};
    use crate::sort::{key_string, sort_by_key};
    use proptest::prelude::*;
    use serde_yaml::{Mapping, Value};

    fn scalar() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| Value::Number(n.into())),
            "[a-z]{0,8}".prop_map(Value::String),
        ]
    }

    /// Arbitrary YAML document: scalars, sequences and mappings up to a
    /// small bounded depth.
    fn document() -> impl Strategy<Value = Value> {
        scalar().prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Sequence),
                prop::collection::vec(("[a-z]{1,6}", inner), 0..4).prop_map(|entries| {
                    let mut mapping = Mapping::new();
                    for (key, value) in entries {
                        mapping.insert(Value::String(key), value);
                    }
                    Value::Mapping(mapping)
                }),
            ]
        })
    }

    /// Mapping with dot-free string keys, scalar leaves and no empty
    /// sub-mappings: the domain on which flatten/unflatten round-trips.
    fn flattenable_mapping() -> impl Strategy<Value = Mapping> {
        scalar()
            .prop_recursive(3, 24, 3, |inner| {
                prop::collection::vec(("[a-z]{1,6}", inner), 1..4).prop_map(|entries| {
                    let mut mapping = Mapping::new();
                    for (key, value) in entries {
                        mapping.insert(Value::String(key), value);
                    }
                    Value::Mapping(mapping)
                })
            })
            .prop_map(|value| match value {
                Value::Mapping(mapping) => mapping,
                other => {
                    let mut mapping = Mapping::new();
                    mapping.insert(Value::String("leaf".to_string()), other);
                    mapping
                }
            })
    }

    /// Every mapping reachable through mapping nesting has its keys in
    /// ascending string order.
    fn keys_sorted_recursively(value: &Value) -> bool {
        match value {
            Value::Mapping(mapping) => {
                let keys: Vec<String> = mapping.iter().map(|(k, _)| key_string(k)).collect();
                keys.windows(2).all(|pair| pair[0] <= pair[1])
                    && mapping.iter().all(|(_, v)| keys_sorted_recursively(v))
            }
            _ => true,
        }
    }

    proptest! {
        /// Property: normalizing twice yields the same text as normalizing once
        #[test]
        fn normalize_is_idempotent(doc in document()) {
            let text = serde_yaml::to_string(&doc).unwrap();
            let once = normalize_yaml(&text).unwrap();
            let twice = normalize_yaml(&once).unwrap();
            prop_assert_eq!(once, twice);
        }

        /// Property: normalization never changes the parsed meaning
        #[test]
        fn normalize_is_stable(doc in document()) {
            let text = serde_yaml::to_string(&doc).unwrap();
            let normalized = normalize_yaml(&text).unwrap();
            prop_assert!(is_stable(&text, &normalized));
        }

        /// Property: sorted output has ascending key strings at every
        /// mapping level
        #[test]
        fn sort_orders_all_mapping_levels(doc in document()) {
            let sorted = sort_by_key(&doc, true);
            prop_assert!(keys_sorted_recursively(&sorted));
        }

        /// Property: sorting is structure-preserving (same parsed value)
        #[test]
        fn sort_preserves_structure(doc in document()) {
            let sorted = sort_by_key(&doc, true);
            prop_assert_eq!(sorted, doc);
        }

        /// Property: sorting leaves its input untouched
        #[test]
        fn sort_does_not_mutate_input(doc in document()) {
            let snapshot = doc.clone();
            let _ = sort_by_key(&doc, true);
            prop_assert_eq!(doc, snapshot);
        }

        /// Property: unflatten(flatten(m)) recovers m on the flattenable domain
        #[test]
        fn flatten_round_trips(mapping in flattenable_mapping()) {
            let tree = nested(&namespaced(&mapping)).unwrap();
            prop_assert_eq!(tree, mapping);
        }

        /// Property: flattening produces only non-mapping leaves
        #[test]
        fn flatten_produces_no_mappings(mapping in flattenable_mapping()) {
            let flat = namespaced(&mapping);
            for (_, value) in &flat {
                prop_assert!(!matches!(value, Value::Mapping(_)));
            }
        }
    }
}
