//! Recursive key sorting for YAML values
//!
//! This module implements the canonical ordering applied during
//! normalization: every mapping's keys are sorted ascending by their string
//! rendering, recursively through nested mappings.
//!
//! ## Ordering semantics
//!
//! - Keys are compared by [`key_string`], not by their native type ordering,
//!   so numbers, booleans and strings interleave by textual form
//!   (`1 < false < two`).
//! - The sort is stable: two distinct keys with identical string renderings
//!   (e.g. the number `1` and the string `"1"`) keep their original relative
//!   order.
//! - Only mapping nesting is descended. Sequence elements are left exactly
//!   as parsed, even when they are themselves mappings.
//!
//! Sorting never mutates its input; it builds a fresh value tree.

use serde_yaml::{Mapping, Value};

/// Canonical string rendering of a mapping key.
///
/// Strings render as themselves, booleans and numbers via their display
/// form, null as the empty string. Composite keys (sequences or mappings
/// used as keys) fall back to their debug rendering, which is stable for
/// equal values.
pub fn key_string(key: &Value) -> String {
    match key {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => format!("{:?}", other),
    }
}

/// Return a copy of `value` with every mapping's keys sorted by string form.
///
/// Scalars, sequences and tagged values are returned structurally unchanged.
/// When `recursive` is true the sort descends into mapping values; otherwise
/// only the first level is reordered.
///
/// # Example
///
/// ```
/// use yaml_normalizer::sort::sort_by_key;
///
/// let value: serde_yaml::Value = serde_yaml::from_str("{b: 2, a: 1}").unwrap();
/// let sorted = sort_by_key(&value, true);
/// assert_eq!(serde_yaml::to_string(&sorted).unwrap(), "a: 1\nb: 2\n");
/// ```
pub fn sort_by_key(value: &Value, recursive: bool) -> Value {
    match value {
        Value::Mapping(mapping) => Value::Mapping(sort_mapping(mapping, recursive)),
        other => other.clone(),
    }
}

fn sort_mapping(mapping: &Mapping, recursive: bool) -> Mapping {
    let mut entries: Vec<(String, &Value, &Value)> = mapping
        .iter()
        .map(|(key, value)| (key_string(key), key, value))
        .collect();
    // Stable sort preserves the relative order of keys whose string
    // renderings collide.
    entries.sort_by(|(a, _, _), (b, _, _)| a.cmp(b));

    let mut sorted = Mapping::new();
    for (_, key, value) in entries {
        let value = match value {
            Value::Mapping(child) if recursive => Value::Mapping(sort_mapping(child, true)),
            other => other.clone(),
        };
        sorted.insert(key.clone(), value);
    }
    sorted
}
