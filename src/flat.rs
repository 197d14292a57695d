//! Flatten and unflatten transforms for nested mappings
//!
//! A nested mapping can be rendered as a flat mapping whose keys are the
//! dot-joined paths to each leaf ([`namespaced`]), and a flat mapping can be
//! rebuilt into its tree shape ([`nested`]). The two transforms are inverse
//! of each other for mappings whose keys contain no literal `.` and whose
//! nested values are not empty mappings.
//!
//! Empty sub-mappings have no representation in the dot-flattened form, so
//! `namespaced` drops them. Keys that stringify with an embedded `.` would
//! collide with a path segment boundary; that limitation is accepted rather
//! than masked.
//!
//! Neither transform mutates its input.

use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};
use crate::sort::key_string;

/// Flatten a nested mapping into dot-joined leaf entries.
///
/// Every non-mapping value is recorded under the full path of keys leading
/// to it, joined with `.`. Keys are coerced to their string rendering.
///
/// # Example
///
/// ```
/// use yaml_normalizer::flat::namespaced;
///
/// let value: serde_yaml::Value =
///     serde_yaml::from_str("{a: {b: {c: 1}}, b: {x: 2, y: {ok: true}, z: 4}}").unwrap();
/// let flat = namespaced(value.as_mapping().unwrap());
/// assert_eq!(flat.len(), 4);
/// assert_eq!(flat[&serde_yaml::Value::String("a.b.c".into())], 1);
/// ```
pub fn namespaced(mapping: &Mapping) -> Mapping {
    let mut flat = Mapping::new();
    collect(mapping, &mut Vec::new(), &mut flat);
    flat
}

fn collect(mapping: &Mapping, namespace: &mut Vec<String>, flat: &mut Mapping) {
    for (key, value) in mapping {
        namespace.push(key_string(key));
        match value {
            Value::Mapping(child) => collect(child, namespace, flat),
            leaf => {
                flat.insert(Value::String(namespace.join(".")), leaf.clone());
            }
        }
        namespace.pop();
    }
}

/// Rebuild a tree-shaped mapping from flat dot-joined keys.
///
/// All segments of a key but the last name intermediate mappings, created
/// on demand during construction; the last segment holds the leaf value.
/// A key without a `.` is inserted as a top-level leaf. Keys are coerced to
/// their string rendering on insertion.
///
/// The returned mapping is an ordinary [`Mapping`]: the get-or-create used
/// during construction is not observable afterwards, and looking up an
/// absent key yields nothing.
///
/// # Errors
///
/// Returns [`Error::FlatKeyConflict`] when a path segment that should be an
/// intermediate mapping already holds a non-mapping leaf, or when a leaf
/// would land on a path already occupied by an intermediate mapping. The
/// conflict is never resolved by silently overwriting.
pub fn nested(flat: &Mapping) -> Result<Mapping> {
    let mut tree = Mapping::new();
    for (key, value) in flat {
        nest_key(&mut tree, &key_string(key), value)?;
    }
    Ok(tree)
}

fn nest_key(tree: &mut Mapping, key: &str, value: &Value) -> Result<()> {
    let mut current = tree;
    let mut walked: Vec<&str> = Vec::new();
    let mut segments = key.split('.').peekable();

    while let Some(segment) = segments.next() {
        walked.push(segment);

        if segments.peek().is_none() {
            if matches!(
                current.get(&Value::String(segment.to_string())),
                Some(Value::Mapping(_))
            ) {
                return Err(Error::FlatKeyConflict {
                    path: walked.join("."),
                });
            }
            current.insert(Value::String(segment.to_string()), value.clone());
            return Ok(());
        }

        let entry = current
            .entry(Value::String(segment.to_string()))
            .or_insert_with(|| Value::Mapping(Mapping::new()));
        current = match entry {
            Value::Mapping(child) => child,
            _ => {
                return Err(Error::FlatKeyConflict {
                    path: walked.join("."),
                })
            }
        };
    }

    Ok(())
}
