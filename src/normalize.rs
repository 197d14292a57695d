//! Normalization pipeline: parse, sort, serialize, verify
//!
//! A YAML source is treated as a stream of zero or more documents. Each
//! document is key-sorted recursively and re-serialized with a fixed style,
//! so the same input text always yields the same output text.
//!
//! Before a file is overwritten, [`is_stable`] re-parses the normalized
//! output and compares it structurally against the original stream.
//! Normalization must only change textual layout and key order, never the
//! parsed meaning.

use serde::Deserialize;
use serde_yaml::Value;

use crate::error::Result;
use crate::sort::sort_by_key;

/// Parse a YAML source into its stream of documents.
///
/// Blank input is an empty stream, not a single null document.
///
/// # Errors
///
/// Returns the underlying `serde_yaml` error when any document in the
/// stream is syntactically invalid.
pub fn parse_stream(input: &str) -> Result<Vec<Value>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    let mut documents = Vec::new();
    for document in serde_yaml::Deserializer::from_str(input) {
        documents.push(Value::deserialize(document)?);
    }
    Ok(documents)
}

/// Transform a YAML source into its normalized form.
///
/// Every document in the stream is sorted recursively by key string and
/// serialized deterministically, preceded by the `---` document marker.
/// Outputs are concatenated in stream order.
///
/// # Example
///
/// ```
/// use yaml_normalizer::normalize::normalize_yaml;
///
/// let normalized = normalize_yaml("b: 2\na: 1\n").unwrap();
/// assert_eq!(normalized, "---\na: 1\nb: 2\n");
/// ```
pub fn normalize_yaml(input: &str) -> Result<String> {
    let mut output = String::new();
    for document in parse_stream(input)? {
        let sorted = sort_by_key(&document, true);
        output.push_str("---\n");
        output.push_str(&serde_yaml::to_string(&sorted)?);
    }
    Ok(output)
}

/// Whether `input` is already in normalized form, bit for bit.
pub fn is_normalized(input: &str) -> Result<bool> {
    Ok(input == normalize_yaml(input)?)
}

/// Whether `normalized` parses to the same document stream as `original`.
///
/// Compares parsed values for deep structural equality, not text. This is
/// the safety gate before any rewrite: an unparseable side or a structural
/// difference means the rewrite must not happen.
pub fn is_stable(original: &str, normalized: &str) -> bool {
    match (parse_stream(original), parse_stream(normalized)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
