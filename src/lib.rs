//! # YAML Normalizer Library
//!
//! This library provides the core functionality for normalizing YAML files
//! into a canonical textual form. It is designed to be used by the
//! `yaml-normalizer` command-line tool but can also be integrated into other
//! applications that need deterministic YAML output.
//!
//! ## Quick Example
//!
//! ```
//! use yaml_normalizer::normalize::{is_stable, normalize_yaml};
//!
//! let input = "b:\n  z: 20\n  x: 10\na: ~\n";
//! let normalized = normalize_yaml(input).unwrap();
//!
//! // Keys are sorted at every nesting level
//! assert_eq!(normalized, "---\na: null\nb:\n  x: 10\n  z: 20\n");
//!
//! // Normalization never changes what the documents mean
//! assert!(is_stable(input, &normalized));
//! ```
//!
//! ## Core Concepts
//!
//! - **Key Sorting (`sort`)**: Recursively reorders every mapping's keys by
//!   their string rendering, so numbers, booleans and strings interleave by
//!   textual form.
//! - **Flatten/Unflatten (`flat`)**: Converts between nested mappings and
//!   flat dot-joined key namespaces.
//! - **Normalization Pipeline (`normalize`)**: Parses a document stream,
//!   sorts each document, re-serializes deterministically, and verifies
//!   that the output still parses to the same values as the input.
//! - **Classification (`classify`)**: Decides per file whether it is
//!   eligible for normalization.
//! - **Batch Runner (`batch`)**: Fans the check and rewrite operations out
//!   over the resolved file list in parallel and aggregates the results.
//!
//! ## Safety Guarantee
//!
//! A file is only ever overwritten after the stability check confirmed that
//! the normalized text parses back to a document stream structurally equal
//! to the original. Unverified output is never written.

pub mod batch;
pub mod classify;
pub mod error;
pub mod flat;
pub mod normalize;
pub mod output;
pub mod path;
pub mod sort;

#[cfg(test)]
mod normalize_proptest;
