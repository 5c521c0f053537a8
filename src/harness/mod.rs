//! Runtime support shared by every generated test file.
//!
//! [`support`] is compiled into this crate so it can be tested here, and its source text is
//! embedded verbatim into each generated file by the preamble writer. Keep it self-contained:
//! `std` and `serde_json` only, no inner attributes or inner doc comments, no test modules.

pub mod support;

pub use support::{PartialFile, convert_html_chars_to_expected_format, data_array, data_object, generate_partial};

/// Source text of [`support`], as embedded into generated files.
pub const SUPPORT_SOURCE: &str = include_str!("support.rs");
