#![forbid(unsafe_code)]
//! Mustache spec test generator
//!
//! Reads the language-agnostic mustache conformance corpus (JSON spec documents) and writes one
//! Rust source file with a `#[test]` routine per case. The generated routines call a renderer
//! `render(&str, &serde_json::Value) -> String` and compare its output with the expected text.
//!
//! The generator never runs the tests or the renderer itself.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` with `?` / `map_err`. The `cli` and `backend` modules enforce
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **Generated code**: The harness emits `panic!` on a mismatch as part of the *generated* file;
//!   that is how a single routine reports failure.

pub mod backend;
pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod harness;
pub mod spec;
pub mod version;

pub use config::GeneratorConfig;
pub use driver::{GeneratedArtifact, Generator, RunSummary};
pub use error::GenError;
pub use spec::{DataValue, SpecCase, SpecDocument, TopicFilter};
