//! Test Generator Backend
//!
//! This module turns parsed spec cases into Rust source text.
//!
//! The pipeline is:
//! 1. Preamble (harness support + `test_spec`) → `RustEmitter` buffer
//! 2. One `#[test]` routine per spec case → same buffer
//! 3. The driver validates and formats the buffer with `syn` + `prettyplease`
//!
//! ## Module Organization
//!
//! - `emit/` - Preamble, case and literal emission
//! - `ident.rs` - Case name → routine identifier
//! - `rust_emitter.rs` - Low-level Rust code string builder

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod emit;
pub mod ident;
pub mod rust_emitter;

pub use emit::EmitError;
pub use rust_emitter::RustEmitter;
