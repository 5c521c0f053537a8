//! Emit Rust test source from spec documents.
//!
//! This module wires together the focused submodules that write the generated test file. All of
//! them append text to a [`RustEmitter`](crate::backend::rust_emitter::RustEmitter); none touch
//! the filesystem.
//!
//! ## See also
//! - [`preamble`]: shared harness written once per file
//! - [`case`]: one routine per spec case
//! - [`literal`]: string and data literal encoding

pub mod case;
mod errors;
pub mod literal;
pub mod preamble;

pub use case::emit_case;
pub use errors::EmitError;
pub use preamble::emit_preamble;
