//! Generator error type.
//!
//! Every variant is fatal to the run: nothing is written to the output path once one of these has
//! been produced.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::backend::emit::EmitError;

/// Errors raised while discovering, loading, emitting, validating or writing spec tests.
#[derive(Debug, Error, Diagnostic)]
pub enum GenError {
    #[error("failed to walk spec tree {}", .root.display())]
    #[diagnostic(code(specgen::walk), help("check that the spec root exists and is readable"))]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read spec document {}", .path.display())]
    #[diagnostic(code(specgen::read))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed spec document {}: {source}", .path.display())]
    #[diagnostic(code(specgen::parse))]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to emit the harness preamble: {source}")]
    #[diagnostic(code(specgen::preamble))]
    Preamble {
        #[source]
        source: EmitError,
    },

    #[error("cannot emit case `{case}` from {}: {source}", .path.display())]
    #[diagnostic(code(specgen::emit))]
    Emit {
        path: PathBuf,
        case: String,
        #[source]
        source: EmitError,
    },

    #[error("two cases map to the test routine `{ident}`: {first} and {second}")]
    #[diagnostic(
        code(specgen::duplicate_identifier),
        help("case names only lose spaces, hyphens and parentheses; rename one of the cases")
    )]
    DuplicateIdentifier { ident: String, first: String, second: String },

    #[error("generated source is not valid Rust: {message}\n{source_text}")]
    #[diagnostic(code(specgen::syntax))]
    Syntax { message: String, source_text: String },

    #[error("failed to write {}", .path.display())]
    #[diagnostic(code(specgen::write))]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
