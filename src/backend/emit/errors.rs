//! Define error types for spec case → Rust emission.
//!
//! These errors represent *emission* failures (as opposed to loading or validation).
//!
//! ## Notes
//!
//! - Messages name the offending value so the spec corpus can be fixed directly.

/// Error during emission.
#[derive(Debug)]
pub enum EmitError {
    /// A data value has no Rust literal form (e.g. a non-finite float).
    Literal(String),
    /// The configured renderer path is not a Rust path.
    Renderer(String),
}

impl std::fmt::Display for EmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmitError::Literal(msg) => write!(f, "cannot write literal: {}", msg),
            EmitError::Renderer(msg) => write!(f, "invalid renderer path: {}", msg),
        }
    }
}

impl std::error::Error for EmitError {}
