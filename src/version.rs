//! Generator version information.
//!
//! The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time. Prefer this
//! constant over repeating `env!("CARGO_PKG_VERSION")`.

/// The generator version string (for example, `0.1.0`).
pub const SPECGEN_VERSION: &str = env!("CARGO_PKG_VERSION");
