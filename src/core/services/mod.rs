//! Normalization services
//!
//! Pure logic that operates on raw output lines. No subprocess or
//! filesystem access; working directories are passed in.
//!
//! - [`normalizer`] - Split raw diagnostic lines and anchor their paths

pub mod normalizer;

pub use normalizer::{DiagnosticLine, normalize_line};
