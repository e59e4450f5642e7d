//! vetshim - a diagnostic adapter that runs `go vet` and normalizes its
//! output for check orchestrators
//!
//! This library wraps the external `go vet` tool: it spawns the tool over a
//! set of package targets, streams the merged stdout/stderr line-by-line,
//! suppresses process noise, repairs missing column information, and anchors
//! file paths against the invocation working directory so that a host
//! orchestrator can aggregate issues from many adapters consistently.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
