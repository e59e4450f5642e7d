//! vetshim - runs `go vet` and normalizes its diagnostics for check
//! orchestrators
//!
//! The binary is a thin shell over the library: parse arguments, wire up
//! the checker, and map outcomes to exit codes (0 clean, 1 issues found,
//! 2 invocation error).

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

mod cli;

/// Exit code for invocation errors; findings exit with 1
const ERROR_EXIT_CODE: i32 = 2;

/// Main entry point for the vetshim CLI
fn main() {
    if let Err(err) = cli::run() {
        eprintln!("Error: {err:#}");
        std::process::exit(ERROR_EXIT_CODE);
    }
}
