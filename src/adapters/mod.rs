//! Adapter implementations around the core
//!
//! This module contains the code that touches the outside world:
//!
//! - `process/` - Subprocess spawning and line-by-line output streaming
//! - `govet/` - The `go vet` checker implementing the [`Checker`] port
//!
//! [`Checker`]: crate::core::ports::Checker

pub mod govet;
pub mod process;
