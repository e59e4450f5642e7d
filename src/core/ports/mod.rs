//! Port traits (interfaces) for the host-facing contract
//!
//! The host orchestrator schedules many interchangeable checkers behind a
//! single capability set. The trait here is that boundary; the concrete
//! adapter lives in the `adapters` module.

mod checker;

pub use checker::Checker;
