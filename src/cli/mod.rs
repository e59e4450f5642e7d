//! Command-line interface
//!
//! - [`app`] - clap definitions and dispatch
//! - `commands/` - One module per subcommand

mod app;
mod commands;

pub use app::run;
