//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use vetshim::output::OutputMode;

use super::commands;

/// vetshim - go vet diagnostics in canonical form
#[derive(Parser, Debug)]
#[command(
    name = "vetshim",
    version,
    about = "Runs go vet and normalizes its diagnostics for check orchestrators",
    long_about = "Runs go vet over the given package targets and rewrites its\n\
                  output into canonical path:line:column: message lines, with\n\
                  paths anchored at the invocation working directory."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the check over package targets
    Check {
        /// Package targets to analyze, in order
        targets: Vec<String>,

        /// Project directory (defaults to the current directory)
        #[arg(long)]
        project_dir: Option<PathBuf>,

        /// Checker config file (defaults to .vetshim.toml in the project
        /// directory, when present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Emit one JSON object per issue instead of text lines
        #[arg(long)]
        json: bool,
    },

    /// Print the identifier this checker registers under
    Type,

    /// Print the scheduling priority of this checker
    Priority,

    /// Invoke the underlying tool directly, streaming raw output
    Raw {
        /// Arguments passed to the tool verbatim
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    match cli.command {
        Command::Check {
            targets,
            project_dir,
            config,
            json,
        } => {
            let mode = if json { OutputMode::Json } else { OutputMode::Text };
            commands::check(&targets, project_dir, config, mode)
        },
        Command::Type => commands::type_name(),
        Command::Priority => commands::priority(),
        Command::Raw { args } => commands::raw(&args),
    }
}
