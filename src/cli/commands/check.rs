//! Run the check over package targets

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;

use vetshim::adapters::govet::GovetChecker;
use vetshim::config::CheckConfig;
use vetshim::core::ports::Checker;
use vetshim::output::{IssueSink, OutputMode};

/// Run `go vet` over `targets`, writing normalized issues to stdout
///
/// Exits the process with status 1 when any issue line was written; that
/// is how orchestrators gate on checker output.
pub fn check(
    targets: &[String],
    project_dir: Option<PathBuf>,
    config_path: Option<PathBuf>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let project_dir = match project_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("failed to determine working directory")?,
    };

    let config = match config_path {
        Some(path) => CheckConfig::load(&path)?,
        None => CheckConfig::load_or_default(&project_dir)?,
    };
    let checker = GovetChecker::from_config(&config)?;

    let stdout = io::stdout();
    let mut sink = IssueSink::new(stdout.lock(), mode);
    checker.check(targets, &project_dir, &mut sink);
    sink.flush().context("failed to flush output")?;

    if sink.issue_count() > 0 {
        std::process::exit(1);
    }
    Ok(())
}
