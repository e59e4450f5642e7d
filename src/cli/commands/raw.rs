//! Raw tool invocation

use std::io;

use anyhow::Context;

use vetshim::adapters::govet::GovetChecker;
use vetshim::config::CheckConfig;
use vetshim::core::ports::Checker;

/// Invoke the underlying tool with the given arguments, streaming its
/// merged output to stdout unfiltered
///
/// Honors a `.vetshim.toml` in the current directory so the same tool
/// override used by `check` applies here.
pub fn raw(args: &[String]) -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine working directory")?;
    let config = CheckConfig::load_or_default(&cwd)?;
    let checker = GovetChecker::from_config(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    checker.run_check_cmd(args, &mut out);
    Ok(())
}
