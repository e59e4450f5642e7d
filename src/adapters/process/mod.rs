//! Subprocess output streaming
//!
//! Runs the external tool and consumes its combined stdout/stderr as one
//! ordered stream of lines. Both child streams share a single anonymous
//! pipe, so interleaving matches emission order, and each line is handled
//! as it arrives - a caller that kills the invocation still sees
//! everything already flushed.

use std::io::{self, BufRead, BufReader, Write};
use std::process::Command;

use crate::core::models::Issue;

/// Run `cmd`, invoking `on_line` for each line of merged output
///
/// Issues returned by `on_line` are written to `out` immediately, one line
/// each. A failure to start the subprocess is reported as a single
/// synthetic issue and ends the run; the invocation is never retried. The
/// child's exit status is waited on but otherwise ignored - a non-zero
/// exit is the tool's normal signal that it found something.
pub fn run_and_stream<F>(mut cmd: Command, mut on_line: F, out: &mut dyn Write)
where
    F: FnMut(&str) -> Option<Issue>,
{
    log::debug!("running {cmd:?}");

    let (reader, writer) = match io::pipe() {
        Ok(pair) => pair,
        Err(err) => {
            write_issue(out, &Issue::from_message(format!("failed to capture tool output: {err}")));
            return;
        },
    };
    let stderr_writer = match writer.try_clone() {
        Ok(clone) => clone,
        Err(err) => {
            write_issue(out, &Issue::from_message(format!("failed to capture tool output: {err}")));
            return;
        },
    };
    cmd.stdout(writer).stderr(stderr_writer);

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(err) => {
            let program = cmd.get_program().to_string_lossy().into_owned();
            write_issue(out, &Issue::from_message(format!("failed to run {program}: {err}")));
            return;
        },
    };
    // The Command still holds the parent's copies of the pipe writers;
    // they must close before the reader can see EOF.
    drop(cmd);

    for line in BufReader::new(reader).lines() {
        match line {
            Ok(line) => {
                if let Some(issue) = on_line(&line) {
                    write_issue(out, &issue);
                }
            },
            Err(err) => {
                log::warn!("stopped reading tool output: {err}");
                break;
            },
        }
    }

    let _ = child.wait();
}

/// Write one issue line to the sink
///
/// The sink is the only reporting channel, so a failing sink can only be
/// logged; the stream continues.
pub fn write_issue(out: &mut dyn Write, issue: &Issue) {
    if let Err(err) = writeln!(out, "{issue}") {
        log::warn!("failed to write issue to sink: {err}");
    }
}
