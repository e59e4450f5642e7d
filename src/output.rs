//! Output modes for the CLI
//!
//! The default text mode passes the canonical `path:line:column: message`
//! lines through untouched - downstream tooling parses that exact shape.
//! The JSON mode re-encodes each line as one JSON object for consumers
//! that prefer structured records. Either way the sink counts what it
//! emits, because the exit status depends on whether anything was.

use std::io::{self, Write};

use crate::core::models::Issue;
use crate::core::services::DiagnosticLine;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Canonical text lines (default)
    #[default]
    Text,
    /// One JSON object per issue
    Json,
}

/// A sink that counts issue lines and applies the output mode
///
/// Checkers write newline-terminated issue lines into their sink; this
/// adapter splits the byte stream back into lines so each can be counted
/// and, in JSON mode, re-encoded.
#[derive(Debug)]
pub struct IssueSink<W: Write> {
    inner: W,
    mode: OutputMode,
    pending: Vec<u8>,
    issues: usize,
}

impl<W: Write> IssueSink<W> {
    /// Wrap a writer in an issue-counting sink
    pub fn new(inner: W, mode: OutputMode) -> Self {
        Self {
            inner,
            mode,
            pending: Vec::new(),
            issues: 0,
        }
    }

    /// Number of complete issue lines emitted so far
    #[must_use]
    pub const fn issue_count(&self) -> usize {
        self.issues
    }

    fn emit_line(&mut self, line: &str) -> io::Result<()> {
        self.issues += 1;
        match self.mode {
            OutputMode::Text => writeln!(self.inner, "{line}"),
            OutputMode::Json => {
                let issue = decode_line(line);
                let encoded = serde_json::to_string(&issue).map_err(io::Error::other)?;
                writeln!(self.inner, "{encoded}")
            },
        }
    }
}

impl<W: Write> Write for IssueSink<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        while let Some(pos) = self.pending.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=pos).collect();
            let text = String::from_utf8_lossy(&line[..line.len() - 1]).into_owned();
            self.emit_line(&text)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.pending.is_empty() {
            let text = String::from_utf8_lossy(&self.pending).into_owned();
            self.pending.clear();
            self.emit_line(&text)?;
        }
        self.inner.flush()
    }
}

/// Rebuild an [`Issue`] from an already-normalized output line
///
/// Paths in the incoming line are anchored already, so no working
/// directory is involved here.
fn decode_line(line: &str) -> Issue {
    match DiagnosticLine::parse(line) {
        Some(diag) if diag.line >= 1 => {
            Issue::positioned(diag.path, diag.line, diag.column.unwrap_or(0), diag.message)
        },
        _ => Issue::from_message(line),
    }
}
