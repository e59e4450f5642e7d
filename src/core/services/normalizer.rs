//! Diagnostic line normalization
//!
//! The external tool reports findings as `path:line: message` — no column.
//! The host's canonical format requires a column, so lines are split into
//! explicit fields and a missing column becomes `0`. Lines that match
//! neither shape pass through verbatim: a line we cannot classify with
//! confidence is never dropped.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::Issue;
use crate::paths;

static THREE_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+):([0-9]+):([0-9]+): (.+)$").expect("valid pattern"));

static TWO_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+):([0-9]+): (.+)$").expect("valid pattern"));

/// A raw diagnostic line split into its fields
///
/// `column` is `None` when the line carried no explicit column field; the
/// distinction is kept so that "missing column defaults to 0" is a visible
/// branch rather than a string splice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticLine {
    /// File path exactly as the tool printed it
    pub path: String,
    /// Line number as printed
    pub line: u32,
    /// Column number, if the line carried one
    pub column: Option<u32>,
    /// Remainder of the line after the position fields
    pub message: String,
}

impl DiagnosticLine {
    /// Split a line into position fields and message
    ///
    /// Tries the three-field shape (`path:line:column: message`) first so
    /// that an explicit column is never misread as part of the path, then
    /// the two-field shape. Returns `None` for anything else.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        if let Some(caps) = THREE_FIELD.captures(line) {
            return Some(Self {
                path: caps[1].to_string(),
                line: caps[2].parse().ok()?,
                column: Some(caps[3].parse().ok()?),
                message: caps[4].to_string(),
            });
        }
        let caps = TWO_FIELD.captures(line)?;
        Some(Self {
            path: caps[1].to_string(),
            line: caps[2].parse().ok()?,
            column: None,
            message: caps[3].to_string(),
        })
    }
}

/// Normalize one raw output line into an [`Issue`]
///
/// Positioned lines get their path anchored against `wd` and a column of
/// `0` when the tool emitted none. A parsed line number of 0 would violate
/// the 1-based line invariant, so such lines pass through verbatim, as
/// does anything that fails to parse.
#[must_use]
pub fn normalize_line(line: &str, wd: &Path) -> Issue {
    match DiagnosticLine::parse(line) {
        Some(diag) if diag.line >= 1 => Issue::positioned(
            resolve_path(&diag.path, wd),
            diag.line,
            diag.column.unwrap_or(0),
            diag.message,
        ),
        _ => Issue::from_message(line),
    }
}

/// Anchor a reported path against the working directory
///
/// Relative paths are joined onto `wd`; the result is folded lexically and
/// re-expressed relative to `wd`, ascending with `..` when the file lies
/// outside it. Sibling adapters emit the same shape, which keeps
/// aggregated output path-consistent.
fn resolve_path(raw: &str, wd: &Path) -> String {
    let reported = Path::new(raw);
    let absolute = if reported.is_absolute() {
        paths::normalize(reported)
    } else {
        paths::normalize(&wd.join(reported))
    };
    let relative = paths::relative_to(&absolute, &paths::normalize(wd));
    if relative.as_os_str().is_empty() {
        ".".to_string()
    } else {
        relative.display().to_string()
    }
}
