//! Issue model
//!
//! An issue is one normalized diagnostic: where it is and what it says.
//! Issues are constructed once per accepted output line, emitted
//! immediately, and never stored.

use serde::{Deserialize, Serialize};

/// A single normalized diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// File path, relative to the resolving working directory.
    /// Empty when the issue carries no positional information.
    #[serde(default)]
    pub path: String,

    /// 1-based line number; 0 when the issue carries no position
    #[serde(default)]
    pub line: u32,

    /// Column number; 0 means the tool did not report one
    #[serde(default)]
    pub column: u32,

    /// Diagnostic text
    pub message: String,
}

impl Issue {
    /// Create an issue anchored at a file position
    #[must_use]
    pub const fn positioned(path: String, line: u32, column: u32, message: String) -> Self {
        Self { path, line, column, message }
    }

    /// Create an issue that is only a message (synthetic failure reports,
    /// pass-through of lines that match no known shape)
    #[must_use]
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            path: String::new(),
            line: 0,
            column: 0,
            message: message.into(),
        }
    }

    /// Whether this issue carries positional information
    #[must_use]
    pub fn is_positioned(&self) -> bool {
        !self.path.is_empty()
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_positioned() {
            write!(f, "{}:{}:{}: {}", self.path, self.line, self.column, self.message)
        } else {
            f.write_str(&self.message)
        }
    }
}
