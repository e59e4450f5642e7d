//! Per-checker configuration
//!
//! An optional TOML file tunes one invocation of the checker: which
//! executable stands in for `go`, and which issues to drop. A missing
//! file means defaults; there is no schema versioning.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default executable invoked for checks
pub const DEFAULT_TOOL: &str = "go";

/// Name of the per-project configuration file
pub const CONFIG_FILE: &str = ".vetshim.toml";

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path of the file that failed to read
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        /// Path of the offending file
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// An exclude entry is not a valid regular expression
    #[error("invalid exclude pattern `{pattern}`: {source}")]
    InvalidExclude {
        /// The offending pattern
        pattern: String,
        /// Underlying regex error
        source: regex::Error,
    },
}

/// Checker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Executable to invoke; stand-in toolchains point this elsewhere
    pub tool: String,

    /// Regular expressions matched against rendered issue lines; matching
    /// issues are suppressed
    pub exclude: Vec<String>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            tool: DEFAULT_TOOL.to_string(),
            exclude: Vec::new(),
        }
    }
}

impl CheckConfig {
    /// Load configuration from an explicit path
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `.vetshim.toml` from the project directory if present,
    /// defaults otherwise
    pub fn load_or_default(project_dir: &Path) -> Result<Self, ConfigError> {
        let path = project_dir.join(CONFIG_FILE);
        if path.exists() { Self::load(&path) } else { Ok(Self::default()) }
    }

    /// Compile the exclude patterns, rejecting invalid ones up front
    pub fn compile_excludes(&self) -> Result<Vec<Regex>, ConfigError> {
        self.exclude
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| ConfigError::InvalidExclude {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect()
    }
}
