//! The `go vet` checker
//!
//! Wraps `go vet` behind the [`Checker`] port. The adapter owns the
//! tool-specific policy: which output lines are process noise, how targets
//! must be shaped before the tool accepts them, and where the working
//! directory that anchors reported paths comes from.

use std::env;
use std::io::Write;
use std::path::Path;
use std::process::Command;

use regex::Regex;

use crate::adapters::process;
use crate::config::{CheckConfig, ConfigError, DEFAULT_TOOL};
use crate::core::models::{CheckerPriority, CheckerType, Issue};
use crate::core::ports::Checker;
use crate::core::services::normalizer;

/// Identifier this checker registers under
pub const TYPE_NAME: CheckerType = CheckerType("govet");

/// Scheduling priority relative to other checkers
pub const PRIORITY: CheckerPriority = 0;

/// Line the `go` driver prints when vet exits non-zero. Process-exit
/// noise, not a diagnostic.
const EXIT_STATUS_LINE: &str = "exit status 1";

/// Package and compilation-context headers from the go tool start with
/// this marker.
const CONTEXT_MARKER: char = '#';

/// The `go vet` checker
#[derive(Debug)]
pub struct GovetChecker {
    tool: String,
    excludes: Vec<Regex>,
}

impl GovetChecker {
    /// Create a checker with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            tool: DEFAULT_TOOL.to_string(),
            excludes: Vec::new(),
        }
    }

    /// Create a checker from a loaded configuration
    pub fn from_config(config: &CheckConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            tool: config.tool.clone(),
            excludes: config.compile_excludes()?,
        })
    }

    /// Decide what one raw output line becomes, if anything
    ///
    /// Rules, first match wins: the exit-status sentinel and context
    /// headers are suppressed; everything else is normalized and then
    /// checked against the exclude filters.
    fn classify(&self, line: &str, wd: &Path) -> Option<Issue> {
        if line == EXIT_STATUS_LINE {
            return None;
        }
        if line.starts_with(CONTEXT_MARKER) {
            return None;
        }
        let issue = normalizer::normalize_line(line, wd);
        let rendered = issue.to_string();
        if self.excludes.iter().any(|filter| filter.is_match(&rendered)) {
            log::debug!("issue suppressed by exclude filter: {rendered}");
            return None;
        }
        Some(issue)
    }

    fn vet_command(&self) -> Command {
        let mut cmd = Command::new(&self.tool);
        cmd.arg("vet");
        cmd
    }
}

impl Default for GovetChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl Checker for GovetChecker {
    fn type_name(&self) -> CheckerType {
        TYPE_NAME
    }

    fn priority(&self) -> CheckerPriority {
        PRIORITY
    }

    fn check(&self, targets: &[String], _project_dir: &Path, out: &mut dyn Write) {
        let wd = match env::current_dir() {
            Ok(wd) => wd,
            Err(err) => {
                process::write_issue(
                    out,
                    &Issue::from_message(format!("failed to determine working directory: {err}")),
                );
                return;
            },
        };

        let mut cmd = self.vet_command();
        cmd.args(normalize_targets(targets));
        process::run_and_stream(cmd, |line| self.classify(line, &wd), out);
    }

    fn run_check_cmd(&self, args: &[String], out: &mut dyn Write) {
        let mut cmd = self.vet_command();
        cmd.args(args);
        process::run_and_stream(cmd, |line| Some(Issue::from_message(line)), out);
    }
}

/// Rewrite target specifiers the tool would reject
///
/// `go vet` refuses specifiers that start with `./..` because it does not
/// consider that shape canonical, even though the equivalent path without
/// the leading `./` is accepted. Order is preserved.
fn normalize_targets(targets: &[String]) -> Vec<String> {
    targets
        .iter()
        .map(|target| match target.strip_prefix("./") {
            Some(rest) if rest.starts_with("..") => rest.to_string(),
            _ => target.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_all(checker: &GovetChecker, lines: &[&str]) -> Vec<String> {
        lines
            .iter()
            .filter_map(|line| checker.classify(line, Path::new("/proj")))
            .map(|issue| issue.to_string())
            .collect()
    }

    #[test]
    fn doubly_relative_target_loses_leading_curdir() {
        let targets = vec!["./../bar".to_string()];
        assert_eq!(normalize_targets(&targets), vec!["../bar".to_string()]);
    }

    #[test]
    fn plain_ascent_target_is_unchanged() {
        let targets = vec!["../bar".to_string()];
        assert_eq!(normalize_targets(&targets), vec!["../bar".to_string()]);
    }

    #[test]
    fn single_curdir_target_is_unchanged() {
        let targets = vec!["./bar".to_string()];
        assert_eq!(normalize_targets(&targets), vec!["./bar".to_string()]);
    }

    #[test]
    fn rewrite_preserves_order() {
        let targets = vec![
            "./../sibling".to_string(),
            "./pkg".to_string(),
            "./../other".to_string(),
        ];
        assert_eq!(
            normalize_targets(&targets),
            vec!["../sibling".to_string(), "./pkg".to_string(), "../other".to_string()]
        );
    }

    #[test]
    fn exit_status_sentinel_is_suppressed() {
        let checker = GovetChecker::new();
        assert!(checker.classify("exit status 1", Path::new("/proj")).is_none());
    }

    #[test]
    fn context_header_is_suppressed() {
        let checker = GovetChecker::new();
        assert!(checker.classify("# example.com/pkg/bar", Path::new("/proj")).is_none());
    }

    #[test]
    fn diagnostic_line_gains_zero_column() {
        let checker = GovetChecker::new();
        let issue = checker
            .classify("foo.go:7: Printf format %s has arg num of wrong type int", Path::new("/proj"))
            .unwrap();
        assert_eq!(
            issue.to_string(),
            "foo.go:7:0: Printf format %s has arg num of wrong type int"
        );
    }

    #[test]
    fn unrecognized_line_passes_through() {
        let checker = GovetChecker::new();
        let issue = checker.classify("vet: cannot find package", Path::new("/proj")).unwrap();
        assert_eq!(issue.to_string(), "vet: cannot find package");
    }

    #[test]
    fn exclude_filter_suppresses_matching_issue() {
        let config = CheckConfig {
            tool: DEFAULT_TOOL.to_string(),
            exclude: vec!["wrong type".to_string()],
        };
        let checker = GovetChecker::from_config(&config).unwrap();
        assert!(
            checker
                .classify("foo.go:7: Printf arg of wrong type int", Path::new("/proj"))
                .is_none()
        );
        assert!(checker.classify("foo.go:9: unreachable code", Path::new("/proj")).is_some());
    }

    #[test]
    fn stream_order_is_preserved() {
        let checker = GovetChecker::new();
        let rendered = classify_all(
            &checker,
            &[
                "# example.com/pkg",
                "a.go:1: first",
                "b.go:2: second",
                "exit status 1",
                "c.go:3: third",
            ],
        );
        assert_eq!(rendered, vec!["a.go:1:0: first", "b.go:2:0: second", "c.go:3:0: third"]);
    }
}
