//! Checker port
//!
//! Defines the capability set the host orchestrator expects from every
//! registered checker. Checkers are stateless and structurally identical;
//! the host distinguishes them only by identity and priority.

use std::io::Write;
use std::path::Path;

use super::super::models::{CheckerPriority, CheckerType};

/// A checker registered with the host orchestrator
///
/// All issues a checker wants to report are written into the supplied
/// sink, one `path:line:column: message` line per issue, as they are
/// found. None of these operations return a value: the output stream is
/// the only reporting channel, for failures as well as findings.
pub trait Checker: Send + Sync {
    /// Identifier the host registers this checker under
    fn type_name(&self) -> CheckerType;

    /// Ordering hint used by the host to schedule this checker among
    /// others; lower runs earlier
    fn priority(&self) -> CheckerPriority;

    /// Run the check over the given targets, writing normalized issues to
    /// `out` as they are produced
    ///
    /// `targets` is an ordered list of package specifiers; the host owns
    /// target discovery and exclusion-filtering upstream of this call.
    fn check(&self, targets: &[String], project_dir: &Path, out: &mut dyn Write);

    /// Invoke the underlying tool directly with caller-supplied arguments,
    /// streaming its merged output to `out` unfiltered
    fn run_check_cmd(&self, args: &[String], out: &mut dyn Write);
}
