//! Test fixtures: a scratch project with a stub analysis tool
//!
//! The stub is a shell script standing in for `go`: it insists on being
//! invoked as `<tool> vet ...`, records the arguments it received, prints
//! a canned transcript, and exits with a chosen status. Tests exercise the
//! full runner/normalizer pipeline against it without needing a Go
//! toolchain.

#![cfg(unix)]
#![allow(dead_code)]

use std::env;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A scratch project directory with an optional stub tool installed
pub struct FakeProject {
    dir: TempDir,
}

impl FakeProject {
    /// Create an empty scratch project
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Path to the project root
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a subdirectory and return its path
    pub fn mkdir(&self, name: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::create_dir_all(&path).expect("create subdirectory");
        path
    }

    /// Install a stub tool printing `transcript` and exiting with
    /// `exit_code`; returns the absolute path to the stub
    ///
    /// The transcript goes through a side file rather than the script
    /// itself, so diagnostics with shell metacharacters survive verbatim.
    pub fn install_tool(&self, transcript: &str, exit_code: i32) -> PathBuf {
        let transcript_path = self.dir.path().join("transcript.txt");
        fs::write(&transcript_path, transcript).expect("write transcript");

        let tool = self.dir.path().join("fake-go");
        let script = format!(
            r#"#!/bin/sh
dir="$(cd "$(dirname "$0")" && pwd)"
if [ "$1" != vet ]; then
    echo "unexpected subcommand: $1" >&2
    exit 64
fi
shift
printf '%s\n' "$@" > "$dir/args.txt"
cat "$dir/transcript.txt"
exit {exit_code}
"#
        );
        fs::write(&tool, script).expect("write stub tool");
        let mut perms = fs::metadata(&tool).expect("stat stub tool").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&tool, perms).expect("mark stub tool executable");
        tool
    }

    /// Write a `.vetshim.toml` pointing at the given tool
    pub fn write_config(&self, tool: &Path) {
        self.write_config_with(tool, &[]);
    }

    /// Write a `.vetshim.toml` with a tool override and exclude filters
    pub fn write_config_with(&self, tool: &Path, exclude: &[&str]) {
        let mut content = format!("tool = \"{}\"\n", tool.display());
        if !exclude.is_empty() {
            let patterns: Vec<String> = exclude.iter().map(|p| format!("\"{p}\"")).collect();
            content.push_str(&format!("exclude = [{}]\n", patterns.join(", ")));
        }
        fs::write(self.dir.path().join(".vetshim.toml"), content).expect("write config");
    }

    /// Arguments the stub tool was last invoked with (after `vet`)
    pub fn recorded_args(&self) -> Vec<String> {
        let recorded = fs::read_to_string(self.dir.path().join("args.txt"))
            .expect("stub tool was never invoked");
        recorded.lines().map(String::from).collect()
    }
}

impl Default for FakeProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Changes the working directory and restores the previous one on drop
pub struct CwdGuard {
    prev: PathBuf,
}

impl CwdGuard {
    /// Change into `dir`, remembering where we were
    pub fn change_to(dir: &Path) -> Self {
        let prev = env::current_dir().expect("read current dir");
        env::set_current_dir(dir).expect("change directory");
        Self { prev }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.prev);
    }
}
