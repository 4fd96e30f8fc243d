//! Gem CLI adapter
//!
//! Implements `PackageRegistry` by shelling out to the `gem` command.
//! Every invocation goes through `Command::output`/`status`, so the
//! child's stdio is drained and the process reaped on all paths.

use std::process::{Command, Output, Stdio};
use std::sync::OnceLock;

use anyhow::Context as _;
use regex::Regex;

use crate::core::models::{MutationFailure, OwnerMutation};
use crate::core::ports::PackageRegistry;

/// Marker introducing an owner line in `gem owner` output
const OWNER_MARKER: char = '-';

/// `gem` CLI-backed registry
#[derive(Debug, Clone)]
pub struct GemCli {
    program: String,
}

impl GemCli {
    /// Create an adapter invoking the `gem` found on `PATH`
    #[must_use]
    pub fn new() -> Self {
        Self::with_program("gem")
    }

    /// Create an adapter invoking a specific program
    ///
    /// Used by tests to substitute a fake executable.
    #[must_use]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GemCli {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageRegistry for GemCli {
    fn exists(&self, name: &str) -> bool {
        Command::new(&self.program)
            .args(["owner", name])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok_and(|status| status.success())
    }

    fn current_owners(&self, name: &str) -> anyhow::Result<Vec<String>> {
        let output = Command::new(&self.program)
            .args(["owner", name])
            .output()
            .with_context(|| format!("running {} owner {name}", self.program))?;
        // Exit status is deliberately not consulted; whatever owner lines
        // made it to stdout are the answer.
        Ok(parse_owner_lines(&String::from_utf8_lossy(&output.stdout)))
    }

    fn mutate_owners(
        &self,
        name: &str,
        mutation: &OwnerMutation,
    ) -> Result<(), MutationFailure> {
        let params = mutation.params();
        log::debug!("running: {} owner {name} {params}", self.program);

        let mut command = Command::new(&self.program);
        command.args(["owner", name]);
        let flag = match mutation {
            OwnerMutation::Add(_) => "-a",
            OwnerMutation::Remove(_) => "-r",
        };
        for email in mutation.emails() {
            command.args([flag, email]);
        }

        let output = command.output().map_err(|err| MutationFailure {
            params: params.clone(),
            output: err.to_string(),
        })?;
        if output.status.success() {
            Ok(())
        } else {
            Err(MutationFailure {
                params,
                output: captured(&output),
            })
        }
    }
}

/// Combined stdout and stderr, trimmed
fn captured(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let mut text = stdout.trim().to_string();
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(stderr);
    }
    text
}

/// Extract owner email addresses from `gem owner` output
///
/// Owner lines start with the marker character; the marker and the
/// whitespace after it are stripped.
fn parse_owner_lines(stdout: &str) -> Vec<String> {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    let marker =
        MARKER.get_or_init(|| Regex::new(r"^.\s+").expect("owner marker pattern is valid"));
    stdout
        .lines()
        .filter(|line| line.starts_with(OWNER_MARKER))
        .map(|line| marker.replace(line, "").into_owned())
        .collect()
}
