//! Output rendering for human and JSON modes
//!
//! Human mode prints a summary to stdout and the warning/error blocks to
//! stderr; JSON mode prints the full report, machine-readable.

use colored::Colorize as _;

use crate::core::services::reconciler::SyncReport;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

impl SyncReport {
    /// Render the report based on output mode
    ///
    /// The bogus-repository warning block is shown only when `verbose`
    /// is set; collected errors are always shown.
    pub fn render(&self, mode: OutputMode, verbose: bool) {
        match mode {
            OutputMode::Human => self.render_human(verbose),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self, verbose: bool) {
        println!(
            "Checked {} gem(s) against {} desired owner(s).",
            self.gems.len(),
            self.desired_owners.len()
        );

        if verbose && !self.bogus_repositories.is_empty() {
            eprintln!(
                "\n{} These repositories do not have gems:",
                "WARNING:".yellow().bold()
            );
            for repository in &self.bogus_repositories {
                eprintln!(" - {repository}");
            }
        }

        if !self.errors.is_empty() {
            eprintln!("\n{}", "The following errors were encountered:".red().bold());
            for error in &self.errors {
                eprintln!("{error}");
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
