//! Ownership mutation model
//!
//! One mutation maps to one registry CLI invocation. An empty mutation is
//! still issued; the registry treats it as a no-op.

use thiserror::Error;

/// A single ownership change for one gem
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerMutation {
    /// Grant ownership to each address
    Add(Vec<String>),
    /// Revoke ownership from each address
    Remove(Vec<String>),
}

impl OwnerMutation {
    /// The addresses carried by this mutation
    #[must_use]
    pub fn emails(&self) -> &[String] {
        match self {
            Self::Add(emails) | Self::Remove(emails) => emails,
        }
    }

    /// Render the mutation as registry CLI parameters
    ///
    /// Add mutations render as `-a addr` pairs, removals as `-r addr`,
    /// matching what the adapter actually passes to the command. Used for
    /// error-log entries.
    #[must_use]
    pub fn params(&self) -> String {
        let (flag, emails) = match self {
            Self::Add(emails) => ("-a", emails),
            Self::Remove(emails) => ("-r", emails),
        };
        emails
            .iter()
            .map(|email| format!("{flag} {email}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A failed mutation invocation
///
/// Displays as `<params>: <output>`, so prefixing the gem name yields a
/// complete error-log entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{params}: {output}")]
pub struct MutationFailure {
    /// Rendered CLI parameters of the failed invocation
    pub params: String,
    /// Captured process output (stdout and stderr)
    pub output: String,
}
