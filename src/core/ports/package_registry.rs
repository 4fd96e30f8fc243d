//! Package registry port
//!
//! The narrow interface onto the gem registry: existence probe, owner
//! query, owner mutation. The concrete implementation shells out to the
//! `gem` command; tests run against an in-memory fake.

use crate::core::models::{MutationFailure, OwnerMutation};

/// Gem registry abstraction
pub trait PackageRegistry {
    /// Whether a gem of this name exists in the registry
    ///
    /// Probe failures count as nonexistent; this never errors.
    fn exists(&self, name: &str) -> bool;

    /// The current owner email addresses of a gem
    fn current_owners(&self, name: &str) -> anyhow::Result<Vec<String>>;

    /// Apply one ownership mutation to a gem
    ///
    /// An empty mutation is still issued; the registry treats it as a
    /// no-op. A failure carries the invocation parameters and captured
    /// output for the error log.
    fn mutate_owners(&self, name: &str, mutation: &OwnerMutation)
    -> Result<(), MutationFailure>;
}
