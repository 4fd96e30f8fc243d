//! Ownership reconciliation
//!
//! Drives the full run: resolve desired owners, discover gems, then bring
//! each gem's owner list in line with the desired set. All failures
//! accumulate into the report's error log; the run never aborts once
//! started and every gem is attempted.

use serde::Serialize;

use crate::config::SyncConfig;
use crate::core::models::OwnerMutation;
use crate::core::ports::{OrgDirectory, PackageRegistry};
use crate::core::services::{committers, discovery};

/// Accumulated outcome of a reconciliation run
///
/// Replaces ad-hoc global accumulators: the run threads this state
/// through its phases and returns it to the caller for rendering.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncReport {
    /// Sorted desired owner email addresses
    pub desired_owners: Vec<String>,

    /// Sorted names of every gem that was processed
    pub gems: Vec<String>,

    /// Sorted fully-qualified names of repositories with no matching gem
    pub bogus_repositories: Vec<String>,

    /// Sorted human-readable descriptions of every collected failure
    pub errors: Vec<String>,
}

impl SyncReport {
    /// Whether any failure was collected during the run
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Run the full reconciliation
pub fn run(
    directory: &dyn OrgDirectory,
    registry: &dyn PackageRegistry,
    config: &SyncConfig,
    revoke: bool,
) -> SyncReport {
    let mut errors = Vec::new();

    let desired = committers::resolve_desired_owners(directory, config, &mut errors);
    let mut discovery = discovery::discover_gems(directory, registry, config, &mut errors);

    // Deterministic processing order
    discovery.gems.sort();

    for gem in &discovery.gems {
        reconcile_gem(registry, gem, &desired, config, revoke, &mut errors);
    }

    discovery.bogus_repositories.sort();
    errors.sort();

    SyncReport {
        desired_owners: desired,
        gems: discovery.gems,
        bogus_repositories: discovery.bogus_repositories,
        errors,
    }
}

/// Bring one gem's owner list in line with the desired set
///
/// Removals (when enabled) are issued before additions. Empty mutations
/// are still issued; the registry treats them as no-ops.
fn reconcile_gem(
    registry: &dyn PackageRegistry,
    gem: &str,
    desired: &[String],
    config: &SyncConfig,
    revoke: bool,
    errors: &mut Vec<String>,
) {
    log::debug!("gem: {gem}");
    let current = match registry.current_owners(gem) {
        Ok(current) => current,
        Err(err) => {
            // Without the current owner set the diffs would be garbage;
            // log and move on to the next gem.
            errors.push(format!("{gem}: {err:#}"));
            return;
        },
    };

    if revoke {
        let remove: Vec<String> = current
            .iter()
            .filter(|owner| !desired.contains(owner))
            .cloned()
            .collect();
        apply(registry, gem, &OwnerMutation::Remove(remove), errors);
    }

    let add: Vec<String> = desired
        .iter()
        .filter(|email| !current.contains(email) && !config.skip_emails.contains(email))
        .cloned()
        .collect();
    apply(registry, gem, &OwnerMutation::Add(add), errors);
}

/// Issue one mutation, folding a failure into the error log
fn apply(
    registry: &dyn PackageRegistry,
    gem: &str,
    mutation: &OwnerMutation,
    errors: &mut Vec<String>,
) {
    if let Err(failure) = registry.mutate_owners(gem, mutation) {
        errors.push(format!("{gem} {failure}"));
    }
}
