//! Gem discovery
//!
//! Walks every repository of the configured organizations and decides
//! which ones correspond to gems published in the registry.

use crate::config::SyncConfig;
use crate::core::ports::{OrgDirectory, PackageRegistry};

/// Outcome of the discovery phase
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    /// Names of gems found in the registry, hangers-on included.
    /// Unordered until the reconciler's sort pass.
    pub gems: Vec<String>,

    /// Fully-qualified names of repositories with no matching gem
    pub bogus_repositories: Vec<String>,
}

/// Discover which repositories correspond to registry gems
///
/// The gem list starts from the configured hangers-on. Repository names
/// go through the gem-name override table before the existence probe; a
/// name on the false-positive list is nonexistent regardless of the
/// probe. Failed repository listings are appended to `errors` and the
/// organization contributes nothing.
pub fn discover_gems(
    directory: &dyn OrgDirectory,
    registry: &dyn PackageRegistry,
    config: &SyncConfig,
    errors: &mut Vec<String>,
) -> Discovery {
    let mut discovery = Discovery {
        gems: config.hangers_on.clone(),
        bogus_repositories: Vec::new(),
    };

    for org in &config.organizations {
        let repositories = match directory.repositories(org) {
            Ok(repositories) => repositories,
            Err(err) => {
                errors.push(format!("listing repositories for {org}: {err:#}"));
                continue;
            },
        };
        for repository in repositories {
            log::debug!("looking at {}", repository.full_name);
            let name = config.gem_name_for(&repository.name);
            if gem_exists(registry, config, &name) {
                log::debug!("  found gem {name}");
                discovery.gems.push(name);
            } else {
                discovery.bogus_repositories.push(repository.full_name);
            }
        }
    }

    discovery
}

/// Existence probe with the false-positive list applied
fn gem_exists(registry: &dyn PackageRegistry, config: &SyncConfig, name: &str) -> bool {
    if config.false_positives.iter().any(|fp| fp == name) {
        return false;
    }
    registry.exists(name)
}
