//! Run configuration
//!
//! Static tables and organization settings come from a TOML file
//! (`gemsync.toml` by default); credentials and runtime toggles come from
//! the environment. The tables are injectable configuration rather than
//! hard-coded policy, so the reconciliation logic stays testable.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "gemsync.toml";

/// Environment variable holding the GitHub access token
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Environment variable enabling verbose progress output
pub const VERBOSE_VAR: &str = "VERBOSE";

/// Environment variable enabling owner revocation
pub const REVOKE_VAR: &str = "WITH_REVOKE";

/// Configuration errors; all of these abort the run before any network
/// activity happens
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The token variable is unset or empty
    #[error("GitHub authorization token was not found in the {TOKEN_VAR} environment variable")]
    MissingToken,

    /// The config file could not be read
    #[error("reading {path}: {source}")]
    Unreadable {
        /// Path that was attempted
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML
    #[error("parsing {path}: {source}")]
    Invalid {
        /// Path that was parsed
        path: String,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// The organization list is empty
    #[error("no organizations configured in {path}")]
    NoOrganizations {
        /// Path of the offending config file
        path: String,
    },
}

/// Static reconciliation configuration, loaded from `gemsync.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Organizations whose teams and repositories are consulted
    #[serde(default)]
    pub organizations: Vec<String>,

    /// Display name of the access team
    #[serde(default = "default_access_team")]
    pub access_team: String,

    /// Display name of the infrastructure team
    #[serde(default = "default_infrastructure_team")]
    pub infrastructure_team: String,

    /// Login -> email overrides; authoritative, never overwritten by
    /// discovered profile emails
    #[serde(default)]
    pub committers: BTreeMap<String, String>,

    /// Repository-name -> gem-name overrides, for repositories named
    /// differently from their gems
    #[serde(default)]
    pub gem_names: BTreeMap<String, String>,

    /// Repository names that match a registry gem they are not the
    /// source of; always treated as nonexistent
    #[serde(default)]
    pub false_positives: Vec<String>,

    /// Gems with no corresponding repository, included unconditionally
    #[serde(default)]
    pub hangers_on: Vec<String>,

    /// Addresses known not to be registered with the registry; never
    /// added as owners
    #[serde(default)]
    pub skip_emails: Vec<String>,

    /// Exit non-zero when the run collected errors
    #[serde(default)]
    pub fail_on_errors: bool,
}

fn default_access_team() -> String {
    "Access Team".to_string()
}

fn default_infrastructure_team() -> String {
    "Infrastructure Team".to_string()
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            organizations: Vec::new(),
            access_team: default_access_team(),
            infrastructure_team: default_infrastructure_team(),
            committers: BTreeMap::new(),
            gem_names: BTreeMap::new(),
            false_positives: Vec::new(),
            hangers_on: Vec::new(),
            skip_emails: Vec::new(),
            fail_on_errors: false,
        }
    }
}

impl SyncConfig {
    /// Load configuration from a TOML file
    ///
    /// An empty organization list is rejected here, before any network
    /// activity.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = toml::from_str(&raw).map_err(|source| ConfigError::Invalid {
            path: path.display().to_string(),
            source,
        })?;
        if config.organizations.is_empty() {
            return Err(ConfigError::NoOrganizations {
                path: path.display().to_string(),
            });
        }
        Ok(config)
    }

    /// The gem name for a repository, with overrides applied
    #[must_use]
    pub fn gem_name_for(&self, repository: &str) -> String {
        self.gem_names
            .get(repository)
            .cloned()
            .unwrap_or_else(|| repository.to_string())
    }
}

/// Runtime settings resolved from the process environment
#[derive(Debug, Clone)]
pub struct Settings {
    /// GitHub access token
    pub token: String,

    /// Verbose progress output
    pub verbose: bool,

    /// Revoke owners not present in the desired set
    pub revoke: bool,
}

impl Settings {
    /// Resolve settings from the environment
    ///
    /// The token is required; its absence is fatal.
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = env::var(TOKEN_VAR)
            .ok()
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingToken)?;
        Ok(Self {
            token,
            verbose: env_flag(VERBOSE_VAR),
            revoke: env_flag(REVOKE_VAR),
        })
    }
}

/// Truthy-string environment flag
///
/// Set and not `""`, `"0"`, or `"false"` (case-insensitive) counts as
/// enabled.
#[must_use]
pub fn env_flag(name: &str) -> bool {
    env::var(name).is_ok_and(|value| {
        let value = value.trim();
        !(value.is_empty() || value == "0" || value.eq_ignore_ascii_case("false"))
    })
}
