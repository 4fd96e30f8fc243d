//! Organization directory port
//!
//! Defines the read-only interface onto the source-code hosting
//! organization.

use crate::core::models::{Repository, Team};

/// Read-only view of a hosting organization
///
/// Implementations handle pagination internally; callers always see
/// complete lists.
pub trait OrgDirectory {
    /// List all teams of an organization
    fn teams(&self, org: &str) -> anyhow::Result<Vec<Team>>;

    /// List the login handles of a team's members
    fn team_members(&self, team_id: u64) -> anyhow::Result<Vec<String>>;

    /// Get the public email of a user, if the profile exposes one
    ///
    /// Returns `None` for profiles without an email address.
    fn user_email(&self, login: &str) -> anyhow::Result<Option<String>>;

    /// List all repositories of an organization
    fn repositories(&self, org: &str) -> anyhow::Result<Vec<Repository>>;
}
