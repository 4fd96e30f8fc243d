//! Mock implementations of port traits for testing
//!
//! These mocks provide configurable behavior for unit testing
//! without real network or subprocess I/O.

use std::cell::RefCell;
use std::collections::BTreeMap;

use gemsync::core::models::{MutationFailure, OwnerMutation, Repository, Team};
use gemsync::core::ports::{OrgDirectory, PackageRegistry};

/// In-memory organization directory
#[derive(Default)]
pub struct MockDirectory {
    teams: BTreeMap<String, Vec<Team>>,
    members: BTreeMap<u64, Vec<String>>,
    emails: BTreeMap<String, String>,
    repositories: BTreeMap<String, Vec<Repository>>,
}

impl MockDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a team of an organization together with its members
    pub fn with_team(mut self, org: &str, team: Team, members: &[&str]) -> Self {
        self.members
            .insert(team.id, members.iter().map(ToString::to_string).collect());
        self.teams.entry(org.to_string()).or_default().push(team);
        self
    }

    /// Register a profile email for a login
    pub fn with_email(mut self, login: &str, email: &str) -> Self {
        self.emails.insert(login.to_string(), email.to_string());
        self
    }

    /// Register a repository of an organization
    pub fn with_repository(mut self, org: &str, name: &str) -> Self {
        self.repositories
            .entry(org.to_string())
            .or_default()
            .push(Repository::new(name.to_string(), format!("{org}/{name}")));
        self
    }
}

impl OrgDirectory for MockDirectory {
    fn teams(&self, org: &str) -> anyhow::Result<Vec<Team>> {
        Ok(self.teams.get(org).cloned().unwrap_or_default())
    }

    fn team_members(&self, team_id: u64) -> anyhow::Result<Vec<String>> {
        Ok(self.members.get(&team_id).cloned().unwrap_or_default())
    }

    fn user_email(&self, login: &str) -> anyhow::Result<Option<String>> {
        Ok(self.emails.get(login).cloned())
    }

    fn repositories(&self, org: &str) -> anyhow::Result<Vec<Repository>> {
        Ok(self.repositories.get(org).cloned().unwrap_or_default())
    }
}

/// In-memory package registry recording every mutation
#[derive(Default)]
pub struct MockRegistry {
    owners: BTreeMap<String, Vec<String>>,
    failing: Vec<String>,
    broken: Vec<String>,
    mutations: RefCell<Vec<(String, OwnerMutation)>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an existing gem with its current owners
    pub fn with_gem(mut self, name: &str, owners: &[&str]) -> Self {
        self.owners
            .insert(name.to_string(), owners.iter().map(ToString::to_string).collect());
        self
    }

    /// Register an existing gem whose mutations all fail
    pub fn with_failing_gem(mut self, name: &str, owners: &[&str]) -> Self {
        self.failing.push(name.to_string());
        self.with_gem(name, owners)
    }

    /// Register an existing gem whose owner query errors
    pub fn with_broken_gem(mut self, name: &str) -> Self {
        self.broken.push(name.to_string());
        self.owners.insert(name.to_string(), Vec::new());
        self
    }

    /// Every mutation issued, in order
    pub fn mutations(&self) -> Vec<(String, OwnerMutation)> {
        self.mutations.borrow().clone()
    }
}

impl PackageRegistry for MockRegistry {
    fn exists(&self, name: &str) -> bool {
        self.owners.contains_key(name)
    }

    fn current_owners(&self, name: &str) -> anyhow::Result<Vec<String>> {
        if self.broken.iter().any(|gem| gem == name) {
            anyhow::bail!("owner query failed");
        }
        Ok(self.owners.get(name).cloned().unwrap_or_default())
    }

    fn mutate_owners(
        &self,
        name: &str,
        mutation: &OwnerMutation,
    ) -> Result<(), MutationFailure> {
        self.mutations
            .borrow_mut()
            .push((name.to_string(), mutation.clone()));
        if self.failing.iter().any(|gem| gem == name) {
            return Err(MutationFailure {
                params: mutation.params(),
                output: "Owner could not be added.".to_string(),
            });
        }
        Ok(())
    }
}
