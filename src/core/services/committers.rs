//! Desired-owner resolution
//!
//! Resolves the set of email addresses that should own every gem: the
//! members of the configured access and infrastructure teams, merged with
//! the committer override table. Overrides always win; a login never
//! appears twice.

use std::collections::BTreeMap;

use crate::config::SyncConfig;
use crate::core::models::Team;
use crate::core::ports::OrgDirectory;

/// Resolve the desired owner email addresses
///
/// Lookup failures and missing teams are appended to `errors`; the
/// resolution continues with whatever could be fetched. Members without a
/// public email are skipped silently.
///
/// The returned set is sorted and deduplicated.
pub fn resolve_desired_owners(
    directory: &dyn OrgDirectory,
    config: &SyncConfig,
    errors: &mut Vec<String>,
) -> Vec<String> {
    let mut committers: BTreeMap<String, String> = config.committers.clone();

    for login in team_member_logins(directory, config, errors) {
        // Overrides win, and cross-team duplicates resolve to one entry
        if committers.contains_key(&login) {
            continue;
        }
        match directory.user_email(&login) {
            Ok(Some(email)) if !email.is_empty() => {
                committers.insert(login, email);
            },
            Ok(_) => {},
            Err(err) => errors.push(format!("fetching profile for {login}: {err:#}")),
        }
    }

    let mut emails: Vec<String> = committers.into_values().collect();
    emails.sort();
    emails.dedup();
    emails
}

/// Concatenated member logins of both configured teams, across all
/// configured organizations
///
/// A configured team found in no organization is surfaced as an error,
/// not silently skipped.
fn team_member_logins(
    directory: &dyn OrgDirectory,
    config: &SyncConfig,
    errors: &mut Vec<String>,
) -> Vec<String> {
    let mut logins = Vec::new();
    let mut found_access = false;
    let mut found_infrastructure = false;

    for org in &config.organizations {
        let teams = match directory.teams(org) {
            Ok(teams) => teams,
            Err(err) => {
                errors.push(format!("listing teams for {org}: {err:#}"));
                continue;
            },
        };
        if let Some(team) = find_team(&teams, &config.access_team) {
            found_access = true;
            collect_members(directory, team, &mut logins, errors);
        }
        if let Some(team) = find_team(&teams, &config.infrastructure_team) {
            found_infrastructure = true;
            collect_members(directory, team, &mut logins, errors);
        }
    }

    if !found_access {
        errors.push(format!(
            "team not found in any organization: {}",
            config.access_team
        ));
    }
    if !found_infrastructure {
        errors.push(format!(
            "team not found in any organization: {}",
            config.infrastructure_team
        ));
    }

    logins
}

fn find_team<'a>(teams: &'a [Team], name: &str) -> Option<&'a Team> {
    teams.iter().find(|team| team.name == name)
}

fn collect_members(
    directory: &dyn OrgDirectory,
    team: &Team,
    logins: &mut Vec<String>,
    errors: &mut Vec<String>,
) {
    match directory.team_members(team.id) {
        Ok(members) => logins.extend(members),
        Err(err) => errors.push(format!("listing members of {}: {err:#}", team.name)),
    }
}
