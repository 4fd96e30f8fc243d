//! Ownership reconciliation tests
//!
//! These drive the full run against in-memory fakes and assert on the
//! exact mutation sequence the registry received.

use gemsync::config::SyncConfig;
use gemsync::core::models::{OwnerMutation, Team};
use gemsync::core::services::reconciler;

use crate::common::mocks::{MockDirectory, MockRegistry};

/// Directory resolving desired owners {b@example.com, c@example.com}
/// with one repository, "widget"
fn directory() -> MockDirectory {
    MockDirectory::new()
        .with_team("acme", Team::new(1, "Access Team".to_string()), &["bob", "carol"])
        .with_team("acme", Team::new(2, "Infrastructure Team".to_string()), &[])
        .with_email("bob", "b@example.com")
        .with_email("carol", "c@example.com")
        .with_repository("acme", "widget")
}

fn config() -> SyncConfig {
    SyncConfig {
        organizations: vec!["acme".to_string()],
        ..SyncConfig::default()
    }
}

#[test]
fn revoke_disabled_adds_without_removing() {
    // current {a, b}, desired {b, c}
    let registry = MockRegistry::new().with_gem("widget", &["a@example.com", "b@example.com"]);

    let report = reconciler::run(&directory(), &registry, &config(), false);

    assert_eq!(
        registry.mutations(),
        vec![(
            "widget".to_string(),
            OwnerMutation::Add(vec!["c@example.com".to_string()])
        )]
    );
    assert!(!report.has_errors());
}

#[test]
fn revoke_enabled_removes_then_adds() {
    let registry = MockRegistry::new().with_gem("widget", &["a@example.com", "b@example.com"]);

    let report = reconciler::run(&directory(), &registry, &config(), true);

    assert_eq!(
        registry.mutations(),
        vec![
            (
                "widget".to_string(),
                OwnerMutation::Remove(vec!["a@example.com".to_string()])
            ),
            (
                "widget".to_string(),
                OwnerMutation::Add(vec!["c@example.com".to_string()])
            ),
        ]
    );
    assert!(!report.has_errors());
}

#[test]
fn skip_listed_email_is_never_added() {
    let registry = MockRegistry::new().with_gem("widget", &["a@example.com", "b@example.com"]);
    let mut config = config();
    config.skip_emails = vec!["c@example.com".to_string()];

    reconciler::run(&directory(), &registry, &config, false);

    // The add set is empty, and the empty mutation is still issued
    assert_eq!(
        registry.mutations(),
        vec![("widget".to_string(), OwnerMutation::Add(Vec::new()))]
    );
}

#[test]
fn failed_mutation_is_one_error_entry_and_the_run_continues() {
    let directory = directory().with_repository("acme", "zephyr");
    let registry = MockRegistry::new()
        .with_failing_gem("widget", &[])
        .with_gem("zephyr", &[]);

    let report = reconciler::run(&directory, &registry, &config(), false);

    let matching: Vec<_> = report
        .errors
        .iter()
        .filter(|error| error.contains("widget"))
        .collect();
    assert_eq!(matching.len(), 1);
    assert!(matching[0].contains("-a b@example.com -a c@example.com"));
    assert!(matching[0].contains("Owner could not be added."));

    // zephyr was still processed after the failure
    assert!(registry.mutations().iter().any(|(gem, _)| gem == "zephyr"));
}

#[test]
fn broken_owner_query_skips_that_gem_only() {
    let directory = directory().with_repository("acme", "zephyr");
    let registry = MockRegistry::new()
        .with_broken_gem("widget")
        .with_gem("zephyr", &[]);

    let report = reconciler::run(&directory, &registry, &config(), true);

    assert!(report.errors.iter().any(|error| error.starts_with("widget:")));
    let mutated: Vec<_> = registry
        .mutations()
        .iter()
        .map(|(gem, _)| gem.clone())
        .collect();
    assert!(!mutated.contains(&"widget".to_string()));
    assert!(mutated.contains(&"zephyr".to_string()));
}

#[test]
fn gems_are_processed_in_sorted_order_and_report_is_sorted() {
    let directory = directory()
        .with_repository("acme", "zephyr")
        .with_repository("acme", "aardvark")
        .with_repository("acme", "no-gem-b")
        .with_repository("acme", "no-gem-a");
    let registry = MockRegistry::new()
        .with_gem("widget", &[])
        .with_gem("zephyr", &[])
        .with_gem("aardvark", &[]);

    let report = reconciler::run(&directory, &registry, &config(), false);

    assert_eq!(report.gems, vec!["aardvark", "widget", "zephyr"]);
    assert_eq!(
        report.bogus_repositories,
        vec!["acme/no-gem-a", "acme/no-gem-b"]
    );

    let order: Vec<_> = registry
        .mutations()
        .iter()
        .map(|(gem, _)| gem.clone())
        .collect();
    assert_eq!(order, vec!["aardvark", "widget", "zephyr"]);
}
