//! Run the ownership reconciliation

use std::path::Path;

use gemsync::adapters::gem::GemCli;
use gemsync::adapters::github::GithubDirectory;
use gemsync::config::{Settings, SyncConfig};
use gemsync::core::services::reconciler;
use gemsync::output::OutputMode;

/// Run the full reconciliation and render the report
///
/// Token and configuration problems abort here, before any network
/// activity. Everything later is collected into the report; whether a
/// non-empty error log also fails the process is governed by `strict`
/// (or `fail_on_errors` in the config file).
pub fn sync(
    config_path: &Path,
    organizations: Vec<String>,
    revoke: bool,
    strict: bool,
    verbose: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    // Token first: its absence is fatal before anything touches the network
    let settings = Settings::from_env()?;

    let mut config = SyncConfig::load(config_path)?;
    if !organizations.is_empty() {
        config.organizations = organizations;
    }
    let revoke = revoke || settings.revoke;
    let strict = strict || config.fail_on_errors;
    let verbose = verbose || settings.verbose;

    if mode == OutputMode::Human {
        println!("(Hang in there! This can take a couple of minutes.)");
    }

    let directory = GithubDirectory::from_env(&settings.token)?;
    let registry = GemCli::new();
    let report = reconciler::run(&directory, &registry, &config, revoke);

    report.render(mode, verbose);

    if strict && report.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}
