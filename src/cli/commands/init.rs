//! Write the gemsync configuration template

use std::fs;
use std::path::Path;

use gemsync::config::CONFIG_FILE;

/// Configuration template written by `gemsync init`
const TEMPLATE: &str = r#"# gemsync configuration

# GitHub organizations whose teams and repositories are consulted.
organizations = ["my-org"]

# Display names of the teams whose members should own every gem.
access_team = "Access Team"
infrastructure_team = "Infrastructure Team"

# Repository names that match a registry gem they are not the source of.
false_positives = []

# Gems that do not have their own repository; always included.
hangers_on = []

# Addresses known not to be registered with the registry; never added.
skip_emails = []

# Exit non-zero when the run collected errors.
fail_on_errors = false

# Some profiles do not expose an email address; list known committer
# addresses here. Overrides always win over profile emails.
[committers]
# alice = "alice@example.com"

# Repositories named differently from their gems.
[gem_names]
# "rails-app" = "rails_app"
"#;

/// Write a commented `gemsync.toml` template to the working directory
pub fn init(force: bool) -> anyhow::Result<()> {
    let path = Path::new(CONFIG_FILE);

    if path.exists() && !force {
        println!("Already initialized ({CONFIG_FILE} exists).");
        println!("Use --force to overwrite.");
        return Ok(());
    }

    fs::write(path, TEMPLATE)?;
    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  export GITHUB_TOKEN=...   # public_repo, read:org, user:email scopes");
    println!("  gemsync sync --verbose");

    Ok(())
}
