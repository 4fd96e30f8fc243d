//! gemsync - Reconcile RubyGems gem ownership with GitHub team membership
//!
//! The binary wires the GitHub and `gem` CLI adapters to the reconciliation
//! core and renders the resulting report.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

/// Main entry point for the gemsync CLI
fn main() {
    if let Err(err) = cli::app::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
