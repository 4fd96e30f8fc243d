//! CLI subcommand implementations
//!
//! - [`init`] - Write the configuration template
//! - [`sync`] - Run the ownership reconciliation

pub mod init;
pub mod sync;
