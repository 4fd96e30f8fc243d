//! Command-line interface
//!
//! - [`app`] - clap definitions and dispatch
//! - [`commands`] - one module per subcommand

pub mod app;
pub mod commands;
