//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `github/` - `OrgDirectory` over the GitHub REST API
//! - `gem/` - `PackageRegistry` over the `gem` command line

pub mod gem;
pub mod github;
