//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the reconciliation logic
//! and the two external systems it drives (the hosting organization's
//! API and the gem registry's CLI).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core logic depends only on these traits, never on concrete
//! implementations. This enables:
//!
//! - **Testability**: In-memory fakes for unit tests
//! - **Flexibility**: Swap implementations without changing the logic
//! - **Clarity**: Clear boundaries between layers

mod org_directory;
mod package_registry;

pub use org_directory::OrgDirectory;
pub use package_registry::PackageRegistry;
