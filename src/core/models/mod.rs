//! Domain models for gemsync
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Team`] - An access-control team of the hosting organization
//! - [`Repository`] - A repository that may correspond to a published gem
//! - [`OwnerMutation`] - A single add/remove ownership change
//! - [`MutationFailure`] - A failed mutation with its captured output

mod mutation;
mod repository;
mod team;

pub use mutation::{MutationFailure, OwnerMutation};
pub use repository::Repository;
pub use team::Team;
