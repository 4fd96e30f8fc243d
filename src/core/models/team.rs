//! Team model
//!
//! A team is fetched once per run to obtain its member list and then
//! discarded; only the id and display name matter.

use serde::{Deserialize, Serialize};

/// An access-control team of the hosting organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Numeric team identifier
    pub id: u64,

    /// Display name (e.g. "Access Team")
    pub name: String,
}

impl Team {
    /// Create a new team
    #[must_use]
    pub const fn new(id: u64, name: String) -> Self {
        Self { id, name }
    }
}
