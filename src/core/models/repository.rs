//! Repository model

use serde::{Deserialize, Serialize};

/// A repository of the hosting organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Short name (e.g. "my-gem")
    pub name: String,

    /// Fully-qualified name (e.g. "my-org/my-gem")
    pub full_name: String,
}

impl Repository {
    /// Create a new repository reference
    #[must_use]
    pub const fn new(name: String, full_name: String) -> Self {
        Self { name, full_name }
    }
}
