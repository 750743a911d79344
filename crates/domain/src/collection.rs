//! Collections (folders) of saved requests

use serde::{Deserialize, Serialize};

use crate::auth::AuthConfig;

/// A user-defined folder grouping saved request records.
///
/// A collection optionally carries a default auth profile; records whose
/// profile is [`AuthConfig::InheritFromParent`] pick it up at send time.
/// Deleting a collection does not cascade to contained records, they
/// simply become unclassified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Backend-assigned identity.
    pub id: String,
    /// Folder name.
    pub name: String,
    /// Inheritable default auth profile.
    pub auth: AuthConfig,
}

impl Collection {
    /// Creates a collection with no default auth.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            auth: AuthConfig::None,
        }
    }

    /// Sets the default auth profile.
    #[must_use]
    pub fn with_auth(mut self, auth: AuthConfig) -> Self {
        self.auth = auth;
        self
    }
}
