//! User session context
//!
//! The session is an explicit value handed to every adapter instead of
//! ambient global state; constructing one is the only way to talk to the
//! authenticated backend endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated backend session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer credential attached to every backend call.
    pub token: String,
    /// Identity of the logged-in user.
    pub user_id: String,
    /// When the session was established.
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session stamped with the current time.
    #[must_use]
    pub fn new(token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user_id: user_id.into(),
            created_at: Utc::now(),
        }
    }
}
