//! Session persistence port

use std::future::Future;

use crate::ApplicationResult;
use crate::session::Session;

/// Port for durable storage of the current session.
pub trait SessionStore: Send + Sync {
    /// Loads the stored session, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored session exists but cannot be read.
    fn load(&self) -> impl Future<Output = ApplicationResult<Option<Session>>> + Send;

    /// Stores the session, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    fn store(&self, session: &Session) -> impl Future<Output = ApplicationResult<()>> + Send;

    /// Clears the stored session (logout).
    ///
    /// # Errors
    ///
    /// Returns an error if the stored session cannot be removed.
    fn clear(&self) -> impl Future<Output = ApplicationResult<()>> + Send;
}
