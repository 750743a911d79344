//! Saved request history port

use std::future::Future;

use restbench_domain::{RequestRecord, TestPayload};

use crate::ApplicationResult;

/// Port for the backend-owned store of saved request records.
pub trait HistoryRepository: Send + Sync {
    /// Fetches all saved records for the current user.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or backend rejection.
    fn list(&self) -> impl Future<Output = ApplicationResult<Vec<RequestRecord>>> + Send;

    /// Saves a new record; the backend assigns its identity.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or backend rejection.
    fn save(
        &self,
        payload: &TestPayload,
    ) -> impl Future<Output = ApplicationResult<RequestRecord>> + Send;

    /// Replaces a saved record wholesale; moves and edits both go through
    /// here with the full payload, never a partial patch.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or backend rejection.
    fn update(
        &self,
        api_id: &str,
        payload: &TestPayload,
    ) -> impl Future<Output = ApplicationResult<RequestRecord>> + Send;

    /// Deletes a saved record.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or backend rejection.
    fn delete(&self, api_id: &str) -> impl Future<Output = ApplicationResult<()>> + Send;
}
