//! Collection (folder) port

use std::future::Future;

use restbench_domain::Collection;

use crate::ApplicationResult;

/// Port for the backend-owned store of collections.
pub trait CollectionRepository: Send + Sync {
    /// Fetches all collections for the current user.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or backend rejection.
    fn list(&self) -> impl Future<Output = ApplicationResult<Vec<Collection>>> + Send;

    /// Creates a collection; the backend assigns its identity.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or backend rejection.
    fn create(&self, name: &str) -> impl Future<Output = ApplicationResult<Collection>> + Send;

    /// Renames a collection.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or backend rejection.
    fn rename(
        &self,
        collection_id: &str,
        name: &str,
    ) -> impl Future<Output = ApplicationResult<Collection>> + Send;

    /// Deletes a collection. Contained records are not cascaded; they
    /// become unclassified.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or backend rejection.
    fn delete(&self, collection_id: &str) -> impl Future<Output = ApplicationResult<()>> + Send;
}
