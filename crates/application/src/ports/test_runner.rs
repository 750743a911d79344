//! Test execution port

use std::future::Future;

use restbench_domain::{BulkReport, ResultRow, TestPayload};

use crate::ApplicationResult;

/// Port for executing test requests through the backend.
pub trait TestRunner: Send + Sync {
    /// Executes a single test request.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or backend rejection.
    fn execute(
        &self,
        payload: &TestPayload,
    ) -> impl Future<Output = ApplicationResult<ResultRow>> + Send;

    /// Executes a batch of test requests in one backend call.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or backend rejection; there
    /// is no partial submission.
    fn bulk(
        &self,
        payloads: &[TestPayload],
    ) -> impl Future<Output = ApplicationResult<BulkReport>> + Send;

    /// Runs every request saved in a collection as one backend-side batch.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or backend rejection.
    fn run_collection(
        &self,
        collection_id: &str,
    ) -> impl Future<Output = ApplicationResult<BulkReport>> + Send;
}
