//! Bulk CSV testing
//!
//! Parses an uploaded CSV into wire payloads (same field contract as the
//! submission assembler) and submits them in a single bulk-test call.

mod csv;

pub use csv::{CsvImportError, parse_csv};

use std::io::Read;

use restbench_domain::BulkReport;

use crate::ApplicationResult;
use crate::ports::TestRunner;

/// Runs CSV-sourced batches through the bulk-test endpoint.
pub struct BulkImporter<'a, B> {
    runner: &'a B,
}

impl<'a, B: TestRunner> BulkImporter<'a, B> {
    /// Creates a new importer over the given runner.
    pub const fn new(runner: &'a B) -> Self {
        Self { runner }
    }

    /// Parses the CSV and submits every row in one backend call.
    ///
    /// Validation failures abort before anything is submitted; there is
    /// no partial batch.
    ///
    /// # Errors
    ///
    /// Returns an error when a row fails validation or the bulk call is
    /// rejected.
    pub async fn import<R: Read>(&self, reader: R) -> ApplicationResult<BulkReport> {
        let payloads = parse_csv(reader)?;
        self.runner.bulk(&payloads).await
    }
}
