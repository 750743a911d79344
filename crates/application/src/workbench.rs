//! Sidebar workbench: cached collections + history and their operations
//!
//! The workbench owns the client-side cache of backend state. Every
//! mutation goes to the backend first and then re-fetches, so the cache
//! always reflects server-side persistence (last write wins, no conflict
//! resolution).

use restbench_domain::{BulkReport, Collection, RequestRecord, ResultRow, TestPayload};

use crate::assembler::Assembler;
use crate::error::{ApplicationError, ApplicationResult};
use crate::form::RequestForm;
use crate::ports::{CollectionRepository, HistoryRepository, TestRunner};

/// One sidebar group: a collection and its records, or the unclassified
/// bucket when `collection` is `None`.
#[derive(Debug)]
pub struct SidebarGroup<'a> {
    /// The folder, or `None` for the unclassified bucket.
    pub collection: Option<&'a Collection>,
    /// Records grouped under it, in fetch order.
    pub records: Vec<&'a RequestRecord>,
}

/// Cached view over the backend's collections and saved requests.
pub struct Workbench<B> {
    backend: B,
    collections: Vec<Collection>,
    history: Vec<RequestRecord>,
}

impl<B> Workbench<B>
where
    B: TestRunner + HistoryRepository + CollectionRepository,
{
    /// Creates an empty workbench over the given backend.
    pub const fn new(backend: B) -> Self {
        Self {
            backend,
            collections: Vec::new(),
            history: Vec::new(),
        }
    }

    /// The cached collections, in fetch order.
    #[must_use]
    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    /// The cached saved requests, in fetch order.
    #[must_use]
    pub fn history(&self) -> &[RequestRecord] {
        &self.history
    }

    /// Re-fetches collections and history from the backend.
    ///
    /// # Errors
    ///
    /// Returns an error when either fetch fails; the previous cache is
    /// kept in that case.
    pub async fn refresh(&mut self) -> ApplicationResult<()> {
        let collections = CollectionRepository::list(&self.backend).await?;
        let history = HistoryRepository::list(&self.backend).await?;
        self.collections = collections;
        self.history = history;
        Ok(())
    }

    /// Groups history entries by folder. Folders keep fetch order and
    /// appear even when empty; records whose folder is missing or was
    /// deleted land in the trailing unclassified bucket.
    #[must_use]
    pub fn grouped(&self) -> Vec<SidebarGroup<'_>> {
        let mut groups: Vec<SidebarGroup<'_>> = self
            .collections
            .iter()
            .map(|collection| SidebarGroup {
                collection: Some(collection),
                records: self
                    .history
                    .iter()
                    .filter(|r| r.collection_id.as_deref() == Some(collection.id.as_str()))
                    .collect(),
            })
            .collect();

        let unclassified = self
            .history
            .iter()
            .filter(|r| {
                r.collection_id
                    .as_deref()
                    .is_none_or(|id| !self.collections.iter().any(|c| c.id == id))
            })
            .collect();
        groups.push(SidebarGroup {
            collection: None,
            records: unclassified,
        });

        groups
    }

    /// Loads a saved record into editable form state.
    #[must_use]
    pub fn select(&self, api_id: &str) -> Option<(RequestForm, &RequestRecord)> {
        let record = self.find(api_id)?;
        Some((RequestForm::from_record(record), record))
    }

    fn find(&self, api_id: &str) -> Option<&RequestRecord> {
        self.history
            .iter()
            .find(|r| r.api_id.as_deref() == Some(api_id))
    }

    /// Submits the form via the assembler, then re-fetches so the sidebar
    /// reflects whatever the backend persisted for the run.
    ///
    /// # Errors
    ///
    /// Returns an error when assembly validation, the definition update,
    /// or the execution fails.
    pub async fn submit(
        &mut self,
        form: &RequestForm,
        selected: Option<&RequestRecord>,
    ) -> ApplicationResult<ResultRow> {
        let row = Assembler::submit(&self.backend, form, selected, &self.collections).await?;
        self.refresh().await?;
        Ok(row)
    }

    /// Creates a collection and re-fetches.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the call.
    pub async fn create_collection(&mut self, name: &str) -> ApplicationResult<Collection> {
        let collection = CollectionRepository::create(&self.backend, name).await?;
        self.refresh().await?;
        Ok(collection)
    }

    /// Renames a collection and re-fetches.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the call.
    pub async fn rename_collection(
        &mut self,
        collection_id: &str,
        name: &str,
    ) -> ApplicationResult<Collection> {
        let collection = CollectionRepository::rename(&self.backend, collection_id, name).await?;
        self.refresh().await?;
        Ok(collection)
    }

    /// Deletes a collection and re-fetches. Contained records are not
    /// deleted; they turn up unclassified.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the call.
    pub async fn delete_collection(&mut self, collection_id: &str) -> ApplicationResult<()> {
        CollectionRepository::delete(&self.backend, collection_id).await?;
        self.refresh().await
    }

    /// Deletes a saved record and re-fetches.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the call.
    pub async fn delete_record(&mut self, api_id: &str) -> ApplicationResult<()> {
        HistoryRepository::delete(&self.backend, api_id).await?;
        self.refresh().await
    }

    /// Moves a record to another folder (or out of all folders).
    ///
    /// The entire record is re-sent through the update endpoint with its
    /// auth fields normalized, never a partial patch.
    ///
    /// # Errors
    ///
    /// Returns an error when the record is unknown locally or the backend
    /// rejects the update.
    pub async fn move_record(
        &mut self,
        api_id: &str,
        target: Option<&str>,
    ) -> ApplicationResult<RequestRecord> {
        let mut moved = self
            .find(api_id)
            .ok_or_else(|| ApplicationError::NotFound(format!("record {api_id}")))?
            .clone();
        moved.collection_id = target.map(ToString::to_string);

        let payload = TestPayload::from_record(&moved);
        let updated = HistoryRepository::update(&self.backend, api_id, &payload).await?;
        self.refresh().await?;
        Ok(updated)
    }

    /// Runs every request in a folder as one backend-side bulk job, then
    /// re-fetches.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the run.
    pub async fn run_collection(&mut self, collection_id: &str) -> ApplicationResult<BulkReport> {
        let report = TestRunner::run_collection(&self.backend, collection_id).await?;
        self.refresh().await?;
        Ok(report)
    }
}
