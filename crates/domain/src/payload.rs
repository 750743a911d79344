//! Wire payloads exchanged with the backend.
//!
//! The backend speaks flat camelCase JSON: one object per request carrying
//! the method/url/body, the flattened auth fragment, filtered param and
//! header rows, and the `parentId`/`apiId`/`collectionId` bookkeeping.
//! These shapes are shared by the test, bulk-test and history endpoints.

use serde::{Deserialize, Serialize};

use crate::auth::WireAuth;
use crate::collection::Collection;
use crate::record::RequestRecord;
use crate::request::{FormRow, HttpMethod};

/// The full wire shape of one test request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TestPayload {
    /// HTTP method.
    pub method: HttpMethod,
    /// Target URL.
    pub url: String,
    /// Flattened auth fragment, including the normalized `authType`.
    #[serde(flatten)]
    pub auth: WireAuth,
    /// Non-blank query parameter rows.
    #[serde(default)]
    pub params: Vec<FormRow>,
    /// Non-blank header rows.
    #[serde(default)]
    pub headers: Vec<FormRow>,
    /// Raw request body.
    #[serde(default)]
    pub body: String,
    /// Originating record for execution-log children.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Record identity; `None` forces the backend to create a new record.
    #[serde(default)]
    pub api_id: Option<String>,
    /// Folder membership.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
}

impl TestPayload {
    /// Maps a record into its wire shape.
    ///
    /// The auth profile is mapped literally; a stored
    /// `Inherit_from_Parent` marker stays on the wire so the saved
    /// definition keeps re-evaluating. Blank placeholder rows are dropped.
    #[must_use]
    pub fn from_record(record: &RequestRecord) -> Self {
        Self {
            method: record.method,
            url: record.url.clone(),
            auth: WireAuth::from_config(&record.auth),
            params: FormRow::filled(&record.params),
            headers: FormRow::filled(&record.headers),
            body: record.body.clone(),
            parent_id: record.parent_id.clone(),
            api_id: record.api_id.clone(),
            collection_id: record.collection_id.clone(),
        }
    }

    /// Reconstructs a record from a wire payload fetched from the backend.
    #[must_use]
    pub fn into_record(self) -> RequestRecord {
        RequestRecord {
            api_id: self.api_id,
            parent_id: self.parent_id,
            collection_id: self.collection_id,
            method: self.method,
            url: self.url,
            auth: self.auth.to_config(),
            params: self.params,
            headers: self.headers,
            body: self.body,
        }
    }
}

/// The wire shape of a collection (folder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPayload {
    /// Backend-assigned identity.
    pub collection_id: String,
    /// Folder name.
    pub name: String,
    /// Flattened default auth fragment.
    #[serde(flatten)]
    pub auth: WireAuth,
}

impl CollectionPayload {
    /// Maps a collection into its wire shape.
    #[must_use]
    pub fn from_collection(collection: &Collection) -> Self {
        Self {
            collection_id: collection.id.clone(),
            name: collection.name.clone(),
            auth: WireAuth::from_config(&collection.auth),
        }
    }

    /// Reconstructs a collection from its wire shape.
    #[must_use]
    pub fn into_collection(self) -> Collection {
        Collection {
            id: self.collection_id,
            name: self.name,
            auth: self.auth.to_config(),
        }
    }
}
