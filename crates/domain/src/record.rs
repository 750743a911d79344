//! Saved request records

use serde::{Deserialize, Serialize};

use crate::auth::AuthConfig;
use crate::request::{FormRow, HttpMethod};

/// A saved, reusable definition of one API test request.
///
/// Records are owned by the backend; `api_id` is assigned there and absent
/// until the first save. The client holds a read/write cache with no
/// conflict resolution (last write wins).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RequestRecord {
    /// Backend-assigned identity, `None` until first saved.
    pub api_id: Option<String>,
    /// Originating record for execution-log children.
    pub parent_id: Option<String>,
    /// Folder membership; `None` means unclassified.
    pub collection_id: Option<String>,
    /// HTTP method.
    pub method: HttpMethod,
    /// Target URL.
    pub url: String,
    /// Auth profile. [`AuthConfig::InheritFromParent`] is stored as-is so
    /// inheritance re-evaluates on every send.
    pub auth: AuthConfig,
    /// Query parameter rows, blanks included until assembly.
    pub params: Vec<FormRow>,
    /// Header rows, blanks included until assembly.
    pub headers: Vec<FormRow>,
    /// Raw request body.
    pub body: String,
}

impl RequestRecord {
    /// Creates a record for the given method and URL, everything else empty.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            ..Self::default()
        }
    }
}
