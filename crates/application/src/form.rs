//! Editable request form state

use restbench_domain::{AuthConfig, FormRow, HttpMethod, RequestRecord};

/// The editable representation of one API request.
///
/// Param and header tables keep a trailing blank placeholder row while
/// being edited; assembly filters them out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestForm {
    /// HTTP method.
    pub method: HttpMethod,
    /// Target URL.
    pub url: String,
    /// Query parameter rows.
    pub params: Vec<FormRow>,
    /// Header rows.
    pub headers: Vec<FormRow>,
    /// Raw request body.
    pub body: String,
    /// Active auth profile.
    pub auth: AuthConfig,
    /// Folder the request belongs to, if any.
    pub collection_id: Option<String>,
}

impl RequestForm {
    /// An empty form with one placeholder row per table.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            method: HttpMethod::default(),
            url: String::new(),
            params: vec![FormRow::default()],
            headers: vec![FormRow::default()],
            body: String::new(),
            auth: AuthConfig::None,
            collection_id: None,
        }
    }

    /// Populates a form from a saved record (sidebar selection).
    ///
    /// The record's auth arrives already reverse-mapped into its variant;
    /// an inherit marker is shown as such, not as the folder's profile.
    #[must_use]
    pub fn from_record(record: &RequestRecord) -> Self {
        let placeholder = |rows: &[FormRow]| -> Vec<FormRow> {
            if rows.is_empty() {
                vec![FormRow::default()]
            } else {
                rows.to_vec()
            }
        };

        Self {
            method: record.method,
            url: record.url.clone(),
            params: placeholder(&record.params),
            headers: placeholder(&record.headers),
            body: record.body.clone(),
            auth: record.auth.clone(),
            collection_id: record.collection_id.clone(),
        }
    }
}

impl Default for RequestForm {
    fn default() -> Self {
        Self::blank()
    }
}
