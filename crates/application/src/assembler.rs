//! Request submission assembly
//!
//! Turns the editable form (plus the optionally selected saved record)
//! into the outgoing wire payloads, and drives the update-then-execute
//! submission sequence.

use restbench_domain::{Collection, DomainError, RequestRecord, ResultRow, TestPayload};

use crate::ApplicationResult;
use crate::form::RequestForm;
use crate::ports::{HistoryRepository, TestRunner};
use crate::resolver::resolve_auth;

/// Assembles and submits test requests.
pub struct Assembler;

impl Assembler {
    fn to_record(form: &RequestForm, selected: Option<&RequestRecord>) -> RequestRecord {
        RequestRecord {
            api_id: selected.and_then(|r| r.api_id.clone()),
            parent_id: selected.and_then(|r| r.parent_id.clone()),
            collection_id: form.collection_id.clone(),
            method: form.method,
            url: form.url.trim().to_string(),
            auth: form.auth.clone(),
            params: form.params.clone(),
            headers: form.headers.clone(),
            body: form.body.clone(),
        }
    }

    /// The payload for the history save/update call.
    ///
    /// Auth is mapped literally, so an `Inherit from Parent` marker stays
    /// in storage and re-evaluates on every send. `apiId` reuses the
    /// selected record's identity; `None` forces creation of a new record.
    #[must_use]
    pub fn record_payload(form: &RequestForm, selected: Option<&RequestRecord>) -> TestPayload {
        TestPayload::from_record(&Self::to_record(form, selected))
    }

    /// The payload for the execution call.
    ///
    /// Inheritance is resolved against the current collections, and
    /// `parentId` points at the originating saved record so the backend
    /// can attach the execution log to it.
    #[must_use]
    pub fn execution_payload(
        form: &RequestForm,
        selected: Option<&RequestRecord>,
        collections: &[Collection],
    ) -> TestPayload {
        let record = Self::to_record(form, selected);
        let mut payload = TestPayload::from_record(&record);
        payload.auth = resolve_auth(&record, collections);
        payload.parent_id = record.api_id;
        payload
    }

    /// Submits the form: update the saved definition when a record is
    /// selected, then execute.
    ///
    /// A failed update aborts the send so the saved definition and the
    /// executed test can never diverge.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is missing, the update is rejected,
    /// or the execution fails.
    pub async fn submit<B>(
        backend: &B,
        form: &RequestForm,
        selected: Option<&RequestRecord>,
        collections: &[Collection],
    ) -> ApplicationResult<ResultRow>
    where
        B: TestRunner + HistoryRepository,
    {
        if form.url.trim().is_empty() {
            return Err(DomainError::InvalidUrl("a request URL is required".to_string()).into());
        }

        if let Some(api_id) = selected.and_then(|r| r.api_id.as_deref()) {
            let saved = Self::record_payload(form, selected);
            backend.update(api_id, &saved).await?;
        }

        let payload = Self::execution_payload(form, selected, collections);
        backend.execute(&payload).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;
    use restbench_domain::{AuthConfig, BulkReport, FormRow, HttpMethod};

    use crate::ApplicationError;

    use super::*;

    #[derive(Default)]
    struct FakeBackend {
        executed: Mutex<Vec<TestPayload>>,
        updated: Mutex<Vec<(String, TestPayload)>>,
        calls: Mutex<Vec<&'static str>>,
        fail_update: bool,
    }

    impl TestRunner for FakeBackend {
        async fn execute(&self, payload: &TestPayload) -> ApplicationResult<ResultRow> {
            self.calls.lock().unwrap().push("execute");
            self.executed.lock().unwrap().push(payload.clone());
            Ok(ResultRow {
                method: payload.method,
                url: payload.url.clone(),
                status_code: Some(200),
                ..ResultRow::default()
            })
        }

        async fn bulk(&self, _payloads: &[TestPayload]) -> ApplicationResult<BulkReport> {
            Ok(BulkReport::default())
        }

        async fn run_collection(&self, _collection_id: &str) -> ApplicationResult<BulkReport> {
            Ok(BulkReport::default())
        }
    }

    impl HistoryRepository for FakeBackend {
        async fn list(&self) -> ApplicationResult<Vec<RequestRecord>> {
            Ok(Vec::new())
        }

        async fn save(&self, payload: &TestPayload) -> ApplicationResult<RequestRecord> {
            Ok(payload.clone().into_record())
        }

        async fn update(
            &self,
            api_id: &str,
            payload: &TestPayload,
        ) -> ApplicationResult<RequestRecord> {
            self.calls.lock().unwrap().push("update");
            if self.fail_update {
                return Err(ApplicationError::Backend {
                    status: 500,
                    message: "update rejected".to_string(),
                });
            }
            self.updated
                .lock()
                .unwrap()
                .push((api_id.to_string(), payload.clone()));
            Ok(payload.clone().into_record())
        }

        async fn delete(&self, _api_id: &str) -> ApplicationResult<()> {
            Ok(())
        }
    }

    fn inheriting_form(collection_id: &str) -> RequestForm {
        RequestForm {
            method: HttpMethod::Get,
            url: "https://api.example.com".to_string(),
            auth: AuthConfig::InheritFromParent,
            collection_id: Some(collection_id.to_string()),
            ..RequestForm::blank()
        }
    }

    fn saved_record(api_id: &str, collection_id: &str) -> RequestRecord {
        let mut record = RequestRecord::new(HttpMethod::Get, "https://api.example.com");
        record.api_id = Some(api_id.to_string());
        record.collection_id = Some(collection_id.to_string());
        record.auth = AuthConfig::InheritFromParent;
        record
    }

    #[test]
    fn test_execution_resolves_folder_token() {
        // The worked example: folder Bearer "abc", record inherits.
        let folder = Collection::new("7", "Payments").with_auth(AuthConfig::bearer("abc"));
        let selected = saved_record("42", "7");

        let payload = Assembler::execution_payload(
            &inheriting_form("7"),
            Some(&selected),
            std::slice::from_ref(&folder),
        );

        assert_eq!(payload.method, HttpMethod::Get);
        assert_eq!(payload.url, "https://api.example.com");
        assert_eq!(payload.auth.auth_type, "Bearer_Token");
        assert_eq!(payload.auth.token, "abc");
        assert_eq!(payload.api_id.as_deref(), Some("42"));
        assert_eq!(payload.parent_id.as_deref(), Some("42"));
    }

    #[test]
    fn test_record_payload_keeps_inherit_marker() {
        let selected = saved_record("42", "7");
        let payload = Assembler::record_payload(&inheriting_form("7"), Some(&selected));
        assert_eq!(payload.auth.auth_type, "Inherit_from_Parent");
        assert_eq!(payload.auth.token, "");
    }

    #[test]
    fn test_unselected_form_forces_creation() {
        let payload = Assembler::record_payload(&inheriting_form("7"), None);
        assert_eq!(payload.api_id, None);
    }

    #[test]
    fn test_blank_rows_filtered_at_assembly() {
        let mut form = inheriting_form("7");
        form.params = vec![FormRow::new("page", "1"), FormRow::default()];
        let payload = Assembler::execution_payload(&form, None, &[]);
        assert_eq!(payload.params, vec![FormRow::new("page", "1")]);
    }

    #[tokio::test]
    async fn test_submit_updates_before_executing() {
        let backend = FakeBackend::default();
        let folder = Collection::new("7", "Payments").with_auth(AuthConfig::bearer("abc"));
        let selected = saved_record("42", "7");

        let row = Assembler::submit(&backend, &inheriting_form("7"), Some(&selected), &[folder])
            .await
            .unwrap();

        assert_eq!(row.status_code, Some(200));
        assert_eq!(*backend.calls.lock().unwrap(), vec!["update", "execute"]);

        // The saved definition keeps the inherit marker...
        let updated = backend.updated.lock().unwrap();
        assert_eq!(updated[0].0, "42");
        assert_eq!(updated[0].1.auth.auth_type, "Inherit_from_Parent");
        // ...while the executed payload carries the folder's token.
        let executed = backend.executed.lock().unwrap();
        assert_eq!(executed[0].auth.token, "abc");
    }

    #[tokio::test]
    async fn test_failed_update_blocks_the_send() {
        let backend = FakeBackend {
            fail_update: true,
            ..FakeBackend::default()
        };
        let selected = saved_record("42", "7");

        let result =
            Assembler::submit(&backend, &inheriting_form("7"), Some(&selected), &[]).await;

        assert!(matches!(
            result,
            Err(ApplicationError::Backend { status: 500, .. })
        ));
        assert!(backend.executed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_requires_a_url() {
        let backend = FakeBackend::default();
        let mut form = RequestForm::blank();
        form.url = "   ".to_string();

        let result = Assembler::submit(&backend, &form, None, &[]).await;
        assert!(matches!(result, Err(ApplicationError::Domain(_))));
        assert!(backend.calls.lock().unwrap().is_empty());
    }
}
