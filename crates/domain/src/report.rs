//! Execution results
//!
//! Result rows are derived, transient values held only for display; the
//! client never persists them.

use serde::{Deserialize, Serialize};

use crate::request::HttpMethod;

/// Outcome of executing one test request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResultRow {
    /// Backend-assigned testcase identity, when available.
    #[serde(default)]
    pub testcase_id: Option<String>,
    /// HTTP method that was executed.
    pub method: HttpMethod,
    /// Target URL.
    pub url: String,
    /// Request body that was sent.
    #[serde(default)]
    pub body: String,
    /// Response status code; `None` when the call never reached the target.
    #[serde(default)]
    pub status_code: Option<u16>,
    /// Round-trip time in milliseconds.
    ///
    /// Older backend revisions misspell this field, hence the alias.
    #[serde(default, rename = "responseTime", alias = "reponse_time")]
    pub response_time_ms: Option<u64>,
    /// Raw response body, when one was received.
    #[serde(default)]
    pub response_body: Option<String>,
}

/// Aggregate outcome of a bulk run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BulkReport {
    /// Number of rows that executed successfully.
    pub success_count: u64,
    /// Number of rows that failed.
    pub failure_count: u64,
    /// Per-row results.
    #[serde(default)]
    pub details: Vec<ResultRow>,
}

impl BulkReport {
    /// Total number of rows the backend processed.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.success_count + self.failure_count
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_misspelled_response_time_alias() {
        let row: ResultRow = serde_json::from_str(
            r#"{"method":"GET","url":"https://a.example","statusCode":200,"reponse_time":17}"#,
        )
        .unwrap();
        assert_eq!(row.response_time_ms, Some(17));
        assert_eq!(row.status_code, Some(200));
    }

    #[test]
    fn test_bulk_report_totals() {
        let report: BulkReport =
            serde_json::from_str(r#"{"successCount":3,"failureCount":1}"#).unwrap();
        assert_eq!(report.total(), 4);
        assert!(report.details.is_empty());
    }
}
