//! CSV row parsing for bulk tests

use std::collections::BTreeMap;
use std::io::Read;

use serde::Deserialize;
use thiserror::Error;

use restbench_domain::{FormRow, HttpMethod, TestPayload, WireAuth, wire_label};

/// Errors that reject a CSV batch before submission.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CsvImportError {
    /// A data row is missing a required column value. Rows are numbered
    /// from 1, excluding the header.
    #[error("row {row}: missing required field `{field}`")]
    MissingField {
        /// 1-based data row number.
        row: usize,
        /// The required column.
        field: &'static str,
    },

    /// A data row carries a method the workbench does not support.
    #[error("row {row}: unsupported HTTP method `{method}`")]
    UnsupportedMethod {
        /// 1-based data row number.
        row: usize,
        /// The offending method cell.
        method: String,
    },

    /// The file is not structurally valid CSV.
    #[error("malformed CSV: {0}")]
    Malformed(String),
}

/// One raw CSV data row. Only `method` and `url` are required; the rest
/// default to empty when the column is absent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow {
    #[serde(default)]
    method: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    auth_type: String,
    #[serde(default)]
    token: String,
    #[serde(default)]
    params: String,
    #[serde(default)]
    headers: String,
    #[serde(default)]
    body: String,
}

/// Parses a CSV document (header row required) into wire payloads.
///
/// Any validation failure aborts the whole batch with a row-indexed
/// error; nothing is submitted partially. Malformed JSON in the `params`
/// and `headers` cells degrades to an empty list instead of aborting.
///
/// # Errors
///
/// Returns [`CsvImportError`] when the file is structurally invalid, or
/// when a row is missing `method`/`url` or carries an unknown method.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<TestPayload>, CsvImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut payloads = Vec::new();
    for (index, result) in csv_reader.deserialize::<CsvRow>().enumerate() {
        let row_no = index + 1;
        let row = result.map_err(|e| CsvImportError::Malformed(e.to_string()))?;

        if row.method.is_empty() {
            return Err(CsvImportError::MissingField {
                row: row_no,
                field: "method",
            });
        }
        if row.url.is_empty() {
            return Err(CsvImportError::MissingField {
                row: row_no,
                field: "url",
            });
        }

        let method: HttpMethod =
            row.method
                .parse()
                .map_err(|_| CsvImportError::UnsupportedMethod {
                    row: row_no,
                    method: row.method.clone(),
                })?;

        payloads.push(TestPayload {
            method,
            url: row.url,
            auth: canonical_auth(&row.auth_type, row.token),
            params: FormRow::filled(&json_rows(&row.params, row_no, "params")),
            headers: FormRow::filled(&json_rows(&row.headers, row_no, "headers")),
            body: row.body,
            parent_id: None,
            api_id: None,
            collection_id: None,
        });
    }

    Ok(payloads)
}

/// Canonicalizes a CSV auth cell: the label is normalized (display and
/// wire spellings are both accepted), unknown labels fall back to
/// `No_Auth`, and the `token` cell is kept only for token-bearing types.
fn canonical_auth(raw_type: &str, token: String) -> WireAuth {
    let wire = WireAuth {
        auth_type: wire_label(raw_type),
        token,
        ..WireAuth::default()
    };
    WireAuth::from_config(&wire.to_config())
}

/// Parses a JSON cell into rows, accepting either a `[{key, value}]`
/// array or a flat string map. A malformed cell degrades to an empty
/// list rather than aborting the batch.
fn json_rows(cell: &str, row: usize, column: &str) -> Vec<FormRow> {
    if cell.is_empty() {
        return Vec::new();
    }

    if let Ok(rows) = serde_json::from_str::<Vec<FormRow>>(cell) {
        return rows;
    }
    if let Ok(map) = serde_json::from_str::<BTreeMap<String, String>>(cell) {
        return map
            .into_iter()
            .map(|(key, value)| FormRow::new(key, value))
            .collect();
    }

    tracing::warn!(row, column, "malformed JSON cell, substituting empty list");
    Vec::new()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_minimal_columns() {
        let csv = "method,url\nGET,https://a.example\npost,https://b.example\n";
        let payloads = parse_csv(csv.as_bytes()).unwrap();

        assert_eq!(payloads.len(), 2);
        assert_eq!(payloads[0].method, HttpMethod::Get);
        assert_eq!(payloads[1].method, HttpMethod::Post);
        assert_eq!(payloads[0].auth.auth_type, "No_Auth");
        assert_eq!(payloads[0].api_id, None);
    }

    #[test]
    fn test_missing_url_aborts_with_row_number() {
        let csv = "method,url\nGET,https://a.example\nGET,\nGET,https://c.example\n";
        let err = parse_csv(csv.as_bytes()).unwrap_err();
        assert_eq!(
            err,
            CsvImportError::MissingField {
                row: 2,
                field: "url"
            }
        );
    }

    #[test]
    fn test_missing_method_aborts_with_row_number() {
        let csv = "method,url\n,https://a.example\n";
        let err = parse_csv(csv.as_bytes()).unwrap_err();
        assert_eq!(
            err,
            CsvImportError::MissingField {
                row: 1,
                field: "method"
            }
        );
    }

    #[test]
    fn test_unsupported_method_aborts() {
        let csv = "method,url\nTRACE,https://a.example\n";
        let err = parse_csv(csv.as_bytes()).unwrap_err();
        assert_eq!(
            err,
            CsvImportError::UnsupportedMethod {
                row: 1,
                method: "TRACE".to_string()
            }
        );
    }

    #[test]
    fn test_auth_labels_in_either_spelling() {
        let csv = "method,url,authType,token\n\
                   GET,https://a.example,Bearer Token,abc\n\
                   GET,https://b.example,Bearer_Token,def\n";
        let payloads = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(payloads[0].auth.auth_type, "Bearer_Token");
        assert_eq!(payloads[0].auth.token, "abc");
        assert_eq!(payloads[1].auth.auth_type, "Bearer_Token");
        assert_eq!(payloads[1].auth.token, "def");
    }

    #[test]
    fn test_unknown_auth_type_defaults_to_no_auth() {
        let csv = "method,url,authType,token\nGET,https://a.example,Hawk,abc\n";
        let payloads = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(payloads[0].auth.auth_type, "No_Auth");
        // The stray token is not carried along.
        assert_eq!(payloads[0].auth.token, "");
    }

    #[test]
    fn test_malformed_json_cell_degrades_to_empty() {
        let csv = "method,url,params\nGET,https://a.example,not-json\n";
        let payloads = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(payloads[0].params, Vec::<FormRow>::new());
    }

    #[test]
    fn test_json_cells_accept_rows_and_maps() {
        let csv = "method,url,params,headers\n\
                   GET,https://a.example,\"[{\"\"key\"\":\"\"page\"\",\"\"value\"\":\"\"1\"\"}]\",\"{\"\"Accept\"\":\"\"application/json\"\"}\"\n";
        let payloads = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(payloads[0].params, vec![FormRow::new("page", "1")]);
        assert_eq!(
            payloads[0].headers,
            vec![FormRow::new("Accept", "application/json")]
        );
    }

    #[test]
    fn test_header_only_file_yields_empty_batch() {
        let payloads = parse_csv("method,url\n".as_bytes()).unwrap();
        assert!(payloads.is_empty());
    }
}
