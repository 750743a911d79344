//! Application error types

use thiserror::Error;

use restbench_domain::DomainError;

use crate::bulk::CsvImportError;

/// Application-level errors.
///
/// Every failure is terminal to the triggering user action and non-fatal
/// to the application; there is no automatic retry or offline queueing.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Transport-level HTTP failure (timeout, connection, DNS).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The backend rejected the call; carries its message when it sent one.
    #[error("backend error ({status}): {message}")]
    Backend {
        /// HTTP status the backend answered with.
        status: u16,
        /// Backend-provided message, or the status text.
        message: String,
    },

    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// No session; the user must log in first.
    #[error("not logged in")]
    Unauthorized,

    /// A CSV bulk import was rejected before submission.
    #[error(transparent)]
    CsvImport(#[from] CsvImportError),

    /// The session could not be loaded or stored.
    #[error("session error: {0}")]
    Session(String),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
