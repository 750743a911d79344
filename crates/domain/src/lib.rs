//! Restbench Domain - Core business types
//!
//! This crate defines the domain model for the Restbench API test
//! workbench. All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod collection;
pub mod error;
pub mod payload;
pub mod record;
pub mod report;
pub mod request;

pub use auth::{AuthConfig, WireAuth, display_label, wire_label};
pub use collection::Collection;
pub use error::{DomainError, DomainResult};
pub use payload::{CollectionPayload, TestPayload};
pub use record::RequestRecord;
pub use report::{BulkReport, ResultRow};
pub use request::{FormRow, HttpMethod};
