//! Restbench Infrastructure - Adapters
//!
//! Concrete implementations of the application ports: the reqwest-based
//! backend client and the file-based session store.

pub mod http;
pub mod persistence;

pub use http::BackendClient;
pub use persistence::FileSessionStore;
