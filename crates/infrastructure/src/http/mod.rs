//! HTTP adapters for the backend service

mod backend_client;

pub use backend_client::BackendClient;
