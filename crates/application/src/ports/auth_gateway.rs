//! Credential exchange port

use std::future::Future;

use restbench_domain::WireAuth;

use crate::ApplicationResult;
use crate::session::Session;

/// Port for credential exchange with the backend.
pub trait AuthGateway: Send + Sync {
    /// Exchanges username/password for a session.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or rejected credentials.
    fn login(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = ApplicationResult<Session>> + Send;

    /// Registers a new account and returns its first session.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or backend rejection.
    fn register(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = ApplicationResult<Session>> + Send;

    /// Exchanges an `OAuth 2.0` profile for an access token through the
    /// backend's server-side token proxy.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a rejected exchange.
    fn exchange_oauth2_token(
        &self,
        auth: &WireAuth,
    ) -> impl Future<Output = ApplicationResult<String>> + Send;
}
