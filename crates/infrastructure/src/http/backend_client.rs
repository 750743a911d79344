//! Backend HTTP client implementation using reqwest.
//!
//! One adapter implements every backend-facing port: test execution,
//! history and collection CRUD, and credential exchange. The backend owns
//! all persistence; this client only maps wire shapes and surfaces backend
//! messages as errors.

use std::time::{Duration, Instant};

use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use restbench_application::ports::{
    AuthGateway, CollectionRepository, HistoryRepository, TestRunner,
};
use restbench_application::{ApplicationError, ApplicationResult, Session};
use restbench_domain::{
    BulkReport, Collection, CollectionPayload, RequestRecord, ResultRow, TestPayload, WireAuth,
};

/// Request timeout applied to every backend call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Backend HTTP client.
///
/// Cloning is cheap; the underlying connection pool is shared. Calls to
/// authenticated endpoints require a session to have been attached with
/// [`BackendClient::with_session`].
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base: Url,
    session: Option<Session>,
}

/// Error body the backend sends alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct BackendMessage {
    message: String,
}

/// Response shape of `POST /api/test`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExecuteResponse {
    #[serde(default)]
    status_code: Option<u16>,
    #[serde(default)]
    body: Option<serde_json::Value>,
    #[serde(default)]
    api_id: Option<String>,
    #[serde(default, rename = "responseTime", alias = "reponse_time")]
    response_time_ms: Option<u64>,
}

/// Response shape of the login/register endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CredentialResponse {
    token: String,
    user_id: String,
}

/// Response shape of the OAuth token proxy.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    access_token: Option<String>,
}

#[derive(Debug, serde::Serialize)]
struct CredentialRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, serde::Serialize)]
struct NamePatch<'a> {
    name: &'a str,
}

/// The subset of the auth fragment the token proxy needs.
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenExchangeRequest<'a> {
    access_token_url: &'a str,
    grant_type: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
    client_auth_method: &'a str,
    scope: &'a str,
}

impl BackendClient {
    /// Creates a client against the given base URL.
    ///
    /// The base URL should end with a slash when it carries a path
    /// prefix; endpoint paths are joined relative to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base: Url) -> ApplicationResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("Restbench/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(10))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApplicationError::Http(e.to_string()))?;

        Ok(Self {
            client,
            base,
            session: None,
        })
    }

    /// Attaches the session whose token is sent with every call.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    fn endpoint(&self, path: &str) -> ApplicationResult<Url> {
        self.base
            .join(path)
            .map_err(|e| ApplicationError::Http(format!("invalid endpoint {path}: {e}")))
    }

    fn request(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> ApplicationResult<reqwest::RequestBuilder> {
        let url = self.endpoint(path)?;
        tracing::debug!(%method, %url, "backend call");
        let mut builder = self.client.request(method, url);
        if let Some(session) = &self.session {
            builder = builder.bearer_auth(&session.token);
        }
        Ok(builder)
    }

    fn map_transport(error: &reqwest::Error) -> ApplicationError {
        if error.is_timeout() {
            return ApplicationError::Http(format!(
                "request timed out after {}s",
                REQUEST_TIMEOUT.as_secs()
            ));
        }
        if error.is_connect() {
            return ApplicationError::Http(format!("connection failed: {error}"));
        }
        ApplicationError::Http(error.to_string())
    }

    async fn send(builder: reqwest::RequestBuilder) -> ApplicationResult<Response> {
        let response = builder
            .send()
            .await
            .map_err(|e| Self::map_transport(&e))?;
        Self::check(response).await
    }

    async fn send_json<T: DeserializeOwned>(
        builder: reqwest::RequestBuilder,
    ) -> ApplicationResult<T> {
        let response = Self::send(builder).await?;
        response
            .json()
            .await
            .map_err(|e| ApplicationError::Http(format!("invalid backend response: {e}")))
    }

    /// Surfaces non-2xx answers as errors, preferring the backend's own
    /// `message` body over the status text.
    async fn check(response: Response) -> ApplicationResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApplicationError::Unauthorized);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<BackendMessage>(&body).map_or_else(
            |_| {
                if body.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                } else {
                    body.clone()
                }
            },
            |m| m.message,
        );
        tracing::warn!(%status, message, "backend rejected request");
        Err(ApplicationError::Backend {
            status: status.as_u16(),
            message,
        })
    }

    fn stringify_body(value: serde_json::Value) -> String {
        match value {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        }
    }
}

impl TestRunner for BackendClient {
    async fn execute(&self, payload: &TestPayload) -> ApplicationResult<ResultRow> {
        let started = Instant::now();
        let response: ExecuteResponse =
            Self::send_json(self.request(reqwest::Method::POST, "api/test")?.json(payload))
                .await?;

        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        Ok(ResultRow {
            testcase_id: response.api_id,
            method: payload.method,
            url: payload.url.clone(),
            body: payload.body.clone(),
            status_code: response.status_code,
            response_time_ms: response.response_time_ms.or(Some(elapsed_ms)),
            response_body: response.body.map(Self::stringify_body),
        })
    }

    async fn bulk(&self, payloads: &[TestPayload]) -> ApplicationResult<BulkReport> {
        Self::send_json(
            self.request(reqwest::Method::POST, "api/bulk-test")?
                .json(payloads),
        )
        .await
    }

    async fn run_collection(&self, collection_id: &str) -> ApplicationResult<BulkReport> {
        let path = format!("api/bulk-test/collection/{collection_id}");
        Self::send_json(self.request(reqwest::Method::POST, &path)?).await
    }
}

impl HistoryRepository for BackendClient {
    async fn list(&self) -> ApplicationResult<Vec<RequestRecord>> {
        let payloads: Vec<TestPayload> =
            Self::send_json(self.request(reqwest::Method::GET, "api/history")?).await?;
        Ok(payloads.into_iter().map(TestPayload::into_record).collect())
    }

    async fn save(&self, payload: &TestPayload) -> ApplicationResult<RequestRecord> {
        let saved: TestPayload = Self::send_json(
            self.request(reqwest::Method::POST, "api/history/save")?
                .json(payload),
        )
        .await?;
        Ok(saved.into_record())
    }

    async fn update(&self, api_id: &str, payload: &TestPayload) -> ApplicationResult<RequestRecord> {
        let path = format!("api/history/{api_id}");
        let updated: TestPayload =
            Self::send_json(self.request(reqwest::Method::PUT, &path)?.json(payload)).await?;
        Ok(updated.into_record())
    }

    async fn delete(&self, api_id: &str) -> ApplicationResult<()> {
        let path = format!("api/history/{api_id}");
        Self::send(self.request(reqwest::Method::DELETE, &path)?).await?;
        Ok(())
    }
}

impl CollectionRepository for BackendClient {
    async fn list(&self) -> ApplicationResult<Vec<Collection>> {
        let payloads: Vec<CollectionPayload> =
            Self::send_json(self.request(reqwest::Method::GET, "api/collections")?).await?;
        Ok(payloads
            .into_iter()
            .map(CollectionPayload::into_collection)
            .collect())
    }

    async fn create(&self, name: &str) -> ApplicationResult<Collection> {
        let created: CollectionPayload = Self::send_json(
            self.request(reqwest::Method::POST, "api/collections")?
                .json(&NamePatch { name }),
        )
        .await?;
        Ok(created.into_collection())
    }

    async fn rename(&self, collection_id: &str, name: &str) -> ApplicationResult<Collection> {
        let path = format!("api/collections/{collection_id}");
        let renamed: CollectionPayload = Self::send_json(
            self.request(reqwest::Method::PATCH, &path)?
                .json(&NamePatch { name }),
        )
        .await?;
        Ok(renamed.into_collection())
    }

    async fn delete(&self, collection_id: &str) -> ApplicationResult<()> {
        let path = format!("api/collections/{collection_id}");
        Self::send(self.request(reqwest::Method::DELETE, &path)?).await?;
        Ok(())
    }
}

impl AuthGateway for BackendClient {
    async fn login(&self, username: &str, password: &str) -> ApplicationResult<Session> {
        let response: CredentialResponse = Self::send_json(
            self.request(reqwest::Method::POST, "api/auth/login")?
                .json(&CredentialRequest { username, password }),
        )
        .await?;
        Ok(Session::new(response.token, response.user_id))
    }

    async fn register(&self, username: &str, password: &str) -> ApplicationResult<Session> {
        let response: CredentialResponse = Self::send_json(
            self.request(reqwest::Method::POST, "api/auth/register")?
                .json(&CredentialRequest { username, password }),
        )
        .await?;
        Ok(Session::new(response.token, response.user_id))
    }

    async fn exchange_oauth2_token(&self, auth: &WireAuth) -> ApplicationResult<String> {
        let response: TokenResponse = Self::send_json(
            self.request(reqwest::Method::POST, "api/proxy/oauth2/token")?
                .json(&TokenExchangeRequest {
                    access_token_url: &auth.access_token_url,
                    grant_type: &auth.grant_type,
                    client_id: &auth.client_id,
                    client_secret: &auth.client_secret,
                    client_auth_method: &auth.client_auth_method,
                    scope: &auth.scope,
                }),
        )
        .await?;

        response
            .token
            .or(response.access_token)
            .ok_or_else(|| ApplicationError::Http("token proxy returned no token".to_string()))
    }
}
