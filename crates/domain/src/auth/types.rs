//! Authentication configuration types

use serde::{Deserialize, Serialize};

/// Authentication profile for a request or a collection.
///
/// Exactly one variant is active at a time; each variant carries only the
/// fields relevant to its type. A collection's profile uses the same type,
/// minus any meaningful interpretation of [`AuthConfig::InheritFromParent`]
/// (collections are the root of the inheritance chain).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthConfig {
    /// No authentication
    #[default]
    None,
    /// HTTP Basic authentication
    Basic {
        /// Username
        username: String,
        /// Password
        password: String,
    },
    /// Bearer token authentication
    Bearer {
        /// The bearer token
        token: String,
    },
    /// API Key authentication, sent as a custom header pair
    ApiKey {
        /// Header name
        key: String,
        /// Header value
        value: String,
    },
    /// `OAuth 2.0`, exchanged through the backend token proxy
    #[serde(rename = "oauth2")]
    OAuth2 {
        /// Token endpoint URL
        access_token_url: String,
        /// Grant type (e.g. `client_credentials`)
        grant_type: String,
        /// Client ID
        client_id: String,
        /// Client secret
        client_secret: String,
        /// How client credentials are sent to the token endpoint
        client_auth_method: String,
        /// Space-separated scopes
        scope: String,
        /// Access token once the proxy exchange has completed
        token: String,
    },
    /// AWS Signature v4 credentials; signing happens backend-side
    AwsSignature {
        /// Access key ID
        access_key: String,
        /// Secret access key
        secret_key: String,
        /// AWS region
        region: String,
        /// AWS service name
        service: String,
        /// Optional session token for temporary credentials
        session_token: String,
    },
    /// Defer to the containing collection's profile at send time
    InheritFromParent,
}

impl AuthConfig {
    /// Returns true if authentication is configured (not [`Self::None`]).
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns true if this profile defers to the parent collection.
    #[must_use]
    pub const fn inherits(&self) -> bool {
        matches!(self, Self::InheritFromParent)
    }

    /// The label shown in auth-type selectors.
    #[must_use]
    pub const fn ui_label(&self) -> &'static str {
        match self {
            Self::None => "No Auth",
            Self::Basic { .. } => "Basic Auth",
            Self::Bearer { .. } => "Bearer Token",
            Self::ApiKey { .. } => "API Key",
            Self::OAuth2 { .. } => "OAuth 2.0",
            Self::AwsSignature { .. } => "AWS Signature",
            Self::InheritFromParent => "Inherit from Parent",
        }
    }

    /// The normalized discriminator used on the wire.
    #[must_use]
    pub const fn wire_label(&self) -> &'static str {
        match self {
            Self::None => "No_Auth",
            Self::Basic { .. } => "Basic_Auth",
            Self::Bearer { .. } => "Bearer_Token",
            Self::ApiKey { .. } => "API_Key",
            Self::OAuth2 { .. } => "OAuth_2_0",
            Self::AwsSignature { .. } => "AWS_Signature",
            Self::InheritFromParent => "Inherit_from_Parent",
        }
    }

    /// Creates a bearer token authentication.
    #[must_use]
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Creates a basic authentication.
    #[must_use]
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Creates an API key authentication.
    #[must_use]
    pub fn api_key(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ApiKey {
            key: key.into(),
            value: value.into(),
        }
    }
}
