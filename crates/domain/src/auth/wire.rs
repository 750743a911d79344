//! Flattened wire representation of auth profiles.
//!
//! The backend stores one flat record per request: a normalized `authType`
//! discriminator plus every credential field, empty-string when the field
//! does not apply to the active type. This module owns the mapping in both
//! directions, including the label normalization rules.

use serde::{Deserialize, Serialize};

use super::AuthConfig;

/// Normalizes a display label into its wire form.
///
/// Spaces and dots become underscores: `"Bearer Token"` -> `"Bearer_Token"`,
/// `"OAuth 2.0"` -> `"OAuth_2_0"`.
#[must_use]
pub fn wire_label(label: &str) -> String {
    label.replace([' ', '.'], "_")
}

/// Recovers the display label from a wire discriminator.
///
/// Underscores become spaces again; `"OAuth_2_0"` is special-cased because
/// the mechanical reversal would yield `"OAuth 2 0"`.
#[must_use]
pub fn display_label(wire: &str) -> String {
    if wire == "OAuth_2_0" {
        "OAuth 2.0".to_string()
    } else {
        wire.replace('_', " ")
    }
}

/// The flattened auth fragment of a wire payload.
///
/// All fields are always present on the wire; inapplicable ones carry an
/// empty string. Unknown discriminators map back to [`AuthConfig::None`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WireAuth {
    /// Normalized auth-type discriminator (e.g. `Bearer_Token`).
    pub auth_type: String,
    /// Bearer or OAuth access token.
    pub token: String,
    /// Basic auth username.
    pub username: String,
    /// Basic auth password.
    pub password: String,
    /// API key header name.
    pub key: String,
    /// API key header value.
    pub value: String,
    /// OAuth token endpoint URL.
    pub access_token_url: String,
    /// OAuth grant type.
    pub grant_type: String,
    /// OAuth client ID.
    pub client_id: String,
    /// OAuth client secret.
    pub client_secret: String,
    /// OAuth client authentication method.
    pub client_auth_method: String,
    /// OAuth scopes.
    pub scope: String,
    /// AWS access key ID.
    pub access_key: String,
    /// AWS secret access key.
    pub secret_key: String,
    /// AWS region.
    pub region: String,
    /// AWS service name.
    pub service: String,
    /// AWS session token.
    pub session_token: String,
}

impl Default for WireAuth {
    fn default() -> Self {
        Self {
            auth_type: "No_Auth".to_string(),
            token: String::new(),
            username: String::new(),
            password: String::new(),
            key: String::new(),
            value: String::new(),
            access_token_url: String::new(),
            grant_type: String::new(),
            client_id: String::new(),
            client_secret: String::new(),
            client_auth_method: String::new(),
            scope: String::new(),
            access_key: String::new(),
            secret_key: String::new(),
            region: String::new(),
            service: String::new(),
            session_token: String::new(),
        }
    }
}

impl WireAuth {
    /// The `No_Auth` fragment with every credential field empty.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Forward mapping: profile -> flattened wire fragment.
    #[must_use]
    pub fn from_config(config: &AuthConfig) -> Self {
        let mut wire = Self {
            auth_type: config.wire_label().to_string(),
            ..Self::default()
        };

        match config {
            AuthConfig::None | AuthConfig::InheritFromParent => {}
            AuthConfig::Basic { username, password } => {
                wire.username.clone_from(username);
                wire.password.clone_from(password);
            }
            AuthConfig::Bearer { token } => {
                wire.token.clone_from(token);
            }
            AuthConfig::ApiKey { key, value } => {
                wire.key.clone_from(key);
                wire.value.clone_from(value);
            }
            AuthConfig::OAuth2 {
                access_token_url,
                grant_type,
                client_id,
                client_secret,
                client_auth_method,
                scope,
                token,
            } => {
                wire.access_token_url.clone_from(access_token_url);
                wire.grant_type.clone_from(grant_type);
                wire.client_id.clone_from(client_id);
                wire.client_secret.clone_from(client_secret);
                wire.client_auth_method.clone_from(client_auth_method);
                wire.scope.clone_from(scope);
                wire.token.clone_from(token);
            }
            AuthConfig::AwsSignature {
                access_key,
                secret_key,
                region,
                service,
                session_token,
            } => {
                wire.access_key.clone_from(access_key);
                wire.secret_key.clone_from(secret_key);
                wire.region.clone_from(region);
                wire.service.clone_from(service);
                wire.session_token.clone_from(session_token);
            }
        }

        wire
    }

    /// Reverse mapping: flattened wire fragment -> profile.
    ///
    /// Unknown or missing discriminators default to [`AuthConfig::None`]
    /// rather than erroring, so stale records never block loading.
    #[must_use]
    pub fn to_config(&self) -> AuthConfig {
        match self.auth_type.as_str() {
            "Basic_Auth" => AuthConfig::Basic {
                username: self.username.clone(),
                password: self.password.clone(),
            },
            "Bearer_Token" => AuthConfig::Bearer {
                token: self.token.clone(),
            },
            "API_Key" => AuthConfig::ApiKey {
                key: self.key.clone(),
                value: self.value.clone(),
            },
            "OAuth_2_0" => AuthConfig::OAuth2 {
                access_token_url: self.access_token_url.clone(),
                grant_type: self.grant_type.clone(),
                client_id: self.client_id.clone(),
                client_secret: self.client_secret.clone(),
                client_auth_method: self.client_auth_method.clone(),
                scope: self.scope.clone(),
                token: self.token.clone(),
            },
            "AWS_Signature" => AuthConfig::AwsSignature {
                access_key: self.access_key.clone(),
                secret_key: self.secret_key.clone(),
                region: self.region.clone(),
                service: self.service.clone(),
                session_token: self.session_token.clone(),
            },
            "Inherit_from_Parent" => AuthConfig::InheritFromParent,
            _ => AuthConfig::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn known_configs() -> Vec<AuthConfig> {
        vec![
            AuthConfig::None,
            AuthConfig::basic("user", "pass"),
            AuthConfig::bearer("tok-123"),
            AuthConfig::api_key("X-Api-Key", "secret"),
            AuthConfig::OAuth2 {
                access_token_url: "https://auth.example.com/token".to_string(),
                grant_type: "client_credentials".to_string(),
                client_id: "cid".to_string(),
                client_secret: "cs".to_string(),
                client_auth_method: "basic".to_string(),
                scope: "read write".to_string(),
                token: "oauth-tok".to_string(),
            },
            AuthConfig::AwsSignature {
                access_key: "AKIA".to_string(),
                secret_key: "shhh".to_string(),
                region: "eu-west-1".to_string(),
                service: "execute-api".to_string(),
                session_token: String::new(),
            },
            AuthConfig::InheritFromParent,
        ]
    }

    #[test]
    fn test_label_normalization() {
        assert_eq!(wire_label("No Auth"), "No_Auth");
        assert_eq!(wire_label("Basic Auth"), "Basic_Auth");
        assert_eq!(wire_label("Bearer Token"), "Bearer_Token");
        assert_eq!(wire_label("API Key"), "API_Key");
        assert_eq!(wire_label("OAuth 2.0"), "OAuth_2_0");
        assert_eq!(wire_label("AWS Signature"), "AWS_Signature");
        assert_eq!(wire_label("Inherit from Parent"), "Inherit_from_Parent");
    }

    #[test]
    fn test_display_label_reversal() {
        assert_eq!(display_label("Bearer_Token"), "Bearer Token");
        assert_eq!(display_label("OAuth_2_0"), "OAuth 2.0");
        assert_eq!(display_label("Inherit_from_Parent"), "Inherit from Parent");
    }

    #[test]
    fn test_ui_labels_normalize_to_wire_labels() {
        for config in known_configs() {
            assert_eq!(wire_label(config.ui_label()), config.wire_label());
        }
    }

    #[test]
    fn test_forward_then_reverse_is_identity() {
        for config in known_configs() {
            let wire = WireAuth::from_config(&config);
            assert_eq!(wire.to_config(), config, "round trip for {config:?}");
        }
    }

    #[test]
    fn test_unknown_type_defaults_to_none() {
        let wire = WireAuth {
            auth_type: "Hawk_Auth".to_string(),
            ..WireAuth::default()
        };
        assert_eq!(wire.to_config(), AuthConfig::None);

        let wire = WireAuth {
            auth_type: String::new(),
            ..WireAuth::default()
        };
        assert_eq!(wire.to_config(), AuthConfig::None);
    }

    #[test]
    fn test_inapplicable_fields_are_empty() {
        let wire = WireAuth::from_config(&AuthConfig::bearer("abc"));
        assert_eq!(wire.auth_type, "Bearer_Token");
        assert_eq!(wire.token, "abc");
        assert_eq!(wire.username, "");
        assert_eq!(wire.key, "");
        assert_eq!(wire.access_key, "");
    }
}
