//! HTTP client sub-configuration
//!
//! Carried by most notification channels for outbound delivery. Each nested
//! credential block is independently optional; the upstream service treats
//! at most one of basic auth / bearer token / authorization header / OAuth2
//! as meaningful, but this layer is a pure carrier and does not enforce
//! mutual exclusion.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// HTTP client settings for a notification channel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HttpClientConfig {
    pub proxy_url: String,
    /// Tri-state: unset, explicitly true, explicitly false
    pub follow_redirects: Option<bool>,
    pub bearer_token: String,
    pub authorization: Option<Authorization>,
    pub basic_auth: Option<BasicAuth>,
    pub oauth2: Option<OAuth2Config>,
    pub tls_config: Option<TlsConfig>,
}

/// OAuth2 client-credentials flow settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OAuth2Config {
    pub client_id: String,
    pub client_secret: String,
    pub token_url: String,
    pub scopes: Vec<String>,
    pub endpoint_params: HashMap<String, String>,
}

/// Username/password credentials.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

/// An `Authorization` request header: scheme plus credentials.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Authorization {
    pub auth_type: String,
    pub credentials: String,
}

/// TLS settings for outbound delivery.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TlsConfig {
    pub server_name: String,
    pub insecure_skip_verify: bool,
}
