//! Global defaults block
//!
//! Document-wide defaults: SMTP relay settings, the default resolve timeout,
//! default webhook integration URLs, and a default HTTP client configuration.

use crate::model::http::HttpClientConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use url::Url;

/// Global defaults applied when a receiver leaves a field unset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// How long to wait before resolving an alert that stopped firing
    pub resolve_timeout: Option<Duration>,
    pub pagerduty_url: Option<Url>,
    pub slack_api_url: Option<Url>,
    pub smtp_from: String,
    pub smtp_hello: String,
    pub smtp_smarthost: HostPort,
    pub smtp_auth_username: String,
    pub smtp_auth_password: String,
    pub smtp_auth_secret: String,
    pub smtp_auth_identity: String,
    /// Tri-state: unset, explicitly true, explicitly false
    pub smtp_require_tls: Option<bool>,
    pub http_config: Option<HttpClientConfig>,
}

/// A `host:port` pair kept as two strings.
///
/// Parsing is permissive: a string with no colon yields an empty pair rather
/// than an error, so legacy documents with malformed relay addresses stay
/// loadable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HostPort {
    pub host: String,
    pub port: String,
}

impl HostPort {
    /// Split a `host:port` string. IPv6 literals in brackets are supported
    /// (`[::1]:25`); input without a colon decodes to an empty pair.
    pub fn parse(s: &str) -> Self {
        match s.rsplit_once(':') {
            Some((host, port)) => HostPort {
                host: host
                    .strip_prefix('[')
                    .and_then(|h| h.strip_suffix(']'))
                    .unwrap_or(host)
                    .to_string(),
                port: port.to_string(),
            },
            None => HostPort::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.host.is_empty() && self.port.is_empty()
    }
}

impl fmt::Display for HostPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}
