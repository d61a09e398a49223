//! Bidirectional configuration codec for Alertmanager notification routing
//!
//! This crate translates between a flat, declaratively-authored document
//! representation (nested key/value block lists, as produced by an
//! infrastructure-as-code tool) and the strongly-typed, hierarchical
//! notification-routing configuration consumed by an alert-management
//! service.
//!
//! Two inverse pipelines share one type hierarchy:
//!
//! - [`expand_config`] decodes an untyped [`serde_json::Value`] document into
//!   a validated [`AlertmanagerConfig`] object graph.
//! - [`flatten_config`] encodes the graph back into the flat representation,
//!   suitable for persistence.
//!
//! Decoding is deliberately permissive: malformed durations, `host:port`
//! strings, and URLs fall back to zero values so partial or legacy documents
//! stay loadable. The only hard failure is a shape mismatch, surfaced as
//! [`ConfigError::TypeMismatch`] with the offending field path. Encoding is
//! total.
//!
//! ```
//! use alertmanager_config_codec::{expand_config, flatten_config};
//! use serde_json::json;
//!
//! let doc = json!({
//!     "route": [{ "receiver": "oncall", "group_wait": "30s" }],
//!     "receiver": [{ "name": "oncall", "webhook_configs": [
//!         { "url": "https://hooks.example.org/am" }
//!     ]}]
//! });
//! let config = expand_config(&doc).unwrap();
//! assert_eq!(config.route.receiver, "oncall");
//!
//! let flat = flatten_config(&config);
//! assert_eq!(expand_config(&flat).unwrap(), config);
//! ```

pub mod codec;
pub mod duration;
pub mod error;
pub mod loader;
pub mod model;
pub mod value;

pub use codec::{expand_config, flatten_config};
pub use error::{ConfigError, Result};
pub use loader::{from_json_str, load_document, save_document, to_json_string};
pub use model::{
    AlertmanagerConfig, Authorization, BasicAuth, EmailConfig, GlobalConfig, HostPort,
    HttpClientConfig, InclusiveRange, InhibitRule, MuteTimeInterval, OAuth2Config,
    PagerdutyConfig, PagerdutyImage, PagerdutyLink, PushoverConfig, Receiver, Route,
    TimeInterval, TimeRange, TlsConfig, WeChatConfig, WebhookConfig,
};
