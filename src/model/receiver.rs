//! Receivers and their per-channel notification configurations
//!
//! A receiver is a named bundle of channel configurations referenced from
//! routes by name. Every channel family is a list: a receiver may carry
//! several configurations of the same type (for example two webhook targets),
//! and order is preserved.

use crate::model::global::HostPort;
use crate::model::http::HttpClientConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// A named bundle of notification-channel configurations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Receiver {
    /// Unique within the document; routes reference receivers by this name
    pub name: String,
    pub pagerduty_configs: Vec<PagerdutyConfig>,
    pub email_configs: Vec<EmailConfig>,
    pub wechat_configs: Vec<WeChatConfig>,
    pub webhook_configs: Vec<WebhookConfig>,
    pub pushover_configs: Vec<PushoverConfig>,
}

/// Generic webhook target.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Tri-state: unset, explicitly true, explicitly false
    pub send_resolved: Option<bool>,
    pub http_config: Option<HttpClientConfig>,
    pub url: String,
    pub max_alerts: i64,
}

/// SMTP delivery target.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmailConfig {
    pub send_resolved: Option<bool>,
    pub to: String,
    pub from: String,
    pub hello: String,
    pub smarthost: HostPort,
    pub auth_username: String,
    pub auth_password: String,
    pub auth_secret: String,
    pub auth_identity: String,
    pub headers: HashMap<String, String>,
    pub html: String,
    pub text: String,
    pub require_tls: Option<bool>,
}

/// WeChat enterprise-gateway target.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WeChatConfig {
    pub send_resolved: Option<bool>,
    pub http_config: Option<HttpClientConfig>,
    pub api_secret: String,
    pub api_url: String,
    pub corp_id: String,
    pub agent_id: String,
    pub to_user: String,
    pub to_party: String,
    pub to_tag: String,
    pub message: String,
    pub message_type: String,
}

/// PagerDuty incident target.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PagerdutyConfig {
    pub send_resolved: Option<bool>,
    pub http_config: Option<HttpClientConfig>,
    /// Events API v2 integration key
    pub routing_key: String,
    /// Events API v1 integration key
    pub service_key: String,
    pub url: String,
    pub client: String,
    pub client_url: String,
    pub description: String,
    pub severity: String,
    pub class: String,
    pub component: String,
    pub group: String,
    pub details: HashMap<String, String>,
    pub images: Vec<PagerdutyImage>,
    pub links: Vec<PagerdutyLink>,
}

/// Image attachment on a PagerDuty incident.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PagerdutyImage {
    pub src: String,
    pub alt: String,
    pub href: String,
}

/// Link attachment on a PagerDuty incident.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PagerdutyLink {
    pub text: String,
    pub href: String,
}

/// Pushover push-notification target.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PushoverConfig {
    pub send_resolved: Option<bool>,
    pub http_config: Option<HttpClientConfig>,
    pub user_key: String,
    pub token: String,
    pub title: String,
    pub message: String,
    pub url: String,
    pub url_title: String,
    pub sound: String,
    pub priority: String,
    pub retry: Duration,
    pub expire: Duration,
    pub html: bool,
}
