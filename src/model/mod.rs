//! Typed notification-routing configuration
//!
//! This module defines the domain object graph that the codec decodes into
//! and encodes from: one optional global-defaults block, named receivers,
//! a recursive routing tree, inhibition rules, and named mute-time-interval
//! calendars. The graph is strictly tree-shaped and single-owner; routes and
//! inhibition rules refer to receivers and time intervals by name only, so
//! there are no cycles and nothing to validate at this layer.

pub mod global;
pub mod http;
pub mod receiver;
pub mod route;
pub mod time;

pub use global::{GlobalConfig, HostPort};
pub use http::{Authorization, BasicAuth, HttpClientConfig, OAuth2Config, TlsConfig};
pub use receiver::{
    EmailConfig, PagerdutyConfig, PagerdutyImage, PagerdutyLink, PushoverConfig, Receiver,
    WeChatConfig, WebhookConfig,
};
pub use route::Route;
pub use time::{InclusiveRange, MuteTimeInterval, TimeInterval, TimeRange};

use serde::{Deserialize, Serialize};

/// The complete notification-routing configuration document.
///
/// Constructed fresh on every decode and discarded after the matching
/// encode; never cached or mutated in place across calls.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AlertmanagerConfig {
    /// Global defaults applied to receivers that leave fields unset
    pub global: Option<GlobalConfig>,
    /// Named receivers, referenced from routes by name
    pub receivers: Vec<Receiver>,
    /// Root of the routing policy tree
    pub route: Route,
    /// Alert inhibition rules
    pub inhibit_rules: Vec<InhibitRule>,
    /// Named time-interval calendars referenced from routes
    pub mute_time_intervals: Vec<MuteTimeInterval>,
}

/// A rule that suppresses alerts matching the target matchers while an alert
/// matching the source matchers is firing, provided the labels named in
/// `equal` agree between the two.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InhibitRule {
    pub source_matchers: Vec<String>,
    pub target_matchers: Vec<String>,
    pub equal: Vec<String>,
}
