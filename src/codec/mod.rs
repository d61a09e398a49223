//! Bidirectional transformation between flat documents and typed configuration
//!
//! The decode direction ("expand") turns an untyped nested document into a
//! validated [`AlertmanagerConfig`]; the encode direction ("flatten") is its
//! inverse. Every converter here is a pure function: no shared state, no
//! I/O, and independent documents can be transformed concurrently without
//! coordination.
//!
//! Deep validation — matcher syntax, receiver-name resolution, time-interval
//! well-formedness — is explicitly out of scope; this layer only enforces the
//! shape of the untyped input.

pub mod global;
pub mod http;
pub mod inhibit;
pub mod receiver;
pub mod route;
pub mod time;

pub use global::{expand_global, flatten_global};
pub use http::{
    expand_authorization, expand_basic_auth, expand_http_config, expand_oauth2,
    expand_tls_config, flatten_authorization, flatten_basic_auth, flatten_http_config,
    flatten_oauth2, flatten_tls_config,
};
pub use inhibit::{expand_inhibit_rules, flatten_inhibit_rules};
pub use receiver::{
    expand_email_configs, expand_pagerduty_configs, expand_pushover_configs, expand_receivers,
    expand_webhook_configs, expand_wechat_configs, flatten_email_configs,
    flatten_pagerduty_configs, flatten_pushover_configs, flatten_receivers,
    flatten_webhook_configs, flatten_wechat_configs,
};
pub use route::{expand_route, flatten_route};
pub use time::{
    expand_mute_time_intervals, expand_time_intervals, flatten_mute_time_intervals,
    flatten_time_intervals,
};

use crate::error::Result;
use crate::model::AlertmanagerConfig;
use crate::value;
use serde_json::{Map, Value};
use tracing::debug;

/// Decode a complete flat document into the typed configuration graph.
///
/// The document is an object under the fixed top-level keys `global`,
/// `receiver`, `route`, `inhibit_rule`, and `mute_time_interval`, each
/// carrying a block list. Absent keys decode to empty/absent components; an
/// absent or empty `route` list decodes to the zero-valued root route.
pub fn expand_config(doc: &Value) -> Result<AlertmanagerConfig> {
    let obj = value::as_object(doc, "document")?;
    debug!(keys = obj.len(), "expanding alertmanager configuration");

    let mut conf = AlertmanagerConfig::default();
    if let Some(items) = value::seq_field(obj, "global", "")? {
        conf.global = expand_global(items, "global")?;
    }
    if let Some(items) = value::seq_field(obj, "receiver", "")? {
        conf.receivers = expand_receivers(items, "receiver")?;
    }
    if let Some(items) = value::seq_field(obj, "route", "")? {
        conf.route = expand_route(items, "route")?;
    }
    if let Some(items) = value::seq_field(obj, "inhibit_rule", "")? {
        conf.inhibit_rules = expand_inhibit_rules(items, "inhibit_rule")?;
    }
    if let Some(items) = value::seq_field(obj, "mute_time_interval", "")? {
        conf.mute_time_intervals = expand_mute_time_intervals(items, "mute_time_interval")?;
    }
    Ok(conf)
}

/// Encode the typed configuration graph back into a flat document.
///
/// Encoding is total: any domain value flattens without error, and the
/// result is suitable for persistence back into the flat representation.
pub fn flatten_config(conf: &AlertmanagerConfig) -> Value {
    debug!(
        receivers = conf.receivers.len(),
        routes = conf.route.node_count(),
        "flattening alertmanager configuration"
    );
    let mut obj = Map::new();
    obj.insert("global".to_string(), flatten_global(conf.global.as_ref()));
    obj.insert(
        "receiver".to_string(),
        flatten_receivers(&conf.receivers),
    );
    obj.insert("route".to_string(), flatten_route(&conf.route));
    obj.insert(
        "inhibit_rule".to_string(),
        flatten_inhibit_rules(&conf.inhibit_rules),
    );
    obj.insert(
        "mute_time_interval".to_string(),
        flatten_mute_time_intervals(&conf.mute_time_intervals),
    );
    Value::Object(obj)
}
