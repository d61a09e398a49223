//! Expand/flatten pair for the global-defaults block
//!
//! The global block follows the single-optional-block convention and is the
//! main home of the permissive scalar parsers: malformed durations decode to
//! zero, malformed `host:port` strings decode to an empty pair, and a URL is
//! only considered set when it parses to something non-empty. None of these
//! soft faults fail the document.

use crate::codec::http::{block_present, expand_http_config, flatten_http_config};
use crate::error::Result;
use crate::model::global::{GlobalConfig, HostPort};
use crate::value;
use crate::duration;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Read a URL field; absent, empty, or unparsable input means "not set".
pub(crate) fn url_field(
    obj: &Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<Option<Url>> {
    let raw = value::str_field(obj, key, path)?.unwrap_or_default();
    if raw.is_empty() {
        return Ok(None);
    }
    match Url::parse(&raw) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(_) => {
            debug!(field = %format!("{path}.{key}"), value = %raw, "unparsable URL treated as unset");
            Ok(None)
        }
    }
}

/// Read a duration field, falling back to zero on absent or malformed input.
pub(crate) fn duration_field(
    obj: &Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<Duration> {
    let raw = value::str_field(obj, key, path)?.unwrap_or_default();
    Ok(duration::parse(&raw).unwrap_or_else(|| {
        if !raw.is_empty() {
            debug!(field = %format!("{path}.{key}"), value = %raw, "malformed duration, defaulting to zero");
        }
        Duration::ZERO
    }))
}

/// Read a `host:port` field; input without a colon decodes to an empty pair.
pub(crate) fn host_port_field(
    obj: &Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<HostPort> {
    let raw = value::str_field(obj, key, path)?.unwrap_or_default();
    let parsed = HostPort::parse(&raw);
    if parsed.is_empty() && !raw.is_empty() {
        debug!(field = %format!("{path}.{key}"), value = %raw, "malformed host:port, defaulting to empty pair");
    }
    Ok(parsed)
}

pub fn expand_global(items: &[Value], path: &str) -> Result<Option<GlobalConfig>> {
    if !block_present(items) {
        return Ok(None);
    }
    let path = format!("{path}[0]");
    let obj = value::as_object(&items[0], &path)?;

    let mut conf = GlobalConfig {
        resolve_timeout: Some(duration_field(obj, "resolve_timeout", &path)?),
        pagerduty_url: url_field(obj, "pagerduty_url", &path)?,
        slack_api_url: url_field(obj, "slack_api_url", &path)?,
        smtp_from: value::str_field(obj, "smtp_from", &path)?.unwrap_or_default(),
        smtp_hello: value::str_field(obj, "smtp_hello", &path)?.unwrap_or_default(),
        smtp_smarthost: host_port_field(obj, "smtp_smarthost", &path)?,
        smtp_auth_username: value::str_field(obj, "smtp_auth_username", &path)?.unwrap_or_default(),
        smtp_auth_password: value::str_field(obj, "smtp_auth_password", &path)?.unwrap_or_default(),
        smtp_auth_secret: value::str_field(obj, "smtp_auth_secret", &path)?.unwrap_or_default(),
        smtp_auth_identity: value::str_field(obj, "smtp_auth_identity", &path)?.unwrap_or_default(),
        smtp_require_tls: value::bool_field(obj, "smtp_require_tls", &path)?,
        ..GlobalConfig::default()
    };
    if let Some(items) = value::seq_field(obj, "http_config", &path)? {
        conf.http_config = expand_http_config(items, &format!("{path}.http_config"))?;
    }
    Ok(Some(conf))
}

pub fn flatten_global(v: Option<&GlobalConfig>) -> Value {
    let mut obj = Map::new();
    if let Some(v) = v {
        if let Some(timeout) = v.resolve_timeout {
            obj.insert(
                "resolve_timeout".to_string(),
                Value::String(duration::format(timeout)),
            );
        }
        if let Some(url) = &v.pagerduty_url {
            obj.insert("pagerduty_url".to_string(), Value::String(url.to_string()));
        }
        if let Some(url) = &v.slack_api_url {
            obj.insert("slack_api_url".to_string(), Value::String(url.to_string()));
        }
        if v.http_config.is_some() {
            obj.insert(
                "http_config".to_string(),
                flatten_http_config(v.http_config.as_ref()),
            );
        }
        obj.insert("smtp_from".to_string(), Value::String(v.smtp_from.clone()));
        obj.insert(
            "smtp_hello".to_string(),
            Value::String(v.smtp_hello.clone()),
        );
        obj.insert(
            "smtp_smarthost".to_string(),
            Value::String(v.smtp_smarthost.to_string()),
        );
        obj.insert(
            "smtp_auth_username".to_string(),
            Value::String(v.smtp_auth_username.clone()),
        );
        obj.insert(
            "smtp_auth_password".to_string(),
            Value::String(v.smtp_auth_password.clone()),
        );
        obj.insert(
            "smtp_auth_secret".to_string(),
            Value::String(v.smtp_auth_secret.clone()),
        );
        obj.insert(
            "smtp_auth_identity".to_string(),
            Value::String(v.smtp_auth_identity.clone()),
        );
        if let Some(require_tls) = v.smtp_require_tls {
            obj.insert("smtp_require_tls".to_string(), Value::Bool(require_tls));
        }
    }
    Value::Array(vec![Value::Object(obj)])
}
