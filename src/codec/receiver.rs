//! Expand/flatten pairs for receivers and the five channel families
//!
//! A receiver is a name plus zero-or-more configurations per channel type,
//! and every family decodes the same way: missing optional keys are simply
//! skipped, leaving the zero value, so decode never fails on well-formed but
//! incomplete input. The `send_resolved` flag is a tri-state — unset encodes
//! as an explicit null so that "never set" and "explicitly false" survive a
//! round trip as distinct states.

use crate::codec::global::{duration_field, host_port_field};
use crate::codec::http::{expand_http_config, flatten_http_config};
use crate::duration;
use crate::error::Result;
use crate::model::receiver::{
    EmailConfig, PagerdutyConfig, PagerdutyImage, PagerdutyLink, PushoverConfig, Receiver,
    WeChatConfig, WebhookConfig,
};
use crate::value;
use serde_json::{Map, Value};

fn tri_state_bool(v: Option<bool>) -> Value {
    match v {
        Some(b) => Value::Bool(b),
        None => Value::Null,
    }
}

pub fn expand_receivers(items: &[Value], path: &str) -> Result<Vec<Receiver>> {
    let mut receivers = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let path = format!("{path}[{i}]");
        let obj = value::as_object(item, &path)?;

        let mut conf = Receiver {
            name: value::str_field(obj, "name", &path)?.unwrap_or_default(),
            ..Receiver::default()
        };
        if let Some(items) = value::seq_field(obj, "pagerduty_configs", &path)? {
            conf.pagerduty_configs =
                expand_pagerduty_configs(items, &format!("{path}.pagerduty_configs"))?;
        }
        if let Some(items) = value::seq_field(obj, "email_configs", &path)? {
            conf.email_configs = expand_email_configs(items, &format!("{path}.email_configs"))?;
        }
        if let Some(items) = value::seq_field(obj, "wechat_configs", &path)? {
            conf.wechat_configs = expand_wechat_configs(items, &format!("{path}.wechat_configs"))?;
        }
        if let Some(items) = value::seq_field(obj, "webhook_configs", &path)? {
            conf.webhook_configs =
                expand_webhook_configs(items, &format!("{path}.webhook_configs"))?;
        }
        if let Some(items) = value::seq_field(obj, "pushover_configs", &path)? {
            conf.pushover_configs =
                expand_pushover_configs(items, &format!("{path}.pushover_configs"))?;
        }
        receivers.push(conf);
    }
    Ok(receivers)
}

pub fn flatten_receivers(receivers: &[Receiver]) -> Value {
    let mut out = Vec::with_capacity(receivers.len());
    for v in receivers {
        let mut obj = Map::new();
        obj.insert("name".to_string(), Value::String(v.name.clone()));
        obj.insert(
            "pagerduty_configs".to_string(),
            flatten_pagerduty_configs(&v.pagerduty_configs),
        );
        obj.insert(
            "email_configs".to_string(),
            flatten_email_configs(&v.email_configs),
        );
        obj.insert(
            "wechat_configs".to_string(),
            flatten_wechat_configs(&v.wechat_configs),
        );
        obj.insert(
            "webhook_configs".to_string(),
            flatten_webhook_configs(&v.webhook_configs),
        );
        obj.insert(
            "pushover_configs".to_string(),
            flatten_pushover_configs(&v.pushover_configs),
        );
        out.push(Value::Object(obj));
    }
    Value::Array(out)
}

pub fn expand_webhook_configs(items: &[Value], path: &str) -> Result<Vec<WebhookConfig>> {
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let path = format!("{path}[{i}]");
        let obj = value::as_object(item, &path)?;

        let mut conf = WebhookConfig {
            send_resolved: value::bool_field(obj, "send_resolved", &path)?,
            url: value::str_field(obj, "url", &path)?.unwrap_or_default(),
            max_alerts: value::int_field(obj, "max_alerts", &path)?.unwrap_or_default(),
            ..WebhookConfig::default()
        };
        if let Some(items) = value::seq_field(obj, "http_config", &path)? {
            conf.http_config = expand_http_config(items, &format!("{path}.http_config"))?;
        }
        out.push(conf);
    }
    Ok(out)
}

pub fn flatten_webhook_configs(configs: &[WebhookConfig]) -> Value {
    let mut out = Vec::with_capacity(configs.len());
    for v in configs {
        let mut obj = Map::new();
        obj.insert(
            "send_resolved".to_string(),
            tri_state_bool(v.send_resolved),
        );
        if v.http_config.is_some() {
            obj.insert(
                "http_config".to_string(),
                flatten_http_config(v.http_config.as_ref()),
            );
        }
        obj.insert("url".to_string(), Value::String(v.url.clone()));
        obj.insert(
            "max_alerts".to_string(),
            Value::Number(v.max_alerts.into()),
        );
        out.push(Value::Object(obj));
    }
    Value::Array(out)
}

pub fn expand_email_configs(items: &[Value], path: &str) -> Result<Vec<EmailConfig>> {
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let path = format!("{path}[{i}]");
        let obj = value::as_object(item, &path)?;

        let mut conf = EmailConfig {
            send_resolved: value::bool_field(obj, "send_resolved", &path)?,
            to: value::str_field(obj, "to", &path)?.unwrap_or_default(),
            from: value::str_field(obj, "from", &path)?.unwrap_or_default(),
            hello: value::str_field(obj, "hello", &path)?.unwrap_or_default(),
            smarthost: host_port_field(obj, "smarthost", &path)?,
            auth_username: value::str_field(obj, "auth_username", &path)?.unwrap_or_default(),
            auth_password: value::str_field(obj, "auth_password", &path)?.unwrap_or_default(),
            auth_secret: value::str_field(obj, "auth_secret", &path)?.unwrap_or_default(),
            auth_identity: value::str_field(obj, "auth_identity", &path)?.unwrap_or_default(),
            html: value::str_field(obj, "html", &path)?.unwrap_or_default(),
            text: value::str_field(obj, "text", &path)?.unwrap_or_default(),
            require_tls: value::bool_field(obj, "require_tls", &path)?,
            ..EmailConfig::default()
        };
        if let Some(headers) = value::map_field(obj, "headers", &path)? {
            conf.headers = value::expand_string_map(headers, &format!("{path}.headers"))?;
        }
        out.push(conf);
    }
    Ok(out)
}

pub fn flatten_email_configs(configs: &[EmailConfig]) -> Value {
    let mut out = Vec::with_capacity(configs.len());
    for v in configs {
        let mut obj = Map::new();
        obj.insert(
            "send_resolved".to_string(),
            tri_state_bool(v.send_resolved),
        );
        obj.insert("to".to_string(), Value::String(v.to.clone()));
        obj.insert("from".to_string(), Value::String(v.from.clone()));
        obj.insert("hello".to_string(), Value::String(v.hello.clone()));
        obj.insert(
            "smarthost".to_string(),
            Value::String(v.smarthost.to_string()),
        );
        obj.insert(
            "auth_username".to_string(),
            Value::String(v.auth_username.clone()),
        );
        obj.insert(
            "auth_password".to_string(),
            Value::String(v.auth_password.clone()),
        );
        obj.insert(
            "auth_secret".to_string(),
            Value::String(v.auth_secret.clone()),
        );
        obj.insert(
            "auth_identity".to_string(),
            Value::String(v.auth_identity.clone()),
        );
        obj.insert("headers".to_string(), value::flatten_string_map(&v.headers));
        obj.insert("html".to_string(), Value::String(v.html.clone()));
        obj.insert("text".to_string(), Value::String(v.text.clone()));
        obj.insert("require_tls".to_string(), tri_state_bool(v.require_tls));
        out.push(Value::Object(obj));
    }
    Value::Array(out)
}

pub fn expand_wechat_configs(items: &[Value], path: &str) -> Result<Vec<WeChatConfig>> {
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let path = format!("{path}[{i}]");
        let obj = value::as_object(item, &path)?;

        let mut conf = WeChatConfig {
            send_resolved: value::bool_field(obj, "send_resolved", &path)?,
            api_secret: value::str_field(obj, "api_secret", &path)?.unwrap_or_default(),
            api_url: value::str_field(obj, "api_url", &path)?.unwrap_or_default(),
            corp_id: value::str_field(obj, "corp_id", &path)?.unwrap_or_default(),
            agent_id: value::str_field(obj, "agent_id", &path)?.unwrap_or_default(),
            to_user: value::str_field(obj, "to_user", &path)?.unwrap_or_default(),
            to_party: value::str_field(obj, "to_party", &path)?.unwrap_or_default(),
            to_tag: value::str_field(obj, "to_tag", &path)?.unwrap_or_default(),
            message: value::str_field(obj, "message", &path)?.unwrap_or_default(),
            message_type: value::str_field(obj, "message_type", &path)?.unwrap_or_default(),
            ..WeChatConfig::default()
        };
        if let Some(items) = value::seq_field(obj, "http_config", &path)? {
            conf.http_config = expand_http_config(items, &format!("{path}.http_config"))?;
        }
        out.push(conf);
    }
    Ok(out)
}

pub fn flatten_wechat_configs(configs: &[WeChatConfig]) -> Value {
    let mut out = Vec::with_capacity(configs.len());
    for v in configs {
        let mut obj = Map::new();
        obj.insert(
            "send_resolved".to_string(),
            tri_state_bool(v.send_resolved),
        );
        if v.http_config.is_some() {
            obj.insert(
                "http_config".to_string(),
                flatten_http_config(v.http_config.as_ref()),
            );
        }
        obj.insert(
            "api_secret".to_string(),
            Value::String(v.api_secret.clone()),
        );
        obj.insert("api_url".to_string(), Value::String(v.api_url.clone()));
        obj.insert("corp_id".to_string(), Value::String(v.corp_id.clone()));
        obj.insert("agent_id".to_string(), Value::String(v.agent_id.clone()));
        obj.insert("to_user".to_string(), Value::String(v.to_user.clone()));
        obj.insert("to_party".to_string(), Value::String(v.to_party.clone()));
        obj.insert("to_tag".to_string(), Value::String(v.to_tag.clone()));
        obj.insert("message".to_string(), Value::String(v.message.clone()));
        obj.insert(
            "message_type".to_string(),
            Value::String(v.message_type.clone()),
        );
        out.push(Value::Object(obj));
    }
    Value::Array(out)
}

fn expand_pagerduty_links(items: &[Value], path: &str) -> Result<Vec<PagerdutyLink>> {
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let path = format!("{path}[{i}]");
        let obj = value::as_object(item, &path)?;
        out.push(PagerdutyLink {
            text: value::str_field(obj, "text", &path)?.unwrap_or_default(),
            href: value::str_field(obj, "href", &path)?.unwrap_or_default(),
        });
    }
    Ok(out)
}

fn flatten_pagerduty_links(links: &[PagerdutyLink]) -> Value {
    let mut out = Vec::with_capacity(links.len());
    for v in links {
        let mut obj = Map::new();
        obj.insert("text".to_string(), Value::String(v.text.clone()));
        obj.insert("href".to_string(), Value::String(v.href.clone()));
        out.push(Value::Object(obj));
    }
    Value::Array(out)
}

fn expand_pagerduty_images(items: &[Value], path: &str) -> Result<Vec<PagerdutyImage>> {
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let path = format!("{path}[{i}]");
        let obj = value::as_object(item, &path)?;
        out.push(PagerdutyImage {
            src: value::str_field(obj, "src", &path)?.unwrap_or_default(),
            alt: value::str_field(obj, "alt", &path)?.unwrap_or_default(),
            href: value::str_field(obj, "href", &path)?.unwrap_or_default(),
        });
    }
    Ok(out)
}

fn flatten_pagerduty_images(images: &[PagerdutyImage]) -> Value {
    let mut out = Vec::with_capacity(images.len());
    for v in images {
        let mut obj = Map::new();
        obj.insert("src".to_string(), Value::String(v.src.clone()));
        obj.insert("alt".to_string(), Value::String(v.alt.clone()));
        obj.insert("href".to_string(), Value::String(v.href.clone()));
        out.push(Value::Object(obj));
    }
    Value::Array(out)
}

pub fn expand_pagerduty_configs(items: &[Value], path: &str) -> Result<Vec<PagerdutyConfig>> {
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let path = format!("{path}[{i}]");
        let obj = value::as_object(item, &path)?;

        let mut conf = PagerdutyConfig {
            send_resolved: value::bool_field(obj, "send_resolved", &path)?,
            routing_key: value::str_field(obj, "routing_key", &path)?.unwrap_or_default(),
            service_key: value::str_field(obj, "service_key", &path)?.unwrap_or_default(),
            url: value::str_field(obj, "url", &path)?.unwrap_or_default(),
            client: value::str_field(obj, "client", &path)?.unwrap_or_default(),
            client_url: value::str_field(obj, "client_url", &path)?.unwrap_or_default(),
            description: value::str_field(obj, "description", &path)?.unwrap_or_default(),
            severity: value::str_field(obj, "severity", &path)?.unwrap_or_default(),
            class: value::str_field(obj, "class", &path)?.unwrap_or_default(),
            component: value::str_field(obj, "component", &path)?.unwrap_or_default(),
            group: value::str_field(obj, "group", &path)?.unwrap_or_default(),
            ..PagerdutyConfig::default()
        };
        if let Some(items) = value::seq_field(obj, "http_config", &path)? {
            conf.http_config = expand_http_config(items, &format!("{path}.http_config"))?;
        }
        if let Some(items) = value::seq_field(obj, "images", &path)? {
            conf.images = expand_pagerduty_images(items, &format!("{path}.images"))?;
        }
        if let Some(items) = value::seq_field(obj, "links", &path)? {
            conf.links = expand_pagerduty_links(items, &format!("{path}.links"))?;
        }
        if let Some(details) = value::map_field(obj, "details", &path)? {
            conf.details = value::expand_string_map(details, &format!("{path}.details"))?;
        }
        out.push(conf);
    }
    Ok(out)
}

pub fn flatten_pagerduty_configs(configs: &[PagerdutyConfig]) -> Value {
    let mut out = Vec::with_capacity(configs.len());
    for v in configs {
        let mut obj = Map::new();
        obj.insert(
            "send_resolved".to_string(),
            tri_state_bool(v.send_resolved),
        );
        obj.insert(
            "service_key".to_string(),
            Value::String(v.service_key.clone()),
        );
        obj.insert(
            "routing_key".to_string(),
            Value::String(v.routing_key.clone()),
        );
        if v.http_config.is_some() {
            obj.insert(
                "http_config".to_string(),
                flatten_http_config(v.http_config.as_ref()),
            );
        }
        obj.insert("url".to_string(), Value::String(v.url.clone()));
        obj.insert("client".to_string(), Value::String(v.client.clone()));
        obj.insert(
            "client_url".to_string(),
            Value::String(v.client_url.clone()),
        );
        obj.insert(
            "description".to_string(),
            Value::String(v.description.clone()),
        );
        obj.insert("severity".to_string(), Value::String(v.severity.clone()));
        obj.insert("class".to_string(), Value::String(v.class.clone()));
        obj.insert("component".to_string(), Value::String(v.component.clone()));
        obj.insert("group".to_string(), Value::String(v.group.clone()));
        obj.insert("details".to_string(), value::flatten_string_map(&v.details));
        obj.insert("images".to_string(), flatten_pagerduty_images(&v.images));
        obj.insert("links".to_string(), flatten_pagerduty_links(&v.links));
        out.push(Value::Object(obj));
    }
    Value::Array(out)
}

pub fn expand_pushover_configs(items: &[Value], path: &str) -> Result<Vec<PushoverConfig>> {
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let path = format!("{path}[{i}]");
        let obj = value::as_object(item, &path)?;

        let mut conf = PushoverConfig {
            send_resolved: value::bool_field(obj, "send_resolved", &path)?,
            user_key: value::str_field(obj, "user_key", &path)?.unwrap_or_default(),
            token: value::str_field(obj, "token", &path)?.unwrap_or_default(),
            title: value::str_field(obj, "title", &path)?.unwrap_or_default(),
            message: value::str_field(obj, "message", &path)?.unwrap_or_default(),
            url: value::str_field(obj, "url", &path)?.unwrap_or_default(),
            url_title: value::str_field(obj, "url_title", &path)?.unwrap_or_default(),
            sound: value::str_field(obj, "sound", &path)?.unwrap_or_default(),
            priority: value::str_field(obj, "priority", &path)?.unwrap_or_default(),
            retry: duration_field(obj, "retry", &path)?,
            expire: duration_field(obj, "expire", &path)?,
            html: value::bool_field(obj, "html", &path)?.unwrap_or_default(),
            ..PushoverConfig::default()
        };
        if let Some(items) = value::seq_field(obj, "http_config", &path)? {
            conf.http_config = expand_http_config(items, &format!("{path}.http_config"))?;
        }
        out.push(conf);
    }
    Ok(out)
}

pub fn flatten_pushover_configs(configs: &[PushoverConfig]) -> Value {
    let mut out = Vec::with_capacity(configs.len());
    for v in configs {
        let mut obj = Map::new();
        obj.insert(
            "send_resolved".to_string(),
            tri_state_bool(v.send_resolved),
        );
        if v.http_config.is_some() {
            obj.insert(
                "http_config".to_string(),
                flatten_http_config(v.http_config.as_ref()),
            );
        }
        obj.insert("user_key".to_string(), Value::String(v.user_key.clone()));
        obj.insert("token".to_string(), Value::String(v.token.clone()));
        obj.insert("title".to_string(), Value::String(v.title.clone()));
        obj.insert("message".to_string(), Value::String(v.message.clone()));
        obj.insert("url".to_string(), Value::String(v.url.clone()));
        obj.insert("url_title".to_string(), Value::String(v.url_title.clone()));
        obj.insert("sound".to_string(), Value::String(v.sound.clone()));
        obj.insert("priority".to_string(), Value::String(v.priority.clone()));
        obj.insert(
            "retry".to_string(),
            Value::String(duration::format(v.retry)),
        );
        obj.insert(
            "expire".to_string(),
            Value::String(duration::format(v.expire)),
        );
        obj.insert("html".to_string(), Value::Bool(v.html));
        out.push(Value::Object(obj));
    }
    Value::Array(out)
}
