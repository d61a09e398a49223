//! Expand/flatten pair for the HTTP client configuration family
//!
//! Every nested credential block follows the same shape on the wire: a list
//! that is either empty (block absent) or holds a single mapping (block
//! present). Extra elements are tolerated but only the first is honored.
//!
//! Flattening is deliberately asymmetric: the leaf encoders always produce a
//! one-element list wrapping a (possibly all-zero) mapping, even when the
//! source value is absent, while the parent HTTP-client encoder omits the
//! `authorization`/`basic_auth`/`oauth2`/`tls_config` keys entirely when the
//! corresponding option is `None`. Persisted documents rely on both halves of
//! this behavior.

use crate::error::Result;
use crate::model::http::{Authorization, BasicAuth, HttpClientConfig, OAuth2Config, TlsConfig};
use crate::value;
use serde_json::{Map, Value};

/// True when a single-block list actually carries a block.
pub(crate) fn block_present(items: &[Value]) -> bool {
    !items.is_empty() && !items[0].is_null()
}

pub fn expand_oauth2(items: &[Value], path: &str) -> Result<Option<OAuth2Config>> {
    if !block_present(items) {
        return Ok(None);
    }
    let path = format!("{path}[0]");
    let obj = value::as_object(&items[0], &path)?;

    let mut conf = OAuth2Config {
        client_id: value::str_field(obj, "client_id", &path)?.unwrap_or_default(),
        client_secret: value::str_field(obj, "client_secret", &path)?.unwrap_or_default(),
        token_url: value::str_field(obj, "token_url", &path)?.unwrap_or_default(),
        ..OAuth2Config::default()
    };
    if let Some(scopes) = value::seq_field(obj, "scopes", &path)? {
        conf.scopes = value::expand_string_array(scopes, &format!("{path}.scopes"))?;
    }
    if let Some(params) = value::map_field(obj, "endpoint_params", &path)? {
        conf.endpoint_params =
            value::expand_string_map(params, &format!("{path}.endpoint_params"))?;
    }
    Ok(Some(conf))
}

pub fn flatten_oauth2(v: Option<&OAuth2Config>) -> Value {
    let conf = v.cloned().unwrap_or_default();
    let mut obj = Map::new();
    obj.insert("client_id".to_string(), Value::String(conf.client_id));
    obj.insert(
        "client_secret".to_string(),
        Value::String(conf.client_secret),
    );
    obj.insert("token_url".to_string(), Value::String(conf.token_url));
    obj.insert(
        "scopes".to_string(),
        value::flatten_string_array(&conf.scopes),
    );
    obj.insert(
        "endpoint_params".to_string(),
        value::flatten_string_map(&conf.endpoint_params),
    );
    Value::Array(vec![Value::Object(obj)])
}

pub fn expand_basic_auth(items: &[Value], path: &str) -> Result<Option<BasicAuth>> {
    if !block_present(items) {
        return Ok(None);
    }
    let path = format!("{path}[0]");
    let obj = value::as_object(&items[0], &path)?;
    Ok(Some(BasicAuth {
        username: value::str_field(obj, "username", &path)?.unwrap_or_default(),
        password: value::str_field(obj, "password", &path)?.unwrap_or_default(),
    }))
}

pub fn flatten_basic_auth(v: Option<&BasicAuth>) -> Value {
    let conf = v.cloned().unwrap_or_default();
    let mut obj = Map::new();
    obj.insert("username".to_string(), Value::String(conf.username));
    obj.insert("password".to_string(), Value::String(conf.password));
    Value::Array(vec![Value::Object(obj)])
}

pub fn expand_authorization(items: &[Value], path: &str) -> Result<Option<Authorization>> {
    if !block_present(items) {
        return Ok(None);
    }
    let path = format!("{path}[0]");
    let obj = value::as_object(&items[0], &path)?;
    Ok(Some(Authorization {
        auth_type: value::str_field(obj, "type", &path)?.unwrap_or_default(),
        credentials: value::str_field(obj, "credentials", &path)?.unwrap_or_default(),
    }))
}

pub fn flatten_authorization(v: Option<&Authorization>) -> Value {
    let conf = v.cloned().unwrap_or_default();
    let mut obj = Map::new();
    obj.insert("type".to_string(), Value::String(conf.auth_type));
    obj.insert("credentials".to_string(), Value::String(conf.credentials));
    Value::Array(vec![Value::Object(obj)])
}

pub fn expand_tls_config(items: &[Value], path: &str) -> Result<Option<TlsConfig>> {
    if !block_present(items) {
        return Ok(None);
    }
    let path = format!("{path}[0]");
    let obj = value::as_object(&items[0], &path)?;
    Ok(Some(TlsConfig {
        server_name: value::str_field(obj, "server_name", &path)?.unwrap_or_default(),
        insecure_skip_verify: value::bool_field(obj, "insecure_skip_verify", &path)?
            .unwrap_or_default(),
    }))
}

pub fn flatten_tls_config(v: Option<&TlsConfig>) -> Value {
    let conf = v.cloned().unwrap_or_default();
    let mut obj = Map::new();
    obj.insert("server_name".to_string(), Value::String(conf.server_name));
    obj.insert(
        "insecure_skip_verify".to_string(),
        Value::Bool(conf.insecure_skip_verify),
    );
    Value::Array(vec![Value::Object(obj)])
}

pub fn expand_http_config(items: &[Value], path: &str) -> Result<Option<HttpClientConfig>> {
    if !block_present(items) {
        return Ok(None);
    }
    let path = format!("{path}[0]");
    let obj = value::as_object(&items[0], &path)?;

    let mut conf = HttpClientConfig {
        proxy_url: value::str_field(obj, "proxy_url", &path)?.unwrap_or_default(),
        follow_redirects: value::bool_field(obj, "follow_redirects", &path)?,
        bearer_token: value::str_field(obj, "bearer_token", &path)?.unwrap_or_default(),
        ..HttpClientConfig::default()
    };
    if let Some(items) = value::seq_field(obj, "authorization", &path)? {
        conf.authorization = expand_authorization(items, &format!("{path}.authorization"))?;
    }
    if let Some(items) = value::seq_field(obj, "basic_auth", &path)? {
        conf.basic_auth = expand_basic_auth(items, &format!("{path}.basic_auth"))?;
    }
    if let Some(items) = value::seq_field(obj, "oauth2", &path)? {
        conf.oauth2 = expand_oauth2(items, &format!("{path}.oauth2"))?;
    }
    if let Some(items) = value::seq_field(obj, "tls_config", &path)? {
        conf.tls_config = expand_tls_config(items, &format!("{path}.tls_config"))?;
    }
    Ok(Some(conf))
}

pub fn flatten_http_config(v: Option<&HttpClientConfig>) -> Value {
    let mut obj = Map::new();
    if let Some(v) = v {
        obj.insert(
            "proxy_url".to_string(),
            Value::String(v.proxy_url.clone()),
        );
        obj.insert(
            "bearer_token".to_string(),
            Value::String(v.bearer_token.clone()),
        );
        if let Some(follow) = v.follow_redirects {
            obj.insert("follow_redirects".to_string(), Value::Bool(follow));
        }
        if v.basic_auth.is_some() {
            obj.insert(
                "basic_auth".to_string(),
                flatten_basic_auth(v.basic_auth.as_ref()),
            );
        }
        if v.oauth2.is_some() {
            obj.insert("oauth2".to_string(), flatten_oauth2(v.oauth2.as_ref()));
        }
        if v.authorization.is_some() {
            obj.insert(
                "authorization".to_string(),
                flatten_authorization(v.authorization.as_ref()),
            );
        }
        if v.tls_config.is_some() {
            obj.insert(
                "tls_config".to_string(),
                flatten_tls_config(v.tls_config.as_ref()),
            );
        }
    }
    Value::Array(vec![Value::Object(obj)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_block_stays_absent() {
        assert_eq!(expand_oauth2(&[], "x").unwrap(), None);
        assert_eq!(expand_basic_auth(&[Value::Null], "x").unwrap(), None);
        assert_eq!(expand_tls_config(&[], "x").unwrap(), None);
        assert_eq!(expand_http_config(&[], "x").unwrap(), None);
    }

    #[test]
    fn test_flatten_absent_leaf_wraps_zero_values() {
        // Absent leaves still encode to a one-element list, never an empty one.
        assert_eq!(
            flatten_basic_auth(None),
            json!([{ "username": "", "password": "" }])
        );
        assert_eq!(
            flatten_tls_config(None),
            json!([{ "server_name": "", "insecure_skip_verify": false }])
        );
        assert_eq!(
            flatten_oauth2(None),
            json!([{
                "client_id": "",
                "client_secret": "",
                "token_url": "",
                "scopes": [],
                "endpoint_params": {}
            }])
        );
    }

    #[test]
    fn test_flatten_parent_omits_absent_nested_keys() {
        let conf = HttpClientConfig {
            proxy_url: "http://proxy:3128".to_string(),
            ..HttpClientConfig::default()
        };
        let flat = flatten_http_config(Some(&conf));
        let obj = flat[0].as_object().unwrap();
        assert_eq!(obj["proxy_url"], "http://proxy:3128");
        assert_eq!(obj["bearer_token"], "");
        assert!(!obj.contains_key("follow_redirects"));
        assert!(!obj.contains_key("basic_auth"));
        assert!(!obj.contains_key("oauth2"));
        assert!(!obj.contains_key("authorization"));
        assert!(!obj.contains_key("tls_config"));
    }

    #[test]
    fn test_expand_only_honors_first_block() {
        let items = vec![
            json!({ "username": "first", "password": "" }),
            json!({ "username": "second", "password": "" }),
        ];
        let conf = expand_basic_auth(&items, "x").unwrap().unwrap();
        assert_eq!(conf.username, "first");
    }

    #[test]
    fn test_missing_sub_fields_decode_to_zero_values() {
        let items = vec![json!({ "client_id": "id" })];
        let conf = expand_oauth2(&items, "x").unwrap().unwrap();
        assert_eq!(conf.client_id, "id");
        assert_eq!(conf.client_secret, "");
        assert!(conf.scopes.is_empty());
        assert!(conf.endpoint_params.is_empty());
    }

    #[test]
    fn test_full_round_trip() {
        let items = vec![json!({
            "proxy_url": "http://proxy:3128",
            "follow_redirects": false,
            "bearer_token": "tok",
            "basic_auth": [{ "username": "u", "password": "p" }],
            "oauth2": [{
                "client_id": "id",
                "client_secret": "sec",
                "token_url": "https://auth.example.org/token",
                "scopes": ["a", "b"],
                "endpoint_params": { "aud": "am" }
            }],
            "authorization": [{ "type": "Bearer", "credentials": "c" }],
            "tls_config": [{ "server_name": "am.example.org", "insecure_skip_verify": true }]
        })];
        let conf = expand_http_config(&items, "x").unwrap().unwrap();
        assert_eq!(conf.follow_redirects, Some(false));
        assert_eq!(conf.basic_auth.as_ref().unwrap().username, "u");
        assert_eq!(conf.oauth2.as_ref().unwrap().scopes, vec!["a", "b"]);
        assert_eq!(conf.authorization.as_ref().unwrap().auth_type, "Bearer");
        assert!(conf.tls_config.as_ref().unwrap().insecure_skip_verify);

        let flat = flatten_http_config(Some(&conf));
        let back = expand_http_config(flat.as_array().unwrap(), "x")
            .unwrap()
            .unwrap();
        assert_eq!(back, conf);
    }

    #[test]
    fn test_type_mismatch_surfaces_field_path() {
        let items = vec![json!({ "proxy_url": 80 })];
        let err = expand_http_config(&items, "http_config").unwrap_err();
        assert!(err.to_string().contains("http_config[0].proxy_url"));
    }
}
