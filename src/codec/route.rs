//! Expand/flatten pair for the recursive routing tree
//!
//! The root route arrives wrapped in a one-element list; child routes arrive
//! as plain mappings under `child_route` and are re-wrapped into one-element
//! lists before recursing, so a single converter serves every depth. This
//! wrapping asymmetry between the root and child call sites is part of the
//! wire contract. Recursion depth is unbounded and terminates naturally when
//! a node has no children.
//!
//! Flattening omits the `group_by`, `matchers`, `mute_time_intervals`, and
//! `active_time_intervals` keys when the lists are empty and `child_route`
//! when there are no children, while `continue` and the three duration
//! strings are always emitted.

use crate::error::Result;
use crate::model::route::Route;
use crate::value;
use serde_json::{Map, Value};

pub fn expand_route(items: &[Value], path: &str) -> Result<Route> {
    let mut conf = Route::default();
    if items.is_empty() || items[0].is_null() {
        return Ok(conf);
    }
    let path = format!("{path}[0]");
    let obj = value::as_object(&items[0], &path)?;

    conf.receiver = value::str_field(obj, "receiver", &path)?.unwrap_or_default();
    if let Some(items) = value::seq_field(obj, "group_by", &path)? {
        conf.group_by = value::expand_string_array(items, &format!("{path}.group_by"))?;
    }
    if let Some(items) = value::seq_field(obj, "matchers", &path)? {
        conf.matchers = value::expand_string_array(items, &format!("{path}.matchers"))?;
    }
    conf.continue_matching = value::bool_field(obj, "continue", &path)?.unwrap_or_default();
    if let Some(children) = value::seq_field(obj, "child_route", &path)? {
        let mut routes = Vec::with_capacity(children.len());
        for (i, child) in children.iter().enumerate() {
            // Re-wrap each child mapping so the root converter applies.
            routes.push(expand_route(
                std::slice::from_ref(child),
                &format!("{path}.child_route[{i}]"),
            )?);
        }
        conf.routes = routes;
    }
    conf.group_wait = value::str_field(obj, "group_wait", &path)?.unwrap_or_default();
    conf.group_interval = value::str_field(obj, "group_interval", &path)?.unwrap_or_default();
    conf.repeat_interval = value::str_field(obj, "repeat_interval", &path)?.unwrap_or_default();
    if let Some(items) = value::seq_field(obj, "mute_time_intervals", &path)? {
        conf.mute_time_intervals =
            value::expand_string_array(items, &format!("{path}.mute_time_intervals"))?;
    }
    if let Some(items) = value::seq_field(obj, "active_time_intervals", &path)? {
        conf.active_time_intervals =
            value::expand_string_array(items, &format!("{path}.active_time_intervals"))?;
    }
    Ok(conf)
}

pub fn flatten_route(v: &Route) -> Value {
    let mut obj = Map::new();
    obj.insert("receiver".to_string(), Value::String(v.receiver.clone()));
    if !v.group_by.is_empty() {
        obj.insert(
            "group_by".to_string(),
            value::flatten_string_array(&v.group_by),
        );
    }
    if !v.matchers.is_empty() {
        obj.insert(
            "matchers".to_string(),
            value::flatten_string_array(&v.matchers),
        );
    }
    if !v.routes.is_empty() {
        let children = v
            .routes
            .iter()
            .map(|child| {
                // Unwrap the one-element list the recursive call produces.
                let Value::Array(mut wrapped) = flatten_route(child) else {
                    unreachable!("flatten_route always returns a one-element list")
                };
                wrapped.remove(0)
            })
            .collect();
        obj.insert("child_route".to_string(), Value::Array(children));
    }
    obj.insert(
        "continue".to_string(),
        Value::Bool(v.continue_matching),
    );
    obj.insert(
        "group_wait".to_string(),
        Value::String(v.group_wait.clone()),
    );
    obj.insert(
        "group_interval".to_string(),
        Value::String(v.group_interval.clone()),
    );
    obj.insert(
        "repeat_interval".to_string(),
        Value::String(v.repeat_interval.clone()),
    );
    if !v.mute_time_intervals.is_empty() {
        obj.insert(
            "mute_time_intervals".to_string(),
            value::flatten_string_array(&v.mute_time_intervals),
        );
    }
    if !v.active_time_intervals.is_empty() {
        obj.insert(
            "active_time_intervals".to_string(),
            value::flatten_string_array(&v.active_time_intervals),
        );
    }
    Value::Array(vec![Value::Object(obj)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_input_decodes_to_zero_route() {
        let route = expand_route(&[], "route").unwrap();
        assert_eq!(route, Route::default());
    }

    #[test]
    fn test_expand_depth_three_tree() {
        let items = vec![json!({
            "receiver": "root",
            "group_by": ["alertname", "cluster"],
            "matchers": ["severity=\"critical\""],
            "group_wait": "30s",
            "group_interval": "5m",
            "repeat_interval": "4h",
            "child_route": [
                {
                    "receiver": "team-a",
                    "matchers": ["team=\"a\""],
                    "child_route": [ { "receiver": "team-a-pager" } ]
                },
                {
                    "receiver": "team-b",
                    "continue": true,
                    "child_route": [ { "receiver": "team-b-pager" } ]
                }
            ]
        })];
        let route = expand_route(&items, "route").unwrap();
        assert_eq!(route.node_count(), 5);
        assert_eq!(route.depth(), 3);
        assert_eq!(route.routes[0].routes[0].receiver, "team-a-pager");
        assert!(route.routes[1].continue_matching);
        assert_eq!(route.group_wait, "30s");

        // Re-encoding preserves nesting shape and field values.
        let flat = flatten_route(&route);
        let back = expand_route(flat.as_array().unwrap(), "route").unwrap();
        assert_eq!(back, route);
    }

    #[test]
    fn test_flatten_omits_empty_lists_but_not_durations() {
        let flat = flatten_route(&Route::default());
        let obj = flat[0].as_object().unwrap();
        assert!(!obj.contains_key("group_by"));
        assert!(!obj.contains_key("matchers"));
        assert!(!obj.contains_key("child_route"));
        assert!(!obj.contains_key("mute_time_intervals"));
        assert!(!obj.contains_key("active_time_intervals"));
        // `continue` and the duration strings are always present.
        assert_eq!(obj["continue"], false);
        assert_eq!(obj["group_wait"], "");
        assert_eq!(obj["group_interval"], "");
        assert_eq!(obj["repeat_interval"], "");
    }

    #[test]
    fn test_interval_name_references_round_trip() {
        let items = vec![json!({
            "receiver": "oncall",
            "mute_time_intervals": ["weekends"],
            "active_time_intervals": ["business-hours"]
        })];
        let route = expand_route(&items, "route").unwrap();
        assert_eq!(route.mute_time_intervals, vec!["weekends"]);
        assert_eq!(route.active_time_intervals, vec!["business-hours"]);

        let flat = flatten_route(&route);
        let obj = flat[0].as_object().unwrap();
        assert_eq!(obj["mute_time_intervals"], json!(["weekends"]));
        assert_eq!(obj["active_time_intervals"], json!(["business-hours"]));
    }

    #[test]
    fn test_deep_nesting() {
        // Build a 64-deep chain; decode must follow it without any
        // artificial bound.
        let mut node = json!({ "receiver": "leaf" });
        for i in 0..63 {
            node = json!({ "receiver": format!("level-{i}"), "child_route": [node] });
        }
        let route = expand_route(std::slice::from_ref(&node), "route").unwrap();
        assert_eq!(route.depth(), 64);
        assert_eq!(route.node_count(), 64);

        let flat = flatten_route(&route);
        let back = expand_route(flat.as_array().unwrap(), "route").unwrap();
        assert_eq!(back, route);
    }

    #[test]
    fn test_bad_child_shape_reports_path() {
        let items = vec![json!({ "receiver": "r", "child_route": ["oops"] })];
        let err = expand_route(&items, "route").unwrap_err();
        assert!(err.to_string().contains("route[0].child_route[0]"));
    }
}
