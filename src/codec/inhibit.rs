//! Expand/flatten pair for inhibition rules
//!
//! Flat structure: each rule is three string lists. The matcher expressions
//! and label names are opaque at this layer; interpreting them is the
//! consumer's job.

use crate::error::Result;
use crate::model::InhibitRule;
use crate::value;
use serde_json::{Map, Value};

pub fn expand_inhibit_rules(items: &[Value], path: &str) -> Result<Vec<InhibitRule>> {
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let path = format!("{path}[{i}]");
        let obj = value::as_object(item, &path)?;

        let mut conf = InhibitRule::default();
        if let Some(items) = value::seq_field(obj, "source_matchers", &path)? {
            conf.source_matchers =
                value::expand_string_array(items, &format!("{path}.source_matchers"))?;
        }
        if let Some(items) = value::seq_field(obj, "target_matchers", &path)? {
            conf.target_matchers =
                value::expand_string_array(items, &format!("{path}.target_matchers"))?;
        }
        if let Some(items) = value::seq_field(obj, "equal", &path)? {
            conf.equal = value::expand_string_array(items, &format!("{path}.equal"))?;
        }
        out.push(conf);
    }
    Ok(out)
}

pub fn flatten_inhibit_rules(rules: &[InhibitRule]) -> Value {
    let mut out = Vec::with_capacity(rules.len());
    for v in rules {
        let mut obj = Map::new();
        obj.insert(
            "source_matchers".to_string(),
            value::flatten_string_array(&v.source_matchers),
        );
        obj.insert(
            "target_matchers".to_string(),
            value::flatten_string_array(&v.target_matchers),
        );
        obj.insert("equal".to_string(), value::flatten_string_array(&v.equal));
        out.push(Value::Object(obj));
    }
    Value::Array(out)
}
