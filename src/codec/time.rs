//! Expand/flatten pairs for mute-time-interval calendars
//!
//! Each named calendar is a list of time-interval definitions, and each
//! definition independently decodes its five range dimensions. An absent
//! dimension key stays an empty list — "unconstrained in that dimension" —
//! while flattening always emits all five dimension keys as concrete
//! (possibly empty) lists.

use crate::error::Result;
use crate::model::time::{InclusiveRange, MuteTimeInterval, TimeInterval, TimeRange};
use crate::value;
use serde_json::{Map, Value};

pub fn expand_mute_time_intervals(items: &[Value], path: &str) -> Result<Vec<MuteTimeInterval>> {
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let path = format!("{path}[{i}]");
        let obj = value::as_object(item, &path)?;

        let mut conf = MuteTimeInterval {
            name: value::str_field(obj, "name", &path)?.unwrap_or_default(),
            ..MuteTimeInterval::default()
        };
        if let Some(items) = value::seq_field(obj, "time_intervals", &path)? {
            conf.time_intervals =
                expand_time_intervals(items, &format!("{path}.time_intervals"))?;
        }
        out.push(conf);
    }
    Ok(out)
}

pub fn flatten_mute_time_intervals(intervals: &[MuteTimeInterval]) -> Value {
    let mut out = Vec::with_capacity(intervals.len());
    for v in intervals {
        let mut obj = Map::new();
        obj.insert("name".to_string(), Value::String(v.name.clone()));
        obj.insert(
            "time_intervals".to_string(),
            flatten_time_intervals(&v.time_intervals),
        );
        out.push(Value::Object(obj));
    }
    Value::Array(out)
}

pub fn expand_time_intervals(items: &[Value], path: &str) -> Result<Vec<TimeInterval>> {
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let path = format!("{path}[{i}]");
        let obj = value::as_object(item, &path)?;

        let mut conf = TimeInterval::default();
        if let Some(items) = value::seq_field(obj, "times", &path)? {
            conf.times = expand_time_ranges(items, &format!("{path}.times"))?;
        }
        if let Some(items) = value::seq_field(obj, "weekdays", &path)? {
            conf.weekdays = expand_inclusive_ranges(items, &format!("{path}.weekdays"))?;
        }
        if let Some(items) = value::seq_field(obj, "days_of_month", &path)? {
            conf.days_of_month =
                expand_inclusive_ranges(items, &format!("{path}.days_of_month"))?;
        }
        if let Some(items) = value::seq_field(obj, "months", &path)? {
            conf.months = expand_inclusive_ranges(items, &format!("{path}.months"))?;
        }
        if let Some(items) = value::seq_field(obj, "years", &path)? {
            conf.years = expand_inclusive_ranges(items, &format!("{path}.years"))?;
        }
        out.push(conf);
    }
    Ok(out)
}

pub fn flatten_time_intervals(intervals: &[TimeInterval]) -> Value {
    let mut out = Vec::with_capacity(intervals.len());
    for v in intervals {
        let mut obj = Map::new();
        obj.insert("times".to_string(), flatten_time_ranges(&v.times));
        obj.insert(
            "weekdays".to_string(),
            flatten_inclusive_ranges(&v.weekdays),
        );
        obj.insert(
            "days_of_month".to_string(),
            flatten_inclusive_ranges(&v.days_of_month),
        );
        obj.insert("months".to_string(), flatten_inclusive_ranges(&v.months));
        obj.insert("years".to_string(), flatten_inclusive_ranges(&v.years));
        out.push(Value::Object(obj));
    }
    Value::Array(out)
}

fn expand_time_ranges(items: &[Value], path: &str) -> Result<Vec<TimeRange>> {
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let path = format!("{path}[{i}]");
        let obj = value::as_object(item, &path)?;
        out.push(TimeRange {
            start_minute: value::int_field(obj, "start_minute", &path)?.unwrap_or_default(),
            end_minute: value::int_field(obj, "end_minute", &path)?.unwrap_or_default(),
        });
    }
    Ok(out)
}

fn flatten_time_ranges(ranges: &[TimeRange]) -> Value {
    let mut out = Vec::with_capacity(ranges.len());
    for v in ranges {
        let mut obj = Map::new();
        obj.insert(
            "start_minute".to_string(),
            Value::Number(v.start_minute.into()),
        );
        obj.insert(
            "end_minute".to_string(),
            Value::Number(v.end_minute.into()),
        );
        out.push(Value::Object(obj));
    }
    Value::Array(out)
}

/// One converter serves the weekday, day-of-month, month, and year
/// dimensions; they share the inclusive `begin`/`end` shape on the wire.
fn expand_inclusive_ranges(items: &[Value], path: &str) -> Result<Vec<InclusiveRange>> {
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let path = format!("{path}[{i}]");
        let obj = value::as_object(item, &path)?;
        out.push(InclusiveRange {
            begin: value::int_field(obj, "begin", &path)?.unwrap_or_default(),
            end: value::int_field(obj, "end", &path)?.unwrap_or_default(),
        });
    }
    Ok(out)
}

fn flatten_inclusive_ranges(ranges: &[InclusiveRange]) -> Value {
    let mut out = Vec::with_capacity(ranges.len());
    for v in ranges {
        let mut obj = Map::new();
        obj.insert("begin".to_string(), Value::Number(v.begin.into()));
        obj.insert("end".to_string(), Value::Number(v.end.into()));
        out.push(Value::Object(obj));
    }
    Value::Array(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_expand_all_dimensions() {
        let items = vec![json!({
            "name": "business-hours",
            "time_intervals": [{
                "times": [ { "start_minute": 540, "end_minute": 1020 } ],
                "weekdays": [ { "begin": 1, "end": 5 } ],
                "days_of_month": [ { "begin": 1, "end": 15 } ],
                "months": [ { "begin": 1, "end": 12 } ],
                "years": [ { "begin": 2023, "end": 2025 } ]
            }]
        })];
        let intervals = expand_mute_time_intervals(&items, "mute_time_interval").unwrap();
        assert_eq!(intervals[0].name, "business-hours");
        let ti = &intervals[0].time_intervals[0];
        assert_eq!(ti.times[0].start_minute, 540);
        assert_eq!(ti.weekdays[0], InclusiveRange { begin: 1, end: 5 });
        assert_eq!(ti.years[0].end, 2025);
    }

    #[test]
    fn test_absent_dimension_stays_empty() {
        let items = vec![json!({
            "name": "weekends",
            "time_intervals": [ { "weekdays": [ { "begin": 0, "end": 0 }, { "begin": 6, "end": 6 } ] } ]
        })];
        let intervals = expand_mute_time_intervals(&items, "x").unwrap();
        let ti = &intervals[0].time_intervals[0];
        assert_eq!(ti.weekdays.len(), 2);
        assert!(ti.times.is_empty());
        assert!(ti.days_of_month.is_empty());
        assert!(ti.months.is_empty());
        assert!(ti.years.is_empty());
    }

    #[test]
    fn test_flatten_always_emits_all_dimensions() {
        let flat = flatten_time_intervals(&[TimeInterval::default()]);
        let obj = flat[0].as_object().unwrap();
        for key in ["times", "weekdays", "days_of_month", "months", "years"] {
            assert_eq!(obj[key], json!([]), "dimension {key} must be concrete");
        }
    }

    #[test]
    fn test_round_trip() {
        let items = vec![json!({
            "name": "month-ends",
            "time_intervals": [
                { "days_of_month": [ { "begin": -3, "end": -1 } ] },
                { "months": [ { "begin": 12, "end": 12 } ] }
            ]
        })];
        let intervals = expand_mute_time_intervals(&items, "x").unwrap();
        let flat = flatten_mute_time_intervals(&intervals);
        let back = expand_mute_time_intervals(flat.as_array().unwrap(), "x").unwrap();
        assert_eq!(back, intervals);
    }

    #[test]
    fn test_non_integer_range_is_a_type_mismatch() {
        let items = vec![json!({
            "name": "bad",
            "time_intervals": [ { "weekdays": [ { "begin": "monday", "end": 5 } ] } ]
        })];
        let err = expand_mute_time_intervals(&items, "mute_time_interval").unwrap_err();
        assert!(err
            .to_string()
            .contains("mute_time_interval[0].time_intervals[0].weekdays[0].begin"));
    }
}
