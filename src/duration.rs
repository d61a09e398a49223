//! Human-readable duration strings in the upstream wire format
//!
//! Timing fields in the flat representation are carried as Go-style duration
//! strings: `"5m"`, `"1h30m"`, `"500ms"`. Parsing is permissive by contract —
//! a malformed string yields `None` and callers fall back to a zero duration
//! instead of failing the document. Formatting reproduces the upstream output
//! exactly (`"5m"` re-encodes as `"5m0s"`, zero is `"0s"`), since persisted
//! documents are compared textually by the calling layer.

use std::time::Duration;

const NANOS_PER_US: u128 = 1_000;
const NANOS_PER_MS: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;
const NANOS_PER_MIN: u128 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MIN;

/// Parse a duration string such as `"1h30m"`, `"5m"`, or `"500ms"`.
///
/// Accepts one or more `<number><unit>` terms where the number may carry a
/// fractional part and the unit is one of `ns`, `us`/`µs`, `ms`, `s`, `m`,
/// `h`. The bare string `"0"` is accepted as zero. Anything else — including
/// negative durations, which have no meaning in this configuration — returns
/// `None`.
pub fn parse(s: &str) -> Option<Duration> {
    let mut rest = s.trim();
    if rest == "0" {
        return Some(Duration::ZERO);
    }
    rest = rest.strip_prefix('+').unwrap_or(rest);
    if rest.is_empty() {
        return None;
    }

    let mut total_ns: u128 = 0;
    while !rest.is_empty() {
        let (term_ns, remainder) = parse_term(rest)?;
        total_ns = total_ns.checked_add(term_ns)?;
        rest = remainder;
    }
    Some(Duration::new(
        (total_ns / NANOS_PER_SEC) as u64,
        (total_ns % NANOS_PER_SEC) as u32,
    ))
}

/// Parse one `<number><unit>` term, returning its nanoseconds and the rest of
/// the input.
fn parse_term(s: &str) -> Option<(u128, &str)> {
    let digits_end = s
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(s.len());
    if digits_end == 0 {
        return None;
    }
    let (number, rest) = s.split_at(digits_end);
    let (unit_ns, rest) = parse_unit(rest)?;

    let (int_part, frac_part) = match number.split_once('.') {
        Some((i, f)) => (i, f),
        None => (number, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if frac_part.contains('.') {
        return None;
    }

    let mut ns: u128 = if int_part.is_empty() {
        0
    } else {
        int_part.parse::<u128>().ok()?.checked_mul(unit_ns)?
    };
    if !frac_part.is_empty() {
        // Scale the fractional digits exactly; truncation below 1ns is fine.
        let scale = 10u128.checked_pow(frac_part.len() as u32)?;
        let frac: u128 = frac_part.parse().ok()?;
        ns = ns.checked_add(frac.checked_mul(unit_ns)? / scale)?;
    }
    Some((ns, rest))
}

fn parse_unit(s: &str) -> Option<(u128, &str)> {
    for (name, nanos) in [
        ("ns", 1),
        ("us", NANOS_PER_US),
        ("\u{00b5}s", NANOS_PER_US),
        ("\u{03bc}s", NANOS_PER_US),
        ("ms", NANOS_PER_MS),
        ("s", NANOS_PER_SEC),
        ("m", NANOS_PER_MIN),
        ("h", NANOS_PER_HOUR),
    ] {
        if let Some(rest) = s.strip_prefix(name) {
            return Some((nanos, rest));
        }
    }
    None
}

/// Format a duration the way the upstream system serializes it.
///
/// Durations of a second or more print hours, minutes and seconds with the
/// seconds component always present (`"5m0s"`, `"1h0m0s"`, `"1m30.5s"`);
/// sub-second durations pick the largest fitting unit (`"500ms"`, `"1.5µs"`).
pub fn format(d: Duration) -> String {
    let ns = d.as_nanos();
    if ns == 0 {
        return "0s".to_string();
    }
    if ns < NANOS_PER_US {
        return format!("{ns}ns");
    }
    if ns < NANOS_PER_MS {
        return format_with_frac(ns, NANOS_PER_US, "\u{00b5}s");
    }
    if ns < NANOS_PER_SEC {
        return format_with_frac(ns, NANOS_PER_MS, "ms");
    }

    let hours = ns / NANOS_PER_HOUR;
    let minutes = (ns % NANOS_PER_HOUR) / NANOS_PER_MIN;
    let sec_ns = ns % NANOS_PER_MIN;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if hours > 0 || minutes > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    out.push_str(&format_with_frac(sec_ns, NANOS_PER_SEC, "s"));
    out
}

/// Render `ns / unit_ns` with a trimmed fractional part, e.g. `1500000ns`
/// over `ms` as `"1.5ms"`.
fn format_with_frac(ns: u128, unit_ns: u128, unit: &str) -> String {
    let whole = ns / unit_ns;
    let frac = ns % unit_ns;
    if frac == 0 {
        return format!("{whole}{unit}");
    }
    let width = unit_ns.ilog10() as usize;
    let mut frac_str = format!("{frac:0width$}");
    while frac_str.ends_with('0') {
        frac_str.pop();
    }
    format!("{whole}.{frac_str}{unit}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse("5m"), Some(Duration::from_secs(300)));
    }

    #[test]
    fn test_parse_compound() {
        assert_eq!(parse("1h30m"), Some(Duration::from_secs(5400)));
        assert_eq!(parse("2h37m10s"), Some(Duration::from_secs(9430)));
    }

    #[test]
    fn test_parse_zero_and_subsecond() {
        assert_eq!(parse("0"), Some(Duration::ZERO));
        assert_eq!(parse("0s"), Some(Duration::ZERO));
        assert_eq!(parse("500ms"), Some(Duration::from_millis(500)));
        assert_eq!(parse("250us"), Some(Duration::from_micros(250)));
        assert_eq!(parse("1.5s"), Some(Duration::from_millis(1500)));
        assert_eq!(parse("1.5h"), Some(Duration::from_secs(5400)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("five minutes"), None);
        assert_eq!(parse("5"), None);
        assert_eq!(parse("m"), None);
        assert_eq!(parse("-5m"), None);
        assert_eq!(parse("5x"), None);
        assert_eq!(parse("1.2.3s"), None);
    }

    #[test]
    fn test_format_always_prints_seconds() {
        assert_eq!(format(Duration::from_secs(300)), "5m0s");
        assert_eq!(format(Duration::from_secs(3600)), "1h0m0s");
        assert_eq!(format(Duration::from_secs(90)), "1m30s");
        assert_eq!(format(Duration::from_secs(30)), "30s");
        assert_eq!(format(Duration::ZERO), "0s");
    }

    #[test]
    fn test_format_subsecond() {
        assert_eq!(format(Duration::from_millis(500)), "500ms");
        assert_eq!(format(Duration::from_micros(1500)), "1.5ms");
        assert_eq!(format(Duration::from_nanos(42)), "42ns");
        assert_eq!(format(Duration::from_millis(90500)), "1m30.5s");
    }

    #[test]
    fn test_round_trip_through_wire_format() {
        for s in ["5m0s", "1h0m0s", "30s", "0s", "500ms", "1m30.5s"] {
            let d = parse(s).unwrap();
            assert_eq!(format(d), s);
        }
        // The short forms canonicalize.
        assert_eq!(format(parse("5m").unwrap()), "5m0s");
    }
}
