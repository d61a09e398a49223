//! Named time-interval calendars
//!
//! A time interval is a calendar predicate built from five independent range
//! dimensions: minute-of-day, weekday, day-of-month, month, and year. A
//! timestamp matches the interval when it falls inside at least one range of
//! *every* non-empty dimension — conjunctive across dimensions, disjunctive
//! within a dimension, with an empty dimension acting as a wildcard. Routes
//! reference these calendars by name to mute or activate themselves.

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// A named list of time intervals; matches when any member interval matches.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MuteTimeInterval {
    pub name: String,
    pub time_intervals: Vec<TimeInterval>,
}

impl MuteTimeInterval {
    /// True when the instant falls inside any of the member intervals.
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        self.time_intervals.iter().any(|ti| ti.contains(t))
    }
}

/// One calendar predicate over five independent range dimensions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeInterval {
    /// Minute-of-day ranges, start inclusive, end exclusive
    pub times: Vec<TimeRange>,
    /// Weekday ranges, 0 = Sunday through 6 = Saturday, inclusive
    pub weekdays: Vec<InclusiveRange>,
    /// Day-of-month ranges, 1-based; negative values count back from the
    /// end of the month (-1 is the last day)
    pub days_of_month: Vec<InclusiveRange>,
    /// Month ranges, 1 = January through 12 = December, inclusive
    pub months: Vec<InclusiveRange>,
    /// Calendar-year ranges, inclusive
    pub years: Vec<InclusiveRange>,
}

impl TimeInterval {
    /// True when the instant satisfies every non-empty dimension.
    ///
    /// An interval with all dimensions empty matches every instant.
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        let minute = (t.hour() * 60 + t.minute()) as i64;
        if !self.times.is_empty() && !self.times.iter().any(|r| r.contains(minute)) {
            return false;
        }

        let weekday = t.weekday().num_days_from_sunday() as i64;
        if !self.weekdays.is_empty() && !self.weekdays.iter().any(|r| r.contains(weekday)) {
            return false;
        }

        let day = t.day() as i64;
        let month_len = days_in_month(t.year(), t.month()) as i64;
        if !self.days_of_month.is_empty()
            && !self
                .days_of_month
                .iter()
                .any(|r| r.resolve_from_month_end(month_len).contains(day))
        {
            return false;
        }

        let month = t.month() as i64;
        if !self.months.is_empty() && !self.months.iter().any(|r| r.contains(month)) {
            return false;
        }

        let year = t.year() as i64;
        if !self.years.is_empty() && !self.years.iter().any(|r| r.contains(year)) {
            return false;
        }

        true
    }
}

/// A half-open minute-of-day range: `start_minute` inclusive, `end_minute`
/// exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeRange {
    pub start_minute: i64,
    pub end_minute: i64,
}

impl TimeRange {
    pub fn contains(&self, minute: i64) -> bool {
        minute >= self.start_minute && minute < self.end_minute
    }
}

/// An inclusive `begin..=end` range shared by the weekday, day-of-month,
/// month, and year dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InclusiveRange {
    pub begin: i64,
    pub end: i64,
}

impl InclusiveRange {
    pub fn contains(&self, v: i64) -> bool {
        v >= self.begin && v <= self.end
    }

    /// Resolve negative day-of-month endpoints against the month length:
    /// -1 becomes the last day, -2 the day before, and so on.
    fn resolve_from_month_end(&self, month_len: i64) -> InclusiveRange {
        let fix = |v: i64| if v < 0 { month_len + v + 1 } else { v };
        InclusiveRange {
            begin: fix(self.begin),
            end: fix(self.end),
        }
    }
}

/// Number of days in the given month.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 {
                29
            } else {
                28
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn test_all_empty_dimensions_match_everything() {
        let interval = TimeInterval::default();
        assert!(interval.contains(at(2023, 1, 1, 0, 0)));
        assert!(interval.contains(at(2030, 12, 31, 23, 59)));
    }

    #[test]
    fn test_dimensions_are_conjunctive() {
        // Weekday Monday..Friday AND 09:00..17:00.
        let interval = TimeInterval {
            times: vec![TimeRange {
                start_minute: 9 * 60,
                end_minute: 17 * 60,
            }],
            weekdays: vec![InclusiveRange { begin: 1, end: 5 }],
            ..TimeInterval::default()
        };
        // Wednesday 2023-06-07 at noon.
        assert!(interval.contains(at(2023, 6, 7, 12, 0)));
        // Wednesday outside working hours.
        assert!(!interval.contains(at(2023, 6, 7, 18, 0)));
        // Saturday 2023-06-10 at noon.
        assert!(!interval.contains(at(2023, 6, 10, 12, 0)));
    }

    #[test]
    fn test_ranges_within_a_dimension_are_disjunctive() {
        let interval = TimeInterval {
            months: vec![
                InclusiveRange { begin: 1, end: 2 },
                InclusiveRange { begin: 12, end: 12 },
            ],
            ..TimeInterval::default()
        };
        assert!(interval.contains(at(2023, 1, 15, 0, 0)));
        assert!(interval.contains(at(2023, 12, 15, 0, 0)));
        assert!(!interval.contains(at(2023, 6, 15, 0, 0)));
    }

    #[test]
    fn test_time_range_end_is_exclusive() {
        let interval = TimeInterval {
            times: vec![TimeRange {
                start_minute: 0,
                end_minute: 60,
            }],
            ..TimeInterval::default()
        };
        assert!(interval.contains(at(2023, 1, 1, 0, 59)));
        assert!(!interval.contains(at(2023, 1, 1, 1, 0)));
    }

    #[test]
    fn test_negative_day_of_month_counts_from_month_end() {
        let interval = TimeInterval {
            days_of_month: vec![InclusiveRange { begin: -1, end: -1 }],
            ..TimeInterval::default()
        };
        assert!(interval.contains(at(2023, 1, 31, 12, 0)));
        assert!(interval.contains(at(2023, 4, 30, 12, 0)));
        assert!(interval.contains(at(2024, 2, 29, 12, 0)));
        assert!(!interval.contains(at(2023, 1, 30, 12, 0)));
    }

    #[test]
    fn test_mute_time_interval_matches_any_member() {
        let mute = MuteTimeInterval {
            name: "weekends-and-december".to_string(),
            time_intervals: vec![
                TimeInterval {
                    weekdays: vec![
                        InclusiveRange { begin: 0, end: 0 },
                        InclusiveRange { begin: 6, end: 6 },
                    ],
                    ..TimeInterval::default()
                },
                TimeInterval {
                    months: vec![InclusiveRange { begin: 12, end: 12 }],
                    ..TimeInterval::default()
                },
            ],
        };
        // Saturday in June.
        assert!(mute.contains(at(2023, 6, 10, 12, 0)));
        // Wednesday in December.
        assert!(mute.contains(at(2023, 12, 6, 12, 0)));
        // Wednesday in June.
        assert!(!mute.contains(at(2023, 6, 7, 12, 0)));
    }
}
