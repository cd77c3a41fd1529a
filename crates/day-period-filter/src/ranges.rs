//! UTC time-of-day ranges for a local day period.
//!
//! A local AM or PM window maps onto UTC time-of-day by subtracting the zone's
//! offset. When the shifted window runs past a UTC midnight it no longer fits
//! in one `[from, to]` pair and is split in two: the piece that ends at
//! `23:59:59` UTC first, then the piece that starts at `00:00:00` UTC.
//!
//! The split decision compares the UTC calendar dates of the two converted
//! boundaries, so it holds for negative offsets and for offsets that are not
//! whole hours.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::period::DayPeriod;
use crate::timezone::ResolvedTimezone;

/// 100-nanosecond ticks in one second.
pub const TICKS_PER_SECOND: i64 = 10_000_000;

const NOON_SECONDS: u32 = 12 * 3600;
const LAST_SECOND: u32 = 24 * 3600 - 1;

// ── TimeRange ───────────────────────────────────────────────────────────────

/// A `[from, to]` pair of UTC times of day, `from < to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeRange {
    from: NaiveTime,
    to: NaiveTime,
}

impl TimeRange {
    /// Build a range, or `None` unless `from < to`.
    pub fn new(from: NaiveTime, to: NaiveTime) -> Option<Self> {
        (from < to).then_some(Self { from, to })
    }

    pub fn from(&self) -> NaiveTime {
        self.from
    }

    pub fn to(&self) -> NaiveTime {
        self.to
    }

    /// `from` as 100-nanosecond ticks since midnight.
    pub fn from_ticks(&self) -> i64 {
        ticks(self.from)
    }

    /// `to` as 100-nanosecond ticks since midnight.
    pub fn to_ticks(&self) -> i64 {
        ticks(self.to)
    }

    /// Whether `time` falls inside the range, both ends included.
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.from <= time && time <= self.to
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.from.format("%H:%M:%S"),
            self.to.format("%H:%M:%S")
        )
    }
}

/// Serialized as `{"from": ticks, "to": ticks}` for downstream query filters.
impl Serialize for TimeRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TimeRange", 2)?;
        state.serialize_field("from", &self.from_ticks())?;
        state.serialize_field("to", &self.to_ticks())?;
        state.end()
    }
}

fn ticks(time: NaiveTime) -> i64 {
    i64::from(time.num_seconds_from_midnight()) * TICKS_PER_SECOND
        + i64::from(time.nanosecond() / 100)
}

// ── compute_ranges ──────────────────────────────────────────────────────────

/// Compute the UTC time-of-day ranges covering `period` in `timezone`.
///
/// Returns one range when the local window stays within a single UTC day and
/// two when it crosses a UTC midnight: `[start, 23:59:59]` followed by
/// `[00:00:00, end]`. A piece that would be empty is left out, which only
/// happens for an exact `+12:00` offset in the morning.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use day_period_filter::{compute_ranges, DayPeriod, TimezoneResolver};
///
/// let resolver = TimezoneResolver::new(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
/// let new_york = resolver.resolve("America/New_York");
///
/// let am: Vec<String> = compute_ranges(DayPeriod::Am, &new_york)
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// assert_eq!(am, ["05:00:00-17:00:00"]);
///
/// let pm: Vec<String> = compute_ranges(DayPeriod::Pm, &new_york)
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// assert_eq!(pm, ["17:00:00-23:59:59", "00:00:00-04:59:59"]);
/// ```
pub fn compute_ranges(period: DayPeriod, timezone: &ResolvedTimezone) -> Vec<TimeRange> {
    let (start, end) = match period {
        DayPeriod::Am => (time_of_day(0), time_of_day(NOON_SECONDS)),
        DayPeriod::Pm => (time_of_day(NOON_SECONDS), time_of_day(LAST_SECOND)),
    };

    let start_utc = to_utc(start, timezone);
    let end_utc = to_utc(end, timezone);

    if start_utc.date() == end_utc.date() {
        return TimeRange::new(start_utc.time(), end_utc.time())
            .into_iter()
            .collect();
    }

    [
        TimeRange::new(start_utc.time(), time_of_day(LAST_SECOND)),
        TimeRange::new(NaiveTime::MIN, end_utc.time()),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Treat `local` as wall-clock time on the anchor date and shift it to UTC.
fn to_utc(local: NaiveTime, timezone: &ResolvedTimezone) -> NaiveDateTime {
    NaiveDate::default().and_time(local)
        - chrono::Duration::seconds(i64::from(timezone.offset_seconds()))
}

fn time_of_day(seconds: u32) -> NaiveTime {
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap_or(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timezone::TimezoneResolver;

    fn winter() -> TimezoneResolver {
        TimezoneResolver::new(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap())
    }

    fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    fn ranges(period: DayPeriod, timezone: &str) -> Vec<(NaiveTime, NaiveTime)> {
        compute_ranges(period, &winter().resolve(timezone))
            .iter()
            .map(|r| (r.from(), r.to()))
            .collect()
    }

    // ── single range ────────────────────────────────────────────────────

    #[test]
    fn test_new_york_am_is_single_range() {
        // Midnight in New York is 05:00 UTC, noon is 17:00 UTC
        assert_eq!(
            ranges(DayPeriod::Am, "America/New_York"),
            vec![(hms(5, 0, 0), hms(17, 0, 0))]
        );
    }

    #[test]
    fn test_london_am_and_pm_match_utc() {
        assert_eq!(
            ranges(DayPeriod::Am, "Europe/London"),
            vec![(hms(0, 0, 0), hms(12, 0, 0))]
        );
        assert_eq!(
            ranges(DayPeriod::Pm, "Europe/London"),
            vec![(hms(12, 0, 0), hms(23, 59, 59))]
        );
    }

    #[test]
    fn test_sydney_pm_is_single_range() {
        assert_eq!(
            ranges(DayPeriod::Pm, "Australia/Sydney"),
            vec![(hms(1, 0, 0), hms(12, 59, 59))]
        );
    }

    #[test]
    fn test_auckland_am_is_single_range() {
        // NZDT is UTC+13 in January
        assert_eq!(
            ranges(DayPeriod::Am, "Pacific/Auckland"),
            vec![(hms(11, 0, 0), hms(23, 0, 0))]
        );
    }

    #[test]
    fn test_singapore_pm_is_single_range() {
        assert_eq!(
            ranges(DayPeriod::Pm, "Asia/Singapore"),
            vec![(hms(4, 0, 0), hms(15, 59, 59))]
        );
    }

    // ── split range ─────────────────────────────────────────────────────

    #[test]
    fn test_new_york_pm_splits_at_utc_midnight() {
        assert_eq!(
            ranges(DayPeriod::Pm, "America/New_York"),
            vec![
                (hms(17, 0, 0), hms(23, 59, 59)),
                (hms(0, 0, 0), hms(4, 59, 59)),
            ]
        );
    }

    #[test]
    fn test_sydney_am_splits_at_utc_midnight() {
        assert_eq!(
            ranges(DayPeriod::Am, "Australia/Sydney"),
            vec![
                (hms(13, 0, 0), hms(23, 59, 59)),
                (hms(0, 0, 0), hms(1, 0, 0)),
            ]
        );
    }

    #[test]
    fn test_auckland_pm_splits_at_utc_midnight() {
        assert_eq!(
            ranges(DayPeriod::Pm, "Pacific/Auckland"),
            vec![
                (hms(23, 0, 0), hms(23, 59, 59)),
                (hms(0, 0, 0), hms(10, 59, 59)),
            ]
        );
    }

    #[test]
    fn test_singapore_am_splits_at_utc_midnight() {
        assert_eq!(
            ranges(DayPeriod::Am, "Asia/Singapore"),
            vec![
                (hms(16, 0, 0), hms(23, 59, 59)),
                (hms(0, 0, 0), hms(4, 0, 0)),
            ]
        );
    }

    #[test]
    fn test_half_hour_offset_splits() {
        // IST is UTC+05:30
        assert_eq!(
            ranges(DayPeriod::Am, "Asia/Kolkata"),
            vec![
                (hms(18, 30, 0), hms(23, 59, 59)),
                (hms(0, 0, 0), hms(6, 30, 0)),
            ]
        );
    }

    #[test]
    fn test_exact_plus_twelve_drops_empty_piece() {
        // Noon at UTC+12 is exactly 00:00 UTC
        assert_eq!(
            ranges(DayPeriod::Am, "Etc/GMT-12"),
            vec![(hms(12, 0, 0), hms(23, 59, 59))]
        );
        assert_eq!(
            ranges(DayPeriod::Pm, "Etc/GMT-12"),
            vec![(hms(0, 0, 0), hms(11, 59, 59))]
        );
    }

    #[test]
    fn test_unknown_timezone_uses_utc_ranges() {
        assert_eq!(
            ranges(DayPeriod::Am, "UK"),
            vec![(hms(0, 0, 0), hms(12, 0, 0))]
        );
    }

    // ── TimeRange ───────────────────────────────────────────────────────

    #[test]
    fn test_ticks_are_hundred_nanoseconds() {
        let range = TimeRange::new(hms(5, 0, 0), hms(17, 0, 0)).unwrap();
        assert_eq!(range.from_ticks(), 5 * 3600 * TICKS_PER_SECOND);
        assert_eq!(range.to_ticks(), 17 * 3600 * TICKS_PER_SECOND);
        assert_eq!(range.from_ticks(), 180_000_000_000);
    }

    #[test]
    fn test_new_rejects_empty_or_inverted() {
        assert!(TimeRange::new(hms(1, 0, 0), hms(1, 0, 0)).is_none());
        assert!(TimeRange::new(hms(2, 0, 0), hms(1, 0, 0)).is_none());
    }

    #[test]
    fn test_contains_includes_both_ends() {
        let range = TimeRange::new(hms(5, 0, 0), hms(17, 0, 0)).unwrap();
        assert!(range.contains(hms(5, 0, 0)));
        assert!(range.contains(hms(17, 0, 0)));
        assert!(!range.contains(hms(17, 0, 1)));
    }

    #[test]
    fn test_serializes_as_ticks() {
        let range = TimeRange::new(hms(0, 0, 0), hms(0, 0, 1)).unwrap();
        assert_eq!(
            serde_json::to_string(&range).unwrap(),
            r#"{"from":0,"to":10000000}"#
        );
    }

    #[test]
    fn test_display() {
        let range = TimeRange::new(hms(17, 0, 0), hms(23, 59, 59)).unwrap();
        assert_eq!(range.to_string(), "17:00:00-23:59:59");
    }
}
