//! # day-period-filter
//!
//! UTC time-of-day filters for local AM/PM day periods.
//!
//! Search systems that store timestamps in UTC cannot express "records from
//! the morning in Sydney" as a single UTC window: the local window is shifted
//! by the zone's offset and may run past a UTC midnight. This crate computes
//! the one or two UTC `[from, to]` time-of-day ranges that cover a local day
//! period.
//!
//! ## Modules
//!
//! - [`period`] — the [`DayPeriod`] type (`AM` / `PM`)
//! - [`timezone`] — IANA and Windows identifier resolution, with UTC fallback
//! - [`ranges`] — [`TimeRange`] and the range computation
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use day_period_filter::{time_ranges_for_on, DayPeriod};
//!
//! let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
//! let ranges = time_ranges_for_on(DayPeriod::Am, "Australia/Sydney", date);
//!
//! // Sydney midnight is 13:00 UTC the previous day, noon is 01:00 UTC
//! assert_eq!(ranges.len(), 2);
//! assert_eq!(ranges[0].to_string(), "13:00:00-23:59:59");
//! assert_eq!(ranges[1].to_string(), "00:00:00-01:00:00");
//! ```

pub mod error;
pub mod period;
pub mod ranges;
pub mod timezone;
mod windows;

use chrono::NaiveDate;
use tracing::debug;

pub use error::{FilterError, Result};
pub use period::DayPeriod;
pub use ranges::{compute_ranges, TimeRange, TICKS_PER_SECOND};
pub use timezone::{is_valid_timezone, ResolvedTimezone, TimezoneResolver};

/// UTC ranges for `period` in `timezone`, using today's offset for the zone.
///
/// Unrecognized identifiers are treated as UTC.
pub fn time_ranges_for(period: DayPeriod, timezone: &str) -> Vec<TimeRange> {
    ranges_with(TimezoneResolver::today(), period, timezone)
}

/// UTC ranges for `period` in `timezone`, using the zone's offset on
/// `reference_date`.
pub fn time_ranges_for_on(
    period: DayPeriod,
    timezone: &str,
    reference_date: NaiveDate,
) -> Vec<TimeRange> {
    ranges_with(TimezoneResolver::new(reference_date), period, timezone)
}

fn ranges_with(resolver: TimezoneResolver, period: DayPeriod, timezone: &str) -> Vec<TimeRange> {
    let resolved = resolver.resolve(timezone);
    let ranges = compute_ranges(period, &resolved);
    debug!(
        "{} in {} -> [{}]",
        period,
        resolved,
        ranges
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
    ranges
}
