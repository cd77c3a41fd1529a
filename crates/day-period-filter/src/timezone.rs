//! Timezone identifier resolution.
//!
//! Turns an IANA name (`"Europe/London"`) or a Windows zone id
//! (`"GMT Standard Time"`) into a [`ResolvedTimezone`]: the zone together with
//! the fixed UTC offset it observes on a reference date. Range computation
//! only ever sees that fixed offset, so DST transitions inside a day are not
//! tracked.
//!
//! Resolution fails open: an identifier that cannot be recognized resolves to
//! UTC. Use [`TimezoneResolver::is_valid`] or [`TimezoneResolver::try_resolve`]
//! when an unrecognized identifier must be told apart from an explicit UTC.

use std::fmt;

use chrono::{FixedOffset, NaiveDate, NaiveTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::{debug, warn};

use crate::error::{FilterError, Result};
use crate::windows;

// ── ResolvedTimezone ────────────────────────────────────────────────────────

/// A timezone pinned to the UTC offset it observes on one reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTimezone {
    tz: Tz,
    offset: FixedOffset,
}

impl ResolvedTimezone {
    /// The UTC handle that unrecognized identifiers fall back to.
    ///
    /// `"UTC"` in either its IANA or Windows spelling resolves to this
    /// handle. Other zones with a zero offset, such as `"Etc/UTC"` or
    /// `"Europe/London"` in winter, are distinct handles.
    pub fn utc() -> Self {
        Self {
            tz: Tz::UTC,
            offset: Utc.fix(),
        }
    }

    /// Pin `tz` to the offset in effect at noon UTC on `reference_date`.
    pub fn on_date(tz: Tz, reference_date: NaiveDate) -> Self {
        let noon = reference_date.and_time(NaiveTime::MIN) + chrono::Duration::hours(12);
        let offset = tz.offset_from_utc_datetime(&noon).fix();
        Self { tz, offset }
    }

    /// The IANA name of the zone (Windows ids report the zone they map to).
    pub fn name(&self) -> &'static str {
        self.tz.name()
    }

    pub fn tz(&self) -> Tz {
        self.tz
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Seconds to add to UTC to get local time.
    pub fn offset_seconds(&self) -> i32 {
        self.offset.local_minus_utc()
    }

    /// The offset formatted as `+HH:MM` / `-HH:MM`.
    pub fn utc_offset(&self) -> String {
        let offset_secs = self.offset_seconds();
        let sign = if offset_secs >= 0 { "+" } else { "-" };
        let abs_secs = offset_secs.unsigned_abs();
        let hours = abs_secs / 3600;
        let minutes = (abs_secs % 3600) / 60;
        format!("{sign}{hours:02}:{minutes:02}")
    }
}

impl Default for ResolvedTimezone {
    fn default() -> Self {
        Self::utc()
    }
}

impl fmt::Display for ResolvedTimezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.utc_offset())
    }
}

// ── TimezoneResolver ────────────────────────────────────────────────────────

/// Resolves timezone identifiers against a fixed reference date.
///
/// The reference date only decides which offset a zone with DST is pinned
/// to; it is never part of the produced ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimezoneResolver {
    reference_date: NaiveDate,
}

impl TimezoneResolver {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self { reference_date }
    }

    /// A resolver anchored on today's UTC date.
    pub fn today() -> Self {
        Self::new(Utc::now().date_naive())
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Resolve `identifier`, falling back to UTC when it is not recognized.
    ///
    /// Never fails. Equal identifiers always resolve to equal handles.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use day_period_filter::{ResolvedTimezone, TimezoneResolver};
    ///
    /// let resolver = TimezoneResolver::new(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
    /// assert_eq!(resolver.resolve("America/New_York").utc_offset(), "-05:00");
    /// assert_eq!(resolver.resolve("not a zone"), ResolvedTimezone::utc());
    /// ```
    pub fn resolve(&self, identifier: &str) -> ResolvedTimezone {
        self.try_resolve(identifier).unwrap_or_else(|_| {
            warn!(
                "Unrecognized timezone '{}', falling back to UTC",
                identifier
            );
            ResolvedTimezone::utc()
        })
    }

    /// Resolve `identifier`, or fail with [`FilterError::InvalidTimezone`].
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidTimezone`] if the identifier is neither
    /// a recognized IANA name nor a known Windows zone id.
    pub fn try_resolve(&self, identifier: &str) -> Result<ResolvedTimezone> {
        let tz = lookup(identifier)
            .ok_or_else(|| FilterError::InvalidTimezone(format!("'{}'", identifier)))?;
        let resolved = ResolvedTimezone::on_date(tz, self.reference_date);
        debug!(
            "Resolved timezone '{}' to {} on {}",
            identifier, resolved, self.reference_date
        );
        Ok(resolved)
    }

    /// Whether `identifier` names a recognized timezone.
    pub fn is_valid(&self, identifier: &str) -> bool {
        is_valid_timezone(identifier)
    }
}

impl Default for TimezoneResolver {
    fn default() -> Self {
        Self::today()
    }
}

/// Whether `identifier` is a recognized IANA name or Windows zone id.
///
/// IANA names must carry an `Area/Location` form, or be one of the bare zone
/// names such as `UTC`, `GMT` or `EST5EDT`; country aliases such as `UK` are
/// not accepted.
pub fn is_valid_timezone(identifier: &str) -> bool {
    lookup(identifier).is_some()
}

fn lookup(identifier: &str) -> Option<Tz> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return None;
    }
    parse_iana(identifier).or_else(|| {
        windows::iana_for_windows_id(identifier).and_then(|iana| iana.parse::<Tz>().ok())
    })
}

/// Zone names without an `Area/` prefix that are accepted. Other slash-less
/// names in the tz database are country or legacy aliases (`UK`, `Japan`).
const BARE_ZONE_NAMES: &[&str] = &[
    "UTC", "GMT", "EST5EDT", "CST6CDT", "MST7MDT", "PST8PDT", "EST", "MST", "HST", "CET",
    "EET", "MET", "WET",
];

fn parse_iana(name: &str) -> Option<Tz> {
    if name.chars().any(char::is_whitespace) {
        return None;
    }
    if !name.contains('/') && !BARE_ZONE_NAMES.contains(&name) {
        return None;
    }
    name.parse::<Tz>().ok()
}
