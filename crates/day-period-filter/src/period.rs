//! The two halves of a local day.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// Morning or afternoon in local wall-clock time.
///
/// `Am` covers local midnight up to noon, `Pm` covers noon up to the last
/// second of the day. Displays and serializes as `"AM"` / `"PM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayPeriod {
    Am,
    Pm,
}

impl DayPeriod {
    /// Both periods, morning first.
    pub const ALL: [DayPeriod; 2] = [DayPeriod::Am, DayPeriod::Pm];

    pub fn as_str(self) -> &'static str {
        match self {
            DayPeriod::Am => "AM",
            DayPeriod::Pm => "PM",
        }
    }
}

impl fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayPeriod {
    type Err = FilterError;

    /// Accepts `am`/`pm` in any case, with or without dots (`a.m.`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '.')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "am" => Ok(DayPeriod::Am),
            "pm" => Ok(DayPeriod::Pm),
            _ => Err(FilterError::InvalidDayPeriod(format!("'{}'", s))),
        }
    }
}
