//! Calendar-month keys.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar-month identifier.
///
/// Stored as a numeric (year, month) pair so that ordering is always
/// chronological. String keys like `"2024-2"` sort lexically and would put
/// October before February; this type derives `Ord` on the numeric fields
/// instead and only renders the zero-padded `YYYY-MM` form for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct MonthKey {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
}

impl MonthKey {
    /// Creates a month key. `month` must be in 1-12.
    #[must_use]
    pub const fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Returns the month key containing the given date.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the key `months` calendar months after this one.
    #[must_use]
    pub fn plus_months(self, months: u32) -> Self {
        let zero_based = self.year * 12 + (self.month as i32 - 1) + months as i32;
        Self {
            year: zero_based.div_euclid(12),
            month: (zero_based.rem_euclid(12) + 1) as u32,
        }
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}

impl std::str::FromStr for MonthKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| format!("Invalid month key: {s}"))?;
        let year = year
            .parse::<i32>()
            .map_err(|_| format!("Invalid month key: {s}"))?;
        let month = month
            .parse::<u32>()
            .map_err(|_| format!("Invalid month key: {s}"))?;
        if !(1..=12).contains(&month) {
            return Err(format!("Invalid month key: {s}"));
        }
        Ok(Self { year, month })
    }
}

impl TryFrom<String> for MonthKey {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
