use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// A calendar month, the time axis of every analysis series.
///
/// Orders chronologically and renders as `YYYY-MM`, which is also its
/// wire format. Years outside `0000..=9999` keep every digit and a leading
/// `-` when negative (`10000-01`, `-0005-03`). The year range is the one
/// `chrono::NaiveDate` covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Earliest representable month, the month of `NaiveDate::MIN`.
    pub const MIN: Self = Self {
        year: -262_144,
        month: 1,
    };

    /// Latest representable month, the month of `NaiveDate::MAX`.
    pub const MAX: Self = Self {
        year: 262_143,
        month: 12,
    };

    /// Build a key from a year and a 1-based month.
    pub fn new(year: i32, month: u32) -> Result<Self, CoreError> {
        if !(1..=12).contains(&month) {
            return Err(CoreError::ValidationError(format!(
                "month must be between 1 and 12, got {month}"
            )));
        }
        if !(Self::MIN.year..=Self::MAX.year).contains(&year) {
            return Err(CoreError::ValidationError(format!(
                "year must be between {} and {}, got {year}",
                Self::MIN.year,
                Self::MAX.year
            )));
        }
        Ok(Self { year, month })
    }

    /// Month containing the given date.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Month containing the given timestamp. No timezone conversion is applied.
    #[must_use]
    pub fn from_datetime(timestamp: NaiveDateTime) -> Self {
        Self::from_date(timestamp.date())
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The month `steps` calendar months after this one, saturating at
    /// [`MonthKey::MAX`].
    #[must_use]
    pub fn advance(&self, steps: u32) -> Self {
        let ordinal = self.ordinal() + i64::from(steps);
        if ordinal >= Self::MAX.ordinal() {
            return Self::MAX;
        }
        // bounded by MAX above and by MIN through `new`, so the year fits i32
        Self {
            year: ordinal.div_euclid(12) as i32,
            month: ordinal.rem_euclid(12) as u32 + 1,
        }
    }

    fn ordinal(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month - 1)
    }

    /// First day of the month.
    #[must_use]
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}-{:02}", self.year.unsigned_abs(), self.month)
        } else {
            write!(f, "{:04}-{:02}", self.year, self.month)
        }
    }
}

impl FromStr for MonthKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::ValidationError(format!("invalid month label '{s}', expected YYYY-MM"));
        let (year, month) = s.rsplit_once('-').ok_or_else(invalid)?;
        let digits = year.strip_prefix('-').unwrap_or(year);
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if digits.len() < 4 || !all_digits(digits) || month.len() != 2 || !all_digits(month) {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let key = Self::new(year, month)?;
        // one label per month: no extra zero padding, no "-0000"
        if key.to_string() != s {
            return Err(invalid());
        }
        Ok(key)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
