//! Time units for duration phrasing
//!
//! A closed enumeration of the calendar and clock units understood by
//! [`format_duration`](crate::format_duration), ordered coarsest to finest.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for time unit parsing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UnitParseError {
    #[error("Unknown time unit: {0}")]
    UnknownUnit(String),
}

/// A unit of time, from years down to seconds
///
/// Each unit carries its canonical singular English noun and an ordinal
/// precision rank (year = 0 through second = 6). The rank selects how fine a
/// breakdown [`format_duration`](crate::format_duration) reports.
///
/// # Examples
///
/// ```
/// use humantext::TimeUnit;
///
/// assert_eq!(TimeUnit::Week.noun(), "week");
/// assert!(TimeUnit::Hour.rank() > TimeUnit::Day.rank());
/// assert_eq!("minute".parse::<TimeUnit>().unwrap(), TimeUnit::Minute);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TimeUnit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl TimeUnit {
    /// All units, ordered coarsest to finest.
    pub const ALL: [TimeUnit; 7] = [
        TimeUnit::Year,
        TimeUnit::Month,
        TimeUnit::Week,
        TimeUnit::Day,
        TimeUnit::Hour,
        TimeUnit::Minute,
        TimeUnit::Second,
    ];

    /// The canonical singular English noun for this unit.
    pub const fn noun(self) -> &'static str {
        match self {
            TimeUnit::Year => "year",
            TimeUnit::Month => "month",
            TimeUnit::Week => "week",
            TimeUnit::Day => "day",
            TimeUnit::Hour => "hour",
            TimeUnit::Minute => "minute",
            TimeUnit::Second => "second",
        }
    }

    /// Precision rank: 0 for the coarsest unit (year) through 6 for the
    /// finest (second).
    pub const fn rank(self) -> u8 {
        match self {
            TimeUnit::Year => 0,
            TimeUnit::Month => 1,
            TimeUnit::Week => 2,
            TimeUnit::Day => 3,
            TimeUnit::Hour => 4,
            TimeUnit::Minute => 5,
            TimeUnit::Second => 6,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

impl FromStr for TimeUnit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "year" => Ok(TimeUnit::Year),
            "month" => Ok(TimeUnit::Month),
            "week" => Ok(TimeUnit::Week),
            "day" => Ok(TimeUnit::Day),
            "hour" => Ok(TimeUnit::Hour),
            "minute" => Ok(TimeUnit::Minute),
            "second" => Ok(TimeUnit::Second),
            other => Err(UnitParseError::UnknownUnit(other.to_string())),
        }
    }
}
