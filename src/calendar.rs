use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{
    BRITISH_GREGORIAN_ADOPTION, CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, JANUARY, LADY_DAY, LEAP_YEAR_CYCLE, MARCH, MIN_DAY, SCOTTISH_NEW_YEAR_ADOPTION,
};
use crate::prelude::*;
use crate::types::Month;

/// A historical calendar convention.
///
/// The convention decides how a `(year, month, day)` triple maps onto the
/// Julian Day Number timeline and how the year of a date is labelled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Calendar {
    /// Proleptic Gregorian calendar, year starts on 1 Jan
    #[default]
    #[display(fmt = "Gregorian")]
    Gregorian,
    /// Julian calendar with the first day of the year being 1 Jan
    #[display(fmt = "Julian")]
    Julian,
    /// Julian calendar with the first day of the year being 25 Mar
    #[serde(rename = "julian_25_mar")]
    #[display(fmt = "Julian, year starts on 25 Mar")]
    Julian25Mar,
}

/// Error returned when an external tag does not name a supported calendar or
/// reckoning location.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    #[error("unsupported calendar: {0}")]
    UnsupportedCalendar(String),

    #[error("unsupported reckoning location: {0}")]
    UnsupportedReckoningLocation(String),
}

impl Calendar {
    /// Returns the Julian Day Number (days elapsed since the beginning of the
    /// Julian period) of the given date in this calendar.
    ///
    /// The day is not checked against the month length: out of range days
    /// simply run on into the following month.
    ///
    /// Under [`Calendar::Julian25Mar`] days are counted exactly as in the
    /// Julian calendar. The 25 March year start changes the label of the year
    /// (see [`Calendar::fmt_year`]), so 24 Mar is the last day of one year and
    /// 25 Mar, the following day, is the first day of the next.
    pub fn julian_day(self, year: i32, month: u8, day: u8) -> i64 {
        let (y, m, d) = (i64::from(year), i64::from(month), i64::from(day));
        match self {
            Self::Gregorian => gregorian_julian_day(y, m, d),
            Self::Julian | Self::Julian25Mar => julian_julian_day(y, m, d),
        }
    }

    /// Formats the year of a date, using the dual `1752/3` form for dates that
    /// fall before the 25 March start of year.
    pub fn fmt_year(self, year: i32, month: u8, day: u8) -> String {
        if !self.is_before_year_start(month, day) {
            return year.to_string();
        }

        // i64 so the year after i32::MAX still has digits to print
        let next = i64::from(year) + 1;
        if year.rem_euclid(10) < 9 {
            format!("{year}/{}", next.rem_euclid(10))
        } else {
            format!("{year}/{:02}", next.rem_euclid(100))
        }
    }

    /// Month and day on which the year begins.
    pub const fn year_start(self) -> (u8, u8) {
        match self {
            Self::Gregorian | Self::Julian => (JANUARY, MIN_DAY),
            Self::Julian25Mar => (MARCH, LADY_DAY),
        }
    }

    /// Reports whether the month and day fall before the start of the year,
    /// which only happens for 1 Jan to 24 Mar under the 25 March reckoning.
    pub fn is_before_year_start(self, month: u8, day: u8) -> bool {
        let start = self.year_start();
        start != (JANUARY, MIN_DAY) && (month, day) < start
    }

    pub const fn is_leap_year(self, year: i32) -> bool {
        match self {
            Self::Gregorian => {
                (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
                    || year.rem_euclid(GREGORIAN_CYCLE) == 0
            }
            Self::Julian | Self::Julian25Mar => year.rem_euclid(LEAP_YEAR_CYCLE) == 0,
        }
    }

    pub const fn days_in_month(self, year: i32, month: Month) -> u8 {
        let month = month.get();
        if month == FEBRUARY && self.is_leap_year(year) {
            FEBRUARY_DAYS_LEAP
        } else {
            DAYS_IN_MONTH[month as usize]
        }
    }
}

// Fliegel-Van Flandern style conversion. The reference formula works in
// floating point: 365.25 and 30.6001 are scaled to integers and the final
// half day is folded into a doubled numerator, so every step truncates
// towards zero exactly as the float-to-int conversions did.
fn gregorian_julian_day(year: i64, month: i64, day: i64) -> i64 {
    let (y, m) = if month <= 2 { (year - 1, month + 12) } else { (year, month) };
    let a = y / 100;
    let b = a / 4;
    let c = 2 - a + b;
    let e = 1461 * (y + 4716) / 4;
    let f = 306_001 * (m + 1) / 10_000;
    (2 * (c + day + e + f) - 3049) / 2
}

fn julian_julian_day(y: i64, m: i64, d: i64) -> i64 {
    367 * y - (7 * (y + 5001 + (m - 9) / 7)) / 4 + (275 * m) / 9 + d + 1_729_777
}

impl TryFrom<u8> for Calendar {
    type Error = TagError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Gregorian),
            1 => Ok(Self::Julian),
            2 => Ok(Self::Julian25Mar),
            _ => Err(TagError::UnsupportedCalendar(value.to_string())),
        }
    }
}

impl FromStr for Calendar {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_tag(s).as_str() {
            "gregorian" => Ok(Self::Gregorian),
            "julian" => Ok(Self::Julian),
            "julian25mar" => Ok(Self::Julian25Mar),
            _ => Err(TagError::UnsupportedCalendar(s.to_owned())),
        }
    }
}

/// The location whose historical reckoning decides which calendar was in use
/// in a given year: when the first day of the year moved to 1 Jan and when the
/// Julian calendar gave way to the Gregorian.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReckoningLocation {
    /// No historical adjustment, every year is Gregorian
    #[default]
    #[display(fmt = "none")]
    None,
    #[display(fmt = "England and Wales")]
    EnglandAndWales,
    #[display(fmt = "Scotland")]
    Scotland,
    #[display(fmt = "Ireland")]
    Ireland,
}

impl ReckoningLocation {
    /// Returns the calendar in use at this location during the given year.
    pub const fn calendar(self, year: i32) -> Calendar {
        match self {
            Self::None => Calendar::Gregorian,
            Self::EnglandAndWales | Self::Ireland => {
                if year < BRITISH_GREGORIAN_ADOPTION {
                    Calendar::Julian25Mar
                } else {
                    Calendar::Gregorian
                }
            }
            Self::Scotland => {
                if year < SCOTTISH_NEW_YEAR_ADOPTION {
                    Calendar::Julian25Mar
                } else if year < BRITISH_GREGORIAN_ADOPTION {
                    Calendar::Julian
                } else {
                    Calendar::Gregorian
                }
            }
        }
    }
}

impl FromStr for ReckoningLocation {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_tag(s).as_str() {
            "none" => Ok(Self::None),
            "englandandwales" | "england" | "wales" => Ok(Self::EnglandAndWales),
            "scotland" => Ok(Self::Scotland),
            "ireland" => Ok(Self::Ireland),
            _ => Err(TagError::UnsupportedReckoningLocation(s.to_owned())),
        }
    }
}

/// Lowercases and drops separators so "Julian-25-Mar" and "julian25mar" agree.
fn normalize_tag(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
