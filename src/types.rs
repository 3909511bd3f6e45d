use crate::calendar::Calendar;
use crate::consts::{
    JANUARY, LONG_MONTH_NAMES, MAX_MONTH, MAX_QUARTER, MIN_DAY, MONTHS_PER_QUARTER, SHORT_MONTH_NAMES,
};
use crate::DateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Iterates January to December
    pub fn all() -> impl Iterator<Item = Self> {
        (JANUARY..=MAX_MONTH).filter_map(|value| Self::new(value).ok())
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Abbreviated English name, e.g. "Jun"
    pub const fn short_name(self) -> &'static str {
        SHORT_MONTH_NAMES[self.0.get() as usize]
    }

    /// Full English name, e.g. "June"
    pub const fn long_name(self) -> &'static str {
        LONG_MONTH_NAMES[self.0.get() as usize]
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// A day value guaranteed to be valid for a given calendar, year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and exists in the
    /// given month of the given year under `calendar`. February 29th 1700 is
    /// a valid Julian day but not a valid Gregorian one.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, calendar: Calendar, year: i32, month: Month) -> Result<Self, DateError> {
        let invalid = DateError::InvalidDay {
            year,
            month: month.get(),
            day: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;

        if value > calendar.days_in_month(year, month) {
            return Err(invalid);
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate without calendar/year/month context, so just check minimum
        if value < MIN_DAY {
            return Err(DateError::InvalidDay {
                year:  0,
                month: 0,
                day:   value,
            });
        }
        // Since we validated value >= MIN_DAY (which is 1), value is non-zero
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidDay {
            year:  0,
            month: 0,
            day:   value,
        })?;
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A civil-year quarter in the range `1..=MAX_QUARTER`, following the
/// General Register Office convention used by the England and Wales birth,
/// marriage and death indexes:
///
/// 1. Jan-Mar, indexed as the March quarter
/// 2. Apr-Jun, indexed as the June quarter
/// 3. Jul-Sep, indexed as the September quarter
/// 4. Oct-Dec, indexed as the December quarter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Quarter(NonZeroU8);

impl Quarter {
    /// # Errors
    /// Returns `DateError::InvalidQuarter` if the value is 0 or > `MAX_QUARTER`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidQuarter(value))?;
        if value > MAX_QUARTER {
            return Err(DateError::InvalidQuarter(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the quarter containing the month.
    pub const fn containing(month: Month) -> Self {
        let q = (month.get() - 1) / MONTHS_PER_QUARTER + 1;
        // month is 1..=12, so q is 1..=4
        match NonZeroU8::new(q) {
            Some(q) => Self(q),
            None => Self(NonZeroU8::MIN),
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// First month of the quarter (Jan, Apr, Jul or Oct)
    pub fn first_month(self) -> Month {
        Month(NonZeroU8::MIN.saturating_add((self.get() - 1) * MONTHS_PER_QUARTER))
    }

    /// Last month of the quarter (Mar, Jun, Sep or Dec)
    pub fn last_month(self) -> Month {
        Month(NonZeroU8::MIN.saturating_add(self.get() * MONTHS_PER_QUARTER - 1))
    }

    /// Short label for the months covered, e.g. "Jan-Mar"
    pub fn month_range(self) -> String {
        format!("{}-{}", self.first_month(), self.last_month())
    }
}

impl TryFrom<u8> for Quarter {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quarter> for u8 {
    fn from(quarter: Quarter) -> Self {
        quarter.0.get()
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.0)
    }
}
