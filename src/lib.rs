mod calendar;
mod consts;
mod interval;
mod ordering;
mod parse;
mod prelude;
mod range;
#[cfg(test)]
mod test_utils;
mod types;

pub use calendar::{Calendar, ReckoningLocation, TagError};
pub use consts::*;
pub use interval::{Interval, interval_between};
pub use ordering::{sort_chronologically, sorts_before};
pub use parse::{Parser, parse};
pub use range::{JulianDayRange, RangeError};
pub use types::{Day, Month, Quarter};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A genealogical date with varying levels of precision and certainty.
///
/// Every variant carries an optional [`Calendar`]. An absent calendar means
/// the value was recorded without one; calculations then fall back to the
/// Gregorian calendar.
///
/// Deserialising checks the fields the same way the constructors do, so a
/// day past the end of its month or an inverted year range is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Date {
    /// Known year, month and day
    Precise {
        year:     i32,
        month:    Month,
        day:      Day,
        #[serde(skip_serializing_if = "Option::is_none")]
        calendar: Option<Calendar>,
    },
    /// Known year only
    Year {
        year:     i32,
        #[serde(skip_serializing_if = "Option::is_none")]
        calendar: Option<Calendar>,
    },
    /// Known year and month
    MonthYear {
        year:     i32,
        month:    Month,
        #[serde(skip_serializing_if = "Option::is_none")]
        calendar: Option<Calendar>,
    },
    /// Known year and quarter, as found in civil registration indexes
    YearQuarter {
        year:     i32,
        quarter:  Quarter,
        #[serde(skip_serializing_if = "Option::is_none")]
        calendar: Option<Calendar>,
    },
    /// Some time before the start of the year
    BeforeYear {
        year:     i32,
        #[serde(skip_serializing_if = "Option::is_none")]
        calendar: Option<Calendar>,
    },
    /// Some time after the end of the year
    AfterYear {
        year:     i32,
        #[serde(skip_serializing_if = "Option::is_none")]
        calendar: Option<Calendar>,
    },
    /// Approximately the year
    AboutYear {
        year:     i32,
        #[serde(skip_serializing_if = "Option::is_none")]
        calendar: Option<Calendar>,
    },
    /// Estimated, usually from an age or another event
    EstimatedYear {
        year:     i32,
        #[serde(skip_serializing_if = "Option::is_none")]
        calendar: Option<Calendar>,
    },
    /// Some time between the start of `lower` and the end of `upper`
    YearRange {
        lower:    i32,
        upper:    i32,
        #[serde(skip_serializing_if = "Option::is_none")]
        calendar: Option<Calendar>,
    },
    /// Text from which no date could be extracted
    Unknown {
        text:     String,
        #[serde(skip_serializing_if = "Option::is_none")]
        calendar: Option<Calendar>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[display(fmt = "Invalid quarter: {} (must be 1-{})", "_0", MAX_QUARTER)]
    InvalidQuarter(u8),
    #[display(fmt = "Invalid year range: {lower} is after {upper}")]
    InvalidYearRange { lower: i32, upper: i32 },
}

impl std::error::Error for DateError {}

impl Date {
    /// Creates a precise date, checking the day against the month length in
    /// `calendar` (Gregorian when absent).
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` or `DateError::InvalidDay`.
    pub fn precise(year: i32, month: u8, day: u8, calendar: Option<Calendar>) -> Result<Self, DateError> {
        let month = Month::new(month)?;
        let day = Day::new(day, calendar.unwrap_or_default(), year, month)?;
        Ok(Self::Precise {
            year,
            month,
            day,
            calendar,
        })
    }

    pub const fn year(year: i32, calendar: Option<Calendar>) -> Self {
        Self::Year { year, calendar }
    }

    /// # Errors
    /// Returns `DateError::InvalidMonth` if the month is not 1-12.
    pub fn month_year(year: i32, month: u8, calendar: Option<Calendar>) -> Result<Self, DateError> {
        Ok(Self::MonthYear {
            year,
            month: Month::new(month)?,
            calendar,
        })
    }

    /// # Errors
    /// Returns `DateError::InvalidQuarter` if the quarter is not 1-4.
    pub fn year_quarter(year: i32, quarter: u8, calendar: Option<Calendar>) -> Result<Self, DateError> {
        Ok(Self::YearQuarter {
            year,
            quarter: Quarter::new(quarter)?,
            calendar,
        })
    }

    pub const fn before_year(year: i32, calendar: Option<Calendar>) -> Self {
        Self::BeforeYear { year, calendar }
    }

    pub const fn after_year(year: i32, calendar: Option<Calendar>) -> Self {
        Self::AfterYear { year, calendar }
    }

    pub const fn about_year(year: i32, calendar: Option<Calendar>) -> Self {
        Self::AboutYear { year, calendar }
    }

    pub const fn estimated_year(year: i32, calendar: Option<Calendar>) -> Self {
        Self::EstimatedYear { year, calendar }
    }

    /// Creates a range of whole years, both ends included.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYearRange` if `lower > upper`.
    pub const fn year_range(lower: i32, upper: i32, calendar: Option<Calendar>) -> Result<Self, DateError> {
        if lower > upper {
            return Err(DateError::InvalidYearRange { lower, upper });
        }
        Ok(Self::YearRange { lower, upper, calendar })
    }

    /// Wraps text that holds no recognisable date.
    pub fn unknown(text: impl Into<String>) -> Self {
        Self::Unknown {
            text:     text.into(),
            calendar: None,
        }
    }

    /// Returns the calendar the date was recorded in, if any
    pub const fn calendar(&self) -> Option<Calendar> {
        match *self {
            Self::Precise { calendar, .. }
            | Self::Year { calendar, .. }
            | Self::MonthYear { calendar, .. }
            | Self::YearQuarter { calendar, .. }
            | Self::BeforeYear { calendar, .. }
            | Self::AfterYear { calendar, .. }
            | Self::AboutYear { calendar, .. }
            | Self::EstimatedYear { calendar, .. }
            | Self::YearRange { calendar, .. }
            | Self::Unknown { calendar, .. } => calendar,
        }
    }

    /// Returns the calendar used for calculations: the recorded one, or
    /// Gregorian when none was recorded.
    pub fn effective_calendar(&self) -> Calendar {
        self.calendar().unwrap_or_default()
    }

    /// Returns the same date stamped with another calendar. The fields are
    /// kept as they are, no conversion between calendars takes place.
    #[must_use]
    pub fn with_calendar(mut self, calendar: Option<Calendar>) -> Self {
        match &mut self {
            Self::Precise { calendar: c, .. }
            | Self::Year { calendar: c, .. }
            | Self::MonthYear { calendar: c, .. }
            | Self::YearQuarter { calendar: c, .. }
            | Self::BeforeYear { calendar: c, .. }
            | Self::AfterYear { calendar: c, .. }
            | Self::AboutYear { calendar: c, .. }
            | Self::EstimatedYear { calendar: c, .. }
            | Self::YearRange { calendar: c, .. }
            | Self::Unknown { calendar: c, .. } => *c = calendar,
        }
        self
    }

    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }

    /// Returns a single year that stands for the date, if it has one.
    /// Bounds and ranges don't.
    pub const fn representative_year(&self) -> Option<i32> {
        match *self {
            Self::Precise { year, .. }
            | Self::Year { year, .. }
            | Self::MonthYear { year, .. }
            | Self::YearQuarter { year, .. }
            | Self::AboutYear { year, .. }
            | Self::EstimatedYear { year, .. } => Some(year),
            Self::BeforeYear { .. } | Self::AfterYear { .. } | Self::YearRange { .. } | Self::Unknown { .. } => {
                None
            },
        }
    }

    /// Widens the date to the [`Date::Year`] holding its representative year.
    pub fn as_year(&self) -> Option<Self> {
        self.representative_year().map(|year| Self::Year {
            year,
            calendar: self.calendar(),
        })
    }

    /// Returns the `(year, month, day)` of a precise date
    pub const fn as_precise(&self) -> Option<(i32, Month, Day)> {
        match *self {
            Self::Precise { year, month, day, .. } => Some((year, month, day)),
            _ => None,
        }
    }

    /// Day and month of a precise date without the year, e.g. "15 Jun", or
    /// "15 June" when `long` is set.
    pub fn date_in_year(&self, long: bool) -> Option<String> {
        let (_, month, day) = self.as_precise()?;
        let name = if long { month.long_name() } else { month.short_name() };
        Some(format!("{day} {name}"))
    }

    /// Prose form of the date that reads naturally after a verb, e.g.
    /// "born on 15 Jun, 1845" or "died before 1950".
    pub fn occurrence(&self) -> String {
        match self {
            Self::Precise { month, day, .. } => {
                format!("on {day} {month}, {}", self.precise_year_label().unwrap_or_default())
            },
            Self::Year { year, .. } => format!("in {year:04}"),
            Self::MonthYear { year, month, .. } => format!("in {month} {year:04}"),
            Self::YearQuarter { year, quarter, .. } => {
                format!("in the {} quarter of {year:04}", quarter.month_range())
            },
            Self::BeforeYear { year, .. } => format!("before {year:04}"),
            Self::AfterYear { year, .. } => format!("after {year:04}"),
            Self::AboutYear { year, .. } => format!("about {year:04}"),
            Self::EstimatedYear { year, .. } => format!("estimated {year:04}"),
            Self::YearRange { lower, upper, .. } => {
                if is_decade_or_century(*lower, *upper) {
                    format!("in the {lower}s")
                } else {
                    format!("between {lower} and {upper}")
                }
            },
            Self::Unknown { .. } => "on an unknown date".to_owned(),
        }
    }

    /// Returns the span of Julian days the date could fall on, computed in
    /// the effective calendar. Unknown dates have no span.
    ///
    /// Before and after dates are pinned to the day either side of their
    /// year: the day before 1 Jan and 31 Dec respectively.
    pub fn julian_day_range(&self) -> Option<JulianDayRange> {
        let cal = self.effective_calendar();
        let range = match *self {
            Self::Precise { year, month, day, .. } => {
                JulianDayRange::day(cal.julian_day(year, month.get(), day.get()))
            },
            Self::Year { year, .. } | Self::AboutYear { year, .. } | Self::EstimatedYear { year, .. } => {
                years_span(cal, year, year)
            },
            Self::MonthYear { year, month, .. } => months_span(cal, year, month, month),
            Self::YearQuarter { year, quarter, .. } => {
                months_span(cal, year, quarter.first_month(), quarter.last_month())
            },
            Self::YearRange { lower, upper, .. } => years_span(cal, lower.min(upper), lower.max(upper)),
            Self::AfterYear { year, .. } => JulianDayRange::day(cal.julian_day(year, DECEMBER, LAST_DAY_OF_DECEMBER)),
            Self::BeforeYear { year, .. } => JulianDayRange::day(cal.julian_day(year, JANUARY, MIN_DAY) - 1),
            Self::Unknown { .. } => return None,
        };
        Some(range)
    }

    pub fn earliest_julian_day(&self) -> Option<i64> {
        self.julian_day_range().map(|r| r.earliest())
    }

    pub fn latest_julian_day(&self) -> Option<i64> {
        self.julian_day_range().map(|r| r.latest())
    }

    /// Year of a precise date as it was written at the time: "1752/3" for
    /// 1 Jan 1752 when the year began on 25 Mar, otherwise zero-padded.
    fn precise_year_label(&self) -> Option<String> {
        let Self::Precise { year, month, day, .. } = *self else {
            return None;
        };
        let cal = self.effective_calendar();
        if cal.is_before_year_start(month.get(), day.get()) {
            Some(cal.fmt_year(year, month.get(), day.get()))
        } else {
            Some(format!("{year:04}"))
        }
    }
}

/// First day of `first` to the last day of `last`, both in the same year.
fn months_span(cal: Calendar, year: i32, first: Month, last: Month) -> JulianDayRange {
    JulianDayRange::spanning(
        cal.julian_day(year, first.get(), MIN_DAY),
        cal.julian_day(year, last.get(), cal.days_in_month(year, last)),
    )
}

/// 1 Jan of `lower` to 31 Dec of `upper`
fn years_span(cal: Calendar, lower: i32, upper: i32) -> JulianDayRange {
    JulianDayRange::spanning(
        cal.julian_day(lower, JANUARY, MIN_DAY),
        cal.julian_day(upper, DECEMBER, LAST_DAY_OF_DECEMBER),
    )
}

/// Ranges like 1880-1889 or 1800-1899 read better as "1880s" and "1800s".
const fn is_decade_or_century(lower: i32, upper: i32) -> bool {
    lower % 10 == 0 && matches!(upper - lower, 9 | 99)
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Precise { month, day, .. } => {
                write!(f, "{day} {month} {}", self.precise_year_label().unwrap_or_default())
            },
            Self::Year { year, .. } => write!(f, "{year:04}"),
            Self::MonthYear { year, month, .. } => write!(f, "{month} {year:04}"),
            Self::YearQuarter { year, quarter, .. } => write!(f, "{} {year:04}", quarter.month_range()),
            Self::BeforeYear { year, .. } => write!(f, "bef. {year}"),
            Self::AfterYear { year, .. } => write!(f, "aft. {year}"),
            Self::AboutYear { year, .. } => write!(f, "abt. {year}"),
            Self::EstimatedYear { year, .. } => write!(f, "est. {year}"),
            Self::YearRange { lower, upper, .. } => {
                if is_decade_or_century(*lower, *upper) {
                    write!(f, "{lower}s")
                } else {
                    write!(f, "{lower}{YEAR_RANGE_SEPARATOR}{upper}")
                }
            },
            Self::Unknown { text, .. } if text.is_empty() => f.write_str("unknown"),
            Self::Unknown { text, .. } => f.write_str(text),
        }
    }
}

/// Serialised form of a [`Date`] with plain numeric fields, turned into a
/// `Date` through the validating constructors.
#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum RawDate {
    Precise {
        year:     i32,
        month:    u8,
        day:      u8,
        #[serde(default)]
        calendar: Option<Calendar>,
    },
    Year {
        year:     i32,
        #[serde(default)]
        calendar: Option<Calendar>,
    },
    MonthYear {
        year:     i32,
        month:    u8,
        #[serde(default)]
        calendar: Option<Calendar>,
    },
    YearQuarter {
        year:     i32,
        quarter:  u8,
        #[serde(default)]
        calendar: Option<Calendar>,
    },
    BeforeYear {
        year:     i32,
        #[serde(default)]
        calendar: Option<Calendar>,
    },
    AfterYear {
        year:     i32,
        #[serde(default)]
        calendar: Option<Calendar>,
    },
    AboutYear {
        year:     i32,
        #[serde(default)]
        calendar: Option<Calendar>,
    },
    EstimatedYear {
        year:     i32,
        #[serde(default)]
        calendar: Option<Calendar>,
    },
    YearRange {
        lower:    i32,
        upper:    i32,
        #[serde(default)]
        calendar: Option<Calendar>,
    },
    Unknown {
        text:     String,
        #[serde(default)]
        calendar: Option<Calendar>,
    },
}

impl RawDate {
    fn into_date(self) -> Result<Date, DateError> {
        match self {
            Self::Precise {
                year,
                month,
                day,
                calendar,
            } => Date::precise(year, month, day, calendar),
            Self::Year { year, calendar } => Ok(Date::year(year, calendar)),
            Self::MonthYear { year, month, calendar } => Date::month_year(year, month, calendar),
            Self::YearQuarter { year, quarter, calendar } => Date::year_quarter(year, quarter, calendar),
            Self::BeforeYear { year, calendar } => Ok(Date::before_year(year, calendar)),
            Self::AfterYear { year, calendar } => Ok(Date::after_year(year, calendar)),
            Self::AboutYear { year, calendar } => Ok(Date::about_year(year, calendar)),
            Self::EstimatedYear { year, calendar } => Ok(Date::estimated_year(year, calendar)),
            Self::YearRange { lower, upper, calendar } => Date::year_range(lower, upper, calendar),
            Self::Unknown { text, calendar } => Ok(Date::unknown(text).with_calendar(calendar)),
        }
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        RawDate::deserialize(deserializer)?
            .into_date()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        about, after, before, estimated, month_year, precise, quarter, unknown, year, year_range,
    };

    #[test]
    fn test_constructors() {
        let date = Date::precise(1845, 6, 15, None).unwrap();
        assert_eq!(date.as_precise(), Some((1845, Month::new(6).unwrap(), Day::try_from(15_u8).unwrap())));

        assert!(matches!(Date::precise(1845, 13, 1, None), Err(DateError::InvalidMonth(13))));
        assert!(matches!(Date::precise(1845, 2, 29, None), Err(DateError::InvalidDay { .. })));
        assert!(matches!(Date::month_year(1845, 0, None), Err(DateError::InvalidMonth(0))));
        assert!(matches!(Date::year_quarter(1845, 5, None), Err(DateError::InvalidQuarter(5))));
        assert_eq!(
            Date::year_range(1850, 1840, None),
            Err(DateError::InvalidYearRange { lower: 1850, upper: 1840 })
        );
        assert!(Date::year_range(1840, 1840, None).is_ok());
    }

    #[test]
    fn test_precise_day_follows_calendar() {
        assert!(Date::precise(1700, 2, 29, None).is_err());
        assert!(Date::precise(1700, 2, 29, Some(Calendar::Gregorian)).is_err());
        assert!(Date::precise(1700, 2, 29, Some(Calendar::Julian)).is_ok());
        assert!(Date::precise(1700, 2, 29, Some(Calendar::Julian25Mar)).is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(DateError::InvalidMonth(13).to_string(), "Invalid month: 13 (must be 1-12)");
        assert_eq!(
            DateError::InvalidDay { year: 1845, month: 2, day: 30 }.to_string(),
            "Invalid day 30 for month 1845-02"
        );
        assert_eq!(DateError::InvalidQuarter(0).to_string(), "Invalid quarter: 0 (must be 1-4)");
    }

    #[test]
    fn test_display_cases() {
        struct TestCase {
            date: Date,
            want: &'static str,
        }

        let cases = [
            TestCase { date: precise(1845, 6, 15), want: "15 Jun 1845" },
            TestCase { date: precise(845, 6, 15), want: "15 Jun 0845" },
            TestCase { date: year(1845), want: "1845" },
            TestCase { date: year(845), want: "0845" },
            TestCase { date: month_year(1845, 6), want: "Jun 1845" },
            TestCase { date: quarter(1845, 1), want: "Jan-Mar 1845" },
            TestCase { date: quarter(1845, 4), want: "Oct-Dec 1845" },
            TestCase { date: before(1950), want: "bef. 1950" },
            TestCase { date: after(1950), want: "aft. 1950" },
            TestCase { date: about(1950), want: "abt. 1950" },
            TestCase { date: estimated(1950), want: "est. 1950" },
            TestCase { date: about(950), want: "abt. 950" },
            TestCase { date: year_range(1880, 1889), want: "1880s" },
            TestCase { date: year_range(1800, 1899), want: "1800s" },
            TestCase { date: year_range(1920, 1923), want: "1920-1923" },
            TestCase { date: year_range(1881, 1890), want: "1881-1890" },
            TestCase { date: unknown("not a date"), want: "not a date" },
            TestCase { date: unknown(""), want: "unknown" },
        ];

        for case in &cases {
            assert_eq!(case.date.to_string(), case.want, "{:?}", case.date);
        }
    }

    #[test]
    fn test_display_dual_year() {
        let cal = Some(Calendar::Julian25Mar);
        assert_eq!(Date::precise(1752, 1, 1, cal).unwrap().to_string(), "1 Jan 1752/3");
        assert_eq!(Date::precise(1751, 3, 24, cal).unwrap().to_string(), "24 Mar 1751/2");
        assert_eq!(Date::precise(1751, 3, 25, cal).unwrap().to_string(), "25 Mar 1751");
        assert_eq!(Date::precise(1699, 2, 3, cal).unwrap().occurrence(), "on 3 Feb, 1699/00");
        assert_eq!(Date::precise(i32::MAX, 1, 1, cal).unwrap().to_string(), "1 Jan 2147483647/8");
        // the plain Julian calendar starts its year on 1 Jan
        assert_eq!(
            Date::precise(1752, 1, 1, Some(Calendar::Julian)).unwrap().to_string(),
            "1 Jan 1752"
        );
    }

    #[test]
    fn test_occurrence_cases() {
        struct TestCase {
            date: Date,
            want: &'static str,
        }

        let cases = [
            TestCase { date: precise(1845, 6, 15), want: "on 15 Jun, 1845" },
            TestCase { date: year(1845), want: "in 1845" },
            TestCase { date: month_year(1845, 6), want: "in Jun 1845" },
            TestCase { date: quarter(1845, 1), want: "in the Jan-Mar quarter of 1845" },
            TestCase { date: before(1950), want: "before 1950" },
            TestCase { date: after(1950), want: "after 1950" },
            TestCase { date: about(1950), want: "about 1950" },
            TestCase { date: estimated(1950), want: "estimated 1950" },
            TestCase { date: before(950), want: "before 0950" },
            TestCase { date: year_range(1880, 1889), want: "in the 1880s" },
            TestCase { date: year_range(1920, 1923), want: "between 1920 and 1923" },
            TestCase { date: unknown("not a date"), want: "on an unknown date" },
        ];

        for case in &cases {
            assert_eq!(case.date.occurrence(), case.want, "{:?}", case.date);
        }
    }

    #[test]
    fn test_date_in_year() {
        let date = precise(1845, 6, 15);
        assert_eq!(date.date_in_year(false).as_deref(), Some("15 Jun"));
        assert_eq!(date.date_in_year(true).as_deref(), Some("15 June"));
        assert_eq!(year(1845).date_in_year(false), None);
    }

    #[test]
    fn test_calendar_accessors() {
        let date = precise(1845, 6, 15);
        assert_eq!(date.calendar(), None);
        assert_eq!(date.effective_calendar(), Calendar::Gregorian);

        let julian = date.with_calendar(Some(Calendar::Julian));
        assert_eq!(julian.calendar(), Some(Calendar::Julian));
        assert_eq!(julian.effective_calendar(), Calendar::Julian);
        assert_eq!(julian.as_precise(), precise(1845, 6, 15).as_precise());

        let unknown = unknown("x").with_calendar(Some(Calendar::Julian25Mar));
        assert_eq!(unknown.calendar(), Some(Calendar::Julian25Mar));
    }

    #[test]
    fn test_representative_year() {
        struct TestCase {
            date: Date,
            want: Option<i32>,
        }

        let cases = [
            TestCase { date: precise(1845, 6, 15), want: Some(1845) },
            TestCase { date: year(1845), want: Some(1845) },
            TestCase { date: month_year(1845, 6), want: Some(1845) },
            TestCase { date: quarter(1845, 2), want: Some(1845) },
            TestCase { date: about(1845), want: Some(1845) },
            TestCase { date: estimated(1845), want: Some(1845) },
            TestCase { date: before(1845), want: None },
            TestCase { date: after(1845), want: None },
            TestCase { date: year_range(1840, 1850), want: None },
            TestCase { date: unknown("x"), want: None },
        ];

        for case in &cases {
            assert_eq!(case.date.representative_year(), case.want, "{:?}", case.date);
            assert_eq!(case.date.as_year(), case.want.map(year), "{:?}", case.date);
        }
    }

    #[test]
    fn test_as_year_keeps_calendar() {
        let date = Date::precise(1700, 2, 29, Some(Calendar::Julian)).unwrap();
        assert_eq!(date.as_year(), Some(Date::year(1700, Some(Calendar::Julian))));
    }

    #[test]
    fn test_as_precise_only_for_precise() {
        assert!(precise(1845, 6, 15).as_precise().is_some());
        assert!(year(1845).as_precise().is_none());
        assert!(month_year(1845, 6).as_precise().is_none());
        assert!(unknown("x").as_precise().is_none());
    }

    #[test]
    fn test_julian_day_range_cases() {
        struct TestCase {
            date:     Date,
            earliest: (i32, u8, u8),
            latest:   (i32, u8, u8),
        }

        let cases = [
            TestCase { date: precise(1845, 6, 15), earliest: (1845, 6, 15), latest: (1845, 6, 15) },
            TestCase { date: year(1845), earliest: (1845, 1, 1), latest: (1845, 12, 31) },
            TestCase { date: about(1845), earliest: (1845, 1, 1), latest: (1845, 12, 31) },
            TestCase { date: estimated(1845), earliest: (1845, 1, 1), latest: (1845, 12, 31) },
            TestCase { date: month_year(1845, 2), earliest: (1845, 2, 1), latest: (1845, 2, 28) },
            TestCase { date: month_year(1844, 2), earliest: (1844, 2, 1), latest: (1844, 2, 29) },
            TestCase { date: month_year(1845, 12), earliest: (1845, 12, 1), latest: (1845, 12, 31) },
            TestCase { date: quarter(1845, 1), earliest: (1845, 1, 1), latest: (1845, 3, 31) },
            TestCase { date: quarter(1845, 2), earliest: (1845, 4, 1), latest: (1845, 6, 30) },
            TestCase { date: quarter(1845, 3), earliest: (1845, 7, 1), latest: (1845, 9, 30) },
            TestCase { date: quarter(1845, 4), earliest: (1845, 10, 1), latest: (1845, 12, 31) },
            TestCase { date: year_range(1840, 1850), earliest: (1840, 1, 1), latest: (1850, 12, 31) },
            TestCase { date: after(1845), earliest: (1845, 12, 31), latest: (1845, 12, 31) },
            TestCase { date: before(1845), earliest: (1844, 12, 31), latest: (1844, 12, 31) },
        ];

        let cal = Calendar::Gregorian;
        for case in &cases {
            let (ey, em, ed) = case.earliest;
            let (ly, lm, ld) = case.latest;
            let range = case.date.julian_day_range().expect("known dates have a range");
            assert_eq!(range.earliest(), cal.julian_day(ey, em, ed), "earliest of {:?}", case.date);
            assert_eq!(range.latest(), cal.julian_day(ly, lm, ld), "latest of {:?}", case.date);
            assert_eq!(case.date.earliest_julian_day(), Some(range.earliest()));
            assert_eq!(case.date.latest_julian_day(), Some(range.latest()));
        }
    }

    #[test]
    fn test_julian_day_range_uses_calendar() {
        let gregorian = year(1700).julian_day_range().unwrap();
        let julian = Date::year(1700, Some(Calendar::Julian)).julian_day_range().unwrap();
        assert_eq!(gregorian.len_days(), 365);
        assert_eq!(julian.len_days(), 366);
    }

    #[test]
    fn test_julian_day_range_inverted_year_range() {
        let inverted = Date::YearRange {
            lower:    1850,
            upper:    1840,
            calendar: None,
        };
        assert_eq!(inverted.julian_day_range(), year_range(1840, 1850).julian_day_range());
    }

    #[test]
    fn test_unknown_has_no_range() {
        let date = unknown("sometime");
        assert!(date.is_unknown());
        assert_eq!(date.julian_day_range(), None);
        assert_eq!(date.earliest_julian_day(), None);
        assert_eq!(date.latest_julian_day(), None);
    }

    #[test]
    fn test_earliest_never_after_latest() {
        let dates = [
            precise(1, 1, 1),
            year(-44),
            month_year(1752, 9),
            quarter(2000, 1),
            before(1),
            after(0),
            about(1845),
            estimated(1845),
            year_range(1800, 1899),
        ];
        for date in &dates {
            let range = date.julian_day_range().unwrap();
            assert!(range.earliest() <= range.latest(), "{date:?}");
        }
    }

    #[test]
    fn test_serde() {
        let date = Date::precise(1752, 1, 1, Some(Calendar::Julian25Mar)).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#"{"kind":"precise","year":1752,"month":1,"day":1,"calendar":"julian_25_mar"}"#);
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);

        let json = serde_json::to_string(&year_range(1880, 1889)).unwrap();
        assert_eq!(json, r#"{"kind":"year_range","lower":1880,"upper":1889}"#);

        let parsed: Date = serde_json::from_str(r#"{"kind":"unknown","text":"not a date"}"#).unwrap();
        assert_eq!(parsed, unknown("not a date"));

        let bad: Result<Date, _> = serde_json::from_str(r#"{"kind":"year_quarter","year":1845,"quarter":5}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_serde_validates_fields() {
        struct TestCase {
            json: &'static str,
            want: &'static str,
        }

        let cases = [
            TestCase {
                json: r#"{"kind":"precise","year":1905,"month":2,"day":31}"#,
                want: "Invalid day 31 for month 1905-02",
            },
            TestCase {
                json: r#"{"kind":"precise","year":1700,"month":2,"day":29,"calendar":"gregorian"}"#,
                want: "Invalid day 29 for month 1700-02",
            },
            TestCase {
                json: r#"{"kind":"month_year","year":1845,"month":13}"#,
                want: "Invalid month: 13 (must be 1-12)",
            },
            TestCase {
                json: r#"{"kind":"year_range","lower":1850,"upper":1840}"#,
                want: "Invalid year range: 1850 is after 1840",
            },
        ];

        for case in &cases {
            let err = serde_json::from_str::<Date>(case.json).unwrap_err();
            assert!(err.to_string().contains(case.want), "{}: {err}", case.json);
        }

        let json = r#"{"kind":"precise","year":1700,"month":2,"day":29,"calendar":"julian"}"#;
        let leap: Date = serde_json::from_str(json).unwrap();
        assert_eq!(leap, Date::precise(1700, 2, 29, Some(Calendar::Julian)).unwrap());

        let illegible = unknown("illegible").with_calendar(Some(Calendar::Julian25Mar));
        let json = serde_json::to_string(&illegible).unwrap();
        assert_eq!(serde_json::from_str::<Date>(&json).unwrap(), illegible);
    }
}
