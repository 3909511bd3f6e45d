//! Heuristic parsing of free-form English dates as they appear in
//! genealogical records and indexes.

use std::{convert::Infallible, str::FromStr};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::{Calendar, Date, Month, Quarter, ReckoningLocation, SHORT_MONTH_NAMES};

macro_rules! regex {
    ($pat:expr) => {{
        #[allow(clippy::expect_used)]
        static RE: Lazy<Regex> = Lazy::new(|| Regex::new($pat).expect("invalid built-in date pattern"));
        &*RE
    }};
}

/// Alternation matching an English month name or abbreviation, including
/// the old "Janry" and "Febry" spellings. Expands to a literal so it can be
/// spliced into patterns with `concat!`.
macro_rules! month_name {
    () => {
        concat!(
            r"(?:jan(?:uary|ry)?|feb(?:ruary|ry)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?",
            r"|sept?(?:ember)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?"
        )
    };
}

type Rule = fn(&Parser, &str) -> Option<Date>;

/// Converts free text into a [`Date`] of the highest precision the text
/// supports.
///
/// ```
/// use gendate::{Calendar, Date, Parser, ReckoningLocation};
///
/// let parser = Parser::new().with_reckoning_location(ReckoningLocation::EnglandAndWales);
/// let date = parser.parse("2 Apr 1751");
/// assert_eq!(date, Date::precise(1751, 4, 2, Some(Calendar::Julian25Mar)).unwrap());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Parser {
    /// Decides the calendar stamped on parsed dates. With
    /// [`ReckoningLocation::None`] parsed dates carry no calendar.
    pub reckoning_location: ReckoningLocation,

    /// Read a month and year where the month starts or ends a quarter as the
    /// General Register Office quarter containing it, so "Jul 1850" becomes
    /// the third quarter of 1850.
    pub assume_gro_quarter: bool,
}

impl Parser {
    pub const fn new() -> Self {
        Self {
            reckoning_location: ReckoningLocation::None,
            assume_gro_quarter: false,
        }
    }

    #[must_use]
    pub const fn with_reckoning_location(mut self, location: ReckoningLocation) -> Self {
        self.reckoning_location = location;
        self
    }

    #[must_use]
    pub const fn with_assume_gro_quarter(mut self, assume: bool) -> Self {
        self.assume_gro_quarter = assume;
        self
    }

    /// Parses `s`, falling back to [`Date::Unknown`] holding the original
    /// text when no date can be found.
    pub fn parse(&self, s: &str) -> Date {
        let trimmed = s.trim();

        for (name, rule) in self.rules() {
            if let Some(date) = rule(self, trimmed) {
                log::trace!("parsed {s:?} as {name} date {date}");
                return date;
            }
        }

        log::debug!("no date found in {s:?}");
        Date::unknown(s)
    }

    fn rules(&self) -> [(&'static str, Rule); 10] {
        let month_year: (&'static str, Rule) = ("month-year", Self::parse_month_year);
        let quarter: (&'static str, Rule) = ("quarter", Self::parse_quarter);
        let (first, second) = if self.assume_gro_quarter {
            (quarter, month_year)
        } else {
            (month_year, quarter)
        };

        [
            ("precise", Self::parse_precise),
            ("year", Self::parse_year),
            ("before", Self::parse_before),
            ("after", Self::parse_after),
            ("about", Self::parse_about),
            ("estimated", Self::parse_estimated),
            first,
            second,
            ("quarter label", Self::parse_quarter_label),
            ("year range", Self::parse_year_range),
        ]
    }

    /// Calendar in force at the reckoning location in `year`
    fn calendar(&self, year: i32) -> Option<Calendar> {
        match self.reckoning_location {
            ReckoningLocation::None => None,
            location => Some(location.calendar(year)),
        }
    }

    fn parse_precise(&self, s: &str) -> Option<Date> {
        let patterns = [
            regex!(concat!(r"(?i)^(?P<day>\d{1,2})\s+(?P<month>", month_name!(), r"),?\s+(?P<year>\d{4})$")),
            regex!(concat!(r"(?i)^(?P<month>", month_name!(), r")\s+(?P<day>\d{1,2}),?\s+(?P<year>\d{4})$")),
            regex!(r"^(?P<year>\d{4})-(?P<month>\d{2})-(?P<day>\d{2})$"),
        ];

        let caps = patterns.iter().find_map(|re| re.captures(s))?;
        let year = number::<i32>(&caps, "year")?;
        let month = month_number(caps.name("month")?.as_str())?;
        let day = number::<u8>(&caps, "day")?;

        // An impossible day such as 30 Feb leaves the text unrecognised
        Date::precise(year, month, day, self.calendar(year)).ok()
    }

    fn parse_year(&self, s: &str) -> Option<Date> {
        let caps = regex!(r"^(?P<year>\d{4})$").captures(s)?;
        let year = number(&caps, "year")?;
        Some(Date::year(year, self.calendar(year)))
    }

    fn parse_before(&self, s: &str) -> Option<Date> {
        let caps = regex!(r"(?i)^bef(?:ore|\.)?\s+(?P<year>\d{4})$").captures(s)?;
        let year = number(&caps, "year")?;
        Some(Date::before_year(year, self.calendar(year - 1)))
    }

    fn parse_after(&self, s: &str) -> Option<Date> {
        let caps = regex!(r"(?i)^aft(?:er|\.)?\s+(?P<year>\d{4})$").captures(s)?;
        let year = number(&caps, "year")?;
        Some(Date::after_year(year, self.calendar(year + 1)))
    }

    fn parse_about(&self, s: &str) -> Option<Date> {
        let caps = regex!(r"(?i)^(?:abt\.?|about|circa|ca?\.)\s*(?P<year>\d{4})$").captures(s)?;
        let year = number(&caps, "year")?;
        Some(Date::about_year(year, self.calendar(year)))
    }

    fn parse_estimated(&self, s: &str) -> Option<Date> {
        let caps = regex!(r"(?i)^(?:est\.?|estimated)\s*(?P<year>\d{4})$").captures(s)?;
        let year = number(&caps, "year")?;
        Some(Date::estimated_year(year, self.calendar(year)))
    }

    fn parse_month_year(&self, s: &str) -> Option<Date> {
        let patterns = [
            regex!(r"^(?P<year>\d{4})-(?P<month>0?[1-9]|1[0-2])$"),
            regex!(r"^(?P<month>0?[1-9]|1[0-2])-(?P<year>\d{4})$"),
            regex!(concat!(r"(?i)^(?P<month>", month_name!(), r")\s+(?P<year>\d{4})$")),
        ];

        let caps = patterns.iter().find_map(|re| re.captures(s))?;
        let year = number(&caps, "year")?;
        let month = month_number(caps.name("month")?.as_str())?;
        Date::month_year(year, month, self.calendar(year)).ok()
    }

    /// "Q1 1850", and with `assume_gro_quarter` a month opening or closing
    /// a quarter, e.g. "Jan 1850" or "Mar 1850".
    fn parse_quarter(&self, s: &str) -> Option<Date> {
        if let Some(caps) = regex!(r"(?i)^q(?P<quarter>[1-4])\s*(?P<year>\d{4})$").captures(s) {
            let year = number(&caps, "year")?;
            return Date::year_quarter(year, number(&caps, "quarter")?, self.calendar(year)).ok();
        }

        if !self.assume_gro_quarter {
            return None;
        }

        let caps = regex!(concat!(r"(?i)^(?P<month>", month_name!(), r")\s+(?P<year>\d{4})$")).captures(s)?;
        let year = number(&caps, "year")?;
        let month = Month::new(month_number(caps.name("month")?.as_str())?).ok()?;
        let quarter = Quarter::containing(month);
        if month != quarter.first_month() && month != quarter.last_month() {
            return None;
        }
        Date::year_quarter(year, quarter.get(), self.calendar(year)).ok()
    }

    /// Quarter forms found in registration indexes: "1850 Q1",
    /// "Mar Qtr 1850" and "Jan-Mar 1850".
    fn parse_quarter_label(&self, s: &str) -> Option<Date> {
        if let Some(caps) = regex!(r"(?i)^(?P<year>\d{4})\s*q(?P<quarter>[1-4])$").captures(s) {
            let year = number(&caps, "year")?;
            return Date::year_quarter(year, number(&caps, "quarter")?, self.calendar(year)).ok();
        }

        if let Some(caps) =
            regex!(concat!(r"(?i)^(?P<month>", month_name!(), r")\s+q(?:uarter|tr)\.?\s+(?P<year>\d{4})$"))
                .captures(s)
        {
            let year = number(&caps, "year")?;
            let month = Month::new(month_number(caps.name("month")?.as_str())?).ok()?;
            let quarter = Quarter::containing(month);
            return Date::year_quarter(year, quarter.get(), self.calendar(year)).ok();
        }

        let caps = regex!(concat!(
            r"(?i)^(?P<first>",
            month_name!(),
            r")\s*-\s*(?P<last>",
            month_name!(),
            r")\s+(?P<year>\d{4})$"
        ))
        .captures(s)?;
        let year = number(&caps, "year")?;
        let first = Month::new(month_number(caps.name("first")?.as_str())?).ok()?;
        let last = Month::new(month_number(caps.name("last")?.as_str())?).ok()?;
        let quarter = Quarter::containing(first);
        if first != quarter.first_month() || last != quarter.last_month() {
            return None;
        }
        Date::year_quarter(year, quarter.get(), self.calendar(year)).ok()
    }

    /// "1920-1923", "between 1920 and 1923" or a decade such as "1880s".
    /// Ranges running backwards are not recognised.
    fn parse_year_range(&self, s: &str) -> Option<Date> {
        if let Some(caps) = regex!(r"^(?P<decade>\d{3}0)s$").captures(s) {
            let lower: i32 = number(&caps, "decade")?;
            return Date::year_range(lower, lower + 9, self.calendar(lower)).ok();
        }

        let patterns = [
            regex!(r"^(?P<lower>\d{4})\s*-\s*(?P<upper>\d{4})$"),
            regex!(r"(?i)^(?:between|bet\.?)\s+(?P<lower>\d{4})\s+(?:and|&)\s+(?P<upper>\d{4})$"),
        ];
        let caps = patterns.iter().find_map(|re| re.captures(s))?;
        let lower = number(&caps, "lower")?;
        let upper = number(&caps, "upper")?;
        Date::year_range(lower, upper, self.calendar(lower)).ok()
    }
}

/// Parses `s` with the default [`Parser`]: no calendar is stamped and GRO
/// quarters are not assumed.
pub fn parse(s: &str) -> Date {
    Parser::new().parse(s)
}

impl FromStr for Date {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse(s))
    }
}

fn number<T: FromStr>(caps: &Captures<'_>, name: &str) -> Option<T> {
    caps.name(name)?.as_str().parse().ok()
}

/// Month number from digits or from an English name, judged on its first
/// three letters.
fn month_number(s: &str) -> Option<u8> {
    if let Ok(n) = s.parse() {
        return Some(n);
    }
    let prefix = s.get(..3)?;
    SHORT_MONTH_NAMES
        .iter()
        .position(|name| name.eq_ignore_ascii_case(prefix))
        .and_then(|i| u8::try_from(i).ok())
}
