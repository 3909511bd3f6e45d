use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Date;

/// Time elapsed between two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Interval {
    /// Calendar-correct difference between two precise dates
    Precise { years: u32, months: u32, days: u32 },
    /// Whole years between two dates known to the year
    Years { years: u32 },
    /// Approximate number of whole years
    AboutYears { years: u32 },
    /// One of the dates is unknown or the two can't be related
    Unknown,
}

/// Computes the interval between two dates, in either order.
///
/// Precise dates give a years/months/days difference, borrowing the length
/// of the earlier date's month when the day of month has to wrap. Dates
/// with a representative year give the whole years between them. Anything
/// else is [`Interval::Unknown`].
pub fn interval_between(a: &Date, b: &Date) -> Interval {
    if a.is_unknown() || b.is_unknown() {
        return Interval::Unknown;
    }

    if let (Some(pa), Some(pb)) = (a.as_precise(), b.as_precise()) {
        let ((ya, ma, da), (yb, mb, db), cal) = if pa <= pb {
            (pa, pb, a.effective_calendar())
        } else {
            (pb, pa, b.effective_calendar())
        };

        let mut years = yb.abs_diff(ya);
        let mut months = i32::from(mb.get()) - i32::from(ma.get());
        let mut days = i32::from(db.get()) - i32::from(da.get());

        if days < 0 {
            days += i32::from(cal.days_in_month(ya, ma));
            months -= 1;
        }
        if months < 0 {
            months += 12;
            years -= 1;
        }

        return Interval::Precise {
            years,
            months: months.unsigned_abs(),
            days: days.unsigned_abs(),
        };
    }

    match (a.representative_year(), b.representative_year()) {
        (Some(ya), Some(yb)) => Interval::Years {
            years: ya.abs_diff(yb),
        },
        _ => Interval::Unknown,
    }
}

impl Interval {
    /// Full description, e.g. "2 years, 3 months and 1 day".
    pub fn precise(&self) -> String {
        match *self {
            Self::Precise { years, months, days } => {
                let parts: Vec<String> = [(years, "year"), (months, "month"), (days, "day")]
                    .into_iter()
                    .filter(|&(n, _)| n > 0)
                    .map(|(n, unit)| pluralise(n, unit))
                    .collect();

                match parts.as_slice() {
                    [] => pluralise(0, "day"),
                    [only] => only.clone(),
                    [init @ .., last] => format!("{} and {last}", init.join(", ")),
                }
            },
            Self::Years { .. } | Self::AboutYears { .. } | Self::Unknown => self.rough(),
        }
    }

    /// Description in the coarsest unit, e.g. "nearly 3 years".
    pub fn rough(&self) -> String {
        match *self {
            Self::Precise { years, months, days } => {
                if years > 0 {
                    if months >= 11 {
                        format!("nearly {}", pluralise(years + 1, "year"))
                    } else {
                        pluralise(years, "year")
                    }
                } else if months > 0 {
                    if days >= 28 {
                        format!("nearly {}", pluralise(months + 1, "month"))
                    } else {
                        pluralise(months, "month")
                    }
                } else {
                    pluralise(days, "day")
                }
            },
            Self::Years { years } => pluralise(years, "year"),
            Self::AboutYears { years } => format!("about {}", pluralise(years, "year")),
            Self::Unknown => "unknown".to_owned(),
        }
    }

    /// Whole years, for every interval except an unknown one
    pub const fn years(&self) -> Option<u32> {
        match *self {
            Self::Precise { years, .. } | Self::Years { years } | Self::AboutYears { years } => Some(years),
            Self::Unknown => None,
        }
    }

    /// Whole months of a precise interval
    pub const fn total_months(&self) -> Option<u32> {
        match *self {
            Self::Precise { years, months, .. } => Some(years * 12 + months),
            _ => None,
        }
    }

    /// Days of a precise interval, counting 365 per year and 30 per month
    pub const fn approx_days(&self) -> Option<u32> {
        match *self {
            Self::Precise { years, months, days } => Some(years * 365 + months * 30 + days),
            _ => None,
        }
    }

    pub const fn ymd(&self) -> Option<(u32, u32, u32)> {
        match *self {
            Self::Precise { years, months, days } => Some((years, months, days)),
            _ => None,
        }
    }

    /// Collapses the interval to whole years, dropping months and days.
    pub const fn to_years(&self) -> Option<Self> {
        match *self {
            Self::Precise { years, .. } | Self::Years { years } => Some(Self::Years { years }),
            Self::AboutYears { .. } => Some(*self),
            Self::Unknown => None,
        }
    }

    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.precise())
    }
}

fn pluralise(n: u32, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}
