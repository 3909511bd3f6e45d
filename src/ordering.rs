use std::cmp::Ordering;

use crate::Date;

/// Reports whether `a` sorts strictly before `b`.
///
/// A missing date sorts neither before nor after anything, so the result is
/// `false` whenever either side is `None`.
pub fn sorts_before(a: Option<&Date>, b: Option<&Date>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.sorts_before(b),
        _ => false,
    }
}

/// Sorts dates into chronological order. Dates that compare equivalent, such
/// as `abt. 1845` and `est. 1845`, keep their relative order.
pub fn sort_chronologically(dates: &mut [Date]) {
    dates.sort_by(Date::chronological_cmp);
}

impl Date {
    pub fn sorts_before(&self, other: &Self) -> bool {
        self.chronological_cmp(other) == Ordering::Less
    }

    /// Compares two dates chronologically.
    ///
    /// Dates are placed by the span of days they could fall on: the earlier
    /// first day wins and, when both start on the same day, the longer span
    /// comes first. Dates with identical spans are ordered firm, then
    /// approximate, then after, then before. Unknown dates come after every
    /// known date and among themselves are ordered by their text.
    ///
    /// `Equal` means chronologically equivalent, not equal values.
    pub fn chronological_cmp(&self, other: &Self) -> Ordering {
        match (self.julian_day_range(), other.julian_day_range()) {
            (Some(a), Some(b)) => a
                .cmp(&b)
                .then_with(|| self.qualifier_rank().cmp(&other.qualifier_rank())),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.unknown_text().cmp(other.unknown_text()),
        }
    }

    const fn qualifier_rank(&self) -> u8 {
        match self {
            Self::Precise { .. }
            | Self::Year { .. }
            | Self::MonthYear { .. }
            | Self::YearQuarter { .. }
            | Self::YearRange { .. } => 0,
            Self::AboutYear { .. } | Self::EstimatedYear { .. } => 1,
            Self::AfterYear { .. } => 2,
            Self::BeforeYear { .. } => 3,
            Self::Unknown { .. } => 4,
        }
    }

    fn unknown_text(&self) -> &str {
        match self {
            Self::Unknown { text, .. } => text,
            _ => "",
        }
    }
}
