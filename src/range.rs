use std::{cmp::Ordering, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{RANGE_SEPARATOR, prelude::*};

/// An inclusive span of Julian Day Numbers, `earliest..=latest`.
///
/// This is the calendar-independent footprint of a [`Date`](crate::Date):
/// a precise date covers a single day, a year covers 365 or 366.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{earliest}/{latest}")]
pub struct JulianDayRange {
    earliest: i64,
    latest:   i64,
}

/// Error type for Julian day range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Earliest day is after latest day.
    #[error("Invalid Julian day range: earliest ({earliest}) is after latest ({latest})")]
    InvalidRange { earliest: i64, latest: i64 },

    /// Error parsing a day number.
    #[error(transparent)]
    ParseInt(#[from] ParseIntError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl JulianDayRange {
    /// Creates a new range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if earliest > latest.
    pub const fn new(earliest: i64, latest: i64) -> Result<Self, RangeError> {
        if earliest > latest {
            return Err(RangeError::InvalidRange { earliest, latest });
        }
        Ok(Self { earliest, latest })
    }

    /// A range covering a single day.
    pub const fn day(julian_day: i64) -> Self {
        Self {
            earliest: julian_day,
            latest:   julian_day,
        }
    }

    /// Builds the range between two days in whichever order they are given.
    pub(crate) fn spanning(a: i64, b: i64) -> Self {
        Self {
            earliest: a.min(b),
            latest:   a.max(b),
        }
    }

    pub const fn earliest(&self) -> i64 {
        self.earliest
    }

    pub const fn latest(&self) -> i64 {
        self.latest
    }

    /// Number of days covered, counting both ends.
    pub const fn len_days(&self) -> i64 {
        self.latest - self.earliest + 1
    }

    pub const fn contains_day(&self, julian_day: i64) -> bool {
        self.earliest <= julian_day && julian_day <= self.latest
    }

    /// Checks if every day of `other` falls inside this range
    pub const fn contains(&self, other: &Self) -> bool {
        self.earliest <= other.earliest && other.latest <= self.latest
    }

    /// Checks if the two ranges have at least one day in common
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.earliest <= other.latest && other.earliest <= self.latest
    }

    /// Checks if this range is completely contained within another range
    pub const fn is_within(&self, other: &Self) -> bool {
        other.contains(self)
    }
}

impl FromStr for JulianDayRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (earliest, latest) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
                })?;
                Self::new(earliest.trim().parse()?, latest.trim().parse()?)
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl PartialOrd for JulianDayRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for JulianDayRange {
    /// Earliest day first. Of two ranges starting on the same day the longer
    /// one comes first, so an enclosing range precedes the ranges nested
    /// inside it.
    fn cmp(&self, other: &Self) -> Ordering {
        self.earliest
            .cmp(&other.earliest)
            .then_with(|| other.latest.cmp(&self.latest))
    }
}

impl Serialize for JulianDayRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for JulianDayRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
