//! Shorthand builders for calendar-less dates used throughout the tests.

use crate::Date;

pub fn precise(year: i32, month: u8, day: u8) -> Date {
    Date::precise(year, month, day, None).expect("invalid precise date in test")
}

pub const fn year(year: i32) -> Date {
    Date::year(year, None)
}

pub fn month_year(year: i32, month: u8) -> Date {
    Date::month_year(year, month, None).expect("invalid month in test")
}

pub fn quarter(year: i32, quarter: u8) -> Date {
    Date::year_quarter(year, quarter, None).expect("invalid quarter in test")
}

pub const fn before(year: i32) -> Date {
    Date::before_year(year, None)
}

pub const fn after(year: i32) -> Date {
    Date::after_year(year, None)
}

pub const fn about(year: i32) -> Date {
    Date::about_year(year, None)
}

pub const fn estimated(year: i32) -> Date {
    Date::estimated_year(year, None)
}

pub fn year_range(lower: i32, upper: i32) -> Date {
    Date::year_range(lower, upper, None).expect("invalid year range in test")
}

pub fn unknown(text: &str) -> Date {
    Date::unknown(text)
}
