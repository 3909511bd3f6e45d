/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Maximum valid quarter (Oct-Dec)
pub const MAX_QUARTER: u8 = 4;

/// Months in each quarter
pub(crate) const MONTHS_PER_QUARTER: u8 = 3;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March
pub const MARCH: u8 = 3;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Last day of December, used for upper bounds
pub const LAST_DAY_OF_DECEMBER: u8 = 31;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Abbreviated month names (index 0 is unused)
pub const SHORT_MONTH_NAMES: [&str; 13] = [
    "", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Full month names (index 0 is unused)
pub const LONG_MONTH_NAMES: [&str; 13] = [
    "",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Day of March on which the year begins under the 25 March reckoning
pub const LADY_DAY: u8 = 25;

/// First year of the Gregorian calendar in Great Britain and Ireland.
/// 2 Sep 1752 was followed by 14 Sep 1752.
pub const BRITISH_GREGORIAN_ADOPTION: i32 = 1752;

/// First year that Scotland began on 1 January
pub const SCOTTISH_NEW_YEAR_ADOPTION: i32 = 1600;

/// Year range separator used by the compact display form (e.g. 1920-1923)
pub const YEAR_RANGE_SEPARATOR: char = '-';
/// Julian day range separator (earliest/latest)
pub const RANGE_SEPARATOR: char = '/';
