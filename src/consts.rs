/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Months before this one are shifted into the previous year by the weekday congruence
pub const MARCH: u8 = 3;

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

/// English month names, indexed by `month - 1`
pub const MONTH_NAMES: [&str; 12] = [
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

/// English weekday names in congruence order: index 0 is Saturday
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Saturday",
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
];

/// Days in a common year
pub const DAYS_IN_YEAR: u64 = 365;
/// Days in a leap year
pub const DAYS_IN_LEAP_YEAR: u64 = 366;
/// Days in a week
pub const DAYS_IN_WEEK: u64 = 7;
/// Months in a year
pub const MONTHS_IN_YEAR: i64 = 12;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u32 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
