use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_LEAP_YEAR, DAYS_IN_MONTH, DAYS_IN_YEAR, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, MONTH_NAMES,
};
use crate::InvalidDate;
use std::fmt;
use std::num::NonZeroU8;

/// A proleptic Gregorian year, guaranteed to be `>= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(u32);

impl Year {
    /// Creates a new Year, rejecting negative values
    ///
    /// # Errors
    /// Returns `InvalidDate::Year` if the value is below 0.
    pub fn new(value: i32) -> Result<Self, InvalidDate> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| InvalidDate::Year(value))
    }

    /// Returns the year value as u32
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.0)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's within `1..=MAX_MONTH`
    ///
    /// # Errors
    /// Returns `InvalidDate::Month` if the value is 0, negative or > `MAX_MONTH`.
    pub fn new(value: i32) -> Result<Self, InvalidDate> {
        u8::try_from(value)
            .ok()
            .filter(|m| *m <= MAX_MONTH)
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(InvalidDate::Month(value))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// English name of the month
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[(self.0.get() - 1) as usize]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `InvalidDate::Day` if the value is below 1 or past the end of the month.
    pub fn new(value: i32, year: Year, month: Month) -> Result<Self, InvalidDate> {
        let invalid = InvalidDate::Day {
            day: value,
            month: month.get(),
            year: year.get(),
        };

        let day = u8::try_from(value).map_err(|_| invalid)?;
        let non_zero = NonZeroU8::new(day).ok_or(invalid)?;
        if day > month_length(year.get(), month.get()) {
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

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: u32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`, or `None` if `month` is not 1-12.
pub fn days_in_month(year: u32, month: u8) -> Option<u8> {
    (1..=MAX_MONTH)
        .contains(&month)
        .then(|| month_length(year, month))
}

/// Unchecked month length; callers pass a month already known to be 1-12.
pub(crate) const fn month_length(year: u32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Days in all years from 0 up to, but excluding, `year`.
///
/// Closed form of summing 365 or 366 per year. Year 0 is itself a leap
/// year, hence the `+ 1` once any year has elapsed.
pub const fn days_before_year(year: u32) -> u64 {
    if year == 0 {
        return 0;
    }
    let elapsed = year as u64;
    let last = elapsed - 1;
    let leap_days = last / LEAP_YEAR_CYCLE as u64 - last / CENTURY_CYCLE as u64
        + last / GREGORIAN_CYCLE as u64
        + 1;
    elapsed * DAYS_IN_YEAR + leap_days
}

/// Days in the months of `year` strictly before `month`.
pub fn days_before_month(year: u32, month: u8) -> u64 {
    (1..month)
        .map(|m| u64::from(month_length(year, m)))
        .sum()
}

/// Length of `year` in days.
pub const fn days_in_year(year: u32) -> u64 {
    if is_leap_year(year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_YEAR
    }
}
