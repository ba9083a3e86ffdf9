use crate::prelude::*;

/// Rejection of a `(day, month, year)` triple that is not a calendar date.
///
/// Each variant names the first component that failed validation, checked in
/// year, month, day order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum InvalidDate {
    /// The year is negative.
    #[error("Invalid date: year {0} is before year 0")]
    Year(i32),

    /// The month is outside `1..=12`.
    #[error("Invalid date: month {0} (must be 1-12)")]
    Month(i32),

    /// The day is below 1 or past the end of its month.
    #[error("Invalid date: day {day} does not exist in {year}-{month:02}")]
    Day { day: i32, month: u8, year: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "{_0}")]
    InvalidDate(InvalidDate),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl From<InvalidDate> for ParseError {
    fn from(err: InvalidDate) -> Self {
        Self::InvalidDate(err)
    }
}
