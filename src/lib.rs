mod consts;
mod difference;
mod error;
mod prelude;
mod types;
mod weekday;

pub use consts::*;
pub use difference::DifferenceReport;
pub use error::{InvalidDate, ParseError};
pub use types::{Day, Month, Year, days_in_month, days_in_year, is_leap_year};
pub use weekday::Weekday;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use types::{days_before_month, days_before_year};

/// A validated proleptic Gregorian calendar date.
///
/// Every value represents a real date: construction and [`update`](Self::update)
/// reject triples that are not, and never store a partial result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

/// Looks up the English name of a month number (1 = January).
pub fn month_name(month: u8) -> Option<&'static str> {
    usize::from(month)
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index))
        .copied()
}

impl CalendarDate {
    /// Creates a date from its day, month and year.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the year is negative, the month is outside
    /// 1-12, or the day does not exist in that month of that year.
    pub fn new(day: i32, month: i32, year: i32) -> Result<Self, InvalidDate> {
        Self::validate(day, month, year)
            .inspect_err(|err| debug!(day, month, year, %err, "rejected calendar date"))
    }

    /// Replaces all three fields with a new valid date.
    ///
    /// # Errors
    /// Returns `InvalidDate` under the same rules as [`new`](Self::new); the
    /// current value is left unchanged.
    pub fn update(&mut self, day: i32, month: i32, year: i32) -> Result<(), InvalidDate> {
        let candidate = Self::new(day, month, year)?;
        debug!(from = %self, to = %candidate, "updated calendar date");
        *self = candidate;
        Ok(())
    }

    fn validate(day: i32, month: i32, year: i32) -> Result<Self, InvalidDate> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Returns the day of the month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the month number (1 = January)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the year
    pub const fn year(&self) -> u32 {
        self.year.get()
    }

    /// English name of this date's month
    pub const fn month_name(&self) -> &'static str {
        self.month.name()
    }

    /// Whether this date falls in a leap year
    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Day of the week this date falls on
    pub fn day_of_week(&self) -> Weekday {
        Weekday::compute(self.day(), self.month(), self.year())
    }

    /// Absolute day number: days elapsed since a fixed epoch before year 0.
    ///
    /// Strictly increasing with chronological order, so the difference of two
    /// day numbers is the number of days between the dates.
    pub fn day_number(&self) -> u64 {
        days_before_year(self.year())
            + days_before_month(self.year(), self.month())
            + u64::from(self.day())
    }

    /// Formats as `YYYY-MM-DD`
    pub fn to_iso_string(&self) -> String {
        format!(
            "{:04}{sep}{:02}{sep}{:02}",
            self.year(),
            self.month(),
            self.day(),
            sep = DATE_SEPARATOR
        )
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, {}", self.month_name(), self.day, self.year)
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.year
            .cmp(&other.year)
            .then_with(|| self.month.cmp(&other.month))
            .then_with(|| self.day.cmp(&other.day))
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Accepts `day month year` separated by whitespace, or ISO `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        if trimmed.contains(char::is_whitespace) {
            let parts: Vec<&str> = trimmed.split_whitespace().collect();
            Self::parse_day_month_year(&parts)
        } else if trimmed.contains(DATE_SEPARATOR) {
            let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
            Self::parse_iso(&parts)
        } else {
            Err(ParseError::InvalidFormat(format!(
                "expected `day month year` or `YYYY-MM-DD`, got `{trimmed}`"
            )))
        }
    }
}

impl CalendarDate {
    /// Helper to parse i32 with better error messages
    fn parse_i32(s: &str) -> Result<i32, ParseError> {
        s.parse::<i32>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    fn parse_day_month_year(parts: &[&str]) -> Result<Self, ParseError> {
        let [day, month, year] = parts else {
            return Err(ParseError::InvalidFormat(format!(
                "expected 3 values (day month year), found {}",
                parts.len()
            )));
        };
        let day = Self::parse_i32(day)?;
        let month = Self::parse_i32(month)?;
        let year = Self::parse_i32(year)?;

        Ok(Self::new(day, month, year)?)
    }

    fn parse_iso(parts: &[&str]) -> Result<Self, ParseError> {
        let [year, month, day] = parts else {
            return Err(ParseError::InvalidFormat(parts.join("-")));
        };
        let year = Self::parse_i32(year)?;
        let month = Self::parse_i32(month)?;
        let day = Self::parse_i32(day)?;

        Ok(Self::new(day, month, year)?)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_iso_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::arb_date;
    use super::*;
    use proptest::prelude::*;

    fn date(day: i32, month: i32, year: i32) -> CalendarDate {
        CalendarDate::new(day, month, year).unwrap()
    }

    #[test]
    fn test_new_keeps_fields() {
        let d = date(15, 8, 1991);
        assert_eq!((d.day(), d.month(), d.year()), (15, 8, 1991));
    }

    #[test]
    fn test_new_rejects_out_of_range_components() {
        assert_eq!(
            CalendarDate::new(1, 1, -1),
            Err(InvalidDate::Year(-1))
        );
        assert_eq!(CalendarDate::new(1, 0, 2024), Err(InvalidDate::Month(0)));
        assert_eq!(CalendarDate::new(1, 13, 2024), Err(InvalidDate::Month(13)));
        assert!(matches!(
            CalendarDate::new(0, 1, 2024),
            Err(InvalidDate::Day { day: 0, .. })
        ));
        assert!(matches!(
            CalendarDate::new(-7, 1, 2024),
            Err(InvalidDate::Day { day: -7, .. })
        ));
    }

    #[test]
    fn test_leap_year_boundaries() {
        assert!(CalendarDate::new(29, 2, 2024).is_ok());
        assert!(CalendarDate::new(29, 2, 2023).is_err());
        assert!(CalendarDate::new(31, 4, 2024).is_err());
        assert!(CalendarDate::new(30, 4, 2024).is_ok());
        assert!(CalendarDate::new(29, 2, 1900).is_err());
        assert!(CalendarDate::new(29, 2, 2000).is_ok());
        assert!(CalendarDate::new(29, 2, 0).is_ok());
    }

    #[test]
    fn test_is_leap_year_examples() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(date(1, 1, 2024).is_leap_year());
    }

    #[test]
    fn test_update_replaces_all_fields() {
        let mut d = date(1, 1, 2020);
        d.update(31, 12, 1999).unwrap();
        assert_eq!(d, date(31, 12, 1999));
    }

    #[test]
    fn test_rejected_update_leaves_date_intact() {
        let mut d = date(15, 6, 2023);
        assert_eq!(
            d.update(31, 2, 2024),
            Err(InvalidDate::Day {
                day: 31,
                month: 2,
                year: 2024
            })
        );
        assert_eq!(d.update(1, 13, 2024), Err(InvalidDate::Month(13)));
        assert_eq!(d.update(1, 1, -2024), Err(InvalidDate::Year(-2024)));
        assert_eq!((d.day(), d.month(), d.year()), (15, 6, 2023));
    }

    #[test]
    fn test_day_of_week() {
        assert_eq!(date(1, 1, 2000).day_of_week(), Weekday::Saturday);
        assert_eq!(date(1, 1, 2000).day_of_week().name(), "Saturday");
        assert_eq!(date(15, 6, 2023).day_of_week(), Weekday::Thursday);
        assert_eq!(date(1, 1, 2020).day_of_week(), Weekday::Wednesday);
    }

    #[test]
    fn test_month_name_lookup() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
        assert_eq!(date(4, 7, 1776).month_name(), "July");
    }

    #[test]
    fn test_days_in_month_is_checked() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2023, 12), Some(31));
        assert_eq!(days_in_month(2023, 0), None);
        assert_eq!(days_in_month(2023, 13), None);
    }

    #[test]
    fn test_ordering() {
        assert!(date(31, 12, 1999) < date(1, 1, 2000));
        assert!(date(1, 2, 2000) > date(31, 1, 2000));
        assert!(date(2, 1, 2000) > date(1, 1, 2000));
        assert_eq!(date(5, 5, 2005).cmp(&date(5, 5, 2005)), Ordering::Equal);
    }

    #[test]
    fn test_sorting() {
        let mut dates = vec![date(1, 1, 2021), date(15, 6, 1990), date(31, 12, 2020)];
        dates.sort();
        assert_eq!(
            dates,
            vec![date(15, 6, 1990), date(31, 12, 2020), date(1, 1, 2021)]
        );
    }

    #[test]
    fn test_day_number() {
        assert_eq!(date(1, 1, 0).day_number(), 1);
        assert_eq!(date(1, 1, 1).day_number(), 367);
        assert_eq!(
            date(1, 1, 2021).day_number() - date(1, 1, 2020).day_number(),
            366
        );
        assert_eq!(
            date(1, 3, 2024).day_number() - date(28, 2, 2024).day_number(),
            2
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(date(15, 8, 1991).to_string(), "August 15, 1991");
        assert_eq!(date(1, 1, 0).to_string(), "January 1, 0");
    }

    #[test]
    fn test_iso_string() {
        assert_eq!(date(15, 8, 1991).to_iso_string(), "1991-08-15");
        assert_eq!(date(1, 1, 7).to_iso_string(), "0007-01-01");
    }

    #[test]
    fn test_parse_day_month_year() {
        let d = "15 8 1991".parse::<CalendarDate>().unwrap();
        assert_eq!(d, date(15, 8, 1991));

        let d = "  29   2  2024 ".parse::<CalendarDate>().unwrap();
        assert_eq!(d, date(29, 2, 2024));
    }

    #[test]
    fn test_parse_iso() {
        let d = "1991-08-15".parse::<CalendarDate>().unwrap();
        assert_eq!(d, date(15, 8, 1991));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<CalendarDate>(), Err(ParseError::EmptyInput));
        assert_eq!("   ".parse::<CalendarDate>(), Err(ParseError::EmptyInput));
        assert!(matches!(
            "15 8".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "15 8 1991 extra".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "xx 8 1991".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1991-08".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "19910815".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert_eq!(
            "30 2 2024".parse::<CalendarDate>(),
            Err(ParseError::InvalidDate(InvalidDate::Day {
                day: 30,
                month: 2,
                year: 2024
            }))
        );
        assert_eq!(
            "1 1 -5".parse::<CalendarDate>(),
            Err(ParseError::InvalidDate(InvalidDate::Year(-5)))
        );
    }

    #[test]
    fn test_serde_string_format() {
        let d = date(15, 8, 1991);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#""1991-08-15""#);
        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(d, parsed);
    }

    #[test]
    fn test_serde_validation() {
        let result: Result<CalendarDate, _> = serde_json::from_str(r#""2023-02-29""#);
        assert!(result.is_err());

        let result: Result<CalendarDate, _> = serde_json::from_str(r#""2024-13-01""#);
        assert!(result.is_err());

        let result: Result<CalendarDate, _> = serde_json::from_str(r#""2024-02-29""#);
        assert!(result.is_ok());
    }

    proptest! {
        #[test]
        fn every_calendar_day_is_accepted(
            (d, m, y) in (0i32..=4000, 1i32..=12).prop_flat_map(|(y, m)| {
                let last = days_in_month(y.unsigned_abs(), m.unsigned_abs() as u8).unwrap_or(0);
                (1..=i32::from(last), Just(m), Just(y))
            })
        ) {
            let date = CalendarDate::new(d, m, y);
            prop_assert!(date.is_ok(), "{d} {m} {y} rejected: {date:?}");
            let date = date.unwrap();
            prop_assert_eq!(
                (i32::from(date.day()), i32::from(date.month()), i64::from(date.year())),
                (d, m, i64::from(y))
            );
        }

        #[test]
        fn day_past_month_end_is_rejected(y in 0i32..=4000, m in 1i32..=12, extra in 1i32..=40) {
            let last = days_in_month(y.unsigned_abs(), m.unsigned_abs() as u8).unwrap_or(0);
            let d = i32::from(last) + extra;
            let rejected = matches!(CalendarDate::new(d, m, y), Err(InvalidDate::Day { .. }));
            prop_assert!(rejected);
        }

        #[test]
        fn ordering_is_transitive(a in arb_date(), b in arb_date(), c in arb_date()) {
            if a < b && b < c {
                prop_assert!(a < c);
            }
        }

        #[test]
        fn day_number_follows_ordering(a in arb_date(), b in arb_date()) {
            prop_assert_eq!(a.cmp(&b), a.day_number().cmp(&b.day_number()));
        }

        #[test]
        fn invalid_month_always_rejected(
            d in 1i32..=28,
            m in prop_oneof![i32::MIN..1, 13..i32::MAX],
            y in 0i32..10_000,
        ) {
            prop_assert_eq!(CalendarDate::new(d, m, y), Err(InvalidDate::Month(m)));
        }

        #[test]
        fn negative_year_always_rejected(d in 1i32..=28, m in 1i32..=12, y in i32::MIN..0) {
            prop_assert_eq!(CalendarDate::new(d, m, y), Err(InvalidDate::Year(y)));
        }

        #[test]
        fn day_below_one_always_rejected(d in i32::MIN..1, m in 1i32..=12, y in 0i32..10_000) {
            let rejected = matches!(CalendarDate::new(d, m, y), Err(InvalidDate::Day { .. }));
            prop_assert!(rejected);
        }
    }
}
