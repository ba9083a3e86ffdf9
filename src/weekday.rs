use serde::{Deserialize, Serialize};
use std::fmt;

use crate::consts::{MARCH, WEEKDAY_NAMES};

/// Day of the week, in the order the congruence produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Saturday,
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Maps a congruence index (0 = Saturday) to its weekday.
    /// Indices outside `0..7` are reduced modulo 7.
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Congruence index of this weekday (0 = Saturday)
    pub const fn index(self) -> usize {
        self as usize
    }

    /// English name of the weekday
    pub const fn name(self) -> &'static str {
        WEEKDAY_NAMES[self.index()]
    }

    /// Computes the weekday of a validated `(day, month, year)`.
    ///
    /// January and February count as months 13 and 14 of the previous year.
    /// Division and remainder truncate toward zero, so for January and
    /// February of year 0 the shifted year is -1 and the result follows the
    /// congruence rather than the true proleptic weekday.
    pub(crate) fn compute(day: u8, month: u8, year: u32) -> Self {
        let (m, y) = if month < MARCH {
            (i64::from(month) + 12, i64::from(year) - 1)
        } else {
            (i64::from(month), i64::from(year))
        };
        let k = y % 100;
        let j = y / 100;
        let mut h = (i64::from(day) + 13 * (m + 1) / 5 + k + k / 4 + j / 4 - 2 * j) % 7;
        if h < 0 {
            h += 7;
        }
        // h is in 0..7 here
        Self::from_index(h.unsigned_abs() as usize)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
