use serde::Serialize;
use tracing::trace;

use crate::consts::{DAYS_IN_WEEK, MONTHS_IN_YEAR};
use crate::prelude::*;
use crate::types::month_length;
use crate::CalendarDate;

/// Span between two dates, both as a calendar breakdown and as raw days.
///
/// `years`, `months` and `days` are the normalized calendar breakdown;
/// `weeks` and `remaining_days` split `total_days` into whole weeks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Display)]
#[display(
    fmt = "Difference: {years} years, {months} months, {weeks} weeks, {remaining_days} days (total {total_days} days)"
)]
pub struct DifferenceReport {
    pub years: u64,
    pub months: u64,
    pub days: u64,
    pub weeks: u64,
    pub remaining_days: u64,
    pub total_days: u64,
}

impl CalendarDate {
    /// Computes the span between `self` and `other`.
    ///
    /// The result does not depend on argument order.
    pub fn difference(&self, other: &Self) -> DifferenceReport {
        let (a, b) = (self.day_number(), other.day_number());
        let total_days = a.abs_diff(b);
        let (earlier, later) = if a <= b { (self, other) } else { (other, self) };

        let mut years = i64::from(later.year()) - i64::from(earlier.year());
        let mut months = i64::from(later.month()) - i64::from(earlier.month());
        let mut days = i64::from(later.day()) - i64::from(earlier.day());

        if days < 0 {
            months -= 1;
            days += i64::from(month_length(earlier.year(), earlier.month()));
        }
        if months < 0 {
            years -= 1;
            months += MONTHS_IN_YEAR;
        }

        // Borrowing above keeps every component non-negative once `earlier`
        // really precedes `later`; the fallback only guards that ordering.
        let (years, months, days) = if years < 0 {
            (0, 0, total_days)
        } else {
            (years.unsigned_abs(), months.unsigned_abs(), days.unsigned_abs())
        };

        trace!(%earlier, %later, total_days, years, months, days, "computed date difference");

        DifferenceReport {
            years,
            months,
            days,
            weeks: total_days / DAYS_IN_WEEK,
            remaining_days: total_days % DAYS_IN_WEEK,
            total_days,
        }
    }
}
