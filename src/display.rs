//! Console rendering of a sorted set of dates.

use std::io::{self, Write};

use anyhow::{Context, Result};
use date_span::{CalendarDate, DifferenceReport, Weekday};
use serde::Serialize;

const BANNER: &str = "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~";
const WIDE_BANNER: &str = "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~";

pub fn write_header(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{BANNER}")?;
    writeln!(out, "          {title}          ")?;
    writeln!(out, "{BANNER}")
}

/// Writes the numbered dates with their weekdays, followed by the difference
/// between the first and last when there are at least two.
pub fn write_dates(out: &mut impl Write, dates: &[CalendarDate]) -> io::Result<()> {
    write_header(out, "SORTED DATES")?;
    for (i, date) in dates.iter().enumerate() {
        writeln!(out, "{}. {date}", i + 1)?;
        writeln!(out, "   Day of week: {}", date.day_of_week())?;
    }

    if let [first, .., last] = dates {
        writeln!(out)?;
        writeln!(out, "{WIDE_BANNER}")?;
        writeln!(out, "         DIFFERENCE BETWEEN FIRST AND LAST DATE")?;
        writeln!(out, "{WIDE_BANNER}")?;
        writeln!(out, "{}", first.difference(last))?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct DateEntry {
    date: CalendarDate,
    display: String,
    weekday: Weekday,
}

/// Machine-readable form of [`write_dates`].
#[derive(Debug, Serialize)]
struct Summary {
    dates: Vec<DateEntry>,
    difference: Option<DifferenceReport>,
}

impl Summary {
    fn new(dates: &[CalendarDate]) -> Self {
        let difference = match dates {
            [first, .., last] => Some(first.difference(last)),
            _ => None,
        };
        Self {
            dates: dates
                .iter()
                .map(|date| DateEntry {
                    date: *date,
                    display: date.to_string(),
                    weekday: date.day_of_week(),
                })
                .collect(),
            difference,
        }
    }
}

pub fn write_json(out: &mut impl Write, dates: &[CalendarDate]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &Summary::new(dates))
        .context("failed to encode summary as JSON")?;
    writeln!(out)?;
    Ok(())
}
