//! Interactive prompt loop: read dates, show them sorted, optionally update one.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use date_span::CalendarDate;
use tracing::{debug, info};

use crate::display;

const RETRY_DATE: &str = "Invalid input! Try again (day month year):";

pub struct Session<R, W> {
    input: R,
    output: W,
    dates: Vec<CalendarDate>,
}

/// Splits a `day month year` line into its three integers.
fn parse_fields(line: &str) -> Option<(i32, i32, i32)> {
    let mut parts = line.split_whitespace().map(str::parse::<i32>);
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(Ok(day)), Some(Ok(month)), Some(Ok(year)), None) => Some((day, month, year)),
        _ => None,
    }
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            dates: Vec::new(),
        }
    }

    /// Runs the whole session and returns the final, sorted dates.
    ///
    /// # Errors
    /// Fails if input ends before the session is complete or on I/O errors.
    pub fn run(mut self) -> Result<Vec<CalendarDate>> {
        display::write_header(&mut self.output, "DATE INPUT")?;
        writeln!(self.output, "Enter number of dates:")?;
        let count: usize = self.read_number()?;

        for n in 1..=count {
            writeln!(self.output, "\nEnter date #{n} (day month year):")?;
            let date = self.read_date()?;
            self.dates.push(date);
        }
        info!(count, "read dates");

        self.dates.sort();
        display::write_dates(&mut self.output, &self.dates)?;

        display::write_header(&mut self.output, "DATE UPDATE")?;
        writeln!(self.output, "Would you like to update a date? (yes/no):")?;
        if self.read_line()?.trim().eq_ignore_ascii_case("yes") {
            self.update_one()?;
        } else {
            writeln!(self.output, "No updates made.")?;
        }

        self.output.flush()?;
        Ok(self.dates)
    }

    fn update_one(&mut self) -> Result<()> {
        writeln!(self.output, "Enter date number (1-{}):", self.dates.len())?;
        let number: i64 = self.read_number()?;
        let index = usize::try_from(number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .filter(|i| *i < self.dates.len());
        let Some(index) = index else {
            writeln!(self.output, "Invalid date number!")?;
            return Ok(());
        };

        writeln!(self.output, "Selected date: ")?;
        writeln!(self.output, "{}", self.dates[index])?;
        writeln!(self.output, "\nEnter new date (day month year):")?;
        loop {
            let line = self.read_line()?;
            match parse_fields(&line).map(|(d, m, y)| self.dates[index].update(d, m, y)) {
                Some(Ok(())) => break,
                Some(Err(err)) => debug!(%err, "rejected updated date"),
                None => debug!(input = line.trim(), "unparseable date input"),
            }
            writeln!(self.output, "{RETRY_DATE}")?;
        }

        info!(number, date = %self.dates[index], "updated date");
        writeln!(self.output, "\nDate updated successfully!")?;
        self.dates.sort();
        display::write_dates(&mut self.output, &self.dates)?;
        Ok(())
    }

    fn read_date(&mut self) -> Result<CalendarDate> {
        loop {
            let line = self.read_line()?;
            match parse_fields(&line).map(|(d, m, y)| CalendarDate::new(d, m, y)) {
                Some(Ok(date)) => return Ok(date),
                Some(Err(err)) => debug!(%err, "rejected date"),
                None => debug!(input = line.trim(), "unparseable date input"),
            }
            writeln!(self.output, "{RETRY_DATE}")?;
        }
    }

    fn read_number<T: FromStr>(&mut self) -> Result<T> {
        loop {
            if let Ok(value) = self.read_line()?.trim().parse() {
                return Ok(value);
            }
            writeln!(self.output, "Enter a valid number:")?;
        }
    }

    fn read_line(&mut self) -> Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        if read == 0 {
            bail!("input closed");
        }
        Ok(line)
    }
}
