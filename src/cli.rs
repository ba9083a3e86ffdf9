use clap::Parser;
use date_span::CalendarDate;

/// Sort calendar dates, name their weekdays and measure the span between them.
#[derive(Debug, Parser)]
#[command(
    name = "date-span",
    version,
    about = "Sort calendar dates, show their weekdays and the difference between the first and last"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Date to include, as "day month year" or YYYY-MM-DD. Repeat for more
    /// dates. Without any, dates are read interactively.
    #[arg(
        short,
        long = "date",
        value_name = "DATE",
        env = "DATE_SPAN_DATES",
        value_delimiter = ','
    )]
    pub dates: Vec<CalendarDate>,

    /// Print the sorted dates and their difference as JSON.
    #[arg(long, requires = "dates")]
    pub json: bool,
}
