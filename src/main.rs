mod cli;
mod display;
mod logging;
mod session;

use std::io::{self, Write};
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::cli::Cli;
use crate::session::Session;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();

    if cli.dates.is_empty() {
        let dates = Session::new(io::stdin().lock(), stdout.lock()).run()?;
        info!(count = dates.len(), "session finished");
        return Ok(());
    }

    let mut dates = cli.dates;
    dates.sort();
    info!(count = dates.len(), "comparing dates from the command line");

    let mut out = stdout.lock();
    if cli.json {
        display::write_json(&mut out, &dates)?;
    } else {
        display::write_dates(&mut out, &dates)?;
    }
    out.flush()?;
    Ok(())
}
