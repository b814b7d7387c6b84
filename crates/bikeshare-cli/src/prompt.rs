//! Interactive questions: filter collection, raw data choice, paging and restart.

use crate::console::Console;
use crate::error::CliResult;
use bikeshare_common::{BikeshareError, City, DayFilter, FilterSelection, MonthFilter, SEPARATOR};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info};

const GREETING: &str = "\nHello! Let's explore some US bikeshare data!";
const CITY_PROMPT: &str = "\nPlease enter a city (Chicago, New York City, Washington): ";
const MONTH_PROMPT: &str = "Please enter a month (all, january, february, ... , june): ";
const DAY_PROMPT: &str = "Please enter a weekday (all, monday, tuesday, ... sunday): ";
const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";

/// Asks until the lowercased answer parses, naming each rejected input.
fn ask_until<T, R, W>(console: &mut Console<R, W>, prompt: &str) -> CliResult<T>
where
    T: FromStr<Err = BikeshareError>,
    R: BufRead,
    W: Write,
{
    loop {
        let answer = console.ask(prompt)?.to_lowercase();
        match answer.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(e) if e.is_recoverable() => {
                debug!(error = %e, "Rejected input");
                console.say(&format!("{answer} is not an available option. Try again.\n"))?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Greets the user and collects a validated city, month and day.
pub fn collect_filters<R: BufRead, W: Write>(console: &mut Console<R, W>) -> CliResult<FilterSelection> {
    console.say(GREETING)?;

    let city: City = ask_until(console, CITY_PROMPT)?;
    let month: MonthFilter = ask_until(console, MONTH_PROMPT)?;
    let day: DayFilter = ask_until(console, DAY_PROMPT)?;

    console.say(SEPARATOR)?;

    let selection = FilterSelection::new(city, month, day);
    info!(%selection, "Filters selected");
    Ok(selection)
}

/// Asks whether to browse raw rows (`true`) or print statistics (`false`).
pub fn ask_raw_data<R: BufRead, W: Write>(console: &mut Console<R, W>, page_size: usize) -> CliResult<bool> {
    let prompt =
        format!("\nType \"yes\" to view {page_size} lines of raw data || \"no\" to view other stats: ");
    loop {
        match console.ask(&prompt)?.to_lowercase().as_str() {
            "yes" => return Ok(true),
            "no" => return Ok(false),
            _ => console.say("Invalid Input")?,
        }
    }
}

/// Asks whether to show another window. Only an exact `no` stops.
pub fn ask_more_rows<R: BufRead, W: Write>(console: &mut Console<R, W>, page_size: usize) -> CliResult<bool> {
    let answer = console.ask(&format!(
        "Press Enter for {page_size} more lines or type 'no' to exit: "
    ))?;
    Ok(answer != "no")
}

/// Asks whether to start over. Only `yes`, in any letter case, restarts.
pub fn ask_restart<R: BufRead, W: Write>(console: &mut Console<R, W>) -> CliResult<bool> {
    let answer = console.ask(RESTART_PROMPT)?;
    Ok(answer.to_lowercase() == "yes")
}
