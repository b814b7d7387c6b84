//! Interactive exploration session.
//!
//! A session alternates between collecting filters and reporting on the
//! selected trips until the user declines to restart or closes the input.

use crate::console::Console;
use crate::error::CliResult;
use crate::prompt;
use bikeshare_stats::{report_all, DatasetLoader, TripPaginator, TripTable};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Where a session stands between prompts.
#[derive(Debug)]
pub enum SessionState {
    /// Asking for city, month and day.
    Collecting,
    /// Showing raw rows or statistics for the selected trips.
    Reporting(TripTable),
    /// The user declined to restart.
    Finished,
}

/// One interactive run over a console.
pub struct Session<R, W> {
    console: Console<R, W>,
    loader: DatasetLoader,
    page_size: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session showing `page_size` raw rows per window.
    pub fn new(console: Console<R, W>, loader: DatasetLoader, page_size: usize) -> Self {
        Self {
            console,
            loader,
            page_size: page_size.max(1),
        }
    }

    /// Runs until the user declines to restart or the input ends.
    ///
    /// Closing the input at any prompt ends the session without error. Load
    /// failures and console write failures are returned.
    pub fn run(&mut self) -> CliResult<()> {
        let mut state = SessionState::Collecting;
        loop {
            state = match self.step(state) {
                Ok(SessionState::Finished) => break,
                Ok(next) => next,
                Err(e) if e.is_input_closed() => {
                    info!("Input closed, ending session");
                    break;
                }
                Err(e) => return Err(e),
            };
        }
        self.console.output().flush()?;
        Ok(())
    }

    /// Performs one transition.
    pub fn step(&mut self, state: SessionState) -> CliResult<SessionState> {
        match state {
            SessionState::Collecting => {
                let selection = prompt::collect_filters(&mut self.console)?;
                let table = self.loader.load(&selection)?;
                Ok(SessionState::Reporting(table))
            }
            SessionState::Reporting(table) => {
                if prompt::ask_raw_data(&mut self.console, self.page_size)? {
                    self.browse(&table)?;
                } else {
                    report_all(&table, self.console.output())?;
                }

                if prompt::ask_restart(&mut self.console)? {
                    debug!("Restarting session");
                    Ok(SessionState::Collecting)
                } else {
                    Ok(SessionState::Finished)
                }
            }
            SessionState::Finished => Ok(SessionState::Finished),
        }
    }

    fn browse(&mut self, table: &TripTable) -> CliResult<()> {
        let mut pager = TripPaginator::with_window_size(table, self.page_size);
        loop {
            if !pager.has_more() {
                self.console.say("No more raw data to display.")?;
                return Ok(());
            }
            if let Some(window) = pager.next_window() {
                self.console.say(&window.to_string())?;
            }
            if !prompt::ask_more_rows(&mut self.console, self.page_size)? {
                return Ok(());
            }
        }
    }

    /// Consumes the session, returning the console writer.
    pub fn into_output(self) -> W {
        self.console.into_output()
    }
}
