//! Integration tests for bikeshare-cli crate.
//!
//! These tests drive whole sessions with scripted console input against
//! fixture record sources and check what the user would see.

use bikeshare_cli::{CliError, Console, Session};
use bikeshare_common::test_utils::{
    create_temp_dir, init_test_logging,
    trip_fixtures::{sample_trips, write_trips_csv},
};
use bikeshare_common::{BikeshareError, ColumnSchema};
use bikeshare_stats::DatasetLoader;
use std::io::Cursor;
use std::path::Path;

const GREETING: &str = "Hello! Let's explore some US bikeshare data!";
const NO_MORE_ROWS: &str = "No more raw data to display.";
const MORE_ROWS_PROMPT: &str = "Press Enter for 5 more lines or type 'no' to exit: ";

fn run_session(dir: &Path, script: &str) -> (Result<(), CliError>, String) {
    init_test_logging();
    let console = Console::new(Cursor::new(script.to_string()), Vec::new());
    let mut session = Session::new(console, DatasetLoader::with_directory(dir), 5);
    let result = session.run();
    let output = String::from_utf8(session.into_output()).unwrap();
    (result, output)
}

fn chicago_dir() -> tempfile::TempDir {
    let dir = create_temp_dir();
    write_trips_csv(dir.path(), "chicago.csv", &sample_trips(), ColumnSchema::with_demographics());
    dir
}

#[test]
fn test_statistics_round() {
    let dir = chicago_dir();
    let (result, output) = run_session(dir.path(), "chicago\nmarch\nall\nno\nno\n");

    assert!(result.is_ok());
    assert!(output.contains("The most common travel month is March with 4 trips."));
    assert!(output.contains("Calculating User Stats..."));
    assert!(output.contains("Would you like to restart? Enter yes or no."));
    assert_eq!(output.matches(GREETING).count(), 1);
}

#[test]
fn test_invalid_city_is_named_and_reprompted() {
    let dir = chicago_dir();
    let (result, output) = run_session(dir.path(), "Boston\nChicago\nall\nfriday\nno\nno\n");

    assert!(result.is_ok());
    assert!(output.contains("boston is not an available option. Try again."));
    assert_eq!(
        output
            .matches("Please enter a city (Chicago, New York City, Washington): ")
            .count(),
        2
    );
    assert!(output.contains("The most common travel day is Friday with 4 trips."));
}

#[test]
fn test_browse_until_exhausted() {
    let dir = chicago_dir();
    let (result, output) = run_session(dir.path(), "chicago\nall\nall\nyes\n\n\nno\n");

    assert!(result.is_ok());
    assert_eq!(output.matches(MORE_ROWS_PROMPT).count(), 2);
    assert_eq!(output.matches(NO_MORE_ROWS).count(), 1);
    assert!(output.contains("2017-01-02 08:15:00"));
    assert!(output.contains("2017-06-23 08:30:00"));
    assert!(!output.contains("Calculating"));
}

#[test]
fn test_browse_stops_on_no() {
    let dir = chicago_dir();
    let (result, output) = run_session(dir.path(), "chicago\nall\nall\nyes\nno\nno\n");

    assert!(result.is_ok());
    assert_eq!(output.matches(MORE_ROWS_PROMPT).count(), 1);
    assert!(!output.contains(NO_MORE_ROWS));
    assert!(!output.contains("2017-06-23 08:30:00"));
}

#[test]
fn test_browse_empty_selection() {
    let dir = chicago_dir();
    let (result, output) = run_session(dir.path(), "chicago\nfebruary\nall\nyes\nno\n");

    assert!(result.is_ok());
    assert!(output.contains(NO_MORE_ROWS));
    assert!(!output.contains(MORE_ROWS_PROMPT));
}

#[test]
fn test_invalid_raw_data_answer() {
    let dir = chicago_dir();
    let (result, output) = run_session(dir.path(), "chicago\nall\nall\nsure\nno\nno\n");

    assert!(result.is_ok());
    assert!(output.contains("Invalid Input"));
    assert!(output.contains("Calculating Trip Duration..."));
}

#[test]
fn test_restart_is_case_insensitive() {
    let dir = chicago_dir();
    let (result, output) =
        run_session(dir.path(), "chicago\nall\nall\nno\nYES\nchicago\njune\nall\nno\nno\n");

    assert!(result.is_ok());
    assert_eq!(output.matches(GREETING).count(), 2);
    assert!(output.contains("The most common travel month is June with 3 trips."));
}

#[test]
fn test_restart_rejects_padded_or_other_answers() {
    for answer in ["YES ", "n", ""] {
        let dir = chicago_dir();
        let script = format!("chicago\nall\nall\nno\n{answer}\nchicago\n");
        let (result, output) = run_session(dir.path(), &script);

        assert!(result.is_ok());
        assert_eq!(output.matches(GREETING).count(), 1, "answer {answer:?}");
    }
}

#[test]
fn test_end_of_input_ends_cleanly() {
    let dir = chicago_dir();

    let (result, output) = run_session(dir.path(), "");
    assert!(result.is_ok());
    assert!(output.contains(GREETING));

    let (result, output) = run_session(dir.path(), "chicago\nmarch\n");
    assert!(result.is_ok());
    assert!(!output.contains("Calculating"));

    let (result, _) = run_session(dir.path(), "chicago\nall\nall\nno\n");
    assert!(result.is_ok());
}

#[test]
fn test_missing_record_source_is_fatal() {
    let dir = chicago_dir();
    let (result, _) = run_session(dir.path(), "washington\nall\nall\nno\nno\n");

    let err = result.unwrap_err();
    assert!(!err.is_input_closed());
    assert!(matches!(err, CliError::Bikeshare(BikeshareError::Io(_))));
}
