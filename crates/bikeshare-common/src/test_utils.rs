//! Test utilities and shared test helpers for the bikeshare explorer.
//!
//! This module provides logging setup, trip fixtures, CSV writers and
//! proptest strategies shared by the unit and integration tests of every
//! crate in the workspace.

use crate::types::{ColumnSchema, TripRecord};
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt()
            .with_test_writer()
            .with_env_filter(filter)
            .try_init();
    });
}

/// Test fixture for creating a naive timestamp.
pub fn mock_datetime(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, min, sec))
        .expect("valid fixture timestamp")
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(any(test, feature = "tempfile"))]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}

/// Trip fixtures with hand-checked statistics.
pub mod trip_fixtures {
    use super::*;
    use std::path::{Path, PathBuf};

    /// Build a trip starting at `start` and lasting `duration` seconds.
    pub fn trip(
        label: usize,
        start: NaiveDateTime,
        duration: f64,
        start_station: &str,
        end_station: &str,
    ) -> TripRecord {
        let end = start + chrono::TimeDelta::milliseconds((duration * 1000.0) as i64);
        TripRecord::new(label.to_string(), start, end, duration, start_station, end_station)
    }

    /// Eight Chicago-style trips in January, March and June 2017.
    ///
    /// Over the whole set: March (4 trips), Friday (4), 08:00 (4);
    /// "Canal St & Adams St" starts 5 trips, "Clinton St & Madison St" ends 5,
    /// the pair between them occurs 4 times; total duration 9270.5 s;
    /// Subscriber 5, Customer 3; Male 3, Female 2; birth years 1979..1990,
    /// most common 1990.
    pub fn sample_trips() -> Vec<TripRecord> {
        const CANAL: &str = "Canal St & Adams St";
        const CLINTON: &str = "Clinton St & Madison St";
        const STREETER: &str = "Streeter Dr & Grand Ave";
        const LAKE_SHORE: &str = "Lake Shore Dr & Monroe St";
        const THEATER: &str = "Theater on the Lake";

        vec![
            trip(0, mock_datetime(2017, 1, 2, 8, 15, 0), 600.0, CANAL, CLINTON)
                .with_user_type("Subscriber")
                .with_gender("Male")
                .with_birth_year(1985),
            trip(1, mock_datetime(2017, 3, 3, 8, 5, 0), 300.0, STREETER, LAKE_SHORE)
                .with_user_type("Customer"),
            trip(2, mock_datetime(2017, 3, 3, 17, 30, 0), 1200.0, CANAL, CLINTON)
                .with_user_type("Subscriber")
                .with_gender("Female")
                .with_birth_year(1990),
            trip(3, mock_datetime(2017, 3, 10, 8, 45, 0), 900.0, CANAL, LAKE_SHORE)
                .with_user_type("Subscriber")
                .with_gender("Male")
                .with_birth_year(1990),
            trip(4, mock_datetime(2017, 3, 14, 12, 0, 0), 450.0, STREETER, CLINTON)
                .with_user_type("Customer"),
            trip(5, mock_datetime(2017, 6, 18, 9, 0, 0), 3600.0, CANAL, CLINTON)
                .with_user_type("Subscriber")
                .with_gender("Female")
                .with_birth_year(1979),
            trip(6, mock_datetime(2017, 6, 18, 17, 10, 0), 1500.5, THEATER, STREETER)
                .with_user_type("Customer"),
            trip(7, mock_datetime(2017, 6, 23, 8, 30, 0), 720.0, CANAL, CLINTON)
                .with_user_type("Subscriber")
                .with_gender("Male")
                .with_birth_year(1990),
        ]
    }

    /// Timestamp layout of written fixtures; keeps sub-second precision.
    const FIXTURE_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S%.f";

    fn timestamp_cell(value: Option<NaiveDateTime>) -> String {
        value
            .map(|t| t.format(FIXTURE_TIMESTAMP).to_string())
            .unwrap_or_default()
    }

    /// Header line of a record source with the given optional columns.
    pub fn csv_header(schema: ColumnSchema) -> Vec<&'static str> {
        let mut header = vec![
            "",
            "Start Time",
            "End Time",
            "Trip Duration",
            "Start Station",
            "End Station",
            "User Type",
        ];
        if schema.gender {
            header.push("Gender");
        }
        if schema.birth_year {
            header.push("Birth Year");
        }
        header
    }

    /// Write trips to `dir/file_name` in the record source layout.
    pub fn write_trips_csv(
        dir: &Path,
        file_name: &str,
        trips: &[TripRecord],
        schema: ColumnSchema,
    ) -> PathBuf {
        let path = dir.join(file_name);
        let mut writer = csv::Writer::from_path(&path).expect("Failed to create CSV fixture");
        writer
            .write_record(csv_header(schema))
            .expect("Failed to write CSV header");

        for trip in trips {
            let mut row = vec![
                trip.row_label.clone(),
                timestamp_cell(trip.start_time),
                timestamp_cell(trip.end_time),
                trip.trip_duration.map(|d| d.to_string()).unwrap_or_default(),
                trip.start_station.clone(),
                trip.end_station.clone(),
                trip.user_type.clone().unwrap_or_default(),
            ];
            if schema.gender {
                row.push(trip.gender.clone().unwrap_or_default());
            }
            if schema.birth_year {
                row.push(
                    trip.birth_year
                        .map(|year| format!("{year}.0"))
                        .unwrap_or_default(),
                );
            }
            writer.write_record(&row).expect("Failed to write CSV row");
        }

        writer.flush().expect("Failed to flush CSV fixture");
        path
    }

    /// Write raw CSV text to `dir/file_name`.
    pub fn write_raw_csv(dir: &Path, file_name: &str, contents: &str) -> PathBuf {
        let path = dir.join(file_name);
        std::fs::write(&path, contents).expect("Failed to write CSV fixture");
        path
    }
}

/// Property-based testing utilities using proptest.
#[cfg(any(test, feature = "proptest"))]
pub mod property_testing {
    use super::*;
    use crate::types::{DayFilter, MonthFilter, WEEKDAY_NAMES};
    use proptest::prelude::*;

    /// Strategy for generating start times in the first half of 2017.
    pub fn start_time_strategy() -> impl Strategy<Value = NaiveDateTime> {
        (1u32..=6, 1u32..=28, 0u32..24, 0u32..60)
            .prop_map(|(month, day, hour, minute)| mock_datetime(2017, month, day, hour, minute, 0))
    }

    /// Strategy for generating a single trip from a small station pool.
    pub fn trip_strategy() -> impl Strategy<Value = TripRecord> {
        (
            start_time_strategy(),
            1u32..7200,
            prop::sample::select(vec!["A", "B", "C", "D"]),
            prop::sample::select(vec!["A", "B", "C", "D"]),
        )
            .prop_map(|(start, duration, from, to)| {
                trip_fixtures::trip(0, start, f64::from(duration), from, to)
                    .with_user_type("Subscriber")
            })
    }

    /// Strategy for generating tables of up to `max_len` trips with sequential labels.
    pub fn trips_strategy(max_len: usize) -> impl Strategy<Value = Vec<TripRecord>> {
        prop::collection::vec(trip_strategy(), 0..=max_len).prop_map(|mut trips| {
            for (index, trip) in trips.iter_mut().enumerate() {
                trip.row_label = index.to_string();
            }
            trips
        })
    }

    /// Strategy for generating any month filter accepted at the prompt.
    pub fn month_filter_strategy() -> impl Strategy<Value = MonthFilter> {
        prop_oneof![Just(MonthFilter::All), (1u32..=6).prop_map(MonthFilter::Month)]
    }

    /// Strategy for generating any day filter accepted at the prompt.
    pub fn day_filter_strategy() -> impl Strategy<Value = DayFilter> {
        prop_oneof![
            Just(DayFilter::All),
            prop::sample::select(WEEKDAY_NAMES.to_vec())
                .prop_map(|name| name.parse::<DayFilter>().unwrap_or_default()),
        ]
    }
}
