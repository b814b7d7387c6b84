//! Dataset loading: reads a city's CSV record source into a [`TripTable`].

use crate::table::TripTable;
use bikeshare_common::{BikeshareError, City, ColumnSchema, FilterSelection, Result, TripRecord};
use bikeshare_config::Config;
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Headers every record source must have.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Start Time",
    "End Time",
    "Trip Duration",
    "Start Station",
    "End Station",
    "User Type",
];

/// Header of the optional gender column.
pub const GENDER_COLUMN: &str = "Gender";

/// Header of the optional birth year column.
pub const BIRTH_YEAR_COLUMN: &str = "Birth Year";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// One CSV row as stored on disk. Unreadable numeric cells become `None`.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "", default)]
    label: Option<String>,
    #[serde(rename = "Start Time", default)]
    start_time: Option<String>,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration", default, deserialize_with = "csv::invalid_option")]
    trip_duration: Option<f64>,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default, deserialize_with = "csv::invalid_option")]
    birth_year: Option<f64>,
}

/// Resolves cities to record sources and loads filtered trip tables.
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    sources: BTreeMap<City, PathBuf>,
}

impl DatasetLoader {
    /// Creates a loader reading each city from the configured file.
    pub fn from_config(config: &Config) -> Self {
        let sources = City::ALL
            .into_iter()
            .map(|city| (city, config.city_file(city)))
            .collect();
        Self { sources }
    }

    /// Creates a loader reading the default file names from `directory`.
    pub fn with_directory(directory: impl AsRef<Path>) -> Self {
        let sources = City::ALL
            .into_iter()
            .map(|city| (city, directory.as_ref().join(city.default_file())))
            .collect();
        Self { sources }
    }

    /// Record source of a city.
    pub fn source(&self, city: City) -> PathBuf {
        self.sources
            .get(&city)
            .cloned()
            .unwrap_or_else(|| PathBuf::from(city.default_file()))
    }

    /// Loads the selected city and applies the month and day filters.
    #[instrument(skip_all, fields(selection = %selection))]
    pub fn load(&self, selection: &FilterSelection) -> Result<TripTable> {
        let path = self.source(selection.city);
        let table = read_table(&path)?;
        let filtered = table.filter_selection(selection);

        info!(
            path = %path.display(),
            loaded = table.len(),
            kept = filtered.len(),
            "Loaded trip table"
        );
        Ok(filtered)
    }
}

/// Reads a whole record source from disk.
pub fn read_table(path: &Path) -> Result<TripTable> {
    let file = std::fs::File::open(path)?;
    read_table_from(file, path)
}

/// Reads a record source from any reader; `origin` names it in errors.
///
/// Only a missing required column or a malformed row is an error. Empty or
/// unreadable cells load as missing values.
pub fn read_table_from<R: Read>(source: R, origin: &Path) -> Result<TripTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let has_column = |name: &str| headers.iter().any(|header| header == name);

    for column in REQUIRED_COLUMNS {
        if !has_column(column) {
            return Err(BikeshareError::missing_column(column, origin));
        }
    }
    let schema = ColumnSchema {
        gender: has_column(GENDER_COLUMN),
        birth_year: has_column(BIRTH_YEAR_COLUMN),
    };
    debug!(?schema, path = %origin.display(), "Detected optional columns");

    let mut records = Vec::new();
    for (position, row) in reader.deserialize::<RawTrip>().enumerate() {
        let raw = row.map_err(|e| {
            if e.is_io_error() {
                BikeshareError::Csv(e)
            } else {
                BikeshareError::parse(origin, position + 1, e.to_string())
            }
        })?;
        records.push(into_record(raw, position, origin));
    }

    Ok(TripTable::new(records, schema))
}

fn into_record(raw: RawTrip, position: usize, origin: &Path) -> TripRecord {
    let row = position + 1;
    let start_time = timestamp_cell(raw.start_time, "Start Time", row, origin);
    let end_time = timestamp_cell(raw.end_time, "End Time", row, origin);
    let trip_duration = raw.trip_duration.filter(|d| d.is_finite());

    let label = raw
        .label
        .filter(|label| !label.is_empty())
        .unwrap_or_else(|| position.to_string());

    let mut record = TripRecord::from_cells(
        label,
        start_time,
        end_time,
        trip_duration,
        raw.start_station,
        raw.end_station,
    );
    record.user_type = non_empty(raw.user_type);
    record.gender = non_empty(raw.gender);
    record.birth_year = raw
        .birth_year
        .filter(|year| year.is_finite())
        .map(|year| year.round() as i32);
    record
}

fn timestamp_cell(
    value: Option<String>,
    column: &str,
    row: usize,
    origin: &Path,
) -> Option<NaiveDateTime> {
    let value = non_empty(value)?;
    match parse_timestamp(&value) {
        Ok(timestamp) => Some(timestamp),
        Err(e) => {
            debug!(
                path = %origin.display(),
                row,
                column,
                %value,
                error = %e,
                "Unreadable timestamp loaded as missing"
            );
            None
        }
    }
}

fn parse_timestamp(value: &str) -> std::result::Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike, Weekday};

    const WASHINGTON: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
482740,2017-03-11 10:40:00.5,2017-03-11 10:46:00,360.0,Jefferson Dr & 14th St SW,Jefferson Dr & 14th St SW,Customer
";

    const CHICAGO: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1423854,2017-06-23 15:09:32,2017-06-23 15:14:53,321,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0
955915,2017-05-25 18:19:03,2017-05-25 18:45:53,1610,Theater on the Lake,Sheffield Ave & Waveland Ave,Subscriber,Female,1992.0
9031,2017-01-04 08:27:49,2017-01-04 08:34:45,416,May St & Taylor St,Wood St & Taylor St,Customer,,
";

    fn origin() -> &'static Path {
        Path::new("fixture.csv")
    }

    #[test]
    fn test_reads_table_without_demographics() {
        let table = read_table_from(WASHINGTON.as_bytes(), origin()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.schema(), ColumnSchema::default());

        let first = &table.records()[0];
        assert_eq!(first.row_label, "1621326");
        assert_eq!(first.month(), Some(6));
        assert_eq!(first.day_of_week(), Some(Weekday::Wed));
        assert_eq!(first.start_hour(), Some(8));
        assert!((first.trip_duration.unwrap() - 489.066).abs() < 1e-9);
        assert_eq!(first.gender, None);
        assert_eq!(first.birth_year, None);

        let second = &table.records()[1];
        let start = second.start_time.unwrap();
        assert_eq!(start.nanosecond(), 500_000_000);
        assert_eq!(start.day(), 11);
    }

    #[test]
    fn test_reads_demographics_and_blank_cells() {
        let table = read_table_from(CHICAGO.as_bytes(), origin()).unwrap();
        assert_eq!(table.schema(), ColumnSchema::with_demographics());

        let records = table.records();
        assert_eq!(records[0].gender.as_deref(), Some("Male"));
        assert_eq!(records[0].birth_year, Some(1992));
        assert_eq!(records[2].user_type.as_deref(), Some("Customer"));
        assert_eq!(records[2].gender, None);
        assert_eq!(records[2].birth_year, None);
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "Start Time,End Time,Trip Duration,Start Station,End Station\n";
        let err = read_table_from(csv.as_bytes(), origin()).unwrap_err();
        assert!(matches!(
            err,
            BikeshareError::MissingColumn { ref column, .. } if column == "User Type"
        ));
    }

    #[test]
    fn test_empty_time_and_duration_cells_load_as_missing() {
        let csv = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-01-01 00:00:00,2017-01-01 00:10:00,600,A,B,Subscriber
1,2017-01-02 00:00:00,2017-01-02 00:10:00,,A,B,Subscriber
2,,,300,A,B,Customer
";
        let table = read_table_from(csv.as_bytes(), origin()).unwrap();
        assert_eq!(table.len(), 3);

        let records = table.records();
        assert_eq!(records[0].trip_duration, Some(600.0));
        assert_eq!(records[1].trip_duration, None);
        assert_eq!(records[1].month(), Some(1));
        assert_eq!(records[2].start_time, None);
        assert_eq!(records[2].end_time, None);
        assert_eq!(records[2].month(), None);
        assert_eq!(records[2].trip_duration, Some(300.0));
    }

    #[test]
    fn test_unreadable_cells_load_as_missing() {
        let csv = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,yesterday,2017-01-01 00:00:00,ten,A,B,Subscriber,Male,unknown
";
        let table = read_table_from(csv.as_bytes(), origin()).unwrap();
        let record = &table.records()[0];
        assert_eq!(record.start_time, None);
        assert!(record.end_time.is_some());
        assert_eq!(record.trip_duration, None);
        assert_eq!(record.birth_year, None);
        assert_eq!(record.gender.as_deref(), Some("Male"));
    }

    #[test]
    fn test_ragged_row_names_row() {
        let csv = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-01-01 00:00:00,2017-01-01 00:10:00,600,A,B,Subscriber
1,2017-01-02 00:00:00,600,A
";
        let err = read_table_from(csv.as_bytes(), origin()).unwrap_err();
        assert!(matches!(err, BikeshareError::Parse { row: 2, .. }));
        assert_eq!(err.category(), "parse");
    }

    #[test]
    fn test_header_only_file_is_empty_table() {
        let csv = ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type\n";
        let table = read_table_from(csv.as_bytes(), origin()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let loader = DatasetLoader::with_directory("/no/such/dir");
        let err = loader
            .load(&FilterSelection::whole_city(City::Chicago))
            .unwrap_err();
        assert_eq!(err.category(), "io");
    }
}
