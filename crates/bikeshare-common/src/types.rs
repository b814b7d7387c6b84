//! Domain types: the fixed filter enumerations and the trip record.

use crate::error::BikeshareError;
use chrono::{Datelike, Month, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A city with a bikeshare dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum City {
    /// Chicago, with gender and birth year columns.
    Chicago,
    /// New York City, with gender and birth year columns.
    #[serde(rename = "new york city")]
    NewYorkCity,
    /// Washington, without demographic columns.
    Washington,
}

impl City {
    /// Every supported city, in prompt order.
    pub const ALL: [Self; 3] = [Self::Chicago, Self::NewYorkCity, Self::Washington];

    /// Lowercase name accepted at the prompt.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chicago => "chicago",
            Self::NewYorkCity => "new york city",
            Self::Washington => "washington",
        }
    }

    /// Capitalized name for display.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Chicago => "Chicago",
            Self::NewYorkCity => "New York City",
            Self::Washington => "Washington",
        }
    }

    /// File name of the city's record source when none is configured.
    pub const fn default_file(self) -> &'static str {
        match self {
            Self::Chicago => "chicago.csv",
            Self::NewYorkCity => "new_york_city.csv",
            Self::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|city| city.name() == s)
            .ok_or_else(|| BikeshareError::invalid_option("city", s))
    }
}

/// Lowercase month names accepted at the prompt, indexed from January.
pub const MONTH_NAMES: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

/// Lowercase weekday names accepted at the prompt, Monday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

const WEEKDAY_ORDER: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Keyword that disables a month or day filter.
pub const ALL_KEYWORD: &str = "all";

/// Month restriction of a filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MonthFilter {
    /// Keep every month.
    #[default]
    All,
    /// Keep only trips starting in this month (1-based).
    Month(u32),
}

impl MonthFilter {
    /// Returns whether a record's month passes the filter. A record without
    /// a start time only passes `All`.
    pub const fn matches(self, month: Option<u32>) -> bool {
        match (self, month) {
            (Self::All, _) => true,
            (Self::Month(wanted), Some(month)) => wanted == month,
            (Self::Month(_), None) => false,
        }
    }
}

impl FromStr for MonthFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_KEYWORD {
            return Ok(Self::All);
        }
        MONTH_NAMES
            .iter()
            .position(|name| *name == s)
            .map(|index| Self::Month(index as u32 + 1))
            .ok_or_else(|| BikeshareError::invalid_option("month", s))
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_KEYWORD),
            Self::Month(month) => f.write_str(&month_name(*month).to_lowercase()),
        }
    }
}

/// Weekday restriction of a filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayFilter {
    /// Keep every weekday.
    #[default]
    All,
    /// Keep only trips starting on this weekday.
    Day(Weekday),
}

impl DayFilter {
    /// Returns whether a record's weekday passes the filter.
    pub fn matches(self, day: Option<Weekday>) -> bool {
        match (self, day) {
            (Self::All, _) => true,
            (Self::Day(wanted), Some(day)) => wanted == day,
            (Self::Day(_), None) => false,
        }
    }
}

impl FromStr for DayFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_KEYWORD {
            return Ok(Self::All);
        }
        WEEKDAY_NAMES
            .iter()
            .position(|name| *name == s)
            .map(|index| Self::Day(WEEKDAY_ORDER[index]))
            .ok_or_else(|| BikeshareError::invalid_option("day", s))
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_KEYWORD),
            Self::Day(day) => f.write_str(&weekday_name(*day).to_lowercase()),
        }
    }
}

/// A validated (city, month, day) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilterSelection {
    /// City whose dataset is loaded.
    pub city: City,
    /// Month restriction.
    pub month: MonthFilter,
    /// Weekday restriction.
    pub day: DayFilter,
}

impl FilterSelection {
    /// Creates a selection from already validated parts.
    pub const fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }

    /// Selection for a whole city without month or day restriction.
    pub const fn whole_city(city: City) -> Self {
        Self::new(city, MonthFilter::All, DayFilter::All)
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "city={} month={} day={}", self.city, self.month, self.day)
    }
}

/// Full English name of a weekday ("Monday").
pub const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Full English name of a 1-based month number, or the number itself when out of range.
pub fn month_name(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map_or_else(|| month.to_string(), |m| m.name().to_string())
}

/// Which optional columns a city's dataset carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColumnSchema {
    /// A `Gender` column exists.
    pub gender: bool,
    /// A `Birth Year` column exists.
    pub birth_year: bool,
}

impl ColumnSchema {
    /// Schema with both demographic columns.
    pub const fn with_demographics() -> Self {
        Self {
            gender: true,
            birth_year: true,
        }
    }
}

/// One bikeshare ride.
///
/// `month` and `day_of_week` are derived from `start_time` when the record is
/// built and cannot drift from it. Empty or unreadable cells are `None` and
/// are left out of every statistic.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// Label of the row in its source file.
    pub row_label: String,
    /// Trip start.
    pub start_time: Option<NaiveDateTime>,
    /// Trip end.
    pub end_time: Option<NaiveDateTime>,
    /// Duration in seconds.
    pub trip_duration: Option<f64>,
    /// Station the trip started at.
    pub start_station: String,
    /// Station the trip ended at.
    pub end_station: String,
    /// Subscriber, Customer, ...; `None` when the cell is empty.
    pub user_type: Option<String>,
    /// `None` when the column is absent or the cell is empty.
    pub gender: Option<String>,
    /// `None` when the column is absent or the cell is empty.
    pub birth_year: Option<i32>,
    month: Option<u32>,
    day_of_week: Option<Weekday>,
}

impl TripRecord {
    /// Builds a complete record and derives its calendar fields.
    pub fn new(
        row_label: impl Into<String>,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        trip_duration: f64,
        start_station: impl Into<String>,
        end_station: impl Into<String>,
    ) -> Self {
        Self::from_cells(
            row_label,
            Some(start_time),
            Some(end_time),
            Some(trip_duration),
            start_station,
            end_station,
        )
    }

    /// Builds a record whose time and duration cells may be missing.
    pub fn from_cells(
        row_label: impl Into<String>,
        start_time: Option<NaiveDateTime>,
        end_time: Option<NaiveDateTime>,
        trip_duration: Option<f64>,
        start_station: impl Into<String>,
        end_station: impl Into<String>,
    ) -> Self {
        Self {
            row_label: row_label.into(),
            start_time,
            end_time,
            trip_duration,
            start_station: start_station.into(),
            end_station: end_station.into(),
            user_type: None,
            gender: None,
            birth_year: None,
            month: start_time.map(|t| t.month()),
            day_of_week: start_time.map(|t| t.weekday()),
        }
    }

    /// Sets the user type.
    #[must_use]
    pub fn with_user_type(mut self, user_type: impl Into<String>) -> Self {
        self.user_type = Some(user_type.into());
        self
    }

    /// Sets the gender.
    #[must_use]
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    /// Sets the birth year.
    #[must_use]
    pub const fn with_birth_year(mut self, year: i32) -> Self {
        self.birth_year = Some(year);
        self
    }

    /// Month of the start time (1-based).
    pub const fn month(&self) -> Option<u32> {
        self.month
    }

    /// Weekday of the start time.
    pub const fn day_of_week(&self) -> Option<Weekday> {
        self.day_of_week
    }

    /// Capitalized weekday name of the start time.
    pub fn day_name(&self) -> Option<&'static str> {
        self.day_of_week.map(weekday_name)
    }

    /// Hour of the start time (0-23).
    pub fn start_hour(&self) -> Option<u32> {
        self.start_time.map(|t| t.hour())
    }

    /// Returns whether the record passes a selection's month and day filters.
    pub fn matches(&self, selection: &FilterSelection) -> bool {
        selection.month.matches(self.month) && selection.day.matches(self.day_of_week)
    }
}
