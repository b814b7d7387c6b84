//! Most popular stations and trip.

use crate::frequency::{FrequencyTable, TopValue};
use crate::table::TripTable;
use crate::traits::StatsReporter;
use std::io::{self, Write};

/// Most common start station, end station and (start, end) pair.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StationStats {
    /// Most common start station.
    pub common_start: Option<TopValue<String>>,
    /// Most common end station.
    pub common_end: Option<TopValue<String>>,
    /// Most common (start, end) combination, paired row by row.
    pub common_trip: Option<TopValue<(String, String)>>,
}

/// Station popularity reporter.
#[derive(Debug, Default)]
pub struct StationStatsReporter;

impl StatsReporter for StationStatsReporter {
    type Stats = StationStats;

    fn name(&self) -> &'static str {
        "station_stats"
    }

    fn heading(&self) -> &'static str {
        "Calculating The Most Popular Stations and Trip..."
    }

    fn compute(&self, table: &TripTable) -> StationStats {
        let starts: FrequencyTable<&str> = table.iter().map(|t| t.start_station.as_str()).collect();
        let ends: FrequencyTable<&str> = table.iter().map(|t| t.end_station.as_str()).collect();
        let trips: FrequencyTable<(&str, &str)> = table
            .iter()
            .map(|t| (t.start_station.as_str(), t.end_station.as_str()))
            .collect();

        StationStats {
            common_start: starts.top().map(|top| TopValue {
                value: top.value.to_string(),
                count: top.count,
            }),
            common_end: ends.top().map(|top| TopValue {
                value: top.value.to_string(),
                count: top.count,
            }),
            common_trip: trips.top().map(|top| TopValue {
                value: (top.value.0.to_string(), top.value.1.to_string()),
                count: top.count,
            }),
        }
    }

    fn render(&self, stats: &StationStats, out: &mut dyn Write) -> io::Result<()> {
        match &stats.common_start {
            Some(top) => writeln!(
                out,
                "The most commonly used start station is {} with {} trips",
                top.value, top.count
            )?,
            None => writeln!(out, "No trips available to determine the most common start station.")?,
        }

        match &stats.common_end {
            Some(top) => writeln!(
                out,
                "The most commonly used end station is {} with {} trips",
                top.value, top.count
            )?,
            None => writeln!(out, "No trips available to determine the most common end station.")?,
        }

        match &stats.common_trip {
            Some(top) => writeln!(
                out,
                "The most frequent start and end station combination is {} to {} with {} trips",
                top.value.0, top.value.1, top.count
            )?,
            None => writeln!(
                out,
                "No trips available to determine the most frequent station combination."
            )?,
        }

        Ok(())
    }
}
