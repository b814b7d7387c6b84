//! Most frequent times of travel.

use crate::frequency::{FrequencyTable, TopValue};
use crate::table::TripTable;
use crate::traits::StatsReporter;
use bikeshare_common::{format_hour, month_name, weekday_name};
use chrono::Weekday;
use std::io::{self, Write};

/// Most common month, weekday and start hour.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimeStats {
    /// Most common month (1-based).
    pub common_month: Option<TopValue<u32>>,
    /// Most common weekday.
    pub common_day: Option<TopValue<Weekday>>,
    /// Most common start hour (0-23).
    pub common_hour: Option<TopValue<u32>>,
}

/// Time of travel reporter.
#[derive(Debug, Default)]
pub struct TimeStatsReporter;

impl StatsReporter for TimeStatsReporter {
    type Stats = TimeStats;

    fn name(&self) -> &'static str {
        "time_stats"
    }

    fn heading(&self) -> &'static str {
        "Calculating The Most Frequent Times of Travel..."
    }

    fn compute(&self, table: &TripTable) -> TimeStats {
        let months: FrequencyTable<u32> = table.iter().filter_map(|t| t.month()).collect();
        let days: FrequencyTable<Weekday> = table.iter().filter_map(|t| t.day_of_week()).collect();
        let hours: FrequencyTable<u32> = table.iter().filter_map(|t| t.start_hour()).collect();

        TimeStats {
            common_month: months.top(),
            common_day: days.top(),
            common_hour: hours.top(),
        }
    }

    fn render(&self, stats: &TimeStats, out: &mut dyn Write) -> io::Result<()> {
        match &stats.common_month {
            Some(top) => writeln!(
                out,
                "The most common travel month is {} with {} trips.",
                month_name(top.value),
                top.count
            )?,
            None => writeln!(out, "No trips available to determine the most common travel month.")?,
        }

        match &stats.common_day {
            Some(top) => writeln!(
                out,
                "The most common travel day is {} with {} trips.",
                weekday_name(top.value),
                top.count
            )?,
            None => writeln!(out, "No trips available to determine the most common travel day.")?,
        }

        match &stats.common_hour {
            Some(top) => writeln!(
                out,
                "The most common travel hour is {} with {} trips.",
                format_hour(top.value),
                top.count
            )?,
            None => writeln!(out, "No trips available to determine the most common travel hour.")?,
        }

        Ok(())
    }
}
