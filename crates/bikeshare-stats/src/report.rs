//! Runs the four statistic groups in their fixed order.

use crate::duration_stats::{DurationStats, TripDurationReporter};
use crate::station_stats::{StationStats, StationStatsReporter};
use crate::table::TripTable;
use crate::time_stats::{TimeStats, TimeStatsReporter};
use crate::traits::StatsReporter;
use crate::user_stats::{UserStats, UserStatsReporter};
use std::io::{self, Write};
use tracing::{info, instrument};

/// Results of a full statistics run.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    /// Times of travel.
    pub time: TimeStats,
    /// Station popularity.
    pub stations: StationStats,
    /// Trip durations.
    pub durations: DurationStats,
    /// User demographics.
    pub users: UserStats,
}

/// Prints the time, station, duration and user reports, in that order.
#[instrument(skip_all, fields(rows = table.len()))]
pub fn report_all(table: &TripTable, out: &mut dyn Write) -> io::Result<StatsSummary> {
    let time = TimeStatsReporter.report(table, out)?;
    let stations = StationStatsReporter.report(table, out)?;
    let durations = TripDurationReporter.report(table, out)?;
    let users = UserStatsReporter.report(table, out)?;

    info!("Printed all statistic groups");
    Ok(StatsSummary {
        time,
        stations,
        durations,
        users,
    })
}
