//! Total and average trip duration.

use crate::table::TripTable;
use crate::traits::StatsReporter;
use bikeshare_common::format_duration;
use std::io::{self, Write};

/// Sum and mean of trip durations in seconds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DurationStats {
    /// Number of trips with a duration.
    pub trips: usize,
    /// Sum of the known durations.
    pub total_seconds: f64,
    /// Mean of the known durations, `None` when there are none.
    pub mean_seconds: Option<f64>,
}

/// Trip duration reporter.
#[derive(Debug, Default)]
pub struct TripDurationReporter;

impl StatsReporter for TripDurationReporter {
    type Stats = DurationStats;

    fn name(&self) -> &'static str {
        "trip_duration_stats"
    }

    fn heading(&self) -> &'static str {
        "Calculating Trip Duration..."
    }

    fn compute(&self, table: &TripTable) -> DurationStats {
        let (trips, total_seconds) = table
            .iter()
            .filter_map(|t| t.trip_duration)
            .fold((0, 0.0), |(count, sum), duration| (count + 1, sum + duration));
        let mean_seconds = (trips > 0).then(|| total_seconds / trips as f64);

        DurationStats {
            trips,
            total_seconds,
            mean_seconds,
        }
    }

    fn render(&self, stats: &DurationStats, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "Total travel time is {} seconds // {}",
            stats.total_seconds,
            format_duration(stats.total_seconds)
        )?;

        match stats.mean_seconds {
            Some(mean) => writeln!(
                out,
                "Average travel time is {} seconds // {}",
                mean,
                format_duration(mean)
            )?,
            None => writeln!(out, "No trips available to compute an average travel time.")?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_common::test_utils::{assert_approx_eq, trip_fixtures::sample_trips};
    use bikeshare_common::{ColumnSchema, TripRecord};

    #[test]
    fn test_sample_durations() {
        let table = TripTable::new(sample_trips(), ColumnSchema::with_demographics());
        let stats = TripDurationReporter.compute(&table);
        assert_eq!(stats.trips, 8);
        assert_approx_eq(stats.total_seconds, 9270.5, 1e-9);
        assert_approx_eq(stats.mean_seconds.unwrap(), 1158.8125, 1e-9);

        let mut out = Vec::new();
        TripDurationReporter.render(&stats, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Total travel time is 9270.5 seconds // 0 days 02:34:30.500000"));
        assert!(text.contains("Average travel time is 1158.8125 seconds // 0 days 00:19:18.812500"));
    }

    #[test]
    fn test_empty_duration_cells_are_skipped() {
        let mut trips = sample_trips();
        trips.push(TripRecord::from_cells("8", None, None, None, "A", "B"));
        let stats = TripDurationReporter.compute(&TripTable::new(trips, ColumnSchema::default()));
        assert_eq!(stats.trips, 8);
        assert_approx_eq(stats.total_seconds, 9270.5, 1e-9);
        assert_approx_eq(stats.mean_seconds.unwrap(), 1158.8125, 1e-9);

        let blank = vec![TripRecord::from_cells("0", None, None, None, "A", "B")];
        let stats = TripDurationReporter.compute(&TripTable::new(blank, ColumnSchema::default()));
        assert_eq!(stats.trips, 0);
        assert_eq!(stats.total_seconds, 0.0);
        assert_eq!(stats.mean_seconds, None);
    }

    #[test]
    fn test_empty_table() {
        let stats = TripDurationReporter.compute(&TripTable::default());
        assert_eq!(stats.trips, 0);
        assert_eq!(stats.mean_seconds, None);

        let mut out = Vec::new();
        TripDurationReporter.render(&stats, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Total travel time is 0 seconds // 0 days 00:00:00"));
        assert!(text.contains("No trips available to compute an average travel time."));
    }
}
