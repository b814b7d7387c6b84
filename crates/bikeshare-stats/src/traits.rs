//! Reporter trait shared by the four statistic groups.

use crate::table::TripTable;
use bikeshare_common::SEPARATOR;
use std::io::{self, Write};
use std::time::Instant;
use tracing::debug;

/// A statistic group computed over a trip table and printed as a fixed report.
pub trait StatsReporter {
    /// The computed statistics.
    type Stats;

    /// Gets the name of this reporter.
    fn name(&self) -> &'static str;

    /// Gets the heading printed before the report body.
    fn heading(&self) -> &'static str;

    /// Computes the statistics. Must not fail on an empty table.
    fn compute(&self, table: &TripTable) -> Self::Stats;

    /// Writes the report body.
    fn render(&self, stats: &Self::Stats, out: &mut dyn Write) -> io::Result<()>;

    /// Computes and prints the full report: heading, body, elapsed time and
    /// separator. Returns the statistics for callers that want them.
    fn report(&self, table: &TripTable, out: &mut dyn Write) -> io::Result<Self::Stats> {
        writeln!(out, "\n{}\n", self.heading())?;

        let started = Instant::now();
        let stats = self.compute(table);
        self.render(&stats, out)?;
        let elapsed = started.elapsed();

        writeln!(out, "\nThis took {:.6} seconds.", elapsed.as_secs_f64())?;
        writeln!(out, "{SEPARATOR}")?;

        debug!(reporter = self.name(), rows = table.len(), ?elapsed, "Report complete");
        Ok(stats)
    }
}
