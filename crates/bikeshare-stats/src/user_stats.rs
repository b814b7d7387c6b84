//! Bikeshare user demographics.

use crate::frequency::FrequencyTable;
use crate::table::TripTable;
use crate::traits::StatsReporter;
use std::io::{self, Write};

/// Outcome of summarizing a column some datasets do not have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSummary<T> {
    /// The source has no such column.
    Unavailable,
    /// The column exists but no selected row has a value.
    Empty,
    /// Summary of the present values.
    Present(T),
}

/// Earliest, most recent and most common birth year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearSummary {
    /// Minimum birth year.
    pub earliest: i32,
    /// Maximum birth year.
    pub most_recent: i32,
    /// Mode, first seen on ties.
    pub most_common: i32,
}

/// Counts of each distinct value, most frequent first.
pub type ValueCounts = Vec<(String, usize)>;

/// User type, gender and birth year statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// Trips per user type.
    pub user_types: ValueCounts,
    /// Trips per gender.
    pub genders: ColumnSummary<ValueCounts>,
    /// Birth year summary.
    pub birth_years: ColumnSummary<BirthYearSummary>,
}

/// User demographics reporter.
#[derive(Debug, Default)]
pub struct UserStatsReporter;

fn value_counts<'a>(values: impl Iterator<Item = &'a str>) -> ValueCounts {
    let table: FrequencyTable<&str> = values.collect();
    table
        .sorted()
        .into_iter()
        .map(|(value, count)| ((*value).to_string(), count))
        .collect()
}

fn write_counts(out: &mut dyn Write, counts: &ValueCounts) -> io::Result<()> {
    let width = counts.iter().map(|(value, _)| value.chars().count()).max().unwrap_or(0);
    for (value, count) in counts {
        writeln!(out, "{value:<width$}  {count}")?;
    }
    Ok(())
}

impl StatsReporter for UserStatsReporter {
    type Stats = UserStats;

    fn name(&self) -> &'static str {
        "user_stats"
    }

    fn heading(&self) -> &'static str {
        "Calculating User Stats..."
    }

    fn compute(&self, table: &TripTable) -> UserStats {
        let schema = table.schema();

        let user_types = value_counts(table.iter().filter_map(|t| t.user_type.as_deref()));

        let genders = if schema.gender {
            let counts = value_counts(table.iter().filter_map(|t| t.gender.as_deref()));
            if counts.is_empty() {
                ColumnSummary::Empty
            } else {
                ColumnSummary::Present(counts)
            }
        } else {
            ColumnSummary::Unavailable
        };

        let birth_years = if schema.birth_year {
            let years: Vec<i32> = table.iter().filter_map(|t| t.birth_year).collect();
            let frequencies: FrequencyTable<i32> = years.iter().copied().collect();
            match (years.iter().min(), years.iter().max(), frequencies.mode()) {
                (Some(&earliest), Some(&most_recent), Some((&most_common, _))) => {
                    ColumnSummary::Present(BirthYearSummary {
                        earliest,
                        most_recent,
                        most_common,
                    })
                }
                _ => ColumnSummary::Empty,
            }
        } else {
            ColumnSummary::Unavailable
        };

        UserStats {
            user_types,
            genders,
            birth_years,
        }
    }

    fn render(&self, stats: &UserStats, out: &mut dyn Write) -> io::Result<()> {
        if stats.user_types.is_empty() {
            writeln!(out, "No user type data in the selected trips.")?;
        } else {
            writeln!(out, "User Type Counts:")?;
            write_counts(out, &stats.user_types)?;
        }
        writeln!(out)?;

        match &stats.genders {
            ColumnSummary::Unavailable => writeln!(out, "No Gender Data Available")?,
            ColumnSummary::Empty => writeln!(out, "No gender values in the selected trips.")?,
            ColumnSummary::Present(counts) => {
                writeln!(out, "Gender Counts:")?;
                write_counts(out, counts)?;
            }
        }
        writeln!(out)?;

        match &stats.birth_years {
            ColumnSummary::Unavailable => writeln!(out, "Birth Year Data Unavailable")?,
            ColumnSummary::Empty => writeln!(out, "No birth year values in the selected trips.")?,
            ColumnSummary::Present(years) => {
                writeln!(out, "Earliest birth year: {}", years.earliest)?;
                writeln!(out, "Most recent birth year: {}", years.most_recent)?;
                writeln!(out, "Most common birth year: {}", years.most_common)?;
            }
        }

        Ok(())
    }
}
