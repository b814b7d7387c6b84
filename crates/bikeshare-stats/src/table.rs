//! In-memory trip table and its filtering.

use bikeshare_common::{ColumnSchema, DayFilter, FilterSelection, MonthFilter, TripRecord};

/// Ordered trips of one city plus the optional columns its source carried.
///
/// Filtering returns a new table; the source is never modified and row order
/// is preserved.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TripTable {
    records: Vec<TripRecord>,
    schema: ColumnSchema,
}

impl TripTable {
    /// Creates a table from records in source order.
    pub fn new(records: Vec<TripRecord>, schema: ColumnSchema) -> Self {
        Self { records, schema }
    }

    /// Optional columns present in the source.
    pub const fn schema(&self) -> ColumnSchema {
        self.schema
    }

    /// All rows in order.
    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    /// Iterates over the rows in order.
    pub fn iter(&self) -> std::slice::Iter<'_, TripRecord> {
        self.records.iter()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows passing both filters, as a new table with the same schema.
    #[must_use]
    pub fn filter(&self, month: MonthFilter, day: DayFilter) -> Self {
        let records = self
            .records
            .iter()
            .filter(|record| month.matches(record.month()) && day.matches(record.day_of_week()))
            .cloned()
            .collect();
        Self::new(records, self.schema)
    }

    /// Rows passing a selection's month and day filters.
    #[must_use]
    pub fn filter_selection(&self, selection: &FilterSelection) -> Self {
        self.filter(selection.month, selection.day)
    }
}

impl<'a> IntoIterator for &'a TripTable {
    type Item = &'a TripRecord;
    type IntoIter = std::slice::Iter<'a, TripRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
