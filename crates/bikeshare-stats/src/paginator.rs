//! Raw data browsing in fixed-size row windows.

use crate::table::TripTable;
use bikeshare_common::{format_timestamp, ColumnSchema, TripRecord};
use chrono::NaiveDateTime;
use comfy_table::{presets::ASCII_MARKDOWN, Cell, CellAlignment, ContentArrangement, Row, Table};
use std::fmt;

/// Rows per window unless configured otherwise.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Cursor over a trip table yielding consecutive windows of rows.
///
/// Every window but the last holds exactly `window_size` rows. Once exhausted
/// the cursor stays exhausted; browse again with a new paginator.
#[derive(Debug, Clone)]
pub struct TripPaginator<'a> {
    table: &'a TripTable,
    offset: usize,
    window_size: usize,
}

impl<'a> TripPaginator<'a> {
    /// Creates a paginator with the default window size.
    pub const fn new(table: &'a TripTable) -> Self {
        Self {
            table,
            offset: 0,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }

    /// Creates a paginator with a custom window size (at least 1).
    pub fn with_window_size(table: &'a TripTable, window_size: usize) -> Self {
        Self {
            table,
            offset: 0,
            window_size: window_size.max(1),
        }
    }

    /// Rows per window.
    pub const fn window_size(&self) -> usize {
        self.window_size
    }

    /// Index of the first row of the next window.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Whether another window is available.
    pub fn has_more(&self) -> bool {
        self.offset < self.table.len()
    }

    /// Next window of rows, or `None` once the table is exhausted.
    pub fn next_window(&mut self) -> Option<RawWindow<'a>> {
        if !self.has_more() {
            return None;
        }
        let start = self.offset;
        let end = (start + self.window_size).min(self.table.len());
        self.offset = end;

        Some(RawWindow {
            rows: &self.table.records()[start..end],
            schema: self.table.schema(),
        })
    }
}

impl<'a> Iterator for TripPaginator<'a> {
    type Item = RawWindow<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_window()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.table.len() - self.offset;
        let windows = remaining.div_ceil(self.window_size);
        (windows, Some(windows))
    }
}

/// A slice of consecutive rows, printable as a text table.
#[derive(Debug, Clone, Copy)]
pub struct RawWindow<'a> {
    rows: &'a [TripRecord],
    schema: ColumnSchema,
}

impl<'a> RawWindow<'a> {
    /// Rows of this window in table order.
    pub const fn rows(&self) -> &'a [TripRecord] {
        self.rows
    }

    /// Number of rows in this window.
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the window has no rows.
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn header(&self) -> Vec<&'static str> {
        let mut header = vec![
            "",
            "Start Time",
            "End Time",
            "Trip Duration",
            "Start Station",
            "End Station",
            "User Type",
        ];
        if self.schema.gender {
            header.push("Gender");
        }
        if self.schema.birth_year {
            header.push("Birth Year");
        }
        header.extend(["month", "day_of_week"]);
        header
    }

    /// Renders the window as a text table.
    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(ASCII_MARKDOWN);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(self.header());

        for record in self.rows {
            let mut row = Row::new();
            row.add_cell(Cell::new(&record.row_label).set_alignment(CellAlignment::Right));
            row.add_cell(Cell::new(timestamp_cell(record.start_time)));
            row.add_cell(Cell::new(timestamp_cell(record.end_time)));
            row.add_cell(Cell::new(number_cell(record.trip_duration)).set_alignment(CellAlignment::Right));
            row.add_cell(Cell::new(&record.start_station));
            row.add_cell(Cell::new(&record.end_station));
            row.add_cell(Cell::new(record.user_type.as_deref().unwrap_or("")));
            if self.schema.gender {
                row.add_cell(Cell::new(record.gender.as_deref().unwrap_or("")));
            }
            if self.schema.birth_year {
                let year = record.birth_year.map(|y| y.to_string()).unwrap_or_default();
                row.add_cell(Cell::new(year).set_alignment(CellAlignment::Right));
            }
            row.add_cell(Cell::new(number_cell(record.month())).set_alignment(CellAlignment::Right));
            row.add_cell(Cell::new(record.day_name().unwrap_or(MISSING_NUMBER)));
            table.add_row(row);
        }
        table
    }
}

const MISSING_TIME: &str = "NaT";
const MISSING_NUMBER: &str = "NaN";

fn timestamp_cell(value: Option<NaiveDateTime>) -> String {
    value.map_or_else(|| MISSING_TIME.to_string(), format_timestamp)
}

fn number_cell<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| MISSING_NUMBER.to_string(), |v| v.to_string())
}

impl fmt::Display for RawWindow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_table())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_common::test_utils::trip_fixtures::sample_trips;

    fn table() -> TripTable {
        TripTable::new(sample_trips(), ColumnSchema::with_demographics())
    }

    #[test]
    fn test_windows_of_five_then_remainder() {
        let table = table();
        let mut pager = TripPaginator::new(&table);
        assert!(pager.has_more());

        let first = pager.next_window().unwrap();
        assert_eq!(first.len(), 5);
        assert_eq!(pager.offset(), 5);

        let second = pager.next_window().unwrap();
        assert_eq!(second.len(), 3);
        assert_eq!(second.rows()[0].row_label, "5");

        assert!(!pager.has_more());
        assert!(pager.next_window().is_none());
        assert!(pager.next_window().is_none());
    }

    #[test]
    fn test_empty_table_has_no_windows() {
        let empty = TripTable::default();
        let mut pager = TripPaginator::new(&empty);
        assert!(!pager.has_more());
        assert!(pager.next_window().is_none());
    }

    #[test]
    fn test_size_hint_counts_windows() {
        let table = table();
        let pager = TripPaginator::with_window_size(&table, 3);
        assert_eq!(pager.size_hint(), (3, Some(3)));
        assert_eq!(pager.count(), 3);
    }

    #[test]
    fn test_zero_window_size_is_clamped() {
        let table = table();
        let pager = TripPaginator::with_window_size(&table, 0);
        assert_eq!(pager.window_size(), 1);
    }

    #[test]
    fn test_rendered_window_shows_columns() {
        let table = table();
        let mut pager = TripPaginator::new(&table);
        let text = pager.next_window().unwrap().to_string();

        assert!(text.contains("Start Station"));
        assert!(text.contains("Birth Year"));
        assert!(text.contains("day_of_week"));
        assert!(text.contains("2017-01-02 08:15:00"));
        assert!(text.contains("Canal St & Adams St"));
        assert!(text.contains("Monday"));
    }

    #[test]
    fn test_rendered_window_marks_missing_cells() {
        let trips = vec![TripRecord::from_cells("0", None, None, None, "A", "B")];
        let table = TripTable::new(trips, ColumnSchema::default());
        let text = TripPaginator::new(&table).next_window().unwrap().to_string();
        assert!(text.contains("NaT"));
        assert!(text.contains("NaN"));
    }

    #[test]
    fn test_rendered_window_omits_absent_columns() {
        let table = TripTable::new(sample_trips(), ColumnSchema::default());
        let mut pager = TripPaginator::new(&table);
        let text = pager.next_window().unwrap().to_string();
        assert!(!text.contains("Gender"));
        assert!(!text.contains("Birth Year"));
    }
}
