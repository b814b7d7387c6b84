//! # Bikeshare Stats
//!
//! Loading, filtering and summarizing bikeshare trip data.
//!
//! A [`DatasetLoader`] turns a city's CSV record source into a [`TripTable`];
//! the four [`StatsReporter`] implementations print the time, station,
//! duration and user statistics, and [`TripPaginator`] walks the raw rows in
//! fixed-size windows.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod frequency;
pub mod loader;
pub mod paginator;
pub mod report;
pub mod table;
pub mod traits;

// Statistic groups
pub mod duration_stats;
pub mod station_stats;
pub mod time_stats;
pub mod user_stats;

pub use frequency::*;
pub use loader::*;
pub use paginator::*;
pub use report::*;
pub use table::*;
pub use traits::*;

pub use duration_stats::*;
pub use station_stats::*;
pub use time_stats::*;
pub use user_stats::*;
