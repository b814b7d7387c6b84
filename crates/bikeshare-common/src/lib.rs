//! # Bikeshare Common
//!
//! Shared types, errors, logging and formatting utilities for the bikeshare
//! explorer.
//!
//! This crate provides the foundational types used across all other crates in
//! the workspace: the fixed city/month/day enumerations, the validated filter
//! selection and the trip record.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::*;
pub use logging::*;
pub use types::*;
pub use utils::*;
