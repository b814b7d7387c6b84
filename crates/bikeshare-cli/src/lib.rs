//! # Bikeshare CLI
//!
//! Interactive console explorer for US bikeshare trip data.
//!
//! This is the binary crate: it parses the command line, loads configuration,
//! and drives the prompt, filter and report loop over a console.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod args;
pub mod console;
pub mod error;
pub mod prompt;
pub mod session;

pub use args::*;
pub use console::*;
pub use error::*;
pub use prompt::*;
pub use session::*;
