//! Application-wide error types using thiserror.

use bikeshare_common::BikeshareError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Domain error from loading or configuration.
    #[error(transparent)]
    Bikeshare(#[from] BikeshareError),

    /// Console I/O error.
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Whether the user closed the input stream, which ends the session normally.
    pub const fn is_input_closed(&self) -> bool {
        matches!(self, Self::Bikeshare(BikeshareError::InputClosed))
    }
}

/// Result type for the command line application.
pub type CliResult<T> = Result<T, CliError>;
