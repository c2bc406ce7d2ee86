//! Error types for the `localegate` probe binary.
//!
//! The startup gate itself never fails; these errors cover the surface around
//! it: loading configuration and writing the report.

use localegate::ConfigError;
use thiserror::Error;

/// Errors that stop the probe before or after the startup gate runs.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Failed to write the report.
    #[error("failed to write output")]
    WriteFailed {
        /// The underlying error that caused the write to fail.
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(source: std::io::Error) -> Self {
        Self::WriteFailed { source }
    }
}

/// Result type for the probe binary.
pub type Result<T> = std::result::Result<T, CliError>;
