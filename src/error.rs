//! Defines custom error types for the application.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
/// Error type returned when a conversion run fails.
pub enum ConvertError {
    #[error("Failed to read input file: {}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read version file: {} (pass the version as the third argument or use --version-file)", .path.display())]
    ReadVersion {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid conversion endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Request to the conversion endpoint failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to write output file: {}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
