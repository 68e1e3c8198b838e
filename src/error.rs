// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Error type for the library side of the pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O errors
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Transport-level failures talking to the feature service
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The feature service answered, but not with something usable
    #[error("Query error: {0}")]
    Query(String),

    /// Reference table / options problems
    #[error("Configuration error: {0}")]
    Config(String),

    /// Neither collector output exists, so there is nothing to merge
    #[error("Missing input: neither {} nor {} exists. Run the collectors first.", settlements.display(), commercial.display())]
    MissingInputs {
        settlements: PathBuf,
        commercial: PathBuf,
    },
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
