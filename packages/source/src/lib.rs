#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! City registry and trip dataset loading.
//!
//! Each supported city is described by an embedded TOML config (see
//! [`registry`]). [`loader::load_city`] resolves a city to its CSV file,
//! parses every row into a [`bikeshare_trip_models::TripRecord`], and
//! detects which optional columns the file carries.

pub mod loader;
pub mod parsing;
pub mod paths;
pub mod progress;
pub mod registry;

use std::path::PathBuf;

/// Errors that can occur while loading a city's trip data.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The data file could not be opened or read.
    #[error("Data source unavailable at {}: {source}", path.display())]
    DataSource {
        /// Path that was tried.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// CSV framing error (bad quoting, unreadable header, etc.).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A mandatory column is absent from the header row.
    #[error("Missing required column '{column}'")]
    MissingColumn {
        /// Literal header that was expected.
        column: String,
    },

    /// A row's start timestamp could not be parsed. The whole load is
    /// rejected.
    #[error("Malformed record at row {row}: cannot parse start time '{value}'")]
    MalformedRecord {
        /// 1-based data row number (the header is row 0).
        row: u64,
        /// The offending cell.
        value: String,
    },

    /// No registry entry exists for the requested city.
    #[error("No data source registered for {city}")]
    Unregistered {
        /// The city that was requested.
        city: String,
    },
}
