//! Canonical file paths for the trip data directory.

use std::path::{Path, PathBuf};

use bikeshare_source_models::CitySource;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "BIKESHARE_DATA_DIR";

/// Returns the workspace root directory.
///
/// Resolved at compile time from `CARGO_MANIFEST_DIR`; falls back to the
/// current directory if the ancestors cannot be walked.
#[must_use]
pub fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

/// Returns the data directory: `$BIKESHARE_DATA_DIR` if set, otherwise
/// `<project root>/data`.
#[must_use]
pub fn data_dir() -> PathBuf {
    std::env::var_os(DATA_DIR_ENV)
        .filter(|v| !v.is_empty())
        .map_or_else(|| project_root().join("data"), PathBuf::from)
}

/// Returns the path of a city's trip file inside `data_dir`.
#[must_use]
pub fn source_path(data_dir: &Path, source: &CitySource) -> PathBuf {
    data_dir.join(&source.file)
}
