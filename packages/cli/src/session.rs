//! Loading a city's dataset with a progress spinner.

use std::path::Path;

use bikeshare_cli_utils::{IndicatifProgress, MultiProgress};
use bikeshare_source::SourceError;
use bikeshare_source::loader::load_city;
use bikeshare_source_models::FilterSpec;
use bikeshare_trip_models::Dataset;

/// Loads the dataset for `spec.city` from `data_dir`.
///
/// A fresh dataset is read on every call; nothing is cached between
/// analysis runs.
///
/// # Errors
///
/// Returns [`SourceError`] if the file is missing or malformed.
pub fn load(
    multi: &MultiProgress,
    data_dir: &Path,
    spec: &FilterSpec,
) -> Result<Dataset, SourceError> {
    let progress = IndicatifProgress::rows_spinner(multi, &format!("Loading {}", spec.city));
    let result = load_city(data_dir, spec.city, &progress);
    if result.is_err() {
        progress.finish_and_clear();
    }
    result
}
