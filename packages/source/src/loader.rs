//! CSV trip dataset loader.
//!
//! Reads a city's trip file in one pass, parses `Start Time` for every row,
//! and returns a [`Dataset`] whose [`SchemaCapabilities`] reflect the
//! header row. Any unparseable start time rejects the whole file.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use bikeshare_source_models::{City, CitySource};
use bikeshare_trip_models::{Column, Dataset, SchemaCapabilities, TripRecord};

use crate::SourceError;
use crate::parsing::{
    DEFAULT_TIMESTAMP_FORMATS, non_blank, parse_birth_year, parse_duration_secs, parse_timestamp,
};
use crate::progress::ProgressCallback;
use crate::{paths, registry};

/// Rows between progress updates.
const PROGRESS_BATCH: u64 = 10_000;

/// How to read one trip file.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// `Start Time` formats, tried in order.
    pub timestamp_formats: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            timestamp_formats: DEFAULT_TIMESTAMP_FORMATS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl LoadOptions {
    /// Builds options from a registry entry, falling back to defaults for
    /// anything the config leaves out.
    #[must_use]
    pub fn for_source(source: &CitySource) -> Self {
        let mut options = Self::default();
        if let Some(delim) = source.delimiter
            && delim.is_ascii()
        {
            options.delimiter = delim as u8;
        }
        if !source.timestamp_formats.is_empty() {
            options.timestamp_formats.clone_from(&source.timestamp_formats);
        }
        options
    }
}

/// Positions of the recognized columns within a header row.
struct ColumnIndex {
    start_time: usize,
    start_station: Option<usize>,
    end_station: Option<usize>,
    trip_duration: Option<usize>,
    user_type: Option<usize>,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &[String]) -> Result<Self, SourceError> {
        let find = |column: Column| {
            let name: &str = column.as_ref();
            headers.iter().position(|h| h.as_str() == name)
        };

        let start_time = find(Column::StartTime).ok_or_else(|| SourceError::MissingColumn {
            column: Column::StartTime.to_string(),
        })?;

        Ok(Self {
            start_time,
            start_station: find(Column::StartStation),
            end_station: find(Column::EndStation),
            trip_duration: find(Column::TripDuration),
            user_type: find(Column::UserType),
            gender: find(Column::Gender),
            birth_year: find(Column::BirthYear),
        })
    }
}

/// Resolves `city` through the registry and loads its file from
/// `data_dir`.
///
/// # Errors
///
/// Returns [`SourceError`] if the city is unregistered, the file cannot be
/// opened, or any row is malformed.
pub fn load_city(
    data_dir: &Path,
    city: City,
    progress: &Arc<dyn ProgressCallback>,
) -> Result<Dataset, SourceError> {
    let source = registry::source_for(city)?;
    let path = paths::source_path(data_dir, &source);
    load_file(&path, &LoadOptions::for_source(&source), progress)
}

/// Loads a trip file from disk.
///
/// # Errors
///
/// Returns [`SourceError::DataSource`] if the file cannot be opened, or any
/// error from [`load_from_reader`].
pub fn load_file(
    path: &Path,
    options: &LoadOptions,
    progress: &Arc<dyn ProgressCallback>,
) -> Result<Dataset, SourceError> {
    log::debug!("Opening trip file {}", path.display());
    let file = File::open(path).map_err(|source| SourceError::DataSource {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_reader(file, options, progress)
}

/// Parses a complete trip dataset from any reader.
///
/// # Errors
///
/// Returns [`SourceError::MissingColumn`] if there is no `Start Time`
/// header, [`SourceError::MalformedRecord`] on the first unparseable start
/// time, or [`SourceError::Csv`] if the CSV framing is broken.
pub fn load_from_reader<R: Read>(
    reader: R,
    options: &LoadOptions,
    progress: &Arc<dyn ProgressCallback>,
) -> Result<Dataset, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_owned())
        .collect();
    log::debug!("Trip file headers: {headers:?}");

    let index = ColumnIndex::from_headers(&headers)?;
    let schema = SchemaCapabilities::from_headers(headers.iter().map(String::as_str));

    let mut records = Vec::new();
    let mut unreadable_cells: u64 = 0;
    let mut row: u64 = 0;

    for result in reader.records() {
        let raw = result?;
        row += 1;

        let cell = |idx: Option<usize>| idx.and_then(|i| raw.get(i)).and_then(non_blank);

        let start = raw.get(index.start_time).unwrap_or("");
        let start_time = parse_timestamp(start, &options.timestamp_formats).ok_or_else(|| {
            SourceError::MalformedRecord {
                row,
                value: start.to_owned(),
            }
        })?;

        let mut record = TripRecord::new(start_time);
        record.start_station = cell(index.start_station).map(str::to_owned);
        record.end_station = cell(index.end_station).map(str::to_owned);
        record.user_type = cell(index.user_type).map(str::to_owned);
        record.gender = cell(index.gender).map(str::to_owned);

        if let Some(text) = cell(index.trip_duration) {
            record.trip_duration = parse_duration_secs(text);
            if record.trip_duration.is_none() {
                unreadable_cells += 1;
            }
        }
        if let Some(text) = cell(index.birth_year) {
            record.birth_year = parse_birth_year(text);
            if record.birth_year.is_none() {
                unreadable_cells += 1;
            }
        }

        records.push(record);

        if row % PROGRESS_BATCH == 0 {
            progress.inc(PROGRESS_BATCH);
        }
    }

    progress.inc(row % PROGRESS_BATCH);

    if unreadable_cells > 0 {
        log::warn!("{unreadable_cells} unreadable duration/birth year cell(s) treated as blank");
    }

    log::info!(
        "Loaded {} trips with columns: {}",
        records.len(),
        schema
            .present()
            .iter()
            .map(Column::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
    progress.finish(format!("Loaded {} trips", records.len()));

    Ok(Dataset::new(schema, records))
}
