#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! City data source configuration types and the validated filter selection.
//!
//! Each supported [`City`] has exactly one [`CitySource`] describing where
//! its trip file lives. A [`FilterSpec`] is the (city, month, day) triple a
//! user picks before an analysis run.

use std::str::FromStr;

use bikeshare_trip_models::{FilterField, InvalidFilterError, Month, Selection, Weekday};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A city with a published bike-share trip dataset.
///
/// Parses case-insensitively from its display name (`"new york city"`) or
/// its identifier (`"new_york_city"`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum City {
    #[strum(to_string = "Chicago")]
    Chicago,
    #[strum(to_string = "New York City", serialize = "new_york_city", serialize = "nyc")]
    NewYorkCity,
    #[strum(to_string = "Washington", serialize = "dc")]
    Washington,
}

impl City {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Chicago, Self::NewYorkCity, Self::Washington]
    }

    /// Stable identifier used in registry configs and file names.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Chicago => "chicago",
            Self::NewYorkCity => "new_york_city",
            Self::Washington => "washington",
        }
    }
}

/// Where a city's trip file lives and how to read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitySource {
    /// Which city this source serves.
    pub city: City,
    /// Human-readable name (e.g., "Divvy (Chicago, IL)").
    pub name: String,
    /// File name relative to the data directory.
    pub file: String,
    /// Field delimiter; defaults to a comma.
    #[serde(default)]
    pub delimiter: Option<char>,
    /// `chrono` format strings tried in order for `Start Time`. Empty means
    /// the built-in defaults.
    #[serde(default)]
    pub timestamp_formats: Vec<String>,
}

/// A validated (city, month, day) selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilterSpec {
    pub city: City,
    pub month: Selection<Month>,
    pub day: Selection<Weekday>,
}

impl FilterSpec {
    /// Validates raw user input.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFilterError`] for the first value that is not in
    /// its enumeration.
    pub fn parse(city: &str, month: &str, day: &str) -> Result<Self, InvalidFilterError> {
        Ok(Self {
            city: parse_city(city)?,
            month: month.parse()?,
            day: day.parse()?,
        })
    }
}

/// Parses a city name or identifier.
///
/// # Errors
///
/// Returns [`InvalidFilterError`] if the value names no supported city.
pub fn parse_city(value: &str) -> Result<City, InvalidFilterError> {
    City::from_str(value.trim()).map_err(|_| InvalidFilterError::new(FilterField::City, value))
}
