//! City registry: loads all city source definitions from embedded TOML
//! configs.
//!
//! Each `.toml` file in `packages/source/cities/` is baked into the binary
//! at compile time via [`include_str!`]. Supporting a new city means adding
//! a [`City`] variant, a TOML file, and an entry in the list below.

use bikeshare_source_models::{City, CitySource};

use crate::SourceError;

/// TOML configs embedded at compile time.
const CITY_TOMLS: &[(&str, &str)] = &[
    ("chicago", include_str!("../cities/chicago.toml")),
    (
        "new_york_city",
        include_str!("../cities/new_york_city.toml"),
    ),
    ("washington", include_str!("../cities/washington.toml")),
];

/// Returns all registered city sources, parsed from embedded TOML.
///
/// # Panics
///
/// Panics if any TOML config is malformed (this is a compile-time guarantee
/// since the configs are embedded).
#[must_use]
pub fn all_sources() -> Vec<CitySource> {
    CITY_TOMLS
        .iter()
        .map(|(name, toml_str)| {
            toml::from_str(toml_str).unwrap_or_else(|e| panic!("Failed to parse {name}.toml: {e}"))
        })
        .collect()
}

/// Looks up the source registered for `city`.
///
/// # Errors
///
/// Returns [`SourceError::Unregistered`] if no config names this city.
pub fn source_for(city: City) -> Result<CitySource, SourceError> {
    all_sources()
        .into_iter()
        .find(|s| s.city == city)
        .ok_or_else(|| SourceError::Unregistered {
            city: city.to_string(),
        })
}
