#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Result types for the trip statistics groups.
//!
//! Every individual statistic is wrapped in a [`Stat`] so that a missing
//! column or an empty filtered view is reported as a successful "no data"
//! outcome rather than an error.

use bikeshare_trip_models::{Column, Month, Weekday};

/// Outcome of one statistic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stat<T> {
    /// The statistic was computed.
    Value(T),
    /// The required columns exist but no record carried a value.
    NoData,
    /// The dataset does not have the named column.
    ColumnMissing(Column),
}

impl<T> Stat<T> {
    /// Returns the computed value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            Self::NoData | Self::ColumnMissing(_) => None,
        }
    }

    /// Whether this statistic produced a value.
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }
}

/// The most frequent value of a column and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popular<T> {
    pub value: T,
    pub count: u64,
}

/// A duration split into whole days, hours, minutes, and seconds.
///
/// `hours < 24`, `minutes < 60`, `seconds < 60`; `days` is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DurationBreakdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationBreakdown {
    /// Total number of seconds this breakdown represents.
    #[must_use]
    pub const fn total_seconds(&self) -> u64 {
        self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds
    }
}

impl std::fmt::Display for DurationBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} day(s), {} hour(s), {} minute(s), {} second(s)",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Count of trips for one category value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    /// Category value as it appears in the data (e.g. `"Subscriber"`).
    pub category: String,
    /// Number of trips.
    pub count: u64,
}

/// Most frequent times of travel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub month: Stat<Popular<Month>>,
    pub weekday: Stat<Popular<Weekday>>,
    /// Hour of day, 0-23.
    pub start_hour: Stat<Popular<u32>>,
}

/// Most popular stations and trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: Stat<Popular<String>>,
    pub end_station: Stat<Popular<String>>,
    /// `"<start> / <end>"` pair.
    pub trip: Stat<Popular<String>>,
}

/// Total and mean trip duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationSummary {
    /// Trips that carried a duration.
    pub trips: u64,
    /// Sum of durations, rounded to whole seconds.
    pub total_seconds: u64,
    pub total: DurationBreakdown,
    /// Arithmetic mean, rounded to whole seconds.
    pub mean_seconds: u64,
    pub mean: DurationBreakdown,
}

/// Earliest, most recent, and most common rider birth year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearSummary {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// Rider breakdowns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// Ordered by descending count, ties in first-seen order.
    pub user_types: Stat<Vec<CategoryCount>>,
    /// Ordered by descending count, ties in first-seen order.
    pub genders: Stat<Vec<CategoryCount>>,
    pub birth_years: Stat<BirthYearSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown_displays_every_unit() {
        let b = DurationBreakdown {
            days: 1,
            hours: 2,
            minutes: 3,
            seconds: 4,
        };
        assert_eq!(b.to_string(), "1 day(s), 2 hour(s), 3 minute(s), 4 second(s)");
        assert_eq!(b.total_seconds(), 93_784);
    }

    #[test]
    fn only_values_expose_a_result() {
        let missing: Stat<u32> = Stat::ColumnMissing(Column::Gender);
        assert_eq!(missing.value(), None);
        assert!(!missing.is_value());
        assert!(!Stat::<u32>::NoData.is_value());
        assert_eq!(Stat::Value(7).value(), Some(&7));
    }
}
