#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Trip record types, calendar enumerations, and the per-dataset schema
//! capability descriptor.
//!
//! Every city loader produces a [`Dataset`] of [`TripRecord`]s. Optional
//! columns are tracked once per dataset in [`SchemaCapabilities`] rather
//! than per record, so statistics can decide up front whether they apply.

use std::str::FromStr;

use chrono::{Datelike as _, NaiveDateTime, Timelike as _};
use strum_macros::{AsRefStr, Display, EnumString};

/// Calendar month, numbered from January = 1.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    /// Returns the 1-based calendar index of this month.
    #[must_use]
    pub const fn number(self) -> u32 {
        self as u32
    }

    /// Creates a month from its 1-based calendar index.
    #[must_use]
    pub const fn from_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(Self::January),
            2 => Some(Self::February),
            3 => Some(Self::March),
            4 => Some(Self::April),
            5 => Some(Self::May),
            6 => Some(Self::June),
            7 => Some(Self::July),
            8 => Some(Self::August),
            9 => Some(Self::September),
            10 => Some(Self::October),
            11 => Some(Self::November),
            12 => Some(Self::December),
            _ => None,
        }
    }

    /// Returns all variants of this enum in calendar order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::January,
            Self::February,
            Self::March,
            Self::April,
            Self::May,
            Self::June,
            Self::July,
            Self::August,
            Self::September,
            Self::October,
            Self::November,
            Self::December,
        ]
    }
}

/// Day of the week. Displays in title case (`"Monday"`) and parses
/// case-insensitively.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Returns all variants of this enum, Monday first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
            Self::Sunday,
        ]
    }

    /// Converts a [`chrono::Weekday`].
    #[must_use]
    pub const fn from_chrono(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }
}

/// Literal column headers recognized in a city trip file.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, AsRefStr,
)]
pub enum Column {
    #[strum(to_string = "Start Time")]
    StartTime,
    #[strum(to_string = "Start Station")]
    StartStation,
    #[strum(to_string = "End Station")]
    EndStation,
    #[strum(to_string = "Trip Duration")]
    TripDuration,
    #[strum(to_string = "User Type")]
    UserType,
    #[strum(to_string = "Gender")]
    Gender,
    #[strum(to_string = "Birth Year")]
    BirthYear,
}

impl Column {
    /// Columns a dataset may or may not carry.
    #[must_use]
    pub const fn optional() -> &'static [Self] {
        &[
            Self::StartStation,
            Self::EndStation,
            Self::TripDuration,
            Self::UserType,
            Self::Gender,
            Self::BirthYear,
        ]
    }
}

/// Which optional columns a dataset carries.
///
/// Computed once from the header row; every record in the dataset shares
/// it. `Start Time` is mandatory and therefore always reported present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct SchemaCapabilities {
    pub start_station: bool,
    pub end_station: bool,
    pub trip_duration: bool,
    pub user_type: bool,
    pub gender: bool,
    pub birth_year: bool,
}

impl SchemaCapabilities {
    /// Every optional column present.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            start_station: true,
            end_station: true,
            trip_duration: true,
            user_type: true,
            gender: true,
            birth_year: true,
        }
    }

    /// Detects capabilities from a header row. Unrecognized headers are
    /// ignored.
    #[must_use]
    pub fn from_headers<'a>(headers: impl IntoIterator<Item = &'a str>) -> Self {
        let mut caps = Self::default();
        for header in headers {
            if let Ok(column) = Column::from_str(header.trim()) {
                caps = caps.with(column);
            }
        }
        caps
    }

    /// Returns a copy with `column` marked present.
    #[must_use]
    pub const fn with(mut self, column: Column) -> Self {
        match column {
            Column::StartTime => {}
            Column::StartStation => self.start_station = true,
            Column::EndStation => self.end_station = true,
            Column::TripDuration => self.trip_duration = true,
            Column::UserType => self.user_type = true,
            Column::Gender => self.gender = true,
            Column::BirthYear => self.birth_year = true,
        }
        self
    }

    /// Returns a copy with `column` marked absent.
    #[must_use]
    pub const fn without(mut self, column: Column) -> Self {
        match column {
            Column::StartTime => {}
            Column::StartStation => self.start_station = false,
            Column::EndStation => self.end_station = false,
            Column::TripDuration => self.trip_duration = false,
            Column::UserType => self.user_type = false,
            Column::Gender => self.gender = false,
            Column::BirthYear => self.birth_year = false,
        }
        self
    }

    /// Whether `column` is present.
    #[must_use]
    pub const fn has(&self, column: Column) -> bool {
        match column {
            Column::StartTime => true,
            Column::StartStation => self.start_station,
            Column::EndStation => self.end_station,
            Column::TripDuration => self.trip_duration,
            Column::UserType => self.user_type,
            Column::Gender => self.gender,
            Column::BirthYear => self.birth_year,
        }
    }

    /// Checks that every column in `required` is present.
    ///
    /// # Errors
    ///
    /// Returns the first missing column.
    pub fn require(&self, required: &[Column]) -> Result<(), Column> {
        required
            .iter()
            .find(|c| !self.has(**c))
            .map_or(Ok(()), |c| Err(*c))
    }

    /// Lists the optional columns that are present.
    #[must_use]
    pub fn present(&self) -> Vec<Column> {
        Column::optional()
            .iter()
            .copied()
            .filter(|c| self.has(*c))
            .collect()
    }
}

/// A single bike-share trip.
///
/// `month` and `weekday` are derived from `start_time` on construction and
/// are never read from the source file. Optional fields are `None` either
/// because the dataset lacks the column or because the cell was blank.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub month: Month,
    pub weekday: Weekday,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    /// Trip duration in seconds.
    pub trip_duration: Option<f64>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

impl TripRecord {
    /// Creates a record with no optional fields, deriving the calendar
    /// attributes from `start_time`.
    #[must_use]
    pub fn new(start_time: NaiveDateTime) -> Self {
        let month = Month::from_number(start_time.month()).unwrap_or(Month::January);
        Self {
            start_time,
            month,
            weekday: Weekday::from_chrono(start_time.weekday()),
            start_station: None,
            end_station: None,
            trip_duration: None,
            user_type: None,
            gender: None,
            birth_year: None,
        }
    }

    /// Hour of day (0-23) the trip started.
    #[must_use]
    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }

    /// Returns the optional text value stored for `column`, if any.
    #[must_use]
    pub fn text(&self, column: Column) -> Option<&str> {
        match column {
            Column::StartStation => self.start_station.as_deref(),
            Column::EndStation => self.end_station.as_deref(),
            Column::UserType => self.user_type.as_deref(),
            Column::Gender => self.gender.as_deref(),
            Column::StartTime | Column::TripDuration | Column::BirthYear => None,
        }
    }
}

/// All trips loaded for one city, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub schema: SchemaCapabilities,
    pub records: Vec<TripRecord>,
}

impl Dataset {
    #[must_use]
    pub const fn new(schema: SchemaCapabilities, records: Vec<TripRecord>) -> Self {
        Self { schema, records }
    }

    /// Borrows every record as an unfiltered view.
    #[must_use]
    pub fn view(&self) -> TripView<'_> {
        TripView {
            schema: self.schema,
            records: self.records.iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// An order-preserving subset of a [`Dataset`]'s records.
#[derive(Debug, Clone, PartialEq)]
pub struct TripView<'a> {
    schema: SchemaCapabilities,
    records: Vec<&'a TripRecord>,
}

impl<'a> TripView<'a> {
    #[must_use]
    pub const fn schema(&self) -> SchemaCapabilities {
        self.schema
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a TripRecord> + '_ {
        self.records.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keeps the records matching `predicate`, preserving order.
    #[must_use]
    pub fn retain(&self, predicate: impl Fn(&TripRecord) -> bool) -> Self {
        Self {
            schema: self.schema,
            records: self
                .records
                .iter()
                .copied()
                .filter(|r| predicate(r))
                .collect(),
        }
    }

    /// Returns the `size` records starting at `offset`, or fewer at the
    /// end of the view.
    #[must_use]
    pub fn page(&self, offset: usize, size: usize) -> &[&'a TripRecord] {
        let start = offset.min(self.records.len());
        let end = offset.saturating_add(size).min(self.records.len());
        &self.records[start..end]
    }
}

/// A filter choice: everything, or a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    /// Whether `value` passes this selection.
    #[must_use]
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(value) => write!(f, "{value}"),
        }
    }
}

/// Keyword accepted in place of a month or day name.
pub const ALL_KEYWORD: &str = "all";

fn parse_selection<T: FromStr>(
    value: &str,
    field: FilterField,
) -> Result<Selection<T>, InvalidFilterError> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case(ALL_KEYWORD) {
        return Ok(Selection::All);
    }
    T::from_str(trimmed)
        .map(Selection::Only)
        .map_err(|_| InvalidFilterError::new(field, value))
}

impl FromStr for Selection<Month> {
    type Err = InvalidFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_selection(s, FilterField::Month)
    }
}

impl FromStr for Selection<Weekday> {
    type Err = InvalidFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_selection(s, FilterField::Day)
    }
}

/// The filter input a rejected value was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum FilterField {
    City,
    Month,
    Day,
}

/// Error returned when a city, month, or day value is not in its
/// recognized enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFilterError {
    /// Which input was rejected.
    pub field: FilterField,
    /// The rejected value, as supplied.
    pub value: String,
}

impl InvalidFilterError {
    #[must_use]
    pub fn new(field: FilterField, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

impl std::fmt::Display for InvalidFilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {} '{}'", self.field, self.value)
    }
}

impl std::error::Error for InvalidFilterError {}
