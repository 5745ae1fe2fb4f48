//! Record builders shared by the unit tests.

use bikeshare_trip_models::{Dataset, SchemaCapabilities, TripRecord};
use chrono::NaiveDate;

/// A trip starting on the given date and hour, with no optional fields.
pub fn trip(year: i32, month: u32, day: u32, hour: u32) -> TripRecord {
    let start = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .unwrap();
    TripRecord::new(start)
}

/// A dataset carrying every optional column.
pub fn dataset_at(records: &[TripRecord]) -> Dataset {
    Dataset::new(SchemaCapabilities::full(), records.to_vec())
}
