//! Month and weekday filtering.
//!
//! Both predicates are optional and combine with AND. Record order is
//! preserved and an empty result is valid.

use bikeshare_source_models::FilterSpec;
use bikeshare_trip_models::{Dataset, Month, Selection, TripView, Weekday};

/// Keeps the records of `view` whose derived month and weekday match.
#[must_use]
pub fn filter<'a>(
    view: &TripView<'a>,
    month: Selection<Month>,
    day: Selection<Weekday>,
) -> TripView<'a> {
    if month == Selection::All && day == Selection::All {
        return view.clone();
    }
    let filtered = view.retain(|r| month.matches(&r.month) && day.matches(&r.weekday));
    log::debug!(
        "Filter month={month} day={day}: {} of {} trips kept",
        filtered.len(),
        view.len()
    );
    filtered
}

/// Applies the month and day of `spec` to a freshly loaded dataset.
#[must_use]
pub fn apply<'a>(dataset: &'a Dataset, spec: &FilterSpec) -> TripView<'a> {
    filter(&dataset.view(), spec.month, spec.day)
}
