//! The four statistic groups.
//!
//! Each statistic names the columns it needs. If the dataset lacks one of
//! them the statistic is [`Stat::ColumnMissing`]; if no record in the view
//! carries a value it is [`Stat::NoData`]. Neither is an error, and one
//! statistic being unavailable never blocks the others.

use bikeshare_analytics_models::{
    BirthYearSummary, CategoryCount, DurationSummary, Popular, Stat, StationStats, TimeStats,
    UserStats,
};
use bikeshare_trip_models::{Column, Month, SchemaCapabilities, TripView, Weekday};

use crate::duration::{decompose, round_seconds};
use crate::tally::Tally;

/// Joins the start and end station of a trip.
pub const TRIP_SEPARATOR: &str = " / ";

const START_STATION: &[Column] = &[Column::StartStation];
const END_STATION: &[Column] = &[Column::EndStation];
const STATION_PAIR: &[Column] = &[Column::StartStation, Column::EndStation];
const TRIP_DURATION: &[Column] = &[Column::TripDuration];
const USER_TYPE: &[Column] = &[Column::UserType];
const GENDER: &[Column] = &[Column::Gender];
const BIRTH_YEAR: &[Column] = &[Column::BirthYear];

/// Runs `compute` only if `schema` has every column in `required`.
fn requiring<T>(
    schema: SchemaCapabilities,
    required: &[Column],
    compute: impl FnOnce() -> Option<T>,
) -> Stat<T> {
    match schema.require(required) {
        Err(column) => Stat::ColumnMissing(column),
        Ok(()) => compute().map_or(Stat::NoData, Stat::Value),
    }
}

fn popular<K: Ord + Clone>(tally: &Tally<K>) -> Option<Popular<K>> {
    tally.mode().map(|(value, count)| Popular {
        value: value.clone(),
        count,
    })
}

fn text_mode(view: &TripView<'_>, column: Column) -> Option<Popular<String>> {
    let tally: Tally<&str> = view.iter().filter_map(|r| r.text(column)).collect();
    tally.mode().map(|(value, count)| Popular {
        value: (*value).to_owned(),
        count,
    })
}

fn category_counts(view: &TripView<'_>, column: Column) -> Option<Vec<CategoryCount>> {
    let tally: Tally<&str> = view.iter().filter_map(|r| r.text(column)).collect();
    if tally.is_empty() {
        return None;
    }
    Some(
        tally
            .ranked()
            .into_iter()
            .map(|(category, count)| CategoryCount {
                category: (*category).to_owned(),
                count,
            })
            .collect(),
    )
}

/// Most common month, weekday, and start hour.
///
/// Ties go to the smallest month number, the alphabetically first weekday
/// name, and the earliest hour.
#[must_use]
pub fn time_stats(view: &TripView<'_>) -> TimeStats {
    let mut months: Tally<u32> = Tally::new();
    let mut weekdays: Tally<&str> = Tally::new();
    let mut hours: Tally<u32> = Tally::new();

    for record in view.iter() {
        months.add(record.month.number());
        weekdays.add(record.weekday.as_ref());
        hours.add(record.start_hour());
    }

    let month = months.mode().and_then(|(number, count)| {
        Month::from_number(*number).map(|value| Popular { value, count })
    });
    let weekday = weekdays.mode().and_then(|(name, count)| {
        name.parse::<Weekday>()
            .ok()
            .map(|value| Popular { value, count })
    });

    TimeStats {
        month: month.map_or(Stat::NoData, Stat::Value),
        weekday: weekday.map_or(Stat::NoData, Stat::Value),
        start_hour: popular(&hours).map_or(Stat::NoData, Stat::Value),
    }
}

/// Most common start station, end station, and start/end pair.
#[must_use]
pub fn station_stats(view: &TripView<'_>) -> StationStats {
    let schema = view.schema();

    StationStats {
        start_station: requiring(schema, START_STATION, || {
            text_mode(view, Column::StartStation)
        }),
        end_station: requiring(schema, END_STATION, || text_mode(view, Column::EndStation)),
        trip: requiring(schema, STATION_PAIR, || {
            let tally: Tally<String> = view
                .iter()
                .filter_map(|r| {
                    Some(format!(
                        "{}{TRIP_SEPARATOR}{}",
                        r.start_station.as_deref()?,
                        r.end_station.as_deref()?
                    ))
                })
                .collect();
            popular(&tally)
        }),
    }
}

/// Total and mean trip duration.
#[must_use]
pub fn duration_stats(view: &TripView<'_>) -> Stat<DurationSummary> {
    requiring(view.schema(), TRIP_DURATION, || {
        let (trips, sum) = view
            .iter()
            .filter_map(|r| r.trip_duration)
            .fold((0_u64, 0.0_f64), |(n, total), secs| (n + 1, total + secs));
        if trips == 0 {
            return None;
        }

        #[allow(clippy::cast_precision_loss)]
        let mean = sum / trips as f64;
        let total_seconds = round_seconds(sum);
        let mean_seconds = round_seconds(mean);

        Some(DurationSummary {
            trips,
            total_seconds,
            total: decompose(total_seconds),
            mean_seconds,
            mean: decompose(mean_seconds),
        })
    })
}

/// Counts per user type and gender, and birth year extremes.
#[must_use]
pub fn user_stats(view: &TripView<'_>) -> UserStats {
    let schema = view.schema();

    UserStats {
        user_types: requiring(schema, USER_TYPE, || {
            category_counts(view, Column::UserType)
        }),
        genders: requiring(schema, GENDER, || category_counts(view, Column::Gender)),
        birth_years: requiring(schema, BIRTH_YEAR, || {
            let years: Tally<i32> = view.iter().filter_map(|r| r.birth_year).collect();
            Some(BirthYearSummary {
                earliest: *years.min()?,
                most_recent: *years.max()?,
                most_common: *years.mode()?.0,
            })
        }),
    }
}

#[cfg(test)]
mod tests {
    use bikeshare_trip_models::{Dataset, TripRecord};

    use super::*;
    use crate::fixtures::{dataset_at, trip};

    fn with_stations(mut record: TripRecord, start: &str, end: &str) -> TripRecord {
        record.start_station = Some(start.to_string());
        record.end_station = Some(end.to_string());
        record
    }

    fn rider(
        mut record: TripRecord,
        user_type: &str,
        gender: Option<&str>,
        year: i32,
    ) -> TripRecord {
        record.user_type = Some(user_type.to_string());
        record.gender = gender.map(str::to_string);
        record.birth_year = Some(year);
        record
    }

    fn timed(mut record: TripRecord, secs: f64) -> TripRecord {
        record.trip_duration = Some(secs);
        record
    }

    #[test]
    fn tied_hours_report_smallest() {
        let dataset = dataset_at(&[
            trip(2017, 1, 2, 5),
            trip(2017, 1, 2, 3),
            trip(2017, 1, 3, 5),
            trip(2017, 1, 3, 3),
        ]);
        for _ in 0..5 {
            let stats = time_stats(&dataset.view());
            assert_eq!(
                stats.start_hour,
                Stat::Value(Popular {
                    value: 3,
                    count: 2
                })
            );
        }
    }

    #[test]
    fn tied_weekdays_report_alphabetical_first() {
        // Friday 2017-01-06, Monday 2017-01-02.
        let dataset = dataset_at(&[
            trip(2017, 1, 2, 8),
            trip(2017, 1, 6, 8),
            trip(2017, 1, 6, 9),
            trip(2017, 1, 2, 9),
        ]);
        let stats = time_stats(&dataset.view());
        assert_eq!(stats.weekday.value().unwrap().value, Weekday::Friday);
    }

    #[test]
    fn popular_month_uses_calendar_number() {
        let dataset = dataset_at(&[
            trip(2017, 6, 1, 8),
            trip(2017, 3, 1, 8),
            trip(2017, 6, 2, 8),
            trip(2017, 3, 2, 8),
            trip(2017, 6, 3, 8),
        ]);
        let stats = time_stats(&dataset.view());
        assert_eq!(
            stats.month,
            Stat::Value(Popular {
                value: Month::June,
                count: 3
            })
        );
    }

    #[test]
    fn tied_months_report_earliest() {
        let dataset = dataset_at(&[
            trip(2017, 6, 1, 8),
            trip(2017, 3, 1, 8),
            trip(2017, 6, 2, 8),
            trip(2017, 3, 2, 8),
        ]);
        let stats = time_stats(&dataset.view());
        assert_eq!(
            stats.month,
            Stat::Value(Popular {
                value: Month::March,
                count: 2
            })
        );
    }

    #[test]
    fn station_pair_joins_with_separator() {
        let dataset = dataset_at(&[
            with_stations(trip(2017, 1, 2, 8), "A", "B"),
            with_stations(trip(2017, 1, 2, 9), "A", "B"),
        ]);
        let stats = station_stats(&dataset.view());
        assert_eq!(stats.trip.value().unwrap().value, "A / B");
        assert_eq!(stats.start_station.value().unwrap().value, "A");
        assert_eq!(stats.end_station.value().unwrap().value, "B");
    }

    #[test]
    fn station_pair_needs_both_columns() {
        let mut dataset = dataset_at(&[with_stations(trip(2017, 1, 2, 8), "A", "B")]);
        dataset.schema = dataset.schema.without(Column::EndStation);
        let stats = station_stats(&dataset.view());
        assert!(stats.start_station.is_value());
        assert_eq!(stats.end_station, Stat::ColumnMissing(Column::EndStation));
        assert_eq!(stats.trip, Stat::ColumnMissing(Column::EndStation));
    }

    #[test]
    fn durations_sum_and_mean() {
        let dataset = dataset_at(&[
            timed(trip(2017, 1, 2, 8), 90_000.0),
            timed(trip(2017, 1, 2, 9), 61.0),
            trip(2017, 1, 2, 10),
        ]);
        let summary = duration_stats(&dataset.view());
        let summary = summary.value().unwrap();
        assert_eq!(summary.trips, 2);
        assert_eq!(summary.total_seconds, 90_061);
        assert_eq!(
            (summary.total.days, summary.total.hours, summary.total.minutes, summary.total.seconds),
            (1, 1, 1, 1)
        );
        // 45030.5 rounds half to even.
        assert_eq!(summary.mean_seconds, 45_030);
    }

    #[test]
    fn durations_without_column_are_skipped() {
        let mut dataset = dataset_at(&[timed(trip(2017, 1, 2, 8), 60.0)]);
        dataset.schema = dataset.schema.without(Column::TripDuration);
        assert_eq!(
            duration_stats(&dataset.view()),
            Stat::ColumnMissing(Column::TripDuration)
        );
    }

    #[test]
    fn user_counts_descend_with_first_seen_ties() {
        let dataset = dataset_at(&[
            rider(trip(2017, 1, 2, 8), "Subscriber", Some("Male"), 1989),
            rider(trip(2017, 1, 2, 8), "Customer", Some("Female"), 1992),
            rider(trip(2017, 1, 2, 8), "Customer", None, 1989),
            rider(trip(2017, 1, 2, 8), "Subscriber", Some("Female"), 1939),
            rider(trip(2017, 1, 2, 8), "Dependent", Some("Female"), 2016),
        ]);
        let stats = user_stats(&dataset.view());

        let types: Vec<(&str, u64)> = stats
            .user_types
            .value()
            .unwrap()
            .iter()
            .map(|c| (c.category.as_str(), c.count))
            .collect();
        assert_eq!(
            types,
            vec![("Subscriber", 2), ("Customer", 2), ("Dependent", 1)]
        );

        let genders = stats.genders.value().unwrap();
        assert_eq!(genders[0].category, "Female");
        assert_eq!(genders[0].count, 3);
        assert_eq!(genders.iter().map(|c| c.count).sum::<u64>(), 4);

        assert_eq!(
            stats.birth_years,
            Stat::Value(BirthYearSummary {
                earliest: 1939,
                most_recent: 2016,
                most_common: 1989,
            })
        );
    }

    #[test]
    fn tied_birth_years_report_earliest_as_most_common() {
        let dataset = dataset_at(&[
            rider(trip(2017, 1, 2, 8), "Subscriber", Some("Male"), 1992),
            rider(trip(2017, 1, 2, 8), "Subscriber", Some("Male"), 1985),
            rider(trip(2017, 1, 2, 8), "Customer", Some("Female"), 1992),
            rider(trip(2017, 1, 2, 8), "Customer", Some("Female"), 1985),
            rider(trip(2017, 1, 2, 8), "Customer", Some("Female"), 2001),
        ]);
        let years = user_stats(&dataset.view()).birth_years;
        assert_eq!(years.value().unwrap().most_common, 1985);
    }

    #[test]
    fn missing_gender_keeps_other_user_stats() {
        let mut dataset = dataset_at(&[rider(trip(2017, 1, 2, 8), "Subscriber", None, 1980)]);
        dataset.schema = dataset.schema.without(Column::Gender);
        let stats = user_stats(&dataset.view());
        assert_eq!(stats.genders, Stat::ColumnMissing(Column::Gender));
        assert!(stats.user_types.is_value());
        assert!(stats.birth_years.is_value());
    }

    #[test]
    fn empty_view_reports_no_data_everywhere() {
        let dataset = dataset_at(&[]);
        let view = dataset.view();
        let time = time_stats(&view);
        assert_eq!(time.month, Stat::NoData);
        assert_eq!(time.weekday, Stat::NoData);
        assert_eq!(time.start_hour, Stat::NoData);
        assert_eq!(station_stats(&view).trip, Stat::NoData);
        assert_eq!(duration_stats(&view), Stat::NoData);
        let users = user_stats(&view);
        assert_eq!(users.user_types, Stat::NoData);
        assert_eq!(users.birth_years, Stat::NoData);
    }

    #[test]
    fn empty_view_still_reports_missing_columns() {
        let dataset = Dataset::new(
            SchemaCapabilities::default().with(Column::UserType),
            Vec::new(),
        );
        let view = dataset.view();
        let users = user_stats(&view);
        assert_eq!(users.user_types, Stat::NoData);
        assert_eq!(users.genders, Stat::ColumnMissing(Column::Gender));
        assert_eq!(
            station_stats(&view).start_station,
            Stat::ColumnMissing(Column::StartStation)
        );
    }
}
