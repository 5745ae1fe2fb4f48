//! Human-readable rendering of the statistic groups.

use std::time::Instant;

use bikeshare_analytics::stats::{duration_stats, station_stats, time_stats, user_stats};
use bikeshare_analytics_models::{
    CategoryCount, DurationSummary, Popular, Stat, StationStats, TimeStats, UserStats,
};
use bikeshare_source_models::FilterSpec;
use bikeshare_trip_models::TripView;

const RULE_WIDTH: usize = 40;

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// One-line summary of what is being analyzed.
#[must_use]
pub fn describe_selection(spec: &FilterSpec, trips: usize) -> String {
    format!(
        "{}: month={}, day={} ({trips} trips)",
        spec.city, spec.month, spec.day
    )
}

/// `label: value` for a computed statistic, or the matching "no data"
/// notice.
fn stat_line<T>(label: &str, stat: &Stat<T>, show: impl Fn(&T) -> String) -> String {
    match stat {
        Stat::Value(v) => format!("{label}: {}\n", show(v)),
        Stat::NoData => format!("{label}: no data (no matching trips)\n"),
        Stat::ColumnMissing(column) => format!(
            "No data for {column}. Skipping calculation and display of statistics on {}.\n",
            column.to_string().to_lowercase()
        ),
    }
}

fn popular<T: std::fmt::Display>(p: &Popular<T>) -> String {
    format!("{} ({} trips)", p.value, p.count)
}

fn counts_block(label: &str, stat: &Stat<Vec<CategoryCount>>) -> String {
    let Stat::Value(counts) = stat else {
        return stat_line(label, stat, |_| String::new());
    };
    let width = counts.iter().map(|c| c.category.len()).max().unwrap_or(0);
    let mut out = format!("{label}:\n");
    for c in counts {
        out.push_str(&format!("  {:<width$}  {}\n", c.category, c.count));
    }
    out
}

#[must_use]
pub fn render_time(stats: &TimeStats) -> String {
    [
        stat_line("Most Popular Month", &stats.month, popular),
        stat_line("Most Popular Day of Week", &stats.weekday, popular),
        stat_line("Most Popular Start Hour", &stats.start_hour, popular),
    ]
    .concat()
}

#[must_use]
pub fn render_stations(stats: &StationStats) -> String {
    let mut out = stat_line(
        "Most Commonly Used Start Station",
        &stats.start_station,
        popular,
    );
    out.push_str(&stat_line(
        "Most Commonly Used End Station",
        &stats.end_station,
        popular,
    ));
    // A missing station column was already reported above.
    if !matches!(stats.trip, Stat::ColumnMissing(_)) {
        out.push_str(&stat_line(
            "Most Frequent Combination of Start Station and End Station Trip",
            &stats.trip,
            popular,
        ));
    }
    out
}

#[must_use]
pub fn render_durations(stat: &Stat<DurationSummary>) -> String {
    match stat {
        Stat::Value(summary) => format!(
            "Total travel time: {}\nMean travel time: {}\n",
            summary.total, summary.mean
        ),
        other => stat_line("Travel time", other, |_| String::new()),
    }
}

#[must_use]
pub fn render_users(stats: &UserStats) -> String {
    let birth_years = match &stats.birth_years {
        Stat::Value(years) => format!(
            "Earliest birth year: {}\nMost recent birth year: {}\nMost common birth year: {}\n",
            years.earliest, years.most_recent, years.most_common
        ),
        other => stat_line("Birth year", other, |_| String::new()),
    };
    [
        counts_block("Counts of User Types", &stats.user_types),
        counts_block("Counts of Gender", &stats.genders),
        birth_years,
    ]
    .join("\n")
}

/// Computes one group, then prints its heading, body, and elapsed time.
fn timed_section<T>(
    heading: &str,
    compute: impl FnOnce() -> T,
    render: impl FnOnce(&T) -> String,
) {
    println!("\n{heading}...\n");
    let start = Instant::now();
    let stats = compute();
    let body = render(&stats);
    let elapsed = start.elapsed();
    log::debug!("{heading} took {elapsed:?}");
    print!("{body}");
    println!("\nThis took {} seconds.", elapsed.as_secs_f64());
    println!("{}", rule());
}

/// Computes and prints all four statistic groups for `view`.
pub fn print_statistics(view: &TripView<'_>) {
    timed_section(
        "Calculating The Most Frequent Times of Travel",
        || time_stats(view),
        render_time,
    );
    timed_section(
        "Calculating The Most Popular Stations and Trip",
        || station_stats(view),
        render_stations,
    );
    timed_section(
        "Calculating Trip Duration",
        || duration_stats(view),
        render_durations,
    );
    timed_section("Calculating User Stats", || user_stats(view), render_users);
}

#[cfg(test)]
mod tests {
    use bikeshare_analytics_models::BirthYearSummary;
    use bikeshare_source_models::City;
    use bikeshare_trip_models::{
        Column, Dataset, Month, SchemaCapabilities, Selection, TripRecord, Weekday,
    };
    use chrono::NaiveDate;

    use super::*;

    fn record(start: &str, end: &str) -> TripRecord {
        let at = NaiveDate::from_ymd_opt(2017, 6, 23)
            .and_then(|d| d.and_hms_opt(15, 9, 32))
            .unwrap();
        let mut r = TripRecord::new(at);
        r.start_station = Some(start.to_string());
        r.end_station = Some(end.to_string());
        r.trip_duration = Some(90_061.0);
        r.user_type = Some("Subscriber".to_string());
        r
    }

    #[test]
    fn renders_time_stats() {
        let dataset = Dataset::new(SchemaCapabilities::full(), vec![record("A", "B")]);
        let text = render_time(&time_stats(&dataset.view()));
        assert!(text.contains("Most Popular Month: June (1 trips)"));
        assert!(text.contains("Most Popular Day of Week: Friday (1 trips)"));
        assert!(text.contains("Most Popular Start Hour: 15 (1 trips)"));
    }

    #[test]
    fn renders_station_pair() {
        let dataset = Dataset::new(SchemaCapabilities::full(), vec![record("A", "B")]);
        let text = render_stations(&station_stats(&dataset.view()));
        assert!(text.contains("Trip: A / B (1 trips)"));
    }

    #[test]
    fn missing_end_station_skips_pair_line() {
        let schema = SchemaCapabilities::full().without(Column::EndStation);
        let dataset = Dataset::new(schema, vec![record("A", "B")]);
        let text = render_stations(&station_stats(&dataset.view()));
        assert!(text.contains("No data for End Station."));
        assert!(text.contains("Start Station: A"));
        assert!(!text.contains("Combination"));
    }

    #[test]
    fn renders_durations_as_breakdown() {
        let dataset = Dataset::new(SchemaCapabilities::full(), vec![record("A", "B")]);
        let text = render_durations(&duration_stats(&dataset.view()));
        assert!(
            text.contains("Total travel time: 1 day(s), 1 hour(s), 1 minute(s), 1 second(s)")
        );
    }

    #[test]
    fn empty_view_renders_no_data() {
        let dataset = Dataset::new(SchemaCapabilities::full(), Vec::new());
        let view = dataset.view();
        assert!(render_time(&time_stats(&view)).contains("Most Popular Month: no data"));
        assert!(render_durations(&duration_stats(&view)).contains("no data"));
        assert!(render_users(&user_stats(&view)).contains("Counts of Gender: no data"));
    }

    #[test]
    fn missing_gender_still_renders_other_user_stats() {
        let stats = UserStats {
            user_types: Stat::Value(vec![CategoryCount {
                category: "Subscriber".to_string(),
                count: 3,
            }]),
            genders: Stat::ColumnMissing(Column::Gender),
            birth_years: Stat::Value(BirthYearSummary {
                earliest: 1939,
                most_recent: 2016,
                most_common: 1989,
            }),
        };
        let text = render_users(&stats);
        assert!(text.contains(
            "No data for Gender. Skipping calculation and display of statistics on gender."
        ));
        assert!(text.contains("  Subscriber  3"));
        assert!(text.contains("Most common birth year: 1989"));
    }

    #[test]
    fn describes_selection() {
        let spec = FilterSpec {
            city: City::NewYorkCity,
            month: Selection::Only(Month::March),
            day: Selection::<Weekday>::All,
        };
        assert_eq!(
            describe_selection(&spec, 12),
            "New York City: month=March, day=all (12 trips)"
        );
    }
}
