//! Cell parsing for trip files.
//!
//! Timestamps are strict (a failure aborts the load); numeric cells are
//! lenient and yield `None` when they cannot be read.

use chrono::NaiveDateTime;

/// `Start Time` layouts tried when a city config lists none.
pub const DEFAULT_TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses a naive timestamp using the first matching format.
#[must_use]
pub fn parse_timestamp<S: AsRef<str>>(value: &str, formats: &[S]) -> Option<NaiveDateTime> {
    let value = value.trim();
    formats
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(value, f.as_ref()).ok())
}

/// Returns `None` for blank cells, otherwise the trimmed text.
#[must_use]
pub fn non_blank(value: &str) -> Option<&str> {
    let value = value.trim();
    if value.is_empty() { None } else { Some(value) }
}

/// Parses a trip duration in seconds. Accepts integer or decimal text;
/// negative and non-finite values are rejected.
#[must_use]
pub fn parse_duration_secs(value: &str) -> Option<f64> {
    let secs = value.trim().parse::<f64>().ok()?;
    (secs.is_finite() && secs >= 0.0).then_some(secs)
}

/// Parses a birth year written as `1989` or `1989.0`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn parse_birth_year(value: &str) -> Option<i32> {
    let value = value.trim();
    if let Ok(year) = value.parse::<i32>() {
        return Some(year);
    }
    let year = value.parse::<f64>().ok()?;
    if year.is_finite() && year.fract() == 0.0 && year.abs() < f64::from(i32::MAX) {
        return Some(year as i32);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_default_timestamp() {
        let dt = parse_timestamp("2017-01-01 09:07:57", DEFAULT_TIMESTAMP_FORMATS).unwrap();
        assert_eq!(dt.to_string(), "2017-01-01 09:07:57");
    }

    #[test]
    fn parses_timestamp_variants() {
        for s in [
            "2017-06-23 15:09:32.123",
            "2017-06-23T15:09:32",
            "2017-06-23 15:09",
        ] {
            assert!(
                parse_timestamp(s, DEFAULT_TIMESTAMP_FORMATS).is_some(),
                "failed on {s}"
            );
        }
    }

    #[test]
    fn custom_formats_replace_defaults() {
        let formats = vec!["%m/%d/%Y %H:%M".to_string()];
        assert!(parse_timestamp("06/23/2017 15:09", &formats).is_some());
        assert!(parse_timestamp("2017-06-23 15:09:32", &formats).is_none());
    }

    #[test]
    fn rejects_invalid_timestamp() {
        assert!(parse_timestamp("not-a-date", DEFAULT_TIMESTAMP_FORMATS).is_none());
        assert!(parse_timestamp("", DEFAULT_TIMESTAMP_FORMATS).is_none());
    }

    #[test]
    fn parses_durations() {
        assert_eq!(parse_duration_secs("739"), Some(739.0));
        assert_eq!(parse_duration_secs(" 1039.5 "), Some(1039.5));
        assert_eq!(parse_duration_secs("-4"), None);
        assert_eq!(parse_duration_secs("NaN"), None);
        assert_eq!(parse_duration_secs(""), None);
    }

    #[test]
    fn parses_birth_years() {
        assert_eq!(parse_birth_year("1992"), Some(1992));
        assert_eq!(parse_birth_year("1992.0"), Some(1992));
        assert_eq!(parse_birth_year("1992.5"), None);
        assert_eq!(parse_birth_year("unknown"), None);
    }

    #[test]
    fn blank_cells_are_none() {
        assert_eq!(non_blank("   "), None);
        assert_eq!(non_blank(" Subscriber "), Some("Subscriber"));
    }
}
