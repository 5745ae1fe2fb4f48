//! Splits a number of seconds into calendar-style units.

use bikeshare_analytics_models::DurationBreakdown;

const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Decomposes `total_seconds` by successive division by a day, an hour,
/// and a minute.
#[must_use]
pub const fn decompose(total_seconds: u64) -> DurationBreakdown {
    let days = total_seconds / SECONDS_PER_DAY;
    let rem = total_seconds % SECONDS_PER_DAY;
    let hours = rem / SECONDS_PER_HOUR;
    let rem = rem % SECONDS_PER_HOUR;
    let minutes = rem / SECONDS_PER_MINUTE;
    let seconds = rem % SECONDS_PER_MINUTE;

    DurationBreakdown {
        days,
        hours,
        minutes,
        seconds,
    }
}

/// Rounds a non-negative second count to the nearest whole second, ties
/// to even.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn round_seconds(seconds: f64) -> u64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds.round_ties_even() as u64
    } else {
        0
    }
}
