//! Human-scale rendering of durations and large numbers
//!
//! Calendar units are fixed approximations: a month is 30 days and a year is
//! 365 days.
//!
//! Under a year, zero units after the leading one are kept (`3600` renders as
//! `"1h 0m 0s"`, not `"1h"`), so the shape of the string only changes at unit
//! boundaries.

const MINUTE: u128 = 60;
const HOUR: u128 = 60 * MINUTE;
const DAY: u128 = 24 * HOUR;
const MONTH: u128 = 30 * DAY;
const YEAR: u128 = 365 * DAY;
const BILLION_YEAR: u128 = 1_000_000_000 * YEAR;
const TRILLION_YEAR: u128 = 1_000_000_000_000 * YEAR;

/// Sub-year units, largest first
const INTERVALS: [(&str, u128); 4] = [("d", DAY), ("h", HOUR), ("m", MINUTE), ("s", 1)];

/// Most units shown for durations under a year
const MAX_PARTS: usize = 3;

/// Magnitude suffixes, each 1000x the previous
const SUFFIXES: [&str; 4] = ["k", "M", "B", "T"];

/// Render a duration in seconds as a tiered human string.
///
/// Fractional seconds are truncated. Under a year the output starts at the
/// largest non-zero unit and shows at most three consecutive units
/// (`"1h 1m 1s"`, `"1d 1h 0m"`). From one year up it switches to years,
/// months and days, with fractional years for the billion and trillion tiers.
pub fn format_duration(seconds: f64) -> String {
    // `as` saturates and maps NaN to 0
    let seconds = seconds as u128;
    if seconds == 0 {
        return "0s".to_string();
    }

    if seconds >= TRILLION_YEAR {
        return scaled_years(seconds, TRILLION_YEAR, "T");
    }
    if seconds >= BILLION_YEAR {
        return scaled_years(seconds, BILLION_YEAR, "B");
    }
    if seconds >= YEAR {
        let (months, days) = months_and_days(seconds % YEAR);
        return format!("{} years {} months {} days", seconds / YEAR, months, days);
    }

    let mut remaining = seconds;
    let mut parts = Vec::with_capacity(MAX_PARTS);
    for (name, unit) in INTERVALS {
        let value = remaining / unit;
        if value > 0 || !parts.is_empty() {
            parts.push(format!("{}{}", value, name));
            remaining -= value * unit;
        }
        if parts.len() == MAX_PARTS {
            break;
        }
    }
    parts.join(" ")
}

fn scaled_years(seconds: u128, unit: u128, suffix: &str) -> String {
    let years = seconds as f64 / unit as f64;
    let (months, days) = months_and_days(seconds % unit);
    format!("{:.3} {} years {} months {} days", years, suffix, months, days)
}

fn months_and_days(remainder: u128) -> (u128, u128) {
    ((remainder / MONTH) % 12, (remainder % MONTH) / DAY)
}

/// Render a count or rate with a `k`/`M`/`B`/`T` suffix once it reaches 1000.
///
/// Below 1000 the value is printed as is; past the `T` range too.
pub fn format_magnitude(n: f64) -> String {
    let mut magnitude = n.abs();
    if magnitude < 1000.0 {
        return n.to_string();
    }

    let mut divisor = 1.0;
    for suffix in SUFFIXES {
        magnitude /= 1000.0;
        divisor *= 1000.0;
        if magnitude < 1000.0 {
            return format!("{:.2} {}", n / divisor, suffix);
        }
    }
    n.to_string()
}

/// Render elapsed seconds as `HH:MM:SS`; hours keep growing past 24
pub fn format_clock(seconds: f64) -> String {
    let total = seconds as u64;
    let (minutes, secs) = (total / 60, total % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}
