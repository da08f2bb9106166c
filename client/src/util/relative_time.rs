//! Human-readable "updated N ago" labels for feed cards.
//!
//! Timestamp parsing needs the JS `Date` object and is hydrate-only; the
//! bucketing math is pure so label boundaries stay testable.

#[cfg(test)]
#[path = "relative_time_test.rs"]
mod relative_time_test;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const MONTH: f64 = 30.0 * DAY;
const YEAR: f64 = 365.0 * DAY;

fn plural(count: u64, unit: &str) -> String {
    if count == 1 { format!("1 {unit} ago") } else { format!("{count} {unit}s ago") }
}

/// Bucket an elapsed interval in milliseconds into a coarse label.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_elapsed_ms(elapsed_ms: f64) -> String {
    let seconds = (elapsed_ms / 1000.0).max(0.0);
    if seconds < MINUTE {
        return "just now".to_owned();
    }
    if seconds < HOUR {
        return plural((seconds / MINUTE) as u64, "minute");
    }
    if seconds < DAY {
        return plural((seconds / HOUR) as u64, "hour");
    }
    if seconds < MONTH {
        return plural((seconds / DAY) as u64, "day");
    }
    if seconds < YEAR {
        return plural((seconds / MONTH) as u64, "month");
    }
    plural((seconds / YEAR) as u64, "year")
}

/// Format a backend RFC 3339 timestamp relative to now.
///
/// Falls back to the raw string when parsing fails or off the browser.
#[must_use]
pub fn format_updated(updated_at: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let parsed = js_sys::Date::parse(updated_at);
        if parsed.is_nan() {
            return updated_at.to_owned();
        }
        format_elapsed_ms(js_sys::Date::now() - parsed)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        updated_at.to_owned()
    }
}
