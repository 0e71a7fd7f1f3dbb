use chrono::Duration as ChronoDuration;
use serde_json::Value;

/// Rounds `value` to the nearest integer and clamps it into `[min, max]`.
/// NaN and negative infinity land on `min`, positive infinity on `max`.
#[must_use]
pub fn clamp_round(value: f64, min: i32, max: i32) -> i32 {
    if value.is_nan() {
        return min;
    }
    let rounded = value.round();
    if rounded <= f64::from(min) {
        min
    } else if rounded >= f64::from(max) {
        max
    } else {
        // in range, so the cast is exact
        rounded as i32
    }
}

#[must_use]
pub fn clamp_int(value: i64, min: i32, max: i32) -> i32 {
    i32::try_from(value.clamp(i64::from(min), i64::from(max))).unwrap_or(min)
}

/// Reads a number out of an untrusted JSON value. Numeric strings are
/// accepted, anything else is `None`.
#[must_use]
pub fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// Truncates to at most `max` characters (not bytes).
#[must_use]
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// `m:ss` under an hour, `h:mm:ss` otherwise.
#[must_use]
pub fn format_elapsed(td: ChronoDuration) -> String {
    let secs = td.num_seconds().max(0);

    const MINUTE: i64 = 60;
    const HOUR: i64 = 60 * MINUTE;

    let hours = secs / HOUR;
    let minutes = (secs % HOUR) / MINUTE;
    let seconds = secs % MINUTE;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_round_rounds_then_clamps() {
        assert_eq!(clamp_round(4.4, 0, 20), 4);
        assert_eq!(clamp_round(4.5, 0, 20), 5);
        assert_eq!(clamp_round(-3.0, 0, 20), 0);
        assert_eq!(clamp_round(99.0, 0, 20), 20);
        assert_eq!(clamp_round(f64::NAN, 3, 6), 3);
        assert_eq!(clamp_round(f64::INFINITY, 1, 18), 18);
        assert_eq!(clamp_round(f64::NEG_INFINITY, 1, 18), 1);
    }

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate_chars("Åsa Ödegård-Lindqvist!!", 20).chars().count(), 20);
        assert_eq!(truncate_chars("Bo", 20), "Bo");
    }

    #[test]
    fn elapsed_formats() {
        assert_eq!(format_elapsed(ChronoDuration::seconds(65)), "1:05");
        assert_eq!(format_elapsed(ChronoDuration::seconds(3725)), "1:02:05");
        assert_eq!(format_elapsed(ChronoDuration::seconds(-5)), "0:00");
    }
}
