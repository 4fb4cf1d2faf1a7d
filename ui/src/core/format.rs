//! Formatting helpers for presenting metrics.

use time::{format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime};

/// Score with one decimal place. Out-of-range values are shown as-is.
pub fn format_score(value: f64) -> String {
    format!("{value:.1}")
}

pub fn format_percent(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.1}%")
    } else {
        "0.0%".to_string()
    }
}

/// Abbreviated sub-metric value: `1.8M`, `912.5K`, `6.1`. Non-finite input renders `"0"`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{value:.1}")
    }
}

/// [`format_number`] for values that may be absent.
pub fn format_optional(value: Option<f64>) -> String {
    value.map(format_number).unwrap_or_else(|| "0".to_string())
}

/// Compact `date · HH:MM` label for a calculation timestamp.
///
/// Accepts RFC 3339 as well as the naive ISO strings the scoring service
/// emits (no offset, microsecond fraction).
pub fn format_timestamp(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
        let date = parsed.format(&format_description!("[year]-[month]-[day]"));
        let clock = parsed.format(&format_description!("[hour]:[minute]"));
        if let (Ok(date), Ok(clock)) = (date, clock) {
            return format!("{date} · {clock}");
        }
    }

    let (date, time_segment) = raw.split_once('T').unwrap_or((raw, ""));
    let primary_time = time_segment
        .split(['.', 'Z', '+'])
        .next()
        .unwrap_or(time_segment);
    let time_display: String = primary_time.chars().take(5).collect();

    if time_display.is_empty() {
        date.to_string()
    } else {
        format!("{date} · {time_display}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbreviates_large_values() {
        assert_eq!(format_number(1_843_210.0), "1.8M");
        assert_eq!(format_number(912_455.0), "912.5K");
        assert_eq!(format_number(1_000.0), "1.0K");
        assert_eq!(format_number(999.94), "999.9");
        assert_eq!(format_number(6.1), "6.1");
        assert_eq!(format_number(0.0), "0.0");
    }

    #[test]
    fn malformed_values_render_zero() {
        assert_eq!(format_number(f64::NAN), "0");
        assert_eq!(format_number(f64::INFINITY), "0");
        assert_eq!(format_optional(None), "0");
        assert_eq!(format_optional(Some(12.0)), "12.0");
    }

    #[test]
    fn score_label_keeps_raw_value() {
        assert_eq!(format_score(37.2), "37.2");
        assert_eq!(format_score(104.26), "104.3");
        assert_eq!(format_score(-3.0), "-3.0");
        assert_eq!(format_percent(75.0), "75.0%");
    }

    #[test]
    fn timestamps_are_compacted() {
        assert_eq!(
            format_timestamp("2024-03-28T14:05:31.402117"),
            "2024-03-28 · 14:05"
        );
        assert_eq!(
            format_timestamp("2024-03-28T14:05:31Z"),
            "2024-03-28 · 14:05"
        );
        assert_eq!(format_timestamp("2024-03-28"), "2024-03-28");
    }
}
