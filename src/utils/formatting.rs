//! Formatting utilities used for terminal and export outputs.

/// Shown wherever an hours value is absent or not positive.
pub const HOURS_PLACEHOLDER: &str = "—";

/// Shown in report cells for missing text values.
pub const MISSING: &str = "-";

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn dim(s: &str) -> String {
    format!("\x1b[2m{}\x1b[0m", s)
}

/// Renders a duration given in (fractional) hours as `"Xh Ym"`.
///
/// - absent, zero, negative or NaN input → [`HOURS_PLACEHOLDER`]
/// - rounded to the nearest minute
/// - a zero component is omitted: `"2h"`, `"15m"`
/// - a tiny positive value still renders as `"0m"`
pub fn format_hours(hours: Option<f64>) -> String {
    let h = match hours {
        Some(h) if h > 0.0 => h,
        _ => return HOURS_PLACEHOLDER.to_string(),
    };

    let total_mins = (h * 60.0).round() as i64;
    let hrs = total_mins / 60;
    let mins = total_mins % 60;

    if hrs == 0 {
        format!("{mins}m")
    } else if mins == 0 {
        format!("{hrs}h")
    } else {
        format!("{hrs}h {mins}m")
    }
}

/// Returns the value, or `"-"` when it is missing or empty.
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => MISSING.to_string(),
    }
}

/// `"YES"` / `"No"` as used by the attendance sheet.
pub fn yes_no(flag: bool) -> &'static str {
    if flag { "YES" } else { "No" }
}

/// One decimal place, as in the weekly summary sheet. Ties round up
/// (`38.25` → `"38.3"`), not to even.
pub fn fixed1(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_or_missing_hours_render_placeholder() {
        assert_eq!(format_hours(None), HOURS_PLACEHOLDER);
        assert_eq!(format_hours(Some(0.0)), HOURS_PLACEHOLDER);
        assert_eq!(format_hours(Some(-1.0)), HOURS_PLACEHOLDER);
        assert_eq!(format_hours(Some(f64::NAN)), HOURS_PLACEHOLDER);
    }

    #[test]
    fn hours_and_minutes() {
        assert_eq!(format_hours(Some(1.5)), "1h 30m");
        assert_eq!(format_hours(Some(2.0)), "2h");
        assert_eq!(format_hours(Some(0.25)), "15m");
        assert_eq!(format_hours(Some(7.999)), "8h");
    }

    #[test]
    fn tiny_positive_value_rounds_to_zero_minutes() {
        assert_eq!(format_hours(Some(0.001)), "0m");
    }

    #[test]
    fn or_dash_treats_empty_as_missing() {
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("")), "-");
        assert_eq!(or_dash(Some("08:01 AM")), "08:01 AM");
    }

    #[test]
    fn fixed1_rounds_to_one_decimal() {
        assert_eq!(fixed1(38.0), "38.0");
        assert_eq!(fixed1(7.66), "7.7");
        assert_eq!(fixed1(38.25), "38.3");
        assert_eq!(fixed1(2.25), "2.3");
        assert_eq!(fixed1(0.25), "0.3");
    }
}
