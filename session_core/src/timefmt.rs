const MICROS_PER_SECOND: i64 = 1_000_000;
const MICROS_PER_DAY: i64 = 86_400 * MICROS_PER_SECOND;

/// Render a duration in seconds as `"<D> days HH:MM:SS[.ffffff]"`.
///
/// This is the shape the front-end parses (`"0 days 00:01:17.329000"`). The
/// fraction is printed with microsecond precision and dropped when it is zero.
/// Negative durations borrow a whole day: `-0.5` becomes `"-1 days +23:59:59.500000"`.
///
/// Callers must filter non-finite input first.
pub fn format_timedelta(seconds: f64) -> String {
    let total = (seconds * MICROS_PER_SECOND as f64).round() as i64;
    let days = total.div_euclid(MICROS_PER_DAY);
    let rem = total.rem_euclid(MICROS_PER_DAY);

    let micros = rem % MICROS_PER_SECOND;
    let secs = rem / MICROS_PER_SECOND;
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);

    let sign = if days < 0 { "+" } else { "" };
    let mut out = format!("{days} days {sign}{h:02}:{m:02}:{s:02}");
    if micros != 0 {
        out.push_str(&format!(".{micros:06}"));
    }
    out
}

/// `format_timedelta` over an optional provider value; NaN maps to `None`.
pub fn format_optional(seconds: Option<f64>) -> Option<String> {
    crate::types::finite(seconds).map(format_timedelta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lap_time_shape() {
        assert_eq!(format_timedelta(77.329), "0 days 00:01:17.329000");
        assert_eq!(format_timedelta(90.0), "0 days 00:01:30");
    }

    #[test]
    fn test_long_and_negative() {
        assert_eq!(format_timedelta(90_061.5), "1 days 01:01:01.500000");
        assert_eq!(format_timedelta(-0.5), "-1 days +23:59:59.500000");
    }

    #[test]
    fn test_optional_drops_nan() {
        assert_eq!(format_optional(Some(f64::NAN)), None);
        assert_eq!(format_optional(None), None);
        assert_eq!(format_optional(Some(31.2)).as_deref(), Some("0 days 00:00:31.200000"));
    }
}
