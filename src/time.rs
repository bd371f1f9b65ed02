use chrono::NaiveTime;

/// Parse a same-day wall-clock time in `HH:MM` or `HH:MM:SS` format
///
/// Returns `None` for anything else rather than an error; itinerary times
/// are display data and a bad value only suppresses derived output.
#[must_use]
pub fn parse_wall_clock(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
}

/// Whole minutes from `from` to `to`, both parsed with [`parse_wall_clock`]
///
/// Returns 0 if either side fails to parse.
#[must_use]
pub fn minutes_between(from: &str, to: &str) -> i64 {
    match (parse_wall_clock(from), parse_wall_clock(to)) {
        (Some(from), Some(to)) => to.signed_duration_since(from).num_minutes(),
        _ => 0,
    }
}

/// Format a duration as `{h}h {m}m`, or `{m}m` when under an hour
#[must_use]
pub fn format_duration_minutes(minutes: i64) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    if hours > 0 {
        format!("{hours}h {rest}m")
    } else {
        format!("{rest}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_wall_clock_hm() {
        let time = parse_wall_clock("08:30").expect("should parse");
        assert_eq!(time.hour(), 8);
        assert_eq!(time.minute(), 30);
    }

    #[test]
    fn test_parse_wall_clock_hms_and_whitespace() {
        let time = parse_wall_clock(" 23:59:30 ").expect("should parse");
        assert_eq!(time.hour(), 23);
        assert_eq!(time.second(), 30);
    }

    #[test]
    fn test_parse_wall_clock_invalid() {
        assert!(parse_wall_clock("25:00").is_none());
        assert!(parse_wall_clock("12:60").is_none());
        assert!(parse_wall_clock("noon").is_none());
        assert!(parse_wall_clock("").is_none());
    }

    #[test]
    fn test_minutes_between() {
        assert_eq!(minutes_between("10:30", "12:00"), 90);
        assert_eq!(minutes_between("10:00", "10:00"), 0);
        assert_eq!(minutes_between("11:00", "10:15"), -45);
    }

    #[test]
    fn test_minutes_between_unparsed_is_zero() {
        assert_eq!(minutes_between("10:30", "later"), 0);
        assert_eq!(minutes_between("", "12:00"), 0);
    }

    #[test]
    fn test_format_duration_minutes() {
        assert_eq!(format_duration_minutes(90), "1h 30m");
        assert_eq!(format_duration_minutes(120), "2h 0m");
        assert_eq!(format_duration_minutes(59), "59m");
        assert_eq!(format_duration_minutes(5), "5m");
    }
}
