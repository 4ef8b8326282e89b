use chrono::{Local, NaiveDateTime};

const PERIODS: [(&str, i64); 7] = [
    ("year", 60 * 60 * 24 * 365),
    ("month", 60 * 60 * 24 * 30),
    ("week", 60 * 60 * 24 * 7),
    ("day", 60 * 60 * 24),
    ("hour", 60 * 60),
    ("minute", 60),
    ("second", 1),
];

/// Render a duration as its largest whole unit: `1 hour`, `3 days`, `2 weeks`.
pub fn humanize_seconds(seconds: i64) -> String {
    for (name, period) in PERIODS {
        if seconds >= period {
            let value = seconds / period;
            let plural = if value > 1 { "s" } else { "" };
            return format!("{value} {name}{plural}");
        }
    }
    "0 seconds".to_string()
}

/// How long ago `then` was, measured against the local clock.
pub fn time_since(then: NaiveDateTime) -> String {
    let elapsed = Local::now().naive_local() - then;
    humanize_seconds(elapsed.num_seconds())
}

/// Playtime formatting for chat output: `12h 34min`.
pub fn format_playtime(seconds: u64) -> String {
    format!("{}h {}min", seconds / 3600, (seconds % 3600) / 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_the_largest_whole_unit() {
        assert_eq!(humanize_seconds(5400), "1 hour");
        assert_eq!(humanize_seconds(60 * 60 * 24 * 3), "3 days");
        assert_eq!(humanize_seconds(61), "1 minute");
        assert_eq!(humanize_seconds(1), "1 second");
    }

    #[test]
    fn pluralizes_only_above_one() {
        assert_eq!(humanize_seconds(60 * 60 * 24 * 14), "2 weeks");
        assert_eq!(humanize_seconds(60 * 60 * 24 * 7), "1 week");
    }

    #[test]
    fn zero_and_negative_are_zero_seconds() {
        assert_eq!(humanize_seconds(0), "0 seconds");
        assert_eq!(humanize_seconds(-5), "0 seconds");
    }

    #[test]
    fn playtime_is_hours_and_minutes() {
        assert_eq!(format_playtime(0), "0h 0min");
        assert_eq!(format_playtime(3660), "1h 1min");
        assert_eq!(format_playtime(45_000), "12h 30min");
    }
}
