use chrono::{DateTime, Utc};

use crate::config::SECONDS_IN_DAY;

pub struct TimeUtils;

impl TimeUtils {
    pub const S_IN_MIN: i64 = 60;
    pub const S_IN_H: i64 = Self::S_IN_MIN * 60;
    pub const S_IN_D: i64 = SECONDS_IN_DAY;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}

// Time Helper functions

/// Midnight UTC of the calendar day containing `epoch_sec`.
/// None if chrono cannot represent the timestamp.
pub fn start_of_day_utc(epoch_sec: i64) -> Option<i64> {
    let dt = DateTime::<Utc>::from_timestamp(epoch_sec, 0)?;
    let midnight = dt.date_naive().and_hms_opt(0, 0, 0)?;
    Some(midnight.and_utc().timestamp())
}

/// Midnight UTC of the day after the one containing `epoch_sec`.
pub fn start_of_next_day_utc(epoch_sec: i64) -> Option<i64> {
    start_of_day_utc(epoch_sec)?.checked_add(TimeUtils::S_IN_D)
}

pub fn epoch_sec_to_utc(epoch_sec: i64) -> String {
    // Used for display purposes
    match DateTime::<Utc>::from_timestamp(epoch_sec, 0) {
        Some(dt) => format!("{}", dt.format(TimeUtils::STANDARD_TIME_FORMAT)),
        None => format!("<invalid timestamp {}>", epoch_sec),
    }
}

pub fn now_timestamp_secs() -> i64 {
    Utc::now().timestamp()
}

pub fn format_duration(secs: i64) -> String {
    if secs < 0 {
        return format!("-{}", format_duration(-secs));
    }
    if secs < 60 {
        return format!("{}s", secs);
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{}m", mins);
    }
    let hours = mins / 60;
    if hours < 24 {
        return format!("{}h {}m", hours, mins % 60);
    }
    let days = hours / 24;
    format!("{}d {}h", days, hours % 24)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_boundaries_bracket_the_timestamp() {
        // 2023-11-14 22:13:20 UTC
        let ts = 1_700_000_000;
        assert_eq!(start_of_day_utc(ts), Some(1_699_920_000));
        assert_eq!(start_of_next_day_utc(ts), Some(1_700_006_400));
    }

    #[test]
    fn midnight_is_its_own_day_start() {
        let midnight = 1_699_920_000;
        assert_eq!(start_of_day_utc(midnight), Some(midnight));
        assert_eq!(start_of_next_day_utc(midnight), Some(midnight + SECONDS_IN_DAY));
    }

    #[test]
    fn last_second_of_day_stays_in_day() {
        let last = 1_699_920_000 + SECONDS_IN_DAY - 1;
        assert_eq!(start_of_day_utc(last), Some(1_699_920_000));
    }

    #[test]
    fn formats_durations() {
        assert_eq!(format_duration(42), "42s");
        assert_eq!(format_duration(43_200), "12h 0m");
        assert_eq!(format_duration(90_061), "1d 1h");
        assert_eq!(format_duration(-120), "-2m");
    }

    #[test]
    fn formats_utc_display_string() {
        assert_eq!(epoch_sec_to_utc(1_699_920_000), "2023-11-14 00:00:00");
    }
}
