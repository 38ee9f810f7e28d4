use crate::domain::time_format::twelve_hour;
use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ClockComponents {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
    /// Days since Sunday.
    pub weekday: u32,
    /// Zero-based month.
    pub month: u32,
    pub day: u32,
    pub year: i32,
}

impl ClockComponents {
    fn from_datetime<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self {
            hour: instant.hour(),
            minute: instant.minute(),
            second: instant.second(),
            // Leap seconds report nanoseconds past 1e9.
            millisecond: (instant.nanosecond() / 1_000_000).min(999),
            weekday: instant.weekday().num_days_from_sunday(),
            month: instant.month0(),
            day: instant.day(),
            year: instant.year(),
        }
    }

    pub fn minutes_since_midnight(&self) -> f64 {
        f64::from(self.hour) * 60.0
            + f64::from(self.minute)
            + f64::from(self.second) / 60.0
            + f64::from(self.millisecond) / 60_000.0
    }

    pub fn seconds_since_midnight(&self) -> f64 {
        self.minutes_since_midnight() * 60.0
    }

    pub fn meridiem(&self) -> &'static str {
        if self.hour < 12 { "AM" } else { "PM" }
    }

    pub fn time_12h(&self) -> String {
        format!(
            "{}:{:02}:{:02}",
            twelve_hour(i64::from(self.hour)),
            self.minute,
            self.second
        )
    }

    pub fn time_24h(&self) -> String {
        format!("{}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ClockReading {
    pub local: ClockComponents,
    pub utc: ClockComponents,
    pub unix_seconds: i64,
    pub utc_offset: String,
}

impl ClockReading {
    pub fn from_zoned<Tz: TimeZone>(now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let utc = now.with_timezone(&Utc);
        Self {
            local: ClockComponents::from_datetime(now),
            utc: ClockComponents::from_datetime(&utc),
            unix_seconds: utc.timestamp(),
            utc_offset: now.offset().to_string(),
        }
    }

    pub fn minutes_since_midnight(&self) -> f64 {
        self.local.minutes_since_midnight()
    }

    pub fn elapsed_seconds_local(&self) -> f64 {
        self.local.seconds_since_midnight()
    }

    pub fn elapsed_seconds_utc(&self) -> f64 {
        self.utc.seconds_since_midnight()
    }

    pub fn tenths(&self) -> String {
        format!(".{}", self.local.millisecond / 100)
    }

    pub fn long_date(&self) -> String {
        format!(
            "{}, {} {}, {}",
            WEEKDAYS[self.local.weekday as usize % 7],
            MONTHS[self.local.month as usize % 12],
            self.local.day,
            self.local.year
        )
    }

    pub fn numeric_date(&self) -> String {
        format!(
            "{}/{}/{}",
            self.local.month + 1,
            self.local.day,
            self.local.year
        )
    }

    pub fn title(&self, app_name: &str) -> String {
        format!(
            "{} {} \u{2022} {app_name}",
            self.local.time_12h(),
            self.local.meridiem()
        )
    }
}

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn fixed_time(value: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(value).expect("valid datetime")
    }

    #[test]
    fn reading_splits_local_and_utc() {
        let reading = ClockReading::from_zoned(&fixed_time("2026-10-19T00:30:15.250+09:00"));
        assert_eq!(reading.local.hour, 0);
        assert_eq!(reading.utc.hour, 15);
        assert_eq!(reading.utc.day, 18);
        assert_eq!(reading.local.time_12h(), "12:30:15");
        assert_eq!(reading.utc.time_12h(), "3:30:15");
        assert_eq!(reading.local.time_24h(), "0:30:15");
        assert_eq!(reading.local.meridiem(), "AM");
        assert_eq!(reading.utc.meridiem(), "PM");
        assert_eq!(reading.utc_offset, "+09:00");
    }

    #[test]
    fn minutes_since_midnight_includes_fractions() {
        let reading = ClockReading::from_zoned(&fixed_time("2026-10-19T09:15:30.600Z"));
        let expected = 9.0 * 60.0 + 15.0 + 30.0 / 60.0 + 600.0 / 60_000.0;
        assert!((reading.minutes_since_midnight() - expected).abs() < 1e-9);
        assert!((reading.elapsed_seconds_local() - expected * 60.0).abs() < 1e-6);
        assert_eq!(reading.tenths(), ".6");
    }

    #[test]
    fn dates_render_long_and_numeric() {
        let reading = ClockReading::from_zoned(&fixed_time("2026-10-19T13:05:00-04:00"));
        assert_eq!(reading.long_date(), "Monday, October 19, 2026");
        assert_eq!(reading.numeric_date(), "10/19/2026");
        assert_eq!(reading.unix_seconds, 1_792_429_500);
    }

    #[test]
    fn title_combines_time_meridiem_and_name() {
        let reading = ClockReading::from_zoned(&fixed_time("2026-10-19T13:05:09Z"));
        assert_eq!(reading.title("Clock App"), "1:05:09 PM \u{2022} Clock App");
    }
}
