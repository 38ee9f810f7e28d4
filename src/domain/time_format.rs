const MINUTES_PER_HOUR: f64 = 60.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

pub fn twelve_hour(hour_of_day: i64) -> i64 {
    (hour_of_day.rem_euclid(12) + 11) % 12 + 1
}

pub fn format_hm(mins: f64) -> String {
    let hour = (mins / MINUTES_PER_HOUR).floor() as i64;
    let minute = mins.rem_euclid(MINUTES_PER_HOUR).floor() as i64;
    format!("{}:{minute:02}", twelve_hour(hour))
}

pub fn format_hm_24(mins: f64) -> String {
    let hour = ((mins / MINUTES_PER_HOUR).floor() as i64).rem_euclid(24);
    let minute = mins.rem_euclid(MINUTES_PER_HOUR).floor() as i64;
    format!("{hour}:{minute:02}")
}

pub fn format_ms(mins: f64) -> String {
    let whole = mins.floor();
    let minute = (whole as i64).rem_euclid(60);
    let second = ((mins - whole) * SECONDS_PER_MINUTE).floor() as i64;
    format!("{minute}:{second:02}")
}

pub fn format_hms(mins: f64) -> String {
    let value = mins.max(0.0);
    let whole = value.floor();
    let hour = (value / MINUTES_PER_HOUR).floor() as i64;
    let minute = (whole as i64) % 60;
    let second = ((value - whole) * SECONDS_PER_MINUTE).floor() as i64;
    format!("{hour}:{minute:02}:{second:02}")
}

pub fn format_duration_seconds(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours}:{minutes:02}:{secs:02}")
}
