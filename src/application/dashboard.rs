use crate::domain::analog::{ClockFace, ClockHands, TickLine};
use crate::domain::clock::ClockReading;
use crate::domain::layout::{LayoutItem, layout_blocks};
use crate::domain::models::{DayOff, ScheduleState};
use crate::domain::progress::{Activity, ScheduleProgress, compute_progress, current_activity};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::sunrise::{SunriseDisplay, SunriseInfo};
use chrono::{DateTime, TimeZone};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardLayout {
    pub timeline: Vec<LayoutItem>,
    pub tick_ring: Vec<TickLine>,
}

impl DashboardLayout {
    pub fn build(schedule: &ScheduleState, config: &AppConfig) -> Self {
        Self {
            timeline: layout_blocks(schedule.blocks()),
            tick_ring: ClockFace::new(config.face_size).tick_ring(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardFrame {
    pub time_12h: String,
    pub time_24h: String,
    pub utc_time_12h: String,
    pub meridiem: &'static str,
    pub utc_meridiem: &'static str,
    pub tenths: String,
    pub long_date: String,
    pub numeric_date: String,
    pub timezone: String,
    pub unix_seconds: i64,
    pub title: String,
    pub minutes_since_midnight: f64,
    pub progress: Option<ScheduleProgress>,
    pub activity: Activity,
    pub day_off: Option<DayOff>,
    pub local_hands: ClockHands,
    pub utc_hands: ClockHands,
    pub sunrise: Option<SunriseDisplay>,
}

impl DashboardFrame {
    pub fn compose<Tz: TimeZone>(
        now: &DateTime<Tz>,
        schedule: &ScheduleState,
        config: &AppConfig,
        sunrise: Option<&SunriseInfo>,
    ) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let reading = ClockReading::from_zoned(now);
        let minutes = reading.minutes_since_midnight();
        let face = ClockFace::new(config.face_size);

        let progress = compute_progress(minutes, schedule.blocks(), config.padding_fraction)
            .map(|progress| {
                if config.cap_overlay_at_end {
                    progress.capped_at_end(config.padding_fraction)
                } else {
                    progress
                }
            });

        Self {
            time_12h: reading.local.time_12h(),
            time_24h: reading.local.time_24h(),
            utc_time_12h: reading.utc.time_12h(),
            meridiem: reading.local.meridiem(),
            utc_meridiem: reading.utc.meridiem(),
            tenths: reading.tenths(),
            long_date: reading.long_date(),
            numeric_date: reading.numeric_date(),
            timezone: config.timezone_label(&reading.utc_offset),
            unix_seconds: reading.unix_seconds,
            title: reading.title(&config.app_name),
            minutes_since_midnight: minutes,
            progress,
            activity: current_activity(minutes, schedule.blocks()),
            day_off: schedule.day_off_on(now.date_naive()).cloned(),
            local_hands: face.hands(reading.elapsed_seconds_local()),
            utc_hands: face.hands(reading.elapsed_seconds_utc()),
            sunrise: sunrise.map(|info| info.display_in(&now.timezone())),
        }
    }
}
