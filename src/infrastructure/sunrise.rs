use crate::domain::time_format::{format_duration_seconds, twelve_hour};
use crate::infrastructure::error::InfraError;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SunriseInfo {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    pub solar_noon: DateTime<Utc>,
    pub day_length_seconds: u64,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SunriseDisplay {
    pub sunrise: String,
    pub sunset: String,
    pub solar_noon: String,
    pub day_length: String,
}

impl SunriseInfo {
    pub fn display_in<Tz: TimeZone>(&self, zone: &Tz) -> SunriseDisplay {
        SunriseDisplay {
            sunrise: locale_time(&self.sunrise.with_timezone(zone)),
            sunset: locale_time(&self.sunset.with_timezone(zone)),
            solar_noon: locale_time(&self.solar_noon.with_timezone(zone)),
            day_length: format_duration_seconds(self.day_length_seconds),
        }
    }
}

fn locale_time<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    let meridiem = if instant.hour() < 12 { "AM" } else { "PM" };
    format!(
        "{}:{:02}:{:02} {meridiem}",
        twelve_hour(i64::from(instant.hour())),
        instant.minute(),
        instant.second()
    )
}

#[derive(Debug, Deserialize)]
struct SunriseResponse {
    results: SunriseResults,
}

#[derive(Debug, Deserialize)]
struct SunriseResults {
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
    solar_noon: DateTime<Utc>,
    day_length: u64,
}

pub fn parse_sunrise_response(raw: &str) -> Result<SunriseInfo, InfraError> {
    let response: SunriseResponse = serde_json::from_str(raw)?;
    let results = response.results;
    if results.sunset < results.sunrise {
        return Err(InfraError::InvalidConfig(
            "sunset must not precede sunrise".to_string(),
        ));
    }
    Ok(SunriseInfo {
        sunrise: results.sunrise,
        sunset: results.sunset,
        solar_noon: results.solar_noon,
        day_length_seconds: results.day_length,
    })
}

#[async_trait]
pub trait SunriseProvider: Send + Sync {
    /// `Ok(None)` when the provider has nothing to offer.
    async fn fetch(&self) -> Result<Option<SunriseInfo>, InfraError>;
}

#[derive(Debug, Clone)]
pub struct FileSunriseProvider {
    path: PathBuf,
}

impl FileSunriseProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SunriseProvider for FileSunriseProvider {
    async fn fetch(&self) -> Result<Option<SunriseInfo>, InfraError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };
        parse_sunrise_response(&raw).map(Some)
    }
}
