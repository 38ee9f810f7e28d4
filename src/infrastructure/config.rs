use crate::infrastructure::error::InfraError;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const APP_JSON: &str = "app.json";
const SCHEDULE_JSON: &str = "schedule.json";
const SUNRISE_JSON: &str = "sunrise.json";
const SUPPORTED_SCHEMA: u64 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub schema: u8,
    pub app_name: String,
    pub timezone: Option<String>,
    pub padding_fraction: f64,
    pub tick_millis: u64,
    pub sunrise_delay_seconds: u64,
    pub cap_overlay_at_end: bool,
    pub face_size: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            schema: 1,
            app_name: "Clock App".to_string(),
            timezone: None,
            padding_fraction: 0.05,
            tick_millis: 100,
            sunrise_delay_seconds: 2,
            cap_overlay_at_end: false,
            face_size: 200.0,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), InfraError> {
        if !(0.0..0.5).contains(&self.padding_fraction) {
            return Err(InfraError::InvalidConfig(
                "paddingFraction must be within 0 <= x < 0.5".to_string(),
            ));
        }
        if self.tick_millis == 0 {
            return Err(InfraError::InvalidConfig(
                "tickMillis must be > 0".to_string(),
            ));
        }
        if !(self.face_size.is_finite() && self.face_size > 0.0) {
            return Err(InfraError::InvalidConfig(
                "faceSize must be > 0".to_string(),
            ));
        }
        if let Some(timezone) = self.timezone.as_deref() {
            timezone.parse::<Tz>().map_err(|_| {
                InfraError::InvalidConfig(format!("unknown timezone {timezone}"))
            })?;
        }
        Ok(())
    }

    pub fn zone(&self) -> Option<Tz> {
        self.timezone
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .and_then(|value| value.parse::<Tz>().ok())
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    pub fn sunrise_delay(&self) -> Duration {
        Duration::from_secs(self.sunrise_delay_seconds)
    }

    pub fn timezone_label(&self, utc_offset: &str) -> String {
        self.timezone
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| format!("UTC{utc_offset}"))
    }
}

fn default_files() -> HashMap<&'static str, serde_json::Value> {
    HashMap::from([(
        APP_JSON,
        serde_json::json!({
            "schema": 1,
            "appName": "Clock App",
            "paddingFraction": 0.05,
            "tickMillis": 100,
            "sunriseDelaySeconds": 2,
            "capOverlayAtEnd": false,
            "faceSize": 200.0
        }),
    )])
}

pub fn ensure_default_configs(config_dir: &Path) -> Result<(), InfraError> {
    for (name, value) in default_files() {
        let path = config_dir.join(name);
        if !path.exists() {
            let formatted = serde_json::to_string_pretty(&value)?;
            fs::write(path, format!("{formatted}\n"))?;
        }
    }
    Ok(())
}

fn read_config(path: &Path) -> Result<serde_json::Value, InfraError> {
    let raw = fs::read_to_string(path)?;
    let parsed: serde_json::Value = serde_json::from_str(&raw)?;
    let schema = parsed
        .get("schema")
        .and_then(serde_json::Value::as_u64)
        .ok_or_else(|| InfraError::InvalidConfig(format!("missing schema in {}", path.display())))?;
    if schema != SUPPORTED_SCHEMA {
        return Err(InfraError::InvalidConfig(format!(
            "unsupported schema {} in {}",
            schema,
            path.display()
        )));
    }
    Ok(parsed)
}

pub fn load_app_config(config_dir: &Path) -> Result<AppConfig, InfraError> {
    let value = read_config(&config_dir.join(APP_JSON))?;
    let config: AppConfig = serde_json::from_value(value)?;
    config.validate()?;
    Ok(config)
}

pub fn read_schedule_payload(config_dir: &Path) -> Result<Option<String>, InfraError> {
    read_optional(&config_dir.join(SCHEDULE_JSON))
}

pub fn save_schedule_payload(config_dir: &Path, payload: &serde_json::Value) -> Result<(), InfraError> {
    let formatted = serde_json::to_string_pretty(payload)?;
    fs::write(config_dir.join(SCHEDULE_JSON), format!("{formatted}\n"))?;
    Ok(())
}

pub fn sunrise_path(config_dir: &Path) -> PathBuf {
    config_dir.join(SUNRISE_JSON)
}

pub fn read_optional(path: &Path) -> Result<Option<String>, InfraError> {
    match fs::read_to_string(path) {
        Ok(raw) => Ok(Some(raw)),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(error) => Err(error.into()),
    }
}
