use crate::application::bootstrap::bootstrap_workspace;
use crate::domain::models::ScheduleState;
use crate::infrastructure::config::{AppConfig, read_schedule_payload};
use crate::infrastructure::customization::load_customization;
use crate::infrastructure::error::InfraError;
use crate::infrastructure::sunrise::SunriseInfo;
use chrono::Utc;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

const OPERATOR_LOG: &str = "dashboard.log";

#[derive(Debug, Clone, Default)]
pub struct SunriseSnapshot {
    inner: Arc<RwLock<Option<SunriseInfo>>>,
}

impl SunriseSnapshot {
    pub fn publish(&self, info: SunriseInfo) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(info);
    }

    pub fn get(&self) -> Option<SunriseInfo> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

pub struct AppState {
    config_dir: PathBuf,
    logs_dir: PathBuf,
    config: AppConfig,
    schedule: Arc<ScheduleState>,
    sunrise: SunriseSnapshot,
    log_guard: Mutex<()>,
}

impl AppState {
    pub fn new(workspace_root: PathBuf) -> Result<Self, InfraError> {
        let bootstrap = bootstrap_workspace(&workspace_root)?;
        let mut state = Self {
            config_dir: bootstrap.config_dir,
            logs_dir: bootstrap.logs_dir,
            config: bootstrap.config,
            schedule: Arc::new(ScheduleState::default()),
            sunrise: SunriseSnapshot::default(),
            log_guard: Mutex::new(()),
        };
        state.schedule = Arc::new(state.load_schedule());
        Ok(state)
    }

    fn load_schedule(&self) -> ScheduleState {
        let loaded = read_schedule_payload(&self.config_dir)
            .and_then(|raw| load_customization(raw.as_deref()));
        match loaded {
            Ok(schedule) => {
                log::info!(
                    "loaded schedule with {} blocks and {} days off",
                    schedule.blocks().len(),
                    schedule.days_off().len()
                );
                schedule
            }
            Err(error) => {
                log::warn!("schedule customization rejected, using defaults: {error}");
                self.log_error("load_schedule", &error.to_string());
                ScheduleState::default()
            }
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn schedule(&self) -> &ScheduleState {
        &self.schedule
    }

    pub fn sunrise(&self) -> &SunriseSnapshot {
        &self.sunrise
    }

    pub fn log_info(&self, command: &str, message: &str) {
        self.append_log("info", command, message);
    }

    pub fn log_error(&self, command: &str, message: &str) {
        self.append_log("error", command, message);
    }

    fn append_log(&self, level: &str, command: &str, message: &str) {
        let Ok(_guard) = self.log_guard.lock() else {
            return;
        };
        let path = self.logs_dir.join(OPERATOR_LOG);
        let payload = serde_json::json!({
            "timestamp": Utc::now().to_rfc3339(),
            "level": level,
            "command": command,
            "message": message,
        });

        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
            let _ = writeln!(file, "{}", payload);
        }
    }
}
