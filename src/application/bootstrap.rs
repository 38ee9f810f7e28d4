use crate::infrastructure::config::{AppConfig, ensure_default_configs, load_app_config};
use crate::infrastructure::error::InfraError;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct BootstrapResult {
    pub workspace_root: PathBuf,
    pub config_dir: PathBuf,
    pub logs_dir: PathBuf,
    pub config: AppConfig,
}

pub fn bootstrap_workspace(workspace_root: &Path) -> Result<BootstrapResult, InfraError> {
    let config_dir = workspace_root.join("config");
    let logs_dir = workspace_root.join("logs");

    fs::create_dir_all(&config_dir)?;
    fs::create_dir_all(&logs_dir)?;

    ensure_default_configs(&config_dir)?;
    let config = load_app_config(&config_dir)?;

    Ok(BootstrapResult {
        workspace_root: workspace_root.to_path_buf(),
        config_dir,
        logs_dir,
        config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static NEXT_TEMP_WORKSPACE: AtomicUsize = AtomicUsize::new(0);

    #[test]
    fn bootstrap_creates_layout_and_default_config() {
        let sequence = NEXT_TEMP_WORKSPACE.fetch_add(1, Ordering::Relaxed);
        let root = std::env::temp_dir().join(format!(
            "schedule-clock-bootstrap-tests-{}-{}",
            std::process::id(),
            sequence
        ));
        fs::create_dir_all(&root).expect("create temp workspace");

        let result = bootstrap_workspace(&root).expect("bootstrap");
        assert!(result.config_dir.join("app.json").exists());
        assert!(result.logs_dir.is_dir());
        assert_eq!(result.workspace_root, root);
        assert_eq!(result.config, AppConfig::default());

        let _ = fs::remove_dir_all(&root);
    }
}
