pub mod application;
pub mod domain;
pub mod infrastructure;

use application::console::ConsoleSink;
use application::state::AppState;
use application::sunrise_task::spawn_sunrise_enrichment;
use application::ticker::spawn_tick_loop;
use infrastructure::config::sunrise_path;
use infrastructure::error::InfraError;
use infrastructure::sunrise::FileSunriseProvider;
use std::path::PathBuf;
use std::sync::Arc;

pub use application::dashboard::{DashboardFrame, DashboardLayout};
pub use domain::models::{Block, DayOff, DayOffKind, DayOffSpan, ScheduleState};
pub use infrastructure::customization::load_customization;

pub fn run(workspace_root: Option<PathBuf>) -> Result<(), InfraError> {
    let workspace_root = match workspace_root {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(serve(workspace_root))
}

async fn serve(workspace_root: PathBuf) -> Result<(), InfraError> {
    let state = Arc::new(AppState::new(workspace_root)?);
    state.log_info(
        "run",
        &format!(
            "dashboard started with {} blocks",
            state.schedule().blocks().len()
        ),
    );

    let provider = Arc::new(FileSunriseProvider::new(sunrise_path(state.config_dir())));
    let enrichment = spawn_sunrise_enrichment(
        provider,
        state.sunrise().clone(),
        state.config().sunrise_delay(),
    );

    let period = state.config().tick_period();
    let ticker = spawn_tick_loop(Arc::clone(&state), ConsoleSink::new(std::io::stdout()), period);

    tokio::signal::ctrl_c().await?;
    log::info!("shutting down");
    ticker.cancel();
    enrichment.abort();
    let frames = ticker.join().await?;
    state.log_info("run", &format!("dashboard stopped after {frames} frames"));
    Ok(())
}
