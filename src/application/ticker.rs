use crate::application::dashboard::{DashboardFrame, DashboardLayout};
use crate::application::state::AppState;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::error::InfraError;
use chrono::{DateTime, FixedOffset, Local, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub type NowProvider = Arc<dyn Fn() -> DateTime<FixedOffset> + Send + Sync>;

pub fn wall_clock(config: &AppConfig) -> NowProvider {
    match config.zone() {
        Some(zone) => Arc::new(move || Utc::now().with_timezone(&zone).fixed_offset()),
        None => Arc::new(|| Local::now().fixed_offset()),
    }
}

pub trait FrameSink: Send {
    fn prepare(&mut self, _layout: &DashboardLayout) {}

    fn render(&mut self, frame: &DashboardFrame);
}

/// Stops the tick loop. Dropping the handle stops it as well.
pub struct TickHandle {
    cancel: watch::Sender<bool>,
    task: JoinHandle<u64>,
}

impl TickHandle {
    pub fn cancel(&self) {
        let _ = self.cancel.send(true);
    }

    pub async fn join(self) -> Result<u64, InfraError> {
        let TickHandle { cancel, task } = self;
        let frames = task.await?;
        drop(cancel);
        Ok(frames)
    }
}

pub fn spawn_tick_loop<S>(state: Arc<AppState>, sink: S, period: Duration) -> TickHandle
where
    S: FrameSink + 'static,
{
    let clock = wall_clock(state.config());
    spawn_tick_loop_with_clock(state, sink, period, clock)
}

pub fn spawn_tick_loop_with_clock<S>(
    state: Arc<AppState>,
    mut sink: S,
    period: Duration,
    now_provider: NowProvider,
) -> TickHandle
where
    S: FrameSink + 'static,
{
    let (cancel, mut cancelled) = watch::channel(false);
    let task = tokio::spawn(async move {
        sink.prepare(&DashboardLayout::build(state.schedule(), state.config()));

        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut frames = 0u64;
        loop {
            tokio::select! {
                biased;
                changed = cancelled.changed() => {
                    if changed.is_err() || *cancelled.borrow() {
                        break;
                    }
                }
                _ = interval.tick() => {
                    let now = now_provider();
                    let sunrise = state.sunrise().get();
                    let frame = DashboardFrame::compose(
                        &now,
                        state.schedule(),
                        state.config(),
                        sunrise.as_ref(),
                    );
                    sink.render(&frame);
                    frames += 1;
                }
            }
        }
        log::debug!("tick loop stopped after {frames} frames");
        frames
    });

    TickHandle { cancel, task }
}
