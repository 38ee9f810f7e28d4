use crate::domain::models::{Block, schedule_window};
use crate::domain::time_format::{format_hms, format_ms};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScheduleProgress {
    /// Unclamped fraction of the window elapsed; negative before it opens.
    pub progress: f64,
    pub overlay_percent: f64,
    pub overlay_visible: bool,
    pub block_remaining_minutes: f64,
    pub block_remaining: String,
    pub total_remaining_minutes: f64,
    pub total_remaining: String,
}

impl ScheduleProgress {
    pub fn capped_at_end(mut self, padding_fraction: f64) -> Self {
        self.overlay_percent = self.overlay_percent.min(end_percent(padding_fraction));
        self
    }
}

pub fn end_percent(padding_fraction: f64) -> f64 {
    (1.0 - padding_fraction) * 100.0
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "state", content = "name", rename_all = "snake_case")]
pub enum Activity {
    InBlock(String),
    InBreak,
    OutsideSchedule,
}

pub fn compute_progress(
    now: f64,
    blocks: &[Block],
    padding_fraction: f64,
) -> Option<ScheduleProgress> {
    let (window_start, window_end) = schedule_window(blocks)?;
    let progress = (now - window_start) / (window_end - window_start);
    let overlay_percent =
        (1.0 - 2.0 * padding_fraction) * progress * 100.0 + padding_fraction * 100.0;

    let block_remaining_minutes = (next_boundary(now, blocks, window_end) - now).max(0.0);
    let total_remaining_minutes = (window_end - now).max(0.0);

    Some(ScheduleProgress {
        progress,
        overlay_percent,
        overlay_visible: progress >= 0.0,
        block_remaining_minutes,
        block_remaining: format_ms(block_remaining_minutes),
        total_remaining_minutes,
        total_remaining: format_hms(total_remaining_minutes),
    })
}

/// Nearest block start or end at or after `now`, falling back to the end of
/// the window once every boundary has passed.
pub fn next_boundary(now: f64, blocks: &[Block], window_end: f64) -> f64 {
    blocks
        .iter()
        .flat_map(|block| [block.start, block.end])
        .filter(|boundary| *boundary >= now)
        .fold(None, |nearest: Option<f64>, boundary| match nearest {
            Some(current) if current <= boundary => Some(current),
            _ => Some(boundary),
        })
        .unwrap_or(window_end)
}

pub fn current_activity(now: f64, blocks: &[Block]) -> Activity {
    let Some((window_start, window_end)) = schedule_window(blocks) else {
        return Activity::OutsideSchedule;
    };
    if now < window_start || now >= window_end {
        return Activity::OutsideSchedule;
    }
    blocks
        .iter()
        .find(|block| block.contains(now))
        .map(|block| Activity::InBlock(block.name.clone()))
        .unwrap_or(Activity::InBreak)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::default_blocks;
    use proptest::prelude::*;

    const PADDING: f64 = 0.05;

    fn sample_blocks() -> Vec<Block> {
        vec![
            Block::new("Homeroom", 555.0, 595.0),
            Block::new("Period 1", 600.0, 630.0),
        ]
    }

    fn approx_eq(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-9
    }

    #[test]
    fn empty_schedule_yields_no_progress() {
        assert!(compute_progress(600.0, &[], PADDING).is_none());
    }

    #[test]
    fn overlay_at_window_start_equals_padding() {
        let progress = compute_progress(555.0, &sample_blocks(), PADDING).expect("progress");
        assert!(progress.overlay_visible);
        assert!(approx_eq(progress.overlay_percent, PADDING * 100.0));
    }

    #[test]
    fn overlay_at_window_end_reaches_far_padding_edge() {
        let progress = compute_progress(630.0, &sample_blocks(), PADDING).expect("progress");
        assert!(approx_eq(progress.overlay_percent, (1.0 - PADDING) * 100.0));
        assert!(approx_eq(progress.overlay_percent, end_percent(PADDING)));
        assert_eq!(progress.total_remaining, "0:00:00");
        assert_eq!(progress.block_remaining, "0:00");
    }

    #[test]
    fn overlay_hidden_before_window() {
        let progress = compute_progress(500.0, &sample_blocks(), PADDING).expect("progress");
        assert!(!progress.overlay_visible);
        assert!(progress.progress < 0.0);
    }

    #[test]
    fn overlay_grows_past_end_after_window_unless_capped() {
        let progress = compute_progress(700.0, &sample_blocks(), PADDING).expect("progress");
        assert!(progress.overlay_visible);
        assert!(progress.overlay_percent > end_percent(PADDING));
        let capped = progress.clone().capped_at_end(PADDING);
        assert!(approx_eq(capped.overlay_percent, (1.0 - PADDING) * 100.0));
        assert_eq!(progress.total_remaining_minutes, 0.0);
    }

    #[test]
    fn overlay_before_end_is_not_affected_by_cap() {
        let progress = compute_progress(580.0, &sample_blocks(), PADDING).expect("progress");
        let capped = progress.clone().capped_at_end(PADDING);
        assert_eq!(capped.overlay_percent, progress.overlay_percent);
    }

    #[test]
    fn block_remaining_counts_down_to_block_end() {
        let progress = compute_progress(580.5, &sample_blocks(), PADDING).expect("progress");
        assert!(approx_eq(progress.block_remaining_minutes, 14.5));
        assert_eq!(progress.block_remaining, "14:30");
    }

    #[test]
    fn block_remaining_counts_down_to_next_start_inside_gap() {
        let progress = compute_progress(597.0, &sample_blocks(), PADDING).expect("progress");
        assert!(approx_eq(progress.block_remaining_minutes, 3.0));
        assert_eq!(progress.block_remaining, "3:00");
    }

    #[test]
    fn block_remaining_is_zero_on_boundary() {
        for boundary in [555.0, 595.0, 600.0, 630.0] {
            let progress =
                compute_progress(boundary, &sample_blocks(), PADDING).expect("progress");
            assert_eq!(progress.block_remaining, "0:00");
        }
    }

    #[test]
    fn block_remaining_before_window_targets_first_start() {
        let progress = compute_progress(550.0, &sample_blocks(), PADDING).expect("progress");
        assert!(approx_eq(progress.block_remaining_minutes, 5.0));
    }

    #[test]
    fn total_remaining_uses_hours() {
        let progress = compute_progress(555.0, &default_blocks(), PADDING).expect("progress");
        assert_eq!(progress.total_remaining, "5:15:00");
    }

    #[test]
    fn current_activity_distinguishes_blocks_and_breaks() {
        let blocks = sample_blocks();
        assert_eq!(
            current_activity(560.0, &blocks),
            Activity::InBlock("Homeroom".to_string())
        );
        assert_eq!(current_activity(597.0, &blocks), Activity::InBreak);
        assert_eq!(current_activity(630.0, &blocks), Activity::OutsideSchedule);
        assert_eq!(current_activity(10.0, &blocks), Activity::OutsideSchedule);
        assert_eq!(current_activity(600.0, &[]), Activity::OutsideSchedule);
    }

    proptest! {
        #[test]
        fn total_remaining_never_negative(now in 0.0f64..1440.0f64) {
            let progress = compute_progress(now, &default_blocks(), PADDING).expect("progress");
            prop_assert!(progress.total_remaining_minutes >= 0.0);
            prop_assert!(progress.block_remaining_minutes >= 0.0);
            prop_assert!(progress.block_remaining_minutes <= progress.total_remaining_minutes);
        }

        #[test]
        fn overlay_visibility_tracks_window_start(now in 0.0f64..1440.0f64) {
            let progress = compute_progress(now, &default_blocks(), PADDING).expect("progress");
            prop_assert_eq!(progress.overlay_visible, now >= 555.0);
        }
    }
}
