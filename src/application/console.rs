use crate::application::dashboard::{DashboardFrame, DashboardLayout};
use crate::application::ticker::FrameSink;
use crate::domain::layout::LayoutItem;
use crate::domain::progress::Activity;
use crate::domain::time_format::{format_hms, format_ms};
use std::io::Write;

pub struct ConsoleSink<W: Write + Send> {
    out: W,
    last_second: Option<i64>,
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last_second: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn countdown(minutes: f64) -> String {
    if minutes >= 60.0 {
        format_hms(minutes)
    } else {
        format_ms(minutes)
    }
}

pub fn status_line(frame: &DashboardFrame) -> String {
    let activity = match &frame.activity {
        Activity::InBlock(name) => name.as_str(),
        Activity::InBreak => "Break",
        Activity::OutsideSchedule => "-",
    };
    let mut line = format!("{} {} | {}", frame.time_12h, frame.meridiem, activity);
    if let Some(progress) = &frame.progress {
        if progress.overlay_visible {
            line.push_str(&format!(
                " | next {} | left {} | {:.1}%",
                countdown(progress.block_remaining_minutes),
                progress.total_remaining,
                progress.overlay_percent
            ));
        } else {
            line.push_str(&format!(
                " | starts in {}",
                countdown(progress.block_remaining_minutes)
            ));
        }
    }
    if let Some(day_off) = &frame.day_off {
        line.push_str(&format!(" | {}", day_off.name));
    }
    line
}

impl<W: Write + Send> FrameSink for ConsoleSink<W> {
    fn prepare(&mut self, layout: &DashboardLayout) {
        for item in &layout.timeline {
            let row = match item {
                LayoutItem::Period {
                    name,
                    start_label,
                    end_label,
                    ..
                } => format!("{name}: {start_label} - {end_label}"),
                LayoutItem::Break { .. } => "  (break)".to_string(),
            };
            let _ = writeln!(self.out, "{row}");
        }
    }

    fn render(&mut self, frame: &DashboardFrame) {
        if self.last_second == Some(frame.unix_seconds) {
            return;
        }
        self.last_second = Some(frame.unix_seconds);
        let _ = writeln!(self.out, "{}", status_line(frame));
        let _ = self.out.flush();
    }
}
