use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const MINUTES_PER_DAY: f64 = 1440.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Block {
    pub name: String,
    pub start: f64,
    pub end: f64,
}

impl Block {
    pub fn new(name: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }

    pub fn validate(&self, field_name: &str) -> Result<(), String> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(format!("{field_name} start and end must be finite"));
        }
        if self.start < 0.0 || self.end > MINUTES_PER_DAY {
            return Err(format!("{field_name} must lie within 0..=1440 minutes"));
        }
        if self.end <= self.start {
            return Err(format!("{field_name}.end must be after {field_name}.start"));
        }
        Ok(())
    }

    pub fn contains(&self, now: f64) -> bool {
        self.start <= now && now < self.end
    }
}

pub fn validate_blocks(blocks: &[Block]) -> Result<(), String> {
    for (index, block) in blocks.iter().enumerate() {
        block.validate(&format!("blocks[{index}]"))?;
    }
    for (index, pair) in blocks.windows(2).enumerate() {
        let (previous, current) = (&pair[0], &pair[1]);
        if current.start < previous.start {
            return Err(format!(
                "blocks[{}] starts before blocks[{index}]; blocks must be sorted by start",
                index + 1
            ));
        }
        if previous.end > current.start {
            return Err(format!("blocks[{index}] overlaps blocks[{}]", index + 1));
        }
    }
    Ok(())
}

pub fn default_blocks() -> Vec<Block> {
    fn hm(hour: u32, minute: u32) -> f64 {
        f64::from(hour * 60 + minute)
    }

    vec![
        Block::new("Homeroom", hm(9, 15), hm(9, 55)),
        Block::new("Period 1", hm(10, 0), hm(10, 30)),
        Block::new("Period 2", hm(10, 35), hm(11, 5)),
        Block::new("Period 3", hm(11, 10), hm(11, 40)),
        Block::new("Lunch", hm(11, 43), hm(12, 47)),
        Block::new("Period 4", hm(12, 50), hm(13, 20)),
        Block::new("Period 5", hm(13, 25), hm(13, 55)),
        Block::new("Period 6", hm(14, 0), hm(14, 30)),
    ]
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DayOffKind {
    #[serde(rename = "DAYOFF")]
    DayOff,
    #[serde(rename = "HALFDAY")]
    HalfDay,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DayOffSpan {
    SingleDate(NaiveDate),
    DateRange { start: NaiveDate, end: NaiveDate },
}

impl DayOffSpan {
    pub fn validate(&self, field_name: &str) -> Result<(), String> {
        if let Self::DateRange { start, end } = self {
            if end < start {
                return Err(format!("{field_name}.endDate must not precede {field_name}.startDate"));
            }
        }
        Ok(())
    }

    pub fn covers(&self, date: NaiveDate) -> bool {
        match self {
            Self::SingleDate(single) => *single == date,
            Self::DateRange { start, end } => *start <= date && date <= *end,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayOff {
    pub kind: DayOffKind,
    pub name: String,
    pub span: DayOffSpan,
}

impl DayOff {
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.span.covers(date)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleState {
    blocks: Vec<Block>,
    days_off: Vec<DayOff>,
}

impl ScheduleState {
    pub fn new(blocks: Vec<Block>, days_off: Vec<DayOff>) -> Result<Self, String> {
        validate_blocks(&blocks)?;
        for (index, day_off) in days_off.iter().enumerate() {
            day_off.span.validate(&format!("daysOff[{index}]"))?;
        }
        Ok(Self { blocks, days_off })
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn days_off(&self) -> &[DayOff] {
        &self.days_off
    }

    pub fn day_off_on(&self, date: NaiveDate) -> Option<&DayOff> {
        self.days_off.iter().find(|day_off| day_off.covers(date))
    }

    pub fn window(&self) -> Option<(f64, f64)> {
        schedule_window(&self.blocks)
    }
}

impl Default for ScheduleState {
    fn default() -> Self {
        Self {
            blocks: default_blocks(),
            days_off: Vec::new(),
        }
    }
}

pub fn schedule_window(blocks: &[Block]) -> Option<(f64, f64)> {
    let first = blocks.first()?;
    let last = blocks.last()?;
    Some((first.start, last.end))
}
