use serde::Serialize;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

pub const TICK_COUNT: usize = 60;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct HandSegment {
    pub angle: f64,
    pub tip: Point,
    pub tail: Point,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ClockHands {
    pub hour: HandSegment,
    pub minute: HandSegment,
    pub second: HandSegment,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TickSize {
    Large,
    Small,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct TickMark {
    pub index: usize,
    pub angle_degrees: f64,
    pub size: TickSize,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct TickLine {
    pub mark: TickMark,
    pub inner: Point,
    pub outer: Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockFace {
    pub size: f64,
}

impl ClockFace {
    pub fn new(size: f64) -> Self {
        Self { size }
    }

    pub fn center(&self) -> f64 {
        self.size / 2.0
    }

    pub fn hour_hand_length(&self) -> f64 {
        self.center() * 0.5
    }

    pub fn minute_hand_length(&self) -> f64 {
        self.center() * 0.75
    }

    pub fn second_hand_length(&self) -> f64 {
        self.center() * 0.9
    }

    pub fn hands(&self, elapsed_seconds: f64) -> ClockHands {
        let positions = HandPositions::from_elapsed_seconds(elapsed_seconds);
        ClockHands {
            hour: self.segment(
                hand_angle(positions.hours, 12.0),
                self.hour_hand_length(),
            ),
            minute: self.segment(
                hand_angle(positions.minutes, 60.0),
                self.minute_hand_length(),
            ),
            second: self.segment(
                hand_angle(positions.seconds, 60.0),
                self.second_hand_length(),
            ),
        }
    }

    fn segment(&self, angle: f64, length: f64) -> HandSegment {
        let center = self.center();
        HandSegment {
            angle,
            tip: Point {
                x: angle.cos() * length + center,
                y: angle.sin() * length + center,
            },
            tail: Point {
                x: (angle - PI).cos() * length / 3.0 + center,
                y: (angle - PI).sin() * length / 3.0 + center,
            },
        }
    }

    pub fn tick_ring(&self) -> Vec<TickLine> {
        tick_marks()
            .into_iter()
            .map(|mark| {
                let (inner, outer) = self.tick_endpoints(&mark);
                TickLine { mark, inner, outer }
            })
            .collect()
    }

    pub fn tick_endpoints(&self, mark: &TickMark) -> (Point, Point) {
        let center = self.center();
        let inset = match mark.size {
            TickSize::Large => 0.85,
            TickSize::Small => 0.93,
        };
        let angle = mark.angle_degrees.to_radians() - FRAC_PI_2;
        let at = |radius: f64| Point {
            x: angle.cos() * radius + center,
            y: angle.sin() * radius + center,
        };
        (at(center * inset), at(center))
    }
}

/// Continuous dial positions; the hour value runs 1..13 so it sweeps smoothly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandPositions {
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl HandPositions {
    pub fn from_elapsed_seconds(elapsed_seconds: f64) -> Self {
        Self {
            hours: (elapsed_seconds / 3600.0 + 11.0).rem_euclid(12.0) + 1.0,
            minutes: elapsed_seconds / 60.0,
            seconds: elapsed_seconds.rem_euclid(60.0),
        }
    }
}

pub fn hand_angle(value: f64, period: f64) -> f64 {
    let raw = value / period * TAU - FRAC_PI_2;
    (raw + PI).rem_euclid(TAU) - PI
}

pub fn tick_marks() -> Vec<TickMark> {
    let step = 360.0 / TICK_COUNT as f64;
    (0..TICK_COUNT)
        .map(|index| TickMark {
            index,
            angle_degrees: index as f64 * step,
            size: if index % 5 == 0 {
                TickSize::Large
            } else {
                TickSize::Small
            },
        })
        .collect()
}
