//! Closeness scoring for the colour matching game.
//!
//! The channel weights and the win threshold are tuning constants of the
//! game and are kept exactly as shipped.

use serde::{Deserialize, Serialize};

pub const HUE_WEIGHT: f64 = 0.5;
pub const SATURATION_WEIGHT: f64 = 0.25;
pub const LIGHTNESS_WEIGHT: f64 = 0.25;

/// Closeness at or above this wins.
pub const WIN_THRESHOLD: u8 = 97;

/// Largest possible hue distance on the colour wheel.
pub const HUE_RANGE: u16 = 180;
pub const PERCENT_RANGE: u16 = 100;

/// Per-channel tolerance inside which a channel counts as on target.
pub const HUE_TOLERANCE: u16 = 5;
pub const SATURATION_TOLERANCE: u16 = 3;
pub const LIGHTNESS_TOLERANCE: u16 = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    pub const fn new_unchecked(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }

    /// Wraps hue onto the wheel and clamps saturation and lightness to percent.
    pub fn new(h: u16, s: u8, l: u8) -> Self {
        Self::new_unchecked(h % 360, s.min(100), l.min(100))
    }
}

/// Signed shortest turn from `guess` to `target` hue, in `-180..180`.
pub fn hue_delta(guess: u16, target: u16) -> i16 {
    let raw = i32::from(target) - i32::from(guess) + 540;
    (raw.rem_euclid(360) - 180) as i16
}

/// Rounds a non-negative value half up.
fn round_half_up(value: f64) -> u8 {
    (value + 0.5) as u8
}

/// Weighted channel closeness in `0..=100`.
pub fn closeness(guess: Hsl, target: Hsl) -> u8 {
    let h_dist = f64::from(hue_delta(guess.h, target.h).unsigned_abs()) / f64::from(HUE_RANGE);
    let s_dist = f64::from(guess.s.abs_diff(target.s)) / f64::from(PERCENT_RANGE);
    let l_dist = f64::from(guess.l.abs_diff(target.l)) / f64::from(PERCENT_RANGE);
    let total = h_dist * HUE_WEIGHT + s_dist * SATURATION_WEIGHT + l_dist * LIGHTNESS_WEIGHT;
    round_half_up((1.0 - total) * 100.0)
}

/// Coarse label for how far one channel is from its target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Proximity {
    Locked,
    Close,
    Warm,
    Far,
    WayOff,
}

impl Proximity {
    pub fn classify(delta: i16, range: u16) -> Self {
        let ratio = f64::from(delta.unsigned_abs()) / f64::from(range.max(1));
        if ratio <= 0.03 {
            Self::Locked
        } else if ratio <= 0.1 {
            Self::Close
        } else if ratio <= 0.25 {
            Self::Warm
        } else if ratio <= 0.5 {
            Self::Far
        } else {
            Self::WayOff
        }
    }
}

/// Which way the player should move a channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    OnTarget,
    Up,
    Down,
}

impl Direction {
    pub fn of(delta: i16, tolerance: u16) -> Self {
        if delta.unsigned_abs() <= tolerance {
            Self::OnTarget
        } else if delta > 0 {
            Self::Up
        } else {
            Self::Down
        }
    }
}

/// Result of one colour guess. Deltas point from the guess toward the target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorFeedback {
    pub delta_h: i16,
    pub delta_s: i16,
    pub delta_l: i16,
    pub closeness: u8,
}

impl ColorFeedback {
    pub fn evaluate(guess: Hsl, target: Hsl) -> Self {
        Self {
            delta_h: hue_delta(guess.h, target.h),
            delta_s: i16::from(target.s) - i16::from(guess.s),
            delta_l: i16::from(target.l) - i16::from(guess.l),
            closeness: closeness(guess, target),
        }
    }

    pub const fn is_win(&self) -> bool {
        self.closeness >= WIN_THRESHOLD
    }

    pub fn proximity(&self) -> [Proximity; 3] {
        [
            Proximity::classify(self.delta_h, HUE_RANGE),
            Proximity::classify(self.delta_s, PERCENT_RANGE),
            Proximity::classify(self.delta_l, PERCENT_RANGE),
        ]
    }

    pub fn directions(&self) -> [Direction; 3] {
        [
            Direction::of(self.delta_h, HUE_TOLERANCE),
            Direction::of(self.delta_s, SATURATION_TOLERANCE),
            Direction::of(self.delta_l, LIGHTNESS_TOLERANCE),
        ]
    }
}
