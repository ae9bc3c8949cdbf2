//! Tick pacing: score-accelerated base interval scaled by the speed mode.

use serde::{Deserialize, Serialize};

/// User-selected pace multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedMode {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl SpeedMode {
    pub const ALL: [SpeedMode; 3] = [SpeedMode::Slow, SpeedMode::Normal, SpeedMode::Fast];

    pub fn multiplier(self) -> f64 {
        match self {
            Self::Slow => 1.25,
            Self::Normal => 1.0,
            Self::Fast => 0.75,
        }
    }

    /// Slow -> Normal -> Fast -> Slow.
    pub fn next(self) -> Self {
        match self {
            Self::Slow => Self::Normal,
            Self::Normal => Self::Fast,
            Self::Fast => Self::Slow,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Slow => "Slow",
            Self::Normal => "Normal",
            Self::Fast => "Fast",
        }
    }
}

/// Scale a dynamic interval by the mode and clamp to the floor.
fn scale_interval(dynamic_ms: u64, mode: SpeedMode, min_ms: u64) -> u64 {
    let scaled = (dynamic_ms as f64 * mode.multiplier()).round() as u64;
    scaled.max(min_ms)
}

/// Effective interval after `score` foods, computed from scratch.
pub fn interval_for_score(base_ms: u64, min_ms: u64, step_ms: u64, score: u32, mode: SpeedMode) -> u64 {
    let dynamic = base_ms
        .saturating_sub(step_ms.saturating_mul(u64::from(score)))
        .max(min_ms);
    scale_interval(dynamic, mode, min_ms)
}

/// Dynamic interval that shrinks by a fixed step per food, floored at a minimum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeedController {
    base_ms: u64,
    min_ms: u64,
    step_ms: u64,
    dynamic_ms: u64,
}

impl SpeedController {
    pub fn new(base_ms: u64, min_ms: u64, step_ms: u64) -> Self {
        Self {
            base_ms,
            min_ms,
            step_ms,
            dynamic_ms: base_ms.max(min_ms),
        }
    }

    pub fn dynamic_ms(&self) -> u64 {
        self.dynamic_ms
    }

    pub fn on_food_eaten(&mut self) {
        self.dynamic_ms = self
            .dynamic_ms
            .saturating_sub(self.step_ms)
            .max(self.min_ms);
    }

    pub fn reset(&mut self) {
        self.dynamic_ms = self.base_ms.max(self.min_ms);
    }

    /// Milliseconds that must elapse between ticks in `mode`.
    pub fn current_interval(&self, mode: SpeedMode) -> u64 {
        scale_interval(self.dynamic_ms, mode, self.min_ms)
    }
}
