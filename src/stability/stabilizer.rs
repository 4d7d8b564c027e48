//! Temporal stabilizer - turns a noisy per-frame label stream into stable events
//!
//! Tracks the current run of identical labels. A run that reaches the
//! threshold emits a stable move on that frame and on every later frame of
//! the same run. `Unknown` takes part in runs (it breaks a real gesture's
//! streak) but never emits.

use crate::classifier::{GestureLabel, Move};

/// Consecutive identical frames needed before a gesture is stable
pub const STABILITY_THRESHOLD: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StabilizerState {
    pub last_label: GestureLabel,
    /// Frames in the current run, including the one that started it
    pub run_length: u32,
}

impl Default for StabilizerState {
    fn default() -> Self {
        Self {
            last_label: GestureLabel::Unknown,
            run_length: 0,
        }
    }
}

pub struct GestureStabilizer {
    state: StabilizerState,
    threshold: u32,
}

impl GestureStabilizer {
    pub fn new(threshold: u32) -> Self {
        Self {
            state: StabilizerState::default(),
            threshold,
        }
    }

    /// Feed one frame's label. Returns the stable move if the current run
    /// has reached the threshold.
    pub fn observe(&mut self, label: GestureLabel) -> Option<Move> {
        if label == self.state.last_label {
            self.state.run_length = self.state.run_length.saturating_add(1);
        } else {
            self.state.last_label = label;
            self.state.run_length = 1;
        }

        if self.state.run_length >= self.threshold {
            label.as_move()
        } else {
            None
        }
    }

    pub fn state(&self) -> StabilizerState {
        self.state
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn reset(&mut self) {
        self.state = StabilizerState::default();
    }
}

impl Default for GestureStabilizer {
    fn default() -> Self {
        Self::new(STABILITY_THRESHOLD)
    }
}
