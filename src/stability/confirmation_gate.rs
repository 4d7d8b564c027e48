//! Confirmation Gate - second, time-based stage after the stabilizer
//!
//! A stable move becomes the displayed candidate and starts the confirmation
//! window. If no different stable move arrives before the window elapses the
//! candidate is confirmed, exactly once, as the player's move for the round.
//! A different stable move restarts the window for itself.
//!
//! The gate only accepts input while the game says moves are wanted; that
//! decision is passed in as a `MoveGuard`, not owned here.

use crate::classifier::Move;
use super::timer::{TimerHandle, TimerSlot};

/// Default confirmation window (ms)
pub const CONFIRMATION_MS: f64 = 2000.0;

/// Capability check supplied by the game: is a player move wanted right now?
///
/// False before the game starts, while a round is being played out, and
/// after the game is over.
pub trait MoveGuard {
    fn accepting_moves(&self) -> bool;
}

impl<F: Fn() -> bool> MoveGuard for F {
    fn accepting_moves(&self) -> bool {
        self()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConfirmationState {
    /// Displayed, not yet confirmed move
    pub candidate: Option<Move>,
    /// When the live confirmation window started
    pub pending_since: Option<f64>,
}

pub struct ConfirmationGate {
    window_ms: f64,
    state: ConfirmationState,
    timer: TimerSlot,
    /// Handle of the live confirmation window
    pending: Option<TimerHandle>,
    /// Set once a move is confirmed; cleared when the round completes
    confirmed: Option<Move>,
}

impl ConfirmationGate {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            state: ConfirmationState::default(),
            timer: TimerSlot::new(),
            pending: None,
            confirmed: None,
        }
    }

    /// Offer a stable move. Returns the handle of the newly started window,
    /// or `None` if the offer was ignored (guard closed, a move is already
    /// confirmed, or the move is already the candidate).
    pub fn offer(&mut self, gesture: Move, now_ms: f64, guard: &impl MoveGuard) -> Option<TimerHandle> {
        if !guard.accepting_moves() || self.confirmed.is_some() {
            return None;
        }
        if self.state.candidate == Some(gesture) {
            return None;
        }

        if let Some(previous) = self.state.candidate {
            log::debug!("candidate {} replaced by {}", previous, gesture);
        }
        self.cancel_pending();
        self.state = ConfirmationState {
            candidate: Some(gesture),
            pending_since: Some(now_ms),
        };
        let handle = self.timer.schedule(now_ms, self.window_ms);
        self.pending = Some(handle);
        Some(handle)
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.timer.cancel(handle);
        }
    }

    /// Fire the confirmation window if it has elapsed by `now_ms`
    ///
    /// Returns the confirmed move at most once per round. If the guard has
    /// closed while the window was running the pending candidate is dropped
    /// instead.
    pub fn poll(&mut self, now_ms: f64, guard: &impl MoveGuard) -> Option<Move> {
        self.timer.take_expired(now_ms)?;
        self.pending = None;
        self.state.pending_since = None;

        if !guard.accepting_moves() {
            log::debug!("confirmation window elapsed with moves closed, dropping candidate");
            self.state.candidate = None;
            return None;
        }

        self.confirmed = self.state.candidate;
        self.confirmed
    }

    /// Round finished: back to waiting for a fresh gesture
    pub fn complete_round(&mut self) {
        self.reset();
    }

    /// Cancel the live window and forget the candidate and confirmation
    pub fn reset(&mut self) {
        self.cancel_pending();
        self.state = ConfirmationState::default();
        self.confirmed = None;
    }

    pub fn candidate(&self) -> Option<Move> {
        self.state.candidate
    }

    pub fn confirmed(&self) -> Option<Move> {
        self.confirmed
    }

    pub fn state(&self) -> ConfirmationState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.timer.live().is_some()
    }
}

impl Default for ConfirmationGate {
    fn default() -> Self {
        Self::new(CONFIRMATION_MS)
    }
}
