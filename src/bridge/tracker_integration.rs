//! Tracker integration - connects the gesture tracker with the game page
//!
//! The page's animation-frame loop hands every MediaPipe result to
//! `process_hand_frame`. Game status comes in through `set_game_status`; the
//! confirmed move goes back out through the callback registered with
//! `on_gesture_confirmed`.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;
use log::LevelFilter;

use crate::classifier::{GestureLabel, Move};
use crate::stability::{MoveGuard, PerformanceClock};
use crate::tracker::{FrameOutcome, GestureTracker, TrackerConfig};
use super::console;
use super::landmarks::first_hand;

/// Game status as last reported by the page
#[derive(Clone, Copy, Debug, Default)]
struct RoundStatus {
    started: bool,
    round_in_progress: bool,
    game_over: bool,
}

impl MoveGuard for RoundStatus {
    fn accepting_moves(&self) -> bool {
        self.started && !self.round_in_progress && !self.game_over
    }
}

#[derive(Default)]
struct TrackerState {
    /// Live session; `None` before `start_tracking` and after `stop_tracking`
    tracker: Option<GestureTracker<PerformanceClock>>,
    status: RoundStatus,
    on_confirmed: Option<js_sys::Function>,
}

thread_local! {
    static TRACKER_STATE: RefCell<TrackerState> = RefCell::new(TrackerState::default());
}

/// Install the console logger at the default level
pub fn init_logging() {
    console::init(LevelFilter::Info);
}

/// Start a tracking session, optionally overriding the defaults with a JSON config
#[wasm_bindgen]
pub fn start_tracking(config_json: Option<String>) -> Result<(), JsValue> {
    let config = TrackerConfig::from_json(config_json.as_deref().unwrap_or(""))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    TRACKER_STATE.with(|state_cell| {
        state_cell.borrow_mut().tracker = Some(GestureTracker::new(config, PerformanceClock));
    });
    log::info!("✅ Gesture tracking started");
    Ok(())
}

/// Feed one animation frame's hand landmarks
///
/// `data` is the flat x, y, z array of all detected hands. Returns the label
/// of the most recently classified frame.
#[wasm_bindgen]
pub fn process_hand_frame(data: &[f32], num_hands: usize) -> String {
    let hand = first_hand(data, num_hands);

    let (label, confirmed, callback) = TRACKER_STATE.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        let status = state.status;
        let Some(tracker) = state.tracker.as_mut() else {
            return (GestureLabel::Unknown, None, None);
        };

        let report = tracker.tick(hand.as_deref(), &status);
        let label = match report.frame {
            FrameOutcome::Classified { label, .. } => {
                if let Some(classification) = tracker.last_classification() {
                    log::debug!("{} via {}\n{}", label, classification.rule.unwrap_or("-"), classification.pose);
                }
                label
            }
            FrameOutcome::Throttled => tracker
                .last_classification()
                .map(|c| c.label)
                .unwrap_or_default(),
            FrameOutcome::NoHand | FrameOutcome::Stopped => GestureLabel::Unknown,
        };

        let callback = report.confirmed.and(state.on_confirmed.clone());
        (label, report.confirmed, callback)
    });

    // Borrow released: the callback may call back into this module
    if let (Some(gesture), Some(callback)) = (confirmed, callback) {
        notify_confirmed(&callback, gesture);
    }

    label.as_str().to_string()
}

fn notify_confirmed(callback: &js_sys::Function, gesture: Move) {
    if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_str(gesture.as_str())) {
        log::error!("gesture callback failed: {:?}", err);
    }
}

/// Register the function called with "rock" | "paper" | "scissors" on confirmation
#[wasm_bindgen]
pub fn on_gesture_confirmed(callback: js_sys::Function) {
    TRACKER_STATE.with(|state_cell| {
        state_cell.borrow_mut().on_confirmed = Some(callback);
    });
}

/// Report the game's status; moves are only accepted while a game is running
/// and no round is being played out
#[wasm_bindgen]
pub fn set_game_status(started: bool, round_in_progress: bool, game_over: bool) {
    TRACKER_STATE.with(|state_cell| {
        state_cell.borrow_mut().status = RoundStatus {
            started,
            round_in_progress,
            game_over,
        };
    });
}

/// The round that used the confirmed move has been played out
#[wasm_bindgen]
pub fn complete_round() {
    TRACKER_STATE.with(|state_cell| {
        if let Some(tracker) = state_cell.borrow_mut().tracker.as_mut() {
            tracker.complete_round();
        }
    });
}

/// New game: drop any displayed or pending gesture
#[wasm_bindgen]
pub fn reset_tracking() {
    TRACKER_STATE.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        state.status = RoundStatus::default();
        if let Some(tracker) = state.tracker.as_mut() {
            tracker.reset();
        }
    });
}

/// Cancel the confirmation window and end the session
#[wasm_bindgen]
pub fn stop_tracking() {
    TRACKER_STATE.with(|state_cell| {
        if let Some(mut tracker) = state_cell.borrow_mut().tracker.take() {
            tracker.stop();
        }
    });
}

/// Gesture shown to the player while it awaits confirmation
#[wasm_bindgen]
pub fn get_displayed_gesture() -> Option<String> {
    TRACKER_STATE.with(|state_cell| {
        state_cell
            .borrow()
            .tracker
            .as_ref()
            .and_then(|tracker| tracker.displayed_gesture())
            .map(|gesture| gesture.as_str().to_string())
    })
}

/// Readout of the last classified frame
#[wasm_bindgen]
pub fn get_gesture_debug_info() -> String {
    TRACKER_STATE.with(|state_cell| {
        let state = state_cell.borrow();
        let Some(tracker) = state.tracker.as_ref() else {
            return "Tracking stopped".to_string();
        };
        match tracker.last_classification() {
            Some(classification) => format!(
                "Gesture: {} ({})\nStable run: {}/{}\n{}",
                classification.label,
                classification.rule.unwrap_or("no rule"),
                tracker.stabilizer().state().run_length,
                tracker.stabilizer().threshold(),
                classification.pose
            ),
            None => "No hand detected".to_string(),
        }
    })
}

/// Toggle per-frame diagnostics in the console
#[wasm_bindgen]
pub fn set_debug_mode(enabled: bool) {
    let level = if enabled { LevelFilter::Debug } else { LevelFilter::Info };
    console::init(level);
    log::info!("debug mode {}", if enabled { "on" } else { "off" });
}
