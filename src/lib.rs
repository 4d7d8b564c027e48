//! RPS Gesture - webcam hand gestures as rock/paper/scissors moves
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

pub mod geometry;
pub mod classifier;
pub mod stability;
pub mod tracker;
mod bridge;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    complete_round, get_displayed_gesture, get_gesture_debug_info, on_gesture_confirmed,
    process_hand_frame, reset_tracking, set_debug_mode, set_game_status, start_tracking,
    stop_tracking,
};

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    bridge::init_logging();
}
