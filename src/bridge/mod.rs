//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod console;
mod landmarks;
mod tracker_integration;

pub use tracker_integration::{
    // WASM entry points
    start_tracking,
    process_hand_frame,
    set_game_status,
    complete_round,
    reset_tracking,
    stop_tracking,
    on_gesture_confirmed,
    get_displayed_gesture,
    get_gesture_debug_info,
    set_debug_mode,
    // Internal API
    init_logging,
};
