//! Tracker module - the single actor that owns all gesture state
//!
//! Re-exports only. All logic in submodules.

mod config;
mod session;

pub use config::{ConfigError, TrackerConfig};
pub use session::{FrameOutcome, GestureTracker, TickReport};
