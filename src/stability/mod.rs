//! Stability module - from noisy per-frame labels to one confirmed move
//!
//! Re-exports only. All logic in submodules.

mod clock;
mod throttle;
mod timer;
mod stabilizer;
mod confirmation_gate;

pub use clock::{Clock, ManualClock, PerformanceClock};
pub use throttle::{FrameThrottle, DETECTION_INTERVAL_MS};
pub use timer::{TimerHandle, TimerSlot};
pub use stabilizer::{GestureStabilizer, StabilizerState, STABILITY_THRESHOLD};
pub use confirmation_gate::{ConfirmationGate, ConfirmationState, MoveGuard, CONFIRMATION_MS};
