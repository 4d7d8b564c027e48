//! Monotonic time sources (milliseconds)

use std::cell::Cell;
use std::rc::Rc;

/// Monotonic millisecond clock driving the throttle and confirmation window
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Browser high-resolution clock (`performance.now()`)
///
/// Falls back to `Date.now()` when no window is available (workers).
#[derive(Clone, Copy, Debug, Default)]
pub struct PerformanceClock;

impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }
}

/// Hand-driven clock for deterministic tests
///
/// Clones share the same time, so a test can keep a handle while the
/// tracker owns another.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self { now: Rc::new(Cell::new(start_ms)) }
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}
