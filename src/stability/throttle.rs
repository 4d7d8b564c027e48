//! Detection throttle
//!
//! Caps per-frame classification at one run per interval, independent of the
//! display refresh rate. Ticks inside the window are dropped, never queued.

/// Default detection interval (ms)
pub const DETECTION_INTERVAL_MS: f64 = 100.0;

pub struct FrameThrottle {
    interval_ms: f64,
    last_run_ms: Option<f64>,
}

impl FrameThrottle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_run_ms: None,
        }
    }

    /// Returns true if a frame at `now_ms` should be processed, and if so
    /// starts a new window at `now_ms`.
    pub fn admit(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_run_ms {
            if now_ms - last < self.interval_ms {
                return false;
            }
        }
        self.last_run_ms = Some(now_ms);
        true
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn reset(&mut self) {
        self.last_run_ms = None;
    }
}

impl Default for FrameThrottle {
    fn default() -> Self {
        Self::new(DETECTION_INTERVAL_MS)
    }
}
