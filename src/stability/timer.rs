//! Single-slot scheduled timer
//!
//! At most one deadline is live. Arming replaces (and so cancels) whatever
//! was pending; the returned handle identifies which arming is current.
//! The owner polls `take_expired` with the current time.

/// Identifies one arming of a `TimerSlot`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerHandle(u64);

#[derive(Debug, Default)]
pub struct TimerSlot {
    pending: Option<(TimerHandle, f64)>,
    next_id: u64,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a deadline `delay_ms` after `now_ms`, cancelling any prior one
    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.pending = Some((handle, now_ms + delay_ms));
        handle
    }

    /// Cancel `handle` if it is still the live timer. Stale handles are ignored.
    pub fn cancel(&mut self, handle: TimerHandle) {
        if self.live() == Some(handle) {
            self.pending = None;
        }
    }

    pub fn live(&self) -> Option<TimerHandle> {
        self.pending.map(|(handle, _)| handle)
    }

    /// Fires the live timer if its deadline has passed. A fired timer is
    /// removed, so each arming fires at most once.
    pub fn take_expired(&mut self, now_ms: f64) -> Option<TimerHandle> {
        match self.pending {
            Some((handle, deadline)) if now_ms >= deadline => {
                self.pending = None;
                Some(handle)
            }
            _ => None,
        }
    }
}
