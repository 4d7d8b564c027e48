//! Gesture tracking session - the per-tick pipeline
//!
//! One session owns all mutable state (throttle, stabilizer, confirmation
//! gate) and is driven from a single place: the page's animation-frame loop.
//! Each tick:
//! 1. fires the confirmation window if it has elapsed
//! 2. drops the frame if it falls inside the detection interval
//! 3. classifies the hand (if a complete one was supplied)
//! 4. feeds the label to the stabilizer and any stable move to the gate

use crate::classifier::{classify_hand, Classification, GestureLabel, HandLandmarks, Keypoint, Move};
use crate::stability::{Clock, ConfirmationGate, FrameThrottle, GestureStabilizer, MoveGuard};
use super::config::TrackerConfig;

/// What happened to this tick's frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Session has been stopped; nothing was evaluated
    Stopped,
    /// Inside the detection interval; frame skipped
    Throttled,
    /// No complete hand in the frame; stabilizer untouched
    NoHand,
    Classified {
        label: GestureLabel,
        /// Set when the label's run has reached the stability threshold
        stable: Option<Move>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickReport {
    pub frame: FrameOutcome,
    /// The player's move for the round, reported on exactly one tick
    pub confirmed: Option<Move>,
}

pub struct GestureTracker<C: Clock> {
    config: TrackerConfig,
    clock: C,
    throttle: FrameThrottle,
    stabilizer: GestureStabilizer,
    gate: ConfirmationGate,
    last_classification: Option<Classification>,
    running: bool,
}

impl<C: Clock> GestureTracker<C> {
    pub fn new(config: TrackerConfig, clock: C) -> Self {
        Self {
            throttle: FrameThrottle::new(config.detection_interval_ms),
            stabilizer: GestureStabilizer::new(config.stability_threshold),
            gate: ConfirmationGate::new(config.confirmation_ms),
            config,
            clock,
            last_classification: None,
            running: true,
        }
    }

    /// Process one animation-frame tick
    ///
    /// `hand` is the first detected hand's keypoints, if any. `guard` reports
    /// whether the game currently wants a move.
    pub fn tick(&mut self, hand: Option<&[Keypoint]>, guard: &impl MoveGuard) -> TickReport {
        if !self.running {
            return TickReport { frame: FrameOutcome::Stopped, confirmed: None };
        }

        let now = self.clock.now_ms();

        let confirmed = self.gate.poll(now, guard);
        if let Some(gesture) = confirmed {
            log::info!("✅ gesture confirmed: {}", gesture);
        }

        if !self.throttle.admit(now) {
            return TickReport { frame: FrameOutcome::Throttled, confirmed };
        }

        let frame = match hand.map(HandLandmarks::try_from) {
            None => FrameOutcome::NoHand,
            Some(Err(err)) => {
                log::debug!("skipping frame: {}", err);
                FrameOutcome::NoHand
            }
            Some(Ok(landmarks)) => self.classify_frame(&landmarks, now, guard),
        };

        TickReport { frame, confirmed }
    }

    fn classify_frame(&mut self, hand: &HandLandmarks, now: f64, guard: &impl MoveGuard) -> FrameOutcome {
        let classification = classify_hand(hand, &self.config.classifier);
        self.last_classification = Some(classification);

        let label = classification.label;
        let stable = self.stabilizer.observe(label);

        if let Some(gesture) = stable {
            if self.gate.offer(gesture, now, guard).is_some() {
                log::debug!(
                    "stable {} (rule {}), confirming in {}ms",
                    gesture,
                    classification.rule.unwrap_or("-"),
                    self.config.confirmation_ms
                );
            }
        }

        FrameOutcome::Classified { label, stable }
    }

    /// The round that consumed the confirmed move is over
    pub fn complete_round(&mut self) {
        self.gate.complete_round();
    }

    /// New game: forget every in-flight gesture
    pub fn reset(&mut self) {
        self.gate.reset();
        self.stabilizer.reset();
        self.throttle.reset();
        self.last_classification = None;
    }

    /// Tear down: cancel the confirmation window and ignore further ticks
    pub fn stop(&mut self) {
        self.gate.reset();
        self.running = false;
        log::info!("gesture tracking stopped");
    }

    /// Gesture currently shown to the player, awaiting confirmation
    pub fn displayed_gesture(&self) -> Option<Move> {
        self.gate.candidate()
    }

    pub fn last_classification(&self) -> Option<&Classification> {
        self.last_classification.as_ref()
    }

    pub fn stabilizer(&self) -> &GestureStabilizer {
        &self.stabilizer
    }

    pub fn gate(&self) -> &ConfirmationGate {
        &self.gate
    }
}
