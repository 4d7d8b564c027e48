//! Classifier module - rock/paper/scissors from 21 hand keypoints
//!
//! Pipeline per frame: keypoints → finger states → hand metrics → rule cascade.
//! Everything here is a pure function of one frame.

mod config;
mod finger;
pub mod landmarks;
mod metrics;
mod model;
mod pose;
mod rules;

#[cfg(test)]
pub(crate) mod fixtures;

pub use config::ClassifierConfig;
pub use finger::FingerState;
pub use landmarks::{ClassifyError, Finger, HandLandmarks, Keypoint, LANDMARK_COUNT, WRIST};
pub use metrics::HandMetrics;
pub use model::{GestureLabel, Move, GESTURE_NAMES};
pub use pose::HandPose;
pub use rules::{classify, classify_hand, evaluate, Classification, Rule, RuleTest, RULES};
