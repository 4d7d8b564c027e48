//! Per-finger state from a landmark triple
//!
//! A finger is "extended" only when three independent signals agree:
//! - extension ratio (tip reaches past the mid joint)
//! - low curl (segments roughly collinear)
//! - tip farther from the wrist than the base (pointing outward)

use crate::geometry::{Vec2, curl, direction, distance};
use super::config::ClassifierConfig;
use super::landmarks::{Finger, HandLandmarks};

/// Derived state of one finger for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FingerState {
    /// |base→tip| / |base→mid|, 0 when the mid joint sits on the base
    pub extension_ratio: f32,
    /// 0 = straight, 1 = folded back
    pub curl: f32,
    /// Unit vector base→tip (zero when degenerate)
    pub direction: Vec2,
    pub is_extended: bool,
}

impl FingerState {
    /// Extract state from base, mid-joint, tip and the wrist
    pub fn from_joints(
        base: Vec2,
        middle: Vec2,
        tip: Vec2,
        wrist: Vec2,
        config: &ClassifierConfig,
    ) -> Self {
        let base_to_mid = distance(base, middle);
        let extension_ratio = if base_to_mid == 0.0 {
            0.0
        } else {
            distance(base, tip) / base_to_mid
        };

        let curl = curl(base, middle, tip);
        let points_outward = distance(wrist, tip) > distance(wrist, base);

        let is_extended = extension_ratio > config.extended_min_ratio
            && curl < config.extended_max_curl
            && points_outward;

        Self {
            extension_ratio,
            curl,
            direction: direction(base, tip),
            is_extended,
        }
    }

    /// Extract state for `finger` from a full hand
    pub fn extract(hand: &HandLandmarks, finger: Finger, config: &ClassifierConfig) -> Self {
        let (base, middle, tip) = finger.joints();
        Self::from_joints(
            hand.point(base),
            hand.point(middle),
            hand.point(tip),
            hand.wrist(),
            config,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WRIST: (f32, f32) = (320.0, 400.0);

    fn state(base: (f32, f32), middle: (f32, f32), tip: (f32, f32)) -> FingerState {
        FingerState::from_joints(
            Vec2::new(base.0, base.1),
            Vec2::new(middle.0, middle.1),
            Vec2::new(tip.0, tip.1),
            Vec2::new(WRIST.0, WRIST.1),
            &ClassifierConfig::default(),
        )
    }

    #[test]
    fn test_straight_finger_is_extended() {
        let s = state((310.0, 300.0), (310.0, 260.0), (310.0, 210.0));
        assert!((s.extension_ratio - 2.25).abs() < 1e-5);
        assert!(s.curl.abs() < 1e-6);
        assert!((s.direction.y + 1.0).abs() < 1e-6);
        assert!(s.is_extended);
    }

    #[test]
    fn test_curled_finger_is_not_extended() {
        // mid→tip turns back at ~127°, curl 0.8
        let s = state((310.0, 300.0), (310.0, 270.0), (326.0, 282.0));
        assert!((s.curl - 0.8).abs() < 1e-4);
        assert!(s.extension_ratio < 1.2);
        assert!(!s.is_extended);
    }

    #[test]
    fn test_finger_pointing_at_wrist_is_not_extended() {
        // Straight and long, but the tip lies between base and wrist
        let s = state((320.0, 300.0), (320.0, 330.0), (320.0, 380.0));
        assert!(s.extension_ratio > 1.2);
        assert!(s.curl < 0.5);
        assert!(!s.is_extended);
    }

    #[test]
    fn test_degenerate_finger() {
        let s = state((300.0, 300.0), (300.0, 300.0), (300.0, 300.0));
        assert_eq!(s.extension_ratio, 0.0);
        assert_eq!(s.curl, 0.0);
        assert_eq!(s.direction, Vec2::zeros());
        assert!(!s.is_extended);
    }
}
