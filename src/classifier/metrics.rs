//! Whole-hand metrics for one frame
//!
//! Extracted once per frame alongside the four finger states:
//! - adjacent finger angles (index–middle, middle–ring, ring–pinky)
//! - fingertip Y range and X spacing statistics
//! - palm orientation sign (2D cross product, mirrored camera)
//! - finger-to-palm area ratio
//! - index/middle tip and base gaps (scissors)

use crate::geometry::{angle_between, cross, distance};
use super::finger::FingerState;
use super::landmarks::{
    HandLandmarks, INDEX_MCP, INDEX_TIP, MIDDLE_MCP, MIDDLE_TIP, PINKY_MCP, PINKY_TIP,
    RING_MCP, RING_TIP,
};

const FINGER_BASES: [usize; 4] = [INDEX_MCP, MIDDLE_MCP, RING_MCP, PINKY_MCP];
const FINGER_TIPS: [usize; 4] = [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandMetrics {
    pub index_middle_angle: f32,
    pub middle_ring_angle: f32,
    pub ring_pinky_angle: f32,

    /// max(tip.y) - min(tip.y) over the four fingertips
    pub tip_y_range: f32,
    /// Mean |Δx| between neighbouring fingertips
    pub avg_tip_x_spacing: f32,
    /// Largest deviation of a single |Δx| gap from the mean
    pub max_tip_spacing_deviation: f32,

    /// Positive = palm faces the camera
    pub palm_orientation: f32,
    /// Finger area over palm area, 0 when the palm collapses
    pub finger_palm_ratio: f32,

    pub index_middle_tip_distance: f32,
    pub index_middle_base_distance: f32,
}

impl HandMetrics {
    /// Extract metrics from landmarks and already-computed finger states
    /// (index → pinky order)
    pub fn extract(hand: &HandLandmarks, fingers: &[FingerState; 4]) -> Self {
        let wrist = hand.wrist();
        let [index, middle, ring, pinky] = fingers;

        // Fingertip alignment
        let tips = FINGER_TIPS.map(|i| hand.point(i));
        let (min_y, max_y) = tips
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));

        let gaps = [
            (tips[0].x - tips[1].x).abs(),
            (tips[1].x - tips[2].x).abs(),
            (tips[2].x - tips[3].x).abs(),
        ];
        let avg_gap = gaps.iter().sum::<f32>() / gaps.len() as f32;
        let max_deviation = gaps.iter().map(|g| (g - avg_gap).abs()).fold(0.0, f32::max);

        // Palm facing: cross of (index base - wrist) and (pinky base - wrist)
        let bases = FINGER_BASES.map(|i| hand.point(i));
        let palm_orientation = cross(bases[0] - wrist, bases[3] - wrist);

        // Finger area vs palm area
        let palm_width = distance(bases[0], bases[3]);
        let palm_height = bases.iter().map(|b| distance(wrist, *b)).fold(0.0, f32::max);
        let palm_area = palm_width * palm_height;
        let finger_length_sum: f32 = bases.iter().zip(tips.iter()).map(|(b, t)| distance(*b, *t)).sum();
        let finger_area = finger_length_sum * palm_width / 4.0;
        let finger_palm_ratio = if palm_area == 0.0 { 0.0 } else { finger_area / palm_area };

        Self {
            index_middle_angle: angle_between(index.direction, middle.direction),
            middle_ring_angle: angle_between(middle.direction, ring.direction),
            ring_pinky_angle: angle_between(ring.direction, pinky.direction),
            tip_y_range: max_y - min_y,
            avg_tip_x_spacing: avg_gap,
            max_tip_spacing_deviation: max_deviation,
            palm_orientation,
            finger_palm_ratio,
            index_middle_tip_distance: distance(tips[0], tips[1]),
            index_middle_base_distance: distance(bases[0], bases[1]),
        }
    }

    pub fn palm_faces_camera(&self) -> bool {
        self.palm_orientation > 0.0
    }
}
