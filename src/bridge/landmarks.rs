//! Landmark decoding for the JS bridge
//!
//! MediaPipe hand results arrive as one flat Float32Array: x, y, z per
//! keypoint, 21 keypoints per hand, hands back to back. Only the first hand
//! is used.

use crate::classifier::{Keypoint, LANDMARK_COUNT};

const VALUES_PER_POINT: usize = 3;
const VALUES_PER_HAND: usize = LANDMARK_COUNT * VALUES_PER_POINT;

/// Keypoints of the first hand in `data`, or `None` when no hand was detected
///
/// A short array yields only the keypoints it fully contains; the tracker
/// then treats the frame as having no usable hand.
pub fn first_hand(data: &[f32], num_hands: usize) -> Option<Vec<Keypoint>> {
    if num_hands == 0 {
        return None;
    }

    let expected = num_hands.saturating_mul(VALUES_PER_HAND);
    if data.len() < expected {
        log::warn!(
            "Invalid hand landmark data length: {} (expected {} for {} hand(s))",
            data.len(),
            expected,
            num_hands
        );
    }

    let hand = &data[..data.len().min(VALUES_PER_HAND)];
    Some(
        hand.chunks_exact(VALUES_PER_POINT)
            .map(|xyz| Keypoint { x: xyz[0], y: xyz[1], z: xyz[2] })
            .collect(),
    )
}
