//! Angles between finger segments using the dot product
//!
//! `angle_between` works on unit direction vectors. `curl` works on a joint
//! triple (base → middle → tip) and normalizes the bend into 0..1.

use super::vectors::{Vec2, dot};

/// Cosine clamp for `angle_between`. Keeps `acos` off the ±1 edge where
/// floating-point overshoot would produce NaN.
pub const ANGLE_COS_LIMIT: f32 = 0.99;

/// Angle between two unit vectors in radians
///
/// Parallel vectors report `acos(0.99)` rather than 0 because of the clamp.
pub fn angle_between(u: Vec2, v: Vec2) -> f32 {
    dot(u, v).clamp(-ANGLE_COS_LIMIT, ANGLE_COS_LIMIT).acos()
}

/// Finger curl from three joints
///
/// Returns:
/// - 0.0 = base→middle and middle→tip point the same way (straight)
/// - 0.5 = segments at a right angle
/// - 1.0 = tip folded straight back over the middle joint
pub fn curl(base: Vec2, middle: Vec2, tip: Vec2) -> f32 {
    let base_to_middle = middle - base;
    let middle_to_tip = tip - middle;

    let mag1 = base_to_middle.norm();
    let mag2 = middle_to_tip.norm();

    if mag1 == 0.0 || mag2 == 0.0 {
        return 0.0;
    }

    let cos_angle = (dot(base_to_middle, middle_to_tip) / (mag1 * mag2)).clamp(-1.0, 1.0);

    (1.0 - cos_angle) / 2.0
}
