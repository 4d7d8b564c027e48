//! Point and vector primitives
//!
//! Keypoints arrive in camera pixel space; everything here is plain 2D math
//! on `nalgebra::Vector2<f32>`. Degenerate input (coincident points) yields
//! zero rather than NaN.

use nalgebra::Vector2;

/// 2D point or vector in camera pixel coordinates
pub type Vec2 = Vector2<f32>;

/// Euclidean distance between two points
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).norm()
}

/// Unit vector pointing from `base` to `tip`
///
/// Returns the zero vector when the points coincide.
pub fn direction(base: Vec2, tip: Vec2) -> Vec2 {
    let delta = tip - base;
    let magnitude = delta.norm();

    if magnitude == 0.0 {
        return Vec2::zeros();
    }

    delta / magnitude
}

pub fn dot(u: Vec2, v: Vec2) -> f32 {
    u.dot(&v)
}

/// z-component of the 3D cross product of two planar vectors
pub fn cross(u: Vec2, v: Vec2) -> f32 {
    u.perp(&v)
}
