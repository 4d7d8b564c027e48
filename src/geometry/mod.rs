//! Geometry module - 2D vector math over hand keypoints
//!
//! Re-exports only. All logic in submodules.

mod vectors;
mod angles;

pub use vectors::{Vec2, distance, direction, dot, cross};
pub use angles::{angle_between, curl, ANGLE_COS_LIMIT};
