//! Hand keypoint topology and validation
//!
//! The upstream hand-pose model emits 21 keypoints per hand in a fixed
//! anatomical order. The classifier only runs on a complete set.

use thiserror::Error;
use crate::geometry::Vec2;

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Keypoints per hand
pub const LANDMARK_COUNT: usize = 21;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifyError {
    #[error("insufficient landmarks: expected {expected}, got {actual}")]
    InsufficientLandmarks { expected: usize, actual: usize },
}

/// A single hand keypoint in camera pixel coordinates
///
/// `z` is carried through from the pose model but never read by the
/// classifier; all gesture math is planar.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Keypoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Keypoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// The four non-thumb fingers, in index → pinky order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Finger {
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 4] = [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky];

    /// (base, mid-joint, tip) landmark indices used for finger state
    pub fn joints(&self) -> (usize, usize, usize) {
        match self {
            Finger::Index => (INDEX_MCP, INDEX_PIP, INDEX_TIP),
            Finger::Middle => (MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP),
            Finger::Ring => (RING_MCP, RING_PIP, RING_TIP),
            Finger::Pinky => (PINKY_MCP, PINKY_PIP, PINKY_TIP),
        }
    }

    /// One-letter tag for debug readouts
    pub fn tag(&self) -> char {
        match self {
            Finger::Index => 'I',
            Finger::Middle => 'M',
            Finger::Ring => 'R',
            Finger::Pinky => 'P',
        }
    }
}

/// A complete 21-keypoint hand
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandLandmarks {
    points: [Keypoint; LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(points: [Keypoint; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Planar position of a landmark by index
    pub fn point(&self, index: usize) -> Vec2 {
        self.points[index].xy()
    }

    pub fn wrist(&self) -> Vec2 {
        self.point(WRIST)
    }

    pub fn keypoints(&self) -> &[Keypoint; LANDMARK_COUNT] {
        &self.points
    }
}

impl TryFrom<&[Keypoint]> for HandLandmarks {
    type Error = ClassifyError;

    /// Takes the first 21 keypoints; extra trailing points are ignored.
    fn try_from(keypoints: &[Keypoint]) -> Result<Self, Self::Error> {
        if keypoints.len() < LANDMARK_COUNT {
            return Err(ClassifyError::InsufficientLandmarks {
                expected: LANDMARK_COUNT,
                actual: keypoints.len(),
            });
        }

        let mut points = [Keypoint::default(); LANDMARK_COUNT];
        points.copy_from_slice(&keypoints[..LANDMARK_COUNT]);
        Ok(Self { points })
    }
}
