//! Synthetic hands for tests
//!
//! Camera pixel space (640×480), palm toward the camera, fingers pointing up
//! (negative y). Wrist at (320, 400), finger bases on y = 300 spaced 30px.

use super::landmarks::{
    Finger, HandLandmarks, Keypoint, LANDMARK_COUNT, THUMB_CMC, THUMB_IP, THUMB_MCP, THUMB_TIP,
    WRIST,
};
use crate::geometry::Vec2;

const WRIST_POS: (f32, f32) = (320.0, 400.0);
const BASE_Y: f32 = 300.0;
const FRAME_WIDTH: f32 = 640.0;

enum Shape {
    /// Straight along `dir` with the tip `length` from the base
    Straight { dir: Vec2, length: f32 },
    /// Mid joint 30px up, tip turned back at curl 0.8
    Curled,
}

fn up(length: f32) -> Shape {
    Shape::Straight { dir: Vec2::new(0.0, -1.0), length }
}

fn base_x(finger: Finger) -> f32 {
    280.0 + 30.0 * finger as usize as f32
}

fn build(shapes: [Shape; 4]) -> HandLandmarks {
    build_at(Finger::ALL.map(base_x), shapes)
}

/// Like `build`, with each finger base at the given x
fn build_at(bases_x: [f32; 4], shapes: [Shape; 4]) -> HandLandmarks {
    let mut points = [Keypoint::default(); LANDMARK_COUNT];
    points[WRIST] = Keypoint::new(WRIST_POS.0, WRIST_POS.1);
    points[THUMB_CMC] = Keypoint::new(300.0, 390.0);
    points[THUMB_MCP] = Keypoint::new(280.0, 370.0);
    points[THUMB_IP] = Keypoint::new(265.0, 355.0);
    points[THUMB_TIP] = Keypoint::new(255.0, 345.0);

    for (finger, shape) in Finger::ALL.into_iter().zip(shapes) {
        let (base_idx, pip_idx, tip_idx) = finger.joints();
        let base = Vec2::new(bases_x[finger as usize], BASE_Y);
        let (pip, tip) = match shape {
            Shape::Straight { dir, length } => (base + dir * 40.0, base + dir * length),
            Shape::Curled => {
                let pip = base + Vec2::new(0.0, -30.0);
                (pip, pip + Vec2::new(16.0, 12.0))
            }
        };
        let dip = (pip + tip) / 2.0;

        points[base_idx] = Keypoint::new(base.x, base.y);
        points[pip_idx] = Keypoint::new(pip.x, pip.y);
        points[pip_idx + 1] = Keypoint::new(dip.x, dip.y);
        points[tip_idx] = Keypoint::new(tip.x, tip.y);
    }

    HandLandmarks::new(points)
}

/// Closed fist, every finger curl 0.8
pub fn fist() -> HandLandmarks {
    build([Shape::Curled, Shape::Curled, Shape::Curled, Shape::Curled])
}

/// Four straight fingers, tips level, evenly spaced
pub fn open_palm() -> HandLandmarks {
    build([up(90.0), up(90.0), up(90.0), up(90.0)])
}

/// Four straight fingers with uneven tip heights (60px Y range)
pub fn staggered_palm() -> HandLandmarks {
    build([up(90.0), up(120.0), up(100.0), up(60.0)])
}

/// Four straight level fingers, tip gaps 10 / 80 / 10
pub fn uneven_palm() -> HandLandmarks {
    build_at([280.0, 290.0, 370.0, 380.0], [up(90.0), up(90.0), up(90.0), up(90.0)])
}

/// Four straight level fingers bunched together, tip gaps 2px
pub fn bunched_palm() -> HandLandmarks {
    build_at([316.0, 318.0, 320.0, 322.0], [up(90.0), up(90.0), up(90.0), up(90.0)])
}

/// Index and middle straight and parallel, ring and pinky curled
pub fn scissors() -> HandLandmarks {
    build([up(90.0), up(90.0), Shape::Curled, Shape::Curled])
}

/// Index and middle opened 30° apart
pub fn v_scissors() -> HandLandmarks {
    let tilt = 15f32.to_radians();
    build([
        Shape::Straight { dir: Vec2::new(-tilt.sin(), -tilt.cos()), length: 90.0 },
        Shape::Straight { dir: Vec2::new(tilt.sin(), -tilt.cos()), length: 90.0 },
        Shape::Curled,
        Shape::Curled,
    ])
}

/// Index only
pub fn pointing() -> HandLandmarks {
    build([up(90.0), Shape::Curled, Shape::Curled, Shape::Curled])
}

/// Every keypoint on the wrist
pub fn collapsed() -> HandLandmarks {
    HandLandmarks::new([Keypoint::new(WRIST_POS.0, WRIST_POS.1); LANDMARK_COUNT])
}

/// Horizontal flip across the frame centre
pub fn mirrored(hand: &HandLandmarks) -> HandLandmarks {
    HandLandmarks::new(hand.keypoints().map(|p| Keypoint::new(FRAME_WIDTH - p.x, p.y)))
}

/// Rotate the whole hand about the wrist
pub fn rotated(hand: &HandLandmarks, radians: f32) -> HandLandmarks {
    let (sin, cos) = radians.sin_cos();
    let wrist = hand.wrist();
    HandLandmarks::new(hand.keypoints().map(|p| {
        let d = p.xy() - wrist;
        Keypoint::new(wrist.x + d.x * cos - d.y * sin, wrist.y + d.x * sin + d.y * cos)
    }))
}
