//! Hand pose - everything the rule cascade reads for one frame

use std::fmt;
use super::config::ClassifierConfig;
use super::finger::FingerState;
use super::landmarks::{Finger, HandLandmarks};
use super::metrics::HandMetrics;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandPose {
    /// Index → pinky
    pub fingers: [FingerState; 4],
    pub metrics: HandMetrics,
}

impl HandPose {
    pub fn extract(hand: &HandLandmarks, config: &ClassifierConfig) -> Self {
        let fingers = Finger::ALL.map(|finger| FingerState::extract(hand, finger, config));
        let metrics = HandMetrics::extract(hand, &fingers);
        Self { fingers, metrics }
    }

    pub fn finger(&self, finger: Finger) -> &FingerState {
        &self.fingers[finger as usize]
    }

    pub fn all_extended(&self) -> bool {
        self.fingers.iter().all(|f| f.is_extended)
    }

    pub fn total_curl(&self) -> f32 {
        self.fingers.iter().map(|f| f.curl).sum()
    }

    pub fn total_extension(&self) -> f32 {
        self.fingers.iter().map(|f| f.extension_ratio).sum()
    }
}

fn write_fingers(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    fingers: &[FingerState; 4],
    value: impl Fn(&FingerState) -> String,
) -> fmt::Result {
    write!(f, "{}:", title)?;
    for (i, finger) in Finger::ALL.iter().enumerate() {
        let sep = if i == 0 { " " } else { ", " };
        write!(f, "{}{}={}", sep, finger.tag(), value(&fingers[i]))?;
    }
    writeln!(f)
}

/// Multi-line debug readout shown in the tracker overlay
impl fmt::Display for HandPose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.metrics;
        write_fingers(f, "Extensions", &self.fingers, |s| format!("{:.2}", s.extension_ratio))?;
        write_fingers(f, "Curls", &self.fingers, |s| format!("{:.2}", s.curl))?;
        writeln!(
            f,
            "Angles: IM={:.2}°, MR={:.2}°, RP={:.2}°",
            m.index_middle_angle.to_degrees(),
            m.middle_ring_angle.to_degrees(),
            m.ring_pinky_angle.to_degrees(),
        )?;
        write_fingers(f, "Extended", &self.fingers, |s| s.is_extended.to_string())?;
        writeln!(f, "Y-Variation: {:.2}", m.tip_y_range)?;
        writeln!(f, "X-Spacing Var: {:.2}", m.max_tip_spacing_deviation)?;
        writeln!(f, "Finger/Palm: {:.2}", m.finger_palm_ratio)?;
        write!(
            f,
            "Palm: {}",
            if m.palm_faces_camera() { "Facing camera" } else { "Facing away" }
        )
    }
}
