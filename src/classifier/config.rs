//! Classifier thresholds
//!
//! Every value below is an empirically tuned constant. The defaults reproduce
//! the shipped behaviour exactly; tuning happens here and nowhere else.

use std::f32::consts::PI;
use serde::{Deserialize, Serialize};

/// Named thresholds for finger state and the gesture rule cascade
///
/// Distances are in camera pixels, angles in radians.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Finger counts as extended only above this tip/mid extension ratio
    pub extended_min_ratio: f32,
    /// ...and only below this curl
    pub extended_max_curl: f32,

    /// Rock: every non-thumb finger curled past this
    pub rock_min_curl: f32,

    /// Paper (level): fingertip Y range must stay under this
    pub paper_max_tip_y_range: f32,
    /// Paper (level): mean gap between neighbouring fingertips (X)
    pub paper_min_tip_x_spacing: f32,
    /// Paper (level): worst single gap deviation from the mean
    pub paper_max_spacing_deviation: f32,
    /// Paper (spread): finger area over palm area
    pub paper_min_finger_palm_ratio: f32,
    /// Paper (straight): per-finger curl ceiling
    pub paper_max_straight_curl: f32,
    /// Paper (straight): adjacent finger direction angle ceiling
    pub paper_max_adjacent_angle: f32,
    /// Paper (aggregate): sum of curls ceiling
    pub paper_max_total_curl: f32,
    /// Paper (aggregate): sum of extension ratios floor
    pub paper_min_total_extension: f32,

    /// Scissors (closed): index/middle angle ceiling
    pub scissors_max_angle: f32,
    /// Scissors (closed): index/middle tip distance ceiling
    pub scissors_max_tip_distance: f32,
    /// Scissors (V): open angle window, exclusive
    pub scissors_min_v_angle: f32,
    pub scissors_max_v_angle: f32,
    /// Scissors (V): tip gap must exceed base gap by this factor
    pub scissors_min_v_spread: f32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            extended_min_ratio: 1.2,
            extended_max_curl: 0.5,
            rock_min_curl: 0.4,
            paper_max_tip_y_range: 50.0,
            paper_min_tip_x_spacing: 10.0,
            paper_max_spacing_deviation: 30.0,
            paper_min_finger_palm_ratio: 0.6,
            paper_max_straight_curl: 0.3,
            paper_max_adjacent_angle: PI / 4.0,
            paper_max_total_curl: 1.0,
            paper_min_total_extension: 5.0,
            scissors_max_angle: PI / 4.0,
            scissors_max_tip_distance: 50.0,
            scissors_min_v_angle: PI / 12.0,
            scissors_max_v_angle: PI / 3.0,
            scissors_min_v_spread: 1.2,
        }
    }
}

impl ClassifierConfig {
    /// Name of the first threshold that is NaN or infinite
    pub fn first_non_finite(&self) -> Option<&'static str> {
        let fields = [
            ("extended_min_ratio", self.extended_min_ratio),
            ("extended_max_curl", self.extended_max_curl),
            ("rock_min_curl", self.rock_min_curl),
            ("paper_max_tip_y_range", self.paper_max_tip_y_range),
            ("paper_min_tip_x_spacing", self.paper_min_tip_x_spacing),
            ("paper_max_spacing_deviation", self.paper_max_spacing_deviation),
            ("paper_min_finger_palm_ratio", self.paper_min_finger_palm_ratio),
            ("paper_max_straight_curl", self.paper_max_straight_curl),
            ("paper_max_adjacent_angle", self.paper_max_adjacent_angle),
            ("paper_max_total_curl", self.paper_max_total_curl),
            ("paper_min_total_extension", self.paper_min_total_extension),
            ("scissors_max_angle", self.scissors_max_angle),
            ("scissors_max_tip_distance", self.scissors_max_tip_distance),
            ("scissors_min_v_angle", self.scissors_min_v_angle),
            ("scissors_max_v_angle", self.scissors_max_v_angle),
            ("scissors_min_v_spread", self.scissors_min_v_spread),
        ];

        fields.iter().find(|(_, value)| !value.is_finite()).map(|(name, _)| *name)
    }
}
