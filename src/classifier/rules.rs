//! Gesture rule cascade
//!
//! Rules are evaluated top to bottom and the first match wins. Order is part
//! of the behaviour: the paper sub-rules overlap, and a hand that satisfies
//! both a paper and a scissors rule is paper because paper is checked first.
//!
//! Priority:
//! 1. rock      - every non-thumb finger curled
//! 2. paper     - level, spread, straight, aggregate (any one)
//! 3. scissors  - closed pair, V-shape (any one)
//! 4. unknown   - nothing matched

use super::config::ClassifierConfig;
use super::landmarks::{ClassifyError, Finger, HandLandmarks, Keypoint};
use super::model::GestureLabel;
use super::pose::HandPose;

pub type RuleTest = fn(&HandPose, &ClassifierConfig) -> bool;

/// A named predicate and the label it produces
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub label: GestureLabel,
    pub test: RuleTest,
}

impl Rule {
    pub fn matches(&self, pose: &HandPose, config: &ClassifierConfig) -> bool {
        (self.test)(pose, config)
    }
}

/// The cascade, in priority order
pub const RULES: [Rule; 7] = [
    Rule { name: "rock/all-curled", label: GestureLabel::Rock, test: rock_all_curled },
    Rule { name: "paper/level", label: GestureLabel::Paper, test: paper_level },
    Rule { name: "paper/spread", label: GestureLabel::Paper, test: paper_spread },
    Rule { name: "paper/straight", label: GestureLabel::Paper, test: paper_straight },
    Rule { name: "paper/aggregate", label: GestureLabel::Paper, test: paper_aggregate },
    Rule { name: "scissors/closed", label: GestureLabel::Scissors, test: scissors_closed },
    Rule { name: "scissors/v-shape", label: GestureLabel::Scissors, test: scissors_v_shape },
];

// ============================================================================
// RULE PREDICATES
// ============================================================================

pub fn rock_all_curled(pose: &HandPose, config: &ClassifierConfig) -> bool {
    pose.fingers.iter().all(|f| f.curl > config.rock_min_curl)
}

/// All extended, tips level, gaps even
pub fn paper_level(pose: &HandPose, config: &ClassifierConfig) -> bool {
    let m = &pose.metrics;
    pose.all_extended()
        && m.tip_y_range < config.paper_max_tip_y_range
        && m.max_tip_spacing_deviation < config.paper_max_spacing_deviation
        && m.avg_tip_x_spacing > config.paper_min_tip_x_spacing
}

/// All extended, long fingers over a palm that faces the camera
pub fn paper_spread(pose: &HandPose, config: &ClassifierConfig) -> bool {
    let m = &pose.metrics;
    pose.all_extended()
        && m.finger_palm_ratio > config.paper_min_finger_palm_ratio
        && m.palm_faces_camera()
}

/// Straight fingers, roughly parallel
pub fn paper_straight(pose: &HandPose, config: &ClassifierConfig) -> bool {
    let m = &pose.metrics;
    pose.fingers.iter().all(|f| f.curl < config.paper_max_straight_curl)
        && m.index_middle_angle < config.paper_max_adjacent_angle
        && m.middle_ring_angle < config.paper_max_adjacent_angle
        && m.ring_pinky_angle < config.paper_max_adjacent_angle
}

pub fn paper_aggregate(pose: &HandPose, config: &ClassifierConfig) -> bool {
    pose.total_curl() < config.paper_max_total_curl
        && pose.total_extension() > config.paper_min_total_extension
}

fn scissors_fingers(pose: &HandPose) -> bool {
    pose.finger(Finger::Index).is_extended
        && pose.finger(Finger::Middle).is_extended
        && !pose.finger(Finger::Ring).is_extended
        && !pose.finger(Finger::Pinky).is_extended
}

/// Index and middle out, close together and parallel
pub fn scissors_closed(pose: &HandPose, config: &ClassifierConfig) -> bool {
    let m = &pose.metrics;
    scissors_fingers(pose)
        && m.index_middle_angle < config.scissors_max_angle
        && m.index_middle_tip_distance < config.scissors_max_tip_distance
}

/// Index and middle out, opening into a V
pub fn scissors_v_shape(pose: &HandPose, config: &ClassifierConfig) -> bool {
    let m = &pose.metrics;
    scissors_fingers(pose)
        && m.index_middle_angle < config.scissors_max_v_angle
        && m.index_middle_angle > config.scissors_min_v_angle
        && m.index_middle_tip_distance > m.index_middle_base_distance * config.scissors_min_v_spread
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Result of classifying one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    pub label: GestureLabel,
    /// Name of the matching rule, `None` for `Unknown`
    pub rule: Option<&'static str>,
    pub pose: HandPose,
}

/// Run the cascade on an extracted pose
pub fn evaluate(pose: HandPose, config: &ClassifierConfig) -> Classification {
    match RULES.iter().find(|rule| rule.matches(&pose, config)) {
        Some(rule) => Classification { label: rule.label, rule: Some(rule.name), pose },
        None => Classification { label: GestureLabel::Unknown, rule: None, pose },
    }
}

/// Classify a validated hand, keeping the pose for diagnostics
pub fn classify_hand(hand: &HandLandmarks, config: &ClassifierConfig) -> Classification {
    evaluate(HandPose::extract(hand, config), config)
}

/// Classify one frame of keypoints
///
/// Pure function of the keypoints: the same frame always yields the same
/// label. Fails only when fewer than 21 keypoints are supplied.
pub fn classify(keypoints: &[Keypoint], config: &ClassifierConfig) -> Result<GestureLabel, ClassifyError> {
    let hand = HandLandmarks::try_from(keypoints)?;
    Ok(classify_hand(&hand, config).label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::fixtures;
    use crate::classifier::landmarks::LANDMARK_COUNT;

    fn run(hand: &HandLandmarks) -> Classification {
        classify_hand(hand, &ClassifierConfig::default())
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<&str> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            [
                "rock/all-curled",
                "paper/level",
                "paper/spread",
                "paper/straight",
                "paper/aggregate",
                "scissors/closed",
                "scissors/v-shape",
            ]
        );
    }

    #[test]
    fn test_fist_is_rock() {
        let result = run(&fixtures::fist());
        assert_eq!(result.label, GestureLabel::Rock);
        assert_eq!(result.rule, Some("rock/all-curled"));
    }

    #[test]
    fn test_rock_ignores_wrist_rotation() {
        for degrees in [0.0f32, 35.0, 90.0, 160.0, 270.0] {
            let hand = fixtures::rotated(&fixtures::fist(), degrees.to_radians());
            assert_eq!(run(&hand).label, GestureLabel::Rock, "rotation {}°", degrees);
        }
    }

    #[test]
    fn test_open_palm_is_level_paper() {
        let result = run(&fixtures::open_palm());
        assert_eq!(result.label, GestureLabel::Paper);
        assert_eq!(result.rule, Some("paper/level"));
    }

    #[test]
    fn test_staggered_palm_is_spread_paper() {
        let result = run(&fixtures::staggered_palm());
        assert_eq!(result.label, GestureLabel::Paper);
        assert_eq!(result.rule, Some("paper/spread"));
    }

    #[test]
    fn test_uneven_gaps_fail_level_paper() {
        let config = ClassifierConfig::default();
        let result = run(&fixtures::uneven_palm());
        let m = result.pose.metrics;
        assert!(result.pose.all_extended());
        assert!(m.tip_y_range < 1e-4);
        assert!(m.avg_tip_x_spacing > 10.0);
        assert!(m.max_tip_spacing_deviation > 30.0);
        assert!(!paper_level(&result.pose, &config));
        assert_eq!(result.rule, Some("paper/spread"));
    }

    #[test]
    fn test_bunched_tips_fail_level_paper() {
        let config = ClassifierConfig::default();
        let result = run(&fixtures::bunched_palm());
        let m = result.pose.metrics;
        assert!(result.pose.all_extended());
        assert!(m.max_tip_spacing_deviation < 30.0);
        assert!(m.avg_tip_x_spacing < 10.0);
        assert!(!paper_level(&result.pose, &config));
        assert_eq!(result.rule, Some("paper/spread"));
    }

    #[test]
    fn test_non_finite_keypoint_is_unknown() {
        let hand = fixtures::open_palm();
        let mut points = *hand.keypoints();
        points[8] = Keypoint::new(f32::NAN, f32::NAN);
        let label = classify(&points, &ClassifierConfig::default()).unwrap();
        assert_eq!(label, GestureLabel::Unknown);
    }

    #[test]
    fn test_mirrored_staggered_palm_falls_through_to_straight() {
        let result = run(&fixtures::mirrored(&fixtures::staggered_palm()));
        assert!(!result.pose.metrics.palm_faces_camera());
        assert_eq!(result.label, GestureLabel::Paper);
        assert_eq!(result.rule, Some("paper/straight"));
    }

    #[test]
    fn test_aggregate_paper_catches_loose_hand() {
        let config = ClassifierConfig::default();
        let mut pose = HandPose::extract(&fixtures::open_palm(), &config);
        // Bent past the straight-paper limit, not extended, but low total curl
        for f in pose.fingers.iter_mut() {
            f.is_extended = false;
        }
        pose.fingers[3].curl = 0.35;
        pose.fingers[0].curl = 0.2;

        assert!(!paper_level(&pose, &config));
        assert!(!paper_spread(&pose, &config));
        assert!(!paper_straight(&pose, &config));
        assert!(paper_aggregate(&pose, &config));
        assert_eq!(evaluate(pose, &config).rule, Some("paper/aggregate"));
    }

    #[test]
    fn test_scissors_closed() {
        let result = run(&fixtures::scissors());
        assert_eq!(result.label, GestureLabel::Scissors);
        assert_eq!(result.rule, Some("scissors/closed"));
        assert!(result.pose.metrics.index_middle_tip_distance < 50.0);
    }

    #[test]
    fn test_scissors_v_shape() {
        let result = run(&fixtures::v_scissors());
        assert_eq!(result.label, GestureLabel::Scissors);
        assert_eq!(result.rule, Some("scissors/v-shape"));
        assert!(result.pose.metrics.index_middle_tip_distance > 50.0);
    }

    #[test]
    fn test_pointing_is_unknown() {
        let result = run(&fixtures::pointing());
        assert_eq!(result.label, GestureLabel::Unknown);
        assert_eq!(result.rule, None);
    }

    #[test]
    fn test_collapsed_hand_is_unknown() {
        assert_eq!(run(&fixtures::collapsed()).label, GestureLabel::Unknown);
    }

    #[test]
    fn test_rock_wins_over_everything() {
        let config = ClassifierConfig::default();
        let mut pose = HandPose::extract(&fixtures::fist(), &config);
        // Force scissors-looking finger flags onto a fully curled hand
        pose.fingers[0].is_extended = true;
        pose.fingers[1].is_extended = true;
        assert_eq!(evaluate(pose, &config).label, GestureLabel::Rock);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let config = ClassifierConfig::default();
        for hand in [fixtures::fist(), fixtures::open_palm(), fixtures::scissors(), fixtures::pointing()] {
            let first = classify(hand.keypoints(), &config).unwrap();
            let second = classify(hand.keypoints(), &config).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_classify_rejects_partial_hand() {
        let hand = fixtures::fist();
        let partial = &hand.keypoints()[..LANDMARK_COUNT - 1];
        assert_eq!(
            classify(partial, &ClassifierConfig::default()),
            Err(ClassifyError::InsufficientLandmarks { expected: 21, actual: 20 })
        );
    }

    #[test]
    fn test_tuned_threshold_changes_outcome() {
        // Pushing the rock threshold past the fixture's 0.8 curl disables rock
        let config = ClassifierConfig { rock_min_curl: 0.85, ..Default::default() };
        assert_ne!(classify_hand(&fixtures::fist(), &config).label, GestureLabel::Rock);
    }
}
