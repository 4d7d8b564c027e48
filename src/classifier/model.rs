//! Gesture labels
//!
//! `GestureLabel` is the per-frame classifier output and includes `Unknown`.
//! `Move` is the subset that may be stabilized, confirmed, and played.

use std::fmt;

/// Gesture labels (order matches the classifier's rule priority)
pub const GESTURE_NAMES: [&str; 4] = ["rock", "paper", "scissors", "unknown"];

/// Per-frame classification result
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GestureLabel {
    Rock,
    Paper,
    Scissors,
    #[default]
    Unknown,
}

impl GestureLabel {
    pub fn as_str(&self) -> &'static str {
        GESTURE_NAMES[*self as usize]
    }

    /// The playable move for this label, `None` for `Unknown`
    pub fn as_move(&self) -> Option<Move> {
        match self {
            GestureLabel::Rock => Some(Move::Rock),
            GestureLabel::Paper => Some(Move::Paper),
            GestureLabel::Scissors => Some(Move::Scissors),
            GestureLabel::Unknown => None,
        }
    }
}

impl fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A gesture that can be handed to the game round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub fn as_str(&self) -> &'static str {
        self.label().as_str()
    }

    pub fn label(&self) -> GestureLabel {
        match self {
            Move::Rock => GestureLabel::Rock,
            Move::Paper => GestureLabel::Paper,
            Move::Scissors => GestureLabel::Scissors,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_is_not_playable() {
        assert_eq!(GestureLabel::Unknown.as_move(), None);
        assert_eq!(GestureLabel::Paper.as_move(), Some(Move::Paper));
    }

    #[test]
    fn test_names_match_labels() {
        let labels = [
            GestureLabel::Rock,
            GestureLabel::Paper,
            GestureLabel::Scissors,
            GestureLabel::Unknown,
        ];
        let names: Vec<&str> = labels.iter().map(|l| l.as_str()).collect();
        assert_eq!(names, ["rock", "paper", "scissors", "unknown"]);
        assert_eq!(GestureLabel::default().to_string(), "unknown");
        assert_eq!(Move::Scissors.to_string(), "scissors");
    }
}
