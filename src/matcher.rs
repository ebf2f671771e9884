//! Presence match between the live frame and the reference image.
//!
//! A "match" only means that at least one face was found in both images.
//! No identity comparison takes place.

use opencv::core::Scalar;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Decide the match from the number of faces on each side
#[must_use]
pub fn evaluate(frame_faces: usize, reference_faces: usize) -> bool {
    frame_faces > 0 && reference_faces > 0
}

/// Shared result of the last background face check
#[derive(Debug, Clone, Default)]
pub struct MatchFlag(Arc<AtomicBool>);

impl MatchFlag {
    /// Create a flag initialised to "no match"
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value
    #[must_use]
    pub fn get(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Store a new value, returning the previous one
    pub fn set(&self, matched: bool) -> bool {
        self.0.swap(matched, Ordering::AcqRel)
    }
}

/// Status shown on the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    /// Faces found in both the frame and the reference
    Match,
    /// Anything else
    NoMatch,
}

impl MatchStatus {
    /// Derive the displayed status from the flag and the reference face count
    #[must_use]
    pub fn from_flag(flag: bool, reference_faces: usize) -> Self {
        if flag && reference_faces > 0 {
            Self::Match
        } else {
            Self::NoMatch
        }
    }

    /// Overlay text
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Match => "Match!",
            Self::NoMatch => "No Match",
        }
    }

    /// Overlay colour (BGR)
    #[must_use]
    pub fn color(self) -> Scalar {
        match self {
            Self::Match => Scalar::new(0.0, 255.0, 0.0, 0.0),
            Self::NoMatch => Scalar::new(0.0, 0.0, 255.0, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate() {
        assert!(evaluate(1, 1));
        assert!(evaluate(3, 2));
        assert!(!evaluate(0, 1));
        assert!(!evaluate(1, 0));
        assert!(!evaluate(0, 0));
    }

    #[test]
    fn test_flag_shared_between_clones() {
        let flag = MatchFlag::new();
        let other = flag.clone();

        assert!(!flag.get());
        assert!(!other.set(true));
        assert!(flag.get());
        assert!(flag.set(false));
        assert!(!other.get());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(MatchStatus::from_flag(true, 1).label(), "Match!");
        assert_eq!(MatchStatus::from_flag(true, 0).label(), "No Match");
        assert_eq!(MatchStatus::from_flag(false, 4).label(), "No Match");
        assert_eq!(MatchStatus::Match.color()[1], 255.0);
        assert_eq!(MatchStatus::NoMatch.color()[2], 255.0);
    }
}
