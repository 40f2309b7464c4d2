//! Openness classifier — 21 landmarks in, one [`Gesture`] out.
//!
//! Total and deterministic: every well-formed observation maps to exactly
//! one of `Open` / `Closed` / `Unknown`, and every malformed one maps to
//! `Unknown`. `None` is reserved for the no-hand case, which the capture
//! loop emits without invoking the classifier at all.

use crate::landmark::{Landmark, FINGERTIPS, LANDMARK_COUNT, WRIST};

// ════════════════════════════════════════════════════════════════════════════
// Gesture
// ════════════════════════════════════════════════════════════════════════════

/// Discrete hand-openness states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    /// Hand detected, fingers spread wide.
    Open,
    /// Hand detected, closed into a fist.
    Closed,
    /// No hand detected this frame.
    None,
    /// Hand detected but its geometry is ambiguous or malformed.
    Unknown,
}

// ════════════════════════════════════════════════════════════════════════════
// Thresholds
// ════════════════════════════════════════════════════════════════════════════

/// Average fingertip→wrist distance at or below this classifies as `Closed`.
pub const CLOSED_MAX_DIST: f32 = 0.25;

/// Average fingertip→wrist distance at or above this classifies as `Open`.
pub const OPEN_MIN_DIST: f32 = 0.35;

// ════════════════════════════════════════════════════════════════════════════
// Classification
// ════════════════════════════════════════════════════════════════════════════

/// Average normalized fingertip→wrist distance over the five fingertips.
///
/// Returns `None` when the observation is malformed: fewer than 21
/// landmarks, or a wrist/fingertip coordinate that is non-finite or
/// outside the normalized [0, 1] plane.
pub fn average_tip_distance(landmarks: &[Landmark]) -> Option<f32> {
    if landmarks.len() < LANDMARK_COUNT {
        return None;
    }
    let wrist = landmarks[WRIST];
    if !wrist.is_normalized() {
        return None;
    }
    let mut sum = 0.0f32;
    for &i in &FINGERTIPS {
        let tip = landmarks[i];
        if !tip.is_normalized() {
            return None;
        }
        sum += tip.planar_distance(&wrist);
    }
    Some(sum / FINGERTIPS.len() as f32)
}

/// Classify one hand observation.
///
/// Boundary values sit on the non-strict side: an average distance of
/// exactly [`CLOSED_MAX_DIST`] is `Closed` and exactly [`OPEN_MIN_DIST`]
/// is `Open`.
pub fn classify(landmarks: &[Landmark]) -> Gesture {
    match average_tip_distance(landmarks) {
        Some(avg) if avg <= CLOSED_MAX_DIST => Gesture::Closed,
        Some(avg) if avg >= OPEN_MIN_DIST => Gesture::Open,
        Some(_) => Gesture::Unknown,
        None => Gesture::Unknown,
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthetic::synthetic_hand;

    #[test]
    fn closed_fist_classifies_closed() {
        assert_eq!(classify(&synthetic_hand(0.10)), Gesture::Closed);
        assert_eq!(classify(&synthetic_hand(0.20)), Gesture::Closed);
    }

    #[test]
    fn open_hand_classifies_open() {
        assert_eq!(classify(&synthetic_hand(0.40)), Gesture::Open);
        assert_eq!(classify(&synthetic_hand(0.45)), Gesture::Open);
    }

    #[test]
    fn half_open_hand_is_ambiguous() {
        assert_eq!(classify(&synthetic_hand(0.30)), Gesture::Unknown);
        assert_eq!(classify(&synthetic_hand(0.27)), Gesture::Unknown);
        assert_eq!(classify(&synthetic_hand(0.33)), Gesture::Unknown);
    }

    /// Observation with the wrist at x = 0 and every fingertip at x = `d`
    /// on the same horizontal — distances are exactly `d`, with no
    /// trigonometric rounding, so boundary values land on the boundary.
    fn uniform_hand(d: f32) -> Vec<Landmark> {
        let wrist = Landmark::new(0.0, 0.5, 0.0);
        let mut hand = vec![wrist; LANDMARK_COUNT];
        for &i in &FINGERTIPS {
            hand[i] = Landmark::new(d, 0.5, 0.0);
        }
        hand
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(classify(&uniform_hand(CLOSED_MAX_DIST)), Gesture::Closed);
        assert_eq!(classify(&uniform_hand(OPEN_MIN_DIST)), Gesture::Open);
    }

    #[test]
    fn classification_sweep_matches_thresholds() {
        // Property sweep across the whole distance domain the synthetic
        // builder can represent without leaving the normalized plane.
        let mut spread = 0.02f32;
        while spread <= 0.44 {
            let avg = average_tip_distance(&synthetic_hand(spread))
                .expect("synthetic observation is well-formed");
            let got = classify(&synthetic_hand(spread));
            let want = if avg <= CLOSED_MAX_DIST {
                Gesture::Closed
            } else if avg >= OPEN_MIN_DIST {
                Gesture::Open
            } else {
                Gesture::Unknown
            };
            assert_eq!(got, want, "spread {}", spread);
            spread += 0.01;
        }
    }

    #[test]
    fn synthetic_spread_survives_roundtrip() {
        // The builder places every fingertip exactly `spread` from the
        // wrist, so the measured average should come back unchanged.
        for &spread in &[0.1f32, 0.25, 0.3, 0.35, 0.45] {
            let avg = average_tip_distance(&synthetic_hand(spread)).unwrap();
            assert!((avg - spread).abs() < 1e-4, "spread {} avg {}", spread, avg);
        }
    }

    #[test]
    fn short_observation_is_unknown() {
        let few = vec![Landmark::new(0.5, 0.5, 0.0); 5];
        assert_eq!(classify(&few), Gesture::Unknown);
        assert_eq!(classify(&[]), Gesture::Unknown);
    }

    #[test]
    fn non_finite_coordinates_are_unknown() {
        let mut hand = synthetic_hand(0.45);
        hand[FINGERTIPS[2]].x = f32::NAN;
        assert_eq!(classify(&hand), Gesture::Unknown);
    }

    #[test]
    fn out_of_range_coordinates_are_unknown() {
        let mut hand = synthetic_hand(0.45);
        hand[WRIST].y = 1.7;
        assert_eq!(classify(&hand), Gesture::Unknown);
    }

    #[test]
    fn classify_is_deterministic() {
        let hand = synthetic_hand(0.3);
        assert_eq!(classify(&hand), classify(&hand));
    }
}
