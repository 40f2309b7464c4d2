//! Synthetic hand observations with a controlled fingertip spread.
//!
//! Used by the simulation input mode (keyboard poses stand in for a
//! camera) and by tests that need observations at exact distances.

use crate::landmark::{Landmark, LANDMARK_COUNT};

/// Where the synthetic wrist sits in the normalized frame — roughly where
/// a tracked wrist lands for an upright hand.
const WRIST_X: f32 = 0.5;
const WRIST_Y: f32 = 0.8;

/// Half-angle of the fingertip fan, radians (±40° around straight up).
const FAN_HALF_ANGLE: f32 = 0.698;

/// Build a complete 21-point observation whose five fingertips all sit
/// exactly `spread` away from the wrist in the normalized plane.
///
/// Fingertips fan out on an arc above the wrist; the intermediate finger
/// joints are placed at fixed fractions along each wrist→tip segment. The
/// classifier only reads the wrist and tips, but a full frame keeps the
/// observation well-formed. Spreads up to ~0.45 stay inside [0, 1].
pub fn synthetic_hand(spread: f32) -> Vec<Landmark> {
    let mut landmarks = Vec::with_capacity(LANDMARK_COUNT);
    landmarks.push(Landmark::new(WRIST_X, WRIST_Y, 0.0));

    for finger in 0..5 {
        // Evenly spaced fan angles, thumb leftmost.
        let angle = -FAN_HALF_ANGLE + FAN_HALF_ANGLE * 0.5 * finger as f32;
        let tip_x = WRIST_X + spread * angle.sin();
        let tip_y = WRIST_Y - spread * angle.cos();

        // Four joints per finger; the last one is the tip.
        for joint in 1..=4 {
            let t = joint as f32 / 4.0;
            landmarks.push(Landmark::new(
                WRIST_X + (tip_x - WRIST_X) * t,
                WRIST_Y + (tip_y - WRIST_Y) * t,
                0.0,
            ));
        }
    }

    landmarks
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::{FINGERTIPS, WRIST};

    #[test]
    fn observation_is_complete() {
        assert_eq!(synthetic_hand(0.3).len(), LANDMARK_COUNT);
    }

    #[test]
    fn fingertips_sit_at_requested_spread() {
        let hand = synthetic_hand(0.35);
        let wrist = hand[WRIST];
        for &i in &FINGERTIPS {
            let d = hand[i].planar_distance(&wrist);
            assert!((d - 0.35).abs() < 1e-5, "tip {} at distance {}", i, d);
        }
    }

    #[test]
    fn observation_stays_normalized() {
        for &spread in &[0.05f32, 0.25, 0.45] {
            for lm in synthetic_hand(spread) {
                assert!(lm.is_normalized(), "landmark {:?} out of range", lm);
            }
        }
    }
}
