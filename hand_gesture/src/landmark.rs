//! Hand-landmark data model.
//!
//! Landmarks follow the standard 21-point hand topology: index 0 is the
//! wrist, then four joints per finger in thumb→pinky order, so the five
//! fingertips land on indices 4, 8, 12, 16 and 20. Coordinates are
//! normalized to the detected hand's frame; only the (x, y) plane
//! participates in classification, z is carried for completeness.

/// Index of the wrist landmark.
pub const WRIST: usize = 0;

/// Indices of the five fingertip landmarks (thumb, index, middle, ring, pinky).
pub const FINGERTIPS: [usize; 5] = [4, 8, 12, 16, 20];

/// Number of landmarks in a complete hand observation.
pub const LANDMARK_COUNT: usize = 21;

/// One normalized landmark point.
///
/// `x` and `y` lie in [0, 1]; `z` is a relative depth the classifier
/// ignores.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Landmark { x, y, z }
    }

    /// Distance to `other` in the normalized image plane (z ignored).
    pub fn planar_distance(&self, other: &Landmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// True when both planar coordinates are finite and inside [0, 1].
    pub fn is_normalized(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && (0.0..=1.0).contains(&self.x)
            && (0.0..=1.0).contains(&self.y)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
