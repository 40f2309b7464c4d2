//! # hand_gesture
//!
//! Data model and classifier for single-hand openness gestures, built on
//! the 21-point landmark topology that hand-tracking engines emit (one
//! wrist point plus four joints per finger, all coordinates normalized to
//! the detected hand's frame).
//!
//! ## Classification
//!
//! The classifier is a pure function of the average 2D fingertip→wrist
//! distance in the normalized plane:
//!
//! | Average distance | Gesture |
//! |---|---|
//! | ≤ 0.25 | `Closed` (fist) |
//! | ≥ 0.35 | `Open` (spread hand) |
//! | between | `Unknown` (ambiguous pose) |
//!
//! The thresholds are absolute normalized coordinates — a deliberately
//! simple heuristic that holds because the upstream landmark model
//! normalizes by the detected hand's bounding box. Frames with no hand at
//! all never reach the classifier; the caller emits [`Gesture::None`]
//! directly.
//!
//! Malformed observations (short slices, non-finite or out-of-range
//! coordinates) classify as [`Gesture::Unknown`] — a vision model's
//! occasional noisy frame is expected, not exceptional.
//!
//! ## Synthetic observations
//!
//! [`synthetic_hand`] builds complete observations at a controlled
//! fingertip spread. The simulation input mode feeds these to the real
//! classifier so the full pipeline runs without a camera.

pub mod classifier;
pub mod landmark;
pub mod synthetic;

pub use classifier::{average_tip_distance, classify, Gesture, CLOSED_MAX_DIST, OPEN_MIN_DIST};
pub use landmark::{Landmark, FINGERTIPS, LANDMARK_COUNT, WRIST};
pub use synthetic::synthetic_hand;
