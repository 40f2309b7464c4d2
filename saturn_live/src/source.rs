//! Landmark capture — the sensor side of the feedback loop.
//!
//! A [`LandmarkSource`] delivers per-frame hand observations on its own
//! thread at whatever cadence its camera (or simulator) runs; a
//! classification stage turns each observation into a [`Gesture`] and
//! publishes it over an `mpsc` channel. The render loop drains that
//! channel each frame and keeps only the newest value — stale gestures
//! are acceptable, only the most recent one matters.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use hand_gesture::{classify, synthetic_hand, Gesture, Landmark};

// ════════════════════════════════════════════════════════════════════════════
// CaptureFrame
// ════════════════════════════════════════════════════════════════════════════

/// One capture-loop result: either a single hand's landmarks or no hand.
///
/// Multi-hand engines are expected to pick one hand before reaching this
/// boundary; anything malformed inside `Hand` is absorbed by the
/// classifier as [`Gesture::Unknown`].
#[derive(Clone, Debug)]
pub enum CaptureFrame {
    Hand(Vec<Landmark>),
    NoHand,
}

// ════════════════════════════════════════════════════════════════════════════
// LandmarkSource trait — unified interface for hw and sim
// ════════════════════════════════════════════════════════════════════════════

/// Anything that can deliver [`CaptureFrame`]s over a channel.
///
/// A real hand-tracking engine (camera plus landmark model) binds here;
/// the default build ships [`SimHandSource`], which synthesizes
/// observations from keyboard poses so the full classify→animate loop
/// runs without hardware. Returning from `run` — or the receiver going
/// away — ends the capture loop and releases whatever the source held.
pub trait LandmarkSource: Send + 'static {
    fn run(self: Box<Self>, tx: Sender<CaptureFrame>);
}

/// Spawn `source` on its own thread plus the classification stage, and
/// return the receiving end of the gesture channel.
///
/// Zero hands short-circuits to [`Gesture::None`] without invoking the
/// classifier. Dropping the returned receiver winds both threads down the
/// next time they try to send; a source that never calls back simply
/// leaves the consumer on its last observed value.
pub fn spawn_landmark_source<S: LandmarkSource>(source: S) -> Receiver<Gesture> {
    let (frame_tx, frame_rx) = mpsc::channel::<CaptureFrame>();
    let (gesture_tx, gesture_rx) = mpsc::channel::<Gesture>();

    thread::spawn(move || Box::new(source).run(frame_tx));
    thread::spawn(move || {
        for frame in frame_rx {
            let gesture = match frame {
                CaptureFrame::Hand(landmarks) => classify(&landmarks),
                CaptureFrame::NoHand => Gesture::None,
            };
            if gesture_tx.send(gesture).is_err() {
                return;
            }
        }
    });

    gesture_rx
}

// ════════════════════════════════════════════════════════════════════════════
// SimHandSource — keyboard poses (always available)
// ════════════════════════════════════════════════════════════════════════════

/// Pose reported by the simulation window each poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimPose {
    /// Open hand held in front of the virtual camera.
    OpenHand,
    /// Closed fist.
    ClosedFist,
    /// Half-open hand — lands between the thresholds, so it classifies
    /// as ambiguous.
    HalfOpen,
    /// Nothing in view.
    Empty,
}

/// Fingertip spread shown to the classifier for each simulated pose.
/// Open and closed sit well past their thresholds; half-open sits in the
/// dead band between them.
pub const SIM_OPEN_SPREAD: f32 = 0.45;
pub const SIM_CLOSED_SPREAD: f32 = 0.15;
pub const SIM_HALF_SPREAD: f32 = 0.30;

/// Landmark source driven by [`SimPose`] events from the visualizer's
/// window. Decoupling the window event loop from frame synthesis keeps
/// the capture side identical between simulation and hardware.
pub struct SimHandSource {
    pub rx: Receiver<SimPose>,
}

impl LandmarkSource for SimHandSource {
    fn run(self: Box<Self>, tx: Sender<CaptureFrame>) {
        for pose in self.rx {
            let frame = match pose {
                SimPose::OpenHand => CaptureFrame::Hand(synthetic_hand(SIM_OPEN_SPREAD)),
                SimPose::ClosedFist => CaptureFrame::Hand(synthetic_hand(SIM_CLOSED_SPREAD)),
                SimPose::HalfOpen => CaptureFrame::Hand(synthetic_hand(SIM_HALF_SPREAD)),
                SimPose::Empty => CaptureFrame::NoHand,
            };
            if tx.send(frame).is_err() {
                return;
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
