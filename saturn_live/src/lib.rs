//! # saturn_live
//!
//! Interactive gesture-to-particle feedback loop: a capture thread turns
//! hand observations into discrete gestures, the render loop converts the
//! newest gesture into a smoothly animated expansion level, and the
//! visualizer morphs a ten-thousand-particle planet between its formed and
//! scattered layouts every frame.
//!
//! ## Gesture → motion mapping
//!
//! | Gesture | Expansion target | Visual |
//! |---|---|---|
//! | Open hand | 1.0 | fully scattered cloud, hearts rising |
//! | Closed fist | 0.0 | planet with rings |
//! | No hand | 0.1 | planet, slightly loosened (idle) |
//! | Ambiguous | 0.0 | collapses like a fist |
//!
//! ## Simulation mode
//!
//! The default build needs no camera: keys synthesize full 21-point
//! landmark frames that run through the real classifier.
//!
//! | Key | Pose shown to the classifier |
//! |---|---|
//! | `O` (hold) | open hand (spread 0.45) |
//! | `C` (hold) | closed fist (spread 0.15) |
//! | `H` (hold) | half-open hand (spread 0.30 — ambiguous) |
//! | none held | no hand in view |
//!
//! `←`/`→` orbit, `+`/`-` zoom, `B` toggles the HUD, `Q` quits. A real
//! hand-tracking engine binds behind [`source::LandmarkSource`] without
//! touching the rest of the loop.

pub mod app;
pub mod phrase;
pub mod source;
pub mod visualizer;
