//! # particle_field
//!
//! The morphing particle formation behind the visualizer: a silver planet
//! body with bright rings that continuously blends toward a dispersed
//! cloud, plus a celebratory heart layer gated on near-full dispersal.
//!
//! The crate is split along the data flow:
//!
//! * [`expansion`] — the single [0, 1] scalar coupling gestures to the
//!   renderer, advanced once per rendered frame toward a gesture-derived
//!   target.
//! * [`cloud`] — one-time procedural generation of every particle's two
//!   layout endpoints (ordered and dispersed) and static visuals.
//! * [`display`] — the per-frame shader-equivalent math: positional
//!   interpolation, drift, size attenuation, soft-edge and heart
//!   footprints, and the activation gate.
//!
//! "Mode" is never a variant here: each particle stores both endpoint
//! positions and the expansion level is purely a blend weight, which is
//! what makes the morph smooth.

pub mod cloud;
pub mod display;
pub mod expansion;

pub use cloud::{CloudConfig, HeartParticle, Particle, ParticleCloud};
pub use expansion::{target_for, ExpansionController, IDLE_TARGET};
