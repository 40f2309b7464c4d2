//! Per-frame display math — the CPU equivalent of the point shaders.
//!
//! Everything here is a pure function of (static particle data, expansion
//! level, elapsed seconds, view depth). The app crate owns projection and
//! rasterization; this module owns what a vertex/fragment pair would
//! compute per particle.

use glam::Vec3;

use crate::cloud::{HeartParticle, Particle};

/// Half-height of the vertical band heart particles wrap through.
const HEART_BAND_HALF: f32 = 5.0;

/// Fixed heart tint (warm pink).
pub const HEART_COLOR: Vec3 = Vec3::new(1.0, 0.4, 0.6);

/// Below this activation a heart is skipped entirely.
pub const HEART_VISIBLE_MIN: f32 = 0.01;

// ════════════════════════════════════════════════════════════════════════════
// Shared helpers
// ════════════════════════════════════════════════════════════════════════════

/// Hermite smoothstep, clamped outside [edge0, edge1].
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

// ════════════════════════════════════════════════════════════════════════════
// Primary particles
// ════════════════════════════════════════════════════════════════════════════

/// World-space position at the given expansion level and elapsed seconds.
///
/// Blends the two layout endpoints, then adds an oscillating vertical
/// drift seeded by the dispersed x — zero when fully formed, maximal when
/// fully dispersed.
pub fn particle_position(p: &Particle, level: f32, time: f32) -> Vec3 {
    let mut pos = p.ordered.lerp(p.dispersed, level);
    pos.y += (time * 0.5 + p.dispersed.x * 10.0).sin() * 0.1 * level;
    pos
}

/// On-screen footprint size before perspective attenuation; dispersal
/// swells each particle by up to half.
pub fn particle_size(p: &Particle, level: f32) -> f32 {
    p.size * (1.0 + level * 0.5)
}

/// Perspective size falloff at view depth `view_z` (negative in front of
/// the camera).
pub fn size_attenuation(view_z: f32) -> f32 {
    20.0 / -view_z
}

/// Whole-particle alpha: dispersal fades the cloud toward ethereal.
pub fn particle_alpha(level: f32) -> f32 {
    1.0 - level * 0.3
}

/// Soft-edge falloff inside the circular footprint.
///
/// `r` is the distance from the footprint center in footprint units
/// (0.5 = rim). Zero at and beyond the rim; fragments there are not drawn.
pub fn circle_glow(r: f32) -> f32 {
    if r >= 0.5 {
        return 0.0;
    }
    (1.0 - r * 2.0).powf(1.5)
}

// ════════════════════════════════════════════════════════════════════════════
// Heart layer
// ════════════════════════════════════════════════════════════════════════════

/// Activation gate for the celebratory layer: closed through level 0.7,
/// fully open from 1.0, smooth in between.
pub fn heart_activation(level: f32) -> f32 {
    smoothstep(0.7, 1.0, level)
}

/// World-space heart position: continuous upward drift scaled by the
/// particle's own scale, wrapped into the fixed vertical band.
pub fn heart_position(h: &HeartParticle, time: f32) -> Vec3 {
    let mut pos = h.position;
    pos.y += time * 0.5 * h.scale;
    pos.y = (pos.y + HEART_BAND_HALF).rem_euclid(2.0 * HEART_BAND_HALF) - HEART_BAND_HALF;
    pos
}

/// Heart footprint size before perspective attenuation.
pub fn heart_size(h: &HeartParticle) -> f32 {
    h.scale * 30.0
}

/// Hearts attenuate on a shorter focal range than the primary particles.
pub fn heart_attenuation(view_z: f32) -> f32 {
    10.0 / -view_z
}

/// Implicit heart footprint test over footprint coordinates `(u, v)` in
/// [0, 1]² with v growing downward (point-sprite convention).
///
/// The boundary is the polar curve r(h) = (13h − 22h² + 10h³) / (6 − 5h)
/// over the normalized half-angle h, with the footprint shifted down a
/// quarter to center the lobes.
pub fn heart_footprint(u: f32, v: f32) -> bool {
    let x = u * 2.0 - 1.0;
    let y = (v * 2.0 - 1.0) - 0.25;
    let r = (x * x + y * y).sqrt();
    let h = (x.atan2(y) / std::f32::consts::PI).abs();
    let d = (13.0 * h - 22.0 * h * h + 10.0 * h * h * h) / (6.0 - 5.0 * h);
    r <= d
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
