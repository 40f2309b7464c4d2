//! Procedural generation of the dual-configuration particle cloud.
//!
//! Every primary particle carries two fixed positions — one in the ordered
//! "planet with rings" layout, one in the dispersed cloud — generated once
//! per session and never mutated. The heart layer has no layout pair; it
//! is driven purely by time and the activation gate.
//!
//! Generation is reproducible in structure (same distributions, same
//! counts) but not bit-identical: randomness is unseeded, and tests assert
//! statistical invariants rather than exact coordinates.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

// ════════════════════════════════════════════════════════════════════════════
// CloudConfig
// ════════════════════════════════════════════════════════════════════════════

/// Counts and radii for the generated cloud.
///
/// Defaults match the tuned planet look: a 2.8-radius body with rings
/// starting at 3.6 (clear gap) and extending to 7.6.
#[derive(Clone, Copy, Debug)]
pub struct CloudConfig {
    pub sphere_count: usize,
    pub ring_count:   usize,
    pub heart_count:  usize,
    pub body_radius:  f32,
    pub ring_inner:   f32,
    pub ring_width:   f32,
}

impl Default for CloudConfig {
    fn default() -> Self {
        CloudConfig {
            sphere_count: 4000,
            ring_count:   6000,
            heart_count:  150,
            body_radius:  2.8,
            ring_inner:   3.6,
            ring_width:   4.0,
        }
    }
}

impl CloudConfig {
    /// Outer edge of the ring band.
    pub fn ring_outer(&self) -> f32 {
        self.ring_inner + self.ring_width
    }
}

// ── dispersal tuning ─────────────────────────────────────────────────────────

/// Dispersal magnitude range for body particles.
const SPHERE_SCATTER: (f32, f32) = (5.0, 15.0);

/// Upper end of the ring dispersal magnitude range. The lower end sits
/// just outside the widest ring orbit so dispersal never pulls a ring
/// particle inward.
const RING_SCATTER_MAX: f32 = 20.0;
const RING_SCATTER_MARGIN: f32 = 0.5;

/// Extra vertical scatter applied to dispersed ring particles, breaking
/// the flat disk apart.
const RING_VERTICAL_SCATTER: f32 = 5.0;

/// Half-thickness of the ordered ring disk.
const RING_JITTER: f32 = 0.075;

// ════════════════════════════════════════════════════════════════════════════
// Particle types
// ════════════════════════════════════════════════════════════════════════════

/// One primary particle: both layout endpoints plus static visuals.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub ordered:   Vec3,
    pub dispersed: Vec3,
    pub color:     Vec3,
    pub size:      f32,
}

/// One celebratory particle, governed by time and the activation gate only.
#[derive(Clone, Copy, Debug)]
pub struct HeartParticle {
    pub position: Vec3,
    pub scale:    f32,
}

/// The complete static cloud for one session.
#[derive(Clone, Debug)]
pub struct ParticleCloud {
    pub particles: Vec<Particle>,
    pub hearts:    Vec<HeartParticle>,
    pub config:    CloudConfig,
}

// ════════════════════════════════════════════════════════════════════════════
// Generation
// ════════════════════════════════════════════════════════════════════════════

impl ParticleCloud {
    /// Generate a fresh cloud from the thread-local RNG.
    pub fn generate(config: CloudConfig) -> Self {
        Self::generate_with(config, &mut rand::thread_rng())
    }

    /// Generate against a caller-supplied RNG (tests drive this).
    pub fn generate_with<R: Rng>(config: CloudConfig, rng: &mut R) -> Self {
        let mut particles = Vec::with_capacity(config.sphere_count + config.ring_count);

        // ── planet body: uniform over the sphere surface ─────────────────
        let body_base = Vec3::splat(0.63); // metallic silver
        for _ in 0..config.sphere_count {
            let theta = rng.gen_range(0.0..TAU);
            let phi = rng.gen_range(-1.0f32..1.0).acos();
            let r = config.body_radius;
            let ordered = Vec3::new(
                r * phi.sin() * theta.cos(),
                r * phi.sin() * theta.sin(),
                r * phi.cos(),
            );

            let magnitude = rng.gen_range(SPHERE_SCATTER.0..SPHERE_SCATTER.1);
            let dispersed = ordered.normalize() * magnitude;

            // Shared per-channel variance keeps the silver tone while
            // giving the surface some depth.
            let variance = rng.gen_range(-0.1..0.1);
            let color = (body_base + Vec3::splat(variance)).min(Vec3::ONE);
            let size = rng.gen_range(1.0..3.0);

            particles.push(Particle { ordered, dispersed, color, size });
        }

        // ── rings: thin annulus with a sparkle subset ────────────────────
        let ring_scatter_min = config.ring_outer() + RING_SCATTER_MARGIN;
        for _ in 0..config.ring_count {
            let angle = rng.gen_range(0.0..TAU);
            let radius = rng.gen_range(config.ring_inner..config.ring_outer());
            let ordered = Vec3::new(
                radius * angle.cos(),
                rng.gen_range(-RING_JITTER..RING_JITTER),
                radius * angle.sin(),
            );

            let magnitude = rng.gen_range(ring_scatter_min..RING_SCATTER_MAX);
            let mut dispersed = ordered.normalize() * magnitude;
            dispersed.y += rng.gen_range(-RING_VERTICAL_SCATTER..RING_VERTICAL_SCATTER);

            // Bright white dimmed per particle; one in ten gets the larger
            // sparkle size band.
            let brightness = rng.gen_range(0.5..1.0);
            let color = Vec3::splat(brightness);
            let size = if rng.gen_bool(0.1) {
                rng.gen_range(1.0..4.0)
            } else {
                rng.gen_range(0.5..2.0)
            };

            particles.push(Particle { ordered, dispersed, color, size });
        }

        // ── hearts: uniform in a box around the scene ────────────────────
        let mut hearts = Vec::with_capacity(config.heart_count);
        for _ in 0..config.heart_count {
            hearts.push(HeartParticle {
                position: Vec3::new(
                    rng.gen_range(-7.5..7.5),
                    rng.gen_range(-5.0..5.0),
                    rng.gen_range(-5.0..5.0),
                ),
                scale: rng.gen_range(0.5..1.0),
            });
        }

        ParticleCloud { particles, hearts, config }
    }

    /// Body particles come first in the primary set.
    pub fn sphere_particles(&self) -> &[Particle] {
        &self.particles[..self.config.sphere_count]
    }

    pub fn ring_particles(&self) -> &[Particle] {
        &self.particles[self.config.sphere_count..]
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn small_cloud() -> ParticleCloud {
        ParticleCloud::generate(CloudConfig {
            sphere_count: 500,
            ring_count:   800,
            heart_count:  40,
            ..CloudConfig::default()
        })
    }

    #[test]
    fn counts_match_config() {
        let cloud = small_cloud();
        assert_eq!(cloud.particles.len(), 1300);
        assert_eq!(cloud.sphere_particles().len(), 500);
        assert_eq!(cloud.ring_particles().len(), 800);
        assert_eq!(cloud.hearts.len(), 40);
    }

    #[test]
    fn sphere_particles_sit_on_the_body_surface() {
        let cloud = small_cloud();
        for p in cloud.sphere_particles() {
            let mag = p.ordered.length();
            assert!((mag - 2.8).abs() < 1e-3, "body particle at radius {}", mag);
        }
    }

    #[test]
    fn ring_particles_stay_in_the_annulus() {
        let cloud = small_cloud();
        for p in cloud.ring_particles() {
            let horizontal = (p.ordered.x * p.ordered.x + p.ordered.z * p.ordered.z).sqrt();
            assert!(
                (3.6 - 1e-3..=7.6 + 1e-3).contains(&horizontal),
                "ring particle at horizontal radius {}",
                horizontal
            );
            assert!(p.ordered.y.abs() <= RING_JITTER);
        }
    }

    #[test]
    fn every_particle_disperses_outward() {
        let cloud = small_cloud();
        for p in &cloud.particles {
            assert!(
                p.dispersed.length() > p.ordered.length(),
                "inward dispersal: {} -> {}",
                p.ordered.length(),
                p.dispersed.length()
            );
        }
    }

    #[test]
    fn colors_stay_in_unit_range() {
        let cloud = small_cloud();
        for p in &cloud.particles {
            for c in [p.color.x, p.color.y, p.color.z] {
                assert!((0.0..=1.0).contains(&c), "channel {}", c);
            }
        }
    }

    #[test]
    fn sizes_stay_in_their_bands() {
        let cloud = small_cloud();
        for p in cloud.sphere_particles() {
            assert!((1.0..3.0).contains(&p.size));
        }
        for p in cloud.ring_particles() {
            assert!((0.5..4.0).contains(&p.size));
        }
    }

    #[test]
    fn ring_sparkle_subset_is_roughly_one_in_ten() {
        // Sizes above 2.0 can only come from the sparkle band. With 6000
        // draws the observed fraction lands well inside [0.04, 0.18]
        // (expected share: 10% of particles, two thirds of which exceed
        // 2.0).
        let cloud = ParticleCloud::generate(CloudConfig::default());
        let sparkly = cloud
            .ring_particles()
            .iter()
            .filter(|p| p.size > 2.0)
            .count();
        let fraction = sparkly as f32 / cloud.ring_particles().len() as f32;
        assert!(
            (0.04..=0.18).contains(&fraction),
            "sparkle fraction {}",
            fraction
        );
    }

    #[test]
    fn hearts_stay_in_the_bounding_box() {
        let cloud = small_cloud();
        for h in &cloud.hearts {
            assert!(h.position.x.abs() <= 7.5);
            assert!(h.position.y.abs() <= 5.0);
            assert!(h.position.z.abs() <= 5.0);
            assert!((0.5..1.0).contains(&h.scale));
        }
    }

    #[test]
    fn two_clouds_differ() {
        // Unseeded randomness: structurally reproducible, never
        // bit-identical.
        let a = small_cloud();
        let b = small_cloud();
        assert!(a
            .particles
            .iter()
            .zip(&b.particles)
            .any(|(pa, pb)| pa.ordered != pb.ordered));
    }
}
