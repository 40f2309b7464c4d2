//! Expansion state — one scalar, advanced once per rendered frame.
//!
//! The controller owns the only mutable coupling between the gesture feed
//! and the renderer. Each tick moves the level a fixed fraction of the
//! remaining distance toward the current gesture's target, then snaps once
//! the residual drops under a small epsilon. The recurrence is
//! frame-count-based on purpose: the render loop is rate-limited to ~60
//! fps, which pins the perceived animation speed without tying the update
//! to wall-clock deltas.

use hand_gesture::Gesture;

// ════════════════════════════════════════════════════════════════════════════
// Targets
// ════════════════════════════════════════════════════════════════════════════

/// Resting level shown while no hand is in view.
pub const IDLE_TARGET: f32 = 0.1;

/// Fraction of the remaining error applied per tick.
const APPROACH: f32 = 0.05;

/// Residual below which the level snaps to the target.
const SNAP_EPSILON: f32 = 0.001;

/// Map a gesture to the level the controller steers toward.
///
/// `Unknown` shares `Closed`'s target: an ambiguous hand pose collapses
/// the formation rather than holding its previous course.
pub fn target_for(gesture: Gesture) -> f32 {
    match gesture {
        Gesture::Open => 1.0,
        Gesture::None => IDLE_TARGET,
        Gesture::Closed | Gesture::Unknown => 0.0,
    }
}

// ════════════════════════════════════════════════════════════════════════════
// ExpansionController
// ════════════════════════════════════════════════════════════════════════════

/// Owns the [0, 1] expansion level.
///
/// Single writer: the render loop calls [`tick`](Self::tick) once per
/// frame; everything else only reads [`level`](Self::level). Targets are
/// drawn from {0, 0.1, 1} and each step is a convex blend toward the
/// target, so the level never leaves [0, 1].
#[derive(Clone, Debug)]
pub struct ExpansionController {
    level: f32,
}

impl ExpansionController {
    /// Start fully formed.
    pub fn new() -> Self {
        ExpansionController { level: 0.0 }
    }

    /// Current expansion level in [0, 1].
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Advance one frame toward `gesture`'s target. Returns the new level.
    pub fn tick(&mut self, gesture: Gesture) -> f32 {
        self.step_toward(target_for(gesture))
    }

    /// One step of the approach recurrence against an explicit target.
    pub fn step_toward(&mut self, target: f32) -> f32 {
        let diff = target - self.level;
        if diff.abs() < SNAP_EPSILON {
            self.level = target;
        } else {
            self.level += diff * APPROACH;
        }
        self.level
    }
}

impl Default for ExpansionController {
    fn default() -> Self {
        Self::new()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn controller_at(level: f32) -> ExpansionController {
        let mut c = ExpansionController::new();
        c.level = level;
        c
    }

    #[test]
    fn gesture_targets() {
        assert_eq!(target_for(Gesture::Open), 1.0);
        assert_eq!(target_for(Gesture::Closed), 0.0);
        assert_eq!(target_for(Gesture::None), IDLE_TARGET);
        // Ambiguous poses fall through to the closed target.
        assert_eq!(target_for(Gesture::Unknown), 0.0);
    }

    #[test]
    fn converges_to_every_target_from_every_start() {
        for &start in &[0.0f32, 0.25, 0.5, 0.75, 1.0] {
            for &target in &[0.0f32, IDLE_TARGET, 1.0] {
                let mut c = controller_at(start);
                let mut ticks = 0;
                while c.level() != target {
                    c.step_toward(target);
                    ticks += 1;
                    assert!(
                        (0.0..=1.0).contains(&c.level()),
                        "level {} left [0,1]",
                        c.level()
                    );
                    assert!(ticks < 400, "no convergence from {} to {}", start, target);
                }
            }
        }
    }

    #[test]
    fn snaps_exactly_once_within_epsilon() {
        let mut c = controller_at(0.9995);
        c.step_toward(1.0);
        assert_eq!(c.level(), 1.0);
        // And stays put — no overshoot oscillation.
        c.step_toward(1.0);
        assert_eq!(c.level(), 1.0);
    }

    #[test]
    fn open_sequence_rises_strictly_monotonically() {
        let mut c = ExpansionController::new();
        c.tick(Gesture::None);
        c.tick(Gesture::None);
        let mut prev = c.level();
        for _ in 0..400 {
            let level = c.tick(Gesture::Open);
            if level == 1.0 {
                return;
            }
            assert!(level > prev, "level reversed: {} -> {}", prev, level);
            prev = level;
        }
        panic!("never converged to 1.0");
    }

    #[test]
    fn direction_reverses_on_the_next_tick_after_a_flip() {
        let mut c = ExpansionController::new();
        for _ in 0..30 {
            c.tick(Gesture::Open);
        }
        let mid = c.level();
        assert!(mid > 0.0 && mid < 1.0);
        let after = c.tick(Gesture::Closed);
        assert!(after < mid, "trajectory did not reverse: {} -> {}", mid, after);
    }

    #[test]
    fn idles_at_one_tenth_without_a_hand() {
        let mut c = ExpansionController::new();
        for _ in 0..400 {
            c.tick(Gesture::None);
        }
        assert_eq!(c.level(), IDLE_TARGET);
    }
}
