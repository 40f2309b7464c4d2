//! Top-level application state and run loop.
//!
//! `AppState` owns the expansion controller and the phrase overlay, and
//! remembers the most recently published gesture. The run loop wires the
//! capture thread to the visualizer: drain the gesture channel
//! (latest-value-wins), advance the controller exactly once, redraw.

use std::sync::mpsc::{self, TryRecvError};
use std::time::Instant;

use hand_gesture::Gesture;
use particle_field::{CloudConfig, ExpansionController, ParticleCloud};

use crate::phrase::PhraseBoard;
use crate::source::{spawn_landmark_source, SimHandSource};
use crate::visualizer::Visualizer;

// ════════════════════════════════════════════════════════════════════════════
// AppConfig
// ════════════════════════════════════════════════════════════════════════════

/// Configuration for one session.
pub struct AppConfig {
    pub cloud: CloudConfig,
    /// Show the status line, gesture indicators and key legend.
    pub hud: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            cloud: CloudConfig::default(),
            hud: true,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// AppState
// ════════════════════════════════════════════════════════════════════════════

pub struct AppState {
    controller: ExpansionController,
    gesture: Gesture,
    phrases: PhraseBoard,
}

impl AppState {
    /// Session start: fully formed, no hand observed yet.
    pub fn new() -> Self {
        AppState {
            controller: ExpansionController::new(),
            gesture: Gesture::None,
            phrases: PhraseBoard::new(),
        }
    }

    /// Record the most recently published gesture. Called for every value
    /// drained from the capture channel; the last call before a tick wins.
    pub fn observe(&mut self, gesture: Gesture) {
        self.gesture = gesture;
    }

    /// One render-frame tick: advance the expansion level toward the
    /// latest gesture's target and update the overlay. Returns the level.
    pub fn tick(&mut self) -> f32 {
        let level = self.controller.tick(self.gesture);
        self.phrases.tick(level);
        level
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn level(&self) -> f32 {
        self.controller.level()
    }

    pub fn phrase(&self) -> Option<&'static str> {
        self.phrases.current()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// run() — the main application loop
// ════════════════════════════════════════════════════════════════════════════

/// Run the full application.
///
/// Creates the capture thread (simulation source by default), generates
/// the particle cloud once, and drives the render loop at ~60 fps. The
/// expansion recurrence advances once per rendered frame by construction.
/// If the capture side ever disconnects, the app settles into the no-hand
/// idle state and keeps rendering.
pub fn run(cfg: AppConfig) -> Result<(), String> {
    let (pose_tx, pose_rx) = mpsc::channel();
    let gesture_rx = spawn_landmark_source(SimHandSource { rx: pose_rx });

    let cloud = ParticleCloud::generate(cfg.cloud);
    let mut vis = Visualizer::new(pose_tx, cfg.hud)?;
    let mut app = AppState::new();
    let start = Instant::now();

    while vis.is_open() {
        if !vis.poll_input() {
            break;
        }

        // Drain the channel, keeping only the newest gesture.
        loop {
            match gesture_rx.try_recv() {
                Ok(gesture) => app.observe(gesture),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    app.observe(Gesture::None);
                    break;
                }
            }
        }

        let level = app.tick();

        vis.render(
            &cloud,
            level,
            start.elapsed().as_secs_f32(),
            app.gesture(),
            app.phrase(),
        );
    }

    Ok(())
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use hand_gesture::{classify, synthetic_hand};
    use particle_field::target_for;

    #[test]
    fn none_then_open_rises_strictly_until_convergence() {
        let mut app = AppState::new();
        app.observe(Gesture::None);
        app.tick();
        app.tick();
        app.observe(Gesture::Open);
        let mut prev = app.level();
        for _ in 0..400 {
            let level = app.tick();
            if level == 1.0 {
                return;
            }
            assert!(level > prev, "level reversed: {} -> {}", prev, level);
            prev = level;
        }
        panic!("never converged to 1.0");
    }

    #[test]
    fn flip_to_closed_reverses_on_the_next_tick() {
        let mut app = AppState::new();
        app.observe(Gesture::Open);
        for _ in 0..40 {
            app.tick();
        }
        let mid = app.level();
        assert!(mid > 0.0 && mid < 1.0);
        app.observe(Gesture::Closed);
        assert!(app.tick() < mid);
    }

    #[test]
    fn exactly_half_open_hand_collapses_like_a_fist() {
        // A hand with all fingertips exactly 0.30 from the wrist is
        // ambiguous, and ambiguity steers to the closed target.
        let gesture = classify(&synthetic_hand(0.30));
        assert_eq!(gesture, Gesture::Unknown);
        assert_eq!(target_for(gesture), 0.0);

        let mut app = AppState::new();
        app.observe(Gesture::Open);
        for _ in 0..40 {
            app.tick();
        }
        app.observe(gesture);
        let before = app.level();
        assert!(app.tick() < before);
    }

    #[test]
    fn session_starts_formed_and_handless() {
        let app = AppState::new();
        assert_eq!(app.level(), 0.0);
        assert_eq!(app.gesture(), Gesture::None);
        assert!(app.phrase().is_none());
    }

    #[test]
    fn phrase_appears_when_dispersed_and_clears_when_reformed() {
        let mut app = AppState::new();
        app.observe(Gesture::Open);
        for _ in 0..400 {
            app.tick();
        }
        assert_eq!(app.level(), 1.0);
        assert!(app.phrase().is_some());

        app.observe(Gesture::Closed);
        for _ in 0..400 {
            app.tick();
        }
        assert_eq!(app.level(), 0.0);
        assert!(app.phrase().is_none());
    }
}
