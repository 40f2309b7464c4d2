//! Threshold-triggered phrase overlay.
//!
//! A phrase appears once the cloud is nearly fully dispersed and clears
//! once it has mostly re-formed; between the two thresholds the current
//! choice holds steady so the text does not flicker while the level
//! hovers. Selection is random from a fixed build-time list.

use rand::Rng;

/// Expansion level above which a phrase is chosen.
const SHOW_ABOVE: f32 = 0.8;

/// Expansion level below which the phrase clears.
const CLEAR_BELOW: f32 = 0.3;

/// The built-in phrase list.
pub const PHRASES: [&str; 12] = [
    "you are my universe",
    "love is the only gravity",
    "my heart orbits around you",
    "you light up my world",
    "our souls are cast from stardust",
    "infinite love, finite time",
    "brighter than a supernova",
    "gravity cannot keep us apart",
    "a cosmic kind of romance",
    "you are my north star",
    "destined trajectories",
    "across the stars to love you",
];

// ════════════════════════════════════════════════════════════════════════════
// PhraseBoard
// ════════════════════════════════════════════════════════════════════════════

/// Holds the currently displayed phrase, if any.
#[derive(Debug, Default)]
pub struct PhraseBoard {
    current: Option<&'static str>,
}

impl PhraseBoard {
    pub fn new() -> Self {
        PhraseBoard { current: None }
    }

    /// The phrase to draw this frame.
    pub fn current(&self) -> Option<&'static str> {
        self.current
    }

    /// Advance against the expansion level for this frame.
    pub fn tick(&mut self, level: f32) {
        if level > SHOW_ABOVE && self.current.is_none() {
            let idx = rand::thread_rng().gen_range(0..PHRASES.len());
            self.current = Some(PHRASES[idx]);
        } else if level < CLEAR_BELOW {
            self.current = None;
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appears_only_past_the_show_threshold() {
        let mut board = PhraseBoard::new();
        board.tick(0.5);
        assert!(board.current().is_none());
        board.tick(0.79);
        assert!(board.current().is_none());
        board.tick(0.85);
        assert!(board.current().is_some());
    }

    #[test]
    fn holds_steady_between_the_thresholds() {
        let mut board = PhraseBoard::new();
        board.tick(0.9);
        let chosen = board.current().unwrap();
        board.tick(0.5);
        board.tick(0.35);
        assert_eq!(board.current(), Some(chosen));
    }

    #[test]
    fn clears_once_mostly_reformed() {
        let mut board = PhraseBoard::new();
        board.tick(0.9);
        assert!(board.current().is_some());
        board.tick(0.2);
        assert!(board.current().is_none());
    }

    #[test]
    fn repeated_high_levels_keep_one_phrase() {
        let mut board = PhraseBoard::new();
        board.tick(0.95);
        let chosen = board.current().unwrap();
        for _ in 0..50 {
            board.tick(0.95);
        }
        assert_eq!(board.current(), Some(chosen));
    }
}
