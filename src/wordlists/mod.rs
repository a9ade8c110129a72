//! Word list for hangman
//!
//! Provides the fixed embedded word list and the random word picker used
//! for round setup.

use rand::prelude::IndexedRandom;

use crate::core::WordPicker;

/// The fixed pool of secret words
///
/// Stored lowercase; the game state uppercases the selection at round start.
pub const WORDS: &[&str] = &["python", "computer", "programming", "software", "developer"];

/// Number of words in [`WORDS`]
pub const WORDS_COUNT: usize = 5;

/// Picks a word uniformly at random from [`WORDS`]
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl WordPicker for RandomPicker {
    fn pick_word(&mut self) -> String {
        // WORDS is a non-empty const, so choose always succeeds
        WORDS
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or(WORDS[0])
            .to_string()
    }
}
