//! Hangman
//!
//! Classic single-player hangman for the terminal: a secret word is drawn
//! from a fixed list, the player guesses letters one at a time, and six
//! incorrect guesses lose the round.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GameState, GuessOutcome, Letter, WordPicker};
//!
//! struct Fixed;
//! impl WordPicker for Fixed {
//!     fn pick_word(&mut self) -> String {
//!         "python".to_string()
//!     }
//! }
//!
//! let mut game = GameState::new(&mut Fixed);
//! let letter = Letter::parse("p").unwrap();
//! assert_eq!(game.submit_guess(letter), GuessOutcome::Correct);
//! assert_eq!(game.rendered_word(), "P _ _ _ _ _");
//! ```

// Core domain types
pub mod core;

// Embedded word list and random selection
pub mod wordlists;

// Terminal output formatting
pub mod output;

// Interactive game loop
pub mod interactive;
