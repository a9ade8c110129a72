//! Core domain types for hangman
//!
//! This module contains the fundamental game types with zero external dependencies.
//! All types here are pure, testable, and independent of terminal I/O.

mod game;
mod letter;

pub use game::{GameState, GuessOutcome, MAX_INCORRECT, ProgressSummary, WordPicker};
pub use letter::{Letter, LetterError};
