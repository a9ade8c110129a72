//! Hangman stage artwork
//!
//! Seven fixed ASCII drawings, one per incorrect-guess count. Static data
//! only; the stage to draw is chosen by `GameState::stage_index`.

/// Gallows drawings indexed by incorrect-guess count
pub const STAGES: [&str; 7] = [
    // Stage 0 - empty gallows
    r"
   ___
  |   |
  |
  |
  |
  |
__|__",
    // Stage 1 - head
    r"
   ___
  |   |
  |   O
  |
  |
  |
__|__",
    // Stage 2 - torso
    r"
   ___
  |   |
  |   O
  |   |
  |
  |
__|__",
    // Stage 3 - one arm
    r"
   ___
  |   |
  |   O
  |  /|
  |
  |
__|__",
    // Stage 4 - both arms
    r"
   ___
  |   |
  |   O
  |  /|\
  |
  |
__|__",
    // Stage 5 - one leg
    r"
   ___
  |   |
  |   O
  |  /|\
  |  /
  |
__|__",
    // Stage 6 - complete figure, round lost
    r"
   ___
  |   |
  |   O
  |  /|\
  |  / \
  |
__|__",
];

/// Get the artwork for a stage index, clamping out-of-range values
#[must_use]
pub fn stage_art(index: usize) -> &'static str {
    STAGES[index.min(STAGES.len() - 1)]
}
