//! Hangman round state
//!
//! `GameState` owns the secret word, the guess history, and the termination
//! status for one round. All the real game logic lives here; the interactive
//! driver just renders snapshots and forwards validated letters.

use std::collections::BTreeSet;

use super::Letter;

/// Incorrect guesses allowed before the round is lost
pub const MAX_INCORRECT: u8 = 6;

/// Source of the secret word for a new round
///
/// The production implementation draws uniformly at random from the fixed
/// word list; tests supply a deterministic picker.
pub trait WordPicker {
    /// Produce the secret word for the next round
    fn pick_word(&mut self) -> String;
}

/// Tagged result of submitting a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter was guessed earlier this round; nothing changed
    AlreadyGuessed,
    /// The letter occurs in the word
    Correct,
    /// The letter does not occur in the word
    Incorrect,
    /// The round already ended; nothing changed
    RoundAlreadyOver,
}

/// Read-only snapshot of round progress for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSummary {
    pub rendered_word: String,
    pub guessed_letters: Vec<char>,
    pub incorrect: u8,
    pub max_incorrect: u8,
    pub remaining: u8,
}

/// State of a single hangman round
///
/// Two logical states: in progress, and over (subdivided by win/loss).
/// The only transition to "over" happens inside [`submit_guess`], and only
/// [`reset`] leaves it.
///
/// [`submit_guess`]: GameState::submit_guess
/// [`reset`]: GameState::reset
#[derive(Debug, Clone)]
pub struct GameState {
    word: String,
    guessed: BTreeSet<char>,
    incorrect: u8,
    over: bool,
    won: bool,
}

impl GameState {
    /// Start a fresh round with a word from the picker
    pub fn new(picker: &mut impl WordPicker) -> Self {
        let mut state = Self {
            word: String::new(),
            guessed: BTreeSet::new(),
            incorrect: 0,
            over: false,
            won: false,
        };
        state.reset(picker);
        state
    }

    /// Reset for a new round: fresh word, cleared guesses and counters
    ///
    /// The picked word is normalized to uppercase. Selection is independent
    /// each round, so the previous word may repeat.
    pub fn reset(&mut self, picker: &mut impl WordPicker) {
        self.word = picker.pick_word().to_uppercase();
        self.guessed.clear();
        self.incorrect = 0;
        self.over = false;
        self.won = false;
    }

    /// Process one guessed letter
    ///
    /// Repeated letters are rejected without mutating anything, as are
    /// guesses submitted after the round ended. An incorrect guess that
    /// reaches [`MAX_INCORRECT`] loses the round; a correct guess that
    /// completes the word wins it.
    pub fn submit_guess(&mut self, letter: Letter) -> GuessOutcome {
        if self.over {
            return GuessOutcome::RoundAlreadyOver;
        }

        let ch = letter.as_char();
        if self.guessed.contains(&ch) {
            return GuessOutcome::AlreadyGuessed;
        }
        self.guessed.insert(ch);

        if self.word.contains(ch) {
            if self.word.chars().all(|c| self.guessed.contains(&c)) {
                self.over = true;
                self.won = true;
            }
            GuessOutcome::Correct
        } else {
            self.incorrect += 1;
            if self.incorrect == MAX_INCORRECT {
                self.over = true;
                self.won = false;
            }
            GuessOutcome::Incorrect
        }
    }

    /// Space-joined display form of the word, underscores for unguessed letters
    #[must_use]
    pub fn rendered_word(&self) -> String {
        let slots: Vec<String> = self
            .word
            .chars()
            .map(|c| {
                if self.guessed.contains(&c) {
                    c.to_string()
                } else {
                    "_".to_string()
                }
            })
            .collect();
        slots.join(" ")
    }

    /// Snapshot of the current round progress
    #[must_use]
    pub fn progress_summary(&self) -> ProgressSummary {
        ProgressSummary {
            rendered_word: self.rendered_word(),
            // BTreeSet iterates in sorted order
            guessed_letters: self.guessed.iter().copied().collect(),
            incorrect: self.incorrect,
            max_incorrect: MAX_INCORRECT,
            remaining: MAX_INCORRECT - self.incorrect,
        }
    }

    /// Index of the hangman stage to draw, equal to the incorrect count
    #[inline]
    #[must_use]
    pub fn stage_index(&self) -> usize {
        usize::from(self.incorrect)
    }

    /// Whether the round ended in a win or a loss
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.over
    }

    /// Whether the round was won; meaningful only once [`is_over`] is true
    ///
    /// [`is_over`]: GameState::is_over
    #[inline]
    #[must_use]
    pub const fn did_win(&self) -> bool {
        self.won
    }

    /// The secret word, revealed by the driver at round end
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic picker returning a fixed word
    struct FixedPicker(&'static str);

    impl WordPicker for FixedPicker {
        fn pick_word(&mut self) -> String {
            self.0.to_string()
        }
    }

    fn game_with(word: &'static str) -> GameState {
        GameState::new(&mut FixedPicker(word))
    }

    fn letter(ch: char) -> Letter {
        Letter::parse(&ch.to_string()).unwrap()
    }

    #[test]
    fn new_round_starts_clean() {
        let game = game_with("python");
        assert_eq!(game.word(), "PYTHON");
        assert!(!game.is_over());
        assert!(!game.did_win());
        assert_eq!(game.stage_index(), 0);
        assert_eq!(game.rendered_word(), "_ _ _ _ _ _");
    }

    #[test]
    fn winning_path_guesses_every_letter() {
        let mut game = game_with("python");

        for ch in ['P', 'Y', 'T', 'H', 'O'] {
            assert_eq!(game.submit_guess(letter(ch)), GuessOutcome::Correct);
            assert!(!game.is_over(), "round ended early at '{ch}'");
        }

        // Sixth letter completes the word
        assert_eq!(game.submit_guess(letter('N')), GuessOutcome::Correct);
        assert!(game.is_over());
        assert!(game.did_win());
        assert_eq!(game.progress_summary().incorrect, 0);
        assert_eq!(game.rendered_word(), "P Y T H O N");
    }

    #[test]
    fn losing_path_six_misses() {
        let mut game = game_with("python");

        for (i, ch) in ['Z', 'X', 'Q', 'W', 'E', 'R'].into_iter().enumerate() {
            assert_eq!(game.submit_guess(letter(ch)), GuessOutcome::Incorrect);
            assert_eq!(game.progress_summary().incorrect, u8::try_from(i).unwrap() + 1);
        }

        assert!(game.is_over());
        assert!(!game.did_win());
        assert_eq!(game.progress_summary().incorrect, MAX_INCORRECT);
        assert_eq!(game.stage_index(), 6);
    }

    #[test]
    fn duplicate_guess_rejected_case_insensitively() {
        let mut game = game_with("python");

        assert_eq!(game.submit_guess(Letter::parse("p").unwrap()), GuessOutcome::Correct);
        assert_eq!(
            game.submit_guess(Letter::parse("P").unwrap()),
            GuessOutcome::AlreadyGuessed
        );

        let summary = game.progress_summary();
        assert_eq!(summary.guessed_letters, vec!['P']);
        assert_eq!(summary.incorrect, 0);
    }

    #[test]
    fn duplicate_incorrect_guess_does_not_increment() {
        let mut game = game_with("python");

        assert_eq!(game.submit_guess(letter('Z')), GuessOutcome::Incorrect);
        assert_eq!(game.submit_guess(letter('Z')), GuessOutcome::AlreadyGuessed);
        assert_eq!(game.progress_summary().incorrect, 1);
    }

    #[test]
    fn incorrect_count_monotone_and_bounded() {
        let mut game = game_with("python");
        let mut previous = 0;

        for ch in 'A'..='Z' {
            game.submit_guess(letter(ch));
            let incorrect = game.progress_summary().incorrect;
            assert!(incorrect >= previous);
            assert!(incorrect <= MAX_INCORRECT);
            previous = incorrect;
        }
    }

    #[test]
    fn guess_after_round_over_rejected() {
        let mut game = game_with("python");
        for ch in ['Z', 'X', 'Q', 'W', 'E', 'R'] {
            game.submit_guess(letter(ch));
        }
        assert!(game.is_over());

        assert_eq!(game.submit_guess(letter('P')), GuessOutcome::RoundAlreadyOver);

        let summary = game.progress_summary();
        assert_eq!(summary.incorrect, MAX_INCORRECT);
        assert!(!summary.guessed_letters.contains(&'P'));
    }

    #[test]
    fn rendered_word_reveals_only_guessed_letters() {
        let mut game = game_with("computer");
        game.submit_guess(letter('C'));
        game.submit_guess(letter('O'));
        game.submit_guess(letter('Z'));

        assert_eq!(game.rendered_word(), "C O _ _ _ _ _ _");
    }

    #[test]
    fn rendered_word_handles_repeated_letters() {
        let mut game = game_with("programming");
        game.submit_guess(letter('R'));
        game.submit_guess(letter('G'));

        // All occurrences of a guessed letter are revealed at once
        assert_eq!(game.rendered_word(), "_ R _ G R _ _ _ _ _ G");
    }

    #[test]
    fn progress_summary_fields_consistent() {
        let mut game = game_with("software");
        game.submit_guess(letter('S'));
        game.submit_guess(letter('Z'));
        game.submit_guess(letter('A'));

        let summary = game.progress_summary();
        assert_eq!(summary.rendered_word, "S _ _ _ _ A _ _");
        assert_eq!(summary.guessed_letters, vec!['A', 'S', 'Z']);
        assert_eq!(summary.incorrect, 1);
        assert_eq!(summary.max_incorrect, MAX_INCORRECT);
        assert_eq!(summary.remaining, MAX_INCORRECT - 1);
    }

    #[test]
    fn stage_index_tracks_incorrect_count() {
        let mut game = game_with("python");
        assert_eq!(game.stage_index(), 0);

        game.submit_guess(letter('Z'));
        assert_eq!(game.stage_index(), 1);

        game.submit_guess(letter('P'));
        assert_eq!(game.stage_index(), 1);

        game.submit_guess(letter('X'));
        assert_eq!(game.stage_index(), 2);
    }

    #[test]
    fn reset_clears_completed_round() {
        let mut game = game_with("python");
        for ch in ['Z', 'X', 'Q', 'W', 'E', 'R'] {
            game.submit_guess(letter(ch));
        }
        assert!(game.is_over());

        game.reset(&mut FixedPicker("developer"));

        assert_eq!(game.word(), "DEVELOPER");
        assert!(!game.is_over());
        assert!(!game.did_win());
        let summary = game.progress_summary();
        assert!(summary.guessed_letters.is_empty());
        assert_eq!(summary.incorrect, 0);
        assert_eq!(summary.remaining, MAX_INCORRECT);
    }

    #[test]
    fn reset_uppercases_picked_word() {
        let mut picker = FixedPicker("ProGramMing");
        let game = GameState::new(&mut picker);
        assert_eq!(game.word(), "PROGRAMMING");
    }

    #[test]
    fn win_on_last_remaining_guess() {
        // Five misses, then complete the word: a win, not a loss
        let mut game = game_with("python");
        for ch in ['Z', 'X', 'Q', 'W', 'E'] {
            game.submit_guess(letter(ch));
        }
        for ch in ['P', 'Y', 'T', 'H', 'O', 'N'] {
            assert_eq!(game.submit_guess(letter(ch)), GuessOutcome::Correct);
        }

        assert!(game.is_over());
        assert!(game.did_win());
        assert_eq!(game.progress_summary().remaining, 1);
    }
}
