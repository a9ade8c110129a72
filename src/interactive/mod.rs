//! Interactive console game loop
//!
//! The blocking read/process/render driver. All game logic stays in
//! [`crate::core`]; this module only renders state, validates raw input,
//! and forwards accepted letters.

use std::io::{self, Write};

use anyhow::{Context, Result, bail};

use crate::core::{GameState, Letter, WordPicker};
use crate::output::{
    print_goodbye, print_guess_outcome, print_new_round, print_round_result, print_round_state,
    print_welcome,
};

/// Run the game loop until the player declines a replay
///
/// # Errors
///
/// Returns an error if stdin closes unexpectedly or stdout cannot be
/// written to.
pub fn run(mut picker: impl WordPicker) -> Result<()> {
    print_welcome();
    let mut game = GameState::new(&mut picker);

    loop {
        print_round_state(&game);

        if game.is_over() {
            print_round_result(game.did_win(), game.word());

            let answer = read_input("\nDo you want to play again? (y/n)")?;
            if wants_replay(&answer) {
                game.reset(&mut picker);
                print_new_round();
            } else {
                print_goodbye();
                return Ok(());
            }
            continue;
        }

        let letter = prompt_letter()?;
        let outcome = game.submit_guess(letter);
        print_guess_outcome(outcome, letter);
    }
}

/// Prompt until the player enters a single alphabetic character
fn prompt_letter() -> Result<Letter> {
    loop {
        let input = read_input("\nEnter your guess (single letter)")?;
        match Letter::parse(&input) {
            Ok(letter) => return Ok(letter),
            Err(err) => println!("❌ {err}!"),
        }
    }
}

/// `y` or `yes`, case-insensitively, restarts; anything else exits
fn wants_replay(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Read one trimmed line from stdin after printing a prompt
fn read_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;
    if bytes == 0 {
        bail!("unexpected end of input");
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_accepts_yes_variants() {
        assert!(wants_replay("y"));
        assert!(wants_replay("Y"));
        assert!(wants_replay("yes"));
        assert!(wants_replay("YES"));
        assert!(wants_replay("  yes  "));
    }

    #[test]
    fn replay_rejects_everything_else() {
        assert!(!wants_replay("n"));
        assert!(!wants_replay("no"));
        assert!(!wants_replay(""));
        assert!(!wants_replay("yeah"));
        assert!(!wants_replay("q"));
    }
}
