//! Display functions for game state and round results

use colored::Colorize;

use super::stages::stage_art;
use crate::core::{GameState, GuessOutcome, Letter};

/// Print the welcome banner and rules, once at startup
pub fn print_welcome() {
    println!("{}", "═".repeat(50).bright_cyan());
    println!(
        "{}",
        "       🎮 WELCOME TO HANGMAN 🎮".bright_yellow().bold()
    );
    println!("{}", "═".repeat(50).bright_cyan());
    println!("Rules:");
    println!("  • Guess the word one letter at a time");
    println!("  • You have 6 incorrect guesses before losing");
    println!("  • Enter single letters only");
    println!("  • Good luck!");
    println!("{}", "═".repeat(50).bright_cyan());
}

/// Print the gallows art and progress summary for the current round
pub fn print_round_state(game: &GameState) {
    let summary = game.progress_summary();

    println!("\n{}", "─".repeat(40).cyan());
    println!("{}", stage_art(game.stage_index()));
    println!("{}", "─".repeat(40).cyan());

    println!(
        "Word: {}",
        summary.rendered_word.bright_white().bold()
    );

    let guessed = if summary.guessed_letters.is_empty() {
        "None".to_string()
    } else {
        summary
            .guessed_letters
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!("Guessed letters: {guessed}");
    println!(
        "Remaining guesses: {}",
        summary.remaining.to_string().bright_cyan()
    );
    println!("{}", "─".repeat(40).cyan());
}

/// Print the message for a guess outcome
pub fn print_guess_outcome(outcome: GuessOutcome, letter: Letter) {
    match outcome {
        GuessOutcome::AlreadyGuessed => {
            println!(
                "⚠️  You already guessed '{letter}'! Try a different letter."
            );
        }
        GuessOutcome::Correct => {
            println!("{}", format!("✅ Great! '{letter}' is in the word!").green());
        }
        GuessOutcome::Incorrect => {
            println!("{}", format!("❌ Sorry! '{letter}' is not in the word.").red());
        }
        GuessOutcome::RoundAlreadyOver => {
            println!("The round is already over.");
        }
    }
}

/// Announce the round result and reveal the word
pub fn print_round_result(won: bool, word: &str) {
    if won {
        println!(
            "\n{}",
            "🎉 CONGRATULATIONS! You won! 🎉".bright_green().bold()
        );
    } else {
        println!("\n{}", "💀 GAME OVER! You lost! 💀".red().bold());
    }
    println!("The word was: {}", word.bright_yellow().bold());
}

/// Print the new-round notice after a replay
pub fn print_new_round() {
    println!("\n🔄 Starting new game...");
}

/// Print the exit message
pub fn print_goodbye() {
    println!("\n👋 Thanks for playing hangman! Goodbye!\n");
}
