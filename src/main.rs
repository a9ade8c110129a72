//! Hangman - CLI
//!
//! Running the binary enters the interactive game loop directly;
//! there are no flags or subcommands.

use anyhow::Result;
use clap::Parser;
use hangman::{interactive, wordlists::RandomPicker};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Classic hangman word-guessing game for the terminal",
    version,
    author
)]
struct Cli {}

fn main() -> Result<()> {
    let Cli {} = Cli::parse();

    interactive::run(RandomPicker)
}
