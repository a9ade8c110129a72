//! Terminal output formatting
//!
//! Stage artwork and display utilities for the interactive loop.

pub mod display;
pub mod stages;

pub use display::{
    print_goodbye, print_guess_outcome, print_new_round, print_round_result, print_round_state,
    print_welcome,
};
pub use stages::{STAGES, stage_art};
