//! Validated single-letter guess input
//!
//! A Letter is one ASCII alphabetic character, normalized to uppercase.
//! The game state only ever sees letters that passed this validation.

use std::fmt;

/// A single uppercase letter, the only valid guess input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letter(char);

/// Error type for invalid guess input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterError {
    Empty,
    TooLong(usize),
    NotAlphabetic(char),
}

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Please enter a letter"),
            Self::TooLong(len) => {
                write!(f, "Please enter exactly one letter, got {len} characters")
            }
            Self::NotAlphabetic(ch) => write!(f, "'{ch}' is not a letter"),
        }
    }
}

impl std::error::Error for LetterError {}

impl Letter {
    /// Parse a single letter from raw user input
    ///
    /// Surrounding whitespace is trimmed and the letter is normalized
    /// to uppercase, so `" p "` and `"P"` parse to the same Letter.
    ///
    /// # Errors
    /// Returns `LetterError` if the trimmed input is empty, longer than
    /// one character, or not an ASCII alphabetic character.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Letter;
    ///
    /// let letter = Letter::parse("p").unwrap();
    /// assert_eq!(letter.as_char(), 'P');
    ///
    /// assert!(Letter::parse("").is_err());
    /// assert!(Letter::parse("py").is_err());
    /// assert!(Letter::parse("7").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, LetterError> {
        let trimmed = input.trim();
        let mut chars = trimmed.chars();

        let Some(first) = chars.next() else {
            return Err(LetterError::Empty);
        };

        if chars.next().is_some() {
            return Err(LetterError::TooLong(trimmed.chars().count()));
        }

        if !first.is_ascii_alphabetic() {
            return Err(LetterError::NotAlphabetic(first));
        }

        Ok(Self(first.to_ascii_uppercase()))
    }

    /// Get the uppercase character
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
