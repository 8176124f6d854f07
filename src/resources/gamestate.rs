//! Hangman round state.
//!
//! [`GameState`] holds the secret word, the letters guessed so far and the
//! number of incorrect guesses still allowed. Everything else (masked word,
//! win/loss, status line) is derived on demand.
//!
//! Mutation happens only through [`GameState::guess`] and
//! [`GameState::reset`], which the observers in
//! [`crate::events::guess`] call in response to input events. Whenever the
//! remaining-guess counter changes the observer triggers
//! [`RemainingGuessesChanged`](crate::events::figure::RemainingGuessesChanged)
//! so the figure can be rebuilt.

use std::fmt;

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashSet;

use crate::resources::wordpool::WordPool;

/// Incorrect guesses allowed per round.
pub const MAX_GUESSES: u8 = 6;
/// Shown in the masked word for letters not yet guessed.
pub const PLACEHOLDER: char = '_';

/// Result of a single [`GameState::guess`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Not a letter, already guessed, or the round is over. Nothing changed.
    Ignored,
    /// The letter is in the secret word.
    Hit,
    /// The letter is not in the secret word; one guess was spent.
    Miss,
}

/// Round status used for the status line and the restart control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress(u8),
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress(remaining) => write!(f, "{remaining} guesses remaining"),
            GameStatus::Won => f.write_str("You won"),
            GameStatus::Lost => f.write_str("Game over"),
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    secret_word: String,
    guessed_letters: FxHashSet<char>,
    remaining_guesses: u8,
}

impl GameState {
    /// Start a round with a known secret word. The word is uppercased.
    pub fn new(secret_word: impl AsRef<str>) -> Self {
        Self {
            secret_word: secret_word.as_ref().to_ascii_uppercase(),
            guessed_letters: FxHashSet::default(),
            remaining_guesses: MAX_GUESSES,
        }
    }

    /// Start a round with a word drawn from `pool`.
    pub fn random(pool: &WordPool, rng: &mut fastrand::Rng) -> Self {
        Self::new(pool.pick(rng))
    }

    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    pub fn guessed_letters(&self) -> &FxHashSet<char> {
        &self.guessed_letters
    }

    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed_letters.contains(&letter.to_ascii_uppercase())
    }

    pub fn remaining_guesses(&self) -> u8 {
        self.remaining_guesses
    }

    pub fn missing_guesses(&self) -> u8 {
        MAX_GUESSES.saturating_sub(self.remaining_guesses)
    }

    /// Secret word with unguessed letters replaced by [`PLACEHOLDER`],
    /// positions separated by single spaces (`"E _ E _"`).
    pub fn masked_word(&self) -> String {
        let mut out = String::with_capacity(self.secret_word.len() * 2);
        for (i, c) in self.secret_word.chars().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(if self.guessed_letters.contains(&c) {
                c
            } else {
                PLACEHOLDER
            });
        }
        out
    }

    pub fn is_won(&self) -> bool {
        self.secret_word
            .chars()
            .all(|c| self.guessed_letters.contains(&c))
    }

    pub fn is_lost(&self) -> bool {
        self.remaining_guesses == 0 && !self.is_won()
    }

    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    pub fn status(&self) -> GameStatus {
        if self.is_lost() {
            GameStatus::Lost
        } else if self.is_won() {
            GameStatus::Won
        } else {
            GameStatus::InProgress(self.remaining_guesses)
        }
    }

    /// Whether the restart control should be offered.
    pub fn show_restart(&self) -> bool {
        self.is_over()
    }

    /// Apply a guess. Case is normalized; anything other than a fresh
    /// ASCII letter during a running round is ignored.
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        let letter = letter.to_ascii_uppercase();
        if !letter.is_ascii_alphabetic() || self.is_over() {
            return GuessOutcome::Ignored;
        }
        if !self.guessed_letters.insert(letter) {
            return GuessOutcome::Ignored;
        }
        if self.secret_word.contains(letter) {
            GuessOutcome::Hit
        } else {
            self.remaining_guesses = self.remaining_guesses.saturating_sub(1);
            GuessOutcome::Miss
        }
    }

    /// Start a new round with a word drawn uniformly from `pool`. The
    /// current word may be drawn again.
    pub fn reset(&mut self, pool: &WordPool, rng: &mut fastrand::Rng) {
        self.secret_word = pool.pick(rng).to_string();
        self.guessed_letters.clear();
        self.remaining_guesses = MAX_GUESSES;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masked_word_separates_positions_with_spaces() {
        let mut state = GameState::new("eger");
        assert_eq!(state.masked_word(), "_ _ _ _");
        state.guess('e');
        assert_eq!(state.masked_word(), "E _ E _");
    }

    #[test]
    fn status_line_texts() {
        assert_eq!(GameStatus::InProgress(4).to_string(), "4 guesses remaining");
        assert_eq!(GameStatus::Won.to_string(), "You won");
        assert_eq!(GameStatus::Lost.to_string(), "Game over");
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut state = GameState::new("DUNA");
        let before = state.clone();
        assert_eq!(state.guess('3'), GuessOutcome::Ignored);
        assert_eq!(state.guess(' '), GuessOutcome::Ignored);
        assert_eq!(state.guess('É'), GuessOutcome::Ignored);
        assert_eq!(state, before);
    }
}
