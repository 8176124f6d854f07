//! Guess and reset events and their observers.
//!
//! These are the only paths that mutate [`GameState`]. After a mutation that
//! changes the remaining-guess counter, a [`RemainingGuessesChanged`] event
//! is triggered so the figure is rebuilt before the next frame.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::events::figure::RemainingGuessesChanged;
use crate::resources::gamestate::{GameState, GameStatus, GuessOutcome};
use crate::resources::rng::GameRng;
use crate::resources::wordpool::WordPool;

/// A letter was typed or clicked.
#[derive(Event, Debug, Clone, Copy)]
pub struct GuessEvent {
    pub letter: char,
}

/// Start a new round.
#[derive(Event, Debug, Clone, Copy)]
pub struct ResetEvent {}

/// Apply a guess to the round.
///
/// Invalid guesses (non-letters, repeats, guesses after the round ended) are
/// dropped with a debug log; they never change the state.
pub fn guess_observer(
    trigger: On<GuessEvent>,
    mut commands: Commands,
    game_state: Option<ResMut<GameState>>,
) {
    let Some(mut game_state) = game_state else {
        warn!("GuessEvent without a GameState resource");
        return;
    };
    let letter = trigger.event().letter;
    let before = game_state.remaining_guesses();

    match game_state.guess(letter) {
        GuessOutcome::Ignored => {
            debug!("Ignored guess {:?}", letter);
            return;
        }
        GuessOutcome::Hit => debug!("Hit: {}", letter.to_ascii_uppercase()),
        GuessOutcome::Miss => debug!(
            "Miss: {} ({} left)",
            letter.to_ascii_uppercase(),
            game_state.remaining_guesses()
        ),
    }

    match game_state.status() {
        GameStatus::Won => info!("Round won: {}", game_state.secret_word()),
        GameStatus::Lost => info!("Round lost, the word was {}", game_state.secret_word()),
        GameStatus::InProgress(_) => {}
    }

    let remaining = game_state.remaining_guesses();
    if remaining != before {
        commands.trigger(RemainingGuessesChanged { remaining });
    }
}

/// Draw a new word and clear the round.
pub fn reset_observer(
    _trigger: On<ResetEvent>,
    mut commands: Commands,
    game_state: Option<ResMut<GameState>>,
    pool: Option<Res<WordPool>>,
    rng: Option<ResMut<GameRng>>,
) {
    let (Some(mut game_state), Some(pool), Some(mut rng)) = (game_state, pool, rng) else {
        warn!("ResetEvent without GameState, WordPool or GameRng");
        return;
    };
    let before = game_state.remaining_guesses();
    game_state.reset(&pool, &mut rng.0);
    info!(
        "New round: {} letters",
        game_state.secret_word().chars().count()
    );

    let remaining = game_state.remaining_guesses();
    if remaining != before {
        commands.trigger(RemainingGuessesChanged { remaining });
    }
}
