//! Integration tests for hangman rounds and the hanged-figure assembly.
//!
//! A headless world runs the real observers: guesses and resets go through
//! the event path, and the figure is rebuilt the way it is in the game.
//!
//! # Usage
//!
//! ```sh
//! cargo test --test round_integration
//! ```

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;

use gallowsyard::components::bodypart::{BodyPart, BodyPartNode};
use gallowsyard::events::guess::{GuessEvent, ResetEvent};
use gallowsyard::game::{init_world, start_session};
use gallowsyard::resources::figurerig::FigureRig;
use gallowsyard::resources::gameconfig::GameConfig;
use gallowsyard::resources::gamestate::{GameState, GameStatus, MAX_GUESSES};
use gallowsyard::resources::wordpool::WordPool;

fn session_world(word: &str) -> World {
    let mut config = GameConfig::new();
    config.seed = Some(42);
    config.start_word = Some(word.to_string());
    let mut world = World::new();
    init_world(&mut world, config);
    start_session(&mut world);
    world
}

fn guess(world: &mut World, letter: char) {
    world.trigger(GuessEvent { letter });
    world.flush();
}

fn reset(world: &mut World) {
    world.trigger(ResetEvent {});
    world.flush();
}

fn attached_nodes(world: &mut World) -> Vec<BodyPart> {
    let mut parts: Vec<BodyPart> = world
        .query::<&BodyPartNode>()
        .iter(world)
        .map(|node| node.0)
        .collect();
    parts.sort_by_key(|p| p.index());
    parts
}

fn rebuilds(world: &World) -> u32 {
    world.resource::<FigureRig>().rebuilds
}

// =============================================================================
// Game state through the event path
// =============================================================================

#[test]
fn setup_starts_a_fresh_round_with_an_empty_figure() {
    let mut world = session_world("eger");

    let state = world.resource::<GameState>();
    assert_eq!(state.secret_word(), "EGER");
    assert_eq!(state.remaining_guesses(), MAX_GUESSES);
    assert!(state.guessed_letters().is_empty());
    assert_eq!(state.masked_word(), "_ _ _ _");

    assert_eq!(rebuilds(&world), 1);
    assert!(attached_nodes(&mut world).is_empty());
}

#[test]
fn winning_eger_without_a_miss() {
    let mut world = session_world("EGER");

    guess(&mut world, 'E');
    assert_eq!(world.resource::<GameState>().masked_word(), "E _ E _");
    guess(&mut world, 'g');
    guess(&mut world, 'R');

    let state = world.resource::<GameState>();
    assert_eq!(state.masked_word(), "E G E R");
    assert_eq!(state.status(), GameStatus::Won);
    assert_eq!(state.remaining_guesses(), MAX_GUESSES);
    assert!(state.show_restart());
    // hits never touch the figure
    assert_eq!(rebuilds(&world), 1);
    assert!(attached_nodes(&mut world).is_empty());
}

#[test]
fn losing_duna_attaches_the_whole_figure() {
    let mut world = session_world("DUNA");

    for letter in ['X', 'Y', 'Z', 'Q', 'W', 'V'] {
        guess(&mut world, letter);
    }

    let state = world.resource::<GameState>();
    assert_eq!(state.status(), GameStatus::Lost);
    assert_eq!(state.status().to_string(), "Game over");
    assert_eq!(state.remaining_guesses(), 0);
    assert_eq!(attached_nodes(&mut world), BodyPart::CATALOG.to_vec());
    assert_eq!(rebuilds(&world), 1 + 6);

    // further guesses are ignored once the round is over
    guess(&mut world, 'D');
    let state = world.resource::<GameState>();
    assert!(!state.has_guessed('D'));
    assert_eq!(rebuilds(&world), 7);
}

#[test]
fn repeated_letter_is_a_no_op() {
    let mut world = session_world("DUNA");

    guess(&mut world, 'X');
    let snapshot = world.resource::<GameState>().clone();
    guess(&mut world, 'x');

    assert_eq!(*world.resource::<GameState>(), snapshot);
    assert_eq!(world.resource::<GameState>().remaining_guesses(), 5);
    assert_eq!(rebuilds(&world), 2);
}

#[test]
fn reset_clears_the_round_and_the_figure() {
    let mut world = session_world("DUNA");
    for letter in ['B', 'C', 'E'] {
        guess(&mut world, letter);
    }
    assert_eq!(attached_nodes(&mut world).len(), 3);

    reset(&mut world);

    let state = world.resource::<GameState>();
    assert_eq!(state.remaining_guesses(), MAX_GUESSES);
    assert!(state.guessed_letters().is_empty());
    assert!(world.resource::<WordPool>().contains(state.secret_word()));
    assert!(attached_nodes(&mut world).is_empty());
}

#[test]
fn reset_of_an_untouched_round_does_not_rebuild() {
    let mut world = session_world("EGER");
    reset(&mut world);
    assert_eq!(rebuilds(&world), 1);
}

// =============================================================================
// Figure assembly
// =============================================================================

#[test]
fn each_miss_rebuilds_once_with_cumulative_parts() {
    let mut world = session_world("EGER");

    guess(&mut world, 'A');
    assert_eq!(rebuilds(&world), 2);
    assert_eq!(attached_nodes(&mut world), vec![BodyPart::Head]);

    guess(&mut world, 'B');
    assert_eq!(rebuilds(&world), 3);
    assert_eq!(attached_nodes(&mut world), vec![BodyPart::Head, BodyPart::Torso]);
}

#[test]
fn part_count_matches_missed_guesses() {
    let mut world = session_world("EGER");

    for (missed, letter) in ['A', 'B', 'C', 'D', 'F', 'H'].into_iter().enumerate() {
        guess(&mut world, letter);
        let expected = (missed + 1).min(6);
        assert_eq!(attached_nodes(&mut world).len(), expected);
        assert_eq!(world.resource::<FigureRig>().attached_count(), expected);
    }
}

#[test]
fn parts_hang_from_the_figure_root() {
    let mut world = session_world("EGER");
    guess(&mut world, 'A');
    guess(&mut world, 'B');

    let root = world.resource::<FigureRig>().root;
    let parents: Vec<Entity> = world
        .query_filtered::<&ChildOf, With<BodyPartNode>>()
        .iter(&world)
        .map(|child_of| child_of.parent())
        .collect();
    assert_eq!(parents.len(), 2);
    assert!(parents.iter().all(|p| *p == root));
}
