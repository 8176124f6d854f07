//! Integration tests for input dispatch.
//!
//! [`InputState`] is written directly, standing in for the raylib poll, and
//! only the dispatch system runs.
//!
//! # Usage
//!
//! ```sh
//! cargo test --test input_integration
//! ```

use bevy_ecs::prelude::*;
use raylib::prelude::{Rectangle, Vector2};

use gallowsyard::game::{init_world, start_session};
use gallowsyard::resources::debugmode::DebugMode;
use gallowsyard::resources::gameconfig::GameConfig;
use gallowsyard::resources::gamestate::{GameState, MAX_GUESSES};
use gallowsyard::resources::hud::HudLayout;
use gallowsyard::resources::input::InputState;
use gallowsyard::resources::session::{NextSessionPhase, NextSessionState, SessionPhase};
use gallowsyard::systems::input::dispatch_input;

fn session_world(word: &str) -> World {
    let mut config = GameConfig::new();
    config.seed = Some(3);
    config.start_word = Some(word.to_string());
    let mut world = World::new();
    init_world(&mut world, config);
    start_session(&mut world);
    world
}

/// Run dispatch once with the given input, then clear the per-frame state.
fn dispatch(world: &mut World, edit: impl FnOnce(&mut InputState)) {
    edit(&mut world.resource_mut::<InputState>());
    let mut schedule = Schedule::default();
    schedule.add_systems(dispatch_input);
    schedule.run(world);
    world.flush();
    world.resource_mut::<InputState>().clear_frame();
}

fn centre(rect: &Rectangle) -> Vector2 {
    Vector2::new(rect.x + rect.width * 0.5, rect.y + rect.height * 0.5)
}

fn letter_button(world: &World, letter: char) -> Vector2 {
    let index = (letter as u8 - b'A') as usize;
    centre(&world.resource::<HudLayout>().letters[index])
}

fn lose(world: &mut World) {
    dispatch(world, |input| {
        for c in ['x', 'y', 'z', 'q', 'w', 'v'] {
            input.push_typed(c);
        }
    });
    assert!(world.resource::<GameState>().is_lost());
}

#[test]
fn typed_letters_become_guesses() {
    let mut world = session_world("DUNA");
    dispatch(&mut world, |input| {
        input.push_typed('d');
        input.push_typed('k');
        input.push_typed('7');
    });

    let state = world.resource::<GameState>();
    assert!(state.has_guessed('D'));
    assert!(state.has_guessed('K'));
    assert_eq!(state.guessed_letters().len(), 2);
    assert_eq!(state.remaining_guesses(), MAX_GUESSES - 1);
}

#[test]
fn clicking_a_letter_button_guesses_it() {
    let mut world = session_world("DUNA");
    let point = letter_button(&world, 'U');
    dispatch(&mut world, |input| {
        input.pointer = point;
        input.pointer_pressed = true;
    });

    assert_eq!(world.resource::<GameState>().masked_word(), "_ U _ _");
}

#[test]
fn hovering_without_a_press_does_nothing() {
    let mut world = session_world("DUNA");
    let point = letter_button(&world, 'U');
    dispatch(&mut world, |input| input.pointer = point);

    assert!(world.resource::<GameState>().guessed_letters().is_empty());
}

#[test]
fn restart_is_inactive_while_the_round_runs() {
    let mut world = session_world("DUNA");
    dispatch(&mut world, |input| input.push_typed('x'));
    let restart = centre(&world.resource::<HudLayout>().restart);

    dispatch(&mut world, |input| {
        input.pointer = restart;
        input.pointer_pressed = true;
    });
    dispatch(&mut world, |input| input.action_confirm.just_pressed = true);

    assert_eq!(world.resource::<GameState>().remaining_guesses(), MAX_GUESSES - 1);
}

#[test]
fn restart_button_starts_a_new_round_once_over() {
    let mut world = session_world("DUNA");
    lose(&mut world);
    let restart = centre(&world.resource::<HudLayout>().restart);

    dispatch(&mut world, |input| {
        input.pointer = restart;
        input.pointer_pressed = true;
    });

    let state = world.resource::<GameState>();
    assert!(!state.is_over());
    assert_eq!(state.remaining_guesses(), MAX_GUESSES);
    assert!(state.guessed_letters().is_empty());
}

#[test]
fn enter_starts_a_new_round_once_over() {
    let mut world = session_world("DUNA");
    lose(&mut world);

    dispatch(&mut world, |input| input.action_confirm.just_pressed = true);

    assert_eq!(world.resource::<GameState>().remaining_guesses(), MAX_GUESSES);
}

#[test]
fn escape_requests_quitting() {
    let mut world = session_world("DUNA");
    dispatch(&mut world, |input| {
        input.action_back.just_pressed = true;
        input.push_typed('d');
    });

    assert_eq!(
        *world.resource::<NextSessionState>().get(),
        NextSessionPhase::Pending(SessionPhase::Quitting)
    );
    // quitting wins over anything else typed in the same frame
    assert!(world.resource::<GameState>().guessed_letters().is_empty());
}

#[test]
fn f11_toggles_the_debug_overlay() {
    let mut world = session_world("DUNA");
    assert!(!world.contains_resource::<DebugMode>());

    dispatch(&mut world, |input| input.mode_debug.just_pressed = true);
    assert!(world.contains_resource::<DebugMode>());

    dispatch(&mut world, |input| input.mode_debug.just_pressed = true);
    assert!(!world.contains_resource::<DebugMode>());
}
