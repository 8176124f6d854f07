//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from raylib each frame and
//!   writes it into [`InputState`].
//! - [`dispatch_input`] turns that state into game events: guesses from
//!   typed letters and letter-board clicks, resets from Enter or the restart
//!   button, the debug toggle and the quit request. It needs no window, so
//!   tests drive it by writing [`InputState`] directly.
use bevy_ecs::prelude::*;
use raylib::prelude::MouseButton;

use crate::events::guess::{GuessEvent, ResetEvent};
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::gamestate::GameState;
use crate::resources::hud::HudLayout;
use crate::resources::input::{BoolState, InputState};
use crate::resources::session::{NextSessionState, SessionPhase};

/// Poll raylib for keyboard and mouse input and update the `InputState`
/// resource.
pub fn update_input_state(mut input: ResMut<InputState>, mut rl: NonSendMut<raylib::RaylibHandle>) {
    input.clear_frame();

    let poll = |state: &mut BoolState, rl: &raylib::RaylibHandle| {
        state.active = rl.is_key_down(state.key_binding);
        state.just_pressed = rl.is_key_pressed(state.key_binding);
    };
    poll(&mut input.action_back, &*rl);
    poll(&mut input.action_confirm, &*rl);
    poll(&mut input.mode_debug, &*rl);

    while let Some(c) = rl.get_char_pressed() {
        input.push_typed(c);
    }

    input.pointer = rl.get_mouse_position();
    input.pointer_pressed = rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT);
}

/// Translate this frame's input into events.
pub fn dispatch_input(
    input: Res<InputState>,
    layout: Option<Res<HudLayout>>,
    game_state: Option<Res<GameState>>,
    mut next_session: ResMut<NextSessionState>,
    mut commands: Commands,
) {
    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
    if input.action_back.just_pressed {
        next_session.set(SessionPhase::Quitting);
        return;
    }

    let is_over = game_state.is_some_and(|state| state.is_over());

    for &letter in &input.typed {
        commands.trigger(GuessEvent { letter });
    }

    if input.pointer_pressed {
        if let Some(layout) = layout.as_deref() {
            if is_over && layout.restart_hit(input.pointer) {
                commands.trigger(ResetEvent {});
                return;
            }
            if let Some(letter) = layout.letter_at(input.pointer) {
                commands.trigger(GuessEvent { letter });
            }
        }
    }

    if is_over && input.action_confirm.just_pressed {
        commands.trigger(ResetEvent {});
    }
}
