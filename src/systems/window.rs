//! Window size poll.
//!
//! raylib reports resizes through polling; this system compares the
//! current window size with the one the viewport was built for and
//! triggers [`WindowResizedEvent`] on a mismatch.
use bevy_ecs::prelude::*;

use crate::events::resize::WindowResizedEvent;
use crate::resources::viewport::Viewport;
use crate::resources::windowsize::WindowSize;

pub fn poll_window_size(
    rl: NonSend<raylib::RaylibHandle>,
    viewport: Res<Viewport>,
    mut commands: Commands,
) {
    let (w, h) = (rl.get_screen_width(), rl.get_screen_height());
    if WindowSize::clamped(w, h) != viewport.window {
        commands.trigger(WindowResizedEvent { w, h });
    }
}
