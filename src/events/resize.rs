//! Window resize notifications.
//!
//! The window poll triggers [`WindowResizedEvent`] when the window size
//! changes. While a [`ResizeSubscription`] exists the observer recomputes
//! the [`Viewport`] and the [`HudLayout`]; it never touches the animation
//! clock or the figure rig. Applying the same size twice is a no-op.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::resources::handles::ResizeSubscription;
use crate::resources::hud::HudLayout;
use crate::resources::viewport::Viewport;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowResizedEvent {
    pub w: i32,
    pub h: i32,
}

pub fn window_resized_observer(
    trigger: On<WindowResizedEvent>,
    mut commands: Commands,
    subscription: Option<Res<ResizeSubscription>>,
    viewport: Option<ResMut<Viewport>>,
) {
    let WindowResizedEvent { w, h } = *trigger.event();
    if subscription.is_none() {
        warn!("Resize to {}x{} ignored: no active session", w, h);
        return;
    }
    let Some(mut viewport) = viewport else {
        warn!("Resize to {}x{} ignored: no Viewport resource", w, h);
        return;
    };

    let updated = Viewport::for_window(w, h);
    if *viewport == updated {
        debug!("Resize to {}x{}: viewport unchanged", w, h);
        return;
    }
    *viewport = updated;
    commands.insert_resource(HudLayout::compute(&updated));
    info!(
        "Viewport: window {}x{}, surface {}x{}, preset {}",
        updated.window.w,
        updated.window.h,
        updated.surface_w,
        updated.surface_h,
        updated.preset.name()
    );
}
