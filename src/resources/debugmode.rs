//! Debug overlay toggle.
//!
//! While this resource exists the renderer draws the diagnostics panel
//! (frame count, clock, actor count, attached parts, viewport preset).
//! [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent)
//! inserts or removes it.

use bevy_ecs::prelude::Resource;

/// Marker resource: present while the debug overlay is shown.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode {}
