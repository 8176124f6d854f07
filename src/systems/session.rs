//! Session flow systems and run conditions.
use bevy_ecs::prelude::*;

use crate::events::session::SessionChangedEvent;
use crate::resources::session::{NextSessionPhase, NextSessionState, SessionPhase, SessionState};

/// Trigger [`SessionChangedEvent`] when a transition is pending.
pub fn check_pending_session(mut commands: Commands, next_session: Res<NextSessionState>) {
    if let NextSessionPhase::Pending(_) = next_session.get() {
        commands.trigger(SessionChangedEvent {});
    }
}

pub fn session_is_playing(session: Res<SessionState>) -> bool {
    matches!(session.get(), SessionPhase::Playing)
}
