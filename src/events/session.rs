//! Session transition event and observer.
//!
//! Systems request a change of [`SessionPhase`] by updating
//! [`NextSessionState`]. Emitting a [`SessionChangedEvent`] then triggers the
//! observer in this module, which applies the transition to
//! [`SessionState`] and runs the matching hook stored in
//! [`SystemsStore`].
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::resources::session::NextSessionPhase::{Pending, Unchanged};
use crate::resources::session::{NextSessionState, SessionPhase, SessionState};
use crate::resources::systemsstore::{ENTER_PLAY, SETUP, SystemsStore, TEARDOWN};

/// Apply the pending session transition, if any.
#[derive(Event, Debug, Clone, Copy)]
pub struct SessionChangedEvent {}

/// Observer that applies a pending session transition.
///
/// - Reads the intention from [`NextSessionState`].
/// - If pending, copies the new phase into [`SessionState`], resets the
///   intention and runs the hook for the new phase.
/// - If any required resource is missing, logs a diagnostic and returns.
pub fn observe_session_change_event(
    _trigger: On<SessionChangedEvent>,
    mut commands: Commands,
    next_session: Option<ResMut<NextSessionState>>,
    session: Option<ResMut<SessionState>>,
    systems_store: Option<Res<SystemsStore>>,
) {
    debug!("SessionChangedEvent triggered");

    let (Some(mut next_session), Some(mut session), Some(systems_store)) =
        (next_session, session, systems_store)
    else {
        warn!("NextSessionState, SessionState or SystemsStore missing in observe_session_change_event");
        return;
    };

    match next_session.get().clone() {
        Pending(new_phase) => {
            if *session.get() == new_phase {
                debug!("Already in {:?}", new_phase);
                next_session.reset();
                return;
            }
            info!("Session: {:?} -> {:?}", session.get(), new_phase);
            session.set(new_phase.clone());
            next_session.reset();
            on_phase_enter(&new_phase, &mut commands, &systems_store);
        }
        Unchanged => debug!("No session change pending."),
    }
}

fn on_phase_enter(phase: &SessionPhase, commands: &mut Commands, systems_store: &SystemsStore) {
    let hook = match phase {
        SessionPhase::None => return,
        SessionPhase::Setup => SETUP,
        SessionPhase::Playing => ENTER_PLAY,
        SessionPhase::Quitting => TEARDOWN,
    };
    match systems_store.get(hook) {
        Some(id) => commands.run_system(*id),
        None => warn!("Session hook '{}' not found in SystemsStore", hook),
    }
}
