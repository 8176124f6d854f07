//! Session lifecycle resources.
//!
//! These resources track where the session is in its lifecycle and any
//! pending transition requested by systems. See
//! `crate::events::session::observe_session_change_event` for how a
//! transition is applied and the setup/teardown hooks are invoked.

use bevy_ecs::prelude::Resource;

/// Discrete lifecycle phases of a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SessionPhase {
    #[default]
    None,
    /// Scene is being built and the animation loop registered.
    Setup,
    Playing,
    /// Teardown ran; the main loop exits.
    Quitting,
}

/// Representation of a requested next phase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NextSessionPhase {
    #[default]
    Unchanged,
    Pending(SessionPhase),
}

/// Authoritative current session phase.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SessionState {
    current: SessionPhase,
}

impl SessionState {
    pub fn new() -> Self {
        SessionState {
            current: SessionPhase::None,
        }
    }
    /// Read-only access to the current phase.
    pub fn get(&self) -> &SessionPhase {
        &self.current
    }
    /// Update the current phase immediately.
    ///
    /// Prefer requesting transitions via [`NextSessionState`] so the
    /// enter/exit hooks run.
    pub fn set(&mut self, phase: SessionPhase) {
        self.current = phase;
    }

    pub fn is_quitting(&self) -> bool {
        self.current == SessionPhase::Quitting
    }
}

/// Intent to change to a new session phase.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NextSessionState {
    next: NextSessionPhase,
}

impl NextSessionState {
    pub fn new() -> Self {
        NextSessionState {
            next: NextSessionPhase::Unchanged,
        }
    }

    pub fn get(&self) -> &NextSessionPhase {
        &self.next
    }

    /// Request a transition to `next`. The `check_pending_session` system
    /// emits the event that applies it.
    pub fn set(&mut self, next: SessionPhase) {
        self.next = NextSessionPhase::Pending(next);
    }

    pub fn reset(&mut self) {
        self.next = NextSessionPhase::Unchanged;
    }
}
