//! Registry for dynamically addressable systems.
//!
//! Session hooks (`"setup"`, `"enter_play"`, `"teardown"`) are registered
//! once under string keys and looked up by the session observer, which runs
//! them via their [`bevy_ecs::system::SystemId`].

use bevy_ecs::prelude::{Resource, World};
use bevy_ecs::system::SystemId;
use rustc_hash::FxHashMap;

pub const SETUP: &str = "setup";
pub const ENTER_PLAY: &str = "enter_play";
pub const TEARDOWN: &str = "teardown";

/// Map of string names to system IDs.
#[derive(Resource, Default)]
pub struct SystemsStore {
    pub map: FxHashMap<String, SystemId>,
}

impl SystemsStore {
    pub fn new() -> Self {
        SystemsStore {
            map: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, id: SystemId) {
        self.map.insert(name.into(), id);
    }

    pub fn get(&self, name: impl AsRef<str>) -> Option<&SystemId> {
        self.map.get(name.as_ref())
    }

    /// Register the session hooks from [`crate::game`] and return the
    /// populated store.
    pub fn with_session_hooks(world: &mut World) -> Self {
        let mut store = Self::new();
        store.insert(SETUP, world.register_system(crate::game::setup));
        store.insert(ENTER_PLAY, world.register_system(crate::game::enter_play));
        store.insert(TEARDOWN, world.register_system(crate::game::teardown));
        store
    }
}
