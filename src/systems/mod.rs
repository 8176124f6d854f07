//! Game systems.
//!
//! Submodules overview
//! - [`animation`] – apply motion profiles to every actor
//! - [`follow`] – copy a target's position onto followers
//! - [`input`] – read hardware input and turn it into game events
//! - [`propagate_transforms`] – compute world transforms down the hierarchy
//! - [`render`] – draw the scene, the HUD and the debug overlay
//! - [`session`] – pending session transitions and run conditions
//! - [`time`] – advance the fixed-step animation clock
//! - [`window`] – poll the window size and report resizes

pub mod animation;
pub mod follow;
pub mod input;
pub mod propagate_transforms;
pub mod render;
pub mod session;
pub mod time;
pub mod window;

use bevy_ecs::prelude::*;

use crate::resources::handles::animation_loop_active;

/// Add the systems that need no window, in frame order: session flow,
/// input dispatch, clock, animation, follow, transform propagation.
pub fn add_simulation_systems(schedule: &mut Schedule) {
    schedule.add_systems(
        (
            session::check_pending_session,
            input::dispatch_input,
            (time::update_world_time, animation::animate_actors)
                .chain()
                .run_if(animation_loop_active),
            follow::follow_system,
            propagate_transforms::propagate_transforms,
        )
            .chain(),
    );
}
