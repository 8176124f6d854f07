//! Actor animation system.
//!
//! One pass over every [`Actor`] per frame. Poses depend only on the clock,
//! the actor's index and whether the round is over, so the same frame can be
//! replayed exactly. The hanged figure stays at rest while it has no parts.
use bevy_ecs::prelude::*;

use crate::components::actor::{Actor, MotionProfile};
use crate::components::position::Position3D;
use crate::components::rotation::Rotation3D;
use crate::resources::figurerig::FigureRig;
use crate::resources::gamestate::GameState;
use crate::resources::worldtime::WorldTime;

pub fn animate_actors(
    time: Res<WorldTime>,
    game_state: Option<Res<GameState>>,
    rig: Option<Res<FigureRig>>,
    mut actors: Query<(&Actor, &mut Position3D, &mut Rotation3D)>,
) {
    let t = time.elapsed;
    let is_over = game_state.is_some_and(|state| state.is_over());
    let figure_has_parts = rig.is_some_and(|rig| rig.attached_count() > 0);

    for (actor, mut position, mut rotation) in actors.iter_mut() {
        let pose = if actor.profile == MotionProfile::HangedFigure && !figure_has_parts {
            actor.rest
        } else {
            actor.pose(t, is_over)
        };
        position.pos = pose.position;
        rotation.euler = pose.rotation;
    }
}
