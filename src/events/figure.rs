//! Figure assembly.
//!
//! [`RemainingGuessesChanged`] carries the new counter value. The observer
//! throws away every attached part and rebuilds the catalog from scratch, so
//! the attached set is always a pure function of the counter.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::bodypart::{BodyPartNode, HangedFigure, attached_parts};
use crate::components::position::Position3D;
use crate::resources::figurerig::{FigureRig, figure_anchor};
use crate::scene::figure::part;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemainingGuessesChanged {
    pub remaining: u8,
}

/// Rebuild the hanged figure for the new counter value.
pub fn rebuild_figure_observer(
    trigger: On<RemainingGuessesChanged>,
    mut commands: Commands,
    rig: Option<ResMut<FigureRig>>,
    parts: Query<Entity, With<BodyPartNode>>,
    mut roots: Query<&mut Position3D, With<HangedFigure>>,
) {
    let Some(mut rig) = rig else {
        warn!("RemainingGuessesChanged without a FigureRig; no figure to rebuild");
        return;
    };
    let remaining = trigger.event().remaining;

    for entity in parts.iter() {
        commands.entity(entity).despawn();
    }

    let attached = attached_parts(remaining);
    for body_part in &attached {
        let entity = part(*body_part).spawn(&mut commands, Some(rig.root));
        commands.entity(entity).insert(BodyPartNode(*body_part));
    }

    if let Ok(mut position) = roots.get_mut(rig.root) {
        position.pos = figure_anchor();
    }

    rig.rebuilds += 1;
    debug!(
        "Figure rebuilt for {} remaining: {} parts (rebuild #{})",
        remaining,
        attached.len(),
        rig.rebuilds
    );
    rig.attached = attached;
}
