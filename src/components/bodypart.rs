//! Hanged-figure body parts.
//!
//! The figure is drawn from a fixed, ordered catalog. Part `i` is shown once
//! more than `i` guesses have been missed, so parts accumulate in catalog
//! order and the full figure appears exactly when no guesses remain.

use arrayvec::ArrayVec;
use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

use crate::resources::gamestate::MAX_GUESSES;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyPart {
    Head,
    Torso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl BodyPart {
    /// Attachment order.
    pub const CATALOG: [BodyPart; 6] = [
        BodyPart::Head,
        BodyPart::Torso,
        BodyPart::LeftArm,
        BodyPart::RightArm,
        BodyPart::LeftLeg,
        BodyPart::RightLeg,
    ];

    pub fn index(self) -> usize {
        match self {
            BodyPart::Head => 0,
            BodyPart::Torso => 1,
            BodyPart::LeftArm => 2,
            BodyPart::RightArm => 3,
            BodyPart::LeftLeg => 4,
            BodyPart::RightLeg => 5,
        }
    }

    pub fn is_attached(self, missing_guesses: u8) -> bool {
        missing_guesses as usize > self.index()
    }

    /// Offset of the part's node from the figure origin.
    pub fn offset(self) -> Vector3 {
        match self {
            BodyPart::Head => Vector3::new(0.0, 1.3, 0.0),
            BodyPart::Torso => Vector3::new(0.0, 0.4, 0.0),
            BodyPart::LeftArm => Vector3::new(-0.3, 0.8, 0.0),
            BodyPart::RightArm => Vector3::new(0.3, 0.8, 0.0),
            BodyPart::LeftLeg => Vector3::new(-0.2, -0.2, 0.0),
            BodyPart::RightLeg => Vector3::new(0.2, -0.2, 0.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BodyPart::Head => "head",
            BodyPart::Torso => "torso",
            BodyPart::LeftArm => "left arm",
            BodyPart::RightArm => "right arm",
            BodyPart::LeftLeg => "left leg",
            BodyPart::RightLeg => "right leg",
        }
    }
}

/// Parts that should be attached with `remaining_guesses` left, in catalog
/// order.
pub fn attached_parts(remaining_guesses: u8) -> ArrayVec<BodyPart, 6> {
    let missing = MAX_GUESSES.saturating_sub(remaining_guesses);
    BodyPart::CATALOG
        .into_iter()
        .filter(|part| part.is_attached(missing))
        .collect()
}

/// Marker for the figure group root.
#[derive(Component, Clone, Copy, Debug)]
pub struct HangedFigure;

/// Marker for a part node attached under the [`HangedFigure`] root.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BodyPartNode(pub BodyPart);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_index_matches_position() {
        for (i, part) in BodyPart::CATALOG.iter().enumerate() {
            assert_eq!(part.index(), i);
        }
    }

    #[test]
    fn parts_accumulate_in_catalog_order() {
        for remaining in 0..=MAX_GUESSES {
            let parts = attached_parts(remaining);
            let missing = (MAX_GUESSES - remaining) as usize;
            assert_eq!(parts.len(), missing.min(6));
            assert_eq!(parts.as_slice(), &BodyPart::CATALOG[..missing]);
        }
    }

    #[test]
    fn counter_above_max_attaches_nothing() {
        assert!(attached_parts(200).is_empty());
    }
}
