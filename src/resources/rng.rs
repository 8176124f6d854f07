//! Session random number generator.
//!
//! A single seeded generator shared by the word draw and the grass layout,
//! so `--seed` reproduces a whole session.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone)]
pub struct GameRng(pub fastrand::Rng);

impl GameRng {
    /// Seeded generator when `seed` is given, entropy-seeded otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(fastrand::Rng::with_seed(seed)),
            None => Self(fastrand::Rng::new()),
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(None)
    }
}
