//! Random source for question draws.
use bevy::prelude::Resource;
use rand::{rngs::StdRng, SeedableRng};

/// RNG owned by the scene so tests can seed it.
#[derive(Resource, Debug)]
pub struct QuizRng(pub StdRng);

impl QuizRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for QuizRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}
