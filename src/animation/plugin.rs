//! Animation plugin advancing sprite sheet frames once per tick.
use bevy::prelude::*;

use crate::core::plugin::SceneSet;

use super::systems::advance_sprite_animations;

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            advance_sprite_animations.in_set(SceneSet::Animation),
        );
    }
}
