//! Actor plugin wiring roster loading, movement, and sprite presentation.
use bevy::prelude::*;

use crate::core::plugin::SceneSet;

use super::{
    config::ActorRoster,
    movement::HeldDirections,
    systems::{move_player_actor, spawn_actors, sync_actor_sprites},
};

pub struct ActorPlugin;

impl Plugin for ActorPlugin {
    fn build(&self, app: &mut App) {
        let roster = ActorRoster::load_or_default();
        info!("Actor roster configured with {} actors", roster.actors.len());

        app.insert_resource(roster)
            .init_resource::<HeldDirections>()
            .add_systems(Startup, spawn_actors)
            .add_systems(
                Update,
                (
                    move_player_actor.in_set(SceneSet::Movement),
                    sync_actor_sprites.in_set(SceneSet::Present),
                ),
            );
    }
}
