//! Systems spawning, moving, and presenting actors.
use bevy::{prelude::*, sprite::Anchor};

use crate::animation::components::SpriteAnimation;

use super::{
    components::{DisplaySize, Facing, Interactable, Mover, WorldPosition},
    config::{ActorRoster, ActorSpec},
    movement::{step, HeldDirections},
};

const PLAYER_Z: f32 = 2.0;
const NPC_Z: f32 = 1.0;

/// Spawns every actor in the roster, composing components from its capabilities.
pub fn spawn_actors(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    roster: Res<ActorRoster>,
) {
    for spec in &roster.actors {
        let image = asset_server.load(spec.sprite.path.clone());
        spawn_actor(&mut commands, spec, image);
    }
}

/// Spawns a single actor. Movement, animation, and interaction are attached
/// only when the corresponding capability is set.
pub fn spawn_actor(commands: &mut Commands, spec: &ActorSpec, image: Handle<Image>) -> Entity {
    let capabilities = spec.capabilities;
    let z = if capabilities.movable { PLAYER_Z } else { NPC_Z };

    let mut entity = commands.spawn((
        WorldPosition(spec.position),
        Facing::default(),
        DisplaySize(spec.sprite.display_size),
        capabilities,
        Sprite {
            image,
            custom_size: Some(spec.sprite.display_size),
            ..default()
        },
        Anchor::BOTTOM_CENTER,
        Transform::from_translation(scene_to_translation(spec.position, z)),
        Name::new(spec.name.clone()),
    ));

    if capabilities.movable {
        entity.insert(Mover {
            move_speed: spec.move_speed,
        });
    }
    if capabilities.animated {
        entity.insert(SpriteAnimation::new(
            spec.sprite.total_frames,
            spec.sprite.ticks_per_frame,
            spec.sprite.frame_size,
        ));
    }
    if capabilities.interactable {
        entity.insert(Interactable);
    }

    info!(
        "Spawned {} {} at ({:.0}, {:.0}) movable={} animated={} interactable={}",
        capabilities.role(),
        spec.name,
        spec.position.x,
        spec.position.y,
        capabilities.movable,
        capabilities.animated,
        capabilities.interactable
    );

    entity.id()
}

/// Applies held direction keys to every movable actor.
pub fn move_player_actor(
    held: Res<HeldDirections>,
    mut query: Query<(&Mover, &mut WorldPosition, &mut Facing)>,
) {
    if !held.any() {
        return;
    }

    for (mover, mut position, mut facing) in query.iter_mut() {
        let (next_position, next_facing) = step(position.0, *facing, &held, mover.move_speed);
        position.0 = next_position;
        *facing = next_facing;
    }
}

/// Projects scene state onto sprites: position, mirroring, and current frame.
pub fn sync_actor_sprites(
    mut query: Query<(
        &WorldPosition,
        &Facing,
        Option<&SpriteAnimation>,
        &mut Sprite,
        &mut Transform,
    )>,
) {
    for (position, facing, animation, mut sprite, mut transform) in query.iter_mut() {
        let translated = scene_to_translation(position.0, transform.translation.z);
        transform.translation = translated;
        sprite.flip_x = *facing == Facing::Left;
        if let Some(animation) = animation {
            sprite.rect = Some(animation.source_rect());
        }
    }
}

/// Scene coordinates grow downward; Bevy's 2D world grows upward.
pub fn scene_to_translation(position: Vec2, z: f32) -> Vec3 {
    Vec3::new(position.x, -position.y, z)
}
