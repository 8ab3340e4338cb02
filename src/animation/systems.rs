//! Systems driving sprite animation clocks.
use bevy::prelude::*;

use super::components::SpriteAnimation;

/// Advances every animation clock by one tick, whether or not the actor moves.
pub fn advance_sprite_animations(mut query: Query<&mut SpriteAnimation>) {
    for mut animation in query.iter_mut() {
        animation.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_animated_entity_ticks_each_update() {
        let mut app = App::new();
        app.add_systems(Update, advance_sprite_animations);

        let walker = app
            .world_mut()
            .spawn(SpriteAnimation::new(8, 2, Vec2::new(10.0, 10.0)))
            .id();
        let idler = app
            .world_mut()
            .spawn(SpriteAnimation::new(3, 1, Vec2::new(10.0, 10.0)))
            .id();

        for _ in 0..4 {
            app.update();
        }

        let world = app.world();
        let frame_x = |entity| {
            world
                .get::<SpriteAnimation>(entity)
                .map(|animation| animation.source_rect().min.x)
        };
        assert_eq!(frame_x(walker), Some(20.0));
        assert_eq!(frame_x(idler), Some(10.0));
    }
}
