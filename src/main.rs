use bevy::prelude::*;

mod actor;
mod animation;
mod core;
mod dialogue;
mod input;
mod quiz;
mod ui;
mod world;

use crate::{
    actor::ActorPlugin, animation::AnimationPlugin, core::CorePlugin, dialogue::DialoguePlugin,
    input::InputPlugin, ui::UiPlugin, world::WorldPlugin,
};

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins
                .set(ImagePlugin::default_nearest())
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Quiz Walk".into(),
                        ..default()
                    }),
                    ..default()
                }),
            CorePlugin::default(),
            WorldPlugin,
            ActorPlugin,
            AnimationPlugin,
            InputPlugin,
            DialoguePlugin,
            UiPlugin,
        ))
        .run();
}
