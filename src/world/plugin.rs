//! WorldPlugin sets up the camera, clear colour, and window-filling background.
use bevy::prelude::*;

use crate::{
    core::plugin::SceneSet,
    world::{
        config::SceneSettings,
        systems::{fit_background_to_window, spawn_scene},
    },
};

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        let settings = SceneSettings::load_or_default();
        info!(
            "Scene configured with background: {}",
            settings.background.as_deref().unwrap_or("none")
        );

        app.insert_resource(ClearColor(settings.clear_color))
            .insert_resource(settings)
            .add_systems(Startup, spawn_scene)
            .add_systems(Update, fit_background_to_window.in_set(SceneSet::Present));
    }
}
