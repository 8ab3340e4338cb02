//! Systems for the world module.
use bevy::{prelude::*, window::PrimaryWindow};

use crate::world::{
    components::{SceneBackground, SceneCamera},
    config::SceneSettings,
};

const BACKGROUND_Z: f32 = -10.0;

/// Spawns the 2D camera and, if configured, the background sprite.
pub fn spawn_scene(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    settings: Res<SceneSettings>,
) {
    commands.spawn((Camera2d, SceneCamera, Name::new("SceneCamera")));

    let Some(path) = settings.background.as_ref() else {
        info!("No background image configured");
        return;
    };

    commands.spawn((
        Sprite {
            image: asset_server.load(path.clone()),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, BACKGROUND_Z),
        SceneBackground,
        Name::new("SceneBackground"),
    ));
    info!("Background image {} requested", path);
}

/// Stretches the background over the window so resizes keep it full-screen.
pub fn fit_background_to_window(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut backgrounds: Query<&mut Sprite, With<SceneBackground>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let size = window.size();

    for mut sprite in backgrounds.iter_mut() {
        if sprite.custom_size != Some(size) {
            sprite.custom_size = Some(size);
        }
    }
}
