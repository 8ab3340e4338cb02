//! Components used by the world module.
use bevy::prelude::*;

/// Marker component for the scene camera. Centred on the scene origin so the
/// player starts in the middle of the window.
#[derive(Component, Default)]
pub struct SceneCamera;

/// Marker component for the background sprite stretched over the window.
#[derive(Component, Default)]
pub struct SceneBackground;
