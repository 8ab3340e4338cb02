//! Frame-counted sprite sheet animation shared by every animated actor.
pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::AnimationPlugin;
