//! World module housing the 2D camera and the full-window background.
pub mod components;
pub mod config;
pub mod plugin;
pub mod systems;

pub use plugin::WorldPlugin;
