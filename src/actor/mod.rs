//! Actors: one entity record for the player, the side character, and the
//! companion, with behaviour selected by capability flags.
pub mod components;
pub mod config;
pub mod movement;
pub mod plugin;
pub mod proximity;
pub mod systems;

pub use plugin::ActorPlugin;
