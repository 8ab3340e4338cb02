//! Dialogue module hosting the quiz session state machine and its frame systems.
pub mod config;
pub mod errors;
pub mod events;
pub mod plugin;
pub mod schedule;
pub mod session;
pub mod systems;
pub mod types;

pub use plugin::DialoguePlugin;
