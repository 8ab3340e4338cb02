//! Core module exposing the simulation clock, frame ordering, and config loading.
pub mod config;
pub mod plugin;

pub use plugin::CorePlugin;
