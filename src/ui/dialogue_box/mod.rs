// src/ui/dialogue_box/mod.rs
//
// Dialog box showing the current prompt or feedback, faded by session alpha.

pub mod components;
pub mod systems;
