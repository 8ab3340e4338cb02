// src/ui/answer_field/mod.rs
//
// Text field floating above the player's head while a question is open.

pub mod components;
pub mod systems;
