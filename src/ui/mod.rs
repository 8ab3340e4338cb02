// src/ui/mod.rs
//
// Screen-space UI for the quiz: the dialog box at the top of the window and the
// answer field that follows the player.

pub mod answer_field;
pub mod dialogue_box;
pub mod plugin;

pub use plugin::UiPlugin;
