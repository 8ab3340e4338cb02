//! Keyboard routing: arrow keys drive the held-direction flags, text keys fill
//! the answer field while a question is open.
pub mod answer;
pub mod plugin;
pub mod systems;

pub use plugin::InputPlugin;
