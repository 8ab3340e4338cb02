//! Quiz content: the immutable question bank, its CSV loader, and the draw RNG.
pub mod bank;
pub mod errors;
pub mod rng;

pub use bank::{Question, QuestionBank};
pub use rng::QuizRng;
