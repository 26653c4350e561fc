//! Question generation for quizzes and sentence practice
//!
//! Generators are pure functions over a word pool and an injected random
//! source, so a seeded RNG gives reproducible output.

pub mod models;
pub mod quiz;
pub mod sentence;

pub use models::*;
pub use quiz::make_quiz_questions;
pub use sentence::make_sentence_questions;

/// Maximum number of wrong options shown alongside the right one
pub const MAX_DISTRACTORS: usize = 3;
