//! WordWizards: year-grouped vocabulary practice
//!
//! Content comes from a [`vocabulary::VocabularyRepository`], progress lives in
//! a [`progress::ProgressStore`], and the [`sessions`] drive flashcards,
//! quizzes and sentence practice on top of the [`questions`] generators.

pub mod config;
pub mod progress;
pub mod questions;
pub mod sessions;
pub mod speech;
pub mod vocabulary;
