//! Vocabulary content for WordWizards
//!
//! This module provides:
//! - Year groups (the closed set of school years with content)
//! - Vocabulary items (word, meaning, antonyms, example sentences)
//! - Content providers (bundled JSON files, in-memory lists)

pub mod models;
pub mod repository;

pub use models::*;
pub use repository::{ContentError, InMemoryRepository, LocalJsonRepository, VocabularyRepository};
