//! Learning sessions for a single year group
//!
//! This module provides:
//! - Flashcard batches of five cards with "memorized" marking
//! - Multiple-choice quizzes over mastered words
//! - Sentence practice where a wrong answer can be retried
//! - Year group listing for the start screen
//!
//! Every session owns its state exclusively. Mutating calls, including the
//! async `load`, take `&mut self`, so a second load cannot start while one is
//! in flight and stale results never overwrite newer ones.

pub mod flashcard;
pub mod quiz;
pub mod sentence;
pub mod year_selection;

pub use flashcard::{FlashcardSession, BATCH_SIZE};
pub use quiz::QuizSession;
pub use sentence::SentenceSession;
pub use year_selection::YearSelection;

/// Why a loaded session has nothing to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// No words have been marked as mastered yet
    NothingMastered,
    /// Content loaded, but too few words to build anything
    NotEnoughContent,
    /// Content could not be loaded
    FetchFailed,
}

impl EmptyState {
    /// Message suitable for showing to the learner
    pub fn message(&self) -> &'static str {
        match self {
            Self::NothingMastered => "You need to memorize some words first in flashcards.",
            Self::NotEnoughContent => "Practice will appear once more words are available.",
            Self::FetchFailed => "Words could not be loaded. Please try again.",
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::vocabulary::{VocabularyItem, YearGroup};

    /// Words with one example sentence each
    pub fn words(year: YearGroup, count: usize) -> Vec<VocabularyItem> {
        (0..count)
            .map(|i| {
                VocabularyItem::new(year, format!("word{}", i), format!("meaning {}", i))
                    .with_examples(vec![format!("Here is word{} in a sentence.", i)])
            })
            .collect()
    }
}
