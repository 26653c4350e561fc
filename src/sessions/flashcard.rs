//! Flashcard sessions, five cards at a time

use std::sync::Arc;

use crate::progress::ProgressStore;
use crate::vocabulary::{VocabularyItem, VocabularyRepository, YearGroup};

use super::EmptyState;

/// Number of cards shown together
pub const BATCH_SIZE: usize = 5;

/// Moving window of flashcards over a year's words
pub struct FlashcardSession {
    year: YearGroup,
    repository: Arc<dyn VocabularyRepository>,
    progress: Arc<dyn ProgressStore>,
    cards: Vec<VocabularyItem>,
    batch_index: usize,
    is_loading: bool,
    has_loaded: bool,
    error_message: Option<String>,
}

impl FlashcardSession {
    pub fn new(
        year: YearGroup,
        repository: Arc<dyn VocabularyRepository>,
        progress: Arc<dyn ProgressStore>,
    ) -> Self {
        Self {
            year,
            repository,
            progress,
            cards: Vec::new(),
            batch_index: 0,
            is_loading: false,
            has_loaded: false,
            error_message: None,
        }
    }

    pub fn year(&self) -> YearGroup {
        self.year
    }

    /// Load every word for the year and rewind to the first batch
    ///
    /// A failed load leaves no cards and records a message for the learner.
    pub async fn load(&mut self) {
        self.is_loading = true;
        self.error_message = None;

        match self.repository.words(self.year).await {
            Ok(words) => {
                log::info!("Flashcards: loaded {} words for {}", words.len(), self.year);
                self.cards = words;
            }
            Err(e) => {
                log::warn!("Flashcards: failed to load words for {}: {}", self.year, e);
                self.cards.clear();
                self.error_message = Some(e.to_string());
            }
        }
        self.batch_index = 0;

        self.has_loaded = true;
        self.is_loading = false;
    }

    pub fn cards(&self) -> &[VocabularyItem] {
        &self.cards
    }

    pub fn batch_index(&self) -> usize {
        self.batch_index
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Cards in the current batch; empty once past the end
    pub fn current_batch(&self) -> &[VocabularyItem] {
        let start = self.batch_index * BATCH_SIZE;
        let end = (start + BATCH_SIZE).min(self.cards.len());
        if start >= end {
            return &[];
        }
        &self.cards[start..end]
    }

    pub fn has_next_batch(&self) -> bool {
        (self.batch_index + 1) * BATCH_SIZE < self.cards.len()
    }

    /// Move to the next batch; does nothing on the last one
    pub fn advance_batch(&mut self) {
        if !self.has_next_batch() {
            return;
        }
        self.batch_index += 1;
    }

    pub fn mark_memorized(&self, item: &VocabularyItem) {
        self.progress.mark_word_mastered(item.id, self.year);
    }

    pub fn is_memorized(&self, item: &VocabularyItem) -> bool {
        self.progress.mastered_word_ids(self.year).contains(&item.id)
    }

    /// How many cards of the current batch are already mastered
    pub fn memorized_in_batch(&self) -> usize {
        let mastered = self.progress.mastered_word_ids(self.year);
        self.current_batch()
            .iter()
            .filter(|card| mastered.contains(&card.id))
            .count()
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.has_loaded || !self.cards.is_empty() {
            return None;
        }
        if self.error_message.is_some() {
            Some(EmptyState::FetchFailed)
        } else {
            Some(EmptyState::NotEnoughContent)
        }
    }
}
