//! Sentence practice: pick the word that fills the blank

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::questions::{make_sentence_questions, SentenceQuestion};
use crate::vocabulary::{VocabularyRepository, YearGroup};

use super::EmptyState;

/// Sentence practice state
///
/// Unlike the quiz, answering never moves on by itself. The caller calls
/// [`SentenceSession::advance`] after a correct answer and lets the learner
/// retry the same question after a wrong one.
pub struct SentenceSession {
    year: YearGroup,
    repository: Arc<dyn VocabularyRepository>,
    rng: StdRng,
    questions: Vec<SentenceQuestion>,
    current_index: usize,
    is_finished: bool,
    attempts: usize,
    last_answer: Option<bool>,
    first_try_correct: usize,
    error_message: Option<String>,
    empty_state: Option<EmptyState>,
}

impl SentenceSession {
    pub fn new(year: YearGroup, repository: Arc<dyn VocabularyRepository>) -> Self {
        Self {
            year,
            repository,
            rng: StdRng::from_entropy(),
            questions: Vec::new(),
            current_index: 0,
            is_finished: false,
            attempts: 0,
            last_answer: None,
            first_try_correct: 0,
            error_message: None,
            empty_state: None,
        }
    }

    /// Use a specific random source for question shuffling
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Build questions from all of the year's words, mastered or not
    pub async fn load(&mut self) {
        self.is_finished = false;
        self.current_index = 0;
        self.attempts = 0;
        self.last_answer = None;
        self.first_try_correct = 0;
        self.error_message = None;
        self.empty_state = None;

        match self.repository.words(self.year).await {
            Ok(words) => {
                self.questions = make_sentence_questions(&words, &mut self.rng);
                log::info!(
                    "Sentences: {} questions from {} words for {}",
                    self.questions.len(),
                    words.len(),
                    self.year
                );
                if self.questions.is_empty() {
                    self.empty_state = Some(EmptyState::NotEnoughContent);
                }
            }
            Err(e) => {
                log::warn!("Sentences: failed to load words for {}: {}", self.year, e);
                self.questions.clear();
                self.error_message = Some(e.to_string());
                self.empty_state = Some(EmptyState::FetchFailed);
            }
        }
    }

    pub fn questions(&self) -> &[SentenceQuestion] {
        &self.questions
    }

    pub fn current_question(&self) -> Option<&SentenceQuestion> {
        self.questions.get(self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_finished(&self) -> bool {
        self.is_finished
    }

    /// Attempts made on the current question
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Outcome of the latest attempt on the current question
    pub fn last_answer(&self) -> Option<bool> {
        self.last_answer
    }

    /// Questions answered correctly on the first attempt
    pub fn first_try_correct(&self) -> usize {
        self.first_try_correct
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        self.empty_state
    }

    pub fn score(&self) -> (usize, usize) {
        (self.first_try_correct, self.questions.len())
    }

    /// Record an attempt on the current question without moving on
    pub fn answer(&mut self, is_correct: bool) {
        if self.is_finished || self.current_question().is_none() {
            return;
        }
        self.attempts += 1;
        if is_correct && self.attempts == 1 {
            self.first_try_correct += 1;
        }
        self.last_answer = Some(is_correct);
    }

    /// Check an option of the current question and record the attempt
    ///
    /// Returns `None` when there is no current question or the index is out of range.
    pub fn answer_option(&mut self, option_index: usize) -> Option<bool> {
        if self.is_finished {
            return None;
        }
        let question = self.current_question()?;
        let option = question.options.get(option_index)?;
        let is_correct = question.is_correct(option);

        self.answer(is_correct);
        Some(is_correct)
    }

    /// Move to the next question, or finish after the last one
    pub fn advance(&mut self) {
        if self.is_finished {
            return;
        }
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
        } else {
            self.is_finished = true;
        }
        self.attempts = 0;
        self.last_answer = None;
    }
}
