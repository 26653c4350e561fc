//! Multiple-choice quiz over mastered words

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::progress::ProgressStore;
use crate::questions::{make_quiz_questions, QuizQuestion};
use crate::vocabulary::{VocabularyItem, VocabularyRepository, YearGroup};

use super::EmptyState;

/// Quiz state: every answer moves on, right or wrong
pub struct QuizSession {
    year: YearGroup,
    repository: Arc<dyn VocabularyRepository>,
    progress: Arc<dyn ProgressStore>,
    rng: StdRng,
    questions: Vec<QuizQuestion>,
    current_index: usize,
    correct_count: usize,
    is_finished: bool,
    error_message: Option<String>,
    empty_state: Option<EmptyState>,
}

impl QuizSession {
    pub fn new(
        year: YearGroup,
        repository: Arc<dyn VocabularyRepository>,
        progress: Arc<dyn ProgressStore>,
    ) -> Self {
        Self {
            year,
            repository,
            progress,
            rng: StdRng::from_entropy(),
            questions: Vec::new(),
            current_index: 0,
            correct_count: 0,
            is_finished: false,
            error_message: None,
            empty_state: None,
        }
    }

    /// Use a specific random source for question shuffling
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Build a fresh quiz from the year's mastered words
    ///
    /// Content is only fetched when at least one word is mastered.
    pub async fn load(&mut self) {
        self.is_finished = false;
        self.correct_count = 0;
        self.current_index = 0;
        self.error_message = None;
        self.empty_state = None;

        let mastered = self.progress.mastered_word_ids(self.year);
        if mastered.is_empty() {
            log::debug!("Quiz: nothing mastered yet for {}", self.year);
            self.questions.clear();
            self.empty_state = Some(EmptyState::NothingMastered);
            return;
        }

        match self.repository.words(self.year).await {
            Ok(words) => {
                let mastered_words: Vec<VocabularyItem> = words
                    .into_iter()
                    .filter(|word| mastered.contains(&word.id))
                    .collect();
                self.questions = make_quiz_questions(&mastered_words, &mut self.rng);
                log::info!(
                    "Quiz: {} questions from {} mastered words for {}",
                    self.questions.len(),
                    mastered_words.len(),
                    self.year
                );
                if self.questions.is_empty() {
                    self.empty_state = Some(EmptyState::NotEnoughContent);
                }
            }
            Err(e) => {
                log::warn!("Quiz: failed to load words for {}: {}", self.year, e);
                self.questions.clear();
                self.error_message = Some(e.to_string());
                self.empty_state = Some(EmptyState::FetchFailed);
            }
        }
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn is_finished(&self) -> bool {
        self.is_finished
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        self.empty_state
    }

    /// Correct answers out of the number of questions
    pub fn score(&self) -> (usize, usize) {
        (self.correct_count, self.questions.len())
    }

    /// Answer the current question and move on
    ///
    /// Returns whether the answer was right, or `None` when there is nothing
    /// to answer (finished, or no questions).
    pub fn answer(&mut self, option_index: usize) -> Option<bool> {
        if self.is_finished {
            return None;
        }
        let is_correct = self.current_question()?.is_correct(option_index);

        if is_correct {
            self.correct_count += 1;
        }
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
        } else {
            self.is_finished = true;
        }
        Some(is_correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::MemoryProgressStore;
    use crate::sessions::test_support::words;
    use crate::vocabulary::{ContentError, InMemoryRepository};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts fetches so tests can check the repository was left alone
    struct CountingRepository {
        inner: InMemoryRepository,
        fetches: AtomicUsize,
    }

    #[async_trait]
    impl VocabularyRepository for CountingRepository {
        fn years(&self) -> Vec<YearGroup> {
            self.inner.years()
        }

        async fn words(&self, year: YearGroup) -> Result<Vec<VocabularyItem>, ContentError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.inner.words(year).await
        }
    }

    fn create_session(
        items: Vec<VocabularyItem>,
    ) -> (QuizSession, Arc<CountingRepository>, Arc<MemoryProgressStore>) {
        let repository = Arc::new(CountingRepository {
            inner: InMemoryRepository::new().with_words(YearGroup::Year4, items),
            fetches: AtomicUsize::new(0),
        });
        let progress = Arc::new(MemoryProgressStore::new());
        let session = QuizSession::new(YearGroup::Year4, repository.clone(), progress.clone())
            .with_rng(StdRng::seed_from_u64(17));
        (session, repository, progress)
    }

    fn master_all(progress: &MemoryProgressStore, items: &[VocabularyItem]) {
        for item in items {
            progress.mark_word_mastered(item.id, YearGroup::Year4);
        }
    }

    #[tokio::test]
    async fn test_nothing_mastered_skips_fetch() {
        let (mut session, repository, _progress) = create_session(words(YearGroup::Year4, 6));
        session.load().await;

        assert!(session.questions().is_empty());
        assert_eq!(repository.fetches.load(Ordering::SeqCst), 0);
        assert_eq!(session.empty_state(), Some(EmptyState::NothingMastered));
    }

    #[tokio::test]
    async fn test_only_mastered_words_are_asked() {
        let items = words(YearGroup::Year4, 6);
        let (mut session, _repository, progress) = create_session(items.clone());
        master_all(&progress, &items[..3]);

        session.load().await;

        assert_eq!(session.questions().len(), 3);
        for question in session.questions() {
            assert!(items[..3].contains(&question.item));
        }
    }

    #[tokio::test]
    async fn test_single_word_gives_no_quiz() {
        let items = words(YearGroup::Year4, 1);
        let (mut session, _repository, progress) = create_session(items.clone());
        master_all(&progress, &items);

        session.load().await;

        assert!(session.questions().is_empty());
        assert_eq!(session.empty_state(), Some(EmptyState::NotEnoughContent));
        assert_eq!(session.answer(0), None);
    }

    #[tokio::test]
    async fn test_answers_score_and_finish() {
        let items = words(YearGroup::Year4, 4);
        let (mut session, _repository, progress) = create_session(items.clone());
        master_all(&progress, &items);
        session.load().await;
        assert_eq!(session.questions().len(), 4);

        // Right, wrong, right, right
        for step in 0..4 {
            let question = session.current_question().unwrap().clone();
            let choice = if step == 1 {
                (question.correct_index + 1) % question.options.len()
            } else {
                question.correct_index
            };
            assert_eq!(session.answer(choice), Some(step != 1));
        }

        assert!(session.is_finished());
        assert_eq!(session.score(), (3, 4));

        // Further answers change nothing
        assert_eq!(session.answer(0), None);
        assert_eq!(session.correct_count(), 3);
        assert_eq!(session.current_index(), 3);
    }

    #[tokio::test]
    async fn test_reload_resets_score() {
        let items = words(YearGroup::Year4, 3);
        let (mut session, _repository, progress) = create_session(items.clone());
        master_all(&progress, &items);
        session.load().await;

        let correct = session.current_question().unwrap().correct_index;
        session.answer(correct);
        assert_eq!(session.correct_count(), 1);

        session.load().await;
        assert_eq!(session.correct_count(), 0);
        assert_eq!(session.current_index(), 0);
        assert!(!session.is_finished());
    }

    #[tokio::test]
    async fn test_fetch_failure_is_surfaced() {
        let progress = Arc::new(MemoryProgressStore::new());
        progress.mark_word_mastered(uuid::Uuid::new_v4(), YearGroup::Year5);
        let mut session = QuizSession::new(YearGroup::Year5, Arc::new(InMemoryRepository::new()), progress);

        session.load().await;

        assert!(session.questions().is_empty());
        assert_eq!(session.empty_state(), Some(EmptyState::FetchFailed));
        assert!(session.error_message().is_some());
    }
}
