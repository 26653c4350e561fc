//! Data models for generated questions

use uuid::Uuid;

use crate::vocabulary::VocabularyItem;

/// Placeholder standing in for the target word inside a sentence template
pub const WORD_PLACEHOLDER: &str = "{word}";

/// Visible blank shown to the learner in place of the word
pub const BLANK_MARKER: &str = "_____";

/// What a quiz question asks about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuestionKind {
    /// Prompt is the word, answer is its meaning
    #[default]
    Meaning,
}

/// A multiple-choice question built from a mastered word
#[derive(Debug, Clone, PartialEq)]
pub struct QuizQuestion {
    pub id: Uuid,
    pub item: VocabularyItem,
    /// Between 2 and 4 options, exactly one of them correct
    pub options: Vec<String>,
    pub correct_index: usize,
    pub kind: QuestionKind,
}

impl QuizQuestion {
    pub fn prompt(&self) -> &str {
        match self.kind {
            QuestionKind::Meaning => &self.item.word,
        }
    }

    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }

    pub fn is_correct(&self, option_index: usize) -> bool {
        option_index == self.correct_index
    }
}

/// A fill-in-the-blank question built from an example sentence
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceQuestion {
    pub id: Uuid,
    /// Example sentence with the word replaced by [`WORD_PLACEHOLDER`]
    pub sentence_template: String,
    pub correct_word: String,
    /// Always four options
    pub options: Vec<String>,
}

impl SentenceQuestion {
    /// The sentence as shown to the learner, with a visible blank
    pub fn display_sentence(&self) -> String {
        self.fill(BLANK_MARKER)
    }

    /// The sentence with `word` written into the blank
    pub fn fill(&self, word: &str) -> String {
        self.sentence_template.replace(WORD_PLACEHOLDER, word)
    }

    pub fn is_correct(&self, option: &str) -> bool {
        option == self.correct_word
    }

    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.correct_word)
    }
}
