//! Data models for vocabulary content

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A school year with its own word list and progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum YearGroup {
    #[serde(rename = "Year 3")]
    Year3,
    #[serde(rename = "Year 4")]
    Year4,
    #[serde(rename = "Year 5")]
    Year5,
    #[serde(rename = "Year 6")]
    Year6,
}

impl YearGroup {
    /// All supported year groups, in display order
    pub const ALL: [YearGroup; 4] = [Self::Year3, Self::Year4, Self::Year5, Self::Year6];

    /// Stable short code used as a storage key (e.g. "Y3")
    pub fn short_code(&self) -> &'static str {
        match self {
            Self::Year3 => "Y3",
            Self::Year4 => "Y4",
            Self::Year5 => "Y5",
            Self::Year6 => "Y6",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Year3 => "Year 3",
            Self::Year4 => "Year 4",
            Self::Year5 => "Year 5",
            Self::Year6 => "Year 6",
        }
    }

    /// Name of the bundled content file, without extension
    pub fn resource_name(&self) -> &'static str {
        match self {
            Self::Year3 => "Year3",
            Self::Year4 => "Year4",
            Self::Year5 => "Year5",
            Self::Year6 => "Year6",
        }
    }
}

impl fmt::Display for YearGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned when a string names no known year group
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown year group: {0}")]
pub struct UnknownYearGroup(pub String);

impl FromStr for YearGroup {
    type Err = UnknownYearGroup;

    /// Accepts the short code ("Y3"), display name ("Year 3") or resource name ("Year3")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|year| {
                year.short_code().to_lowercase() == needle
                    || year.display_name().to_lowercase() == needle
                    || year.resource_name().to_lowercase() == needle
            })
            .ok_or_else(|| UnknownYearGroup(s.to_string()))
    }
}

/// A single word entry
///
/// Equality and hashing use only the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyItem {
    pub id: Uuid,
    pub year: YearGroup,
    pub word: String,
    pub meaning: String,
    #[serde(default)]
    pub antonyms: Vec<String>,
    #[serde(default)]
    pub example_sentences: Vec<String>,
}

impl VocabularyItem {
    pub fn new(year: YearGroup, word: String, meaning: String) -> Self {
        Self::with_id(Uuid::new_v4(), year, word, meaning)
    }

    pub fn with_id(id: Uuid, year: YearGroup, word: String, meaning: String) -> Self {
        Self {
            id,
            year,
            word,
            meaning,
            antonyms: Vec::new(),
            example_sentences: Vec::new(),
        }
    }

    pub fn with_antonyms(mut self, antonyms: Vec<String>) -> Self {
        self.antonyms = antonyms;
        self
    }

    pub fn with_examples(mut self, example_sentences: Vec<String>) -> Self {
        self.example_sentences = example_sentences;
        self
    }

    /// The first example sentence, if the item has any
    pub fn first_example(&self) -> Option<&str> {
        self.example_sentences.first().map(String::as_str)
    }

    /// The first two antonyms, only when both exist
    pub fn antonym_pair(&self) -> Option<(&str, &str)> {
        match self.antonyms.as_slice() {
            [first, second, ..] => Some((first.as_str(), second.as_str())),
            _ => None,
        }
    }
}

impl PartialEq for VocabularyItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for VocabularyItem {}

impl Hash for VocabularyItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
