//! Content providers for vocabulary
//!
//! Bundled content layout:
//! ```text
//! content/
//! ├── Year3.json   # Array of raw vocabulary items
//! ├── Year4.json
//! ├── Year5.json
//! └── Year6.json
//! ```

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use super::models::{VocabularyItem, YearGroup};

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Missing resource {0}")]
    MissingResource(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ContentError>;

/// Source of year groups and their word lists
#[async_trait]
pub trait VocabularyRepository: Send + Sync {
    /// Year groups with content, in display order
    fn years(&self) -> Vec<YearGroup>;

    /// All words for a year group, in authoring order
    async fn words(&self, year: YearGroup) -> Result<Vec<VocabularyItem>>;
}

/// Loads vocabulary from bundled JSON files, one per year group
pub struct LocalJsonRepository {
    content_dir: PathBuf,
}

impl LocalJsonRepository {
    pub fn new(content_dir: PathBuf) -> Self {
        Self { content_dir }
    }

    fn resource_file(year: YearGroup) -> String {
        format!("{}.json", year.resource_name())
    }

    /// Get the path of the content file for a year group
    fn resource_path(&self, year: YearGroup) -> PathBuf {
        self.content_dir.join(Self::resource_file(year))
    }
}

#[async_trait]
impl VocabularyRepository for LocalJsonRepository {
    fn years(&self) -> Vec<YearGroup> {
        YearGroup::ALL.to_vec()
    }

    async fn words(&self, year: YearGroup) -> Result<Vec<VocabularyItem>> {
        let path = self.resource_path(year);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ContentError::MissingResource(Self::resource_file(year)));
            }
            Err(e) => return Err(e.into()),
        };

        let raw_items: Vec<RawVocabularyItem> = serde_json::from_str(&content)?;
        log::debug!(
            "Loaded {} words for {} from {}",
            raw_items.len(),
            year,
            path.display()
        );
        Ok(raw_items.into_iter().map(|raw| raw.into_item(year)).collect())
    }
}

/// Item shape inside the bundled JSON files
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawVocabularyItem {
    id: Option<Uuid>,
    word: String,
    meaning: String,
    #[serde(default)]
    antonyms: Vec<String>,
    #[serde(default)]
    example_sentences: Vec<String>,
}

impl RawVocabularyItem {
    /// Items without a stored id get a fresh one, so their progress won't survive a reload
    fn into_item(self, year: YearGroup) -> VocabularyItem {
        VocabularyItem {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            year,
            word: self.word,
            meaning: self.meaning,
            antonyms: self.antonyms,
            example_sentences: self.example_sentences,
        }
    }
}

/// Holds word lists in memory; years without a list report a missing resource
#[derive(Default)]
pub struct InMemoryRepository {
    words: HashMap<YearGroup, Vec<VocabularyItem>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_words(mut self, year: YearGroup, words: Vec<VocabularyItem>) -> Self {
        self.words.insert(year, words);
        self
    }
}

#[async_trait]
impl VocabularyRepository for InMemoryRepository {
    fn years(&self) -> Vec<YearGroup> {
        YearGroup::ALL.to_vec()
    }

    async fn words(&self, year: YearGroup) -> Result<Vec<VocabularyItem>> {
        self.words
            .get(&year)
            .cloned()
            .ok_or_else(|| ContentError::MissingResource(format!("{}.json", year.resource_name())))
    }
}
