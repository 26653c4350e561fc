use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use wordwizards_lib::config::AppConfig;
use wordwizards_lib::progress::JsonProgressStore;
use wordwizards_lib::speech::LogSpeech;
use wordwizards_lib::vocabulary::LocalJsonRepository;

/// Shared application state for CLI commands
pub struct App {
    pub repository: Arc<LocalJsonRepository>,
    pub progress: Arc<JsonProgressStore>,
    pub speech: LogSpeech,
    seed: Option<u64>,
}

impl App {
    /// Load config, then apply command-line overrides
    pub fn new(
        config_path: Option<&Path>,
        content_dir: Option<PathBuf>,
        data_dir: Option<PathBuf>,
        seed: Option<u64>,
    ) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => path.to_path_buf(),
            None => AppConfig::default_path().context("Failed to locate config directory")?,
        };
        let mut config = AppConfig::load(&config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;

        if let Some(dir) = content_dir {
            config.content_dir = dir;
        }
        if let Some(dir) = data_dir {
            config.data_dir = dir;
        }

        let repository = LocalJsonRepository::new(config.content_dir.clone());
        let progress = JsonProgressStore::open(config.data_dir.clone())
            .with_context(|| format!("Failed to open progress in {}", config.data_dir.display()))?;
        let speech = LogSpeech::new(config.speech_language.clone());

        log::debug!(
            "Content from {}, progress in {}",
            config.content_dir.display(),
            config.data_dir.display()
        );

        Ok(Self {
            repository: Arc::new(repository),
            progress: Arc::new(progress),
            speech,
            seed,
        })
    }

    /// Random source for a session, seeded when `--seed` was given
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Print a prompt and read one trimmed line; `None` at end of input
pub fn read_answer(prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Parse a 1-based option number into an index
pub fn parse_choice(input: &str, option_count: usize) -> Option<usize> {
    let number: usize = input.parse().ok()?;
    if number == 0 || number > option_count {
        return None;
    }
    Some(number - 1)
}
