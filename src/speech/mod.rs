//! Word pronunciation
//!
//! Speech is fire-and-forget: callers never wait for or hear back from it.

/// Speaks a single word aloud
pub trait SpeechService: Send + Sync {
    fn speak(&self, word: &str);
}

/// Records utterances in the log instead of producing audio
pub struct LogSpeech {
    language: String,
}

impl LogSpeech {
    pub fn new(language: String) -> Self {
        Self { language }
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

impl SpeechService for LogSpeech {
    fn speak(&self, word: &str) {
        log::info!("Speaking '{}' ({})", word, self.language);
    }
}
