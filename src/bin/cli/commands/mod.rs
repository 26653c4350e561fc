pub mod flashcards;
pub mod progress;
pub mod quiz;
pub mod sentences;
pub mod years;
