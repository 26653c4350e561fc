//! Mastery tracking per year group

pub mod storage;

pub use storage::{JsonProgressStore, MemoryProgressStore, ProgressError, ProgressStore};
