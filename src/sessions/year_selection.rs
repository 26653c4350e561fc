//! Year group choice for the start screen

use crate::vocabulary::{VocabularyRepository, YearGroup};

pub struct YearSelection {
    years: Vec<YearGroup>,
}

impl YearSelection {
    pub fn new(repository: &dyn VocabularyRepository) -> Self {
        Self {
            years: repository.years(),
        }
    }

    pub fn years(&self) -> &[YearGroup] {
        &self.years
    }
}
