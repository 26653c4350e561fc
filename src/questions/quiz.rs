//! Multiple-choice "what does this word mean?" questions

use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use super::models::{QuestionKind, QuizQuestion};
use super::MAX_DISTRACTORS;
use crate::vocabulary::VocabularyItem;

/// Build one meaning question per word in the pool
///
/// Question order is the pool shuffled once. Each question's distractors are
/// the meanings of up to three other words, with the right meaning inserted at
/// a random position. Pools with fewer than two words give no questions.
pub fn make_quiz_questions<R: Rng + ?Sized>(
    items: &[VocabularyItem],
    rng: &mut R,
) -> Vec<QuizQuestion> {
    if items.len() < 2 {
        return Vec::new();
    }

    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);

    let mut questions = Vec::with_capacity(shuffled.len());
    for item in &shuffled {
        let mut distractors: Vec<String> = shuffled
            .iter()
            .filter(|other| other.id != item.id)
            .map(|other| other.meaning.clone())
            .collect();
        distractors.shuffle(rng);
        distractors.truncate(MAX_DISTRACTORS);

        let correct_index = rng.gen_range(0..=distractors.len());
        let mut options = distractors;
        options.insert(correct_index, item.meaning.clone());

        questions.push(QuizQuestion {
            id: Uuid::new_v4(),
            item: item.clone(),
            options,
            correct_index,
            kind: QuestionKind::Meaning,
        });
    }

    log::debug!("Generated {} quiz questions", questions.len());
    questions
}
