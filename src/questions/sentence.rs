//! Fill-in-the-blank questions from example sentences

use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use super::models::{SentenceQuestion, WORD_PLACEHOLDER};
use super::MAX_DISTRACTORS;
use crate::vocabulary::VocabularyItem;

/// Build one fill-in-the-blank question per word that has an example sentence
///
/// Only words with at least one example sentence take part, and at least two
/// of them are needed. The eligible pool is shuffled once; that order is both
/// the distractor pool and the question order. A word is skipped when fewer
/// than three other words are available as distractors, so every question
/// has exactly four options.
pub fn make_sentence_questions<R: Rng + ?Sized>(
    items: &[VocabularyItem],
    rng: &mut R,
) -> Vec<SentenceQuestion> {
    let mut candidates: Vec<&VocabularyItem> = items
        .iter()
        .filter(|item| !item.example_sentences.is_empty())
        .collect();
    if candidates.len() < 2 {
        return Vec::new();
    }

    candidates.shuffle(rng);

    let mut questions = Vec::with_capacity(candidates.len());
    for item in &candidates {
        let Some(sentence) = item.first_example() else {
            continue;
        };
        let sentence_template = sentence.replace(item.word.as_str(), WORD_PLACEHOLDER);

        let mut distractors: Vec<String> = candidates
            .iter()
            .filter(|other| other.id != item.id)
            .map(|other| other.word.clone())
            .collect();
        distractors.shuffle(rng);
        distractors.truncate(MAX_DISTRACTORS);

        if distractors.len() < MAX_DISTRACTORS {
            log::debug!(
                "Skipping sentence for '{}': only {} distractors available",
                item.word,
                distractors.len()
            );
            continue;
        }

        let correct_index = rng.gen_range(0..=distractors.len());
        let mut options = distractors;
        options.insert(correct_index, item.word.clone());

        questions.push(SentenceQuestion {
            id: Uuid::new_v4(),
            sentence_template,
            correct_word: item.word.clone(),
            options,
        });
    }

    log::debug!(
        "Generated {} sentence questions from {} candidates",
        questions.len(),
        candidates.len()
    );
    questions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::BLANK_MARKER;
    use crate::vocabulary::YearGroup;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn word(word: &str, sentence: Option<&str>) -> VocabularyItem {
        let item = VocabularyItem::new(YearGroup::Year4, word.to_string(), format!("meaning of {}", word));
        match sentence {
            Some(s) => item.with_examples(vec![s.to_string(), "A second sentence.".to_string()]),
            None => item,
        }
    }

    fn sentence_pool() -> Vec<VocabularyItem> {
        vec![
            word("bright", Some("The bright sun.")),
            word("gentle", Some("The gentle breeze cooled us.")),
            word("ancient", Some("We visited an ancient castle.")),
            word("curious", Some("The curious cat looked inside.")),
            word("swift", Some("A swift runner won the race.")),
        ]
    }

    #[test]
    fn test_too_few_candidates() {
        let mut rng = StdRng::seed_from_u64(3);
        let items = vec![word("bright", Some("The bright sun.")), word("dull", None)];

        assert!(make_sentence_questions(&items, &mut rng).is_empty());
        assert!(make_sentence_questions(&[], &mut rng).is_empty());
    }

    #[test]
    fn test_four_options_with_one_correct() {
        for seed in 0..20 {
            let items = sentence_pool();
            let mut rng = StdRng::seed_from_u64(seed);
            let questions = make_sentence_questions(&items, &mut rng);

            assert_eq!(questions.len(), items.len());
            for question in &questions {
                assert_eq!(question.options.len(), 4);
                let matching = question
                    .options
                    .iter()
                    .filter(|o| **o == question.correct_word)
                    .count();
                assert_eq!(matching, 1);
            }
        }
    }

    #[test]
    fn test_template_round_trip() {
        let items = sentence_pool();
        let mut rng = StdRng::seed_from_u64(11);

        for question in make_sentence_questions(&items, &mut rng) {
            let source = items
                .iter()
                .find(|i| i.word == question.correct_word)
                .unwrap();
            assert_eq!(question.fill(&question.correct_word), source.example_sentences[0]);
            assert!(question.display_sentence().contains(BLANK_MARKER));
            assert!(!question.display_sentence().contains(&question.correct_word));
        }
    }

    #[test]
    fn test_bright_sun() {
        let items = sentence_pool();
        let mut rng = StdRng::seed_from_u64(5);

        let questions = make_sentence_questions(&items, &mut rng);
        let question = questions.iter().find(|q| q.correct_word == "bright").unwrap();

        assert_eq!(question.sentence_template, "The {word} sun.");
        assert_eq!(question.display_sentence(), "The _____ sun.");
        assert_eq!(question.fill("bright"), "The bright sun.");
    }

    #[test]
    fn test_words_without_enough_distractors_are_skipped() {
        // Three eligible words leave only two distractors each
        let items = vec![
            word("bright", Some("The bright sun.")),
            word("gentle", Some("The gentle breeze.")),
            word("ancient", Some("An ancient castle.")),
            word("tiny", None),
            word("huge", None),
        ];

        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert!(make_sentence_questions(&items, &mut rng).is_empty());
        }
    }

    #[test]
    fn test_words_without_sentences_are_not_distractors() {
        let mut items = sentence_pool();
        items.push(word("zzz", None));

        let mut rng = StdRng::seed_from_u64(9);
        for question in make_sentence_questions(&items, &mut rng) {
            assert!(!question.options.contains(&"zzz".to_string()));
            assert_ne!(question.correct_word, "zzz");
        }
    }

    #[test]
    fn test_question_order_follows_one_shuffle() {
        let items = sentence_pool();

        let first = make_sentence_questions(&items, &mut StdRng::seed_from_u64(21));
        let second = make_sentence_questions(&items, &mut StdRng::seed_from_u64(21));

        let words = |qs: &[SentenceQuestion]| -> Vec<String> {
            qs.iter().map(|q| q.correct_word.clone()).collect()
        };
        assert_eq!(words(&first), words(&second));
        assert_eq!(first[0].options, second[0].options);
    }
}
