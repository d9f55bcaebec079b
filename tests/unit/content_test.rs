#[cfg(test)]
mod tests {
    use crate::curriculum::FocusCategory;
    use crate::error::GenerationError;
    use crate::generation::content::{
        parse_practice_prompt, parse_quiz, parse_story, parse_word_list, story_word_count, Difficulty,
    };
    use crate::generation::fallback::{fallback_practice_prompt, fallback_words};
    use crate::review::VocabularyItem;
    use chrono::{TimeZone, Utc};

    fn word_json(n: usize) -> String {
        let words: Vec<String> = (0..n)
            .map(|i| format!(r#"{{"word": "palabra{}", "translation": "word {}", "pronunciation": "", "example": ""}}"#, i, i))
            .collect();
        format!(r#"{{"words": [{}]}}"#, words.join(","))
    }

    #[test]
    fn test_word_list_exact_count() {
        assert_eq!(parse_word_list(&word_json(8), 8).unwrap().len(), 8);
        assert_eq!(
            parse_word_list(&word_json(7), 8).unwrap_err(),
            GenerationError::CountMismatch { expected: 8, actual: 7 }
        );
    }

    #[test]
    fn test_word_list_duplicates_count_once() {
        let raw = r#"{"words": [
            {"word": "Hola", "translation": "hello"},
            {"word": "hola", "translation": "hi"}
        ]}"#;
        assert_eq!(
            parse_word_list(raw, 2).unwrap_err(),
            GenerationError::CountMismatch { expected: 2, actual: 1 }
        );
    }

    #[test]
    fn test_word_list_in_code_fence() {
        let raw = format!("Sure!\n```json\n{}\n```", word_json(3));
        assert_eq!(parse_word_list(&raw, 3).unwrap()[2].word, "palabra2");
    }

    #[test]
    fn test_short_story_rejected() {
        let raw = r#"{"title": "T", "text": "Demasiado corto."}"#;
        assert!(matches!(parse_story(raw), Err(GenerationError::Malformed(_))));
    }

    #[test]
    fn test_practice_prompt_shape() {
        assert!(parse_practice_prompt("Write.").is_err());
        assert!(parse_practice_prompt(r#"{"prompt": "write four sentences about food"}"#).is_err());
        let ok = parse_practice_prompt("Write four sentences about your favourite food.").unwrap();
        assert!(ok.starts_with("Write four"));
    }

    #[test]
    fn test_quiz_questions_map_to_requested_words() {
        let at = Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap();
        let items = vec![VocabularyItem::new(2, "bread", "pan", "", "", at)];
        let ok = r#"{"questions": [{"word": "pan", "question": "How do you say bread?", "answer": "pan"}]}"#;
        let quiz = parse_quiz(ok, &items).unwrap();
        assert_eq!(quiz.questions[0].week, 2);

        let wrong = r#"{"questions": [{"word": "leche", "question": "Milk?", "answer": "leche"}]}"#;
        assert!(parse_quiz(wrong, &items).is_err());
    }

    #[test]
    fn test_difficulty_and_story_length_scale_by_week() {
        assert_eq!(Difficulty::for_week(1), Difficulty::for_week(4));
        assert_ne!(Difficulty::for_week(4), Difficulty::for_week(5));
        assert_eq!(story_word_count(1), 100);
        assert!(story_word_count(12) > story_word_count(6));
    }

    #[test]
    fn test_fallback_words_fill_the_quota() {
        let at = Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap();
        let day_one = fallback_words(1, 10, &[], at);
        assert_eq!(day_one.len(), 10);
        assert!(day_one.iter().all(|w| w.week == 1 && w.mastery_level == 1));

        let day_two = fallback_words(1, 8, &day_one, at);
        assert_eq!(day_two.len(), 8);
        assert!(day_two.iter().all(|w| !day_one.iter().any(|k| k.same_word(w))));
    }

    #[test]
    fn test_fallback_covers_a_whole_week_of_outages() {
        let at = Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap();
        let mut known: Vec<VocabularyItem> = Vec::new();
        for quota in [10, 8, 8, 8, 8] {
            let words = fallback_words(3, quota, &known, at);
            assert_eq!(words.len(), quota as usize);
            known.extend(words);
        }
        assert_eq!(known.len(), 42);

        // The week's pool is used up; the next weeks' pools take over.
        let extra = fallback_words(3, 8, &known, at);
        assert_eq!(extra.len(), 8);
        assert!(extra.iter().all(|w| w.week == 3));
        assert!(extra.iter().all(|w| !known.iter().any(|k| k.same_word(w))));
    }

    #[test]
    fn test_fallback_examples_use_their_word() {
        let at = Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap();
        for week in 1..=12 {
            for word in fallback_words(week, 42, &[], at) {
                assert!(
                    word.example.to_lowercase().contains(&word.target_term.to_lowercase()),
                    "{} / {}",
                    word.target_term,
                    word.example
                );
            }
        }
    }

    #[test]
    fn test_fallback_practice_prompt_mentions_theme() {
        let text = fallback_practice_prompt(FocusCategory::Practice, "Food & Dining");
        assert!(text.contains("Food & Dining"));
    }
}
