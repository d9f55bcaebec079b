#[cfg(test)]
mod tests {
    use crate::review::quiz::{build_review_quiz, grade_answer, QuizStyle};
    use crate::review::VocabularyItem;
    use chrono::{TimeZone, Utc};

    fn items() -> Vec<VocabularyItem> {
        let at = Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap();
        vec![
            VocabularyItem::new(1, "hello", "hola", "OH-lah", "Hola, ¿qué tal?", at),
            VocabularyItem::new(1, "friend", "amigo", "ah-MEE-goh", "Mi amigo es alto.", at),
            VocabularyItem::new(1, "thank you", "gracias", "", "", at),
            VocabularyItem::new(2, "house", "casa", "", "La casa es grande.", at),
        ]
    }

    #[test]
    fn test_styles_rotate() {
        let quiz = build_review_quiz(&items());
        let styles: Vec<QuizStyle> = quiz.questions.iter().map(|q| q.style).collect();
        assert_eq!(
            styles,
            vec![QuizStyle::Production, QuizStyle::Cloze, QuizStyle::Recognition, QuizStyle::Production]
        );
    }

    #[test]
    fn test_cloze_blanks_the_word() {
        let quiz = build_review_quiz(&items());
        let cloze = &quiz.questions[1];
        assert!(cloze.prompt.contains("Mi ___ es alto."));
        assert_eq!(cloze.expected_answer, "amigo");
    }

    #[test]
    fn test_recognition_expects_meaning() {
        let quiz = build_review_quiz(&items());
        assert_eq!(quiz.questions[2].expected_answer, "thank you");
        assert_eq!(quiz.questions[3].week, 2);
        assert_eq!(quiz.questions[3].target_term, "casa");
    }

    #[test]
    fn test_grading_is_lenient() {
        assert!(grade_answer("adiós", "Adios"));
        assert!(grade_answer("la casa", "casa"));
        assert!(grade_answer("thank you / thanks", "thanks!"));
        assert!(grade_answer("hola", "  hola  "));
        assert!(!grade_answer("hola", "adiós"));
        assert!(!grade_answer("hola", ""));
    }

    #[test]
    fn test_empty_quiz() {
        assert!(build_review_quiz(&[]).is_empty());
    }
}
