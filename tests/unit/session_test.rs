#[cfg(test)]
mod tests {
    use crate::review::quiz::build_review_quiz;
    use crate::review::VocabularyItem;
    use crate::state::session::{QuizSession, SessionStep};
    use chrono::{TimeZone, Utc};

    fn two_question_session() -> QuizSession {
        let at = Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap();
        let items = vec![
            VocabularyItem::new(1, "hello", "hola", "", "", at),
            VocabularyItem::new(1, "water", "agua", "", "", at),
        ];
        QuizSession::start(build_review_quiz(&items), 1, 3)
    }

    #[test]
    fn test_empty_quiz_stays_idle() {
        let session = QuizSession::start(Default::default(), 1, 1);
        assert_eq!(session, QuizSession::Idle);
        assert!(session.current_question().is_none());
    }

    #[test]
    fn test_session_walks_questions_and_finishes() {
        let session = two_question_session();
        assert!(session.is_active());
        assert_eq!(session.position(), Some((0, 2)));
        assert_eq!(session.current_question().unwrap().target_term, "hola");

        let session = match session.advance(true) {
            SessionStep::Next(next) => next,
            other => panic!("expected next question, got {:?}", other),
        };
        assert_eq!(session.position(), Some((1, 2)));
        assert_eq!(session.current_question().unwrap().target_term, "agua");

        assert_eq!(
            session.advance(false),
            SessionStep::Finished { correct: 1, total: 2, week: 1, day: 3 }
        );
    }

    #[test]
    fn test_idle_advance_is_noop() {
        assert_eq!(QuizSession::Idle.advance(true), SessionStep::Next(QuizSession::Idle));
    }
}
