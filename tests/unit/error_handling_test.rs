#[cfg(test)]
mod tests {
    use crate::error::{BotError, CurriculumError, GenerationError};

    #[test]
    fn test_error_creation() {
        let error = BotError::new("Test error", "test_stage");
        assert_eq!(error.message, "Test error");
        assert_eq!(error.stage, "test_stage");
        assert!(error.learner.is_none());
    }

    #[test]
    fn test_error_with_context() {
        let error = BotError::new("Test error", "test_stage")
            .with_context("Additional context");
        assert_eq!(error.context.as_deref(), Some("Additional context"));
    }

    #[test]
    fn test_error_with_learner() {
        let error = BotError::new("Test error", "broadcast")
            .with_learner("12345");
        assert_eq!(error.learner.as_deref(), Some("12345"));
    }

    #[test]
    fn test_error_display() {
        let error = BotError::new("Test error", "test_stage")
            .with_learner("42")
            .with_context("ctx");
        let display = format!("{}", error);
        assert!(display.contains("test_stage"));
        assert!(display.contains("Test error"));
        assert!(display.contains("learner: 42"));
        assert!(display.contains("ctx"));
    }

    #[test]
    fn test_curriculum_error_converts() {
        let error: BotError = CurriculumError::EntryNotFound { week: 13, day: 1 }.into();
        assert_eq!(error.stage, "curriculum");
        assert!(error.message.contains("week 13"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: BotError = io.into();
        assert!(error.message.contains("missing"));
    }

    #[test]
    fn test_generation_error_kinds() {
        assert_eq!(GenerationError::CircuitOpen.kind(), "circuit_open");
        assert_eq!(GenerationError::Timeout(60).kind(), "timeout");
        assert_eq!(
            GenerationError::CountMismatch { expected: 8, actual: 5 }.to_string(),
            "expected 8 items, got 5"
        );
    }
}
