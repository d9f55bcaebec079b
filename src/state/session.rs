use serde::{Deserialize, Serialize};
use crate::review::quiz::{Quiz, QuizQuestion};

/// Per-learner review conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizSession {
    /// No quiz open; plain text is not treated as an answer.
    #[default]
    Idle,
    /// Waiting for the answer to `quiz.questions[index]`.
    AwaitingAnswer {
        quiz: Quiz,
        index: usize,
        correct: usize,
        /// Program position the quiz was started in, for the completion record.
        week: u32,
        day: u32,
    },
}

/// What happened after an answer was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStep {
    Next(QuizSession),
    Finished { correct: usize, total: usize, week: u32, day: u32 },
}

impl QuizSession {
    pub fn start(quiz: Quiz, week: u32, day: u32) -> Self {
        if quiz.is_empty() {
            return QuizSession::Idle;
        }
        QuizSession::AwaitingAnswer { quiz, index: 0, correct: 0, week, day }
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self {
            QuizSession::Idle => None,
            QuizSession::AwaitingAnswer { quiz, index, .. } => quiz.questions.get(*index),
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, QuizSession::Idle)
    }

    /// Advance past the current question.
    pub fn advance(self, was_correct: bool) -> SessionStep {
        match self {
            QuizSession::Idle => SessionStep::Next(QuizSession::Idle),
            QuizSession::AwaitingAnswer { quiz, index, correct, week, day } => {
                let correct = correct + usize::from(was_correct);
                let index = index + 1;
                if index >= quiz.len() {
                    SessionStep::Finished { correct, total: quiz.len(), week, day }
                } else {
                    SessionStep::Next(QuizSession::AwaitingAnswer { quiz, index, correct, week, day })
                }
            }
        }
    }

    /// Position as (index, total) for rendering.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            QuizSession::Idle => None,
            QuizSession::AwaitingAnswer { quiz, index, .. } => Some((*index, quiz.len())),
        }
    }
}
