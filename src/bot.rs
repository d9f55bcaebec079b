use chrono::{DateTime, NaiveDate, Utc};
use crate::analytics::mastery_summary;
use crate::curriculum::plan::plan_for_progress;
use crate::error::BotError;
use crate::messaging::{format, InboundMessage};
use crate::progress::compute_progress_with;
use crate::review::quiz::{build_review_quiz, grade_answer};
use crate::state::app::AppState;
use crate::state::session::{QuizSession, SessionStep};
use crate::storage::{DailyCompletion, Enrollment};

/// A parsed inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Today,
    Progress,
    Review,
    Skip,
    Help,
    /// `/setstart YYYY-MM-DD [learner]`
    SetStart { date: String, target: Option<String> },
    /// Anything that is not a command: a quiz answer when a quiz is open.
    Text(String),
}

impl Command {
    pub fn parse(text: &str) -> Command {
        let text = text.trim();
        if !text.starts_with('/') {
            return Command::Text(text.to_string());
        }

        let mut parts = text.split_whitespace();
        let head = parts.next().unwrap_or_default();
        // Group chats address commands as /cmd@botname.
        let name = head
            .trim_start_matches('/')
            .split('@')
            .next()
            .unwrap_or_default()
            .to_lowercase();

        match name.as_str() {
            "start" => Command::Start,
            "today" | "lesson" => Command::Today,
            "progress" | "stats" => Command::Progress,
            "review" => Command::Review,
            "skip" | "stop" => Command::Skip,
            "setstart" => Command::SetStart {
                date: parts.next().unwrap_or_default().to_string(),
                target: parts.next().map(str::to_string),
            },
            _ => Command::Help,
        }
    }
}

/// Handle one inbound message and return the replies, in order.
/// Replies go back to the same chat.
pub async fn handle_message(
    state: &AppState,
    message: &InboundMessage,
    now: DateTime<Utc>,
) -> Result<Vec<String>, BotError> {
    let learner_id = message.chat.as_str();
    let command = Command::parse(&message.text);
    tracing::debug!(learner = learner_id, command = ?command, "Inbound message");

    if command == Command::Start {
        return start(state, message, now).await;
    }
    if command == Command::Help {
        return Ok(vec![format::render_help()]);
    }

    let enrollment = match state.storage.get_enrollment(learner_id).await {
        Ok(Some(enrollment)) => enrollment,
        Ok(None) => return Ok(vec![format::render_not_enrolled()]),
        Err(e) => {
            tracing::warn!(learner = learner_id, error = %e, "Enrollment lookup failed");
            return Ok(vec![format::render_not_enrolled()]);
        }
    };

    match command {
        Command::Today => today(state, &enrollment, now),
        Command::Progress => progress(state, &enrollment, now).await,
        Command::Review => review(state, &enrollment, now).await,
        Command::Skip => {
            state.reset_session(learner_id);
            Ok(vec!["Review stopped. Send /review to start again.".to_string()])
        }
        Command::SetStart { date, target } => set_start(state, &enrollment, &date, target, now).await,
        Command::Text(text) => answer(state, &enrollment, &text, now).await,
        Command::Start | Command::Help => Ok(Vec::new()),
    }
}

async fn start(
    state: &AppState,
    message: &InboundMessage,
    now: DateTime<Utc>,
) -> Result<Vec<String>, BotError> {
    let learner_id = message.chat.as_str();
    if let Some(existing) = state.storage.get_enrollment(learner_id).await? {
        let mut replies = vec!["You are already enrolled.".to_string()];
        replies.extend(progress(state, &existing, now).await?);
        return Ok(replies);
    }

    let enrollment = Enrollment::new(learner_id, message.display_name.clone(), now);
    state.storage.save_enrollment(&enrollment).await?;
    tracing::info!(learner = learner_id, "Learner enrolled");

    let mut replies = vec![format::render_welcome(message.display_name.as_deref())];
    replies.extend(today(state, &enrollment, now)?);
    Ok(replies)
}

fn today(state: &AppState, enrollment: &Enrollment, now: DateTime<Utc>) -> Result<Vec<String>, BotError> {
    let progress = compute_progress_with(state.config.course.day_boundary, enrollment.enrolled_at, now);
    if progress.completed {
        return Ok(vec![format::render_completion()]);
    }
    let plan = plan_for_progress(&state.curriculum, &progress)?;
    Ok(vec![format::render_plan(&plan)])
}

async fn progress(
    state: &AppState,
    enrollment: &Enrollment,
    now: DateTime<Utc>,
) -> Result<Vec<String>, BotError> {
    let progress = compute_progress_with(state.config.course.day_boundary, enrollment.enrolled_at, now);
    let words = state.storage.list_all_vocabulary(&enrollment.learner_id).await?;
    let summary = mastery_summary(&words);
    Ok(vec![format::render_progress(&progress, &summary)])
}

async fn review(
    state: &AppState,
    enrollment: &Enrollment,
    now: DateTime<Utc>,
) -> Result<Vec<String>, BotError> {
    let open = state.get_session(&enrollment.learner_id);
    if let (Some(question), Some((index, total))) = (open.current_question(), open.position()) {
        return Ok(vec![
            "You have a quiz open. Answer the current question, or /skip to stop.".to_string(),
            format::render_question(question, index, total),
        ]);
    }

    let progress = compute_progress_with(state.config.course.day_boundary, enrollment.enrolled_at, now);
    let due = state.reviews.select_due(enrollment, progress.week_number, now).await?;
    if due.is_empty() {
        return Ok(vec!["Nothing is due for review right now. 👍".to_string()]);
    }

    let quiz = build_review_quiz(&due);
    let intro = format::render_quiz_intro(&quiz);
    let session = QuizSession::start(quiz, progress.week_number, progress.day_number);

    let mut replies = vec![intro];
    if let (Some(question), Some((index, total))) = (session.current_question(), session.position()) {
        replies.push(format::render_question(question, index, total));
    }
    state.set_session(&enrollment.learner_id, session);
    Ok(replies)
}

async fn answer(
    state: &AppState,
    enrollment: &Enrollment,
    text: &str,
    now: DateTime<Utc>,
) -> Result<Vec<String>, BotError> {
    let learner_id = enrollment.learner_id.as_str();
    let session = state.get_session(learner_id);
    let Some(question) = session.current_question().cloned() else {
        return Ok(vec![format::render_help()]);
    };

    let correct = grade_answer(&question.expected_answer, text);
    match state
        .reviews
        .record_review(learner_id, question.week, &question.target_term, correct, now)
        .await
    {
        Ok(_) => state.metrics.record_review(),
        Err(e) => tracing::warn!(learner = learner_id, error = %e, "Could not record review outcome"),
    }

    let mut replies = vec![format::render_answer_feedback(correct, &question.expected_answer)];
    match session.advance(correct) {
        SessionStep::Next(next) => {
            if let (Some(q), Some((index, total))) = (next.current_question(), next.position()) {
                replies.push(format::render_question(q, index, total));
            }
            state.set_session(learner_id, next);
        }
        SessionStep::Finished { correct, total, week, day } => {
            state.reset_session(learner_id);
            replies.push(format::render_quiz_result(correct, total));
            state
                .storage
                .record_daily_completion(
                    learner_id,
                    week,
                    day,
                    &DailyCompletion::quiz(correct as u32, total as u32),
                )
                .await?;
        }
    }
    Ok(replies)
}

async fn set_start(
    state: &AppState,
    caller: &Enrollment,
    date: &str,
    target: Option<String>,
    now: DateTime<Utc>,
) -> Result<Vec<String>, BotError> {
    if !state.config.is_admin(&caller.learner_id) {
        tracing::warn!(learner = %caller.learner_id, "Rejected /setstart from non-admin");
        return Ok(vec!["That command is for administrators only.".to_string()]);
    }

    let Ok(day) = NaiveDate::parse_from_str(date, "%Y-%m-%d") else {
        return Ok(vec!["Usage: /setstart YYYY-MM-DD [learner]".to_string()]);
    };
    let Some(start) = day.and_hms_opt(0, 0, 0).map(|t| t.and_utc()) else {
        return Ok(vec!["Usage: /setstart YYYY-MM-DD [learner]".to_string()]);
    };

    let mut enrollment = match target {
        Some(id) => match state.storage.get_enrollment(&id).await? {
            Some(enrollment) => enrollment,
            None => return Ok(vec![format!("No enrollment for '{}'.", format::escape(&id))]),
        },
        None => caller.clone(),
    };
    enrollment.override_start(start);
    state.storage.save_enrollment(&enrollment).await?;
    tracing::info!(learner = %enrollment.learner_id, start = %start, "Start date overridden");

    let mut replies = vec![format!("Start date set to {}.", day)];
    replies.extend(progress(state, &enrollment, now).await?);
    Ok(replies)
}
