use chrono::{DateTime, Utc};
use tokio::sync::watch;
use crate::analytics::mastery_summary;
use crate::curriculum::plan::{plan_for_progress, DailyPlan};
use crate::dispatch::should_send_practice;
use crate::error::BotError;
use crate::logging::log_broadcast_step;
use crate::messaging::format;
use crate::perf::PerfTimer;
use crate::progress::{compute_progress_with, ProgressSnapshot};
use crate::state::app::AppState;
use crate::state::session::QuizSession;
use crate::storage::{DailyCompletion, Enrollment};

/// The scheduled operations applied to every active enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BroadcastKind {
    /// 08:00 daily lesson
    MorningLesson,
    /// 20:00 due-review reminder
    EveningReview,
    /// 21:00 writing prompt, writing/practice days only
    PracticePrompt,
    /// Sunday 19:00 recap
    WeeklySummary,
}

impl BroadcastKind {
    pub fn label(self) -> &'static str {
        match self {
            BroadcastKind::MorningLesson => "morning_lesson",
            BroadcastKind::EveningReview => "evening_review",
            BroadcastKind::PracticePrompt => "practice_prompt",
            BroadcastKind::WeeklySummary => "weekly_summary",
        }
    }
}

impl std::str::FromStr for BroadcastKind {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "morning" | "morning_lesson" | "lesson" => Ok(BroadcastKind::MorningLesson),
            "review" | "evening_review" => Ok(BroadcastKind::EveningReview),
            "practice" | "practice_prompt" => Ok(BroadcastKind::PracticePrompt),
            "weekly" | "weekly_summary" | "summary" => Ok(BroadcastKind::WeeklySummary),
            other => Err(BotError::new(format!("Unknown broadcast '{}'", other), "cli")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Sent,
    Skipped(&'static str),
    /// Program finished: completion message sent, learner deactivated.
    Completed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    pub attempted: usize,
    pub sent: usize,
    pub skipped: usize,
    pub completed: usize,
    pub failed: usize,
}

/// Run one broadcast over all active enrollments, in order.
/// A failing learner is logged and skipped; the batch continues.
/// Stops between learners once `shutdown` flips to true.
pub async fn run_broadcast(
    state: &AppState,
    kind: BroadcastKind,
    now: DateTime<Utc>,
    shutdown: Option<&watch::Receiver<bool>>,
) -> Result<BroadcastReport, BotError> {
    let enrollments = state.storage.list_active_enrollments().await?;
    let delay = std::time::Duration::from_millis(state.config.schedule.inter_learner_delay_ms);
    let mut report = BroadcastReport::default();

    tracing::info!(broadcast = kind.label(), learners = enrollments.len(), "Broadcast starting");

    for (i, enrollment) in enrollments.iter().enumerate() {
        if shutdown.map(|rx| *rx.borrow()).unwrap_or(false) {
            tracing::warn!(broadcast = kind.label(), remaining = enrollments.len() - i, "Shutdown requested, stopping broadcast");
            break;
        }
        if i > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        report.attempted += 1;
        match run_step(state, kind, enrollment, now).await {
            Ok(StepOutcome::Sent) => report.sent += 1,
            Ok(StepOutcome::Skipped(reason)) => {
                report.skipped += 1;
                tracing::debug!(broadcast = kind.label(), learner = %enrollment.learner_id, reason = reason, "Skipped");
            }
            Ok(StepOutcome::Completed) => report.completed += 1,
            Err(e) => {
                report.failed += 1;
                state.metrics.record_skipped_learner();
                tracing::error!(
                    broadcast = kind.label(),
                    learner = %enrollment.learner_id,
                    error = %e,
                    "Broadcast step failed"
                );
            }
        }
    }

    tracing::info!(
        broadcast = kind.label(),
        report = ?report,
        metrics = ?state.metrics.snapshot(),
        "Broadcast complete"
    );
    Ok(report)
}

/// One learner's step for one broadcast.
pub async fn run_step(
    state: &AppState,
    kind: BroadcastKind,
    enrollment: &Enrollment,
    now: DateTime<Utc>,
) -> Result<StepOutcome, BotError> {
    let _perf = PerfTimer::for_learner(kind.label(), &enrollment.learner_id);
    let progress = compute_progress_with(state.config.course.day_boundary, enrollment.enrolled_at, now);
    let outcome = match kind {
        BroadcastKind::MorningLesson => morning_lesson(state, enrollment, &progress, now).await?,
        BroadcastKind::EveningReview => evening_review(state, enrollment, &progress, now).await?,
        BroadcastKind::PracticePrompt => practice_prompt(state, enrollment, &progress).await?,
        BroadcastKind::WeeklySummary => weekly_summary(state, enrollment, &progress, now).await?,
    };

    let label = match outcome {
        StepOutcome::Sent => "sent",
        StepOutcome::Skipped(reason) => reason,
        StepOutcome::Completed => "completed",
    };
    log_broadcast_step(kind.label(), &enrollment.learner_id, progress.week_number, progress.day_number, label);
    Ok(outcome)
}

async fn completion_flags(
    state: &AppState,
    learner_id: &str,
    progress: &ProgressSnapshot,
) -> Result<DailyCompletion, BotError> {
    Ok(state
        .storage
        .get_daily_completion(learner_id, progress.week_number, progress.day_number)
        .await?
        .unwrap_or_default())
}

async fn send(state: &AppState, learner_id: &str, text: &str) -> Result<(), BotError> {
    state.messenger.send_text(learner_id, text).await?;
    state.metrics.record_message();
    Ok(())
}

fn current_plan(state: &AppState, progress: &ProgressSnapshot) -> Result<DailyPlan, BotError> {
    Ok(plan_for_progress(&state.curriculum, progress)?)
}

async fn morning_lesson(
    state: &AppState,
    enrollment: &Enrollment,
    progress: &ProgressSnapshot,
    now: DateTime<Utc>,
) -> Result<StepOutcome, BotError> {
    let learner_id = enrollment.learner_id.as_str();

    if progress.completed {
        send(state, learner_id, &format::render_completion()).await?;
        let mut finished = enrollment.clone();
        finished.deactivate();
        state.storage.save_enrollment(&finished).await?;
        tracing::info!(learner = learner_id, "Program completed, enrollment deactivated");
        return Ok(StepOutcome::Completed);
    }

    if completion_flags(state, learner_id, progress).await?.lesson_sent {
        return Ok(StepOutcome::Skipped("already_sent"));
    }

    let plan = current_plan(state, progress)?;
    let known = state.storage.list_all_vocabulary(learner_id).await?;
    let week_words: Vec<_> = known.iter().filter(|w| w.week == plan.week).cloned().collect();

    if let Err(e) = state.messenger.send_typing(learner_id).await {
        tracing::debug!(learner = learner_id, error = %e, "Typing indicator failed");
    }

    let lesson = state
        .dispatcher
        .prepare_lesson(learner_id, &plan, &known, &week_words, now)
        .await;

    let mut text = format::render_lesson(&lesson);
    if plan.includes_review {
        let due = state.reviews.select_due(enrollment, progress.week_number, now).await?;
        if !due.is_empty() {
            text.push_str("\n\n");
            text.push_str(&format::render_due_reminder(&due));
        }
    }

    send(state, learner_id, &text).await?;

    // The lesson already shows the first question; answers arrive as plain text.
    if let Some(quiz) = lesson.quiz {
        let session = QuizSession::start(quiz, plan.week, plan.day);
        if session.is_active() {
            state.set_session(learner_id, session);
        }
    }

    if !lesson.new_words.is_empty() {
        state
            .storage
            .upsert_vocabulary(learner_id, plan.week, &lesson.new_words)
            .await?;
    }
    state
        .storage
        .record_daily_completion(learner_id, plan.week, plan.day, &DailyCompletion::lesson())
        .await?;

    Ok(StepOutcome::Sent)
}

async fn evening_review(
    state: &AppState,
    enrollment: &Enrollment,
    progress: &ProgressSnapshot,
    now: DateTime<Utc>,
) -> Result<StepOutcome, BotError> {
    let learner_id = enrollment.learner_id.as_str();
    if progress.completed {
        return Ok(StepOutcome::Skipped("program_completed"));
    }
    let plan = current_plan(state, progress)?;
    if !plan.includes_review {
        return Ok(StepOutcome::Skipped("no_review_today"));
    }
    if completion_flags(state, learner_id, progress).await?.review_sent {
        return Ok(StepOutcome::Skipped("already_sent"));
    }

    let due = state.reviews.select_due(enrollment, progress.week_number, now).await?;
    if due.is_empty() {
        return Ok(StepOutcome::Skipped("nothing_due"));
    }

    send(state, learner_id, &format::render_due_reminder(&due)).await?;
    state
        .storage
        .record_daily_completion(learner_id, plan.week, plan.day, &DailyCompletion::review())
        .await?;
    Ok(StepOutcome::Sent)
}

async fn practice_prompt(
    state: &AppState,
    enrollment: &Enrollment,
    progress: &ProgressSnapshot,
) -> Result<StepOutcome, BotError> {
    let learner_id = enrollment.learner_id.as_str();
    if progress.completed {
        return Ok(StepOutcome::Skipped("program_completed"));
    }
    let plan = current_plan(state, progress)?;
    if !should_send_practice(plan.focus) {
        return Ok(StepOutcome::Skipped("not_writing_day"));
    }
    if completion_flags(state, learner_id, progress).await?.practice_sent {
        return Ok(StepOutcome::Skipped("already_sent"));
    }

    let words: Vec<String> = state
        .storage
        .get_vocabulary(learner_id, plan.week)
        .await?
        .into_iter()
        .map(|w| w.target_term)
        .collect();
    let (prompt, _) = state.dispatcher.practice_prompt(learner_id, &plan, &words).await;

    send(state, learner_id, &format::render_practice_prompt(&plan.theme, &prompt)).await?;
    state
        .storage
        .record_daily_completion(learner_id, plan.week, plan.day, &DailyCompletion::practice())
        .await?;
    Ok(StepOutcome::Sent)
}

async fn weekly_summary(
    state: &AppState,
    enrollment: &Enrollment,
    progress: &ProgressSnapshot,
    now: DateTime<Utc>,
) -> Result<StepOutcome, BotError> {
    let learner_id = enrollment.learner_id.as_str();
    if progress.completed {
        return Ok(StepOutcome::Skipped("program_completed"));
    }
    if completion_flags(state, learner_id, progress).await?.summary_sent {
        return Ok(StepOutcome::Skipped("already_sent"));
    }

    let week = progress.week_number;
    let words = state.storage.get_vocabulary(learner_id, week).await?;
    let summary = mastery_summary(&words);
    let due = state.reviews.select_due(enrollment, week, now).await?;
    let theme = state.curriculum.theme(week).unwrap_or_default();

    send(state, learner_id, &format::render_weekly_summary(week, theme, &summary, due.len())).await?;
    state
        .storage
        .record_daily_completion(learner_id, week, progress.day_number, &DailyCompletion::summary())
        .await?;
    Ok(StepOutcome::Sent)
}
