use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc, Weekday};
use tokio::sync::watch;
use crate::broadcast::{run_broadcast, BroadcastKind};
use crate::config::{parse_time, ScheduleConfig};
use crate::error::BotError;
use crate::state::app::AppState;

/// A fixed UTC wall-clock time that fires one broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
    pub kind: BroadcastKind,
    pub time: NaiveTime,
    /// Only fire on this weekday; daily when `None`.
    pub weekday: Option<Weekday>,
}

pub fn triggers(schedule: &ScheduleConfig) -> Result<Vec<Trigger>, BotError> {
    Ok(vec![
        Trigger {
            kind: BroadcastKind::MorningLesson,
            time: parse_time(&schedule.morning_lesson)?,
            weekday: None,
        },
        Trigger {
            kind: BroadcastKind::WeeklySummary,
            time: parse_time(&schedule.weekly_summary)?,
            weekday: Some(schedule.summary_weekday()?),
        },
        Trigger {
            kind: BroadcastKind::EveningReview,
            time: parse_time(&schedule.evening_review)?,
            weekday: None,
        },
        Trigger {
            kind: BroadcastKind::PracticePrompt,
            time: parse_time(&schedule.practice_prompt)?,
            weekday: None,
        },
    ])
}

/// First instant strictly after `after` at which `trigger` fires.
pub fn next_fire(trigger: &Trigger, after: DateTime<Utc>) -> DateTime<Utc> {
    let mut candidate = after.date_naive().and_time(trigger.time).and_utc();
    if candidate <= after {
        candidate += Duration::days(1);
    }
    if let Some(weekday) = trigger.weekday {
        while candidate.weekday() != weekday {
            candidate += Duration::days(1);
        }
    }
    candidate
}

/// Earliest upcoming trigger; ties go to the one listed first.
pub fn next_due(triggers: &[Trigger], after: DateTime<Utc>) -> Option<(DateTime<Utc>, BroadcastKind)> {
    triggers
        .iter()
        .map(|t| (next_fire(t, after), t.kind))
        .min_by_key(|(at, _)| *at)
}

/// Sleep until each trigger fires and run its broadcast, until shutdown.
/// A broadcast already running is allowed to finish its current learner.
pub async fn run_scheduler(state: AppState, mut shutdown: watch::Receiver<bool>) -> Result<(), BotError> {
    let triggers = triggers(&state.config.schedule)?;
    let mut cursor = Utc::now();

    loop {
        let Some((fire_at, kind)) = next_due(&triggers, cursor) else {
            return Ok(());
        };
        tracing::info!(broadcast = kind.label(), at = %fire_at, "Next broadcast scheduled");

        let wait = (fire_at - Utc::now()).to_std().unwrap_or_default();
        tokio::select! {
            _ = tokio::time::sleep(wait) => {}
            _ = shutdown.changed() => {
                tracing::info!("Scheduler stopping");
                return Ok(());
            }
        }

        match run_broadcast(&state, kind, Utc::now(), Some(&shutdown)).await {
            Ok(report) => tracing::debug!(broadcast = kind.label(), failed = report.failed, "Broadcast finished"),
            Err(e) => tracing::error!(broadcast = kind.label(), error = %e, "Broadcast aborted"),
        }

        if *shutdown.borrow() {
            return Ok(());
        }
        cursor = fire_at;
    }
}
