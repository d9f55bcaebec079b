use serde::{Serialize, Deserialize};
use crate::curriculum::{CurriculumStore, FocusCategory};
use crate::error::CurriculumError;
use crate::progress::{ProgressSnapshot, DAYS_PER_WEEK, PROGRAM_WEEKS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    WordList,
    Pronunciation,
    Story,
    SentenceBuilding,
    Dialogue,
    Writing,
    ReviewQuiz,
    WeeklyQuiz,
    Recap,
}

/// One step of the outbound lesson message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub kind: ExerciseKind,
    pub description: String,
}

impl Exercise {
    fn new(kind: ExerciseKind, description: &str) -> Self {
        Exercise { kind, description: description.to_string() }
    }
}

/// Fully elaborated plan for one program day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPlan {
    pub week: u32,
    pub day: u32,
    pub theme: String,
    pub focus: FocusCategory,
    pub task: String,
    pub sub_activities: Vec<String>,
    pub new_words: u32,
    pub includes_review: bool,
    pub exercises: Vec<Exercise>,
    pub estimated_minutes: u32,
}

/// Build the plan for a (week, day) cell.
/// Out-of-range input means a snapshot was not clamped; debug builds panic.
pub fn build_daily_plan(
    store: &CurriculumStore,
    week: u32,
    day: u32,
) -> Result<DailyPlan, CurriculumError> {
    debug_assert!(
        (1..=PROGRAM_WEEKS).contains(&week) && (1..=DAYS_PER_WEEK).contains(&day),
        "daily plan requested outside the curriculum: week {week}, day {day}"
    );
    let entry = store.entry(week, day)?;
    let focus = entry.focus;

    let new_words = focus.new_word_quota();
    let includes_review = focus.includes_review();
    let mut exercises = exercises_for(focus);
    if includes_review && focus != FocusCategory::Mastery {
        exercises.push(Exercise::new(
            ExerciseKind::ReviewQuiz,
            "Review words that are due today",
        ));
    }

    Ok(DailyPlan {
        week,
        day,
        theme: entry.theme,
        focus,
        task: entry.task,
        sub_activities: sub_activities_for(focus, new_words),
        new_words,
        includes_review,
        exercises,
        estimated_minutes: base_minutes(focus) + if includes_review { 5 } else { 0 },
    })
}

/// Plan for the learner's current position.
pub fn plan_for_progress(
    store: &CurriculumStore,
    progress: &ProgressSnapshot,
) -> Result<DailyPlan, CurriculumError> {
    build_daily_plan(store, progress.week_number, progress.day_number)
}

fn exercises_for(focus: FocusCategory) -> Vec<Exercise> {
    use ExerciseKind::*;
    match focus {
        FocusCategory::Introduction => vec![
            Exercise::new(WordList, "Read each new word with its translation"),
            Exercise::new(Pronunciation, "Say every word out loud three times"),
            Exercise::new(SentenceBuilding, "Copy one example sentence per word"),
        ],
        FocusCategory::Integration => vec![
            Exercise::new(WordList, "Learn today's new words"),
            Exercise::new(Story, "Read a short story that mixes new and old words"),
            Exercise::new(SentenceBuilding, "Combine two words from different days in one sentence"),
        ],
        FocusCategory::Expansion => vec![
            Exercise::new(WordList, "Learn today's new words"),
            Exercise::new(Pronunciation, "Practise the trickiest sounds"),
            Exercise::new(Dialogue, "Read a short dialogue using related expressions"),
        ],
        FocusCategory::Practice => vec![
            Exercise::new(WordList, "Learn today's new words"),
            Exercise::new(SentenceBuilding, "Write five sentences with this week's words"),
            Exercise::new(Writing, "Answer the evening writing prompt"),
        ],
        FocusCategory::Application => vec![
            Exercise::new(WordList, "Learn today's new words"),
            Exercise::new(Story, "Read a story set in a real-life situation"),
            Exercise::new(Writing, "Describe a similar situation from your own life"),
        ],
        FocusCategory::Mastery => vec![
            Exercise::new(WeeklyQuiz, "Take the quiz on this week's words"),
            Exercise::new(ReviewQuiz, "Retry the words you missed"),
        ],
        FocusCategory::Consolidation => vec![
            Exercise::new(Recap, "Read the weekly recap story"),
            Exercise::new(Writing, "Write a short paragraph about the week's theme"),
        ],
    }
}

fn sub_activities_for(focus: FocusCategory, new_words: u32) -> Vec<String> {
    let mut activities = Vec::new();
    if new_words > 0 {
        activities.push(format!("Learn {} new words", new_words));
    }
    let extra: &[&str] = match focus {
        FocusCategory::Introduction => &["Listen and repeat", "Notice spelling patterns"],
        FocusCategory::Integration => &["Link new words to earlier ones", "Read in context"],
        FocusCategory::Expansion => &["Collect related phrases", "Compare similar words"],
        FocusCategory::Practice => &["Build sentences", "Check your own writing"],
        FocusCategory::Application => &["Role-play a scenario", "Write from experience"],
        FocusCategory::Mastery => &["Self-test without notes", "Mark weak words"],
        FocusCategory::Consolidation => &["Recap the week", "Plan next week's goals"],
    };
    activities.extend(extra.iter().map(|s| s.to_string()));
    activities
}

fn base_minutes(focus: FocusCategory) -> u32 {
    match focus {
        FocusCategory::Introduction => 20,
        FocusCategory::Integration | FocusCategory::Expansion => 20,
        FocusCategory::Practice | FocusCategory::Application => 25,
        FocusCategory::Mastery => 15,
        FocusCategory::Consolidation => 20,
    }
}
