pub mod plan;

use std::path::Path;
use serde::{Serialize, Deserialize};
use lazy_static::lazy_static;
use crate::error::{BotError, CurriculumError};
use crate::progress::{DAYS_PER_WEEK, PROGRAM_WEEKS};

/// The seven day types of every curriculum week, in order.
/// Driven purely by the day number; repeats each week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusCategory {
    Introduction,
    Integration,
    Expansion,
    Practice,
    Application,
    Mastery,
    Consolidation,
}

impl FocusCategory {
    pub const ALL: [FocusCategory; 7] = [
        FocusCategory::Introduction,
        FocusCategory::Integration,
        FocusCategory::Expansion,
        FocusCategory::Practice,
        FocusCategory::Application,
        FocusCategory::Mastery,
        FocusCategory::Consolidation,
    ];

    /// Focus for a day number in 1..=7.
    pub fn for_day(day: u32) -> Option<Self> {
        match day {
            1..=7 => Some(Self::ALL[(day - 1) as usize]),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FocusCategory::Introduction => "Introduction",
            FocusCategory::Integration => "Integration",
            FocusCategory::Expansion => "Expansion",
            FocusCategory::Practice => "Practice",
            FocusCategory::Application => "Application",
            FocusCategory::Mastery => "Mastery",
            FocusCategory::Consolidation => "Consolidation",
        }
    }

    /// New vocabulary introduced on a day with this focus.
    pub fn new_word_quota(self) -> u32 {
        match self {
            FocusCategory::Introduction => 10,
            FocusCategory::Integration
            | FocusCategory::Expansion
            | FocusCategory::Practice
            | FocusCategory::Application => 8,
            FocusCategory::Mastery | FocusCategory::Consolidation => 0,
        }
    }

    /// Review is part of every day except the first of the week.
    pub fn includes_review(self) -> bool {
        self != FocusCategory::Introduction
    }

    /// Days that get the 21:00 writing prompt.
    pub fn is_writing_focus(self) -> bool {
        matches!(
            self,
            FocusCategory::Practice | FocusCategory::Application | FocusCategory::Consolidation
        )
    }
}

impl std::fmt::Display for FocusCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One week of the curriculum as stored in the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekDefinition {
    pub week: u32,
    pub theme: String,
    /// Optional per-day task overrides, 7 entries when present.
    #[serde(default)]
    pub tasks: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CurriculumFile {
    weeks: Vec<WeekDefinition>,
}

/// Resolved curriculum cell for one (week, day).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumEntry {
    pub week: u32,
    pub day: u32,
    pub theme: String,
    pub focus: FocusCategory,
    pub task: String,
}

/// Immutable 12x7 curriculum. Loaded once, shared read-only.
#[derive(Debug, Clone)]
pub struct CurriculumStore {
    weeks: Vec<WeekDefinition>,
}

const BUILTIN_THEMES: [&str; 12] = [
    "Greetings & Introductions",
    "Family & Friends",
    "Food & Dining",
    "Daily Routines",
    "Travel & Directions",
    "Shopping & Money",
    "Work & Careers",
    "Health & the Body",
    "Home & Housing",
    "Weather & Nature",
    "Hobbies & Free Time",
    "Culture & Celebrations",
];

lazy_static! {
    static ref BUILTIN_CURRICULUM: CurriculumStore = CurriculumStore {
        weeks: BUILTIN_THEMES
            .iter()
            .enumerate()
            .map(|(i, theme)| WeekDefinition {
                week: i as u32 + 1,
                theme: theme.to_string(),
                tasks: Vec::new(),
            })
            .collect(),
    };
}

impl CurriculumStore {
    /// Built-in curriculum (process-wide, initialised on first use)
    pub fn builtin() -> &'static CurriculumStore {
        &BUILTIN_CURRICULUM
    }

    /// Build from week definitions, checking every week 1..=12 exists exactly once
    pub fn from_weeks(mut weeks: Vec<WeekDefinition>) -> Result<Self, CurriculumError> {
        weeks.sort_by_key(|w| w.week);
        if weeks.len() != PROGRAM_WEEKS as usize {
            return Err(CurriculumError::Invalid(format!(
                "expected {} weeks, found {}",
                PROGRAM_WEEKS,
                weeks.len()
            )));
        }
        for (i, w) in weeks.iter().enumerate() {
            if w.week != i as u32 + 1 {
                return Err(CurriculumError::Invalid(format!(
                    "week numbers must be 1..={} without gaps (found {})",
                    PROGRAM_WEEKS, w.week
                )));
            }
            if w.theme.trim().is_empty() {
                return Err(CurriculumError::Invalid(format!("week {} has an empty theme", w.week)));
            }
            if !w.tasks.is_empty() && w.tasks.len() != DAYS_PER_WEEK as usize {
                return Err(CurriculumError::Invalid(format!(
                    "week {} lists {} tasks, expected {}",
                    w.week,
                    w.tasks.len(),
                    DAYS_PER_WEEK
                )));
            }
        }
        Ok(Self { weeks })
    }

    /// Parse a TOML curriculum document
    pub fn from_toml_str(content: &str) -> Result<Self, BotError> {
        let file: CurriculumFile = toml::from_str(content)?;
        Ok(Self::from_weeks(file.weeks)?)
    }

    /// Load a TOML curriculum from disk
    pub async fn load(path: &Path) -> Result<Self, BotError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| BotError::new(
                format!("Failed to read curriculum: {}", e),
                "io"
            ).with_context(format!("path: {:?}", path)))?;
        let store = Self::from_toml_str(&content)?;
        tracing::info!(path = ?path, "Curriculum loaded");
        Ok(store)
    }

    pub fn theme(&self, week: u32) -> Option<&str> {
        self.weeks
            .get(week.checked_sub(1)? as usize)
            .map(|w| w.theme.as_str())
    }

    /// Look up a (week, day) cell. Out-of-range input is an invariant violation.
    pub fn entry(&self, week: u32, day: u32) -> Result<CurriculumEntry, CurriculumError> {
        let not_found = CurriculumError::EntryNotFound { week, day };
        let focus = FocusCategory::for_day(day).ok_or_else(|| not_found.clone())?;
        if week == 0 || week > PROGRAM_WEEKS {
            return Err(not_found);
        }
        let def = self.weeks.get(week as usize - 1).ok_or(not_found)?;

        let task = match def.tasks.get(day as usize - 1) {
            Some(task) => task.clone(),
            None => default_task(focus, &def.theme),
        };

        Ok(CurriculumEntry {
            week,
            day,
            theme: def.theme.clone(),
            focus,
            task,
        })
    }
}

fn default_task(focus: FocusCategory, theme: &str) -> String {
    match focus {
        FocusCategory::Introduction => format!("Meet the first {} words of \"{}\"", focus.new_word_quota(), theme),
        FocusCategory::Integration => format!("Connect new \"{}\" words with yesterday's in a short story", theme),
        FocusCategory::Expansion => format!("Broaden your \"{}\" vocabulary with related expressions", theme),
        FocusCategory::Practice => format!("Use \"{}\" vocabulary in your own sentences", theme),
        FocusCategory::Application => format!("Apply \"{}\" vocabulary in a realistic situation", theme),
        FocusCategory::Mastery => format!("Quiz yourself on everything from \"{}\"", theme),
        FocusCategory::Consolidation => format!("Recap the week of \"{}\" and write about it", theme),
    }
}
