#[cfg(test)]
mod tests {
    use crate::curriculum::plan::{build_daily_plan, ExerciseKind};
    use crate::curriculum::{CurriculumStore, FocusCategory, WeekDefinition};
    use crate::error::CurriculumError;

    #[test]
    fn test_every_cell_builds_a_plan() {
        let store = CurriculumStore::builtin();
        for week in 1..=12 {
            for day in 1..=7 {
                let plan = build_daily_plan(store, week, day).unwrap();
                assert!(!plan.exercises.is_empty(), "week {} day {}", week, day);
                assert!(FocusCategory::ALL.contains(&plan.focus));
                assert_eq!(Some(plan.focus), FocusCategory::for_day(day));
                assert!(!plan.theme.is_empty());
            }
        }
    }

    #[test]
    fn test_day_one_introduces_ten_words_without_review() {
        let plan = build_daily_plan(CurriculumStore::builtin(), 1, 1).unwrap();
        assert_eq!(plan.focus, FocusCategory::Introduction);
        assert_eq!(plan.new_words, 10);
        assert!(!plan.includes_review);
        assert!(!plan.exercises.iter().any(|e| e.kind == ExerciseKind::ReviewQuiz));
    }

    #[test]
    fn test_word_quotas_by_day() {
        let store = CurriculumStore::builtin();
        let quotas: Vec<u32> = (1..=7)
            .map(|day| build_daily_plan(store, 3, day).unwrap().new_words)
            .collect();
        assert_eq!(quotas, vec![10, 8, 8, 8, 8, 0, 0]);
    }

    #[test]
    fn test_review_days_get_review_exercise() {
        let plan = build_daily_plan(CurriculumStore::builtin(), 2, 4).unwrap();
        assert!(plan.includes_review);
        assert!(plan.exercises.iter().any(|e| e.kind == ExerciseKind::ReviewQuiz));
    }

    #[test]
    fn test_writing_focus_days() {
        let writing: Vec<u32> = (1..=7)
            .filter(|d| FocusCategory::for_day(*d).map(|f| f.is_writing_focus()).unwrap_or(false))
            .collect();
        assert_eq!(writing, vec![4, 5, 7]);
    }

    #[test]
    fn test_out_of_range_entry_is_error() {
        let store = CurriculumStore::builtin();
        assert_eq!(store.entry(13, 1), Err(CurriculumError::EntryNotFound { week: 13, day: 1 }));
        assert_eq!(store.entry(1, 8), Err(CurriculumError::EntryNotFound { week: 1, day: 8 }));
        assert!(store.entry(0, 1).is_err());
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(std::ptr::eq(CurriculumStore::builtin(), CurriculumStore::builtin()));
        assert_eq!(CurriculumStore::builtin().theme(1), Some("Greetings & Introductions"));
    }

    #[test]
    fn test_from_weeks_requires_twelve_contiguous_weeks() {
        let weeks: Vec<WeekDefinition> = (1..=11)
            .map(|w| WeekDefinition { week: w, theme: format!("Theme {}", w), tasks: Vec::new() })
            .collect();
        assert!(CurriculumStore::from_weeks(weeks).is_err());
    }

    #[test]
    fn test_custom_tasks_are_used() {
        let mut doc = String::new();
        for w in 1..=12 {
            doc.push_str(&format!("[[weeks]]\nweek = {}\ntheme = \"Theme {}\"\n", w, w));
            if w == 1 {
                doc.push_str("tasks = [\"a\", \"b\", \"c\", \"d\", \"e\", \"f\", \"g\"]\n");
            }
            doc.push('\n');
        }
        let store = CurriculumStore::from_toml_str(&doc).unwrap();
        assert_eq!(store.entry(1, 3).unwrap().task, "c");
        assert!(store.entry(2, 3).unwrap().task.contains("Theme 2"));
    }

    #[test]
    fn test_partial_task_list_rejected() {
        let mut doc = String::new();
        for w in 1..=12 {
            doc.push_str(&format!("[[weeks]]\nweek = {}\ntheme = \"T{}\"\n", w, w));
            if w == 5 {
                doc.push_str("tasks = [\"only one\"]\n");
            }
        }
        assert!(CurriculumStore::from_toml_str(&doc).is_err());
    }
}
