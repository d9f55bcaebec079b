use serde::{Serialize, Deserialize};
use crate::review::{VocabularyItem, MAX_MASTERY};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct MasterySummary {
    pub total_words: usize,
    /// Index 0 is level 1, index 4 is level 5.
    pub per_level: [usize; 5],
    pub mastered: usize,
    pub average_level: f32,
}

pub fn mastery_summary<'a, I>(items: I) -> MasterySummary
where
    I: IntoIterator<Item = &'a VocabularyItem>,
{
    let mut summary = MasterySummary::default();
    let mut level_sum = 0usize;

    for item in items {
        let level = item.mastery_level.clamp(1, MAX_MASTERY);
        summary.per_level[(level - 1) as usize] += 1;
        summary.total_words += 1;
        level_sum += level as usize;
        if item.is_mastered() {
            summary.mastered += 1;
        }
    }

    if summary.total_words > 0 {
        summary.average_level = level_sum as f32 / summary.total_words as f32;
    }
    summary
}
