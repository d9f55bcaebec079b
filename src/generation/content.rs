//! Prompt contracts for each generation capability and validation of the
//! returned payloads. Anything that fails validation becomes a `GenerationError`.

use serde::{Serialize, Deserialize};
use crate::error::GenerationError;
use crate::generation::json_utils::extract_json;
use crate::review::quiz::{Quiz, QuizQuestion, QuizStyle};
use crate::review::VocabularyItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn for_week(week: u32) -> Self {
        match week {
            0..=4 => Difficulty::Beginner,
            5..=8 => Difficulty::Intermediate,
            _ => Difficulty::Advanced,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

/// Target story length grows with the week.
pub fn story_word_count(week: u32) -> u32 {
    100 + 15 * week.saturating_sub(1)
}

/// Languages of the course, shared by every prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Languages {
    pub source: String,
    pub target: String,
}

pub fn system_instructions(languages: &Languages) -> String {
    format!(
        "You are a patient {target} teacher writing short lessons for a learner whose \
         native language is {source}. Keep content accurate, friendly and concise. \
         When asked for JSON, output only valid JSON with no markdown or extra text.",
        target = languages.target,
        source = languages.source,
    )
}

// Vocabulary

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// Target-language word.
    pub word: String,
    /// Meaning in the learner's language.
    pub translation: String,
    #[serde(default)]
    pub pronunciation: String,
    #[serde(default)]
    pub example: String,
}

#[derive(Debug, Deserialize)]
struct WordListPayload {
    words: Vec<WordEntry>,
}

pub fn vocabulary_prompt(
    languages: &Languages,
    theme: &str,
    count: u32,
    week: u32,
    known_words: &[String],
) -> String {
    let known = if known_words.is_empty() {
        "none yet".to_string()
    } else {
        known_words.join(", ")
    };
    format!(
        r#"Teach exactly {count} new {target} words for the theme "{theme}" at {level} level.
Do not repeat any of these already-known words: {known}.

Return ONLY valid JSON in this schema:
{{
  "words": [
    {{
      "word": "the {target} word",
      "translation": "meaning in {source}",
      "pronunciation": "simple pronunciation hint",
      "example": "a short {target} sentence that contains the word"
    }}
  ]
}}

The "words" array must contain exactly {count} entries."#,
        count = count,
        target = languages.target,
        source = languages.source,
        theme = theme,
        level = Difficulty::for_week(week).label(),
        known = known,
    )
}

/// Parse and validate a word list; the count must match the request exactly.
pub fn parse_word_list(raw: &str, expected: usize) -> Result<Vec<WordEntry>, GenerationError> {
    let json = extract_json(raw)?;
    let payload: WordListPayload = serde_json::from_str(&json)
        .map_err(|e| GenerationError::Malformed(format!("word list: {}", e)))?;

    let mut words: Vec<WordEntry> = Vec::with_capacity(payload.words.len());
    for entry in payload.words {
        if entry.word.trim().is_empty() || entry.translation.trim().is_empty() {
            return Err(GenerationError::Malformed("word entry with empty fields".to_string()));
        }
        let duplicate = words
            .iter()
            .any(|w| w.word.trim().eq_ignore_ascii_case(entry.word.trim()));
        if !duplicate {
            words.push(entry);
        }
    }

    if words.len() != expected {
        return Err(GenerationError::CountMismatch { expected, actual: words.len() });
    }
    Ok(words)
}

impl WordEntry {
    pub fn into_item(self, week: u32, learned_at: chrono::DateTime<chrono::Utc>) -> VocabularyItem {
        VocabularyItem::new(
            week,
            &self.translation,
            &self.word,
            &self.pronunciation,
            &self.example,
            learned_at,
        )
    }
}

// Stories

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub title: String,
    pub text: String,
}

pub fn story_prompt(
    languages: &Languages,
    theme: &str,
    week: u32,
    words: &[String],
    recap: bool,
) -> String {
    let kind = if recap { "a recap story of the whole week" } else { "a short story" };
    format!(
        r#"Write {kind} in {target} of about {length} words on the theme "{theme}" at {level} level.
Use as many of these words as fit naturally: {words}.

Return ONLY valid JSON: {{"title": "story title", "text": "the story"}}"#,
        kind = kind,
        target = languages.target,
        length = story_word_count(week),
        theme = theme,
        level = Difficulty::for_week(week).label(),
        words = words.join(", "),
    )
}

pub fn parse_story(raw: &str) -> Result<Story, GenerationError> {
    let json = extract_json(raw)?;
    let story: Story = serde_json::from_str(&json)
        .map_err(|e| GenerationError::Malformed(format!("story: {}", e)))?;
    if story.text.split_whitespace().count() < 20 {
        return Err(GenerationError::Malformed("story text too short".to_string()));
    }
    Ok(Story {
        title: story.title.trim().to_string(),
        text: story.text.trim().to_string(),
    })
}

// Practice prompts

pub fn practice_prompt_request(languages: &Languages, theme: &str, week: u32, words: &[String]) -> String {
    format!(
        "Write one short writing exercise (2-3 sentences of instructions, in {source}) that asks \
         the learner to write 4-6 sentences in {target} about \"{theme}\" at {level} level, \
         using some of: {words}. Reply with the instructions only.",
        source = languages.source,
        target = languages.target,
        theme = theme,
        level = Difficulty::for_week(week).label(),
        words = words.join(", "),
    )
}

/// Free text; only shape checks apply.
pub fn parse_practice_prompt(raw: &str) -> Result<String, GenerationError> {
    let text = raw.trim().trim_matches('"').trim();
    if text.len() < 20 {
        return Err(GenerationError::Malformed("practice prompt too short".to_string()));
    }
    if text.starts_with('{') {
        return Err(GenerationError::Malformed("practice prompt returned JSON".to_string()));
    }
    Ok(text.chars().take(1200).collect())
}

// Quizzes

#[derive(Debug, Deserialize)]
struct QuizPayload {
    questions: Vec<GeneratedQuestion>,
}

#[derive(Debug, Deserialize)]
struct GeneratedQuestion {
    word: String,
    question: String,
    answer: String,
}

pub fn quiz_prompt(languages: &Languages, items: &[VocabularyItem]) -> String {
    let words: Vec<String> = items
        .iter()
        .map(|i| format!("{} ({})", i.target_term, i.source_term))
        .collect();
    format!(
        r#"Write one quiz question per word, in the same order, for these {target} words: {words}.
Questions are written in {source}; each answer is the {target} word itself.

Return ONLY valid JSON:
{{"questions": [{{"word": "the {target} word", "question": "the question", "answer": "the expected answer"}}]}}"#,
        target = languages.target,
        source = languages.source,
        words = words.join(", "),
    )
}

/// Every question must map to one of `items`, and every item needs a question.
pub fn parse_quiz(raw: &str, items: &[VocabularyItem]) -> Result<Quiz, GenerationError> {
    let json = extract_json(raw)?;
    let payload: QuizPayload = serde_json::from_str(&json)
        .map_err(|e| GenerationError::Malformed(format!("quiz: {}", e)))?;

    if payload.questions.len() != items.len() {
        return Err(GenerationError::CountMismatch {
            expected: items.len(),
            actual: payload.questions.len(),
        });
    }

    let mut questions = Vec::with_capacity(items.len());
    for (i, q) in payload.questions.into_iter().enumerate() {
        let item = items
            .iter()
            .find(|it| it.target_term.eq_ignore_ascii_case(q.word.trim()))
            .ok_or_else(|| GenerationError::Malformed(format!("quiz word '{}' not requested", q.word)))?;
        if q.question.trim().is_empty() || q.answer.trim().is_empty() {
            return Err(GenerationError::Malformed("quiz question with empty fields".to_string()));
        }
        questions.push(QuizQuestion {
            style: QuizStyle::for_index(i),
            prompt: q.question.trim().to_string(),
            expected_answer: q.answer.trim().to_string(),
            week: item.week,
            target_term: item.target_term.clone(),
        });
    }
    Ok(Quiz { questions })
}
