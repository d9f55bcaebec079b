use serde::{Serialize, Deserialize};
use crate::review::VocabularyItem;

/// How a question elicits the word. Assigned round-robin by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizStyle {
    /// Translate into the target language.
    Production,
    /// Fill the blank in an example sentence.
    Cloze,
    /// Give the meaning of a target-language word.
    Recognition,
}

impl QuizStyle {
    const ROTATION: [QuizStyle; 3] = [QuizStyle::Production, QuizStyle::Cloze, QuizStyle::Recognition];

    pub fn for_index(index: usize) -> Self {
        Self::ROTATION[index % Self::ROTATION.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub style: QuizStyle,
    pub prompt: String,
    pub expected_answer: String,
    /// Where the word lives, so the answer can be recorded against it.
    pub week: u32,
    pub target_term: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub questions: Vec<QuizQuestion>,
}

impl Quiz {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Build a review quiz, rotating production, cloze and recognition.
pub fn build_review_quiz(items: &[VocabularyItem]) -> Quiz {
    let questions = items
        .iter()
        .enumerate()
        .map(|(i, item)| question_for(QuizStyle::for_index(i), item))
        .collect();
    Quiz { questions }
}

fn question_for(style: QuizStyle, item: &VocabularyItem) -> QuizQuestion {
    let (prompt, expected_answer) = match style {
        QuizStyle::Production => (
            format!("Translate into the target language: \"{}\"", item.source_term),
            item.target_term.clone(),
        ),
        QuizStyle::Cloze => match blank_out(&item.example, &item.target_term) {
            Some(sentence) => (
                format!("Fill in the blank: {} ({})", sentence, item.source_term),
                item.target_term.clone(),
            ),
            // No usable example sentence; ask for the word directly.
            None => (
                format!("Fill in the blank: ___ = \"{}\"", item.source_term),
                item.target_term.clone(),
            ),
        },
        QuizStyle::Recognition => (
            format!("What does \"{}\" mean?", item.target_term),
            item.source_term.clone(),
        ),
    };

    QuizQuestion {
        style,
        prompt,
        expected_answer,
        week: item.week,
        target_term: item.target_term.clone(),
    }
}

/// Replace the first case-insensitive occurrence of `term` with a blank.
fn blank_out(sentence: &str, term: &str) -> Option<String> {
    if sentence.trim().is_empty() || term.trim().is_empty() {
        return None;
    }
    let lower_sentence = sentence.to_lowercase();
    let lower_term = term.to_lowercase();
    // Lowercasing can change byte lengths; only blank when offsets line up.
    if lower_sentence.len() != sentence.len() || lower_term.len() != term.len() {
        return None;
    }
    let start = lower_sentence.find(&lower_term)?;
    let end = start + term.len();
    Some(format!("{}___{}", &sentence[..start], &sentence[end..]))
}

/// Compare an answer with the expected one, ignoring case, accents,
/// punctuation and extra spaces. `a / b` or `a, b` lists alternatives.
pub fn grade_answer(expected: &str, answer: &str) -> bool {
    let given = normalize(answer);
    if given.is_empty() {
        return false;
    }
    expected
        .split(['/', ',', ';'])
        .map(normalize)
        .filter(|alt| !alt.is_empty())
        .any(|alt| alt == given || strip_article(&alt) == strip_article(&given))
}

fn normalize(text: &str) -> String {
    let folded: String = text
        .chars()
        .flat_map(|c| c.to_lowercase())
        .map(fold_accent)
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '\'')
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_article(text: &str) -> &str {
    const ARTICLES: [&str; 10] = ["the ", "a ", "an ", "el ", "la ", "los ", "las ", "un ", "una ", "to "];
    ARTICLES
        .iter()
        .find_map(|a| text.strip_prefix(a))
        .unwrap_or(text)
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        _ => c,
    }
}
