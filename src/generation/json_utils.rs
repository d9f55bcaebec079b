//! Helpers for pulling a JSON object out of free-form model output.

use crate::error::GenerationError;

/// Strip code fences and smart quotes that models like to add
pub fn sanitize_raw_output(raw: &str) -> String {
    raw.replace("```json", "")
        .replace("```JSON", "")
        .replace("```", "")
        .replace(['\u{201C}', '\u{201D}'], "\"")
        .replace(['\u{2018}', '\u{2019}'], "'")
        .trim()
        .to_string()
}

/// Remove trailing commas before `}` or `]` (invalid JSON, common in model output).
/// Commas inside strings are left alone.
pub fn remove_trailing_commas(json: &str) -> String {
    let chars: Vec<char> = json.chars().collect();
    let mut result = String::with_capacity(json.len());
    let mut in_string = false;
    let mut escape_next = false;

    for (i, &ch) in chars.iter().enumerate() {
        if escape_next {
            escape_next = false;
            result.push(ch);
            continue;
        }
        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            ',' if !in_string => {
                let next = chars[i + 1..].iter().find(|c| !c.is_whitespace());
                if matches!(next, Some('}') | Some(']')) {
                    continue;
                }
            }
            _ => {}
        }
        result.push(ch);
    }

    result
}

/// Byte range of the first balanced `{...}` in `text`, string-aware.
fn first_object_span(text: &str) -> Option<(usize, usize)> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (offset, ch) in text[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }
        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some((start, start + offset + 1));
                }
            }
            _ => {}
        }
    }
    None
}

/// Extract a parseable JSON object from model output.
/// Tries the text as-is, then after sanitising, then the first balanced object.
pub fn extract_json(text: &str) -> Result<String, GenerationError> {
    let trimmed = text.trim();
    if serde_json::from_str::<serde_json::Value>(trimmed).is_ok() {
        return Ok(trimmed.to_string());
    }

    let cleaned = remove_trailing_commas(&sanitize_raw_output(trimmed));
    if serde_json::from_str::<serde_json::Value>(&cleaned).is_ok() {
        return Ok(cleaned);
    }

    if let Some((start, end)) = first_object_span(&cleaned) {
        let candidate = &cleaned[start..end];
        if serde_json::from_str::<serde_json::Value>(candidate).is_ok() {
            tracing::debug!("Extracted JSON object from surrounding text");
            return Ok(candidate.to_string());
        }
    }

    let preview: String = trimmed.chars().take(80).collect();
    Err(GenerationError::Malformed(format!("Failed to extract JSON from: {}", preview)))
}
