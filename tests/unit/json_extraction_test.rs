#[cfg(test)]
mod tests {
    use crate::error::GenerationError;
    use crate::generation::json_utils::{extract_json, remove_trailing_commas, sanitize_raw_output};

    #[test]
    fn test_extract_json_from_code_block() {
        let text = r#"
        Here's some text.
        ```json
        {"key": "value"}
        ```
        More text.
        "#;

        let json = extract_json(text).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["key"], "value");
    }

    #[test]
    fn test_extract_json_with_trailing_comma() {
        let text = r#"{"words": ["uno", "dos",],}"#;
        let json = extract_json(text).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["words"][1], "dos");
    }

    #[test]
    fn test_extract_json_plain() {
        let text = r#"{"key": "value"}"#;
        assert_eq!(extract_json(text).unwrap(), text);
    }

    #[test]
    fn test_trailing_comma_inside_string_is_kept() {
        let text = r#"{"example": "uno, }"}"#;
        assert_eq!(remove_trailing_commas(text), text);
    }

    #[test]
    fn test_smart_quotes_are_normalised() {
        let raw = "\u{201C}hola\u{201D}";
        assert_eq!(sanitize_raw_output(raw), "\"hola\"");
    }

    #[test]
    fn test_extract_json_invalid() {
        let err = extract_json("no json here").unwrap_err();
        assert!(matches!(err, GenerationError::Malformed(_)));
    }
}
