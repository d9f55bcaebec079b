#[cfg(test)]
mod tests {
    use crate::messaging::telegram::{inbound_messages, split_message, ApiResponse, Update};

    #[test]
    fn test_get_updates_payload_parses() {
        let body = r#"{
            "ok": true,
            "result": [
                {"update_id": 41, "message": {"chat": {"id": 7}, "from": {"first_name": "Ana"}, "text": "/start"}},
                {"update_id": 42, "message": {"chat": {"id": 8}, "sticker": {}}},
                {"update_id": 43}
            ]
        }"#;
        let response: ApiResponse<Vec<Update>> = serde_json::from_str(body).unwrap();
        let updates = response.into_result("getUpdates").unwrap();

        let (next, messages) = inbound_messages(updates, 0);
        assert_eq!(next, 44);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].chat, "7");
        assert_eq!(messages[0].display_name.as_deref(), Some("Ana"));
        assert_eq!(messages[0].text, "/start");
    }

    #[test]
    fn test_error_response_without_result() {
        let body = r#"{"ok": false, "error_code": 401, "description": "Unauthorized"}"#;
        let response: ApiResponse<Vec<Update>> = serde_json::from_str(body).unwrap();
        let err = response.into_result("getUpdates").unwrap_err();
        assert!(err.to_string().contains("Unauthorized"));
    }

    #[test]
    fn test_empty_batch_keeps_offset() {
        let (next, messages) = inbound_messages(Vec::new(), 17);
        assert_eq!(next, 17);
        assert!(messages.is_empty());
    }

    #[test]
    fn test_long_text_is_split() {
        let text = "línea\n".repeat(1000);
        let chunks = split_message(&text, 100);
        assert!(chunks.iter().all(|c| c.chars().count() <= 100));
        assert_eq!(chunks.concat(), text);
    }
}
