use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::time::Duration;
use crate::config::TelegramConfig;
use crate::error::BotError;
use crate::messaging::{InboundMessage, Messenger};

/// Telegram caps a message at 4096 characters.
const MAX_MESSAGE_CHARS: usize = 4000;

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'static str,
    disable_web_page_preview: bool,
}

#[derive(Serialize)]
struct SendChatAction<'a> {
    chat_id: &'a str,
    action: &'static str,
}

#[derive(Serialize)]
struct GetUpdates {
    offset: i64,
    timeout: u64,
    allowed_updates: [&'static str; 1],
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

impl<T> ApiResponse<T> {
    /// The payload of a successful call, or the API's error description.
    pub(crate) fn into_result(self, method: &'static str) -> Result<T, BotError> {
        match self.result {
            Some(result) if self.ok => Ok(result),
            _ => Err(BotError::new(
                self.description
                    .unwrap_or_else(|| "Telegram API call failed".to_string()),
                "messaging",
            )
            .with_context(method)),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct Update {
    update_id: i64,
    #[serde(default)]
    message: Option<Message>,
}

#[derive(Debug, Deserialize)]
struct Message {
    chat: Chat,
    #[serde(default)]
    from: Option<User>,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Chat {
    id: i64,
}

#[derive(Debug, Deserialize)]
struct User {
    #[serde(default)]
    first_name: Option<String>,
}

/// Bot API client: outbound sends plus long-polling for inbound messages.
pub struct TelegramClient {
    client: Client,
    base_url: String,
    poll_timeout_secs: u64,
}

impl TelegramClient {
    pub fn from_config(config: &TelegramConfig) -> Result<Self, BotError> {
        if config.token.trim().is_empty() {
            return Err(BotError::new(
                "Telegram token missing",
                "config"
            ).with_context(format!("set {}", crate::config::ENV_TELEGRAM_TOKEN)));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(config.poll_timeout_secs + 15))
            .build()?;
        Ok(TelegramClient {
            client,
            base_url: format!("{}/bot{}", config.api_base.trim_end_matches('/'), config.token),
            poll_timeout_secs: config.poll_timeout_secs,
        })
    }

    async fn call<B: Serialize, T: for<'de> Deserialize<'de>>(
        &self,
        method: &'static str,
        body: &B,
    ) -> Result<T, BotError> {
        let response: ApiResponse<T> = self
            .client
            .post(format!("{}/{}", self.base_url, method))
            .json(body)
            .send()
            .await
            .map_err(|e| BotError::from(e).with_context(method))?
            .json()
            .await
            .map_err(|e| BotError::from(e).with_context(method))?;

        response.into_result(method)
    }

    /// Long-poll for text messages after `offset`.
    /// Returns the next offset to use and the messages received.
    pub async fn poll(&self, offset: i64) -> Result<(i64, Vec<InboundMessage>), BotError> {
        let updates: Vec<Update> = self
            .call(
                "getUpdates",
                &GetUpdates {
                    offset,
                    timeout: self.poll_timeout_secs,
                    allowed_updates: ["message"],
                },
            )
            .await?;

        Ok(inbound_messages(updates, offset))
    }
}

/// Next offset plus the text messages in a batch of updates.
/// Non-text updates still advance the offset.
pub(crate) fn inbound_messages(updates: Vec<Update>, offset: i64) -> (i64, Vec<InboundMessage>) {
    let next_offset = updates
        .iter()
        .map(|u| u.update_id + 1)
        .max()
        .unwrap_or(offset);

    let messages = updates
        .into_iter()
        .filter_map(|u| u.message)
        .filter_map(|m| {
            let text = m.text?;
            Some(InboundMessage {
                chat: m.chat.id.to_string(),
                display_name: m.from.and_then(|f| f.first_name),
                text,
            })
        })
        .collect();

    (next_offset, messages)
}

/// Split on line boundaries so no chunk exceeds the API limit.
pub fn split_message(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for line in text.split_inclusive('\n') {
        if current.chars().count() + line.chars().count() > max_chars && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
        }
        if line.chars().count() > max_chars {
            let chars: Vec<char> = line.chars().collect();
            for piece in chars.chunks(max_chars) {
                chunks.push(piece.iter().collect());
            }
            continue;
        }
        current.push_str(line);
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

#[async_trait]
impl Messenger for TelegramClient {
    async fn send_text(&self, chat: &str, text: &str) -> Result<(), BotError> {
        for chunk in split_message(text, MAX_MESSAGE_CHARS) {
            let _: serde_json::Value = self
                .call(
                    "sendMessage",
                    &SendMessage {
                        chat_id: chat,
                        text: &chunk,
                        parse_mode: "HTML",
                        disable_web_page_preview: true,
                    },
                )
                .await
                .map_err(|e| e.with_learner(chat))?;
        }
        Ok(())
    }

    async fn send_typing(&self, chat: &str) -> Result<(), BotError> {
        let _: bool = self
            .call("sendChatAction", &SendChatAction { chat_id: chat, action: "typing" })
            .await
            .map_err(|e| e.with_learner(chat))?;
        Ok(())
    }
}
