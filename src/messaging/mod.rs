pub mod format;
pub mod telegram;

use async_trait::async_trait;
use crate::error::BotError;

pub use telegram::TelegramClient;

/// An inbound text from a learner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    /// Opaque chat handle; doubles as the learner id.
    pub chat: String,
    pub display_name: Option<String>,
    pub text: String,
}

/// Outbound messaging transport.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Send an HTML-formatted text message.
    async fn send_text(&self, chat: &str, text: &str) -> Result<(), BotError>;

    async fn send_typing(&self, chat: &str) -> Result<(), BotError>;
}
