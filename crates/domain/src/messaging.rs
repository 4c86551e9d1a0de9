use crate::export::ExportedReport;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MessengerError {
    #[error("Transport failed: {0}")]
    Transport(String),
    #[error("Platform rejected request: {0}")]
    Rejected(String),
    #[error("Rate limited by platform")]
    RateLimited,
}

/// A labeled trigger that maps back to a router token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardButton {
    pub label: String,
    pub token: String,
}

impl KeyboardButton {
    pub fn new(label: impl Into<String>, token: impl ToString) -> Self {
        Self {
            label: label.into(),
            token: token.to_string(),
        }
    }
}

/// Inline keyboard attached to a message, row by row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyboard {
    pub rows: Vec<Vec<KeyboardButton>>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(mut self, buttons: Vec<KeyboardButton>) -> Self {
        self.rows.push(buttons);
        self
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().flatten().map(|b| b.token.as_str())
    }
}

/// Outbound side of the chat platform
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Post a message, optionally with an inline keyboard
    async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<(), MessengerError>;

    /// Upload a file with a caption
    async fn send_document(
        &self,
        chat_id: i64,
        document: &ExportedReport,
        caption: &str,
    ) -> Result<(), MessengerError>;

    /// Acknowledge a button click, optionally with a toast or alert
    async fn answer_callback(
        &self,
        callback_id: &str,
        text: Option<&str>,
        show_alert: bool,
    ) -> Result<(), MessengerError>;

    async fn delete_message(&self, chat_id: i64, message_id: i64) -> Result<(), MessengerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_builder_keeps_row_order() {
        let keyboard = Keyboard::new()
            .row(vec![KeyboardButton::new("a", "page_1")])
            .row(vec![
                KeyboardButton::new("b", "page_2"),
                KeyboardButton::new("c", 3),
            ]);
        assert_eq!(keyboard.rows.len(), 2);
        assert_eq!(
            keyboard.tokens().collect::<Vec<_>>(),
            vec!["page_1", "page_2", "3"]
        );
    }
}
