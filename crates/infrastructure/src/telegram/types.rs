//! Subset of the Telegram Bot API object model used by the bot

use domain::messaging::Keyboard;
use domain::{EventPayload, InboundEvent};
use serde::{Deserialize, Serialize};

/// Incoming update delivered to the webhook
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub callback_query: Option<CallbackQuery>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    #[serde(default)]
    pub from: Option<User>,
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    /// Absent when the originating message is too old
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub data: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

impl Update {
    /// Reduce the update to the platform-neutral event the router understands.
    ///
    /// Returns `None` for update kinds the bot does not handle (edited
    /// messages, stickers, anonymous channel posts, buttons without data).
    pub fn into_event(self) -> Option<InboundEvent> {
        if let Some(query) = self.callback_query {
            let token = query.data?;
            let (chat_id, message_id) = match &query.message {
                Some(m) => (m.chat.id, Some(m.message_id)),
                None => (query.from.id, None),
            };
            return Some(InboundEvent {
                sender_id: query.from.id,
                chat_id,
                payload: EventPayload::Button {
                    callback_id: query.id,
                    token,
                    message_id,
                },
            });
        }

        let message = self.message?;
        let sender = message.from?;
        let text = message.text?;
        Some(InboundEvent {
            sender_id: sender.id,
            chat_id: message.chat.id,
            payload: EventPayload::Text { text },
        })
    }
}

/// Envelope of every Bot API response
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error_code: Option<i64>,
    pub result: Option<T>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InlineKeyboardButton {
    pub text: String,
    pub callback_data: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl From<&Keyboard> for InlineKeyboardMarkup {
    fn from(keyboard: &Keyboard) -> Self {
        Self {
            inline_keyboard: keyboard
                .rows
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|b| InlineKeyboardButton {
                            text: b.label.clone(),
                            callback_data: b.token.clone(),
                        })
                        .collect()
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: i64,
    pub text: &'a str,
    pub parse_mode: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

#[derive(Debug, Serialize)]
pub struct AnswerCallbackQueryRequest<'a> {
    pub callback_query_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<&'a str>,
    pub show_alert: bool,
}

#[derive(Debug, Serialize)]
pub struct DeleteMessageRequest {
    pub chat_id: i64,
    pub message_id: i64,
}

#[derive(Debug, Serialize)]
pub struct SetWebhookRequest<'a> {
    pub url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_token: Option<&'a str>,
    pub allowed_updates: [&'static str; 2],
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::messaging::KeyboardButton;
    use serde_json::json;

    #[test]
    fn test_text_message_becomes_text_event() {
        let update: Update = serde_json::from_value(json!({
            "update_id": 1,
            "message": {
                "message_id": 10,
                "date": 1735725600,
                "from": {"id": 42, "is_bot": false, "first_name": "Ali"},
                "chat": {"id": 4242, "type": "private"},
                "text": "/s105"
            }
        }))
        .unwrap();

        let event = update.into_event().unwrap();
        assert_eq!(event, InboundEvent::text(42, 4242, "/s105"));
    }

    #[test]
    fn test_callback_query_becomes_button_event() {
        let update: Update = serde_json::from_value(json!({
            "update_id": 2,
            "callback_query": {
                "id": "cb-1",
                "from": {"id": 42, "is_bot": false, "first_name": "Ali"},
                "chat_instance": "x",
                "message": {
                    "message_id": 11,
                    "date": 1735725600,
                    "chat": {"id": 4242, "type": "private"}
                },
                "data": "seen_105"
            }
        }))
        .unwrap();

        let event = update.into_event().unwrap();
        assert_eq!(
            event,
            InboundEvent::button(42, 4242, "cb-1", "seen_105", Some(11))
        );
    }

    #[test]
    fn test_callback_without_message_replies_to_sender() {
        let update: Update = serde_json::from_value(json!({
            "update_id": 3,
            "callback_query": {
                "id": "cb-2",
                "from": {"id": 7},
                "data": "page_2"
            }
        }))
        .unwrap();

        let event = update.into_event().unwrap();
        assert_eq!(event.chat_id, 7);
        assert_eq!(event.callback_id(), Some("cb-2"));
    }

    #[test]
    fn test_unsupported_updates_are_dropped() {
        let sticker: Update = serde_json::from_value(json!({
            "update_id": 4,
            "message": {
                "message_id": 12,
                "from": {"id": 42},
                "chat": {"id": 4242},
                "sticker": {"file_id": "abc"}
            }
        }))
        .unwrap();
        assert!(sticker.into_event().is_none());

        let edited: Update =
            serde_json::from_value(json!({"update_id": 5, "edited_message": {}})).unwrap();
        assert!(edited.into_event().is_none());
    }

    #[test]
    fn test_keyboard_serializes_as_inline_markup() {
        let keyboard = Keyboard::new().row(vec![
            KeyboardButton::new("⬅️", "page_0"),
            KeyboardButton::new("➡️", "page_2"),
        ]);
        let markup = serde_json::to_value(InlineKeyboardMarkup::from(&keyboard)).unwrap();
        assert_eq!(
            markup,
            json!({"inline_keyboard": [[
                {"text": "⬅️", "callback_data": "page_0"},
                {"text": "➡️", "callback_data": "page_2"}
            ]]})
        );
    }

    #[test]
    fn test_error_envelope_has_no_result() {
        let response: ApiResponse<serde_json::Value> = serde_json::from_value(json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: chat not found"
        }))
        .unwrap();
        assert!(!response.ok);
        assert_eq!(response.error_code, Some(400));
        assert_eq!(
            response.description.as_deref(),
            Some("Bad Request: chat not found")
        );
        assert!(response.result.is_none());
    }

    #[test]
    fn test_success_envelope_carries_result() {
        let response: ApiResponse<bool> =
            serde_json::from_value(json!({ "ok": true, "result": true })).unwrap();
        assert!(response.ok);
        assert_eq!(response.result, Some(true));
        assert!(response.description.is_none());
    }
}
