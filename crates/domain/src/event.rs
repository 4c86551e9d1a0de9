use serde::{Deserialize, Serialize};

/// Platform-neutral view of one inbound update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundEvent {
    /// Identity of the person acting, supplied per event by the platform
    pub sender_id: i64,
    pub chat_id: i64,
    pub payload: EventPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventPayload {
    /// Free text typed by the user, commands included
    Text { text: String },
    /// Inline keyboard click
    Button {
        callback_id: String,
        token: String,
        /// Message that carried the keyboard, if the platform still exposes it
        message_id: Option<i64>,
    },
}

impl InboundEvent {
    pub fn text(sender_id: i64, chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            sender_id,
            chat_id,
            payload: EventPayload::Text { text: text.into() },
        }
    }

    pub fn button(
        sender_id: i64,
        chat_id: i64,
        callback_id: impl Into<String>,
        token: impl Into<String>,
        message_id: Option<i64>,
    ) -> Self {
        Self {
            sender_id,
            chat_id,
            payload: EventPayload::Button {
                callback_id: callback_id.into(),
                token: token.into(),
                message_id,
            },
        }
    }

    pub fn callback_id(&self) -> Option<&str> {
        match &self.payload {
            EventPayload::Button { callback_id, .. } => Some(callback_id),
            EventPayload::Text { .. } => None,
        }
    }
}
