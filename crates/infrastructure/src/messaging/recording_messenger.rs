use async_trait::async_trait;
use domain::export::ExportedReport;
use domain::messaging::{Keyboard, Messenger, MessengerError};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

/// Everything a [`RecordingMessenger`] was asked to deliver
#[derive(Debug, Clone, PartialEq)]
pub enum SentItem {
    Message {
        chat_id: i64,
        text: String,
        keyboard: Option<Keyboard>,
    },
    Document {
        chat_id: i64,
        file_name: String,
        caption: String,
        size: usize,
    },
    CallbackAnswer {
        callback_id: String,
        text: Option<String>,
        show_alert: bool,
    },
    Deleted {
        chat_id: i64,
        message_id: i64,
    },
}

/// In-process messenger that records outbound traffic instead of sending it
#[derive(Clone, Default)]
pub struct RecordingMessenger {
    pub sent: Arc<Mutex<Vec<SentItem>>>,
    pub should_fail: Arc<AtomicBool>,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sent(&self) -> Vec<SentItem> {
        self.sent.lock().await.clone()
    }

    /// Texts of every plain message, in order
    pub async fn texts(&self) -> Vec<String> {
        self.sent
            .lock()
            .await
            .iter()
            .filter_map(|item| match item {
                SentItem::Message { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    async fn record(&self, item: SentItem) -> Result<(), MessengerError> {
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(MessengerError::Transport("simulated failure".to_string()));
        }
        self.sent.lock().await.push(item);
        Ok(())
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<(), MessengerError> {
        self.record(SentItem::Message {
            chat_id,
            text: text.to_string(),
            keyboard: keyboard.cloned(),
        })
        .await
    }

    async fn send_document(
        &self,
        chat_id: i64,
        document: &ExportedReport,
        caption: &str,
    ) -> Result<(), MessengerError> {
        self.record(SentItem::Document {
            chat_id,
            file_name: document.file_name.clone(),
            caption: caption.to_string(),
            size: document.bytes.len(),
        })
        .await
    }

    async fn answer_callback(
        &self,
        callback_id: &str,
        text: Option<&str>,
        show_alert: bool,
    ) -> Result<(), MessengerError> {
        self.record(SentItem::CallbackAnswer {
            callback_id: callback_id.to_string(),
            text: text.map(str::to_string),
            show_alert,
        })
        .await
    }

    async fn delete_message(&self, chat_id: i64, message_id: i64) -> Result<(), MessengerError> {
        self.record(SentItem::Deleted {
            chat_id,
            message_id,
        })
        .await
    }
}
