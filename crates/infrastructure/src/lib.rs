//! Infrastructure layer - External integrations

pub mod config;
pub mod database;
pub mod export;
pub mod messaging;
pub mod telegram;

pub use database::SqliteActionLog;
pub use export::XlsxReportExporter;
pub use messaging::{RecordingMessenger, SentItem};
pub use telegram::{TelegramClient, TelegramError, Update};
