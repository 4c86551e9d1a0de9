pub mod recording_messenger;

pub use recording_messenger::{RecordingMessenger, SentItem};
