use domain::export::ExportedReport;
use domain::messaging::Keyboard;

/// One outbound effect of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Message {
        text: String,
        keyboard: Option<Keyboard>,
    },
    Document {
        report: ExportedReport,
        caption: String,
    },
    /// Answer to a button click (toast, or alert when `alert` is set).
    /// Sent as a plain message when the event was typed text.
    Notice { text: String, alert: bool },
    /// Remove the message that carried the clicked keyboard
    DeleteOrigin,
}

/// Ordered list of replies produced for one event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub replies: Vec<Reply>,
}

impl Response {
    pub fn message(text: impl Into<String>) -> Self {
        Self::default().and(Reply::Message {
            text: text.into(),
            keyboard: None,
        })
    }

    pub fn with_keyboard(text: impl Into<String>, keyboard: Keyboard) -> Self {
        Self::default().and(Reply::Message {
            text: text.into(),
            keyboard: Some(keyboard),
        })
    }

    pub fn document(report: ExportedReport, caption: impl Into<String>) -> Self {
        Self::default().and(Reply::Document {
            report,
            caption: caption.into(),
        })
    }

    pub fn notice(text: impl Into<String>, alert: bool) -> Self {
        Self::default().and(Reply::Notice {
            text: text.into(),
            alert,
        })
    }

    pub fn and(mut self, reply: Reply) -> Self {
        self.replies.push(reply);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.replies.is_empty()
    }

    /// The first notice, if any
    pub fn notice_text(&self) -> Option<(&str, bool)> {
        self.replies.iter().find_map(|r| match r {
            Reply::Notice { text, alert } => Some((text.as_str(), *alert)),
            _ => None,
        })
    }

    /// Texts of every message and notice, in order
    pub fn texts(&self) -> Vec<&str> {
        self.replies
            .iter()
            .filter_map(|r| match r {
                Reply::Message { text, .. } | Reply::Notice { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}
