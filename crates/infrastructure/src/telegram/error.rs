use domain::messaging::MessengerError;
use thiserror::Error;

/// Errors specific to the Telegram Bot API client.
///
/// Converted into [`MessengerError`] at the trait boundary.
#[derive(Debug, Error)]
pub enum TelegramError {
    /// An HTTP-level transport error occurred.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The Bot API answered with `ok: false`.
    #[error("Telegram API error: {0}")]
    Api(String),

    /// The Bot API answered with HTTP 429.
    #[error("rate limited by Telegram")]
    RateLimited,
}

impl From<TelegramError> for MessengerError {
    fn from(err: TelegramError) -> Self {
        match err {
            TelegramError::Http(e) => MessengerError::Transport(e.to_string()),
            TelegramError::Api(msg) => MessengerError::Rejected(msg),
            TelegramError::RateLimited => MessengerError::RateLimited,
        }
    }
}
