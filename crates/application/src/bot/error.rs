use super::texts;
use crate::intent::InputHint;
use domain::DomainError;
use domain::export::ExportError;
use thiserror::Error;

/// Why an intent could not be carried out. Every variant maps to a fixed
/// user-facing message; none of them stops the process.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("Invalid input: {0:?}")]
    InvalidInput(InputHint),

    #[error("User {0} is not an admin")]
    PermissionDenied(i64),

    #[error("Storage failure: {0}")]
    Storage(#[from] DomainError),

    #[error("Export failure: {0}")]
    Export(#[from] ExportError),
}

impl BotError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidInput(InputHint::InvalidScooterNumber) => texts::INVALID_NUMBER,
            Self::InvalidInput(InputHint::HistoryUsage) => texts::HISTORY_USAGE,
            Self::InvalidInput(InputHint::ReportUsage) => texts::REPORT_USAGE,
            Self::PermissionDenied(_) => texts::ADMIN_ONLY,
            Self::Storage(_) | Self::Export(_) => texts::GENERIC_FAILURE,
        }
    }
}
