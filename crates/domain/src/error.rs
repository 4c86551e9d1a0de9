use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Scooter number {number} is outside the fleet range {first}-{last}")]
    ScooterOutOfRange { number: i64, first: i64, last: i64 },

    #[error("Invalid fleet configuration: {0}")]
    InvalidFleet(String),

    #[error("Unknown action kind: {0}")]
    UnknownAction(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
