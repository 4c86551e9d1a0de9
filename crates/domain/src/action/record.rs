use super::ActionKind;
use crate::error::{DomainError, Result};
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Fixed-width storage format. Calendar-day filtering relies on the
/// `YYYY-MM-DD` prefix of this representation.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Day format used as the prefix of [`TIMESTAMP_FORMAT`]
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One persisted maintenance event. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub id: i64,
    pub scooter_number: i64,
    pub user_id: i64,
    pub action: ActionKind,
    pub recorded_at: NaiveDateTime,
}

/// A record that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewActionRecord {
    pub scooter_number: i64,
    pub user_id: i64,
    pub action: ActionKind,
    pub recorded_at: NaiveDateTime,
}

impl NewActionRecord {
    /// Sub-second precision is dropped so the stored text stays fixed-width.
    pub fn new(
        scooter_number: i64,
        user_id: i64,
        action: ActionKind,
        recorded_at: NaiveDateTime,
    ) -> Self {
        Self {
            scooter_number,
            user_id,
            action,
            recorded_at: recorded_at.with_nanosecond(0).unwrap_or(recorded_at),
        }
    }

    pub fn with_id(self, id: i64) -> ActionRecord {
        ActionRecord {
            id,
            scooter_number: self.scooter_number,
            user_id: self.user_id,
            action: self.action,
            recorded_at: self.recorded_at,
        }
    }
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

pub fn format_date(day: &NaiveDate) -> String {
    day.format(DATE_FORMAT).to_string()
}

/// Accepts the fixed-width format as well as fractional seconds
/// (`2025-01-01T10:00:00.123456`) written by older deployments.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    raw.parse::<NaiveDateTime>()
        .map_err(|e| DomainError::InvalidTimestamp(format!("{raw}: {e}")))
}

pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|e| DomainError::InvalidTimestamp(format!("{raw}: {e}")))
}
