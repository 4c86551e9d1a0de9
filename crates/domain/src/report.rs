use crate::action::{ActionKind, ActionRecord, format_date};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Column headers of every exported report, in order
pub const REPORT_COLUMNS: [&str; 4] = ["scooter_number", "user_id", "action", "datetime"];

/// One exported row: `(scooter_number, user_id, action, datetime)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub scooter_number: i64,
    pub user_id: i64,
    pub action: ActionKind,
    pub datetime: NaiveDateTime,
}

impl From<ActionRecord> for ReportRow {
    fn from(record: ActionRecord) -> Self {
        Self {
            scooter_number: record.scooter_number,
            user_id: record.user_id,
            action: record.action,
            datetime: record.recorded_at,
        }
    }
}

/// One step of a scooter's audit trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub action: ActionKind,
    pub datetime: NaiveDateTime,
    pub user_id: i64,
}

/// Result of a report query. `Empty` is a first-class outcome, not an error:
/// callers render a "no records" message instead of exporting an empty table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome<T> {
    Rows(Vec<T>),
    Empty,
}

impl<T> ReportOutcome<T> {
    pub fn from_rows(rows: Vec<T>) -> Self {
        if rows.is_empty() {
            Self::Empty
        } else {
            Self::Rows(rows)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn rows(&self) -> &[T] {
        match self {
            Self::Rows(rows) => rows,
            Self::Empty => &[],
        }
    }
}

/// Which spreadsheet variant is being produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Full,
    Daily(NaiveDate),
}

impl ReportKind {
    pub fn file_name(&self) -> String {
        match self {
            Self::Full => "rapor.xlsx".to_string(),
            Self::Daily(day) => format!("rapor_gunluk_{}.xlsx", format_date(day)),
        }
    }
}
