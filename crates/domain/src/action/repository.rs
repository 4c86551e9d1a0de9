use super::{ActionKind, ActionRecord, NewActionRecord};
use crate::DomainError;
use crate::report::HistoryEntry;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Append-only log of maintenance actions
///
/// The store performs no domain validation; callers check scooter numbers
/// against the fleet before appending. Every method is a single atomic
/// statement committed before it returns.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait ActionLogRepository: Send + Sync {
    /// Persist a new record and return its id
    async fn append(&self, record: NewActionRecord) -> Result<i64, DomainError>;

    /// Every record, in insertion order
    async fn find_all(&self) -> Result<Vec<ActionRecord>, DomainError>;

    /// Records whose timestamp text starts with the given day
    async fn find_by_date(&self, day: NaiveDate) -> Result<Vec<ActionRecord>, DomainError>;

    /// Distinct scooter numbers with at least one record of this kind
    async fn find_scooters_by_action(&self, action: ActionKind) -> Result<Vec<i64>, DomainError>;

    /// Full trail for one scooter, in insertion order
    async fn find_by_scooter(&self, scooter_number: i64) -> Result<Vec<HistoryEntry>, DomainError>;

    /// Delete every record and return how many were removed
    async fn clear(&self) -> Result<u64, DomainError>;
}
