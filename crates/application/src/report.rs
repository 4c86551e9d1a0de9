use chrono::NaiveDate;
use domain::{ActionKind, ActionLogRepository, DomainError, HistoryEntry, ReportOutcome, ReportRow};
use std::sync::Arc;
use tracing::debug;

/// Read-side queries over the action log, shaped for reports
pub struct ReportBuilder {
    log: Arc<dyn ActionLogRepository>,
}

impl ReportBuilder {
    pub fn new(log: Arc<dyn ActionLogRepository>) -> Self {
        Self { log }
    }

    /// Every record, oldest first
    pub async fn full_report(&self) -> Result<ReportOutcome<ReportRow>, DomainError> {
        let records = self.log.find_all().await?;
        debug!(count = records.len(), "Built full report");
        Ok(ReportOutcome::from_rows(
            records.into_iter().map(ReportRow::from).collect(),
        ))
    }

    /// Records of one calendar day, oldest first
    pub async fn daily_report(
        &self,
        day: NaiveDate,
    ) -> Result<ReportOutcome<ReportRow>, DomainError> {
        let records = self.log.find_by_date(day).await?;
        debug!(%day, count = records.len(), "Built daily report");
        Ok(ReportOutcome::from_rows(
            records.into_iter().map(ReportRow::from).collect(),
        ))
    }

    /// Scooters that ever received this action, each listed once
    pub async fn status_list(&self, action: ActionKind) -> Result<ReportOutcome<i64>, DomainError> {
        let mut scooters = self.log.find_scooters_by_action(action).await?;
        scooters.sort_unstable();
        scooters.dedup();
        Ok(ReportOutcome::from_rows(scooters))
    }

    pub async fn history(
        &self,
        scooter_number: i64,
    ) -> Result<ReportOutcome<HistoryEntry>, DomainError> {
        let entries = self.log.find_by_scooter(scooter_number).await?;
        Ok(ReportOutcome::from_rows(entries))
    }
}
