use async_trait::async_trait;
use chrono::NaiveDate;
use domain::action::{ActionKind, ActionLogRepository, ActionRecord, NewActionRecord};
use domain::action::{format_date, format_timestamp, parse_timestamp};
use domain::{DomainError, HistoryEntry};
use sqlx::{Pool, Sqlite, sqlite::SqlitePoolOptions};
use tracing::{debug, warn};

/// Action log backed by a single SQLite table.
///
/// Timestamps are stored as fixed-width text so that the daily filter is a
/// plain prefix match on the `datetime` column.
#[derive(Clone)]
pub struct SqliteActionLog {
    pool: Pool<Sqlite>,
}

#[derive(sqlx::FromRow)]
struct RecordRow {
    id: i64,
    scooter_number: i64,
    user_id: i64,
    action: String,
    datetime: String,
}

impl TryFrom<RecordRow> for ActionRecord {
    type Error = DomainError;

    fn try_from(row: RecordRow) -> Result<Self, Self::Error> {
        Ok(ActionRecord {
            id: row.id,
            scooter_number: row.scooter_number,
            user_id: row.user_id,
            action: row.action.parse()?,
            recorded_at: parse_timestamp(&row.datetime)?,
        })
    }
}

#[derive(sqlx::FromRow)]
struct HistoryRow {
    action: String,
    datetime: String,
    user_id: i64,
}

impl TryFrom<HistoryRow> for HistoryEntry {
    type Error = DomainError;

    fn try_from(row: HistoryRow) -> Result<Self, Self::Error> {
        Ok(HistoryEntry {
            action: row.action.parse()?,
            datetime: parse_timestamp(&row.datetime)?,
            user_id: row.user_id,
        })
    }
}

fn storage_error(e: sqlx::Error) -> DomainError {
    warn!("Action log query failed: {}", e);
    DomainError::StorageUnavailable(e.to_string())
}

fn convert_rows<R, T>(rows: Vec<R>) -> Result<Vec<T>, DomainError>
where
    T: TryFrom<R, Error = DomainError>,
{
    rows.into_iter().map(T::try_from).collect()
}

impl SqliteActionLog {
    pub async fn new(connection_string: &str) -> anyhow::Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1) // SQLite is single-writer
            .idle_timeout(None)
            .max_lifetime(None) // keeps `sqlite::memory:` databases alive
            .connect(connection_string)
            .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS records (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                scooter_number INTEGER,
                user_id INTEGER,
                action TEXT,
                datetime TEXT
            )",
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    pub async fn count(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM records")
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error)
    }
}

#[async_trait]
impl ActionLogRepository for SqliteActionLog {
    async fn append(&self, record: NewActionRecord) -> Result<i64, DomainError> {
        let result = sqlx::query(
            "INSERT INTO records (scooter_number, user_id, action, datetime) VALUES (?, ?, ?, ?)",
        )
        .bind(record.scooter_number)
        .bind(record.user_id)
        .bind(record.action.as_str())
        .bind(format_timestamp(&record.recorded_at))
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        let id = result.last_insert_rowid();
        debug!(id, scooter = record.scooter_number, action = %record.action, "Action recorded");
        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<ActionRecord>, DomainError> {
        let rows: Vec<RecordRow> = sqlx::query_as(
            "SELECT id, scooter_number, user_id, action, datetime FROM records ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;
        convert_rows(rows)
    }

    async fn find_by_date(&self, day: NaiveDate) -> Result<Vec<ActionRecord>, DomainError> {
        let rows: Vec<RecordRow> = sqlx::query_as(
            "SELECT id, scooter_number, user_id, action, datetime FROM records
             WHERE datetime LIKE ? ORDER BY id ASC",
        )
        .bind(format!("{}%", format_date(&day)))
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;
        convert_rows(rows)
    }

    async fn find_scooters_by_action(&self, action: ActionKind) -> Result<Vec<i64>, DomainError> {
        sqlx::query_scalar(
            "SELECT DISTINCT scooter_number FROM records WHERE action = ? ORDER BY scooter_number ASC",
        )
        .bind(action.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)
    }

    async fn find_by_scooter(&self, scooter_number: i64) -> Result<Vec<HistoryEntry>, DomainError> {
        let rows: Vec<HistoryRow> = sqlx::query_as(
            "SELECT action, datetime, user_id FROM records WHERE scooter_number = ? ORDER BY id ASC",
        )
        .bind(scooter_number)
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;
        convert_rows(rows)
    }

    async fn clear(&self) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM records")
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(result.rows_affected())
    }
}
