pub mod sqlite_action_log;

pub use sqlite_action_log::SqliteActionLog;
