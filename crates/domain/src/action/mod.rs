mod kind;
mod record;
mod repository;

pub use kind::ActionKind;
pub use record::{
    ActionRecord, DATE_FORMAT, NewActionRecord, TIMESTAMP_FORMAT, format_date, format_timestamp,
    parse_date, parse_timestamp,
};
#[cfg(any(test, feature = "mocks"))]
pub use repository::MockActionLogRepository;
pub use repository::ActionLogRepository;
