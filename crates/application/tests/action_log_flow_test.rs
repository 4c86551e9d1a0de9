//! End-to-end flows against an in-memory SQLite action log

use application::bot::texts;
use application::{AdminGate, BotError, BotService, Intent, ReportBuilder};
use chrono::NaiveDate;
use domain::action::parse_timestamp;
use domain::{ActionKind, ActionLogRepository, FixedClock, InboundEvent, NewActionRecord};
use infrastructure::{SqliteActionLog, XlsxReportExporter};
use std::sync::Arc;

const ADMIN: i64 = 1060590354;
const USER: i64 = 42;

async fn setup() -> (Arc<SqliteActionLog>, BotService) {
    let log = Arc::new(SqliteActionLog::new("sqlite::memory:").await.unwrap());
    let bot = BotService::new(
        log.clone(),
        Arc::new(XlsxReportExporter::new()),
        AdminGate::new([ADMIN]),
    )
    .with_clock(Arc::new(FixedClock(
        parse_timestamp("2025-01-01T12:30:00").unwrap(),
    )));
    (log, bot)
}

fn record(number: i64, action: ActionKind, ts: &str) -> NewActionRecord {
    NewActionRecord::new(number, USER, action, parse_timestamp(ts).unwrap())
}

#[tokio::test]
async fn test_daily_report_matches_only_its_day() {
    let (log, _) = setup().await;
    log.append(record(105, ActionKind::Seen, "2025-01-01T10:00:00"))
        .await
        .unwrap();

    let reports = ReportBuilder::new(log.clone());
    let jan_1 = reports
        .daily_report(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
        .await
        .unwrap();
    assert_eq!(jan_1.rows().len(), 1);
    let row = &jan_1.rows()[0];
    assert_eq!(row.scooter_number, 105);
    assert_eq!(row.user_id, USER);
    assert_eq!(row.action, ActionKind::Seen);
    assert_eq!(
        row.datetime,
        parse_timestamp("2025-01-01T10:00:00").unwrap()
    );

    let jan_2 = reports
        .daily_report(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap())
        .await
        .unwrap();
    assert!(jan_2.is_empty());
}

#[tokio::test]
async fn test_non_admin_clear_leaves_log_unchanged() {
    let (log, bot) = setup().await;
    log.append(record(110, ActionKind::Repair, "2025-01-01T10:00:00"))
        .await
        .unwrap();

    let result = bot.execute(USER, Intent::AdminClear).await;
    assert!(matches!(result, Err(BotError::PermissionDenied(USER))));
    assert_eq!(log.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_admin_clear_is_repeatable() {
    let (log, bot) = setup().await;
    for number in 101..=105 {
        log.append(record(number, ActionKind::Seen, "2025-01-01T10:00:00"))
            .await
            .unwrap();
    }

    let first = bot.execute(ADMIN, Intent::AdminClear).await.unwrap();
    assert_eq!(first.texts(), vec![texts::cleared(5)]);
    assert!(log.find_all().await.unwrap().is_empty());

    let second = bot.execute(ADMIN, Intent::AdminClear).await.unwrap();
    assert_eq!(second.texts(), vec![texts::cleared(0)]);
}

#[tokio::test]
async fn test_battery_list_lists_each_scooter_once() {
    let (log, bot) = setup().await;
    for (number, action) in [
        (120, ActionKind::Battery),
        (105, ActionKind::Battery),
        (120, ActionKind::Battery),
        (130, ActionKind::Seen),
    ] {
        log.append(record(number, action, "2025-01-01T10:00:00"))
            .await
            .unwrap();
    }

    let response = bot
        .execute(ADMIN, Intent::AdminStatusList(ActionKind::Battery))
        .await
        .unwrap();
    let text = response.texts()[0];
    assert_eq!(text.matches("🛵 120").count(), 1);
    assert!(text.contains("🛵 105\n🛵 120\n"));
    assert!(!text.contains("130"));
}

#[tokio::test]
async fn test_recorded_action_is_last_in_history() {
    let (log, bot) = setup().await;
    log.append(record(150, ActionKind::Seen, "2024-12-31T08:00:00"))
        .await
        .unwrap();

    let event = InboundEvent::button(USER, USER, "cb", "repair_150", Some(1));
    bot.handle(&event).await;

    let history = log.find_by_scooter(150).await.unwrap();
    assert_eq!(history.len(), 2);
    let last = history.last().unwrap();
    assert_eq!(last.action, ActionKind::Repair);
    assert_eq!(last.user_id, USER);
    assert_eq!(last.datetime, parse_timestamp("2025-01-01T12:30:00").unwrap());
}

#[tokio::test]
async fn test_full_report_exports_workbook() {
    let (log, bot) = setup().await;
    log.append(record(101, ActionKind::Seen, "2025-01-01T10:00:00"))
        .await
        .unwrap();

    let response = bot
        .handle(&InboundEvent::text(ADMIN, ADMIN, "/report"))
        .await;
    let application::Reply::Document { report, .. } = &response.replies[0] else {
        panic!("expected a document, got {response:?}");
    };
    assert_eq!(report.file_name, "rapor.xlsx");
    assert!(report.bytes.starts_with(b"PK"));
}

#[tokio::test]
async fn test_admin_report_for_a_given_day() {
    let (log, bot) = setup().await;
    log.append(record(105, ActionKind::Seen, "2025-01-01T10:00:00"))
        .await
        .unwrap();

    let jan_1 = bot
        .handle(&InboundEvent::text(ADMIN, ADMIN, "/report 2025-01-01"))
        .await;
    let application::Reply::Document { report, caption } = &jan_1.replies[0] else {
        panic!("expected a document, got {jan_1:?}");
    };
    assert_eq!(report.file_name, "rapor_gunluk_2025-01-01.xlsx");
    assert_eq!(caption, texts::DAILY_REPORT_CAPTION);
    assert!(report.bytes.starts_with(b"PK"));

    let jan_2 = bot
        .handle(&InboundEvent::text(ADMIN, ADMIN, "/report 2025-01-02"))
        .await;
    assert_eq!(jan_2.texts(), vec!["📝 2025-01-02 tarihinde kayıt yok."]);
}

#[tokio::test]
async fn test_report_for_a_day_is_admin_only() {
    let (log, bot) = setup().await;
    log.append(record(105, ActionKind::Seen, "2025-01-01T10:00:00"))
        .await
        .unwrap();

    let response = bot
        .handle(&InboundEvent::text(USER, USER, "/report 2025-01-01"))
        .await;
    assert_eq!(response.texts(), vec![texts::ADMIN_ONLY]);
}
