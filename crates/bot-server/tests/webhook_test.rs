use application::{AdminGate, BotService};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use bot_server::api::{SECRET_TOKEN_HEADER, create_router};
use bot_server::state::AppState;
use domain::action::parse_timestamp;
use domain::{ActionKind, ActionLogRepository, FixedClock};
use infrastructure::{RecordingMessenger, SentItem, SqliteActionLog, XlsxReportExporter};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

const ADMIN: i64 = 1060590354;
const USER: i64 = 42;

struct Harness {
    app: Router,
    log: Arc<SqliteActionLog>,
    messenger: RecordingMessenger,
}

async fn harness(secret: Option<&str>) -> Harness {
    let log = Arc::new(SqliteActionLog::new("sqlite::memory:").await.unwrap());
    let messenger = RecordingMessenger::new();
    let bot = BotService::new(
        log.clone(),
        Arc::new(XlsxReportExporter::new()),
        AdminGate::new([ADMIN]),
    )
    .with_clock(Arc::new(FixedClock(
        parse_timestamp("2025-01-01T10:00:00").unwrap(),
    )));
    let state = AppState::new(bot, Arc::new(messenger.clone()))
        .with_secret_token(secret.map(str::to_string));

    Harness {
        app: create_router(Arc::new(state), "/webhook"),
        log,
        messenger,
    }
}

fn post(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/webhook")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

fn text_update(sender: i64, text: &str) -> String {
    json!({
        "update_id": 1,
        "message": {
            "message_id": 10,
            "from": { "id": sender },
            "chat": { "id": sender },
            "text": text
        }
    })
    .to_string()
}

fn button_update(sender: i64, data: &str) -> String {
    json!({
        "update_id": 2,
        "callback_query": {
            "id": "cb-1",
            "from": { "id": sender },
            "message": { "message_id": 77, "chat": { "id": sender } },
            "data": data
        }
    })
    .to_string()
}

#[tokio::test]
async fn test_health() {
    let h = harness(None).await;
    let response = h
        .app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_start_command_replies() {
    let h = harness(None).await;
    let response = h.app.oneshot(post(text_update(USER, "/start"))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        h.messenger.texts().await,
        vec!["🇹🇷 Merhaba!\nScooter listesini görmek için /liste yazın."]
    );
}

#[tokio::test]
async fn test_button_click_records_action() {
    let h = harness(None).await;
    let response = h
        .app
        .oneshot(post(button_update(USER, "repair_120")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let history = h.log.find_by_scooter(120).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].action, ActionKind::Repair);
    assert_eq!(history[0].user_id, USER);

    assert_eq!(
        h.messenger.sent().await,
        vec![SentItem::CallbackAnswer {
            callback_id: "cb-1".into(),
            text: Some("🔧 Tamir için işaretlendi".into()),
            show_alert: true,
        }]
    );
}

#[tokio::test]
async fn test_malformed_payload_is_acknowledged_and_dropped() {
    let h = harness(None).await;
    let response = h.app.oneshot(post("{not json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(h.messenger.sent().await.is_empty());
    assert_eq!(h.log.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_unsupported_update_is_ignored() {
    let h = harness(None).await;
    let body = json!({ "update_id": 3, "edited_message": {} }).to_string();
    let response = h.app.oneshot(post(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(h.messenger.sent().await.is_empty());
}

#[tokio::test]
async fn test_secret_token_is_enforced() {
    let h = harness(Some("s3cret")).await;

    let rejected = h
        .app
        .clone()
        .oneshot(post(text_update(USER, "/start")))
        .await
        .unwrap();
    assert_eq!(rejected.status(), StatusCode::UNAUTHORIZED);
    assert!(h.messenger.sent().await.is_empty());

    let mut request = post(text_update(USER, "/start"));
    request
        .headers_mut()
        .insert(SECRET_TOKEN_HEADER, "s3cret".parse().unwrap());
    let accepted = h.app.oneshot(request).await.unwrap();
    assert_eq!(accepted.status(), StatusCode::OK);
    assert_eq!(h.messenger.texts().await.len(), 1);
}

#[tokio::test]
async fn test_non_admin_cannot_clear() {
    let h = harness(None).await;
    h.app
        .clone()
        .oneshot(post(button_update(USER, "seen_101")))
        .await
        .unwrap();
    h.app
        .oneshot(post(button_update(USER, "admin_clear_db")))
        .await
        .unwrap();

    assert_eq!(h.log.count().await.unwrap(), 1);
    let sent = h.messenger.sent().await;
    assert_eq!(
        sent.last(),
        Some(&SentItem::CallbackAnswer {
            callback_id: "cb-1".into(),
            text: Some("❌ Sadece admin.".into()),
            show_alert: true,
        })
    );
}

#[tokio::test]
async fn test_admin_report_uploads_document() {
    let h = harness(None).await;
    h.app
        .clone()
        .oneshot(post(button_update(USER, "battery_130")))
        .await
        .unwrap();
    h.app
        .oneshot(post(text_update(ADMIN, "/report")))
        .await
        .unwrap();

    let sent = h.messenger.sent().await;
    assert!(sent.iter().any(|item| matches!(
        item,
        SentItem::Document { chat_id, file_name, .. } if *chat_id == ADMIN && file_name == "rapor.xlsx"
    )));
}

#[tokio::test]
async fn test_page_click_deletes_keyboard_message() {
    let h = harness(None).await;
    h.app
        .oneshot(post(button_update(USER, "page_2")))
        .await
        .unwrap();

    let sent = h.messenger.sent().await;
    assert!(sent.contains(&SentItem::Deleted {
        chat_id: USER,
        message_id: 77
    }));
    let texts = h.messenger.texts().await;
    assert!(texts[0].starts_with("📋 Scooter Listesi (Sayfa 2/7)"));
}
