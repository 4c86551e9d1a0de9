use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
};
use infrastructure::Update;
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, warn};

use crate::state::AppState;

pub const SECRET_TOKEN_HEADER: &str = "x-telegram-bot-api-secret-token";

pub fn create_router(state: Arc<AppState>, webhook_path: &str) -> Router {
    Router::new()
        .route(webhook_path, post(receive_update))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Always answers 200 once the caller is authenticated: the platform retries
/// anything else, and a payload we cannot read will not get better.
async fn receive_update(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    if let Some(expected) = &state.secret_token {
        let provided = headers
            .get(SECRET_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok());
        if provided != Some(expected.as_str()) {
            warn!("Rejected webhook call with missing or wrong secret token");
            return StatusCode::UNAUTHORIZED;
        }
    }

    let update: Update = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(e) => {
            warn!(error = %e, bytes = body.len(), "Discarding malformed update");
            return StatusCode::OK;
        }
    };

    let update_id = update.update_id;
    let Some(event) = update.into_event() else {
        debug!(update_id, "Ignoring unsupported update");
        return StatusCode::OK;
    };

    let response = state.bot.handle(&event).await;
    if let Err(e) = application::deliver(state.messenger.as_ref(), &event, &response).await {
        error!(update_id, chat_id = event.chat_id, error = %e, "Failed to deliver response");
    }
    StatusCode::OK
}
