use async_trait::async_trait;
use domain::export::ExportedReport;
use domain::messaging::{Keyboard, Messenger, MessengerError};
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use super::error::TelegramError;
use super::types::{
    AnswerCallbackQueryRequest, ApiResponse, DeleteMessageRequest, InlineKeyboardMarkup,
    SendMessageRequest, SetWebhookRequest,
};

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Bot API client implementing the outbound [`Messenger`] interface
#[derive(Clone)]
pub struct TelegramClient {
    token: String,
    api_base_url: String,
    client: Client,
}

impl TelegramClient {
    pub fn new(
        token: impl Into<String>,
        api_base_url: impl Into<String>,
    ) -> Result<Self, TelegramError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self::with_client(token, api_base_url, client))
    }

    /// Share a connection pool, or point a test at a local stub
    pub fn with_client(
        token: impl Into<String>,
        api_base_url: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            token: token.into(),
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{method}", self.api_base_url, self.token)
    }

    async fn read_response<T: DeserializeOwned>(
        method: &str,
        response: reqwest::Response,
    ) -> Result<Option<T>, TelegramError> {
        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!(method, "Telegram API rate limit hit");
            return Err(TelegramError::RateLimited);
        }

        let body = response.text().await?;
        let parsed: ApiResponse<T> = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(_) => return Err(TelegramError::Api(format!("HTTP {status}: {body}"))),
        };

        if !parsed.ok {
            let description = parsed
                .description
                .unwrap_or_else(|| "unknown error".to_string());
            let code = parsed.error_code.unwrap_or(i64::from(status.as_u16()));
            return Err(TelegramError::Api(format!("{code}: {description}")));
        }
        Ok(parsed.result)
    }

    async fn call<Req: Serialize + ?Sized>(
        &self,
        method: &str,
        request: &Req,
    ) -> Result<(), TelegramError> {
        debug!(method, "Calling Telegram API");
        let response = self
            .client
            .post(self.method_url(method))
            .json(request)
            .send()
            .await?;
        Self::read_response::<serde_json::Value>(method, response).await?;
        Ok(())
    }

    /// Register the webhook URL so the platform starts pushing updates
    #[instrument(skip(self, secret_token))]
    pub async fn set_webhook(
        &self,
        url: &str,
        secret_token: Option<&str>,
    ) -> Result<(), TelegramError> {
        let request = SetWebhookRequest {
            url,
            secret_token,
            allowed_updates: ["message", "callback_query"],
        };
        self.call("setWebhook", &request).await?;
        info!("Webhook registered");
        Ok(())
    }
}

#[async_trait]
impl Messenger for TelegramClient {
    async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<(), MessengerError> {
        let request = SendMessageRequest {
            chat_id,
            text,
            parse_mode: "HTML",
            reply_markup: keyboard.map(InlineKeyboardMarkup::from),
        };
        Ok(self.call("sendMessage", &request).await?)
    }

    async fn send_document(
        &self,
        chat_id: i64,
        document: &ExportedReport,
        caption: &str,
    ) -> Result<(), MessengerError> {
        let part = Part::bytes(document.bytes.clone())
            .file_name(document.file_name.clone())
            .mime_str(XLSX_MIME)
            .map_err(TelegramError::from)?;
        let form = Form::new()
            .text("chat_id", chat_id.to_string())
            .text("caption", caption.to_string())
            .text("parse_mode", "HTML")
            .part("document", part);

        debug!(chat_id, file = %document.file_name, "Uploading document");
        let response = self
            .client
            .post(self.method_url("sendDocument"))
            .multipart(form)
            .send()
            .await
            .map_err(TelegramError::from)?;
        Self::read_response::<serde_json::Value>("sendDocument", response).await?;
        Ok(())
    }

    async fn answer_callback(
        &self,
        callback_id: &str,
        text: Option<&str>,
        show_alert: bool,
    ) -> Result<(), MessengerError> {
        let request = AnswerCallbackQueryRequest {
            callback_query_id: callback_id,
            text,
            show_alert,
        };
        Ok(self.call("answerCallbackQuery", &request).await?)
    }

    async fn delete_message(&self, chat_id: i64, message_id: i64) -> Result<(), MessengerError> {
        let request = DeleteMessageRequest {
            chat_id,
            message_id,
        };
        Ok(self.call("deleteMessage", &request).await?)
    }
}
