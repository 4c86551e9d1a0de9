use crate::bot::{Reply, Response};
use domain::messaging::{Messenger, MessengerError};
use domain::{EventPayload, InboundEvent};
use tracing::warn;

/// Push a response back to the chat the event came from.
///
/// Button clicks are always answered first, so the client stops its spinner
/// even when the response is empty. Failing to delete the old keyboard
/// message is not fatal.
pub async fn deliver(
    messenger: &dyn Messenger,
    event: &InboundEvent,
    response: &Response,
) -> Result<(), MessengerError> {
    let chat_id = event.chat_id;
    let origin = match &event.payload {
        EventPayload::Button {
            callback_id,
            message_id,
            ..
        } => {
            let (text, alert) = response
                .notice_text()
                .map_or((None, false), |(text, alert)| (Some(text), alert));
            if let Err(e) = messenger.answer_callback(callback_id, text, alert).await {
                warn!(callback_id = %callback_id, error = %e, "Failed to answer callback");
            }
            Some(*message_id)
        }
        EventPayload::Text { .. } => None,
    };

    for reply in &response.replies {
        match reply {
            Reply::Message { text, keyboard } => {
                messenger
                    .send_message(chat_id, text, keyboard.as_ref())
                    .await?
            }
            Reply::Document { report, caption } => {
                messenger.send_document(chat_id, report, caption).await?
            }
            // Already shown as the callback answer
            Reply::Notice { .. } if origin.is_some() => {}
            Reply::Notice { text, .. } => messenger.send_message(chat_id, text, None).await?,
            Reply::DeleteOrigin => {
                if let Some(Some(message_id)) = origin {
                    if let Err(e) = messenger.delete_message(chat_id, message_id).await {
                        warn!(chat_id, message_id, error = %e, "Failed to delete old message");
                    }
                }
            }
        }
    }
    Ok(())
}
