//! Contact handler

use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;

use crate::domain::entities::ContactForm;
use crate::error::{ContactError, MessageResponse};
use crate::AppState;

/// POST /api/send-message
///
/// Relay a contact-form submission to the notification webhook.
/// Only a body that is not JSON at all is a 500; any JSON shape goes
/// through field validation.
pub async fn send_message(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MessageResponse>, ContactError> {
    let body: Value = serde_json::from_slice(&body)
        .map_err(|e| ContactError::RelayFailed(format!("unreadable request body: {}", e)))?;

    state.contact_service.send(ContactForm::from(&body)).await?;

    Ok(Json(MessageResponse {
        message: "Message sent successfully".to_string(),
    }))
}
