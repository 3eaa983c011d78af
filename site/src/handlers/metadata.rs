//! Metadata handler
//!
//! Link-preview endpoint used by the showcase and by external callers.

use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;

use crate::domain::entities::ProjectPreview;
use crate::error::AppError;
use crate::AppState;

/// POST /api/fetch-metadata
///
/// Resolve `{"url": ...}` into a preview. Upstream failures degrade to a
/// hostname-only preview; only a missing or invalid URL is a 400.
pub async fn fetch_metadata(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ProjectPreview>, AppError> {
    // Parsed by hand so an unreadable body is a 500, whatever the content type
    let body: Value = serde_json::from_slice(&body)
        .map_err(|e| AppError::Unexpected(format!("unreadable request body: {}", e)))?;

    let url = requested_url(&body)?;
    let preview = state.metadata_service.resolve(url).await?;

    Ok(Json(preview))
}

/// The `url` field of a request body.
///
/// Absent, `null`, `false`, `0` and `""` all mean no URL was given (an empty
/// string, which the resolver rejects as required). Any other non-string
/// value can never be a URL.
fn requested_url(body: &Value) -> Result<&str, AppError> {
    match body.get("url") {
        Some(Value::String(url)) => Ok(url),
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(""),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(""),
        Some(_) => Err(AppError::InvalidInput("Invalid URL".to_string())),
    }
}
