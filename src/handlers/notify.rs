use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::services::notify;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct NotifyRequest {
    pub email: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifyResponse {
    pub success: bool,
    pub message: String,
    pub email_sent: bool,
    pub sheet_updated: bool,
}

/// Launch-notification signup: a best-effort dual write (welcome email +
/// spreadsheet row). Succeeds if at least one side effect landed.
pub async fn notify_signup(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NotifyRequest>,
) -> Result<Json<NotifyResponse>, AppError> {
    let email = match payload.email.as_deref() {
        Some(e) if e.contains('@') => e,
        _ => return Err(AppError::BadRequest("Valid email is required".to_string())),
    };

    let mailer = state
        .mailer
        .as_deref()
        .ok_or_else(|| AppError::Config("Email service not configured".to_string()))?;
    let sheets = state
        .sheets
        .as_deref()
        .ok_or_else(|| AppError::Config("Spreadsheet service not configured".to_string()))?;

    let outcome = notify::signup(mailer, sheets, email).await;

    if !outcome.any_succeeded() {
        return Err(AppError::Notify(
            "Both email and sheet services failed. Please try again.".to_string(),
        ));
    }

    Ok(Json(NotifyResponse {
        success: true,
        message: outcome.message(),
        email_sent: outcome.email_sent,
        sheet_updated: outcome.sheet_updated,
    }))
}
