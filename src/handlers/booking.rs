use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{AvailabilityDay, BookingDraft, BookingRecord, DetailsInput, PaymentCard};
use crate::state::AppState;
use crate::wizard::{BookingSummary, BookingWizard, WizardError, WizardStep};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub professional_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardView {
    pub session_id: String,
    pub step: WizardStep,
    pub can_advance: bool,
    pub draft: BookingDraft,
    pub professional_id: String,
    pub professional_name: String,
    pub fee_display: String,
    pub availability: Vec<AvailabilityDay>,
}

impl WizardView {
    fn of(session_id: Uuid, wizard: &BookingWizard) -> Self {
        let professional = wizard.professional();
        Self {
            session_id: session_id.to_string(),
            step: wizard.step(),
            can_advance: wizard.can_advance(),
            draft: wizard.draft().clone(),
            professional_id: professional.id.clone(),
            professional_name: professional.name.clone(),
            fee_display: professional.fee_display(),
            availability: professional.availability.clone(),
        }
    }
}

fn parse_session_id(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::NotFound(format!("booking session {id}")))
}

/// Runs an action against a live wizard session and answers with the
/// refreshed view. Inner wizard errors surface as 409/422.
fn with_wizard(
    state: &AppState,
    id: &str,
    f: impl FnOnce(&mut BookingWizard) -> Result<(), WizardError>,
) -> Result<Json<WizardView>, AppError> {
    let session_id = parse_session_id(id)?;
    let outcome = state
        .sessions
        .with(session_id, |wizard| {
            f(wizard).map(|()| WizardView::of(session_id, wizard))
        })
        .ok_or_else(|| AppError::NotFound(format!("booking session {id}")))?;
    Ok(Json(outcome?))
}

pub async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateSessionRequest>,
) -> Result<Json<WizardView>, AppError> {
    let professional = state
        .directory
        .find_professional(&payload.professional_id)
        .ok_or_else(|| {
            AppError::NotFound(format!("professional {}", payload.professional_id))
        })?
        .clone();

    let wizard = BookingWizard::new(professional);
    let session_id = state.sessions.create(wizard);

    tracing::info!(
        session = %session_id,
        professional = %payload.professional_id,
        "booking session started"
    );

    let view = state
        .sessions
        .with(session_id, |wizard| WizardView::of(session_id, wizard))
        .ok_or_else(|| AppError::NotFound(format!("booking session {session_id}")))?;
    Ok(Json(view))
}

pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<WizardView>, AppError> {
    with_wizard(&state, &id, |_| Ok(()))
}

pub async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let session_id = parse_session_id(&id)?;
    if state.sessions.remove(session_id) {
        tracing::info!(session = %session_id, "booking session discarded");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("booking session {id}")))
    }
}

#[derive(Deserialize)]
pub struct SelectDateRequest {
    pub date: NaiveDate,
}

pub async fn select_date(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<SelectDateRequest>,
) -> Result<Json<WizardView>, AppError> {
    with_wizard(&state, &id, |wizard| wizard.select_date(payload.date))
}

#[derive(Deserialize)]
pub struct SelectTimeRequest {
    pub time: String,
}

pub async fn select_time(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<SelectTimeRequest>,
) -> Result<Json<WizardView>, AppError> {
    with_wizard(&state, &id, |wizard| wizard.select_time(&payload.time))
}

pub async fn submit_datetime(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<WizardView>, AppError> {
    with_wizard(&state, &id, |wizard| wizard.submit_datetime())
}

pub async fn submit_details(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<DetailsInput>,
) -> Result<Json<WizardView>, AppError> {
    with_wizard(&state, &id, |wizard| {
        wizard.set_details(payload)?;
        wizard.submit_details()
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationResponse {
    pub step: WizardStep,
    pub summary: BookingSummary,
}

pub async fn submit_payment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(card): Json<PaymentCard>,
) -> Result<Json<ConfirmationResponse>, AppError> {
    let session_id = parse_session_id(&id)?;
    let outcome = state
        .sessions
        .with(session_id, |wizard| {
            wizard.submit_payment(card)?;
            wizard.summary()
        })
        .ok_or_else(|| AppError::NotFound(format!("booking session {id}")))?;
    let summary = outcome?;

    tracing::info!(session = %session_id, "booking confirmed");

    Ok(Json(ConfirmationResponse {
        step: WizardStep::Confirmation,
        summary,
    }))
}

pub async fn go_back(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<WizardView>, AppError> {
    with_wizard(&state, &id, |wizard| wizard.back())
}

pub async fn restart(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<WizardView>, AppError> {
    with_wizard(&state, &id, |wizard| wizard.book_another())
}

pub async fn list_bookings(State(state): State<Arc<AppState>>) -> Json<Vec<BookingRecord>> {
    Json(state.directory.bookings().to_vec())
}
