use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{VerificationRequest, VerificationStatus};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct VerificationQuery {
    pub status: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationCounts {
    pub pending: usize,
    pub under_review: usize,
    pub approved: usize,
    pub rejected: usize,
}

#[derive(Serialize)]
pub struct VerificationList {
    pub counts: VerificationCounts,
    pub verifications: Vec<VerificationRequest>,
}

/// Review queue for the admin verification screen. Read-only: approving and
/// rejecting are not part of this surface.
pub async fn list_verifications(
    State(state): State<Arc<AppState>>,
    Query(query): Query<VerificationQuery>,
) -> Result<Json<VerificationList>, AppError> {
    let filter = match query.status.as_deref() {
        Some(s) => Some(
            VerificationStatus::parse(s)
                .ok_or_else(|| AppError::BadRequest(format!("unknown status: {s}")))?,
        ),
        None => None,
    };

    let counts = VerificationCounts {
        pending: state
            .directory
            .verifications_with_status(VerificationStatus::Pending)
            .len(),
        under_review: state
            .directory
            .verifications_with_status(VerificationStatus::UnderReview)
            .len(),
        approved: state
            .directory
            .verifications_with_status(VerificationStatus::Approved)
            .len(),
        rejected: state
            .directory
            .verifications_with_status(VerificationStatus::Rejected)
            .len(),
    };

    let verifications = match filter {
        Some(status) => state
            .directory
            .verifications_with_status(status)
            .into_iter()
            .cloned()
            .collect(),
        None => state.directory.verifications().to_vec(),
    };

    Ok(Json(VerificationList {
        counts,
        verifications,
    }))
}

pub async fn get_verification(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<VerificationRequest>, AppError> {
    state
        .directory
        .find_verification(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("verification request {id}")))
}
