use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::Professional;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct DirectoryQuery {
    pub q: Option<String>,
    pub specialization: Option<String>,
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DirectoryQuery>,
) -> Json<Vec<Professional>> {
    let hits = state
        .directory
        .search_professionals(query.q.as_deref(), query.specialization.as_deref())
        .into_iter()
        .cloned()
        .collect();
    Json(hits)
}

pub async fn get_one(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Professional>, AppError> {
    state
        .directory
        .find_professional(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("professional {id}")))
}
