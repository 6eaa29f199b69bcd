use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use crate::errors::AppError;
use crate::models::Role;
use crate::services::dashboard::{self, DashboardView};
use crate::state::AppState;

/// Dashboard for the signed-in user. The role claim comes from the session;
/// the `x-role` header stands in for a real auth layer in the demo and can
/// override the configured default.
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<DashboardView>, AppError> {
    let role_str = headers
        .get("x-role")
        .and_then(|v| v.to_str().ok())
        .unwrap_or(&state.config.default_role);

    let role = Role::parse(role_str)
        .ok_or_else(|| AppError::BadRequest(format!("unknown role: {role_str}")))?;

    let session = state.directory.demo_session(role);
    Ok(Json(dashboard::view(&session, &state.directory)))
}
