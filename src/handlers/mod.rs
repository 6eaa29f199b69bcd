pub mod admin;
pub mod booking;
pub mod chat;
pub mod dashboard;
pub mod notify;
pub mod professionals;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/professionals", get(professionals::list))
        .route("/api/professionals/:id", get(professionals::get_one))
        .route("/api/bookings", get(booking::list_bookings))
        .route("/api/bookings/sessions", post(booking::create_session))
        .route(
            "/api/bookings/sessions/:id",
            get(booking::get_session).delete(booking::delete_session),
        )
        .route("/api/bookings/sessions/:id/date", post(booking::select_date))
        .route("/api/bookings/sessions/:id/time", post(booking::select_time))
        .route(
            "/api/bookings/sessions/:id/datetime",
            post(booking::submit_datetime),
        )
        .route(
            "/api/bookings/sessions/:id/details",
            post(booking::submit_details),
        )
        .route(
            "/api/bookings/sessions/:id/payment",
            post(booking::submit_payment),
        )
        .route("/api/bookings/sessions/:id/back", post(booking::go_back))
        .route("/api/bookings/sessions/:id/restart", post(booking::restart))
        .route("/api/admin/verifications", get(admin::list_verifications))
        .route("/api/admin/verifications/:id", get(admin::get_verification))
        .route("/api/dashboard", get(dashboard::get_dashboard))
        .route("/api/chat", post(chat::chat))
        .route("/api/notify", post(notify::notify_signup))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
