use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use nexora::config::AppConfig;
use nexora::directory::Directory;
use nexora::handlers;
use nexora::services::ai::{ChatMessage, LlmProvider};
use nexora::services::notify::{Mailer, SheetAppender};
use nexora::sessions::WizardSessions;
use nexora::state::AppState;

// ── Mock Providers ──

struct MockLlm {
    fail: bool,
}

#[async_trait]
impl LlmProvider for MockLlm {
    async fn chat(&self, _system_prompt: &str, messages: &[ChatMessage]) -> anyhow::Result<String> {
        if self.fail {
            anyhow::bail!("upstream unavailable");
        }
        let last = messages.last().map(|m| m.content.as_str()).unwrap_or("");
        Ok(format!("echo: {last} (turns: {})", messages.len()))
    }
}

struct MockMailer {
    fail: bool,
    sent: Arc<Mutex<Vec<String>>>,
}

impl MockMailer {
    fn new(fail: bool) -> Self {
        Self {
            fail,
            sent: Arc::new(Mutex::new(vec![])),
        }
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send_welcome(&self, to: &str) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("relay down");
        }
        self.sent.lock().unwrap().push(to.to_string());
        Ok(())
    }
}

struct MockSheet {
    fail: bool,
    rows: Arc<Mutex<Vec<Vec<String>>>>,
}

impl MockSheet {
    fn new(fail: bool) -> Self {
        Self {
            fail,
            rows: Arc::new(Mutex::new(vec![])),
        }
    }
}

#[async_trait]
impl SheetAppender for MockSheet {
    async fn append_row(&self, row: &[String]) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("permission denied");
        }
        self.rows.lock().unwrap().push(row.to_vec());
        Ok(())
    }
}

// ── Helpers ──

fn test_config() -> AppConfig {
    AppConfig {
        port: 3000,
        gemini_api_key: String::new(),
        gemini_model: "gemini-1.5-flash".to_string(),
        zoho_mail_token: String::new(),
        zoho_from_email: "care-team@nexora.example".to_string(),
        sheets_api_token: String::new(),
        sheet_id: String::new(),
        default_role: "caregiver".to_string(),
    }
}

fn test_app_with(
    llm: Option<Box<dyn LlmProvider>>,
    mailer: Option<Box<dyn Mailer>>,
    sheets: Option<Box<dyn SheetAppender>>,
) -> Router {
    let state = Arc::new(AppState {
        config: test_config(),
        directory: Directory::seeded(),
        sessions: WizardSessions::new(),
        llm,
        mailer,
        sheets,
    });
    handlers::router(state)
}

fn test_app() -> Router {
    test_app_with(
        Some(Box::new(MockLlm { fail: false })),
        Some(Box::new(MockMailer::new(false))),
        Some(Box::new(MockSheet::new(false))),
    )
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(res: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Walks a fresh session up to the details step and returns its id.
async fn session_at_details(app: &Router) -> String {
    let res = app
        .clone()
        .oneshot(post_json(
            "/api/bookings/sessions",
            serde_json::json!({ "professionalId": "1" }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    let id = json["sessionId"].as_str().unwrap().to_string();

    let res = app
        .clone()
        .oneshot(post_json(
            &format!("/api/bookings/sessions/{id}/date"),
            serde_json::json!({ "date": "2024-01-22" }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app
        .clone()
        .oneshot(post_json(
            &format!("/api/bookings/sessions/{id}/time"),
            serde_json::json!({ "time": "10:00 AM" }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app
        .clone()
        .oneshot(post_empty(&format!("/api/bookings/sessions/{id}/datetime")))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json["step"], "details");

    id
}

fn details_payload() -> serde_json::Value {
    serde_json::json!({
        "patientName": "Tolu Doe",
        "patientAge": "5",
        "caregiverName": "John Doe",
        "relationship": "Parent",
        "phone": "+234 801 234 5678",
        "email": "john@example.com",
        "reason": "Initial developmental assessment",
        "urgency": "routine"
    })
}

// ── Health & Directory ──

#[tokio::test]
async fn test_health() {
    let res = test_app().oneshot(get("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await["status"], "ok");
}

#[tokio::test]
async fn test_list_professionals() {
    let res = test_app()
        .oneshot(get("/api/professionals"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json.as_array().unwrap().len(), 6);
    assert_eq!(json[0]["name"], "Dr. Sarah Johnson");
    assert_eq!(json[0]["consultationFee"], 25000);
}

#[tokio::test]
async fn test_search_professionals() {
    let res = test_app()
        .oneshot(get("/api/professionals?q=lagos"))
        .await
        .unwrap();
    let json = body_json(res).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    let res = test_app()
        .oneshot(get("/api/professionals?specialization=Speech%20Therapy"))
        .await
        .unwrap();
    let json = body_json(res).await;
    assert_eq!(json[0]["name"], "Dr. Michael Adebayo");
}

#[tokio::test]
async fn test_professional_not_found() {
    let res = test_app()
        .oneshot(get("/api/professionals/999"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_bookings() {
    let res = test_app().oneshot(get("/api/bookings")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json.as_array().unwrap().len(), 4);
    assert_eq!(json[0]["status"], "confirmed");
}

// ── Booking Wizard ──

#[tokio::test]
async fn test_create_session_unknown_professional() {
    let res = test_app()
        .oneshot(post_json(
            "/api/bookings/sessions",
            serde_json::json!({ "professionalId": "999" }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_full_booking_flow() {
    let app = test_app();
    let id = session_at_details(&app).await;

    let res = app
        .clone()
        .oneshot(post_json(
            &format!("/api/bookings/sessions/{id}/details"),
            details_payload(),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json["step"], "payment");

    let res = app
        .clone()
        .oneshot(post_json(
            &format!("/api/bookings/sessions/{id}/payment"),
            serde_json::json!({
                "cardNumber": "1234 5678 9012 3456",
                "expiry": "12/27",
                "cvv": "123",
                "cardName": "John Doe"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json["step"], "confirmation");
    assert_eq!(json["summary"]["professionalName"], "Dr. Sarah Johnson");
    assert_eq!(json["summary"]["date"], "Monday, January 22, 2024");
    assert_eq!(json["summary"]["time"], "10:00 AM");
    assert_eq!(json["summary"]["fee"], "₦25,000");
    assert_eq!(json["summary"]["durationMinutes"], 60);
}

#[tokio::test]
async fn test_datetime_advance_requires_both_fields() {
    let app = test_app();
    let res = app
        .clone()
        .oneshot(post_json(
            "/api/bookings/sessions",
            serde_json::json!({ "professionalId": "1" }),
        ))
        .await
        .unwrap();
    let id = body_json(res).await["sessionId"].as_str().unwrap().to_string();

    let res = app
        .clone()
        .oneshot(post_empty(&format!("/api/bookings/sessions/{id}/datetime")))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let res = app
        .clone()
        .oneshot(post_json(
            &format!("/api/bookings/sessions/{id}/date"),
            serde_json::json!({ "date": "2024-01-22" }),
        ))
        .await
        .unwrap();
    let json = body_json(res).await;
    assert_eq!(json["canAdvance"], false);

    let res = app
        .clone()
        .oneshot(post_empty(&format!("/api/bookings/sessions/{id}/datetime")))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_date_change_clears_selected_time() {
    let app = test_app();
    let res = app
        .clone()
        .oneshot(post_json(
            "/api/bookings/sessions",
            serde_json::json!({ "professionalId": "1" }),
        ))
        .await
        .unwrap();
    let id = body_json(res).await["sessionId"].as_str().unwrap().to_string();

    for (uri, body) in [
        ("date", serde_json::json!({ "date": "2024-01-22" })),
        ("time", serde_json::json!({ "time": "2:00 PM" })),
    ] {
        let res = app
            .clone()
            .oneshot(post_json(&format!("/api/bookings/sessions/{id}/{uri}"), body))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    // 2:00 PM is not offered on the 24th; switching dates must drop it
    let res = app
        .clone()
        .oneshot(post_json(
            &format!("/api/bookings/sessions/{id}/date"),
            serde_json::json!({ "date": "2024-01-24" }),
        ))
        .await
        .unwrap();
    let json = body_json(res).await;
    assert_eq!(json["draft"]["selectedTime"], serde_json::Value::Null);
    assert_eq!(json["canAdvance"], false);
}

#[tokio::test]
async fn test_time_not_in_slot_list_rejected() {
    let app = test_app();
    let res = app
        .clone()
        .oneshot(post_json(
            "/api/bookings/sessions",
            serde_json::json!({ "professionalId": "1" }),
        ))
        .await
        .unwrap();
    let id = body_json(res).await["sessionId"].as_str().unwrap().to_string();

    let res = app
        .clone()
        .oneshot(post_json(
            &format!("/api/bookings/sessions/{id}/date"),
            serde_json::json!({ "date": "2024-01-24" }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // 2:00 PM exists on other days but not the 24th
    let res = app
        .clone()
        .oneshot(post_json(
            &format!("/api/bookings/sessions/{id}/time"),
            serde_json::json!({ "time": "2:00 PM" }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_details_gate_blocks_missing_patient_name() {
    let app = test_app();
    let id = session_at_details(&app).await;

    let mut payload = details_payload();
    payload["patientName"] = serde_json::json!("");
    let res = app
        .clone()
        .oneshot(post_json(
            &format!("/api/bookings/sessions/{id}/details"),
            payload,
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(res).await;
    assert_eq!(json["error"], "patientName is required");

    // Still parked on the details step
    let res = app
        .clone()
        .oneshot(get(&format!("/api/bookings/sessions/{id}")))
        .await
        .unwrap();
    assert_eq!(body_json(res).await["step"], "details");
}

#[tokio::test]
async fn test_back_preserves_entered_fields() {
    let app = test_app();
    let id = session_at_details(&app).await;

    let res = app
        .clone()
        .oneshot(post_json(
            &format!("/api/bookings/sessions/{id}/details"),
            details_payload(),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app
        .clone()
        .oneshot(post_empty(&format!("/api/bookings/sessions/{id}/back")))
        .await
        .unwrap();
    let json = body_json(res).await;
    assert_eq!(json["step"], "details");
    assert_eq!(json["draft"]["patientName"], "Tolu Doe");

    let res = app
        .clone()
        .oneshot(post_empty(&format!("/api/bookings/sessions/{id}/back")))
        .await
        .unwrap();
    let json = body_json(res).await;
    assert_eq!(json["step"], "datetime");
    assert_eq!(json["draft"]["selectedDate"], "2024-01-22");
    assert_eq!(json["draft"]["selectedTime"], "10:00 AM");
    assert_eq!(json["draft"]["caregiverName"], "John Doe");
}

#[tokio::test]
async fn test_back_from_first_step_conflicts() {
    let app = test_app();
    let res = app
        .clone()
        .oneshot(post_json(
            "/api/bookings/sessions",
            serde_json::json!({ "professionalId": "1" }),
        ))
        .await
        .unwrap();
    let id = body_json(res).await["sessionId"].as_str().unwrap().to_string();

    let res = app
        .clone()
        .oneshot(post_empty(&format!("/api/bookings/sessions/{id}/back")))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_book_another_resets_wizard() {
    let app = test_app();
    let id = session_at_details(&app).await;

    for (uri, body) in [
        ("details", details_payload()),
        ("payment", serde_json::json!({})),
    ] {
        let res = app
            .clone()
            .oneshot(post_json(&format!("/api/bookings/sessions/{id}/{uri}"), body))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    let res = app
        .clone()
        .oneshot(post_empty(&format!("/api/bookings/sessions/{id}/restart")))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json["step"], "datetime");
    assert_eq!(json["draft"]["selectedDate"], serde_json::Value::Null);
    assert_eq!(json["draft"]["patientName"], "");
}

#[tokio::test]
async fn test_delete_session_discards_state() {
    let app = test_app();
    let id = session_at_details(&app).await;

    let res = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/bookings/sessions/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = app
        .clone()
        .oneshot(get(&format!("/api/bookings/sessions/{id}")))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_session() {
    let app = test_app();
    let res = app
        .clone()
        .oneshot(get("/api/bookings/sessions/not-a-uuid"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = app
        .clone()
        .oneshot(get(
            "/api/bookings/sessions/00000000-0000-4000-8000-000000000000",
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

// ── Chat ──

#[tokio::test]
async fn test_chat_returns_reply() {
    let res = test_app()
        .oneshot(post_json(
            "/api/chat",
            serde_json::json!({
                "message": "How do I find the right therapist?",
                "context": "IDD care and support",
                "conversationHistory": [
                    { "role": "user", "content": "Hello" },
                    { "role": "assistant", "content": "Hi! How can I help?" }
                ]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    let reply = json["reply"].as_str().unwrap();
    assert!(reply.contains("How do I find the right therapist?"));
    // full transcript plus the new message reaches the provider
    assert!(reply.contains("turns: 3"));
}

#[tokio::test]
async fn test_chat_provider_failure_is_500() {
    let app = test_app_with(Some(Box::new(MockLlm { fail: true })), None, None);
    let res = app
        .oneshot(post_json(
            "/api/chat",
            serde_json::json!({ "message": "Hello" }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(res).await;
    assert_eq!(json["error"], "Failed to process chat request");
}

#[tokio::test]
async fn test_chat_without_provider_uses_fallback() {
    let app = test_app_with(None, None, None);
    let res = app
        .oneshot(post_json(
            "/api/chat",
            serde_json::json!({ "message": "Tell me something" }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert!(json["reply"]
        .as_str()
        .unwrap()
        .contains("directory of verified professionals"));
}

// ── Notify Signup ──

#[tokio::test]
async fn test_notify_rejects_invalid_email() {
    let res = test_app()
        .oneshot(post_json(
            "/api/notify",
            serde_json::json!({ "email": "not-an-email" }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let json = body_json(res).await;
    assert_eq!(json["error"], "Valid email is required");

    let res = test_app()
        .oneshot(post_json("/api/notify", serde_json::json!({})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_notify_full_success() {
    let mailer = MockMailer::new(false);
    let sent = Arc::clone(&mailer.sent);
    let sheet = MockSheet::new(false);
    let rows = Arc::clone(&sheet.rows);

    let app = test_app_with(None, Some(Box::new(mailer)), Some(Box::new(sheet)));
    let res = app
        .oneshot(post_json(
            "/api/notify",
            serde_json::json!({ "email": "family@example.com" }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["emailSent"], true);
    assert_eq!(json["sheetUpdated"], true);

    assert_eq!(sent.lock().unwrap().as_slice(), ["family@example.com"]);
    let rows = rows.lock().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "family@example.com");
}

#[tokio::test]
async fn test_notify_partial_success_sheet_fails() {
    let app = test_app_with(
        None,
        Some(Box::new(MockMailer::new(false))),
        Some(Box::new(MockSheet::new(true))),
    );
    let res = app
        .oneshot(post_json(
            "/api/notify",
            serde_json::json!({ "email": "family@example.com" }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["emailSent"], true);
    assert_eq!(json["sheetUpdated"], false);
}

#[tokio::test]
async fn test_notify_partial_success_email_fails() {
    let app = test_app_with(
        None,
        Some(Box::new(MockMailer::new(true))),
        Some(Box::new(MockSheet::new(false))),
    );
    let res = app
        .oneshot(post_json(
            "/api/notify",
            serde_json::json!({ "email": "family@example.com" }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json["emailSent"], false);
    assert_eq!(json["sheetUpdated"], true);
    assert!(json["message"]
        .as_str()
        .unwrap()
        .contains("Confirmation email may be delayed"));
}

#[tokio::test]
async fn test_notify_both_fail() {
    let app = test_app_with(
        None,
        Some(Box::new(MockMailer::new(true))),
        Some(Box::new(MockSheet::new(true))),
    );
    let res = app
        .oneshot(post_json(
            "/api/notify",
            serde_json::json!({ "email": "family@example.com" }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(res).await;
    assert_eq!(
        json["error"],
        "Both email and sheet services failed. Please try again."
    );
}

#[tokio::test]
async fn test_notify_unconfigured_services() {
    let app = test_app_with(None, None, Some(Box::new(MockSheet::new(false))));
    let res = app
        .oneshot(post_json(
            "/api/notify",
            serde_json::json!({ "email": "family@example.com" }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(res).await;
    assert_eq!(json["error"], "Email service not configured");

    let app = test_app_with(None, Some(Box::new(MockMailer::new(false))), None);
    let res = app
        .oneshot(post_json(
            "/api/notify",
            serde_json::json!({ "email": "family@example.com" }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(res).await;
    assert_eq!(json["error"], "Spreadsheet service not configured");
}

// ── Admin & Dashboard ──

#[tokio::test]
async fn test_verification_list_and_counts() {
    let res = test_app()
        .oneshot(get("/api/admin/verifications"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json["counts"]["pending"], 2);
    assert_eq!(json["counts"]["underReview"], 1);
    assert_eq!(json["counts"]["approved"], 0);
    assert_eq!(json["verifications"].as_array().unwrap().len(), 3);

    let res = test_app()
        .oneshot(get("/api/admin/verifications?status=under_review"))
        .await
        .unwrap();
    let json = body_json(res).await;
    assert_eq!(json["verifications"].as_array().unwrap().len(), 1);
    assert_eq!(json["verifications"][0]["name"], "Dr. Kemi Adeleke");

    let res = test_app()
        .oneshot(get("/api/admin/verifications?status=bogus"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_verification_detail() {
    let res = test_app()
        .oneshot(get("/api/admin/verifications/1"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json["name"], "Dr. Adebayo Ogundimu");
    assert_eq!(json["status"], "pending");
    assert_eq!(json["credentials"].as_array().unwrap().len(), 3);
    assert_eq!(json["credentials"][0]["verified"], false);

    let res = test_app()
        .oneshot(get("/api/admin/verifications/999"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_dashboard_role_dispatch() {
    // Default role from config
    let res = test_app().oneshot(get("/api/dashboard")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json["role"], "caregiver");
    assert_eq!(json["greeting"], "Welcome back, John Doe");

    // Role claim override
    let req = Request::builder()
        .uri("/api/dashboard")
        .header("x-role", "admin")
        .body(Body::empty())
        .unwrap();
    let res = test_app().oneshot(req).await.unwrap();
    let json = body_json(res).await;
    assert_eq!(json["role"], "admin");
    assert_eq!(json["stats"][0]["label"], "Pending Verifications");
    assert_eq!(json["stats"][0]["value"], "2");

    let req = Request::builder()
        .uri("/api/dashboard")
        .header("x-role", "superuser")
        .body(Body::empty())
        .unwrap();
    let res = test_app().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
