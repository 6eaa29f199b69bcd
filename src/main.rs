use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use nexora::config::AppConfig;
use nexora::directory::Directory;
use nexora::handlers;
use nexora::services::ai::gemini::GeminiProvider;
use nexora::services::ai::LlmProvider;
use nexora::services::notify::sheets::GoogleSheets;
use nexora::services::notify::zoho::ZohoMailer;
use nexora::services::notify::{Mailer, SheetAppender};
use nexora::sessions::WizardSessions;
use nexora::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let llm: Option<Box<dyn LlmProvider>> = if config.gemini_api_key.is_empty() {
        tracing::info!("no GEMINI_API_KEY set, chat assistant runs in fallback mode");
        None
    } else {
        tracing::info!("using Gemini chat provider (model: {})", config.gemini_model);
        Some(Box::new(GeminiProvider::new(
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
        )))
    };

    let mailer: Option<Box<dyn Mailer>> = if config.zoho_mail_token.is_empty() {
        tracing::warn!("no ZOHO_MAIL_TOKEN set, notify signups cannot send email");
        None
    } else {
        Some(Box::new(ZohoMailer::new(
            config.zoho_mail_token.clone(),
            config.zoho_from_email.clone(),
        )))
    };

    let sheets: Option<Box<dyn SheetAppender>> =
        if config.sheets_api_token.is_empty() || config.sheet_id.is_empty() {
            tracing::warn!("Google Sheets credentials missing, notify signups cannot be recorded");
            None
        } else {
            Some(Box::new(GoogleSheets::new(
                config.sheets_api_token.clone(),
                config.sheet_id.clone(),
            )))
        };

    let state = Arc::new(AppState {
        config: config.clone(),
        directory: Directory::seeded(),
        sessions: WizardSessions::new(),
        llm,
        mailer,
        sheets,
    });

    let app = handlers::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
