use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub zoho_mail_token: String,
    pub zoho_from_email: String,
    pub sheets_api_token: String,
    pub sheet_id: String,
    pub default_role: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
            zoho_mail_token: env::var("ZOHO_MAIL_TOKEN").unwrap_or_default(),
            zoho_from_email: env::var("ZOHO_FROM_EMAIL")
                .unwrap_or_else(|_| "care-team@nexora.example".to_string()),
            sheets_api_token: env::var("GOOGLE_SHEETS_TOKEN").unwrap_or_default(),
            sheet_id: env::var("GOOGLE_SHEET_ID").unwrap_or_default(),
            default_role: env::var("DEFAULT_ROLE").unwrap_or_else(|_| "caregiver".to_string()),
        }
    }
}
