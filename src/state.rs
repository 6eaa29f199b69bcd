use crate::config::AppConfig;
use crate::directory::Directory;
use crate::services::ai::LlmProvider;
use crate::services::notify::{Mailer, SheetAppender};
use crate::sessions::WizardSessions;

/// Shared application state. Providers are optional because the service runs
/// with partial credentials; handlers answer 500 when a required one is
/// missing.
pub struct AppState {
    pub config: AppConfig,
    pub directory: Directory,
    pub sessions: WizardSessions,
    pub llm: Option<Box<dyn LlmProvider>>,
    pub mailer: Option<Box<dyn Mailer>>,
    pub sheets: Option<Box<dyn SheetAppender>>,
}
