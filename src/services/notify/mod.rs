pub mod sheets;
pub mod zoho;

use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_welcome(&self, to: &str) -> anyhow::Result<()>;
}

#[async_trait]
pub trait SheetAppender: Send + Sync {
    async fn append_row(&self, row: &[String]) -> anyhow::Result<()>;
}

/// Which of the two independent side effects landed. Partial success is a
/// normal outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignupOutcome {
    pub email_sent: bool,
    pub sheet_updated: bool,
}

impl SignupOutcome {
    pub fn any_succeeded(&self) -> bool {
        self.email_sent || self.sheet_updated
    }

    pub fn message(&self) -> String {
        let mut message = "Thank you! You'll be notified when we launch.".to_string();
        if !self.email_sent {
            message.push_str(" (Note: Confirmation email may be delayed)");
        }
        message
    }
}

/// Best-effort dual write: welcome email, then a signup row in the
/// spreadsheet. Each is attempted regardless of the other; failures are
/// logged and reported through the outcome flags.
pub async fn signup(mailer: &dyn Mailer, sheets: &dyn SheetAppender, email: &str) -> SignupOutcome {
    let email_sent = match mailer.send_welcome(email).await {
        Ok(()) => {
            tracing::info!(email = %email, "welcome email sent");
            true
        }
        Err(e) => {
            tracing::error!(email = %email, error = %e, "welcome email failed");
            false
        }
    };

    let now = Utc::now();
    let row = vec![
        email.to_string(),
        now.format("%B %-d, %Y, %I:%M %p").to_string(),
        now.to_rfc3339(),
    ];
    let sheet_updated = match sheets.append_row(&row).await {
        Ok(()) => {
            tracing::info!(email = %email, "signup row appended");
            true
        }
        Err(e) => {
            tracing::error!(email = %email, error = %e, "sheet append failed");
            false
        }
    };

    SignupOutcome {
        email_sent,
        sheet_updated,
    }
}
