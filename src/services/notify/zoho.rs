use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde_json::json;

use super::Mailer;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const WELCOME_SUBJECT: &str = "Thank you for your interest in Nexora Care!";

const WELCOME_TEXT: &str = "Thank You for Your Interest!\n\n\
Hello!\n\n\
Thank you for signing up to be notified about our healthcare professionals directory. \
We're working hard to connect families and caregivers with qualified specialists in \
Intellectual and Developmental Disabilities.\n\n\
We'll keep you updated on our progress and let you know as soon as the directory is \
available!\n\n\
What to Expect:\n\
- Updates on our launch timeline\n\
- Early access to the professionals directory\n\
- Resources and tips for IDD care\n\n\
Best regards,\n\
The Nexora Care Team";

const WELCOME_HTML: &str = r#"<!DOCTYPE html>
<html>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px;">
  <h1 style="color: #0f766e; text-align: center;">Thank You for Your Interest!</h1>
  <div style="background-color: #f0fdfa; padding: 20px; border-radius: 8px; border-left: 4px solid #0f766e;">
    <p>Hello!</p>
    <p>Thank you for signing up to be notified about our healthcare professionals directory. We're working hard to connect families and caregivers with qualified specialists in Intellectual and Developmental Disabilities.</p>
    <p>We'll keep you updated on our progress and let you know as soon as the directory is available!</p>
  </div>
  <h3 style="color: #0f766e;">What to Expect:</h3>
  <ul>
    <li>Updates on our launch timeline</li>
    <li>Early access to the professionals directory</li>
    <li>Resources and tips for IDD care</li>
  </ul>
  <p style="color: #666; font-size: 14px;">Best regards,<br>The Nexora Care Team</p>
</body>
</html>"#;

/// Welcome mail via Zoho's transactional mail (ZeptoMail) HTTP API.
pub struct ZohoMailer {
    api_token: String,
    from_email: String,
    client: reqwest::Client,
}

impl ZohoMailer {
    pub fn new(api_token: String, from_email: String) -> Self {
        Self {
            api_token,
            from_email,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Mailer for ZohoMailer {
    async fn send_welcome(&self, to: &str) -> anyhow::Result<()> {
        let body = json!({
            "from": { "address": self.from_email, "name": "Nexora Care Team" },
            "to": [{ "email_address": { "address": to } }],
            "subject": WELCOME_SUBJECT,
            "htmlbody": WELCOME_HTML,
            "textbody": WELCOME_TEXT,
        });

        self.client
            .post("https://api.zeptomail.com/v1.1/email")
            .header("Authorization", format!("Zoho-enczapikey {}", self.api_token))
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await
            .context("failed to call Zoho mail API")?
            .error_for_status()
            .context("Zoho mail API returned error")?;

        Ok(())
    }
}
