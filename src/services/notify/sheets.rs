use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde_json::json;

use super::SheetAppender;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// Columns: Email, Date, Timestamp
const SIGNUP_RANGE: &str = "Sheet1!A:C";

/// Appends signup rows to a fixed Google Sheet via the Sheets v4 API.
pub struct GoogleSheets {
    api_token: String,
    sheet_id: String,
    client: reqwest::Client,
}

impl GoogleSheets {
    pub fn new(api_token: String, sheet_id: String) -> Self {
        Self {
            api_token,
            sheet_id,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SheetAppender for GoogleSheets {
    async fn append_row(&self, row: &[String]) -> anyhow::Result<()> {
        let url = format!(
            "https://sheets.googleapis.com/v4/spreadsheets/{}/values/{}:append",
            self.sheet_id, SIGNUP_RANGE
        );

        self.client
            .post(&url)
            .bearer_auth(&self.api_token)
            .query(&[("valueInputOption", "RAW")])
            .timeout(REQUEST_TIMEOUT)
            .json(&json!({ "values": [row] }))
            .send()
            .await
            .context("failed to call Sheets API")?
            .error_for_status()
            .context("Sheets API returned error")?;

        Ok(())
    }
}
