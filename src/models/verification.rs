use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Pending,
    UnderReview,
    Approved,
    Rejected,
}

impl VerificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Pending => "pending",
            VerificationStatus::UnderReview => "under_review",
            VerificationStatus::Approved => "approved",
            VerificationStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(VerificationStatus::Pending),
            "under_review" => Some(VerificationStatus::UnderReview),
            "approved" => Some(VerificationStatus::Approved),
            "rejected" => Some(VerificationStatus::Rejected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub kind: String,
    pub title: String,
    pub institution: String,
    pub year: String,
    pub verified: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationDocument {
    pub kind: String,
    pub url: String,
    pub uploaded: NaiveDate,
}

/// A professional's application to join the directory, as reviewed by admins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    pub id: String,
    pub name: String,
    pub email: String,
    pub specialization: String,
    pub location: String,
    pub years_experience: u32,
    pub submitted_date: NaiveDate,
    pub status: VerificationStatus,
    pub credentials: Vec<Credential>,
    pub documents: Vec<VerificationDocument>,
    pub bio: String,
    pub consultation_fee: i64,
    pub languages: Vec<String>,
}
