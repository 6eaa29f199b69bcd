use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    #[default]
    Routine,
    Urgent,
    Emergency,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Routine => "routine",
            Urgency::Urgent => "urgent",
            Urgency::Emergency => "emergency",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "urgent" => Urgency::Urgent,
            "emergency" => Urgency::Emergency,
            _ => Urgency::Routine,
        }
    }
}

/// Everything a visitor has entered for one booking attempt. Session-scoped,
/// never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub selected_date: Option<NaiveDate>,
    pub selected_time: Option<String>,
    pub patient_name: String,
    pub patient_age: String,
    pub caregiver_name: String,
    pub relationship: String,
    pub phone: String,
    pub email: String,
    pub reason: String,
    pub previous_diagnosis: String,
    pub urgency: Urgency,
}

/// Patient/contact fields captured on the details step.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsInput {
    #[serde(default)]
    pub patient_name: String,
    #[serde(default)]
    pub patient_age: String,
    #[serde(default)]
    pub caregiver_name: String,
    #[serde(default)]
    pub relationship: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub previous_diagnosis: String,
    #[serde(default)]
    pub urgency: Urgency,
}

/// Card fields from the payment step. Captured for the form round-trip only;
/// nothing is transmitted to a processor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCard {
    #[serde(default)]
    pub card_number: String,
    #[serde(default)]
    pub expiry: String,
    #[serde(default)]
    pub cvv: String,
    #[serde(default)]
    pub card_name: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "confirmed" => BookingStatus::Confirmed,
            "completed" => BookingStatus::Completed,
            "cancelled" => BookingStatus::Cancelled,
            _ => BookingStatus::Pending,
        }
    }
}

/// An existing appointment as shown on the "my bookings" page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub id: String,
    pub professional_name: String,
    pub professional_specialization: String,
    pub date: NaiveDate,
    pub time: String,
    pub duration_minutes: i32,
    pub status: BookingStatus,
    pub patient_name: String,
    pub fee: i64,
    pub notes: String,
}
