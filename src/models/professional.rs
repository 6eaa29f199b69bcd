use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityDay {
    pub date: NaiveDate,
    pub slots: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Professional {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub location: String,
    pub bio: String,
    pub rating: f64,
    pub review_count: u32,
    pub verified: bool,
    pub years_experience: u32,
    pub consultation_fee: i64,
    pub languages: Vec<String>,
    pub availability: Vec<AvailabilityDay>,
}

impl Professional {
    /// Slot list for a given availability day, if that day is offered at all.
    pub fn slots_for(&self, date: NaiveDate) -> Option<&[String]> {
        self.availability
            .iter()
            .find(|day| day.date == date)
            .map(|day| day.slots.as_slice())
    }

    pub fn offers_date(&self, date: NaiveDate) -> bool {
        self.availability.iter().any(|day| day.date == date)
    }

    pub fn fee_display(&self) -> String {
        format_naira(self.consultation_fee)
    }
}

/// Renders an integer naira amount with thousands separators, e.g. `₦25,000`.
pub fn format_naira(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("₦{sign}{grouped}")
}

/// Long-form date used on booking screens: "Monday, January 22, 2024".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
