use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::professional::long_date;
use crate::models::{BookingDraft, DetailsInput, PaymentCard, Professional};

pub const DEFAULT_DURATION_MINUTES: i32 = 60;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Datetime,
    Details,
    Payment,
    Confirmation,
}

impl WizardStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::Datetime => "datetime",
            WizardStep::Details => "details",
            WizardStep::Payment => "payment",
            WizardStep::Confirmation => "confirmation",
        }
    }

    /// Zero-based position in the four-step progress indicator.
    pub fn position(&self) -> usize {
        match self {
            WizardStep::Datetime => 0,
            WizardStep::Details => 1,
            WizardStep::Payment => 2,
            WizardStep::Confirmation => 3,
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WizardError {
    #[error("cannot {action} at the {step} step")]
    WrongStep {
        step: WizardStep,
        action: &'static str,
    },

    #[error("{date} is not an available date")]
    UnknownDate { date: NaiveDate },

    #[error("{time} is not offered on {date}")]
    UnknownSlot { date: NaiveDate, time: String },

    #[error("select a date before choosing a time")]
    NoDateSelected,

    #[error("select a date and time to continue")]
    IncompleteDateTime,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("cannot go back from the {0} step")]
    NoBack(WizardStep),
}

/// Appointment details summary shown on the confirmation step.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub professional_name: String,
    pub date: String,
    pub time: String,
    pub patient_name: String,
    pub duration_minutes: i32,
    pub fee: String,
}

/// One booking attempt against one professional. Advances forward through the
/// four steps on valid submits, moves exactly one step back on an explicit
/// Back action, never skips.
#[derive(Debug, Clone)]
pub struct BookingWizard {
    professional: Professional,
    step: WizardStep,
    draft: BookingDraft,
}

impl BookingWizard {
    pub fn new(professional: Professional) -> Self {
        Self {
            professional,
            step: WizardStep::Datetime,
            draft: BookingDraft::default(),
        }
    }

    pub fn professional(&self) -> &Professional {
        &self.professional
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    fn require_step(&self, step: WizardStep, action: &'static str) -> Result<(), WizardError> {
        if self.step == step {
            Ok(())
        } else {
            Err(WizardError::WrongStep {
                step: self.step,
                action,
            })
        }
    }

    /// Picks an availability day. Switching to a different date invalidates
    /// any previously chosen time; its slot list no longer applies.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<(), WizardError> {
        self.require_step(WizardStep::Datetime, "select a date")?;

        if !self.professional.offers_date(date) {
            return Err(WizardError::UnknownDate { date });
        }

        if self.draft.selected_date != Some(date) {
            self.draft.selected_time = None;
        }
        self.draft.selected_date = Some(date);
        Ok(())
    }

    /// Picks a time slot belonging to the currently selected date.
    pub fn select_time(&mut self, time: &str) -> Result<(), WizardError> {
        self.require_step(WizardStep::Datetime, "select a time")?;

        let date = self.draft.selected_date.ok_or(WizardError::NoDateSelected)?;
        let slots = self
            .professional
            .slots_for(date)
            .ok_or(WizardError::UnknownDate { date })?;

        if !slots.iter().any(|s| s == time) {
            return Err(WizardError::UnknownSlot {
                date,
                time: time.to_string(),
            });
        }

        self.draft.selected_time = Some(time.to_string());
        Ok(())
    }

    /// datetime → details. Pure transition; nothing is reserved.
    pub fn submit_datetime(&mut self) -> Result<(), WizardError> {
        self.require_step(WizardStep::Datetime, "continue to details")?;

        if self.draft.selected_date.is_none() || self.draft.selected_time.is_none() {
            return Err(WizardError::IncompleteDateTime);
        }
        self.step = WizardStep::Details;
        Ok(())
    }

    pub fn set_details(&mut self, input: DetailsInput) -> Result<(), WizardError> {
        self.require_step(WizardStep::Details, "edit details")?;

        self.draft.patient_name = input.patient_name;
        self.draft.patient_age = input.patient_age;
        self.draft.caregiver_name = input.caregiver_name;
        self.draft.relationship = input.relationship;
        self.draft.phone = input.phone;
        self.draft.email = input.email;
        self.draft.reason = input.reason;
        self.draft.previous_diagnosis = input.previous_diagnosis;
        self.draft.urgency = input.urgency;
        Ok(())
    }

    /// details → payment. Presence-only gate; no format validation.
    pub fn submit_details(&mut self) -> Result<(), WizardError> {
        self.require_step(WizardStep::Details, "continue to payment")?;

        let required: [(&'static str, &str); 5] = [
            ("patientName", self.draft.patient_name.as_str()),
            ("caregiverName", self.draft.caregiver_name.as_str()),
            ("phone", self.draft.phone.as_str()),
            ("email", self.draft.email.as_str()),
            ("reason", self.draft.reason.as_str()),
        ];
        for (name, value) in required {
            if value.is_empty() {
                return Err(WizardError::MissingField(name));
            }
        }
        self.step = WizardStep::Payment;
        Ok(())
    }

    /// payment → confirmation. The mock processor always approves; the card
    /// is dropped without being stored or transmitted.
    pub fn submit_payment(&mut self, _card: PaymentCard) -> Result<(), WizardError> {
        self.require_step(WizardStep::Payment, "complete booking")?;
        self.step = WizardStep::Confirmation;
        Ok(())
    }

    /// Moves exactly one step backward, keeping every entered value.
    pub fn back(&mut self) -> Result<(), WizardError> {
        self.step = match self.step {
            WizardStep::Details => WizardStep::Datetime,
            WizardStep::Payment => WizardStep::Details,
            step => return Err(WizardError::NoBack(step)),
        };
        Ok(())
    }

    /// "Book Another Appointment": a fresh draft at the first step.
    pub fn book_another(&mut self) -> Result<(), WizardError> {
        self.require_step(WizardStep::Confirmation, "start another booking")?;
        self.draft = BookingDraft::default();
        self.step = WizardStep::Datetime;
        Ok(())
    }

    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::Datetime => {
                self.draft.selected_date.is_some() && self.draft.selected_time.is_some()
            }
            WizardStep::Details => {
                !self.draft.patient_name.is_empty()
                    && !self.draft.caregiver_name.is_empty()
                    && !self.draft.phone.is_empty()
                    && !self.draft.email.is_empty()
                    && !self.draft.reason.is_empty()
            }
            WizardStep::Payment => true,
            WizardStep::Confirmation => false,
        }
    }

    pub fn summary(&self) -> Result<BookingSummary, WizardError> {
        self.require_step(WizardStep::Confirmation, "view the summary")?;

        // Both are guaranteed set: confirmation is only reachable through
        // submit_datetime.
        let date = self.draft.selected_date.ok_or(WizardError::IncompleteDateTime)?;
        let time = self
            .draft
            .selected_time
            .clone()
            .ok_or(WizardError::IncompleteDateTime)?;

        Ok(BookingSummary {
            professional_name: self.professional.name.clone(),
            date: long_date(date),
            time,
            patient_name: self.draft.patient_name.clone(),
            duration_minutes: DEFAULT_DURATION_MINUTES,
            fee: self.professional.fee_display(),
        })
    }
}
