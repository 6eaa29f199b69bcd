use serde::Serialize;

use crate::directory::Directory;
use crate::models::{format_naira, BookingStatus, Role, UserSession, VerificationStatus};

#[derive(Debug, Clone, Serialize)]
pub struct StatCard {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub role: Role,
    pub greeting: String,
    pub stats: Vec<StatCard>,
    pub actions: Vec<String>,
}

/// One dashboard variant per role. Variants are picked once, at the
/// composition root, instead of string-tag branches inside the views.
pub trait Dashboard {
    fn stats(&self, directory: &Directory) -> Vec<StatCard>;
    fn actions(&self) -> Vec<String>;
}

pub fn for_role(role: Role) -> Box<dyn Dashboard> {
    match role {
        Role::Caregiver => Box::new(CaregiverDashboard),
        Role::Professional => Box::new(ProfessionalDashboard),
        Role::Admin => Box::new(AdminDashboard),
    }
}

pub fn view(session: &UserSession, directory: &Directory) -> DashboardView {
    let dashboard = for_role(session.role);
    DashboardView {
        role: session.role,
        greeting: format!("Welcome back, {}", session.name),
        stats: dashboard.stats(directory),
        actions: dashboard.actions(),
    }
}

fn stat(label: &str, value: String) -> StatCard {
    StatCard {
        label: label.to_string(),
        value,
    }
}

struct CaregiverDashboard;

impl Dashboard for CaregiverDashboard {
    fn stats(&self, directory: &Directory) -> Vec<StatCard> {
        let bookings = directory.bookings();
        let upcoming = bookings
            .iter()
            .filter(|b| matches!(b.status, BookingStatus::Pending | BookingStatus::Confirmed))
            .count();
        let completed = bookings
            .iter()
            .filter(|b| b.status == BookingStatus::Completed)
            .count();
        vec![
            stat("Upcoming Appointments", upcoming.to_string()),
            stat("Completed Sessions", completed.to_string()),
            stat("Professionals Available", directory.professionals().len().to_string()),
        ]
    }

    fn actions(&self) -> Vec<String> {
        vec![
            "Find a professional".to_string(),
            "View my bookings".to_string(),
            "Ask the care assistant".to_string(),
        ]
    }
}

struct ProfessionalDashboard;

impl Dashboard for ProfessionalDashboard {
    fn stats(&self, directory: &Directory) -> Vec<StatCard> {
        let bookings = directory.bookings();
        let this_month = bookings.len();
        let earnings: i64 = bookings
            .iter()
            .filter(|b| b.status == BookingStatus::Completed)
            .map(|b| b.fee)
            .sum();
        vec![
            stat("This Month's Bookings", this_month.to_string()),
            stat("Earnings", format_naira(earnings)),
            stat("Pending Requests", bookings
                .iter()
                .filter(|b| b.status == BookingStatus::Pending)
                .count()
                .to_string()),
        ]
    }

    fn actions(&self) -> Vec<String> {
        vec![
            "Update availability".to_string(),
            "Review appointment requests".to_string(),
        ]
    }
}

struct AdminDashboard;

impl Dashboard for AdminDashboard {
    fn stats(&self, directory: &Directory) -> Vec<StatCard> {
        let pending = directory
            .verifications_with_status(VerificationStatus::Pending)
            .len();
        let under_review = directory
            .verifications_with_status(VerificationStatus::UnderReview)
            .len();
        let verified = directory
            .professionals()
            .iter()
            .filter(|p| p.verified)
            .count();
        vec![
            stat("Pending Verifications", pending.to_string()),
            stat("Under Review", under_review.to_string()),
            stat("Verified Professionals", verified.to_string()),
            stat("Total Bookings", directory.bookings().len().to_string()),
        ]
    }

    fn actions(&self) -> Vec<String> {
        vec![
            "Review verifications".to_string(),
            "View booking activity".to_string(),
        ]
    }
}
