use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::wizard::BookingWizard;

const SESSION_TTL_MINUTES: i64 = 30;

struct Entry {
    wizard: BookingWizard,
    last_activity: DateTime<Utc>,
}

/// In-memory wizard instances, one per visit, keyed by session id.
/// Idle sessions are pruned lazily; nothing outlives the process.
pub struct WizardSessions {
    inner: Mutex<HashMap<Uuid, Entry>>,
    ttl: Duration,
}

impl Default for WizardSessions {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardSessions {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            ttl: Duration::minutes(SESSION_TTL_MINUTES),
        }
    }

    #[cfg(test)]
    fn with_ttl(ttl: Duration) -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    pub fn create(&self, wizard: BookingWizard) -> Uuid {
        let id = Uuid::new_v4();
        let mut sessions = self.inner.lock().unwrap();
        Self::prune(&mut sessions, self.ttl);
        sessions.insert(
            id,
            Entry {
                wizard,
                last_activity: Utc::now(),
            },
        );
        id
    }

    /// Runs `f` against the session's wizard, refreshing its activity clock.
    /// Returns `None` when the session is unknown or has expired.
    pub fn with<R>(&self, id: Uuid, f: impl FnOnce(&mut BookingWizard) -> R) -> Option<R> {
        let mut sessions = self.inner.lock().unwrap();
        Self::prune(&mut sessions, self.ttl);
        let entry = sessions.get_mut(&id)?;
        entry.last_activity = Utc::now();
        Some(f(&mut entry.wizard))
    }

    /// Discards a session (the wizard "unmount").
    pub fn remove(&self, id: Uuid) -> bool {
        self.inner.lock().unwrap().remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn prune(sessions: &mut HashMap<Uuid, Entry>, ttl: Duration) {
        let cutoff = Utc::now() - ttl;
        sessions.retain(|_, entry| entry.last_activity > cutoff);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AvailabilityDay, Professional};

    fn professional() -> Professional {
        Professional {
            id: "1".to_string(),
            name: "Dr. Sarah Johnson".to_string(),
            specialization: "Developmental Pediatrics".to_string(),
            location: "Lagos, Nigeria".to_string(),
            bio: String::new(),
            rating: 4.9,
            review_count: 127,
            verified: true,
            years_experience: 15,
            consultation_fee: 25000,
            languages: vec![],
            availability: vec![AvailabilityDay {
                date: "2024-01-22".parse().unwrap(),
                slots: vec!["10:00 AM".to_string()],
            }],
        }
    }

    #[test]
    fn test_create_and_access() {
        let sessions = WizardSessions::new();
        let id = sessions.create(BookingWizard::new(professional()));

        let name = sessions
            .with(id, |w| w.professional().name.clone())
            .unwrap();
        assert_eq!(name, "Dr. Sarah Johnson");
    }

    #[test]
    fn test_unknown_session() {
        let sessions = WizardSessions::new();
        assert!(sessions.with(Uuid::new_v4(), |_| ()).is_none());
    }

    #[test]
    fn test_remove_discards_state() {
        let sessions = WizardSessions::new();
        let id = sessions.create(BookingWizard::new(professional()));

        assert!(sessions.remove(id));
        assert!(!sessions.remove(id));
        assert!(sessions.with(id, |_| ()).is_none());
    }

    #[test]
    fn test_expired_sessions_are_pruned() {
        let sessions = WizardSessions::with_ttl(Duration::minutes(-1));
        let id = sessions.create(BookingWizard::new(professional()));

        assert!(sessions.with(id, |_| ()).is_none());
        assert!(sessions.is_empty());
    }

    #[test]
    fn test_mutations_persist_across_calls() {
        let sessions = WizardSessions::new();
        let id = sessions.create(BookingWizard::new(professional()));

        sessions
            .with(id, |w| w.select_date("2024-01-22".parse().unwrap()))
            .unwrap()
            .unwrap();
        let date = sessions.with(id, |w| w.draft().selected_date).unwrap();
        assert_eq!(date, Some("2024-01-22".parse().unwrap()));
    }
}
