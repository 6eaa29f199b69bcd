use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Caregiver,
    Professional,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Caregiver => "caregiver",
            Role::Professional => "professional",
            Role::Admin => "admin",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "caregiver" => Some(Role::Caregiver),
            "professional" => Some(Role::Professional),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// Signed-in user as seen by the dashboard. Carries the role claim that the
/// composition root dispatches on, rather than a literal scattered through
/// the views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSession {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("caregiver"), Some(Role::Caregiver));
        assert_eq!(Role::parse("superuser"), None);
    }
}
