//! Personnel entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use assethub_core::types::id::PersonnelId;

use super::role::PersonnelRole;
use super::status::AccountStatus;

/// A member of the personnel directory.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Personnel {
    /// Unique personnel identifier.
    pub id: PersonnelId,
    /// First name.
    pub first_name: String,
    /// Middle name or initial.
    pub middle_name: Option<String>,
    /// Last name.
    pub last_name: String,
    /// Email address (the raw identity string used in provenance fields).
    pub email: String,
    /// Position or department.
    pub position: Option<String>,
    /// Account role.
    pub role: PersonnelRole,
    /// Approval status.
    pub account_status: AccountStatus,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Personnel {
    /// Compose the display name as `first [M.] last`.
    ///
    /// A multi-character middle name contributes its first letter uppercased
    /// plus a period; a single letter gets a period appended; empty parts are
    /// skipped. An entirely empty name renders as `"Unknown User"`.
    pub fn full_name(&self) -> String {
        let middle_initial = match self.middle_name.as_deref().map(str::trim) {
            Some(middle) if !middle.is_empty() => {
                if middle.len() > 1 && !middle.ends_with('.') {
                    middle
                        .chars()
                        .next()
                        .map(|c| format!("{}.", c.to_uppercase()))
                        .unwrap_or_default()
                } else if middle.len() == 1 {
                    format!("{middle}.")
                } else {
                    middle.to_string()
                }
            }
            _ => String::new(),
        };

        let name = [self.first_name.trim(), &middle_initial, self.last_name.trim()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");

        if name.is_empty() {
            "Unknown User".to_string()
        } else {
            name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(first: &str, middle: Option<&str>, last: &str) -> Personnel {
        let now = Utc::now();
        Personnel {
            id: PersonnelId::new(),
            first_name: first.to_string(),
            middle_name: middle.map(str::to_string),
            last_name: last.to_string(),
            email: "person@example.org".to_string(),
            position: None,
            role: PersonnelRole::Staff,
            account_status: AccountStatus::Approved,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_full_middle_name_becomes_initial() {
        assert_eq!(
            person("Juan", Some("Miguel"), "Cruz").full_name(),
            "Juan M. Cruz"
        );
    }

    #[test]
    fn test_single_letter_middle_gets_period() {
        assert_eq!(person("Juan", Some("M"), "Cruz").full_name(), "Juan M. Cruz");
    }

    #[test]
    fn test_already_abbreviated_middle_kept() {
        assert_eq!(
            person("Juan", Some("M."), "Cruz").full_name(),
            "Juan M. Cruz"
        );
    }

    #[test]
    fn test_no_middle_name() {
        assert_eq!(person("Juan", None, "Cruz").full_name(), "Juan Cruz");
    }

    #[test]
    fn test_empty_name_falls_back() {
        assert_eq!(person("", None, "").full_name(), "Unknown User");
    }
}
