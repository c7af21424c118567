//! Request context carrying the acting identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use assethub_core::types::id::PersonnelId;
use assethub_entity::personnel::role::PersonnelRole;

/// Context for the current authenticated request.
///
/// Produced at the application boundary from the identity provider's output
/// and passed into service methods so that every operation knows *who* is
/// acting. The `identity` string (normally the email address) is what gets
/// stamped into provenance and history fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The acting user's directory entry, when one resolved.
    pub personnel_id: Option<PersonnelId>,
    /// Stable identity string of the actor (email address).
    pub identity: String,
    /// The actor's role.
    pub role: PersonnelRole,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(personnel_id: Option<PersonnelId>, identity: String, role: PersonnelRole) -> Self {
        Self {
            personnel_id,
            identity,
            role,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current user is a super-admin.
    pub fn is_super_admin(&self) -> bool {
        matches!(self.role, PersonnelRole::SuperAdmin)
    }
}
