//! Personnel role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of a personnel account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "personnel_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PersonnelRole {
    /// Regular IT/supply personnel.
    Staff,
    /// Super-admin with access to archival and purge operations.
    SuperAdmin,
}

impl PersonnelRole {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Staff => "staff",
            Self::SuperAdmin => "super_admin",
        }
    }
}

impl fmt::Display for PersonnelRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PersonnelRole {
    type Err = assethub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "staff" => Ok(Self::Staff),
            "super_admin" => Ok(Self::SuperAdmin),
            _ => Err(assethub_core::AppError::validation(format!(
                "Invalid personnel role: '{s}'. Expected one of: staff, super_admin"
            ))),
        }
    }
}
