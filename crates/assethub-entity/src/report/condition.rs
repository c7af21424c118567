//! Reported asset condition enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Condition classification supplied with a reported issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "report_condition", rename_all = "snake_case")]
pub enum ReportCondition {
    /// Physically damaged.
    #[serde(rename = "Damaged")]
    Damaged,
    /// Observed to be in maintenance.
    #[serde(rename = "Under Maintenance")]
    UnderMaintenance,
    /// Malfunctioning.
    #[serde(rename = "Defective")]
    Defective,
    /// Not usable at all.
    #[serde(rename = "Unserviceable")]
    Unserviceable,
}

impl ReportCondition {
    /// Return the condition as its display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Damaged => "Damaged",
            Self::UnderMaintenance => "Under Maintenance",
            Self::Defective => "Defective",
            Self::Unserviceable => "Unserviceable",
        }
    }
}

impl fmt::Display for ReportCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportCondition {
    type Err = assethub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "damaged" => Ok(Self::Damaged),
            "under maintenance" | "under_maintenance" => Ok(Self::UnderMaintenance),
            "defective" => Ok(Self::Defective),
            "unserviceable" => Ok(Self::Unserviceable),
            _ => Err(assethub_core::AppError::validation(format!(
                "Invalid report condition: '{s}'. Expected one of: Damaged, \
                 Under Maintenance, Defective, Unserviceable"
            ))),
        }
    }
}
