//! Operational period enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How long an asset or license remains in service.
///
/// Perpetual, OEM, and Open Source periods are non-expiring: the renewal
/// date plays no part in expiry computation for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "operational_period", rename_all = "snake_case")]
pub enum OperationalPeriod {
    /// One-time purchase, valid indefinitely.
    #[serde(rename = "Perpetual")]
    Perpetual,
    /// Recurring subscription with a renewal date.
    #[serde(rename = "Subscription")]
    Subscription,
    /// Time-limited evaluation.
    #[serde(rename = "Trial")]
    Trial,
    /// Bundled with the hardware it shipped on.
    #[serde(rename = "OEM")]
    Oem,
    /// Open-source licensed.
    #[serde(rename = "Open Source")]
    OpenSource,
}

impl OperationalPeriod {
    /// Whether this period is exempt from expiry computation.
    pub fn is_non_expiring(&self) -> bool {
        matches!(self, Self::Perpetual | Self::Oem | Self::OpenSource)
    }

    /// Return the period as its display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Perpetual => "Perpetual",
            Self::Subscription => "Subscription",
            Self::Trial => "Trial",
            Self::Oem => "OEM",
            Self::OpenSource => "Open Source",
        }
    }
}

impl fmt::Display for OperationalPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OperationalPeriod {
    type Err = assethub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "perpetual" => Ok(Self::Perpetual),
            "subscription" => Ok(Self::Subscription),
            "trial" => Ok(Self::Trial),
            "oem" => Ok(Self::Oem),
            "open source" | "open_source" => Ok(Self::OpenSource),
            _ => Err(assethub_core::AppError::validation(format!(
                "Invalid operational period: '{s}'. Expected one of: Perpetual, \
                 Subscription, Trial, OEM, Open Source"
            ))),
        }
    }
}
