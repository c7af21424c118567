//! Asset operational status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operational status of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "asset_status", rename_all = "snake_case")]
pub enum AssetStatus {
    /// The asset is in working order.
    #[serde(rename = "Functional")]
    Functional,
    /// The asset is being serviced.
    #[serde(rename = "Under Maintenance")]
    UnderMaintenance,
    /// The asset is faulty but potentially repairable.
    #[serde(rename = "Defective")]
    Defective,
    /// The asset is beyond repair or retired from use.
    #[serde(rename = "Unserviceable")]
    Unserviceable,
}

impl AssetStatus {
    /// Return the status as its display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Functional => "Functional",
            Self::UnderMaintenance => "Under Maintenance",
            Self::Defective => "Defective",
            Self::Unserviceable => "Unserviceable",
        }
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AssetStatus {
    type Err = assethub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "functional" => Ok(Self::Functional),
            "under maintenance" | "under_maintenance" => Ok(Self::UnderMaintenance),
            "defective" => Ok(Self::Defective),
            "unserviceable" => Ok(Self::Unserviceable),
            _ => Err(assethub_core::AppError::validation(format!(
                "Invalid asset status: '{s}'. Expected one of: Functional, \
                 Under Maintenance, Defective, Unserviceable"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_roundtrip() {
        for status in [
            AssetStatus::Functional,
            AssetStatus::UnderMaintenance,
            AssetStatus::Defective,
            AssetStatus::Unserviceable,
        ] {
            let parsed: AssetStatus = status.as_str().parse().expect("should parse");
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert!("Broken".parse::<AssetStatus>().is_err());
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&AssetStatus::UnderMaintenance).unwrap();
        assert_eq!(json, "\"Under Maintenance\"");
    }
}
