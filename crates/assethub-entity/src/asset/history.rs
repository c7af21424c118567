//! Status change history entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::AssetStatus;

/// A single entry in an asset's status history.
///
/// Entries are immutable once appended: the history sequence only ever
/// grows, and existing entries are never edited or reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusChangeEvent {
    /// When the change was applied.
    pub changed_at: DateTime<Utc>,
    /// Identity of the actor who applied the change.
    pub changed_by: String,
    /// Status before the change.
    pub from: AssetStatus,
    /// Status after the change.
    pub to: AssetStatus,
    /// Reason supplied for the change. Non-empty whenever `from != to`.
    pub reason: String,
    /// Responsible party for a completed maintenance. Present exactly for
    /// the Under Maintenance -> Functional transition.
    pub maintained_by: Option<String>,
}
