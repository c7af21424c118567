//! Read-time join of the report ledger onto asset records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use assethub_core::types::id::AssetRecordId;
use assethub_entity::asset::model::AssetRecord;
use assethub_entity::report::model::ReportedIssue;

/// An asset record annotated with its open-report projection.
///
/// The flags are a read-time projection only; nothing is written back to
/// the asset store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedAsset {
    /// The underlying record.
    pub record: AssetRecord,
    /// Whether at least one report references this record.
    pub has_open_reports: bool,
    /// Number of reports referencing this record.
    pub report_count: u64,
}

/// Group the ledger by referenced record and annotate each asset.
///
/// Pure function of its inputs: identical inputs produce identical output
/// and neither input collection is mutated.
pub fn annotate(records: Vec<AssetRecord>, issues: &[ReportedIssue]) -> Vec<AnnotatedAsset> {
    let mut counts: HashMap<AssetRecordId, u64> = HashMap::new();
    for issue in issues {
        *counts.entry(issue.asset_record_id).or_default() += 1;
    }

    records
        .into_iter()
        .map(|record| {
            let report_count = counts.get(&record.id).copied().unwrap_or(0);
            AnnotatedAsset {
                has_open_reports: report_count > 0,
                report_count,
                record,
            }
        })
        .collect()
}
