//! Derived analytics over the live asset set.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Utc};

use assethub_core::error::AppError;
use assethub_entity::asset::status::AssetStatus;
use assethub_entity::store::AssetStore;

/// Computes status/category summaries from the live asset set.
///
/// Classification uses the expiry projection, so a lapsed subscription
/// shows as unserviceable here even while its stored status is untouched.
#[derive(Debug, Clone)]
pub struct AnalyticsService {
    /// Live asset store.
    assets: Arc<dyn AssetStore>,
}

/// Per-month breakdown of computed asset conditions.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct MonthlyConditionCount {
    /// Assets classified functional.
    pub functional: u64,
    /// Assets inside the expiry warning window.
    pub defective: u64,
    /// Assets past their renewal date.
    pub unserviceable: u64,
}

/// Summary of the live asset set.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AssetSummary {
    /// The date the summary was computed against.
    pub as_of: NaiveDate,
    /// Total number of live assets.
    pub total_assets: u64,
    /// Counts per computed condition.
    pub by_condition: BTreeMap<String, u64>,
    /// Counts per category.
    pub by_category: BTreeMap<String, u64>,
    /// Twelve buckets keyed by month of purchase (January first).
    pub by_month: Vec<MonthlyConditionCount>,
}

impl AnalyticsService {
    /// Creates a new analytics service.
    pub fn new(assets: Arc<dyn AssetStore>) -> Self {
        Self { assets }
    }

    /// Computes a summary against today's date.
    pub async fn summary(&self) -> Result<AssetSummary, AppError> {
        self.summary_as_of(Utc::now().date_naive()).await
    }

    /// Computes a summary against an explicit date.
    pub async fn summary_as_of(&self, as_of: NaiveDate) -> Result<AssetSummary, AppError> {
        let records = self.assets.find_all().await?;

        let mut by_condition: BTreeMap<String, u64> = BTreeMap::new();
        let mut by_category: BTreeMap<String, u64> = BTreeMap::new();
        let mut by_month = vec![MonthlyConditionCount::default(); 12];

        for record in &records {
            let condition = record.expiry_status(as_of);
            *by_condition.entry(condition.to_string()).or_default() += 1;
            *by_category.entry(record.category.clone()).or_default() += 1;

            let bucket_date = record
                .purchase_date
                .unwrap_or_else(|| record.created_at.date_naive());
            let bucket = &mut by_month[bucket_date.month0() as usize];
            match condition {
                AssetStatus::Functional => bucket.functional += 1,
                AssetStatus::Defective => bucket.defective += 1,
                AssetStatus::Unserviceable => bucket.unserviceable += 1,
                // The expiry projection never yields Under Maintenance.
                AssetStatus::UnderMaintenance => {}
            }
        }

        Ok(AssetSummary {
            as_of,
            total_assets: records.len() as u64,
            by_condition,
            by_category,
            by_month,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assethub_entity::asset::period::OperationalPeriod;

    use crate::testing::{memory_analytics_service, seed_asset_with};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_summary_counts_by_condition_and_month() {
        let (svc, stores) = memory_analytics_service();

        // Lapsed subscription, bought in March.
        seed_asset_with(&stores, |rec| {
            rec.operational_period = OperationalPeriod::Subscription;
            rec.purchase_date = Some(date(2025, 3, 10));
            rec.renewal_date = Some(date(2026, 1, 1));
        })
        .await;
        // Perpetual with the same lapsed renewal date, bought in March.
        seed_asset_with(&stores, |rec| {
            rec.operational_period = OperationalPeriod::Perpetual;
            rec.purchase_date = Some(date(2025, 3, 20));
            rec.renewal_date = Some(date(2026, 1, 1));
        })
        .await;

        let summary = svc.summary_as_of(date(2026, 2, 1)).await.expect("summary");

        assert_eq!(summary.total_assets, 2);
        assert_eq!(summary.by_condition.get("Unserviceable"), Some(&1));
        assert_eq!(summary.by_condition.get("Functional"), Some(&1));
        assert_eq!(summary.by_month[2].unserviceable, 1);
        assert_eq!(summary.by_month[2].functional, 1);
    }

    #[tokio::test]
    async fn test_renewal_date_change_does_not_move_non_expiring() {
        let (svc, stores) = memory_analytics_service();

        let record = seed_asset_with(&stores, |rec| {
            rec.operational_period = OperationalPeriod::Oem;
            rec.renewal_date = None;
        })
        .await;
        let before = svc.summary_as_of(date(2026, 2, 1)).await.expect("summary");

        // Backdating the renewal date must not change the classification.
        let mut updated = record.clone();
        updated.renewal_date = Some(date(2020, 1, 1));
        stores.assets.put(updated).await;
        let after = svc.summary_as_of(date(2026, 2, 1)).await.expect("summary");

        assert_eq!(
            before.by_condition.get("Functional"),
            after.by_condition.get("Functional")
        );
        assert_eq!(after.by_condition.get("Unserviceable"), None);
    }
}
