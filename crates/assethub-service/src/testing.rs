//! In-memory store fakes and fixtures shared by the service tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use assethub_core::config::qr::QrConfig;
use assethub_core::error::AppError;
use assethub_core::result::AppResult;
use assethub_core::types::id::{ArchivedAssetId, AssetRecordId, PersonnelId, ReportedIssueId};
use assethub_core::types::pagination::{PageRequest, PageResponse};
use assethub_entity::archive::model::ArchivedAssetRecord;
use assethub_entity::asset::model::{AssetRecord, CreateAsset};
use assethub_entity::asset::period::OperationalPeriod;
use assethub_entity::asset::status::AssetStatus;
use assethub_entity::personnel::model::Personnel;
use assethub_entity::personnel::role::PersonnelRole;
use assethub_entity::personnel::status::AccountStatus;
use assethub_entity::report::condition::ReportCondition;
use assethub_entity::report::model::{CreateReportedIssue, ReportedIssue};
use assethub_entity::store::{ArchiveStore, AssetStore, PersonnelDirectory, ReportStore};
use sqlx::types::Json;

use crate::archive::ArchiveService;
use crate::asset::{AssetService, EditAssetRequest};
use crate::context::RequestContext;
use crate::notify::LogEventSink;
use crate::qr::QrBinder;
use crate::report::{AnalyticsService, ReportService};

/// In-memory asset store with one-shot failure injection.
#[derive(Debug, Default)]
pub(crate) struct MemoryAssetStore {
    records: Mutex<HashMap<AssetRecordId, AssetRecord>>,
    fail_replace: AtomicBool,
    fail_delete: AtomicBool,
}

impl MemoryAssetStore {
    pub(crate) async fn put(&self, record: AssetRecord) {
        self.records.lock().unwrap().insert(record.id, record);
    }

    pub(crate) async fn get(&self, id: AssetRecordId) -> Option<AssetRecord> {
        self.records.lock().unwrap().get(&id).cloned()
    }

    /// Make the next `replace` call fail with a persistence error.
    pub(crate) fn fail_next_replace(&self) {
        self.fail_replace.store(true, Ordering::SeqCst);
    }

    /// Make the next `delete` call fail with a persistence error.
    pub(crate) fn fail_next_delete(&self) {
        self.fail_delete.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl AssetStore for MemoryAssetStore {
    async fn find_by_id(&self, id: AssetRecordId) -> AppResult<Option<AssetRecord>> {
        Ok(self.records.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_asset_id(&self, asset_id: &str) -> AppResult<Option<AssetRecord>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .values()
            .find(|r| r.asset_id == asset_id)
            .cloned())
    }

    async fn find_page(&self, page: &PageRequest) -> AppResult<PageResponse<AssetRecord>> {
        let mut records: Vec<AssetRecord> =
            self.records.lock().unwrap().values().cloned().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let total = records.len() as u64;
        let items = records
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    async fn find_all(&self) -> AppResult<Vec<AssetRecord>> {
        let mut records: Vec<AssetRecord> =
            self.records.lock().unwrap().values().cloned().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    async fn create(&self, data: &CreateAsset) -> AppResult<AssetRecord> {
        let now = Utc::now();
        let record = AssetRecord {
            id: AssetRecordId::new(),
            asset_id: data.asset_id.clone(),
            asset_name: data.asset_name.clone(),
            category: data.category.clone(),
            sub_type: data.sub_type.clone(),
            serial_number: data.serial_number.clone(),
            operational_period: data.operational_period,
            status: data.status,
            assigned_personnel: data.assigned_personnel,
            purchase_date: data.purchase_date,
            renewal_date: data.renewal_date,
            generate_qr: data.generate_qr,
            qr_image: None,
            canonical_url: None,
            history: Json(Vec::new()),
            created_by: data.created_by.clone(),
            created_at: now,
            updated_by: data.created_by.clone(),
            updated_at: now,
        };
        self.records.lock().unwrap().insert(record.id, record.clone());
        Ok(record)
    }

    async fn replace(&self, record: &AssetRecord) -> AppResult<AssetRecord> {
        if self.fail_replace.swap(false, Ordering::SeqCst) {
            return Err(AppError::persistence("Injected replace failure"));
        }
        let mut records = self.records.lock().unwrap();
        if !records.contains_key(&record.id) {
            return Err(AppError::not_found(format!("Asset {} not found", record.id)));
        }
        records.insert(record.id, record.clone());
        Ok(record.clone())
    }

    async fn delete(&self, id: AssetRecordId) -> AppResult<bool> {
        if self.fail_delete.swap(false, Ordering::SeqCst) {
            return Err(AppError::persistence("Injected delete failure"));
        }
        Ok(self.records.lock().unwrap().remove(&id).is_some())
    }
}

/// In-memory archive store with one-shot failure injection.
#[derive(Debug, Default)]
pub(crate) struct MemoryArchiveStore {
    entries: Mutex<Vec<ArchivedAssetRecord>>,
    fail_create: AtomicBool,
}

impl MemoryArchiveStore {
    pub(crate) async fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Make the next `create` call fail with a persistence error.
    pub(crate) fn fail_next_create(&self) {
        self.fail_create.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl ArchiveStore for MemoryArchiveStore {
    async fn create(&self, snapshot: &ArchivedAssetRecord) -> AppResult<ArchivedAssetRecord> {
        if self.fail_create.swap(false, Ordering::SeqCst) {
            return Err(AppError::persistence("Injected archive failure"));
        }
        self.entries.lock().unwrap().push(snapshot.clone());
        Ok(snapshot.clone())
    }

    async fn find_page(&self, page: &PageRequest) -> AppResult<PageResponse<ArchivedAssetRecord>> {
        let mut entries = self.entries.lock().unwrap().clone();
        entries.sort_by(|a, b| b.deleted_at.cmp(&a.deleted_at));
        let total = entries.len() as u64;
        let items = entries
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    async fn purge(&self, id: ArchivedAssetId) -> AppResult<bool> {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| e.id != id);
        Ok(entries.len() < before)
    }
}

/// In-memory report ledger.
#[derive(Debug, Default)]
pub(crate) struct MemoryReportStore {
    entries: Mutex<Vec<ReportedIssue>>,
}

#[async_trait]
impl ReportStore for MemoryReportStore {
    async fn create(&self, data: &CreateReportedIssue) -> AppResult<ReportedIssue> {
        let report = ReportedIssue {
            id: ReportedIssueId::new(),
            asset_record_id: data.asset_record_id,
            asset_id: data.asset_id.clone(),
            asset_name: data.asset_name.clone(),
            condition: data.condition,
            description: data.description.clone(),
            image: data.image.clone(),
            reported_by: data.reported_by.clone(),
            created_at: Utc::now(),
        };
        self.entries.lock().unwrap().push(report.clone());
        Ok(report)
    }

    async fn find_all(&self) -> AppResult<Vec<ReportedIssue>> {
        Ok(self.entries.lock().unwrap().clone())
    }

    async fn find_by_record(&self, record_id: AssetRecordId) -> AppResult<Vec<ReportedIssue>> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.asset_record_id == record_id)
            .cloned()
            .collect())
    }
}

/// In-memory personnel directory.
#[derive(Debug, Default)]
pub(crate) struct MemoryDirectory {
    people: Mutex<Vec<Personnel>>,
}

impl MemoryDirectory {
    pub(crate) async fn put(&self, person: Personnel) {
        self.people.lock().unwrap().push(person);
    }
}

#[async_trait]
impl PersonnelDirectory for MemoryDirectory {
    async fn find_by_id(&self, id: PersonnelId) -> AppResult<Option<Personnel>> {
        Ok(self
            .people
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Personnel>> {
        Ok(self
            .people
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.email == email)
            .cloned())
    }
}

/// Bundle of the in-memory stores backing a service under test.
pub(crate) struct Stores {
    pub assets: Arc<MemoryAssetStore>,
    pub archive: Arc<MemoryArchiveStore>,
    pub reports: Arc<MemoryReportStore>,
    pub directory: Arc<MemoryDirectory>,
    pub events: Arc<LogEventSink>,
}

impl Stores {
    fn new() -> Self {
        Self {
            assets: Arc::new(MemoryAssetStore::default()),
            archive: Arc::new(MemoryArchiveStore::default()),
            reports: Arc::new(MemoryReportStore::default()),
            directory: Arc::new(MemoryDirectory::default()),
            events: Arc::new(LogEventSink),
        }
    }
}

pub(crate) fn memory_services() -> (AssetService, Stores) {
    let stores = Stores::new();
    let svc = AssetService::new(
        stores.assets.clone(),
        stores.directory.clone(),
        stores.events.clone(),
    );
    (svc, stores)
}

pub(crate) fn memory_qr_binder(config: QrConfig) -> (QrBinder, Stores) {
    let stores = Stores::new();
    let binder = QrBinder::new(stores.assets.clone(), stores.events.clone(), config);
    (binder, stores)
}

pub(crate) fn memory_archive_service() -> (ArchiveService, Stores) {
    let stores = Stores::new();
    let svc = ArchiveService::new(
        stores.assets.clone(),
        stores.archive.clone(),
        stores.directory.clone(),
        stores.events.clone(),
    );
    (svc, stores)
}

pub(crate) fn memory_report_service() -> (ReportService, Stores) {
    let stores = Stores::new();
    let svc = ReportService::new(
        stores.assets.clone(),
        stores.reports.clone(),
        stores.events.clone(),
    );
    (svc, stores)
}

pub(crate) fn memory_analytics_service() -> (AnalyticsService, Stores) {
    let stores = Stores::new();
    let svc = AnalyticsService::new(stores.assets.clone());
    (svc, stores)
}

/// A request context for a staff actor.
pub(crate) fn test_ctx(identity: &str) -> RequestContext {
    RequestContext::new(None, identity.to_string(), PersonnelRole::Staff)
}

/// A request context for a super-admin actor.
pub(crate) fn super_admin_ctx(identity: &str) -> RequestContext {
    RequestContext::new(None, identity.to_string(), PersonnelRole::SuperAdmin)
}

/// An asset record not yet stored anywhere.
pub(crate) fn bare_asset(asset_id: &str, status: AssetStatus) -> AssetRecord {
    let now = Utc::now();
    AssetRecord {
        id: AssetRecordId::new(),
        asset_id: asset_id.to_string(),
        asset_name: "Ward Laptop".to_string(),
        category: "Asset".to_string(),
        sub_type: Some("Laptop".to_string()),
        serial_number: Some("SN-0001".to_string()),
        operational_period: OperationalPeriod::Perpetual,
        status,
        assigned_personnel: None,
        purchase_date: None,
        renewal_date: None,
        generate_qr: false,
        qr_image: None,
        canonical_url: None,
        history: Json(Vec::new()),
        created_by: "admin@example.org".to_string(),
        created_at: now,
        updated_by: "admin@example.org".to_string(),
        updated_at: now,
    }
}

/// A report referencing a record, with fixed filler content.
pub(crate) fn bare_report(record_id: AssetRecordId) -> ReportedIssue {
    ReportedIssue {
        id: ReportedIssueId::new(),
        asset_record_id: record_id,
        asset_id: "A-100".to_string(),
        asset_name: "Ward Laptop".to_string(),
        condition: ReportCondition::Defective,
        description: "screen flicker".to_string(),
        image: None,
        reported_by: "staff@example.org".to_string(),
        created_at: Utc::now(),
    }
}

/// Seed a stored asset with the given status.
pub(crate) async fn seed_asset(stores: &Stores, status: AssetStatus) -> AssetRecord {
    let record = bare_asset("A-100", status);
    stores.assets.put(record.clone()).await;
    record
}

/// Seed a stored asset after applying a mutation to the template.
pub(crate) async fn seed_asset_with(
    stores: &Stores,
    mutate: impl FnOnce(&mut AssetRecord),
) -> AssetRecord {
    let code = format!("A-{}", &Uuid::new_v4().to_string()[..8]);
    let mut record = bare_asset(&code, AssetStatus::Functional);
    mutate(&mut record);
    stores.assets.put(record.clone()).await;
    record
}

/// An approved directory entry with a generated email.
pub(crate) fn approved_person(
    first: &str,
    middle: Option<&str>,
    last: &str,
) -> Personnel {
    let now = Utc::now();
    Personnel {
        id: PersonnelId::new(),
        first_name: first.to_string(),
        middle_name: middle.map(str::to_string),
        last_name: last.to_string(),
        email: format!("{}@example.org", first.to_lowercase()),
        position: None,
        role: PersonnelRole::Staff,
        account_status: AccountStatus::Approved,
        created_at: now,
        updated_at: now,
    }
}

/// A full edit request mirroring a record's current editable state.
pub(crate) fn edit_request(record: &AssetRecord) -> EditAssetRequest {
    EditAssetRequest {
        asset_name: record.asset_name.clone(),
        category: record.category.clone(),
        sub_type: record.sub_type.clone(),
        serial_number: record.serial_number.clone(),
        operational_period: record.operational_period,
        status: record.status,
        assigned_personnel: record.assigned_personnel,
        purchase_date: record.purchase_date,
        renewal_date: record.renewal_date,
        generate_qr: record.generate_qr,
        reason: None,
        maintained_by: None,
    }
}
