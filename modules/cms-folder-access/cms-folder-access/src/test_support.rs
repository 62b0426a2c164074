#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use cms_folder_access_sdk::{
    CmsEntriesClient, CmsEntry, CmsEntryListMeta, CmsEntryStorage, CmsError, CmsModel,
    CreateEntryInput, CreateEntryOptions, CreateFromEntryInput, DeleteEntryOptions,
    EntryLocation, Folder, FolderLevelPermissionsClient, FoldersClient, GetEntryParams,
    ListEntriesParams, ROOT_FOLDER, Rwd, SecurityContext, UpdateEntryInput, UpdateEntryOptions,
};
use serde_json::json;
use uuid::Uuid;

use crate::config::FolderAccessConfig;
use crate::domain::{CmsEntriesAccessDecorator, FolderAccessEnforcer};

pub const MODEL_ID: &str = "article";
pub const FOLDER_TYPE: &str = "cms:article";

/// Folders known to [`MockFolders`].
pub const KNOWN_FOLDERS: &[&str] = &["f1", "f2", "f3", "f4"];

#[must_use]
pub fn model() -> CmsModel {
    CmsModel::new(MODEL_ID, "Article")
}

#[must_use]
pub fn ctx() -> SecurityContext {
    SecurityContext::builder()
        .subject_id(Uuid::new_v4())
        .subject_tenant_id(Uuid::new_v4())
        .build()
}

/// Entry revision `<entry_id>#0001` located in `folder_id`.
#[must_use]
pub fn entry(entry_id: &str, folder_id: Option<&str>) -> CmsEntry {
    CmsEntry {
        id: format!("{entry_id}#0001"),
        entry_id: entry_id.to_owned(),
        version: 1,
        model_id: MODEL_ID.to_owned(),
        location: folder_id.map(EntryLocation::in_folder),
        values: json!({ "title": entry_id }),
    }
}

#[must_use]
pub fn folder(id: &str) -> Folder {
    Folder {
        id: id.to_owned(),
        title: id.to_uppercase(),
        slug: id.to_owned(),
        folder_type: FOLDER_TYPE.to_owned(),
        parent_id: None,
    }
}

fn find(entries: &[CmsEntry], id: &str) -> Option<CmsEntry> {
    entries
        .iter()
        .find(|e| e.id == id || e.entry_id == id)
        .cloned()
}

/// Entries service over a fixed set of entries; records every call it receives.
pub struct RecordingEntries {
    entries: Vec<CmsEntry>,
    calls: Mutex<Vec<String>>,
    last_list: Mutex<Option<ListEntriesParams>>,
}

impl RecordingEntries {
    #[must_use]
    pub fn new(entries: Vec<CmsEntry>) -> Self {
        Self {
            entries,
            calls: Mutex::new(Vec::new()),
            last_list: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_list_params(&self) -> Option<ListEntriesParams> {
        self.last_list.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn get(&self, id: &str) -> Result<CmsEntry, CmsError> {
        find(&self.entries, id).ok_or_else(|| CmsError::entry_not_found(id))
    }
}

#[async_trait]
impl CmsEntriesClient for RecordingEntries {
    async fn list_entries(
        &self,
        _ctx: &SecurityContext,
        _model: &CmsModel,
        params: ListEntriesParams,
    ) -> Result<(Vec<CmsEntry>, CmsEntryListMeta), CmsError> {
        self.record("list");
        *self.last_list.lock().unwrap() = Some(params);
        let meta = CmsEntryListMeta {
            cursor: None,
            has_more_items: false,
            total_count: self.entries.len() as u64,
        };
        Ok((self.entries.clone(), meta))
    }

    async fn get_entry(
        &self,
        _ctx: &SecurityContext,
        _model: &CmsModel,
        params: GetEntryParams,
    ) -> Result<CmsEntry, CmsError> {
        let id = params
            .where_clause
            .get("id")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_owned();
        self.record(format!("get:{id}"));
        self.get(&id)
    }

    async fn get_entry_by_id(
        &self,
        _ctx: &SecurityContext,
        _model: &CmsModel,
        id: &str,
    ) -> Result<CmsEntry, CmsError> {
        self.record(format!("get_by_id:{id}"));
        self.get(id)
    }

    async fn get_latest_entries_by_ids(
        &self,
        _ctx: &SecurityContext,
        _model: &CmsModel,
        ids: &[String],
    ) -> Result<Vec<CmsEntry>, CmsError> {
        self.record("get_latest_by_ids");
        Ok(ids
            .iter()
            .filter_map(|id| find(&self.entries, id))
            .collect())
    }

    async fn get_published_entries_by_ids(
        &self,
        _ctx: &SecurityContext,
        _model: &CmsModel,
        ids: &[String],
    ) -> Result<Vec<CmsEntry>, CmsError> {
        self.record("get_published_by_ids");
        Ok(ids
            .iter()
            .filter_map(|id| find(&self.entries, id))
            .collect())
    }

    async fn create_entry(
        &self,
        _ctx: &SecurityContext,
        _model: &CmsModel,
        input: CreateEntryInput,
        _options: CreateEntryOptions,
    ) -> Result<CmsEntry, CmsError> {
        let folder_id = input.target_folder_id().unwrap_or(ROOT_FOLDER).to_owned();
        self.record(format!("create:{folder_id}"));
        let entry_id = input.id.as_deref().unwrap_or("new");
        let mut created = entry(entry_id, Some(folder_id.as_str()));
        created.values = input.values;
        Ok(created)
    }

    async fn create_entry_revision_from(
        &self,
        _ctx: &SecurityContext,
        _model: &CmsModel,
        source_id: &str,
        _input: CreateFromEntryInput,
        _options: CreateEntryOptions,
    ) -> Result<CmsEntry, CmsError> {
        self.record(format!("create_from:{source_id}"));
        let mut revision = self.get(source_id)?;
        revision.version += 1;
        revision.id = format!("{}#{:04}", revision.entry_id, revision.version);
        Ok(revision)
    }

    async fn update_entry(
        &self,
        _ctx: &SecurityContext,
        _model: &CmsModel,
        id: &str,
        input: UpdateEntryInput,
        _meta: Option<serde_json::Value>,
        _options: UpdateEntryOptions,
    ) -> Result<CmsEntry, CmsError> {
        self.record(format!("update:{id}"));
        let mut updated = self.get(id)?;
        updated.values = input.values;
        Ok(updated)
    }

    async fn delete_entry(
        &self,
        _ctx: &SecurityContext,
        _model: &CmsModel,
        entry_id: &str,
        options: DeleteEntryOptions,
    ) -> Result<(), CmsError> {
        self.record(format!("delete:{entry_id}:{}", options.permanently));
        Ok(())
    }

    async fn delete_entry_revision(
        &self,
        _ctx: &SecurityContext,
        _model: &CmsModel,
        revision_id: &str,
    ) -> Result<(), CmsError> {
        self.record(format!("delete_revision:{revision_id}"));
        Ok(())
    }

    async fn move_entry(
        &self,
        _ctx: &SecurityContext,
        _model: &CmsModel,
        id: &str,
        target_folder_id: &str,
    ) -> Result<CmsEntry, CmsError> {
        self.record(format!("move:{id}:{target_folder_id}"));
        let mut moved = self.get(id)?;
        moved.location = Some(EntryLocation::in_folder(target_folder_id));
        Ok(moved)
    }
}

/// Storage reads over the same fixture as [`RecordingEntries`].
pub struct FixtureStorage {
    entries: Vec<CmsEntry>,
    reads: AtomicUsize,
}

impl FixtureStorage {
    #[must_use]
    pub fn new(entries: Vec<CmsEntry>) -> Self {
        Self {
            entries,
            reads: AtomicUsize::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CmsEntryStorage for FixtureStorage {
    async fn get_revision_by_id(
        &self,
        _model: &CmsModel,
        id: &str,
    ) -> Result<Option<CmsEntry>, CmsError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.entries.iter().find(|e| e.id == id).cloned())
    }

    async fn get_latest_revision_by_entry_id(
        &self,
        _model: &CmsModel,
        entry_id: &str,
    ) -> Result<Option<CmsEntry>, CmsError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .entries
            .iter()
            .filter(|e| e.entry_id == entry_id)
            .max_by_key(|e| e.version)
            .cloned())
    }
}

/// Folder service knowing [`KNOWN_FOLDERS`].
pub struct MockFolders {
    folders: HashMap<String, Folder>,
    gets: AtomicUsize,
}

impl Default for MockFolders {
    fn default() -> Self {
        Self {
            folders: KNOWN_FOLDERS
                .iter()
                .map(|id| ((*id).to_owned(), folder(id)))
                .collect(),
            gets: AtomicUsize::new(0),
        }
    }
}

impl MockFolders {
    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FoldersClient for MockFolders {
    async fn get(&self, _ctx: &SecurityContext, folder_id: &str) -> Result<Folder, CmsError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.folders
            .get(folder_id)
            .cloned()
            .ok_or_else(|| CmsError::folder_not_found(folder_id))
    }
}

/// Permission checker granting fixed `rwd` strings per folder.
pub struct MockPermissions {
    grants: HashMap<String, String>,
    checks: Mutex<Vec<(String, Rwd)>>,
    lists: AtomicUsize,
}

impl MockPermissions {
    #[must_use]
    pub fn new(grants: &[(&str, &str)]) -> Self {
        Self {
            grants: grants
                .iter()
                .map(|(id, rwd)| ((*id).to_owned(), (*rwd).to_owned()))
                .collect(),
            checks: Mutex::new(Vec::new()),
            lists: AtomicUsize::new(0),
        }
    }

    pub fn checks(&self) -> Vec<(String, Rwd)> {
        self.checks.lock().unwrap().clone()
    }

    pub fn lists(&self) -> usize {
        self.lists.load(Ordering::SeqCst)
    }

    fn allows(&self, folder_id: &str, rwd: Rwd) -> bool {
        self.grants
            .get(folder_id)
            .is_some_and(|granted| granted.contains(rwd.as_char()))
    }
}

#[async_trait]
impl FolderLevelPermissionsClient for MockPermissions {
    async fn list_all_folders_with_permissions(
        &self,
        _ctx: &SecurityContext,
        folder_type: &str,
    ) -> Result<Vec<Folder>, CmsError> {
        self.lists.fetch_add(1, Ordering::SeqCst);
        Ok(KNOWN_FOLDERS
            .iter()
            .filter(|id| folder_type == FOLDER_TYPE && self.allows(id, Rwd::Read))
            .map(|id| folder(id))
            .collect())
    }

    async fn ensure_can_access_folder_content(
        &self,
        _ctx: &SecurityContext,
        folder: &Folder,
        rwd: Rwd,
    ) -> Result<(), CmsError> {
        self.checks.lock().unwrap().push((folder.id.clone(), rwd));
        if self.allows(&folder.id, rwd) {
            Ok(())
        } else {
            Err(CmsError::folder_access_denied(folder.id.clone(), rwd))
        }
    }
}

/// Decorator wired to recording collaborators.
pub struct Harness {
    pub entries: Arc<RecordingEntries>,
    pub storage: Arc<FixtureStorage>,
    pub folders: Arc<MockFolders>,
    pub permissions: Arc<MockPermissions>,
    pub decorator: CmsEntriesAccessDecorator<RecordingEntries>,
}

impl Harness {
    /// Whether any collaborator beyond the wrapped service was touched.
    pub fn touched_collaborators(&self) -> bool {
        self.storage.reads() > 0
            || self.folders.gets() > 0
            || self.permissions.lists() > 0
            || !self.permissions.checks().is_empty()
    }
}

#[must_use]
pub fn harness(fixture: Vec<CmsEntry>, grants: &[(&str, &str)]) -> Harness {
    harness_with_config(fixture, grants, FolderAccessConfig::default())
}

#[must_use]
pub fn harness_with_config(
    fixture: Vec<CmsEntry>,
    grants: &[(&str, &str)],
    config: FolderAccessConfig,
) -> Harness {
    let entries = Arc::new(RecordingEntries::new(fixture.clone()));
    let storage = Arc::new(FixtureStorage::new(fixture));
    let folders = Arc::new(MockFolders::default());
    let permissions = Arc::new(MockPermissions::new(grants));

    let enforcer =
        FolderAccessEnforcer::new(folders.clone(), permissions.clone()).with_config(config);
    let decorator = CmsEntriesAccessDecorator::new(entries.clone(), storage.clone(), enforcer);

    Harness {
        entries,
        storage,
        folders,
        permissions,
        decorator,
    }
}
