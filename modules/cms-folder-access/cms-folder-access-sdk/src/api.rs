//! Public API traits for CMS entry services and their collaborators.

use async_trait::async_trait;

use crate::context::SecurityContext;
use crate::error::CmsError;
use crate::models::{
    CmsEntry, CmsEntryListMeta, CmsModel, CreateEntryInput, CreateEntryOptions,
    CreateFromEntryInput, DeleteEntryOptions, Folder, GetEntryParams, ListEntriesParams, Rwd,
    UpdateEntryInput, UpdateEntryOptions,
};

/// Entry CRUD surface of the headless CMS.
///
/// Implemented by the storage-backed entries service and by decorators that
/// wrap it. Decorators are composed explicitly at construction time:
///
/// ```ignore
/// let entries: Arc<dyn CmsEntriesClient> = Arc::new(
///     CmsEntriesAccessDecorator::new(storage_backed, storage, enforcer),
/// );
/// ```
#[async_trait]
pub trait CmsEntriesClient: Send + Sync {
    /// List entries matching `params`.
    ///
    /// # Errors
    ///
    /// Storage or authorization failures.
    async fn list_entries(
        &self,
        ctx: &SecurityContext,
        model: &CmsModel,
        params: ListEntriesParams,
    ) -> Result<(Vec<CmsEntry>, CmsEntryListMeta), CmsError>;

    /// Get the single entry matching `params.where_clause`.
    ///
    /// # Errors
    ///
    /// `NotFound` when nothing matches; storage or authorization failures.
    async fn get_entry(
        &self,
        ctx: &SecurityContext,
        model: &CmsModel,
        params: GetEntryParams,
    ) -> Result<CmsEntry, CmsError>;

    /// Get an entry revision by its revision id.
    ///
    /// # Errors
    ///
    /// `NotFound` when the revision does not exist; storage or authorization failures.
    async fn get_entry_by_id(
        &self,
        ctx: &SecurityContext,
        model: &CmsModel,
        id: &str,
    ) -> Result<CmsEntry, CmsError>;

    /// Get the latest revision of each entry in `ids`, in request order.
    ///
    /// # Errors
    ///
    /// Storage or authorization failures.
    async fn get_latest_entries_by_ids(
        &self,
        ctx: &SecurityContext,
        model: &CmsModel,
        ids: &[String],
    ) -> Result<Vec<CmsEntry>, CmsError>;

    /// Get the published revision of each entry in `ids`, in request order.
    ///
    /// # Errors
    ///
    /// Storage or authorization failures.
    async fn get_published_entries_by_ids(
        &self,
        ctx: &SecurityContext,
        model: &CmsModel,
        ids: &[String],
    ) -> Result<Vec<CmsEntry>, CmsError>;

    /// Create a new entry.
    ///
    /// # Errors
    ///
    /// Validation, storage or authorization failures.
    async fn create_entry(
        &self,
        ctx: &SecurityContext,
        model: &CmsModel,
        input: CreateEntryInput,
        options: CreateEntryOptions,
    ) -> Result<CmsEntry, CmsError>;

    /// Create a new revision based on revision `source_id`.
    ///
    /// # Errors
    ///
    /// `NotFound` for a missing source; validation, storage or authorization failures.
    async fn create_entry_revision_from(
        &self,
        ctx: &SecurityContext,
        model: &CmsModel,
        source_id: &str,
        input: CreateFromEntryInput,
        options: CreateEntryOptions,
    ) -> Result<CmsEntry, CmsError>;

    /// Update revision `id`.
    ///
    /// # Errors
    ///
    /// `NotFound` for a missing revision; validation, storage or authorization failures.
    async fn update_entry(
        &self,
        ctx: &SecurityContext,
        model: &CmsModel,
        id: &str,
        input: UpdateEntryInput,
        meta: Option<serde_json::Value>,
        options: UpdateEntryOptions,
    ) -> Result<CmsEntry, CmsError>;

    /// Delete an entry with all of its revisions.
    ///
    /// # Errors
    ///
    /// `NotFound` for a missing entry; storage or authorization failures.
    async fn delete_entry(
        &self,
        ctx: &SecurityContext,
        model: &CmsModel,
        entry_id: &str,
        options: DeleteEntryOptions,
    ) -> Result<(), CmsError>;

    /// Delete a single revision.
    ///
    /// # Errors
    ///
    /// `NotFound` for a missing revision; storage or authorization failures.
    async fn delete_entry_revision(
        &self,
        ctx: &SecurityContext,
        model: &CmsModel,
        revision_id: &str,
    ) -> Result<(), CmsError>;

    /// Move an entry into `target_folder_id`.
    ///
    /// # Errors
    ///
    /// `NotFound` for a missing entry; storage or authorization failures.
    async fn move_entry(
        &self,
        ctx: &SecurityContext,
        model: &CmsModel,
        id: &str,
        target_folder_id: &str,
    ) -> Result<CmsEntry, CmsError>;
}

/// Raw storage reads, below any authorization layer.
#[async_trait]
pub trait CmsEntryStorage: Send + Sync {
    /// Load a revision by revision id.
    ///
    /// # Errors
    ///
    /// Storage failures. A missing revision is `Ok(None)`.
    async fn get_revision_by_id(
        &self,
        model: &CmsModel,
        id: &str,
    ) -> Result<Option<CmsEntry>, CmsError>;

    /// Load the latest revision of an entry.
    ///
    /// # Errors
    ///
    /// Storage failures. A missing entry is `Ok(None)`.
    async fn get_latest_revision_by_entry_id(
        &self,
        model: &CmsModel,
        entry_id: &str,
    ) -> Result<Option<CmsEntry>, CmsError>;
}

/// Folder service.
#[async_trait]
pub trait FoldersClient: Send + Sync {
    /// Load a folder by id.
    ///
    /// # Errors
    ///
    /// `NotFound` when the folder does not exist.
    async fn get(&self, ctx: &SecurityContext, folder_id: &str) -> Result<Folder, CmsError>;
}

/// Folder-level permission checker.
#[async_trait]
pub trait FolderLevelPermissionsClient: Send + Sync {
    /// All folders of `folder_type` whose content the subject may read.
    ///
    /// # Errors
    ///
    /// Backend failures.
    async fn list_all_folders_with_permissions(
        &self,
        ctx: &SecurityContext,
        folder_type: &str,
    ) -> Result<Vec<Folder>, CmsError>;

    /// Succeeds when the subject holds `rwd` on `folder`'s content.
    ///
    /// # Errors
    ///
    /// `NotAuthorized` when the right is missing; backend failures.
    async fn ensure_can_access_folder_content(
        &self,
        ctx: &SecurityContext,
        folder: &Folder,
        rwd: Rwd,
    ) -> Result<(), CmsError>;
}
