use std::sync::Arc;

use async_trait::async_trait;
use cms_folder_access_sdk::{
    CmsEntriesClient, CmsEntry, CmsEntryListMeta, CmsEntryStorage, CmsError, CmsModel,
    CreateEntryInput, CreateEntryOptions, CreateFromEntryInput, DeleteEntryOptions,
    GetEntryParams, ListEntriesParams, ROOT_FOLDER, Rwd, SecurityContext, UpdateEntryInput,
    UpdateEntryOptions,
};
use tracing::{debug, instrument};

use crate::domain::enforcer::FolderAccessEnforcer;

/// Entry CRUD decorator enforcing folder-level permissions.
///
/// Wraps an inner [`CmsEntriesClient`] and is itself a `CmsEntriesClient`,
/// so it composes with other decorators:
///
/// ```ignore
/// let entries = CmsEntriesAccessDecorator::new(storage_backed, storage, enforcer);
/// let entry = entries.get_entry_by_id(&ctx, &model, "abc#0001").await?;
/// ```
///
/// Models whose authorization disables FLP pass straight through with no
/// extra lookups. Otherwise each operation resolves the folder it touches
/// and checks the matching right before delegating:
///
/// | Operation | Folder from | Right |
/// |---|---|---|
/// | `list_entries` | accessible folders rewrite the where clause | `r` |
/// | `get_entry`, `get_entry_by_id` | the fetched entry | `r` |
/// | `get_*_entries_by_ids` | each fetched entry (filtered) | `r` |
/// | `create_entry` | the create input | `w` |
/// | `create_entry_revision_from`, `update_entry` | stored revision | `w` |
/// | `delete_entry` | latest stored revision | `d` |
/// | `delete_entry_revision` | stored revision | `d` |
/// | `move_entry` | stored revision and target | `w` on each |
pub struct CmsEntriesAccessDecorator<C: ?Sized> {
    inner: Arc<C>,
    storage: Arc<dyn CmsEntryStorage>,
    enforcer: FolderAccessEnforcer,
}

impl<C: CmsEntriesClient + ?Sized> CmsEntriesAccessDecorator<C> {
    pub fn new(
        inner: Arc<C>,
        storage: Arc<dyn CmsEntryStorage>,
        enforcer: FolderAccessEnforcer,
    ) -> Self {
        Self {
            inner,
            storage,
            enforcer,
        }
    }

    async fn revision_folder(
        &self,
        model: &CmsModel,
        id: &str,
    ) -> Result<Option<String>, CmsError> {
        let entry = self.storage.get_revision_by_id(model, id).await?;
        Ok(owned_folder_id(entry.as_ref()))
    }

    async fn latest_revision_folder(
        &self,
        model: &CmsModel,
        entry_id: &str,
    ) -> Result<Option<String>, CmsError> {
        let entry = self
            .storage
            .get_latest_revision_by_entry_id(model, entry_id)
            .await?;
        Ok(owned_folder_id(entry.as_ref()))
    }
}

fn owned_folder_id(entry: Option<&CmsEntry>) -> Option<String> {
    entry
        .and_then(CmsEntry::folder_id)
        .filter(|id| !id.is_empty())
        .map(ToOwned::to_owned)
}

fn flp_disabled(model: &CmsModel) -> bool {
    let disabled = model.folder_level_permissions_disabled();
    if disabled {
        debug!("Folder-level permissions disabled for model");
    }
    disabled
}

#[async_trait]
impl<C: CmsEntriesClient + ?Sized> CmsEntriesClient for CmsEntriesAccessDecorator<C> {
    #[instrument(skip_all, fields(model_id = %model.model_id))]
    async fn list_entries(
        &self,
        ctx: &SecurityContext,
        model: &CmsModel,
        params: ListEntriesParams,
    ) -> Result<(Vec<CmsEntry>, CmsEntryListMeta), CmsError> {
        if flp_disabled(model) {
            return self.inner.list_entries(ctx, model, params).await;
        }

        let ListEntriesParams {
            where_clause,
            sort,
            limit,
            after,
            search,
        } = params;
        let where_clause = self.enforcer.scoped_where(ctx, model, where_clause).await?;

        self.inner
            .list_entries(
                ctx,
                model,
                ListEntriesParams {
                    where_clause: Some(where_clause),
                    sort,
                    limit,
                    after,
                    search,
                },
            )
            .await
    }

    #[instrument(skip_all, fields(model_id = %model.model_id))]
    async fn get_entry(
        &self,
        ctx: &SecurityContext,
        model: &CmsModel,
        params: GetEntryParams,
    ) -> Result<CmsEntry, CmsError> {
        if flp_disabled(model) {
            return self.inner.get_entry(ctx, model, params).await;
        }

        let entry = self.inner.get_entry(ctx, model, params).await?;
        self.enforcer
            .ensure_folder_access(ctx, entry.folder_id(), Rwd::Read)
            .await?;
        Ok(entry)
    }

    #[instrument(skip_all, fields(model_id = %model.model_id, id = %id))]
    async fn get_entry_by_id(
        &self,
        ctx: &SecurityContext,
        model: &CmsModel,
        id: &str,
    ) -> Result<CmsEntry, CmsError> {
        if flp_disabled(model) {
            return self.inner.get_entry_by_id(ctx, model, id).await;
        }

        let entry = self.inner.get_entry_by_id(ctx, model, id).await?;
        self.enforcer
            .ensure_folder_access(ctx, entry.folder_id(), Rwd::Read)
            .await?;
        Ok(entry)
    }

    #[instrument(skip_all, fields(model_id = %model.model_id, count = ids.len()))]
    async fn get_latest_entries_by_ids(
        &self,
        ctx: &SecurityContext,
        model: &CmsModel,
        ids: &[String],
    ) -> Result<Vec<CmsEntry>, CmsError> {
        if flp_disabled(model) {
            return self.inner.get_latest_entries_by_ids(ctx, model, ids).await;
        }

        let entries = self.inner.get_latest_entries_by_ids(ctx, model, ids).await?;
        self.enforcer
            .filter_entries_by_folder(ctx, model, entries)
            .await
    }

    #[instrument(skip_all, fields(model_id = %model.model_id, count = ids.len()))]
    async fn get_published_entries_by_ids(
        &self,
        ctx: &SecurityContext,
        model: &CmsModel,
        ids: &[String],
    ) -> Result<Vec<CmsEntry>, CmsError> {
        if flp_disabled(model) {
            return self
                .inner
                .get_published_entries_by_ids(ctx, model, ids)
                .await;
        }

        let entries = self
            .inner
            .get_published_entries_by_ids(ctx, model, ids)
            .await?;
        self.enforcer
            .filter_entries_by_folder(ctx, model, entries)
            .await
    }

    #[instrument(skip_all, fields(model_id = %model.model_id))]
    async fn create_entry(
        &self,
        ctx: &SecurityContext,
        model: &CmsModel,
        input: CreateEntryInput,
        options: CreateEntryOptions,
    ) -> Result<CmsEntry, CmsError> {
        if flp_disabled(model) {
            return self.inner.create_entry(ctx, model, input, options).await;
        }

        self.enforcer
            .ensure_folder_access(ctx, input.target_folder_id(), Rwd::Write)
            .await?;
        self.inner.create_entry(ctx, model, input, options).await
    }

    #[instrument(skip_all, fields(model_id = %model.model_id, source_id = %source_id))]
    async fn create_entry_revision_from(
        &self,
        ctx: &SecurityContext,
        model: &CmsModel,
        source_id: &str,
        input: CreateFromEntryInput,
        options: CreateEntryOptions,
    ) -> Result<CmsEntry, CmsError> {
        if flp_disabled(model) {
            return self
                .inner
                .create_entry_revision_from(ctx, model, source_id, input, options)
                .await;
        }

        let folder_id = self.revision_folder(model, source_id).await?;
        self.enforcer
            .ensure_folder_access(ctx, folder_id.as_deref(), Rwd::Write)
            .await?;
        self.inner
            .create_entry_revision_from(ctx, model, source_id, input, options)
            .await
    }

    #[instrument(skip_all, fields(model_id = %model.model_id, id = %id))]
    async fn update_entry(
        &self,
        ctx: &SecurityContext,
        model: &CmsModel,
        id: &str,
        input: UpdateEntryInput,
        meta: Option<serde_json::Value>,
        options: UpdateEntryOptions,
    ) -> Result<CmsEntry, CmsError> {
        if flp_disabled(model) {
            return self
                .inner
                .update_entry(ctx, model, id, input, meta, options)
                .await;
        }

        let folder_id = self.revision_folder(model, id).await?;
        self.enforcer
            .ensure_folder_access(ctx, folder_id.as_deref(), Rwd::Write)
            .await?;
        self.inner
            .update_entry(ctx, model, id, input, meta, options)
            .await
    }

    #[instrument(skip_all, fields(model_id = %model.model_id, entry_id = %entry_id))]
    async fn delete_entry(
        &self,
        ctx: &SecurityContext,
        model: &CmsModel,
        entry_id: &str,
        options: DeleteEntryOptions,
    ) -> Result<(), CmsError> {
        if flp_disabled(model) {
            return self.inner.delete_entry(ctx, model, entry_id, options).await;
        }

        let folder_id = self.latest_revision_folder(model, entry_id).await?;
        self.enforcer
            .ensure_folder_access(ctx, folder_id.as_deref(), Rwd::Delete)
            .await?;
        self.inner.delete_entry(ctx, model, entry_id, options).await
    }

    #[instrument(skip_all, fields(model_id = %model.model_id, revision_id = %revision_id))]
    async fn delete_entry_revision(
        &self,
        ctx: &SecurityContext,
        model: &CmsModel,
        revision_id: &str,
    ) -> Result<(), CmsError> {
        if flp_disabled(model) {
            return self
                .inner
                .delete_entry_revision(ctx, model, revision_id)
                .await;
        }

        let folder_id = self.revision_folder(model, revision_id).await?;
        self.enforcer
            .ensure_folder_access(ctx, folder_id.as_deref(), Rwd::Delete)
            .await?;
        self.inner
            .delete_entry_revision(ctx, model, revision_id)
            .await
    }

    #[instrument(
        skip_all,
        fields(model_id = %model.model_id, id = %id, target_folder_id = %target_folder_id)
    )]
    async fn move_entry(
        &self,
        ctx: &SecurityContext,
        model: &CmsModel,
        id: &str,
        target_folder_id: &str,
    ) -> Result<CmsEntry, CmsError> {
        if flp_disabled(model) {
            return self
                .inner
                .move_entry(ctx, model, id, target_folder_id)
                .await;
        }

        // The entry must be writable where it is now and where it is going.
        let current_folder_id = self
            .revision_folder(model, id)
            .await?
            .unwrap_or_else(|| ROOT_FOLDER.to_owned());

        if current_folder_id == target_folder_id {
            debug!("Entry already in target folder");
            return self
                .inner
                .move_entry(ctx, model, id, target_folder_id)
                .await;
        }

        // Root on either side is skipped by the enforcer.
        self.enforcer
            .ensure_folder_access(ctx, Some(current_folder_id.as_str()), Rwd::Write)
            .await?;
        self.enforcer
            .ensure_folder_access(ctx, Some(target_folder_id), Rwd::Write)
            .await?;

        self.inner
            .move_entry(ctx, model, id, target_folder_id)
            .await
    }
}

impl<C: ?Sized> std::fmt::Debug for CmsEntriesAccessDecorator<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CmsEntriesAccessDecorator")
            .field("enforcer", &self.enforcer)
            .finish_non_exhaustive()
    }
}
