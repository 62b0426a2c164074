//! Folder-level permission enforcement point.
//!
//! [`FolderAccessEnforcer`] bundles the folder service, the permission
//! checker and the module configuration. It is built once during service
//! initialisation and shared by every decorated operation.

use std::collections::HashSet;
use std::sync::Arc;

use cms_folder_access_sdk::{
    CmsEntry, CmsEntryWhere, CmsError, CmsModel, Folder, FolderLevelPermissionsClient,
    FoldersClient, Rwd, SecurityContext, is_root_folder,
};
use tracing::{debug, warn};

use crate::config::FolderAccessConfig;
use crate::domain::folder_type::create_folder_type;
use crate::domain::where_clause::create_where;

/// Folder-level Policy Enforcement Point.
///
/// Cloneable and cheap to pass around (`Arc` inside).
#[derive(Clone)]
pub struct FolderAccessEnforcer {
    folders: Arc<dyn FoldersClient>,
    permissions: Arc<dyn FolderLevelPermissionsClient>,
    config: Arc<FolderAccessConfig>,
}

impl FolderAccessEnforcer {
    /// Create an enforcer with the default configuration.
    pub fn new(
        folders: Arc<dyn FoldersClient>,
        permissions: Arc<dyn FolderLevelPermissionsClient>,
    ) -> Self {
        Self {
            folders,
            permissions,
            config: Arc::new(FolderAccessConfig::default()),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: FolderAccessConfig) -> Self {
        self.config = Arc::new(config);
        self
    }

    #[must_use]
    pub fn config(&self) -> &FolderAccessConfig {
        &self.config
    }

    /// Folder category the model's entries live in.
    #[must_use]
    pub fn folder_type(&self, model: &CmsModel) -> String {
        create_folder_type(model, &self.config.folder_types)
    }

    /// Require `rwd` on the content of `folder_id`.
    ///
    /// Absent, empty and root folder ids need no check.
    ///
    /// # Errors
    ///
    /// - `NotFound` from the folder service
    /// - `NotAuthorized` from the permission checker
    pub async fn ensure_folder_access(
        &self,
        ctx: &SecurityContext,
        folder_id: Option<&str>,
        rwd: Rwd,
    ) -> Result<(), CmsError> {
        let folder_id = match folder_id {
            Some(id) if !is_root_folder(Some(id)) => id,
            _ => {
                debug!(%rwd, "Root folder, skipping permission check");
                return Ok(());
            }
        };

        let folder = self.folders.get(ctx, folder_id).await?;
        self.permissions
            .ensure_can_access_folder_content(ctx, &folder, rwd)
            .await
            .inspect_err(|e| {
                warn!(
                    folder_id = %folder.id,
                    %rwd,
                    subject_id = %ctx.subject_id(),
                    error = %e,
                    "Folder access denied"
                );
            })
    }

    /// All folders of the model's folder type the subject may read.
    ///
    /// # Errors
    ///
    /// Failures from the permission checker.
    pub async fn accessible_folders(
        &self,
        ctx: &SecurityContext,
        model: &CmsModel,
    ) -> Result<Vec<Folder>, CmsError> {
        let folder_type = self.folder_type(model);
        let folders = self
            .permissions
            .list_all_folders_with_permissions(ctx, &folder_type)
            .await?;
        debug!(%folder_type, count = folders.len(), "Resolved accessible folders");
        Ok(folders)
    }

    /// Restrict a list where clause to the subject's accessible folders.
    ///
    /// # Errors
    ///
    /// Failures from the permission checker.
    pub async fn scoped_where(
        &self,
        ctx: &SecurityContext,
        model: &CmsModel,
        where_clause: Option<CmsEntryWhere>,
    ) -> Result<CmsEntryWhere, CmsError> {
        let folders = self.accessible_folders(ctx, model).await?;
        Ok(create_where(
            where_clause,
            &folders,
            self.config.include_root_in_lists,
        ))
    }

    /// Drop entries whose folder the subject cannot read.
    ///
    /// Root-level entries are always kept. Relative order is preserved. The
    /// folder list is only fetched when some entry actually lives in a folder.
    ///
    /// # Errors
    ///
    /// Failures from the permission checker.
    pub async fn filter_entries_by_folder(
        &self,
        ctx: &SecurityContext,
        model: &CmsModel,
        entries: Vec<CmsEntry>,
    ) -> Result<Vec<CmsEntry>, CmsError> {
        if entries.iter().all(|e| is_root_folder(e.folder_id())) {
            return Ok(entries);
        }

        let folders = self.accessible_folders(ctx, model).await?;
        let allowed: HashSet<&str> = folders.iter().map(|f| f.id.as_str()).collect();

        let total = entries.len();
        let visible: Vec<CmsEntry> = entries
            .into_iter()
            .filter(|entry| match entry.folder_id() {
                Some(id) if !is_root_folder(Some(id)) => allowed.contains(id),
                _ => true,
            })
            .collect();

        debug!(
            total,
            visible = visible.len(),
            "Filtered entries by folder access"
        );
        Ok(visible)
    }
}

impl std::fmt::Debug for FolderAccessEnforcer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FolderAccessEnforcer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
