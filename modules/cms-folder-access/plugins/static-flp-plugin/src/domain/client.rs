//! Collaborator trait implementations for the static plugin service.

use async_trait::async_trait;
use cms_folder_access_sdk::{
    CmsError, Folder, FolderLevelPermissionsClient, FoldersClient, Rwd, SecurityContext,
};
use tracing::debug;

use super::service::Service;

#[async_trait]
impl FoldersClient for Service {
    async fn get(&self, _ctx: &SecurityContext, folder_id: &str) -> Result<Folder, CmsError> {
        self.folder(folder_id)
            .cloned()
            .ok_or_else(|| CmsError::folder_not_found(folder_id))
    }
}

#[async_trait]
impl FolderLevelPermissionsClient for Service {
    async fn list_all_folders_with_permissions(
        &self,
        ctx: &SecurityContext,
        folder_type: &str,
    ) -> Result<Vec<Folder>, CmsError> {
        Ok(self.readable_folders(ctx.subject_id(), folder_type))
    }

    async fn ensure_can_access_folder_content(
        &self,
        ctx: &SecurityContext,
        folder: &Folder,
        rwd: Rwd,
    ) -> Result<(), CmsError> {
        if self.allows(ctx.subject_id(), &folder.id, rwd) {
            return Ok(());
        }
        debug!(folder_id = %folder.id, %rwd, "Static grant missing");
        Err(CmsError::folder_access_denied(folder.id.clone(), rwd))
    }
}
