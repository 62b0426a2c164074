//! Static folder-level permissions plugin module.

use std::sync::{Arc, OnceLock};

use cms_folder_access_sdk::{CmsError, FolderLevelPermissionsClient, FoldersClient};
use tracing::info;

use crate::config::StaticFlpPluginConfig;
use crate::domain::Service;

/// Static folder-level permissions plugin module.
#[derive(Debug, Default)]
pub struct StaticFlpPlugin {
    service: OnceLock<Arc<Service>>,
}

impl StaticFlpPlugin {
    /// Build the catalog from `cfg`.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for an invalid catalog or when the plugin was
    /// already initialized.
    pub fn init(&self, cfg: StaticFlpPluginConfig) -> Result<(), CmsError> {
        info!("Initializing static_flp_plugin");
        info!(
            folders = cfg.folders.len(),
            subjects = cfg.grants.len(),
            full_access = cfg.full_access.len(),
            "Loaded plugin configuration"
        );

        let service = Arc::new(Service::new(cfg)?);
        self.service
            .set(service)
            .map_err(|_| CmsError::Validation("static_flp_plugin already initialized".to_owned()))?;

        info!("Static FLP plugin initialized");
        Ok(())
    }

    /// Folder service view of the catalog, once initialized.
    #[must_use]
    pub fn folders_client(&self) -> Option<Arc<dyn FoldersClient>> {
        self.service
            .get()
            .map(|service| Arc::clone(service) as Arc<dyn FoldersClient>)
    }

    /// Permission checker view of the catalog, once initialized.
    #[must_use]
    pub fn permissions_client(&self) -> Option<Arc<dyn FolderLevelPermissionsClient>> {
        self.service
            .get()
            .map(|service| Arc::clone(service) as Arc<dyn FolderLevelPermissionsClient>)
    }
}
