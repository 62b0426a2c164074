//! CMS folder access module wiring.
//!
//! Builds the decorated entries client once at startup. The result is the
//! only process-scoped state of this module; callers hold it in an `Arc`
//! and hand it to whatever serves requests.

use std::path::Path;
use std::sync::Arc;

use cms_folder_access_sdk::{
    CmsEntriesClient, CmsEntryStorage, FolderLevelPermissionsClient, FoldersClient,
};
use tracing::info;

use crate::config::FolderAccessConfig;
use crate::domain::{CmsEntriesAccessDecorator, FolderAccessEnforcer};

/// CMS folder access module.
#[derive(Debug, Clone, Default)]
pub struct CmsFolderAccessModule {
    config: FolderAccessConfig,
}

impl CmsFolderAccessModule {
    #[must_use]
    pub fn new(config: FolderAccessConfig) -> Self {
        Self { config }
    }

    /// Load configuration (defaults, optional YAML file, `CMS_FLP_*` env).
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration cannot be parsed.
    pub fn from_config_file(path: Option<&Path>) -> Result<Self, figment::Error> {
        let config = FolderAccessConfig::load(path)?;
        info!(
            include_root_in_lists = config.include_root_in_lists,
            folder_types = config.folder_types.len(),
            "Loaded cms_folder_access configuration"
        );
        Ok(Self::new(config))
    }

    #[must_use]
    pub fn config(&self) -> &FolderAccessConfig {
        &self.config
    }

    /// Wrap `entries` with folder-level access checks.
    ///
    /// Call once per entries service; wrapping an already decorated client
    /// repeats every check.
    pub fn decorate<C>(
        &self,
        entries: Arc<C>,
        storage: Arc<dyn CmsEntryStorage>,
        folders: Arc<dyn FoldersClient>,
        permissions: Arc<dyn FolderLevelPermissionsClient>,
    ) -> Arc<dyn CmsEntriesClient>
    where
        C: CmsEntriesClient + ?Sized + 'static,
    {
        let enforcer =
            FolderAccessEnforcer::new(folders, permissions).with_config(self.config().clone());
        info!("CMS entries decorated with folder-level access checks");
        Arc::new(CmsEntriesAccessDecorator::new(entries, storage, enforcer))
    }
}
