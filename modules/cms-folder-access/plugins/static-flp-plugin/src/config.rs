//! Configuration for the static folder-level permissions plugin.

use std::collections::HashMap;

use cms_folder_access_sdk::Folder;
use serde::Deserialize;
use uuid::Uuid;

/// Plugin configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticFlpPluginConfig {
    /// Folder catalog. Order is preserved in folder listings.
    pub folders: Vec<Folder>,

    /// `rwd` grant per subject id, per folder id.
    pub grants: HashMap<Uuid, HashMap<String, String>>,

    /// Subjects allowed every right on every folder.
    pub full_access: Vec<Uuid>,
}
