//! Service implementation for the static folder-level permissions plugin.

use std::collections::{HashMap, HashSet};

use cms_folder_access_sdk::{CmsError, Folder, Rwd, is_root_folder};
use uuid::Uuid;

use crate::config::StaticFlpPluginConfig;

const RWD_LETTERS: [char; 3] = ['r', 'w', 'd'];

/// Static folder catalog with per-subject grants.
///
/// Immutable after construction.
#[derive(Debug)]
pub struct Service {
    folders: Vec<Folder>,
    index: HashMap<String, usize>,
    grants: HashMap<Uuid, HashMap<String, String>>,
    full_access: HashSet<Uuid>,
}

impl Service {
    /// Build the catalog from configuration.
    ///
    /// # Errors
    ///
    /// Returns `Validation` when a folder id is empty, reserved for the root
    /// folder, or duplicated, or when a grant contains letters other than
    /// `r`, `w` and `d`.
    pub fn new(config: StaticFlpPluginConfig) -> Result<Self, CmsError> {
        let mut index = HashMap::with_capacity(config.folders.len());
        for (position, folder) in config.folders.iter().enumerate() {
            if is_root_folder(Some(&folder.id)) {
                return Err(CmsError::Validation(format!(
                    "folder id '{}' is reserved",
                    folder.id
                )));
            }
            if index.insert(folder.id.clone(), position).is_some() {
                return Err(CmsError::Validation(format!(
                    "duplicate folder id '{}'",
                    folder.id
                )));
            }
        }

        for (subject_id, folder_grants) in &config.grants {
            for (folder_id, rwd) in folder_grants {
                if let Some(bad) = rwd.chars().find(|c| !RWD_LETTERS.contains(c)) {
                    return Err(CmsError::Validation(format!(
                        "invalid right '{bad}' granted to {subject_id} on folder '{folder_id}'"
                    )));
                }
            }
        }

        Ok(Self {
            folders: config.folders,
            index,
            grants: config.grants,
            full_access: config.full_access.into_iter().collect(),
        })
    }

    #[must_use]
    pub fn folder(&self, folder_id: &str) -> Option<&Folder> {
        self.index.get(folder_id).map(|&i| &self.folders[i])
    }

    /// Grant in effect for `subject_id` on `folder_id`.
    ///
    /// Walks up the parent chain until a folder with an explicit grant is
    /// found. A parent cycle ends the walk.
    #[must_use]
    pub fn effective_grant(&self, subject_id: Uuid, folder_id: &str) -> Option<&str> {
        let grants = self.grants.get(&subject_id)?;
        let mut visited = HashSet::new();
        let mut current = Some(folder_id);

        while let Some(id) = current {
            if !visited.insert(id) {
                return None;
            }
            if let Some(rwd) = grants.get(id) {
                return Some(rwd.as_str());
            }
            current = self.folder(id).and_then(|f| f.parent_id.as_deref());
        }
        None
    }

    #[must_use]
    pub fn allows(&self, subject_id: Uuid, folder_id: &str, rwd: Rwd) -> bool {
        self.full_access.contains(&subject_id)
            || self
                .effective_grant(subject_id, folder_id)
                .is_some_and(|granted| granted.contains(rwd.as_char()))
    }

    /// Folders of `folder_type` that `subject_id` can read, in catalog order.
    #[must_use]
    pub fn readable_folders(&self, subject_id: Uuid, folder_type: &str) -> Vec<Folder> {
        self.folders
            .iter()
            .filter(|f| {
                f.folder_type == folder_type && self.allows(subject_id, &f.id, Rwd::Read)
            })
            .cloned()
            .collect()
    }
}
