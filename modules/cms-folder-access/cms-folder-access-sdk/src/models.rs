//! Domain models for the CMS folder access module.
//!
//! Field names serialize in camelCase to stay compatible with the CMS entry
//! and model documents they mirror.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sentinel folder id for content that lives outside any user-created folder.
pub const ROOT_FOLDER: &str = "root";

/// Whether a folder reference points at the root folder.
///
/// Absent and empty ids count as root.
#[must_use]
pub fn is_root_folder(folder_id: Option<&str>) -> bool {
    match folder_id {
        None => true,
        Some(id) => id.is_empty() || id == ROOT_FOLDER,
    }
}

/// Access kind checked against a folder's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rwd {
    #[serde(rename = "r")]
    Read,
    #[serde(rename = "w")]
    Write,
    #[serde(rename = "d")]
    Delete,
}

impl Rwd {
    /// Single-letter form used in permission strings (`"rwd"`).
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Read => 'r',
            Self::Write => 'w',
            Self::Delete => 'd',
        }
    }
}

impl fmt::Display for Rwd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Model-level authorization setting.
///
/// Accepts `false`/`true`, an object with an optional `flp` flag, or any
/// other JSON value. Only an explicit `false` (either form) disables
/// folder-level permissions; everything else leaves them on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModelAuthorization {
    Flag(bool),
    Settings {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        flp: Option<bool>,
    },
    Other(Value),
}

impl ModelAuthorization {
    #[must_use]
    pub fn disables_folder_level_permissions(&self) -> bool {
        matches!(
            self,
            Self::Flag(false) | Self::Settings { flp: Some(false) }
        )
    }
}

/// Content model definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsModel {
    pub model_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization: Option<ModelAuthorization>,
}

impl CmsModel {
    pub fn new(model_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            name: name.into(),
            authorization: None,
        }
    }

    #[must_use]
    pub fn with_authorization(mut self, authorization: ModelAuthorization) -> Self {
        self.authorization = Some(authorization);
        self
    }

    /// Whether the model opts out of folder-level permission checks.
    #[must_use]
    pub fn folder_level_permissions_disabled(&self) -> bool {
        self.authorization
            .as_ref()
            .is_some_and(ModelAuthorization::disables_folder_level_permissions)
    }
}

/// Where an entry lives in the folder tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
}

impl EntryLocation {
    pub fn in_folder(folder_id: impl Into<String>) -> Self {
        Self {
            folder_id: Some(folder_id.into()),
        }
    }
}

/// A CMS entry revision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsEntry {
    /// Revision id (`<entryId>#<version>`).
    pub id: String,
    pub entry_id: String,
    pub version: u32,
    pub model_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<EntryLocation>,
    #[serde(default)]
    pub values: Value,
}

impl CmsEntry {
    /// Folder the entry lives in, if any.
    #[must_use]
    pub fn folder_id(&self) -> Option<&str> {
        self.location
            .as_ref()
            .and_then(|location| location.folder_id.as_deref())
    }
}

/// A folder from the folder service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub title: String,
    pub slug: String,
    /// Folder category, e.g. `cms:article`.
    #[serde(rename = "type")]
    pub folder_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// Raw where clause of an entry query.
pub type CmsEntryWhere = serde_json::Map<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntriesParams {
    #[serde(rename = "where", default, skip_serializing_if = "Option::is_none")]
    pub where_clause: Option<CmsEntryWhere>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsEntryListMeta {
    pub cursor: Option<String>,
    pub has_more_items: bool,
    pub total_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetEntryParams {
    #[serde(rename = "where")]
    pub where_clause: CmsEntryWhere,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateEntryInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<EntryLocation>,
    /// Legacy location field written by older page-builder clients.
    #[serde(
        rename = "wbyAco_location",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub wby_aco_location: Option<EntryLocation>,
    #[serde(default)]
    pub values: Value,
}

impl CreateEntryInput {
    /// Folder the new entry is being created in.
    ///
    /// The legacy `wbyAco_location` wins when it names a folder; an empty id
    /// falls through to `location`.
    #[must_use]
    pub fn target_folder_id(&self) -> Option<&str> {
        fn folder_of(location: Option<&EntryLocation>) -> Option<&str> {
            location
                .and_then(|l| l.folder_id.as_deref())
                .filter(|id| !id.is_empty())
        }
        folder_of(self.wby_aco_location.as_ref())
            .or_else(|| folder_of(self.location.as_ref()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntryOptions {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skip_validators: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateFromEntryInput {
    #[serde(default)]
    pub values: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateEntryInput {
    #[serde(default)]
    pub values: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEntryOptions {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skip_validators: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteEntryOptions {
    /// Remove the entry instead of moving it to the trash.
    #[serde(default)]
    pub permanently: bool,
    /// Continue even when storage records are already partially gone.
    #[serde(default)]
    pub force: bool,
}
