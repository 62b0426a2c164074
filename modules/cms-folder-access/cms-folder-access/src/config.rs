//! Configuration for the CMS folder access module.

use std::collections::BTreeMap;
use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Environment variable prefix; nested keys are separated by `__`.
pub const ENV_PREFIX: &str = "CMS_FLP_";

/// `CMS_FLP_*` variables. Only the field name is lowercased; nested map keys
/// such as model ids keep their case (`CMS_FLP_FOLDER_TYPES__myArticle`).
fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX)
        .split("__")
        .map(|key| match key.as_str().split_once('.') {
            Some((field, rest)) => format!("{}.{rest}", field.to_ascii_lowercase()).into(),
            None => key.as_str().to_ascii_lowercase().into(),
        })
        .lowercase(false)
}

/// Module configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FolderAccessConfig {
    /// Keep root-level entries visible in folder-filtered list results.
    pub include_root_in_lists: bool,

    /// Folder type per model id. Models not listed use `cms:<modelId>`.
    pub folder_types: BTreeMap<String, String>,
}

impl Default for FolderAccessConfig {
    fn default() -> Self {
        Self {
            include_root_in_lists: true,
            folder_types: BTreeMap::from([
                ("fmFile".to_owned(), "FmFile".to_owned()),
                ("pbPage".to_owned(), "PbPage".to_owned()),
            ]),
        }
    }
}

impl FolderAccessConfig {
    /// Layered sources: defaults, then the optional YAML file, then `CMS_FLP_*`
    /// environment variables.
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(env_provider())
    }

    /// Load the configuration from [`Self::figment`].
    ///
    /// # Errors
    ///
    /// Returns an error when a source cannot be parsed or contains unknown keys.
    pub fn load(path: Option<&Path>) -> Result<Self, figment::Error> {
        Self::figment(path).extract()
    }
}
