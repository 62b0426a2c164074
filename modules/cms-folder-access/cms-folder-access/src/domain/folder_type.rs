use std::collections::BTreeMap;

use cms_folder_access_sdk::CmsModel;

/// Folder category for a model's entries.
///
/// Models with an entry in `overrides` use it verbatim; all others live in
/// `cms:<modelId>` folders.
#[must_use]
pub fn create_folder_type(model: &CmsModel, overrides: &BTreeMap<String, String>) -> String {
    overrides
        .get(&model.model_id)
        .cloned()
        .unwrap_or_else(|| format!("cms:{}", model.model_id))
}
