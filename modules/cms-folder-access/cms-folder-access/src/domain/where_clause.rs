//! Folder restriction for entry list queries.

use std::collections::HashSet;

use cms_folder_access_sdk::{CmsEntryWhere, Folder, ROOT_FOLDER};
use serde_json::Value;

/// Entry field holding the folder reference.
pub const LOCATION_FIELD: &str = "location";

/// Set-membership operator on the folder id.
pub const FOLDER_ID_IN: &str = "folderId_in";

const AND: &str = "AND";

/// Restrict a list where clause to the given folders.
///
/// The result is `{ location: { folderId_in: [...] } }`, `AND`ed with the
/// caller's clause when that clause is non-empty. With `include_root` the
/// root folder id leads the allowed list.
#[must_use]
pub fn create_where(
    where_clause: Option<CmsEntryWhere>,
    folders: &[Folder],
    include_root: bool,
) -> CmsEntryWhere {
    let mut seen = HashSet::new();
    let root = include_root.then_some(ROOT_FOLDER);
    let allowed: Vec<Value> = root
        .into_iter()
        .chain(folders.iter().map(|folder| folder.id.as_str()))
        .filter(|id| seen.insert(*id))
        .map(|id| Value::String(id.to_owned()))
        .collect();

    let mut location = CmsEntryWhere::new();
    location.insert(FOLDER_ID_IN.to_owned(), Value::Array(allowed));

    let mut restriction = CmsEntryWhere::new();
    restriction.insert(LOCATION_FIELD.to_owned(), Value::Object(location));

    match where_clause {
        Some(original) if !original.is_empty() => {
            let clauses = vec![Value::Object(original), Value::Object(restriction)];
            let mut combined = CmsEntryWhere::new();
            combined.insert(AND.to_owned(), Value::Array(clauses));
            combined
        }
        _ => restriction,
    }
}
