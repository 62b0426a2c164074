//! Domain layer: folder-level access enforcement for CMS entries.
//!
//! ## Flow
//!
//! 1. The decorator checks the model first: `authorization: false` or
//!    `{ flp: false }` delegates with no lookups at all.
//! 2. It resolves the folder the operation touches (from the fetched entry,
//!    from storage, or from the create input).
//! 3. [`FolderAccessEnforcer`] loads the folder and asks the permission
//!    checker for the required right. Root and absent folders are skipped.
//! 4. Only then is the wrapped service called.
//!
//! List and batch reads do not check single folders; they restrict the
//! result to the folders the subject can read.

mod decorator;
mod enforcer;
mod folder_type;
mod where_clause;


pub use decorator::CmsEntriesAccessDecorator;
pub use enforcer::FolderAccessEnforcer;
pub use folder_type::create_folder_type;
pub use where_clause::{FOLDER_ID_IN, LOCATION_FIELD, create_where};
