//! CMS Folder Access Module
//!
//! Enforces folder-level permissions (FLP) around the CMS entry CRUD surface.
//! [`CmsEntriesAccessDecorator`] wraps any
//! [`CmsEntriesClient`](cms_folder_access_sdk::CmsEntriesClient), resolves the
//! folder each operation touches, asks the permission checker for
//! read/write/delete rights, and only then delegates.
//!
//! ## Configuration
//!
//! ```yaml
//! include_root_in_lists: true
//! folder_types:
//!   fmFile: FmFile
//!   pbPage: PbPage
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod module;

#[cfg(test)]
mod test_support;

pub use config::FolderAccessConfig;
pub use domain::{
    CmsEntriesAccessDecorator, FolderAccessEnforcer, create_folder_type, create_where,
};
pub use module::CmsFolderAccessModule;
