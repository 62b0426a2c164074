#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! CMS Folder Access SDK
//!
//! This crate provides the public contract for the `cms_folder_access` module:
//!
//! - [`CmsEntriesClient`] - Entry CRUD surface (wrapped by the access decorator)
//! - [`CmsEntryStorage`] - Raw storage reads used to discover an entry's folder
//! - [`FoldersClient`] - Folder lookup
//! - [`FolderLevelPermissionsClient`] - Folder-level permission checks
//! - [`CmsEntry`], [`CmsModel`], [`Folder`], [`Rwd`] - Domain models
//! - [`CmsError`] - Error type shared by all collaborators
//! - [`SecurityContext`] - The acting subject
//!
//! ## Usage
//!
//! ```ignore
//! use cms_folder_access_sdk::{CmsEntriesClient, CmsModel, SecurityContext};
//!
//! let ctx = SecurityContext::builder().subject_id(user_id).build();
//!
//! // `entries` is any CmsEntriesClient, typically the access decorator
//! // wrapping the storage-backed implementation.
//! let entry = entries.get_entry_by_id(&ctx, &model, "abc#0001").await?;
//! ```

pub mod api;
pub mod context;
pub mod error;
pub mod models;

pub use api::{CmsEntriesClient, CmsEntryStorage, FolderLevelPermissionsClient, FoldersClient};
pub use context::SecurityContext;
pub use error::CmsError;
pub use models::{
    CmsEntry, CmsEntryListMeta, CmsEntryWhere, CmsModel, CreateEntryInput, CreateEntryOptions,
    CreateFromEntryInput, DeleteEntryOptions, EntryLocation, Folder, GetEntryParams,
    ListEntriesParams, ModelAuthorization, ROOT_FOLDER, Rwd, UpdateEntryInput,
    UpdateEntryOptions, is_root_folder,
};
