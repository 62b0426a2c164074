#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static Folder-Level Permissions Plugin
//!
//! In-memory folder service and permission checker backed by a fixed
//! catalog. Intended for development and tests.
//!
//! ## Permission model
//!
//! - Each grant is an `rwd` string (`"r"`, `"rw"`, `"rwd"`, ...) per subject
//!   and folder.
//! - A folder without its own grant inherits the grant of its nearest
//!   ancestor.
//! - Subjects listed in `full_access` may do everything everywhere.
//!
//! ## Configuration
//!
//! ```yaml
//! modules:
//!   static_flp_plugin:
//!     config:
//!       folders:
//!         - { id: "f1", title: "Articles", slug: "articles", type: "cms:article" }
//!         - { id: "f2", title: "Drafts", slug: "drafts", type: "cms:article", parentId: "f1" }
//!       grants:
//!         "8f3c2a9e-0000-4000-8000-000000000001":
//!           f1: "rw"
//!       full_access:
//!         - "8f3c2a9e-0000-4000-8000-000000000002"
//! ```

pub mod config;
pub mod domain;
pub mod module;

pub use module::StaticFlpPlugin;
