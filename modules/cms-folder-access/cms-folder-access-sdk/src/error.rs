//! Error types shared by the CMS entry services and their collaborators.

use thiserror::Error;

use crate::models::Rwd;

/// Errors returned by [`CmsEntriesClient`](crate::CmsEntriesClient) and the
/// collaborator traits.
///
/// The access decorator never creates its own denials: `NotAuthorized` comes
/// from the permission checker and `NotFound` from the folder service or the
/// wrapped entries service, and both reach the caller unchanged.
#[derive(Debug, Error)]
pub enum CmsError {
    /// The acting subject lacks the requested right on a folder's content.
    #[error("not authorized: {message}")]
    NotAuthorized {
        message: String,
        /// Folder whose content was being accessed, if known.
        folder_id: Option<String>,
        /// Right that was missing, if known.
        rwd: Option<Rwd>,
    },

    /// A referenced entity does not exist.
    #[error("{kind} not found: {id}")]
    NotFound { kind: String, id: String },

    /// The request was rejected before reaching storage.
    #[error("validation failed: {0}")]
    Validation(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CmsError {
    /// Build a folder content denial.
    #[must_use]
    pub fn folder_access_denied(folder_id: impl Into<String>, rwd: Rwd) -> Self {
        let folder_id = folder_id.into();
        Self::NotAuthorized {
            message: format!("cannot access content of folder '{folder_id}' ({rwd})"),
            folder_id: Some(folder_id),
            rwd: Some(rwd),
        }
    }

    #[must_use]
    pub fn not_found(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: kind.into(),
            id: id.into(),
        }
    }

    #[must_use]
    pub fn folder_not_found(id: impl Into<String>) -> Self {
        Self::not_found("folder", id)
    }

    #[must_use]
    pub fn entry_not_found(id: impl Into<String>) -> Self {
        Self::not_found("entry", id)
    }

    /// Whether this error is an authorization denial.
    #[must_use]
    pub fn is_not_authorized(&self) -> bool {
        matches!(self, Self::NotAuthorized { .. })
    }
}
