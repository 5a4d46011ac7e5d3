//! Backend — the remote persistence collaborator.
//!
//! DESIGN
//! ======
//! The studio never speaks a wire protocol itself. Everything it needs from
//! the persistence service goes through [`ProjectBackend`], an async trait
//! object held in `AppState`. Every call carries the caller's [`Identity`];
//! the service scopes projects and profiles to it.
//!
//! ERROR HANDLING
//! ==============
//! Backends map transport and service failures onto [`BackendError`].
//! Callers never retry; they report and move on.

pub mod memory;

use std::fmt;

use canvas::codec::{ProjectDraft, ProjectRecord};
use serde::{Deserialize, Serialize};

pub use memory::MemoryBackend;

// =============================================================================
// TYPES
// =============================================================================

/// Authenticated caller, as issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(pub String);

impl Identity {
    #[must_use]
    pub fn new(principal: impl Into<String>) -> Self {
        Self(principal.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-identity profile. Absent until the user completes setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("project not found: {0}")]
    NotFound(String),
    #[error("not authorized: {0}")]
    Unauthorized(String),
    #[error("request rejected: {0}")]
    Rejected(String),
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

impl BackendError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_NOT_FOUND",
            Self::Unauthorized(_) => "E_UNAUTHORIZED",
            Self::Rejected(_) => "E_REJECTED",
            Self::Unavailable(_) => "E_UNAVAILABLE",
        }
    }
}

// =============================================================================
// TRAIT
// =============================================================================

/// Operations consumed from the persistence service.
#[async_trait::async_trait]
pub trait ProjectBackend: Send + Sync {
    /// Upsert a project keyed by `draft.project_id`.
    async fn save_project(&self, caller: &Identity, draft: ProjectDraft) -> Result<(), BackendError>;

    /// The caller's projects.
    async fn list_my_projects(&self, caller: &Identity) -> Result<Vec<ProjectRecord>, BackendError>;

    async fn get_project(&self, caller: &Identity, project_id: &str) -> Result<Option<ProjectRecord>, BackendError>;

    async fn delete_project(&self, caller: &Identity, project_id: &str) -> Result<(), BackendError>;

    async fn get_profile(&self, caller: &Identity) -> Result<Option<UserProfile>, BackendError>;

    async fn save_profile(&self, caller: &Identity, profile: UserProfile) -> Result<(), BackendError>;
}
