//! Services — operations that cross the persistence boundary.

pub mod profile;
pub mod project;

use crate::backend::BackendError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StudioError {
    /// A mutation was attempted with nobody signed in. Raised before any
    /// backend call.
    #[error("no active session")]
    NoSession,
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl StudioError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NoSession => "E_NO_SESSION",
            Self::Backend(e) => e.error_code(),
        }
    }
}
