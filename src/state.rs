//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is cheap to clone and handed to every service call. It holds
//! the persistence backend, the parsed config, and one `Workspace` behind a
//! `tokio::sync::RwLock`. The workspace owns the canvas engine (and through
//! it the document), the signed-in identity, and the caches refreshed by
//! remote calls.
//!
//! Services never hold the lock across a backend call: they snapshot what
//! they need, release, await, then re-lock to apply the outcome. Pointer
//! input keeps flowing while a save is in flight.

use std::sync::Arc;

use canvas::codec::ProjectRecord;
use canvas::engine::Engine;
use tokio::sync::RwLock;

use crate::backend::{Identity, ProjectBackend, UserProfile};
use crate::config::StudioConfig;
use crate::notify::Notifications;

// =============================================================================
// PROFILE CACHE
// =============================================================================

/// What the studio knows about the caller's profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProfileStatus {
    /// Not fetched yet, or the last fetch failed.
    #[default]
    Unknown,
    /// Fetched; the caller has no profile.
    Missing,
    Present(UserProfile),
}

// =============================================================================
// WORKSPACE
// =============================================================================

/// Everything one editing session owns.
#[derive(Debug)]
pub struct Workspace {
    pub engine: Engine,
    pub identity: Option<Identity>,
    /// Last project listing, newest first.
    pub projects: Vec<ProjectRecord>,
    pub profile: ProfileStatus,
    pub notifications: Notifications,
}

impl Workspace {
    #[must_use]
    pub fn new(config: &StudioConfig) -> Self {
        Self {
            engine: Engine::new(),
            identity: None,
            projects: Vec::new(),
            profile: ProfileStatus::Unknown,
            notifications: Notifications::new(config.notification_capacity),
        }
    }
}

// =============================================================================
// APP STATE
// =============================================================================

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn ProjectBackend>,
    pub config: Arc<StudioConfig>,
    pub workspace: Arc<RwLock<Workspace>>,
}

impl AppState {
    #[must_use]
    pub fn new(backend: Arc<dyn ProjectBackend>, config: StudioConfig) -> Self {
        let workspace = Workspace::new(&config);
        Self { backend, config: Arc::new(config), workspace: Arc::new(RwLock::new(workspace)) }
    }

    /// Attach a signed-in identity. Caches from a previous identity are dropped.
    pub async fn sign_in(&self, identity: Identity) {
        let mut ws = self.workspace.write().await;
        if ws.identity.as_ref() != Some(&identity) {
            ws.projects.clear();
            ws.profile = ProfileStatus::Unknown;
        }
        tracing::info!(%identity, "signed in");
        ws.identity = Some(identity);
    }

    /// Drop the identity and its caches. The open document is kept.
    pub async fn sign_out(&self) {
        let mut ws = self.workspace.write().await;
        ws.identity = None;
        ws.projects.clear();
        ws.profile = ProfileStatus::Unknown;
    }

    pub async fn identity(&self) -> Option<Identity> {
        self.workspace.read().await.identity.clone()
    }
}

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::backend::{BackendError, MemoryBackend};
    use canvas::codec::ProjectDraft;

    #[must_use]
    pub fn alice() -> Identity {
        Identity::new("alice")
    }

    /// State over a fresh `MemoryBackend`, nobody signed in.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(Arc::new(MemoryBackend::new()), StudioConfig::default())
    }

    /// State over the given backend with `alice` signed in.
    pub async fn signed_in_state(backend: Arc<dyn ProjectBackend>) -> AppState {
        let state = AppState::new(backend, StudioConfig::default());
        state.sign_in(alice()).await;
        state
    }

    /// Backend double that records every call and fails them all when
    /// `fail` is set.
    #[derive(Default)]
    pub struct MockBackend {
        pub fail: bool,
        pub calls: std::sync::Mutex<Vec<&'static str>>,
        pub inner: MemoryBackend,
    }

    impl MockBackend {
        #[must_use]
        pub fn failing() -> Self {
            Self { fail: true, ..Self::default() }
        }

        pub fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }

        fn enter(&self, op: &'static str) -> Result<(), BackendError> {
            self.calls.lock().unwrap().push(op);
            if self.fail { Err(BackendError::Unavailable("mock offline".into())) } else { Ok(()) }
        }
    }

    #[async_trait::async_trait]
    impl ProjectBackend for MockBackend {
        async fn save_project(&self, caller: &Identity, draft: ProjectDraft) -> Result<(), BackendError> {
            self.enter("save_project")?;
            self.inner.save_project(caller, draft).await
        }

        async fn list_my_projects(&self, caller: &Identity) -> Result<Vec<ProjectRecord>, BackendError> {
            self.enter("list_my_projects")?;
            self.inner.list_my_projects(caller).await
        }

        async fn get_project(&self, caller: &Identity, id: &str) -> Result<Option<ProjectRecord>, BackendError> {
            self.enter("get_project")?;
            self.inner.get_project(caller, id).await
        }

        async fn delete_project(&self, caller: &Identity, id: &str) -> Result<(), BackendError> {
            self.enter("delete_project")?;
            self.inner.delete_project(caller, id).await
        }

        async fn get_profile(&self, caller: &Identity) -> Result<Option<UserProfile>, BackendError> {
            self.enter("get_profile")?;
            self.inner.get_profile(caller).await
        }

        async fn save_profile(&self, caller: &Identity, profile: UserProfile) -> Result<(), BackendError> {
            self.enter("save_profile")?;
            self.inner.save_profile(caller, profile).await
        }
    }

    /// Message of the newest notification.
    pub async fn last_message(state: &AppState) -> Option<String> {
        state.workspace.read().await.notifications.latest().map(|n| n.message.clone())
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;
