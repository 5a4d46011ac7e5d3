//! Profile service — the caller's display name and the one-time setup gate.

use tracing::{info, warn};

use super::StudioError;
use crate::backend::UserProfile;
use crate::state::{AppState, ProfileStatus};

pub const PROFILE_SAVE_FAILED: &str = "Failed to save profile";

/// Fetch the caller's profile into the workspace cache.
///
/// Without a session, or when the fetch fails, the cache is `Unknown`.
pub async fn refresh_profile(state: &AppState) -> ProfileStatus {
    let Some(caller) = state.identity().await else {
        state.workspace.write().await.profile = ProfileStatus::Unknown;
        return ProfileStatus::Unknown;
    };

    let status = match state.backend.get_profile(&caller).await {
        Ok(Some(profile)) => ProfileStatus::Present(profile),
        Ok(None) => ProfileStatus::Missing,
        Err(e) => {
            warn!(error = %e, "profile fetch failed");
            ProfileStatus::Unknown
        }
    };
    state.workspace.write().await.profile = status.clone();
    status
}

/// True when signed in and the profile was fetched and is absent.
pub async fn needs_profile_setup(state: &AppState) -> bool {
    let ws = state.workspace.read().await;
    ws.identity.is_some() && ws.profile == ProfileStatus::Missing
}

/// Save the caller's display name. Blank names are ignored and return
/// `Ok(false)` without a backend call.
///
/// # Errors
///
/// `NoSession` or the backend error.
pub async fn save_profile(state: &AppState, name: &str) -> Result<bool, StudioError> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(false);
    }
    let Some(caller) = state.identity().await else {
        state.workspace.write().await.notifications.error(PROFILE_SAVE_FAILED);
        return Err(StudioError::NoSession);
    };

    let profile = UserProfile { name: name.to_string() };
    if let Err(e) = state.backend.save_profile(&caller, profile).await {
        warn!(error = %e, "profile save failed");
        state.workspace.write().await.notifications.error(PROFILE_SAVE_FAILED);
        return Err(e.into());
    }
    info!(identity = %caller, "profile saved");
    refresh_profile(state).await;
    Ok(true)
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;
