//! Project service — save, list, open, load and delete designs.
//!
//! DESIGN
//! ======
//! Each operation snapshots what it needs under the workspace lock, drops
//! the lock for the backend call, then re-locks to apply the result.
//! Responses are applied whenever they arrive; an edit made while a save
//! is in flight is kept and simply not part of that save.
//!
//! ERROR HANDLING
//! ==============
//! Mutations fail fast with `StudioError::NoSession` when nobody is signed
//! in. Every failed mutation pushes an error notification and leaves the
//! document as it was. Listing never fails: no session or a backend error
//! both yield an empty list. Nothing is retried.

use canvas::codec::{ProjectRecord, decode_record, encode_draft};
use canvas::doc::mint_project_id;
use tracing::{info, warn};

use super::StudioError;
use crate::backend::BackendError;
use crate::state::AppState;

pub const SAVE_FAILED: &str = "Failed to save design. Please try again.";
pub const LOAD_FAILED: &str = "Failed to load project";
pub const DELETE_FAILED: &str = "Failed to delete project";

/// Trimmed `raw`, or `fallback` when that is empty.
fn resolve_name(raw: &str, fallback: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() { fallback.to_string() } else { trimmed.to_string() }
}

// =============================================================================
// SAVE
// =============================================================================

/// Save the open document under `name`. Mints a project id on first save.
/// Returns the project id that was saved.
///
/// # Errors
///
/// `NoSession` without a signed-in identity, or the backend error.
pub async fn save_design(state: &AppState, name: &str) -> Result<String, StudioError> {
    let name = resolve_name(name, &state.config.fallback_project_name);

    let (caller, project_id, draft) = {
        let mut ws = state.workspace.write().await;
        let Some(caller) = ws.identity.clone() else {
            warn!("save requested without a session");
            ws.notifications.error(SAVE_FAILED);
            return Err(StudioError::NoSession);
        };
        let doc = ws.engine.store.state();
        let project_id = doc.project_id.clone().unwrap_or_else(mint_project_id);
        let draft = encode_draft(doc, &project_id, &name);
        (caller, project_id, draft)
    };

    info!(%project_id, %name, elements = draft.elements.len(), "saving project");
    let result = state.backend.save_project(&caller, draft).await;

    {
        let mut ws = state.workspace.write().await;
        if let Err(e) = result {
            warn!(error = %e, %project_id, "project save failed");
            ws.notifications.error(SAVE_FAILED);
            return Err(e.into());
        }
        ws.engine.store.set_project_id(Some(project_id.clone()));
        ws.engine.store.set_project_name(name.clone());
        ws.notifications.success(format!("\"{name}\" saved successfully!"));
    }

    if state.config.refresh_after_mutation {
        list_projects(state).await;
    }
    Ok(project_id)
}

// =============================================================================
// LIST
// =============================================================================

/// Fetch the caller's projects, newest first, and cache them on the
/// workspace.
pub async fn list_projects(state: &AppState) -> Vec<ProjectRecord> {
    let Some(caller) = state.identity().await else {
        state.workspace.write().await.projects.clear();
        return Vec::new();
    };

    let projects = match state.backend.list_my_projects(&caller).await {
        Ok(projects) => projects,
        Err(e) => {
            warn!(error = %e, "project list failed");
            Vec::new()
        }
    };
    state.workspace.write().await.projects.clone_from(&projects);
    projects
}

// =============================================================================
// OPEN / LOAD
// =============================================================================

/// Fetch one project by id and load it.
///
/// # Errors
///
/// `NoSession`, the backend error, or `NotFound` when the service has no
/// such project.
pub async fn open_project(state: &AppState, project_id: &str) -> Result<(), StudioError> {
    let Some(caller) = state.identity().await else {
        state.workspace.write().await.notifications.error(LOAD_FAILED);
        return Err(StudioError::NoSession);
    };

    let fetched = match state.backend.get_project(&caller, project_id).await {
        Ok(Some(record)) => Ok(record),
        Ok(None) => Err(BackendError::NotFound(project_id.to_string())),
        Err(e) => Err(e),
    };
    match fetched {
        Ok(record) => {
            load_project(state, &record).await;
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, %project_id, "project open failed");
            state.workspace.write().await.notifications.error(LOAD_FAILED);
            Err(e.into())
        }
    }
}

/// Replace the open document with `record`. Tool state goes back to
/// defaults and any gesture in progress is dropped.
pub async fn load_project(state: &AppState, record: &ProjectRecord) {
    let loaded = decode_record(record);
    let mut ws = state.workspace.write().await;
    info!(project_id = %loaded.project_id, elements = loaded.elements.len(), "project loaded");
    ws.engine.load_project(loaded);
    ws.notifications.success(format!("Loaded \"{}\"", record.name));
}

// =============================================================================
// DELETE / NEW
// =============================================================================

/// Delete a project. `name` is only used for the notification. The open
/// document is untouched even when it is the deleted project.
///
/// # Errors
///
/// `NoSession` or the backend error.
pub async fn delete_project(state: &AppState, project_id: &str, name: &str) -> Result<(), StudioError> {
    let Some(caller) = state.identity().await else {
        state.workspace.write().await.notifications.error(DELETE_FAILED);
        return Err(StudioError::NoSession);
    };

    info!(%project_id, "deleting project");
    if let Err(e) = state.backend.delete_project(&caller, project_id).await {
        warn!(error = %e, %project_id, "project delete failed");
        state.workspace.write().await.notifications.error(DELETE_FAILED);
        return Err(e.into());
    }
    state.workspace.write().await.notifications.success(format!("\"{name}\" deleted"));

    if state.config.refresh_after_mutation {
        list_projects(state).await;
    }
    Ok(())
}

/// Start a blank design under a fresh project id and return the id.
pub async fn new_design(state: &AppState) -> String {
    let id = state.workspace.write().await.engine.reset_design();
    info!(project_id = %id, "new design");
    id
}

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;
