//! In-process backend with the same owner rules as the remote service.
//! Used by tests and by hosts running without a network.

use std::collections::HashMap;

use canvas::codec::{ProjectDraft, ProjectRecord};
use time::OffsetDateTime;
use tokio::sync::RwLock;
use tracing::debug;

use super::{BackendError, Identity, ProjectBackend, UserProfile};

#[derive(Debug, Default)]
pub struct MemoryBackend {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    projects: HashMap<String, ProjectRecord>,
    profiles: HashMap<Identity, UserProfile>,
    last_stamp: i64,
}

impl Inner {
    /// Wall-clock nanoseconds, forced strictly increasing so creation order
    /// survives coarse clocks.
    fn stamp(&mut self) -> i64 {
        let now = i64::try_from(OffsetDateTime::now_utc().unix_timestamp_nanos()).unwrap_or(i64::MAX);
        self.last_stamp = now.max(self.last_stamp.saturating_add(1));
        self.last_stamp
    }
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored projects across all owners.
    pub async fn project_count(&self) -> usize {
        self.inner.read().await.projects.len()
    }
}

fn check_owner(record: &ProjectRecord, caller: &Identity) -> Result<(), BackendError> {
    if record.owner == caller.as_str() {
        Ok(())
    } else {
        Err(BackendError::Unauthorized(record.project_id.clone()))
    }
}

#[async_trait::async_trait]
impl ProjectBackend for MemoryBackend {
    async fn save_project(&self, caller: &Identity, draft: ProjectDraft) -> Result<(), BackendError> {
        let mut inner = self.inner.write().await;
        let created = match inner.projects.get(&draft.project_id) {
            Some(existing) => {
                check_owner(existing, caller)?;
                existing.created
            }
            None => inner.stamp(),
        };
        debug!(project_id = %draft.project_id, owner = %caller, "project upserted");
        inner.projects.insert(
            draft.project_id.clone(),
            ProjectRecord {
                project_id: draft.project_id,
                name: draft.name,
                product_type: draft.product_type,
                base_color: draft.base_color,
                elements: draft.elements,
                created,
                owner: caller.0.clone(),
            },
        );
        Ok(())
    }

    async fn list_my_projects(&self, caller: &Identity) -> Result<Vec<ProjectRecord>, BackendError> {
        let inner = self.inner.read().await;
        let mut mine: Vec<ProjectRecord> =
            inner.projects.values().filter(|p| p.owner == caller.as_str()).cloned().collect();
        mine.sort_by(|a, b| b.created.cmp(&a.created));
        Ok(mine)
    }

    async fn get_project(&self, caller: &Identity, project_id: &str) -> Result<Option<ProjectRecord>, BackendError> {
        let inner = self.inner.read().await;
        let Some(record) = inner.projects.get(project_id) else {
            return Ok(None);
        };
        check_owner(record, caller)?;
        Ok(Some(record.clone()))
    }

    async fn delete_project(&self, caller: &Identity, project_id: &str) -> Result<(), BackendError> {
        let mut inner = self.inner.write().await;
        let Some(record) = inner.projects.get(project_id) else {
            return Err(BackendError::NotFound(project_id.to_string()));
        };
        check_owner(record, caller)?;
        inner.projects.remove(project_id);
        Ok(())
    }

    async fn get_profile(&self, caller: &Identity) -> Result<Option<UserProfile>, BackendError> {
        Ok(self.inner.read().await.profiles.get(caller).cloned())
    }

    async fn save_profile(&self, caller: &Identity, profile: UserProfile) -> Result<(), BackendError> {
        self.inner.write().await.profiles.insert(caller.clone(), profile);
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;
