//! In-memory project store.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

use crate::store::{Project, ProjectStore, StoreError, StoreResult};

/// A thread-safe, process-local project store.
///
/// Cloning is cheap and every clone shares the same map. Each operation
/// takes the lock for the title's shard, so the existence check in
/// `create` and the read-modify-write in `update` are atomic.
#[derive(Clone, Default)]
pub struct InMemoryProjectStore {
    projects: Arc<DashMap<String, Project>>,
}

impl InMemoryProjectStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with `projects`.
    pub fn with_projects(projects: Vec<Project>) -> Self {
        let store = Self::new();
        store.init(projects);
        store
    }
}

impl ProjectStore for InMemoryProjectStore {
    fn init(&self, projects: Vec<Project>) {
        let count = projects.len();
        for project in projects {
            self.projects.insert(project.title.clone(), project);
        }
        tracing::info!(loaded = count, total = self.projects.len(), "Projects loaded");
    }

    fn get_all(&self) -> StoreResult<Vec<Project>> {
        Ok(self.projects.iter().map(|r| r.value().clone()).collect())
    }

    fn get(&self, title: &str) -> StoreResult<Project> {
        self.projects
            .get(title)
            .map(|r| r.value().clone())
            .ok_or_else(|| StoreError::NotFound(title.to_string()))
    }

    fn create(&self, project: Project) -> StoreResult<Project> {
        if project.has_blank_title() {
            return Err(StoreError::BlankTitle);
        }

        match self.projects.entry(project.title.clone()) {
            Entry::Occupied(_) => Err(StoreError::TitleExists(project.title)),
            Entry::Vacant(slot) => {
                tracing::debug!(title = %project.title, "Project created");
                Ok(slot.insert(project).value().clone())
            }
        }
    }

    fn update(&self, project: Project) -> StoreResult<Project> {
        if project.has_blank_title() {
            return Err(StoreError::BlankTitle);
        }

        match self.projects.get_mut(&project.title) {
            Some(mut existing) => {
                existing.apply_update(&project);
                tracing::debug!(title = %project.title, "Project updated");
                Ok(existing.value().clone())
            }
            None => Err(StoreError::NotFound(project.title)),
        }
    }

    fn delete(&self, title: &str) -> StoreResult<()> {
        if self.projects.remove(title).is_some() {
            tracing::debug!(title = %title, "Project deleted");
        }
        Ok(())
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self.projects.len())
    }
}
