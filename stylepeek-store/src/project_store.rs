//! Saved project collection.
//!
//! Projects are kept most-recent-first in a single JSON array, keyed by
//! `createdAt`. Every mutation rewrites the file atomically while holding
//! the write lock, so concurrent writers are serialized.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use stylepeek_core::{CoreError, ProjectRepository, StyleProject};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use crate::error::StoreError;
use crate::persistence::{default_projects_path, load_json, save_json};

/// JSON-file backed project collection.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    projects: Arc<RwLock<Vec<StyleProject>>>,
    path: PathBuf,
}

impl ProjectStore {
    /// Creates an empty store that will persist to `path`.
    pub fn new(path: PathBuf) -> Self {
        Self {
            projects: Arc::new(RwLock::new(Vec::new())),
            path,
        }
    }

    /// Loads the collection from the default path.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed.
    pub async fn load_default() -> Result<Self, StoreError> {
        Self::load(default_projects_path()).await
    }

    /// Loads the collection from `path`; a missing file is an empty collection.
    ///
    /// A corrupt file is an error rather than an empty collection, so a later
    /// save cannot silently discard it.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed.
    pub async fn load(path: PathBuf) -> Result<Self, StoreError> {
        let projects: Vec<StyleProject> = if path.exists() {
            load_json(&path).await?
        } else {
            debug!(path = %path.display(), "Project file not found, starting empty");
            Vec::new()
        };

        info!(path = %path.display(), count = projects.len(), "Projects loaded");
        Ok(Self {
            projects: Arc::new(RwLock::new(projects)),
            path,
        })
    }

    /// Returns the file the collection persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of stored projects.
    pub async fn len(&self) -> usize {
        self.projects.read().await.len()
    }

    /// Returns true if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.projects.read().await.is_empty()
    }

    /// All projects, most recent first.
    pub async fn all(&self) -> Vec<StyleProject> {
        self.projects.read().await.clone()
    }

    /// Looks up a project by `createdAt`.
    pub async fn find(&self, created_at: &str) -> Option<StyleProject> {
        self.projects
            .read()
            .await
            .iter()
            .find(|p| p.created_at == created_at)
            .cloned()
    }

    /// Prepends a project and saves.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateProject`] if the key is taken, or an IO
    /// error if saving fails (the in-memory collection is left unchanged).
    #[instrument(skip(self, project), fields(created_at = %project.created_at))]
    pub async fn insert(&self, project: StyleProject) -> Result<(), StoreError> {
        let mut projects = self.projects.write().await;
        if projects.iter().any(|p| p.created_at == project.created_at) {
            return Err(StoreError::DuplicateProject(project.created_at));
        }

        let mut next = Vec::with_capacity(projects.len() + 1);
        next.push(project);
        next.extend(projects.iter().cloned());

        save_json(&self.path, &next).await?;
        *projects = next;
        debug!(count = projects.len(), "Project saved");
        Ok(())
    }

    /// Removes a project and saves. Returns false if the key was absent.
    ///
    /// # Errors
    ///
    /// Returns error if saving fails (the in-memory collection is left
    /// unchanged).
    #[instrument(skip(self))]
    pub async fn delete(&self, created_at: &str) -> Result<bool, StoreError> {
        let mut projects = self.projects.write().await;
        let Some(index) = projects.iter().position(|p| p.created_at == created_at) else {
            debug!("Project not present");
            return Ok(false);
        };

        let mut next = projects.clone();
        next.remove(index);

        save_json(&self.path, &next).await?;
        *projects = next;
        debug!(count = projects.len(), "Project deleted");
        Ok(true)
    }
}

impl ProjectRepository for ProjectStore {
    async fn list(&self) -> Vec<StyleProject> {
        self.all().await
    }

    async fn get(&self, created_at: &str) -> Option<StyleProject> {
        self.find(created_at).await
    }

    async fn add(&self, project: StyleProject) -> Result<(), CoreError> {
        self.insert(project).await.map_err(CoreError::from)
    }

    async fn remove(&self, created_at: &str) -> Result<bool, CoreError> {
        self.delete(created_at).await.map_err(CoreError::from)
    }
}
