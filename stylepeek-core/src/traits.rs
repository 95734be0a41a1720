//! Trait definitions for Stylepeek.
//!
//! The extraction core never persists anything itself; it hands finished
//! records to a [`ProjectRepository`].

use crate::error::CoreError;
use crate::models::StyleProject;

/// Persistence collaborator for extracted projects.
///
/// Implementors keep the collection most-recent-first and key every
/// operation on [`StyleProject::created_at`].
pub trait ProjectRepository: Send + Sync {
    /// Returns all projects, most recent first.
    fn list(&self) -> impl std::future::Future<Output = Vec<StyleProject>> + Send;

    /// Looks up one project by its `createdAt` key.
    fn get(
        &self,
        created_at: &str,
    ) -> impl std::future::Future<Output = Option<StyleProject>> + Send;

    /// Prepends a project to the collection.
    ///
    /// Fails with [`CoreError::DuplicateProject`] if the key is already taken.
    fn add(
        &self,
        project: StyleProject,
    ) -> impl std::future::Future<Output = Result<(), CoreError>> + Send;

    /// Removes a project by key. Returns true if it was present.
    fn remove(
        &self,
        created_at: &str,
    ) -> impl std::future::Future<Output = Result<bool, CoreError>> + Send;
}
