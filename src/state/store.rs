use std::sync::Arc;

use super::project::Project;
use crate::error::LoadFailure;

/// The ProjectStore holds the project list for the session.
///
/// It only changes through `apply`, which takes the outcome of one complete
/// load: the list is either replaced wholesale or emptied.
#[derive(Debug, Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
}

impl ProjectStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the outcome of a load.
    ///
    /// On success the previous list is replaced, in source order. On failure
    /// the store is left empty and the failure is handed back to the caller.
    pub fn apply(
        &mut self,
        outcome: Result<Vec<Project>, Arc<LoadFailure>>,
    ) -> Result<&[Project], Arc<LoadFailure>> {
        match outcome {
            Ok(projects) => {
                tracing::info!(count = projects.len(), "Project list loaded");
                self.projects = projects;
                Ok(&self.projects)
            }
            Err(failure) => {
                self.projects.clear();
                Err(failure)
            }
        }
    }

    /// Drop all projects, e.g. before a fresh load starts
    pub fn clear(&mut self) {
        self.projects.clear();
    }

    /// All projects, in source order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Look up one project by its position
    pub fn get(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(title: &str) -> Project {
        Project {
            title: title.into(),
            ..Project::default()
        }
    }

    fn failure() -> Arc<LoadFailure> {
        Arc::new(LoadFailure::Io {
            path: "projects.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        })
    }

    #[test]
    fn test_success_preserves_order() {
        let mut store = ProjectStore::new();
        let loaded = store.apply(Ok(vec![named("b"), named("a")])).unwrap();

        let titles: Vec<_> = loaded.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["b", "a"]);
        assert_eq!(store.get(1).map(|p| p.title.as_str()), Some("a"));
    }

    #[test]
    fn test_failure_leaves_store_empty() {
        let mut store = ProjectStore::new();
        store.apply(Ok(vec![named("a")])).unwrap();

        assert!(store.apply(Err(failure())).is_err());
        assert!(store.is_empty());
        assert_eq!(store.get(0), None);
    }

    #[test]
    fn test_reload_replaces_everything() {
        let mut store = ProjectStore::new();
        store.apply(Ok(vec![named("a"), named("b")])).unwrap();
        store.apply(Ok(vec![named("c")])).unwrap();

        assert_eq!(store.projects().len(), 1);
        assert_eq!(store.projects()[0].title, "c");
    }
}
