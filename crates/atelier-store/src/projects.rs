use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use atelier_types::Project;

use crate::error::{classify_write_error, StoreError, StoreResult};

/// Store for the site-wide project collection.
///
/// Unlike articles (one file each), every project lives in a single JSON
/// array file -- `seed_projects.json` historically. Inserts rewrite the whole
/// file; identifiers are slugified titles and must be unique within the
/// collection, so a duplicate-title insert is rejected.
pub struct ProjectStore {
    path: PathBuf,
    read_only: bool,
}

impl ProjectStore {
    /// Open a project store backed by the collection file at `path`.
    /// The file need not exist yet; an absent file is an empty collection.
    pub fn open(path: impl Into<PathBuf>, read_only: bool) -> StoreResult<Self> {
        let path = path.into();
        if !read_only {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir).map_err(classify_write_error)?;
            }
        }
        Ok(Self { path, read_only })
    }

    /// The collection file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole collection, newest first. Absent file means empty.
    pub fn load_all(&self) -> StoreResult<Vec<Project>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Io(e)),
        };
        let mut projects: Vec<Project> =
            serde_json::from_str(&json).map_err(|e| StoreError::Parse {
                id: "seed_projects".to_string(),
                reason: e.to_string(),
            })?;
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(projects)
    }

    /// Load one project by id.
    pub fn load(&self, id: &str) -> StoreResult<Project> {
        self.load_all()?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Insert a project. Rejected with `Duplicate` when a project with the
    /// same id (slugified title) already exists; the collection is untouched.
    pub fn insert(&self, project: Project) -> StoreResult<()> {
        let mut projects = self.load_all()?;
        if projects.iter().any(|p| p.id == project.id) {
            return Err(StoreError::Duplicate(project.id));
        }
        projects.push(project);
        self.save_all(&projects)
    }

    /// Remove a project by id, returning it so the caller can clean up its
    /// owned assets.
    pub fn remove(&self, id: &str) -> StoreResult<Project> {
        let mut projects = self.load_all()?;
        let position = projects
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let removed = projects.remove(position);
        self.save_all(&projects)?;
        Ok(removed)
    }

    fn save_all(&self, projects: &[Project]) -> StoreResult<()> {
        if self.read_only {
            return Err(StoreError::Unavailable);
        }
        let json = serde_json::to_string_pretty(projects)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        fs::write(&self.path, json).map_err(classify_write_error)
    }
}
