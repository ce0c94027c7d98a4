use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use atelier_types::DEFAULT_GALLERY_CAPACITY;

use crate::error::{ContentError, ContentResult};

/// Content service configuration.
///
/// Everything lives under one content root:
///
/// ```text
/// <root>/records/articles/<id>.json
/// <root>/records/galleries/<gallery_id>/gallery.json
/// <root>/records/seed_projects.json
/// <root>/assets/<timestamp>_<slug>_<role>.<ext>
/// ```
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory all content lives under.
    pub root: PathBuf,
    /// URL prefix the render layer serves the asset directory at.
    pub media_base: String,
    /// Per-gallery item cap.
    pub gallery_capacity: usize,
    /// Force read-only mode regardless of filesystem permissions.
    pub read_only: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("content"),
            media_base: "/media/assets".to_string(),
            gallery_capacity: DEFAULT_GALLERY_CAPACITY,
            read_only: false,
        }
    }
}

impl ContentConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> ContentResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| ContentError::Config(format!("{}: {e}", path.display())))?;
        toml::from_str(&text).map_err(|e| ContentError::Config(e.to_string()))
    }

    /// A config rooted at the given directory, defaults otherwise.
    pub fn at_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn records_dir(&self) -> PathBuf {
        self.root.join("records")
    }

    pub fn articles_dir(&self) -> PathBuf {
        self.records_dir().join("articles")
    }

    pub fn galleries_dir(&self) -> PathBuf {
        self.records_dir().join("galleries")
    }

    pub fn projects_file(&self) -> PathBuf {
        self.records_dir().join("seed_projects.json")
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.root.join("assets")
    }
}
