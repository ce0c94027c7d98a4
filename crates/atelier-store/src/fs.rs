use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{classify_write_error, StoreError, StoreResult};
use crate::ids::validate_id;
use crate::traits::DocumentStore;

/// Filesystem-backed document store: one `<id>.json` file per document.
///
/// Enumeration order in [`DocumentStore::list`] is whatever the filesystem
/// yields from a directory scan -- unspecified and not stable across
/// platforms. Callers that need an order must sort.
#[derive(Debug)]
pub struct FsDocumentStore {
    dir: PathBuf,
    read_only: bool,
}

impl FsDocumentStore {
    /// Open a document store rooted at `dir`, creating the directory when
    /// writable. In read-only mode the directory is left untouched and may
    /// be absent, in which case the store is simply empty.
    pub fn open(dir: impl Into<PathBuf>, read_only: bool) -> StoreResult<Self> {
        let dir = dir.into();
        if !read_only {
            fs::create_dir_all(&dir).map_err(classify_write_error)?;
        }
        Ok(Self { dir, read_only })
    }

    /// The directory documents live in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> StoreResult<PathBuf> {
        validate_id(id)?;
        Ok(self.dir.join(format!("{id}.json")))
    }
}

impl DocumentStore for FsDocumentStore {
    fn read(&self, id: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(id)?;
        match fs::read_to_string(&path) {
            Ok(json) => Ok(Some(json)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => Err(StoreError::Parse {
                id: id.to_string(),
                reason: "file is not valid UTF-8".to_string(),
            }),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn write(&self, id: &str, json: &str) -> StoreResult<()> {
        let path = self.path_for(id)?;
        if self.read_only {
            return Err(StoreError::Unavailable);
        }
        fs::write(&path, json).map_err(classify_write_error)
    }

    fn list(&self) -> StoreResult<Vec<(String, String)>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Io(e)),
        };

        let mut docs = Vec::new();
        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            match fs::read_to_string(&path) {
                Ok(json) => docs.push((id.to_string(), json)),
                Err(e) => {
                    // A single unreadable file must not fail the whole scan.
                    warn!(path = %path.display(), error = %e, "skipping unreadable record file");
                }
            }
        }
        Ok(docs)
    }

    fn remove(&self, id: &str) -> StoreResult<bool> {
        let path = self.path_for(id)?;
        if self.read_only {
            return Err(StoreError::Unavailable);
        }
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(classify_write_error(e)),
        }
    }
}
