//! Per-owner asset manifests.
//!
//! One JSON file per owner record, listing every asset filename the owner
//! has stored. Deletion works from the manifest, never from filename
//! patterns, so renamed conventions or stray files cannot cause wrong
//! deletions.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{classify_write_error, AssetError, AssetResult};

#[derive(Debug, Default, Serialize, Deserialize)]
struct Manifest {
    files: Vec<String>,
}

/// Manifest storage under a dedicated directory beside the assets.
#[derive(Debug)]
pub(crate) struct ManifestStore {
    dir: PathBuf,
}

impl ManifestStore {
    pub(crate) fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, owner_id: &str) -> PathBuf {
        self.dir.join(format!("{owner_id}.json"))
    }

    /// Filenames the owner currently owns. Absent manifest means none.
    pub(crate) fn files(&self, owner_id: &str) -> AssetResult<Vec<String>> {
        match fs::read_to_string(self.path_for(owner_id)) {
            Ok(json) => {
                let manifest: Manifest =
                    serde_json::from_str(&json).map_err(|e| AssetError::Manifest {
                        owner: owner_id.to_string(),
                        reason: e.to_string(),
                    })?;
                Ok(manifest.files)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(AssetError::Io(e)),
        }
    }

    /// Record a filename against an owner (idempotent).
    pub(crate) fn add(&self, owner_id: &str, file_name: &str) -> AssetResult<()> {
        let mut files = self.files(owner_id)?;
        if !files.iter().any(|f| f == file_name) {
            files.push(file_name.to_string());
        }
        fs::create_dir_all(&self.dir).map_err(classify_write_error)?;
        let json = serde_json::to_string_pretty(&Manifest { files })
            .map_err(|e| AssetError::Manifest {
                owner: owner_id.to_string(),
                reason: e.to_string(),
            })?;
        fs::write(self.path_for(owner_id), json).map_err(classify_write_error)
    }

    /// Remove an owner's manifest, returning the filenames it listed.
    pub(crate) fn take(&self, owner_id: &str) -> AssetResult<Vec<String>> {
        let files = self.files(owner_id)?;
        match fs::remove_file(self.path_for(owner_id)) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(classify_write_error(e)),
        }
        Ok(files)
    }
}
