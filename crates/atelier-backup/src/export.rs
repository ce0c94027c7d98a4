use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, warn};
use walkdir::WalkDir;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::BackupResult;

/// Archive entry name of the generated restoration notes.
const README_NAME: &str = "README.txt";

/// Result of writing a backup archive.
#[derive(Clone, Debug)]
pub struct BackupFile {
    pub path: PathBuf,
    /// File entries written, the README included.
    pub entry_count: usize,
}

/// Builds a backup archive from a set of source trees.
///
/// Each tree goes into the archive under its own prefix (`records/`,
/// `assets/`), preserving relative paths with `/` separators. A source
/// directory that does not exist yet is skipped with a warning -- a fresh
/// deployment has no assets, and an empty backup is still a valid backup.
pub struct BackupWriter {
    sources: Vec<(String, PathBuf)>,
}

impl BackupWriter {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Queue a directory tree to be archived under `prefix`.
    pub fn add_tree(&mut self, prefix: &str, dir: &Path) -> &mut Self {
        self.sources
            .push((prefix.trim_matches('/').to_string(), dir.to_path_buf()));
        self
    }

    /// Write the archive to `out_path`, stamping the README with the current
    /// UTC time.
    pub fn finish(self, out_path: &Path) -> BackupResult<BackupFile> {
        self.finish_at(out_path, Utc::now())
    }

    /// [`BackupWriter::finish`] with an explicit clock.
    pub fn finish_at(self, out_path: &Path, now: DateTime<Utc>) -> BackupResult<BackupFile> {
        let file = File::create(out_path)?;
        let mut zip = ZipWriter::new(file);
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut entry_count = 0;

        for (prefix, dir) in &self.sources {
            if !dir.is_dir() {
                warn!(prefix = %prefix, dir = %dir.display(), "backup source missing; skipping");
                continue;
            }
            for entry in WalkDir::new(dir).sort_by_file_name() {
                let entry = entry?;
                if !entry.file_type().is_file() {
                    continue;
                }
                // Walked paths are always under their root.
                let Ok(relative) = entry.path().strip_prefix(dir) else {
                    continue;
                };
                let name = archive_name(prefix, relative);
                zip.start_file(&name, options)?;
                let mut source = File::open(entry.path())?;
                io::copy(&mut source, &mut zip)?;
                entry_count += 1;
            }
        }

        zip.start_file(README_NAME, options)?;
        zip.write_all(restoration_readme(now).as_bytes())?;
        entry_count += 1;

        zip.finish()?;
        debug!(path = %out_path.display(), entry_count, "backup archive written");
        Ok(BackupFile {
            path: out_path.to_path_buf(),
            entry_count,
        })
    }
}

impl Default for BackupWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Archive entry name: prefix plus the relative path with `/` separators.
fn archive_name(prefix: &str, relative: &Path) -> String {
    let mut name = String::from(prefix);
    for component in relative.components() {
        name.push('/');
        name.push_str(&component.as_os_str().to_string_lossy());
    }
    name
}

/// The plain-text restoration notes bundled into every archive.
fn restoration_readme(now: DateTime<Utc>) -> String {
    format!(
        "Atelier content backup\n\
         Created: {} UTC\n\
         \n\
         Contents:\n\
         - records/  JSON record files (articles, galleries, seed_projects.json)\n\
         - assets/   uploaded image files and per-owner manifests\n\
         \n\
         To restore, unpack both trees into the configured content root and\n\
         restart the application. Records and assets are plain files; no\n\
         database import is needed.\n",
        now.format("%Y-%m-%d %H:%M:%S")
    )
}
