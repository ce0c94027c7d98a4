use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use atelier_types::{slugify, AssetRef, Timestamp};

use crate::error::{classify_write_error, AssetError, AssetResult};
use crate::manifest::ManifestStore;
use crate::upload::Upload;

/// Image extensions accepted by [`AssetStore::store`], lower-case with dot.
pub const ALLOWED_EXTENSIONS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".webp", ".gif", ".bmp", ".tif", ".tiff",
];

/// Directory (under the asset root) holding per-owner manifests.
const MANIFEST_DIR: &str = ".manifests";

/// The role an asset plays for its owning record; part of the stored
/// filename.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetRole {
    /// Full-size gallery image.
    Full,
    /// Gallery thumbnail.
    Thumb,
    /// Article or project cover image.
    Cover,
}

impl AssetRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetRole::Full => "full",
            AssetRole::Thumb => "thumb",
            AssetRole::Cover => "cover",
        }
    }
}

impl fmt::Display for AssetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filesystem-backed asset storage.
///
/// Stored filenames are `<timestamp>_<owner-slug>_<role><ext>`; the public
/// URL is the configured media base plus the filename. Ownership is tracked
/// in explicit per-owner manifests so [`AssetStore::delete`] removes exactly
/// the files the owner stored.
pub struct AssetStore {
    root: PathBuf,
    media_base: String,
    read_only: bool,
    manifests: ManifestStore,
}

impl AssetStore {
    /// Open an asset store rooted at `root`. `media_base` is the URL prefix
    /// the render layer serves the directory under (e.g. `/media/assets`).
    pub fn open(
        root: impl Into<PathBuf>,
        media_base: impl Into<String>,
        read_only: bool,
    ) -> AssetResult<Self> {
        let root = root.into();
        if !read_only {
            fs::create_dir_all(&root).map_err(classify_write_error)?;
        }
        let manifests = ManifestStore::new(root.join(MANIFEST_DIR));
        Ok(Self {
            root,
            media_base: media_base.into().trim_end_matches('/').to_string(),
            read_only,
            manifests,
        })
    }

    /// The directory assets live in.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Store an upload on behalf of `owner_id`.
    ///
    /// The extension check runs before anything touches the filesystem: a
    /// disallowed upload writes no file and no manifest entry. On success
    /// the stored filename is recorded in the owner's manifest and an
    /// [`AssetRef`] (filename + public URL) is returned.
    pub fn store(&self, owner_id: &str, role: AssetRole, upload: &Upload) -> AssetResult<AssetRef> {
        self.store_at(owner_id, role, upload, &Timestamp::now())
    }

    /// [`AssetStore::store`] with an explicit clock.
    pub fn store_at(
        &self,
        owner_id: &str,
        role: AssetRole,
        upload: &Upload,
        now: &Timestamp,
    ) -> AssetResult<AssetRef> {
        validate_owner(owner_id)?;
        let suffix = allowed_suffix(upload)?;
        if self.read_only {
            return Err(AssetError::Unavailable);
        }

        let file_name = format!("{now}_{}_{role}{suffix}", owner_slug(owner_id));
        fs::write(self.root.join(&file_name), upload.bytes()).map_err(classify_write_error)?;
        self.manifests.add(owner_id, &file_name)?;

        debug!(owner = %owner_id, file = %file_name, "stored asset");
        Ok(AssetRef::new(
            file_name.clone(),
            format!("{}/{file_name}", self.media_base),
        ))
    }

    /// Delete every asset the owner's manifest lists, then the manifest
    /// itself. Returns how many files were actually removed; files already
    /// missing are logged and skipped, not fatal.
    pub fn delete(&self, owner_id: &str) -> AssetResult<usize> {
        validate_owner(owner_id)?;
        if self.read_only {
            return Err(AssetError::Unavailable);
        }

        let files = self.manifests.take(owner_id)?;
        let mut removed = 0;
        for file_name in &files {
            match fs::remove_file(self.root.join(file_name)) {
                Ok(()) => removed += 1,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    warn!(owner = %owner_id, file = %file_name, "manifest-listed asset already gone");
                }
                Err(e) => return Err(classify_write_error(e)),
            }
        }
        debug!(owner = %owner_id, removed, "deleted owner assets");
        Ok(removed)
    }

    /// Filenames currently recorded against an owner.
    pub fn owned_files(&self, owner_id: &str) -> AssetResult<Vec<String>> {
        validate_owner(owner_id)?;
        self.manifests.files(owner_id)
    }
}

/// Check an upload against the image allow-list without touching storage.
///
/// Callers that replace an existing asset use this to reject a bad upload
/// before the old asset is deleted.
pub fn check_upload(upload: &Upload) -> AssetResult<()> {
    allowed_suffix(upload).map(|_| ())
}

/// The upload's lower-cased suffix when it is allow-listed, otherwise
/// `InvalidFileType`.
fn allowed_suffix(upload: &Upload) -> AssetResult<String> {
    match upload.suffix() {
        Some(suffix) if ALLOWED_EXTENSIONS.contains(&suffix.as_str()) => Ok(suffix),
        _ => Err(AssetError::InvalidFileType {
            file_name: upload.file_name().to_string(),
        }),
    }
}

/// Reject owner ids that are empty or could escape the manifest directory.
fn validate_owner(owner_id: &str) -> AssetResult<()> {
    let safe = !owner_id.is_empty()
        && !owner_id.contains("..")
        && owner_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if safe {
        Ok(())
    } else {
        Err(AssetError::InvalidOwner(owner_id.to_string()))
    }
}

/// The slug half of an owner id: record ids are `<timestamp>-<slug>`, project
/// ids are already slugs. Anything else is slugified defensively.
fn owner_slug(owner_id: &str) -> String {
    if let Some((prefix, rest)) = owner_id.split_once('-') {
        if prefix.len() == 14 && prefix.bytes().all(|b| b.is_ascii_digit()) && !rest.is_empty() {
            return rest.to_string();
        }
    }
    slugify(owner_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn ts() -> Timestamp {
        Timestamp::parse("20240601120000").unwrap()
    }

    fn open(dir: &Path) -> AssetStore {
        AssetStore::open(dir, "/media/assets/", false).unwrap()
    }

    #[test]
    fn stores_under_timestamp_slug_role_name() {
        let dir = tempdir().unwrap();
        let store = open(dir.path());
        let upload = Upload::new("Holiday Photo.JPG", b"jpegbytes".to_vec());

        let asset = store
            .store_at("20240101090000-beach-day", AssetRole::Cover, &upload, &ts())
            .unwrap();

        assert_eq!(asset.file_name, "20240601120000_beach-day_cover.jpg");
        assert_eq!(asset.url, "/media/assets/20240601120000_beach-day_cover.jpg");
        let written = fs::read(dir.path().join(&asset.file_name)).unwrap();
        assert_eq!(written, b"jpegbytes");
    }

    #[test]
    fn disallowed_extension_fails_before_writing() {
        let dir = tempdir().unwrap();
        let store = open(dir.path());
        let upload = Upload::new("payload.exe", b"MZ".to_vec());

        let err = store
            .store_at("20240101090000-beach-day", AssetRole::Full, &upload, &ts())
            .unwrap_err();
        assert!(matches!(err, AssetError::InvalidFileType { .. }));

        // Nothing on disk beyond the (empty) manifest directory.
        let files: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .collect();
        assert!(files.is_empty(), "no asset file may be written");
        assert!(store.owned_files("20240101090000-beach-day").unwrap().is_empty());
    }

    #[test]
    fn check_upload_matches_the_store_allow_list() {
        assert!(check_upload(&Upload::new("a.PNG", vec![])).is_ok());
        assert!(check_upload(&Upload::new("payload.exe", vec![])).is_err());
        assert!(check_upload(&Upload::new("noextension", vec![])).is_err());
    }

    #[test]
    fn missing_extension_is_invalid_file_type() {
        let dir = tempdir().unwrap();
        let store = open(dir.path());
        let upload = Upload::new("noextension", b"data".to_vec());
        assert!(matches!(
            store.store_at("owner-id", AssetRole::Full, &upload, &ts()),
            Err(AssetError::InvalidFileType { .. })
        ));
    }

    #[test]
    fn delete_removes_exactly_the_manifest_listed_files() {
        let dir = tempdir().unwrap();
        let store = open(dir.path());
        let owner = "20240101090000-beach-day";
        store
            .store_at(owner, AssetRole::Full, &Upload::new("a.png", b"a".to_vec()), &ts())
            .unwrap();
        store
            .store_at(
                owner,
                AssetRole::Thumb,
                &Upload::new("b.png", b"b".to_vec()),
                &Timestamp::parse("20240601120001").unwrap(),
            )
            .unwrap();
        // A stray file that matches no manifest must survive.
        fs::write(dir.path().join("stray.png"), b"keep me").unwrap();

        assert_eq!(store.owned_files(owner).unwrap().len(), 2);
        assert_eq!(store.delete(owner).unwrap(), 2);
        assert!(store.owned_files(owner).unwrap().is_empty());
        assert!(dir.path().join("stray.png").exists());

        // Idempotent: a second delete removes nothing.
        assert_eq!(store.delete(owner).unwrap(), 0);
    }

    #[test]
    fn delete_tolerates_already_missing_files() {
        let dir = tempdir().unwrap();
        let store = open(dir.path());
        let owner = "20240101090000-beach-day";
        let asset = store
            .store_at(owner, AssetRole::Full, &Upload::new("a.png", b"a".to_vec()), &ts())
            .unwrap();
        fs::remove_file(dir.path().join(&asset.file_name)).unwrap();

        assert_eq!(store.delete(owner).unwrap(), 0);
    }

    #[test]
    fn read_only_store_refuses_writes() {
        let dir = tempdir().unwrap();
        let store = AssetStore::open(dir.path(), "/media/assets", true).unwrap();
        let upload = Upload::new("a.png", b"a".to_vec());

        assert!(matches!(
            store.store_at("owner-id", AssetRole::Full, &upload, &ts()),
            Err(AssetError::Unavailable)
        ));
        assert!(matches!(store.delete("owner-id"), Err(AssetError::Unavailable)));
    }

    #[test]
    fn project_owner_ids_keep_their_slug() {
        let dir = tempdir().unwrap();
        let store = open(dir.path());
        let asset = store
            .store_at("my-project", AssetRole::Cover, &Upload::new("c.webp", vec![1]), &ts())
            .unwrap();
        assert_eq!(asset.file_name, "20240601120000_my-project_cover.webp");
    }
}
