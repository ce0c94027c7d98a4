use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use atelier_types::{Gallery, GalleryItem, DEFAULT_GALLERY_CAPACITY};

use crate::error::{classify_write_error, StoreError, StoreResult};
use crate::ids::validate_id;

/// Store for capacity-bounded image galleries.
///
/// Each gallery is a directory under the store root holding a single
/// `gallery.json` metadata file (`{"items": [...]}`); item image files live
/// in the asset store, referenced from the items. A gallery that has no
/// directory yet loads as empty -- galleries come into existence on first
/// save.
///
/// The item cap is enforced at write time against the configured capacity;
/// it is not a stored field.
pub struct GalleryStore {
    root: PathBuf,
    capacity: usize,
    read_only: bool,
}

impl GalleryStore {
    /// Open a gallery store rooted at `root` with the default capacity.
    pub fn open(root: impl Into<PathBuf>, read_only: bool) -> StoreResult<Self> {
        Self::with_capacity(root, DEFAULT_GALLERY_CAPACITY, read_only)
    }

    /// Open with an explicit per-gallery item capacity.
    pub fn with_capacity(
        root: impl Into<PathBuf>,
        capacity: usize,
        read_only: bool,
    ) -> StoreResult<Self> {
        let root = root.into();
        if !read_only {
            fs::create_dir_all(&root).map_err(classify_write_error)?;
        }
        Ok(Self {
            root,
            capacity,
            read_only,
        })
    }

    /// The configured per-gallery item cap.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The directory galleries live under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn metadata_path(&self, gallery_id: &str) -> StoreResult<PathBuf> {
        validate_id(gallery_id)?;
        Ok(self.root.join(gallery_id).join("gallery.json"))
    }

    /// Load a gallery. A gallery with no metadata file yet is empty, not
    /// `NotFound`; a malformed metadata file is `Parse`.
    pub fn load(&self, gallery_id: &str) -> StoreResult<Gallery> {
        let path = self.metadata_path(gallery_id)?;
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(Gallery::empty(gallery_id));
            }
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                return Err(StoreError::Parse {
                    id: gallery_id.to_string(),
                    reason: "gallery.json is not valid UTF-8".to_string(),
                });
            }
            Err(e) => return Err(StoreError::Io(e)),
        };
        let mut gallery: Gallery = serde_json::from_str(&json).map_err(|e| StoreError::Parse {
            id: gallery_id.to_string(),
            reason: e.to_string(),
        })?;
        gallery.id = gallery_id.to_string();
        Ok(gallery)
    }

    /// Persist a gallery's metadata, full replacement.
    pub fn save(&self, gallery: &Gallery) -> StoreResult<()> {
        let path = self.metadata_path(&gallery.id)?;
        if self.read_only {
            return Err(StoreError::Unavailable);
        }
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(classify_write_error)?;
        }
        let json = serde_json::to_string_pretty(gallery)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        fs::write(&path, json).map_err(classify_write_error)
    }

    /// Add an item at the front (most recent first).
    ///
    /// Fails with `CapacityExceeded` before anything is written when the
    /// gallery is already full; the stored items are untouched.
    pub fn add_item(&self, gallery_id: &str, item: GalleryItem) -> StoreResult<Gallery> {
        let mut gallery = self.load(gallery_id)?;
        if gallery.len() >= self.capacity {
            return Err(StoreError::CapacityExceeded {
                gallery: gallery_id.to_string(),
                capacity: self.capacity,
            });
        }
        gallery.items.insert(0, item);
        self.save(&gallery)?;
        Ok(gallery)
    }

    /// Remove an item by id, returning it so the caller can clean up the
    /// assets it owns. `NotFound` when the gallery has no such item.
    pub fn remove_item(&self, gallery_id: &str, item_id: &str) -> StoreResult<GalleryItem> {
        let mut gallery = self.load(gallery_id)?;
        let position = gallery
            .items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or_else(|| StoreError::NotFound(item_id.to_string()))?;
        let removed = gallery.items.remove(position);
        self.save(&gallery)?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use atelier_types::{AssetRef, Timestamp};
    use tempfile::tempdir;

    /// Helper to build a gallery item with distinct asset names.
    fn item(n: usize) -> GalleryItem {
        GalleryItem {
            id: format!("2024060112000{n}-photo-{n}"),
            title: format!("Photo {n}"),
            image: AssetRef::new(format!("{n}_full.jpg"), format!("/media/{n}_full.jpg")),
            thumb: AssetRef::new(format!("{n}_thumb.jpg"), format!("/media/{n}_thumb.jpg")),
            tags: BTreeSet::new(),
            created_at: Timestamp::parse("20240601120000").unwrap(),
        }
    }

    #[test]
    fn unknown_gallery_loads_empty() {
        let dir = tempdir().unwrap();
        let store = GalleryStore::open(dir.path(), false).unwrap();
        let gallery = store.load("default").unwrap();
        assert_eq!(gallery.id, "default");
        assert!(gallery.is_empty());
    }

    #[test]
    fn items_are_kept_most_recent_first() {
        let dir = tempdir().unwrap();
        let store = GalleryStore::open(dir.path(), false).unwrap();
        store.add_item("default", item(1)).unwrap();
        let gallery = store.add_item("default", item(2)).unwrap();

        let ids: Vec<_> = gallery.items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(ids, vec!["Photo 2", "Photo 1"]);
    }

    #[test]
    fn full_gallery_rejects_inserts_without_mutation() {
        let dir = tempdir().unwrap();
        let store = GalleryStore::open(dir.path(), false).unwrap();
        for n in 0..DEFAULT_GALLERY_CAPACITY {
            store.add_item("default", item(n)).unwrap();
        }

        let before = store.load("default").unwrap();
        let err = store.add_item("default", item(99)).unwrap_err();
        assert!(matches!(
            err,
            StoreError::CapacityExceeded { capacity, .. } if capacity == DEFAULT_GALLERY_CAPACITY
        ));
        assert_eq!(store.load("default").unwrap(), before);
    }

    #[test]
    fn remove_item_returns_the_removed_item() {
        let dir = tempdir().unwrap();
        let store = GalleryStore::open(dir.path(), false).unwrap();
        store.add_item("default", item(1)).unwrap();
        store.add_item("default", item(2)).unwrap();

        let removed = store.remove_item("default", &item(1).id).unwrap();
        assert_eq!(removed.title, "Photo 1");
        assert_eq!(store.load("default").unwrap().len(), 1);

        assert!(matches!(
            store.remove_item("default", "no-such-item"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn malformed_metadata_is_parse_error() {
        let dir = tempdir().unwrap();
        let store = GalleryStore::open(dir.path(), false).unwrap();
        fs::create_dir_all(dir.path().join("default")).unwrap();
        fs::write(dir.path().join("default/gallery.json"), "{ nope").unwrap();

        assert!(matches!(
            store.load("default"),
            Err(StoreError::Parse { .. })
        ));
    }

    #[test]
    fn read_only_store_refuses_writes() {
        let dir = tempdir().unwrap();
        let store = GalleryStore::open(dir.path(), true).unwrap();
        assert!(matches!(
            store.add_item("default", item(1)),
            Err(StoreError::Unavailable)
        ));
    }
}
