use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::asset::AssetRef;
use crate::timestamp::Timestamp;
use crate::validation::FieldErrors;

/// Maximum number of items a gallery holds unless configured otherwise.
///
/// The cap is enforced at write time by the gallery store; it is not a
/// stored field.
pub const DEFAULT_GALLERY_CAPACITY: usize = 10;

/// One image in a gallery: a full-size asset plus its thumbnail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub image: AssetRef,
    pub thumb: AssetRef,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub created_at: Timestamp,
}

/// A named, ordered image collection.
///
/// On disk a gallery is `<gallery_id>/gallery.json` holding only
/// `{"items": [...]}`; the id is the directory name and is filled in by the
/// store after loading, hence `serde(skip)`.
///
/// Items are kept most-recent-first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gallery {
    #[serde(skip)]
    pub id: String,
    pub items: Vec<GalleryItem>,
}

impl Gallery {
    /// An empty gallery with the given id.
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            items: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find an item by id.
    pub fn item(&self, item_id: &str) -> Option<&GalleryItem> {
        self.items.iter().find(|item| item.id == item_id)
    }
}

/// Caller-supplied fields for adding a gallery item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GalleryItemDraft {
    pub title: String,
    pub tags: BTreeSet<String>,
}

impl GalleryItemDraft {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.title.trim().is_empty() {
            errors.add("title", "required");
        }
        errors.into_result()
    }
}
