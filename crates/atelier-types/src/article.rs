use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::asset::AssetRef;
use crate::timestamp::Timestamp;
use crate::validation::FieldErrors;

/// A blog article, persisted as one JSON file per record.
///
/// `id` is derived once at creation from the creation timestamp and the
/// slugified title, and is immutable thereafter: it uniquely determines the
/// record's file on disk. The `slug` alone need not be unique.
///
/// Fields that older files may lack (`subtitle`, `tags`, `cover`,
/// `updated_at`) default at deserialization instead of failing the load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    /// Rich-text body (stored HTML; the render layer is responsible for it).
    pub body: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    pub slug: String,
    #[serde(default)]
    pub cover: Option<AssetRef>,
    #[serde(default)]
    pub created_at: Timestamp,
    #[serde(default)]
    pub updated_at: Timestamp,
}

/// Caller-supplied fields for creating or fully overwriting an article.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub tags: BTreeSet<String>,
}

impl ArticleDraft {
    /// Validate the draft, collecting every problem per field.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.title.trim().is_empty() {
            errors.add("title", "required");
        }
        if self.body.trim().is_empty() {
            errors.add("body", "required");
        }
        errors.into_result()
    }
}
