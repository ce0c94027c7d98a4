use serde::{Deserialize, Serialize};

use crate::asset::AssetRef;
use crate::timestamp::Timestamp;
use crate::validation::FieldErrors;

/// A portfolio project.
///
/// All projects for the site live in one collection file, unlike articles
/// (one file each). The id is the slugified title and must be unique within
/// the collection; the store rejects duplicate-title inserts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub images: Vec<AssetRef>,
    #[serde(default)]
    pub created_at: Timestamp,
}

/// Caller-supplied fields for creating a project.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub category: String,
}

impl ProjectDraft {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.title.trim().is_empty() {
            errors.add("title", "required");
        }
        if self.category.trim().is_empty() {
            errors.add("category", "required");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_requires_title_and_category() {
        let errors = ProjectDraft::default().validate().unwrap_err();
        assert!(errors.get("title").is_some());
        assert!(errors.get("category").is_some());
        assert!(errors.get("description").is_none());
    }
}
