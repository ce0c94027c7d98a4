use std::collections::BTreeSet;

use atelier_types::{Article, GalleryItem, Timestamp};

/// The record surface the query layer needs: a title, an optional subtitle,
/// a tag set, and a creation time.
pub trait Record {
    fn title(&self) -> &str;

    /// Records without a subtitle return the empty string.
    fn subtitle(&self) -> &str {
        ""
    }

    fn tags(&self) -> &BTreeSet<String>;

    fn created_at(&self) -> &Timestamp;
}

impl Record for Article {
    fn title(&self) -> &str {
        &self.title
    }

    fn subtitle(&self) -> &str {
        &self.subtitle
    }

    fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

impl Record for GalleryItem {
    fn title(&self) -> &str {
        &self.title
    }

    fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}
