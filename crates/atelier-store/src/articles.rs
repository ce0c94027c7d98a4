use std::sync::Arc;

use tracing::warn;

use atelier_types::Article;

use crate::error::{StoreError, StoreResult};
use crate::traits::DocumentStore;

/// Typed article store: one pretty-printed JSON file per article, named
/// `<id>.json`.
///
/// Identifiers come from [`crate::generate_id`]; saving twice under the same
/// id (same title within the same second) silently overwrites -- last write
/// wins, see the crate-level design rules.
pub struct ArticleStore {
    docs: Arc<dyn DocumentStore>,
}

impl ArticleStore {
    pub fn new(docs: Arc<dyn DocumentStore>) -> Self {
        Self { docs }
    }

    /// Persist an article, overwrite-or-create, full replacement.
    pub fn save(&self, article: &Article) -> StoreResult<()> {
        let json = encode(article)?;
        self.docs.write(&article.id, &json)
    }

    /// Load one article. Absent id is `NotFound`; an unreadable or malformed
    /// file is `Parse`.
    pub fn load(&self, id: &str) -> StoreResult<Article> {
        let json = self
            .docs
            .read(id)?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        decode(id, &json)
    }

    /// Load every article, newest first (`created_at` descending).
    ///
    /// Ties keep the backend's enumeration order, which is unspecified.
    /// Malformed files are skipped and logged; the listing itself succeeds.
    pub fn load_all(&self) -> StoreResult<Vec<Article>> {
        let mut articles = Vec::new();
        for (id, json) in self.docs.list()? {
            match decode(&id, &json) {
                Ok(article) => articles.push(article),
                Err(e) => {
                    warn!(id = %id, error = %e, "skipping malformed article");
                }
            }
        }
        // Stable sort: equal timestamps preserve enumeration order.
        articles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(articles)
    }

    /// Remove an article's record file. Returns `true` if it existed.
    ///
    /// Owned assets (the cover) are the asset manager's responsibility; the
    /// facade wires the cascade.
    pub fn delete(&self, id: &str) -> StoreResult<bool> {
        self.docs.remove(id)
    }
}

/// Encode an article the way the on-disk format requires: UTF-8, 2-space
/// indent, non-ASCII characters left unescaped (serde_json's default).
fn encode(article: &Article) -> StoreResult<String> {
    serde_json::to_string_pretty(article).map_err(|e| StoreError::Serialization(e.to_string()))
}

fn decode(id: &str, json: &str) -> StoreResult<Article> {
    serde_json::from_str(json).map_err(|e| StoreError::Parse {
        id: id.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use atelier_types::{AssetRef, Timestamp};

    use crate::generate_id;
    use crate::memory::InMemoryDocumentStore;

    /// Helper to build an article created at the given timestamp.
    fn article(title: &str, created_at: &str) -> Article {
        let created = Timestamp::parse(created_at).unwrap();
        let id = generate_id(title, &created);
        Article {
            slug: id[15..].to_string(),
            id,
            title: title.to_string(),
            subtitle: String::new(),
            body: "<p>body</p>".to_string(),
            tags: BTreeSet::from(["art".to_string()]),
            cover: None,
            created_at: created.clone(),
            updated_at: created,
        }
    }

    fn store() -> (Arc<InMemoryDocumentStore>, ArticleStore) {
        let docs = Arc::new(InMemoryDocumentStore::new());
        let articles = ArticleStore::new(docs.clone());
        (docs, articles)
    }

    #[test]
    fn save_then_load_round_trips_all_fields() {
        let (_, store) = store();
        let mut original = article("Round Trip", "20240601120000");
        original.subtitle = "a subtitle".to_string();
        original.cover = Some(AssetRef::new("c.jpg", "/media/assets/c.jpg"));

        store.save(&original).unwrap();
        let loaded = store.load(&original.id).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn load_missing_is_not_found() {
        let (_, store) = store();
        assert!(matches!(
            store.load("20240601120000-absent"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn load_malformed_is_parse_error() {
        let (docs, store) = store();
        docs.write("20240601120000-broken", "{ truncated").unwrap();
        assert!(matches!(
            store.load("20240601120000-broken"),
            Err(StoreError::Parse { .. })
        ));
    }

    #[test]
    fn load_all_skips_malformed_and_sorts_newest_first() {
        let (docs, store) = store();
        store.save(&article("Oldest", "20230101000000")).unwrap();
        store.save(&article("Newest", "20250101000000")).unwrap();
        store.save(&article("Middle", "20240101000000")).unwrap();
        docs.write("20240201000000-broken", "not json at all").unwrap();

        let all = store.load_all().unwrap();
        let titles: Vec<_> = all.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Newest", "Middle", "Oldest"]);
    }

    #[test]
    fn same_second_same_title_overwrites() {
        let (_, store) = store();
        let first = article("Twice", "20240601120000");
        let mut second = article("Twice", "20240601120000");
        second.body = "<p>second body</p>".to_string();

        store.save(&first).unwrap();
        store.save(&second).unwrap();

        assert_eq!(store.load_all().unwrap().len(), 1);
        assert_eq!(store.load(&first.id).unwrap().body, "<p>second body</p>");
    }

    #[test]
    fn on_disk_format_is_pretty_with_unescaped_unicode() {
        let a = article("Héllo Wörld", "20240601120000");
        let json = encode(&a).unwrap();
        assert!(json.contains("  \"id\""), "expected 2-space indent: {json}");
        assert!(json.contains("Héllo Wörld"), "non-ASCII must stay unescaped");
        assert!(!json.contains("\\u"), "no unicode escapes expected: {json}");
    }

    #[test]
    fn delete_removes_the_record() {
        let (_, store) = store();
        let a = article("Gone Soon", "20240601120000");
        store.save(&a).unwrap();

        assert!(store.delete(&a.id).unwrap());
        assert!(matches!(store.load(&a.id), Err(StoreError::NotFound(_))));
        assert!(!store.delete(&a.id).unwrap());
    }
}
