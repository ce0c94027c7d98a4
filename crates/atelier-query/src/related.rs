use atelier_types::Article;

/// How many related articles the detail page shows by default.
pub const DEFAULT_RELATED_MAX: usize = 3;

/// Rank other articles by relatedness to `article`.
///
/// Ranking is binary: an article either shares at least one tag or it does
/// not -- the number of shared tags carries no extra weight. Tag-sharing
/// articles come first, most recent first; when fewer than `max` share a
/// tag, the most recent non-sharing articles pad the result until `max` is
/// reached or the pool runs out.
///
/// The article itself is excluded by slug, not by id: a second article that
/// happens to reuse the slug is excluded too. That matches the original
/// site's behavior and is the contract to preserve.
pub fn find_related<'a>(article: &Article, all: &'a [Article], max: usize) -> Vec<&'a Article> {
    let mut sharing: Vec<&'a Article> = Vec::new();
    let mut padding: Vec<&'a Article> = Vec::new();

    for candidate in all {
        if candidate.slug == article.slug {
            continue;
        }
        if candidate.tags.intersection(&article.tags).next().is_some() {
            sharing.push(candidate);
        } else {
            padding.push(candidate);
        }
    }

    sharing.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    padding.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    sharing.into_iter().chain(padding).take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use atelier_types::Timestamp;

    /// Helper to build a tagged article; `created_at` drives recency.
    fn article(slug: &str, tags: &[&str], created_at: &str) -> Article {
        Article {
            id: format!("{created_at}-{slug}"),
            title: slug.to_string(),
            subtitle: String::new(),
            body: "<p>body</p>".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect::<BTreeSet<_>>(),
            slug: slug.to_string(),
            cover: None,
            created_at: Timestamp::parse(created_at).unwrap(),
            updated_at: Timestamp::default(),
        }
    }

    #[test]
    fn tag_sharers_first_then_recency_padding() {
        let subject = article("subject", &["A"], "20240101000000");
        let all = vec![
            article("shares-a", &["A"], "20240201000000"),
            article("tagged-b", &["B"], "20240301000000"),
            article("shares-a-c", &["A", "C"], "20240401000000"),
            article("untagged", &[], "20240501000000"),
        ];

        let related = find_related(&subject, &all, DEFAULT_RELATED_MAX);
        let slugs: Vec<_> = related.iter().map(|a| a.slug.as_str()).collect();
        // Both A-sharers first (most recent first), then the most recent
        // of the remainder.
        assert_eq!(slugs, vec!["shares-a-c", "shares-a", "untagged"]);
    }

    #[test]
    fn sharing_rank_ignores_shared_tag_count() {
        let subject = article("subject", &["A", "B", "C"], "20240101000000");
        let all = vec![
            article("shares-three", &["A", "B", "C"], "20230101000000"),
            article("shares-one", &["C"], "20240601000000"),
        ];

        let related = find_related(&subject, &all, 2);
        let slugs: Vec<_> = related.iter().map(|a| a.slug.as_str()).collect();
        // More recent wins within the sharing class, no matter how many
        // tags overlap.
        assert_eq!(slugs, vec!["shares-one", "shares-three"]);
    }

    #[test]
    fn excludes_self_by_slug() {
        let subject = article("same-slug", &["A"], "20240101000000");
        let all = vec![
            article("same-slug", &["A"], "20240201000000"),
            article("other", &["A"], "20240301000000"),
        ];

        let related = find_related(&subject, &all, 3);
        let slugs: Vec<_> = related.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["other"]);
    }

    #[test]
    fn result_never_exceeds_max_or_pool() {
        let subject = article("subject", &["A"], "20240101000000");
        let all = vec![article("only", &["Z"], "20240201000000")];

        assert_eq!(find_related(&subject, &all, 3).len(), 1);
        assert!(find_related(&subject, &[], 3).is_empty());
    }
}
