use crate::record::Record;

/// Keep records whose tag set contains `tag` exactly (case-sensitive).
///
/// An empty tag is a no-op: every record comes back, in input order.
pub fn filter_by_tag<'a, R: Record>(records: &'a [R], tag: &str) -> Vec<&'a R> {
    if tag.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| record.tags().contains(tag))
        .collect()
}

/// Keep records matching a free-text query: case-insensitive substring match
/// against the title, the subtitle, and the space-joined tag list.
///
/// An empty query is a no-op.
pub fn filter_by_text<'a, R: Record>(records: &'a [R], query: &str) -> Vec<&'a R> {
    if query.is_empty() {
        return records.iter().collect();
    }
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            record.title().to_lowercase().contains(&needle)
                || record.subtitle().to_lowercase().contains(&needle)
                || joined_tags(*record).contains(&needle)
        })
        .collect()
}

fn joined_tags<R: Record>(record: &R) -> String {
    record
        .tags()
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use atelier_types::{Article, Timestamp};

    /// Helper to build an article with the given tags.
    fn article(title: &str, subtitle: &str, tags: &[&str]) -> Article {
        Article {
            id: format!("20240101000000-{title}"),
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            body: "<p>body</p>".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect::<BTreeSet<_>>(),
            slug: title.to_lowercase(),
            cover: None,
            created_at: Timestamp::parse("20240101000000").unwrap(),
            updated_at: Timestamp::default(),
        }
    }

    #[test]
    fn empty_tag_returns_everything_unchanged() {
        let records = vec![
            article("One", "", &["a"]),
            article("Two", "", &["b"]),
            article("Three", "", &[]),
        ];
        let all = filter_by_tag(&records, "");
        let titles: Vec<_> = all.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn tag_match_is_case_sensitive_and_exact() {
        let records = vec![article("One", "", &["Art"]), article("Two", "", &["art"])];
        let hits = filter_by_tag(&records, "art");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Two");
        assert!(filter_by_tag(&records, "ar").is_empty());
    }

    #[test]
    fn text_match_is_case_insensitive_over_title_subtitle_tags() {
        let records = vec![
            article("Sunset Study", "", &[]),
            article("Day Two", "painted at SUNSET", &[]),
            article("Day Three", "", &["sunset", "oil"]),
            article("Unrelated", "", &["ink"]),
        ];
        let hits = filter_by_text(&records, "Sunset");
        let titles: Vec<_> = hits.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Sunset Study", "Day Two", "Day Three"]);
    }

    #[test]
    fn empty_query_is_a_no_op() {
        let records = vec![article("One", "", &[]), article("Two", "", &[])];
        assert_eq!(filter_by_text(&records, "").len(), 2);
    }
}
