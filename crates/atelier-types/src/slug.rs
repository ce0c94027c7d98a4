//! Title-to-slug normalization.
//!
//! Slugs are the URL-safe half of a record identifier:
//! - Lowercase ASCII letters and digits only
//! - Runs of any other characters collapse to a single hyphen
//! - No leading or trailing hyphen
//! - A title with no alphanumeric characters falls back to [`SLUG_FALLBACK`]

/// Fallback slug for titles that normalize to nothing.
pub const SLUG_FALLBACK: &str = "untitled";

/// Normalize a title into a slug.
///
/// # Examples
///
/// ```
/// use atelier_types::slug::{slugify, SLUG_FALLBACK};
///
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("  Späce   Trip  "), "sp-ce-trip");
/// assert_eq!(slugify("!!!"), SLUG_FALLBACK);
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            // Any run of non-alphanumerics becomes at most one separator.
            pending_separator = true;
        }
    }

    if slug.is_empty() {
        SLUG_FALLBACK.to_string()
    } else {
        slug
    }
}
