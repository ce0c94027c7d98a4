//! Record identifier derivation and validation.

use atelier_types::{slugify, Timestamp};

use crate::error::{StoreError, StoreResult};

/// Derive a record identifier from a title and a creation time.
///
/// The identifier is `<YYYYMMDDHHmmss>-<slug>`: the sortable timestamp prefix
/// makes identifiers chronologically ordered, the slug keeps them readable in
/// URLs. Uniqueness comes from timestamp granularity (one second) rather than
/// an exclusion check -- two records created within the same second from the
/// same title produce the same id, and the later save overwrites the earlier
/// one.
///
/// # Examples
///
/// ```
/// use atelier_store::generate_id;
/// use atelier_types::Timestamp;
///
/// let now = Timestamp::parse("20251220165204").unwrap();
/// assert_eq!(generate_id("Hello, World!", &now), "20251220165204-hello-world");
/// assert_eq!(generate_id("???", &now), "20251220165204-untitled");
/// ```
pub fn generate_id(title: &str, now: &Timestamp) -> String {
    format!("{now}-{}", slugify(title))
}

/// Reject identifiers that are empty or could escape the store directory.
///
/// Identifiers arrive from URLs as well as from [`generate_id`], so they are
/// checked before being joined onto a filesystem path.
pub fn validate_id(id: &str) -> StoreResult<()> {
    let safe = !id.is_empty()
        && !id.contains("..")
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if safe {
        Ok(())
    } else {
        Err(StoreError::InvalidId(id.to_string()))
    }
}
