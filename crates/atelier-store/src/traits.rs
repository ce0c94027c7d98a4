use crate::error::StoreResult;

/// Raw JSON document storage keyed by record identifier.
///
/// All implementations must satisfy these invariants:
/// - `write` is a full replacement: overwrite-or-create, never append or
///   merge. Concurrent writers to the same id race; the last write wins.
/// - `read` of an absent id returns `Ok(None)`; a document that exists but
///   cannot be decoded as UTF-8 is a `Parse` error, not `NotFound`.
/// - `list` returns every readable document; unreadable ones are skipped and
///   logged, never fail the listing. Enumeration order is unspecified.
/// - Writes against a read-only backend fail with `Unavailable`.
pub trait DocumentStore: Send + Sync {
    /// Read a document's raw JSON text. `Ok(None)` when absent.
    fn read(&self, id: &str) -> StoreResult<Option<String>>;

    /// Overwrite-or-create a document.
    fn write(&self, id: &str, json: &str) -> StoreResult<()>;

    /// All readable documents as `(id, json)` pairs, in enumeration order.
    fn list(&self) -> StoreResult<Vec<(String, String)>>;

    /// Remove a document. Returns `true` if it existed.
    fn remove(&self, id: &str) -> StoreResult<bool>;
}
