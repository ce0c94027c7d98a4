use std::io;

/// Errors from record store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested record does not exist.
    #[error("record not found: {0}")]
    NotFound(String),

    /// The record file exists but cannot be decoded.
    #[error("malformed record {id}: {reason}")]
    Parse { id: String, reason: String },

    /// The identifier is empty or contains path-unsafe characters.
    #[error("invalid record id: {0:?}")]
    InvalidId(String),

    /// A record with this identifier already exists in the collection.
    #[error("duplicate record id: {0}")]
    Duplicate(String),

    /// The gallery already holds its maximum number of items.
    #[error("gallery {gallery} is full (capacity {capacity})")]
    CapacityExceeded { gallery: String, capacity: usize },

    /// Serialization failure when encoding a record for storage.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The storage backend is read-only or otherwise unwritable.
    #[error("storage unavailable: backend is read-only")]
    Unavailable,

    /// I/O error from the underlying filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Classify a write-side I/O failure.
///
/// Read-only backends (the deployment-constrained case this store exists to
/// work around) surface as `PermissionDenied` or `EROFS`; callers must see a
/// distinguishable "storage unavailable" condition rather than a raw I/O
/// error.
pub(crate) fn classify_write_error(err: io::Error) -> StoreError {
    const EROFS: i32 = 30;
    if err.kind() == io::ErrorKind::PermissionDenied || err.raw_os_error() == Some(EROFS) {
        StoreError::Unavailable
    } else {
        StoreError::Io(err)
    }
}
