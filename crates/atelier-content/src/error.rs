use std::io;

use atelier_assets::AssetError;
use atelier_backup::BackupError;
use atelier_store::StoreError;
use atelier_types::FieldErrors;

/// Errors surfaced by the content service.
///
/// Mostly a pass-through of the layer errors so callers can match on the
/// taxonomy (`NotFound`, `Parse`, `InvalidFileType`, `Unavailable`) without
/// knowing which subsystem produced it.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Record store failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Asset store failure.
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// Backup export failure.
    #[error(transparent)]
    Backup(#[from] BackupError),

    /// Draft validation failed; the map carries every field's messages.
    #[error("validation failed: {0}")]
    Validation(#[from] FieldErrors),

    /// The configuration file is unreadable or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error outside the stores (startup probing, config reading).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result alias for content service operations.
pub type ContentResult<T> = Result<T, ContentError>;
