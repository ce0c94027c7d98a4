use std::io;

/// Errors from asset store operations.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// The upload's extension is not on the image allow-list.
    #[error("invalid file type: {file_name:?} is not an allowed image")]
    InvalidFileType { file_name: String },

    /// The owner identifier is empty or contains path-unsafe characters.
    #[error("invalid asset owner id: {0:?}")]
    InvalidOwner(String),

    /// The owner's asset manifest is unreadable.
    #[error("manifest for {owner} is unreadable: {reason}")]
    Manifest { owner: String, reason: String },

    /// The storage backend is read-only or otherwise unwritable.
    #[error("storage unavailable: backend is read-only")]
    Unavailable,

    /// I/O error from the underlying filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result alias for asset operations.
pub type AssetResult<T> = Result<T, AssetError>;

/// Classify a write-side I/O failure; read-only backends must surface as
/// `Unavailable`, not as a raw I/O error.
pub(crate) fn classify_write_error(err: io::Error) -> AssetError {
    const EROFS: i32 = 30;
    if err.kind() == io::ErrorKind::PermissionDenied || err.raw_os_error() == Some(EROFS) {
        AssetError::Unavailable
    } else {
        AssetError::Io(err)
    }
}
