use std::io;

/// Errors from backup export.
#[derive(Debug, thiserror::Error)]
pub enum BackupError {
    /// I/O error reading a source tree or writing the archive.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A source tree could not be walked.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// The ZIP writer rejected an entry.
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Result alias for backup operations.
pub type BackupResult<T> = Result<T, BackupError>;
