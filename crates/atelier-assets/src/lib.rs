//! Uploaded image asset storage for Atelier.
//!
//! Records never embed image bytes; they carry [`AssetRef`]s pointing at
//! files this crate writes under a deterministic naming convention
//! (`<timestamp>_<owner-slug>_<role><ext>`). Which files an owner record owns
//! is tracked in an explicit per-owner manifest, so deleting a record can
//! delete exactly its assets instead of pattern-matching filenames.
//!
//! # Design Rules
//!
//! 1. Only allow-listed image extensions are accepted; anything else fails
//!    with [`AssetError::InvalidFileType`] before a single byte is written.
//! 2. Every stored file is recorded in the owner's manifest in the same
//!    operation; an asset not in a manifest is an orphan (and a bug).
//! 3. Writes against a read-only backend fail with
//!    [`AssetError::Unavailable`], a condition the caller can surface to the
//!    user, never a raw low-level I/O error.
//!
//! [`AssetRef`]: atelier_types::AssetRef

pub mod error;
pub mod manager;
mod manifest;
pub mod upload;

pub use error::{AssetError, AssetResult};
pub use manager::{check_upload, AssetRole, AssetStore, ALLOWED_EXTENSIONS};
pub use upload::Upload;
