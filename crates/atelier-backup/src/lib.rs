//! Backup export for Atelier.
//!
//! Bundles the record-store tree and asset tree into one ZIP archive,
//! together with a generated plain-text restoration README carrying a UTC
//! timestamp. The archive is the disaster-recovery story for a deployment
//! whose filesystem is ephemeral: download it, redeploy, unpack.

pub mod error;
pub mod export;

pub use error::{BackupError, BackupResult};
pub use export::{BackupFile, BackupWriter};
