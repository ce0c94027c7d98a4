//! High-level content service for Atelier.
//!
//! Provides a unified API over the record store, asset manager, query layer,
//! and backup export. This is the crate a request handler embeds: it opens
//! the content root once at process startup (idempotent), then exposes
//! stateless operations the handler calls per request.

pub mod config;
pub mod error;
pub mod service;

pub use config::ContentConfig;
pub use error::{ContentError, ContentResult};
pub use service::ContentService;

// Re-export key types so embedders need only this crate.
pub use atelier_assets::{AssetRole, Upload};
pub use atelier_backup::BackupFile;
pub use atelier_query::{filter_by_tag, filter_by_text, find_related, group_by_year};
pub use atelier_types::{
    Article, ArticleDraft, AssetRef, FieldErrors, Gallery, GalleryItem, GalleryItemDraft, Project,
    ProjectDraft, Timestamp,
};
