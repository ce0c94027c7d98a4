//! Foundation types for the Atelier content engine.
//!
//! This crate provides the record types, timestamp format, slug derivation,
//! and validation primitives used throughout Atelier. Every other Atelier
//! crate depends on `atelier-types`.
//!
//! # Key Types
//!
//! - [`Article`] -- a blog post with rich-text body, tags, and an optional cover
//! - [`Gallery`] / [`GalleryItem`] -- a capacity-bounded ordered image collection
//! - [`Project`] -- a portfolio entry in the site-wide project collection
//! - [`AssetRef`] -- reference to a stored binary asset (filename + public URL)
//! - [`Timestamp`] -- fixed-width sortable `YYYYMMDDHHmmss` timestamp string
//! - [`FieldErrors`] -- per-field validation failures, collected for form display

pub mod article;
pub mod asset;
pub mod error;
pub mod gallery;
pub mod project;
pub mod slug;
pub mod timestamp;
pub mod validation;

pub use article::{Article, ArticleDraft};
pub use asset::AssetRef;
pub use error::TypeError;
pub use gallery::{Gallery, GalleryItem, GalleryItemDraft, DEFAULT_GALLERY_CAPACITY};
pub use project::{Project, ProjectDraft};
pub use slug::{slugify, SLUG_FALLBACK};
pub use timestamp::Timestamp;
pub use validation::FieldErrors;
