//! File-backed JSON record storage for Atelier.
//!
//! This crate implements the persistence layer for articles, galleries, and
//! projects. Records are plain JSON documents on a local filesystem -- one
//! file per article, one `gallery.json` per gallery directory, one collection
//! file for all projects. There is no database and no cache: every listing is
//! a full directory scan, every save is a full-file overwrite.
//!
//! # Storage Backends
//!
//! Raw document I/O goes through the [`DocumentStore`] trait:
//!
//! - [`FsDocumentStore`] -- one `<id>.json` file per document
//! - [`InMemoryDocumentStore`] -- `BTreeMap`-based store for tests and embedding
//!
//! # Design Rules
//!
//! 1. Saves are full replacements. No partial update, no optimistic
//!    concurrency check: concurrent writers to the same id race and the last
//!    write wins.
//! 2. Identifiers embed a second-granularity timestamp; two records created
//!    within the same second with the same title slug collide and the second
//!    save overwrites the first. Documented behavior, not a bug.
//! 3. Bulk listings skip malformed files (logged) and still succeed; single
//!    loads of a malformed file fail with [`StoreError::Parse`],
//!    distinguishable from [`StoreError::NotFound`].
//! 4. Writes against a read-only backend fail with
//!    [`StoreError::Unavailable`], never with a raw low-level I/O error.

pub mod articles;
pub mod error;
pub mod fs;
pub mod galleries;
pub mod ids;
pub mod memory;
pub mod projects;
pub mod traits;

pub use articles::ArticleStore;
pub use error::{StoreError, StoreResult};
pub use fs::FsDocumentStore;
pub use galleries::GalleryStore;
pub use ids::generate_id;
pub use memory::InMemoryDocumentStore;
pub use projects::ProjectStore;
pub use traits::DocumentStore;
