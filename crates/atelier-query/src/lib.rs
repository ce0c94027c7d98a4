//! In-memory query layer for Atelier records.
//!
//! Everything here is a pure function over borrowed record slices: the
//! presentation layer loads records through `atelier-store`, post-processes
//! them here, and renders the result. Nothing mutates storage, and nothing
//! carries state between calls.
//!
//! Filters are generic over the small [`Record`] trait so articles and
//! gallery items share them; [`find_related`] is article-specific because it
//! keys off slugs.

pub mod filter;
pub mod group;
pub mod record;
pub mod related;

pub use filter::{filter_by_tag, filter_by_text};
pub use group::{group_by_year, UNKNOWN_YEAR};
pub use record::Record;
pub use related::{find_related, DEFAULT_RELATED_MAX};
