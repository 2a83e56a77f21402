//! tag-pages-rs: per-tag index pages for a static site build
//!
//! The host generator hands over its post collection, a configuration
//! surface, and a view of its layout registry; this crate groups the posts
//! by tag and returns one renderable page descriptor per distinct tag:
//!
//! 1. Collect posts into per-tag buckets ([`generator::collect_tags`])
//! 2. Build a [`TagIndexPage`] per tag, in lexicographic tag order
//!    ([`generator::build_tag_index`])
//! 3. Hand the descriptors back for the host to render and write
//!
//! Rendering and file writing stay in the host. When no `tag_index` layout
//! is registered the whole step is skipped and the build goes on without
//! tag pages.

pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod templates;

pub use config::TagPageConfig;
pub use content::{Post, Tag};
pub use error::Error;
pub use generator::{build_tag_index, collect_tags, TagPageGenerator};
pub use templates::{LayoutRegistry, TagIndexPage, TAG_INDEX_LAYOUT};
