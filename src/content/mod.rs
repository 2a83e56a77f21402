//! Content module - the host-owned post model and tag identity

mod post;

pub use post::{Post, Tag};
