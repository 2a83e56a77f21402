//! Template-facing surface: the page descriptor handed to the external
//! renderer and the layout registry it is guarded by.
//!
//! Rendering itself stays in the host generator. This crate only asks the
//! registry whether a layout name is known and ships serializable
//! descriptors for the host's template context.

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::content::{Post, Tag};

/// Guard layout key probed before any tag page is generated. Distinct from
/// the configurable `tag_page_layout`: a site opts in to tag pages by
/// registering a layout under this name.
pub const TAG_INDEX_LAYOUT: &str = "tag_index";

/// One renderable tag index page. Built fresh per build and discarded after
/// rendering; its route is its only identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagIndexPage {
    /// Output route: `{tag_page_dir}/{tag.dir}/index`
    pub route: String,

    /// Page title: `{tag_title_prefix}{tag.name}{tag_title_suffix}`
    pub title: String,

    /// Layout identifier for the external renderer
    pub layout: String,

    /// The tag this page indexes
    pub tag: Tag,

    /// The tag's posts, sorted by name ascending
    pub posts: Vec<Post>,
}

/// Membership view over the host's template store
pub trait LayoutRegistry {
    /// Whether a layout with this name is registered
    fn has_layout(&self, name: &str) -> bool;
}

impl LayoutRegistry for HashSet<String> {
    fn has_layout(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl<V> LayoutRegistry for HashMap<String, V> {
    fn has_layout(&self, name: &str) -> bool {
        self.contains_key(name)
    }
}

impl<V> LayoutRegistry for IndexMap<String, V> {
    fn has_layout(&self, name: &str) -> bool {
        self.contains_key(name)
    }
}
