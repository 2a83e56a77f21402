//! Generator module - groups posts by tag and builds one index page per tag

use std::collections::{HashMap, HashSet};

use crate::config::TagPageConfig;
use crate::content::{Post, Tag};
use crate::error::Error;
use crate::templates::{LayoutRegistry, TagIndexPage, TAG_INDEX_LAYOUT};

/// Group posts into per-tag buckets.
///
/// Every distinct non-empty tag across `posts` gets exactly one bucket, and
/// a post lands in the bucket of each tag it carries. Buckets are
/// independent allocations, so a post with several tags is referenced from
/// several buckets without any sharing between them. Posts with no tags
/// contribute nothing; an empty input yields an empty map.
pub fn collect_tags(posts: &[Post]) -> HashMap<Tag, Vec<&Post>> {
    let mut buckets: HashMap<Tag, Vec<&Post>> = HashMap::new();

    for post in posts {
        let mut seen: HashSet<&str> = HashSet::new();
        for name in &post.tags {
            // Skip empty tags
            if name.trim().is_empty() {
                continue;
            }

            let tag = Tag::new(name);
            if tag.dir.is_empty() {
                continue;
            }

            // A post listing the same tag twice still lands in its bucket once
            if !seen.insert(name.as_str()) {
                continue;
            }

            buckets.entry(tag).or_default().push(post);
        }
    }

    buckets
}

/// Build the index page for a single tag.
///
/// Pure function of its inputs: the same tag, posts, and config always
/// produce a structurally equal descriptor. The posts are cloned and stably
/// sorted by name ascending, so posts sharing a name keep their input order.
pub fn build_tag_index(tag: &Tag, posts: &[&Post], config: &TagPageConfig) -> TagIndexPage {
    let mut sorted: Vec<Post> = posts.iter().map(|p| (*p).clone()).collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    TagIndexPage {
        route: format!("{}/{}/index", config.tag_page_dir, tag.dir),
        title: format!(
            "{}{}{}",
            config.tag_title_prefix, tag.name, config.tag_title_suffix
        ),
        layout: config.tag_page_layout.clone(),
        tag: tag.clone(),
        posts: sorted,
    }
}

/// Drives tag page generation for one build.
///
/// Holds a config snapshot and no other state; each [`generate`] call
/// constructs fresh buckets and descriptors, so independent builds can run
/// side by side with their own generator instances.
///
/// [`generate`]: TagPageGenerator::generate
pub struct TagPageGenerator {
    config: TagPageConfig,
}

impl TagPageGenerator {
    /// Create a generator over a config snapshot
    pub fn new(config: TagPageConfig) -> Self {
        Self { config }
    }

    /// Probe the host's layout registry for the [`TAG_INDEX_LAYOUT`] guard
    /// key, returning [`Error::MissingLayout`] when it is absent.
    pub fn check_layout<L: LayoutRegistry + ?Sized>(&self, layouts: &L) -> Result<(), Error> {
        if layouts.has_layout(TAG_INDEX_LAYOUT) {
            Ok(())
        } else {
            Err(Error::MissingLayout(TAG_INDEX_LAYOUT.to_string()))
        }
    }

    /// Generate one index page per distinct tag, in lexicographic tag-name
    /// order, ready for the host renderer.
    ///
    /// When the guard layout is not registered the whole step is skipped
    /// with a warning and the build goes on without tag pages.
    pub fn generate<L: LayoutRegistry + ?Sized>(
        &self,
        posts: &[Post],
        layouts: &L,
    ) -> Vec<TagIndexPage> {
        if let Err(e) = self.check_layout(layouts) {
            tracing::warn!("Skipping tag pages: {}", e);
            return Vec::new();
        }

        let buckets = collect_tags(posts);
        let mut tags: Vec<&Tag> = buckets.keys().collect();
        tags.sort();

        let pages: Vec<TagIndexPage> = tags
            .into_iter()
            .map(|tag| {
                let page = build_tag_index(tag, &buckets[tag], &self.config);
                tracing::debug!("Built tag page: {}", page.route);
                page
            })
            .collect();

        tracing::info!("Generated {} tag pages", pages.len());
        pages
    }
}
