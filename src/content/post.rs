//! Post and Tag models

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// A blog post, as handed over by the host generator. Read-only to this
/// crate: tag pages borrow or clone posts but never write back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Post name, unique within any single tag bucket
    pub name: String,

    /// Publication date
    pub date: DateTime<Local>,

    /// Post tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Custom front-matter fields the host carries along
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Post {
    /// Create a new post with the required fields
    pub fn new(name: impl Into<String>, date: DateTime<Local>, tags: Vec<String>) -> Self {
        Self {
            name: name.into(),
            date,
            tags,
            extra: HashMap::new(),
        }
    }
}

/// A tag derived from the posts that carry it. Tags are never created
/// independently of a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    /// The tag name as written in front-matter
    pub name: String,

    /// URL-safe path segment for the tag's index directory
    pub dir: String,
}

impl Tag {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            dir: slug::slugify(name),
        }
    }
}

// Tag identity is the name alone; `dir` is derived from it.
impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state)
    }
}

impl Ord for Tag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl PartialOrd for Tag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_dir_is_slugged() {
        assert_eq!(Tag::new("Rust Programming").dir, "rust-programming");
        assert_eq!(Tag::new("jekyll").dir, "jekyll");
        assert_eq!(Tag::new("C++").dir, "c");
    }

    #[test]
    fn test_tag_identity_ignores_dir() {
        let a = Tag::new("rust");
        let b = Tag {
            name: "rust".to_string(),
            dir: "something-else".to_string(),
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_tag_ordering_by_name() {
        let mut tags = vec![Tag::new("zeta"), Tag::new("alpha"), Tag::new("mike")];
        tags.sort();
        let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "mike", "zeta"]);
    }

    #[test]
    fn test_parse_post_keeps_extra_fields() {
        let yaml = r#"
name: hello-world
date: 2024-03-01T12:00:00+08:00
tags:
  - rust
  - blog
author: someone
"#;
        let post: Post = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(post.name, "hello-world");
        assert_eq!(post.tags, vec!["rust", "blog"]);
        assert_eq!(
            post.extra.get("author").and_then(|v| v.as_str()),
            Some("someone")
        );
    }

    #[test]
    fn test_parse_post_without_tags() {
        let yaml = "name: untagged\ndate: 2024-03-01T12:00:00+08:00\n";
        let post: Post = serde_yaml::from_str(yaml).unwrap();
        assert!(post.tags.is_empty());
    }
}
