//! Tag page configuration (the `tag_*` keys of the site config)

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Error;

/// Options recognized by the tag page generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagPageConfig {
    /// Directory tag index pages are routed under
    pub tag_page_dir: String,

    /// Layout identifier the external renderer resolves for each tag page
    pub tag_page_layout: String,

    /// Text prepended to the tag name to form the page title
    pub tag_title_prefix: String,

    /// Text appended to the tag name to form the page title
    pub tag_title_suffix: String,
}

impl Default for TagPageConfig {
    fn default() -> Self {
        Self {
            tag_page_dir: "tags".to_string(),
            tag_page_layout: "tag-page".to_string(),
            tag_title_prefix: "Posts Tagged \"".to_string(),
            tag_title_suffix: "\"".to_string(),
        }
    }
}

impl TagPageConfig {
    /// Load configuration from a YAML file. Unknown keys are ignored.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: TagPageConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Pull the recognized keys out of the host's loose config map, falling
    /// back to the defaults for anything absent or non-string.
    pub fn from_site_config(site_config: &HashMap<String, serde_yaml::Value>) -> Self {
        let defaults = Self::default();
        let get = |key: &str, fallback: String| {
            site_config
                .get(key)
                .and_then(|v| v.as_str())
                .map(|s| s.to_string())
                .unwrap_or(fallback)
        };
        Self {
            tag_page_dir: get("tag_page_dir", defaults.tag_page_dir),
            tag_page_layout: get("tag_page_layout", defaults.tag_page_layout),
            tag_title_prefix: get("tag_title_prefix", defaults.tag_title_prefix),
            tag_title_suffix: get("tag_title_suffix", defaults.tag_title_suffix),
        }
    }

    /// Read a whole site config file and extract the tag page options from
    /// it, leaving every other key to the host.
    pub fn from_site_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Reading site config {:?}", path))?;
        let site_config: HashMap<String, serde_yaml::Value> = serde_yaml::from_str(&content)
            .with_context(|| format!("Parsing site config {:?}", path))?;
        Ok(Self::from_site_config(&site_config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TagPageConfig::default();
        assert_eq!(config.tag_page_dir, "tags");
        assert_eq!(config.tag_page_layout, "tag-page");
        assert_eq!(config.tag_title_prefix, "Posts Tagged \"");
        assert_eq!(config.tag_title_suffix, "\"");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
tag_page_dir: topics
tag_title_prefix: "Tag: "
tag_title_suffix: ""
"#;
        let config: TagPageConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.tag_page_dir, "topics");
        assert_eq!(config.tag_page_layout, "tag-page");
        assert_eq!(config.tag_title_prefix, "Tag: ");
        assert_eq!(config.tag_title_suffix, "");
    }

    #[test]
    fn test_from_site_config() {
        use serde_yaml::Value;
        let mut site_config: HashMap<String, Value> = HashMap::new();
        site_config.insert("title".to_string(), Value::String("My Blog".to_string()));
        site_config.insert("tag_page_dir".to_string(), Value::String("topics".to_string()));
        // Non-string values fall back to the default
        site_config.insert("tag_page_layout".to_string(), Value::Bool(true));

        let config = TagPageConfig::from_site_config(&site_config);
        assert_eq!(config.tag_page_dir, "topics");
        assert_eq!(config.tag_page_layout, "tag-page");
        assert_eq!(config.tag_title_prefix, "Posts Tagged \"");
    }

    #[test]
    fn test_from_site_config_empty() {
        let site_config = HashMap::new();
        assert_eq!(
            TagPageConfig::from_site_config(&site_config),
            TagPageConfig::default()
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "tag_page_dir: labels\n").unwrap();

        let config = TagPageConfig::load(&path).unwrap();
        assert_eq!(config.tag_page_dir, "labels");
        assert_eq!(config.tag_page_layout, "tag-page");
    }

    #[test]
    fn test_from_site_file_ignores_unrelated_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(
            &path,
            "title: My Blog\ntheme: landscape\ntag_title_prefix: \"All posts about \"\n",
        )
        .unwrap();

        let config = TagPageConfig::from_site_file(&path).unwrap();
        assert_eq!(config.tag_title_prefix, "All posts about ");
        assert_eq!(config.tag_page_dir, "tags");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = TagPageConfig::load(dir.path().join("nope.yml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
