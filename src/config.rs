//! Site configuration: category listing URLs, link selectors, and scoring knobs.
//!
//! [`Config::default`] describes ABC News. A YAML file can override any subset
//! of fields; anything left out keeps its default.
//!
//! ```yaml
//! site_name: ABC News
//! max_articles: 5
//! categories:
//!   tech:
//!     listing_url: https://abcnews.go.com/Technology
//!     link_selector: "h2 a.AnchorLink"
//! extra_stopwords: [abc, news]
//! ```

use crate::error::ConfigError;
use crate::models::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, instrument};
use url::Url;

/// Where a category's listing lives and how to find article links on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub listing_url: String,
    /// CSS selector matching the `<a href>` elements of article headlines.
    pub link_selector: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site_name: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Stubs kept per listing page.
    pub max_articles: usize,
    /// Paragraphs shorter than this (in chars) are treated as boilerplate.
    pub min_paragraph_chars: usize,
    /// Occurrences a body term needs to be reported as frequent.
    pub min_term_count: usize,
    pub categories: BTreeMap<Category, CategoryConfig>,
    pub extra_stopwords: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        let abc = |path: &str, selector: &str| CategoryConfig {
            listing_url: format!("https://abcnews.go.com/{path}"),
            link_selector: selector.to_string(),
        };
        Self {
            site_name: "ABC News".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            timeout_secs: 10,
            max_articles: 10,
            min_paragraph_chars: 50,
            min_term_count: 3,
            categories: BTreeMap::from([
                (Category::Politics, abc("Politics", "h2 a.AnchorLink")),
                (
                    Category::Business,
                    abc(
                        "Business",
                        "h2.News__Item__Headline a, h4.News__title a",
                    ),
                ),
                (Category::Tech, abc("Technology", "h2 a.AnchorLink")),
            ]),
            extra_stopwords: Vec::new(),
        }
    }
}

impl Config {
    /// Load config from a YAML file, or the defaults when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file can't be read, isn't valid YAML,
    /// or fails [`Config::validate`].
    #[instrument(level = "info")]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(p) => {
                let raw = std::fs::read_to_string(p)?;
                let config = Self::from_yaml(&raw)?;
                info!(path = %p.display(), "Loaded configuration file");
                config
            }
            None => {
                info!("No config file given; using built-in defaults");
                Self::default()
            }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Check limits are usable and every listing URL is absolute.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout_secs must be > 0".into()));
        }
        if self.max_articles == 0 {
            return Err(ConfigError::Invalid("max_articles must be > 0".into()));
        }
        if self.min_term_count == 0 {
            return Err(ConfigError::Invalid("min_term_count must be > 0".into()));
        }
        for (category, cat) in &self.categories {
            Url::parse(&cat.listing_url).map_err(|e| {
                ConfigError::Invalid(format!(
                    "listing_url for {category} ({}) is not an absolute URL: {e}",
                    cat.listing_url
                ))
            })?;
            if cat.link_selector.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "link_selector for {category} is empty"
                )));
            }
        }
        Ok(())
    }

    pub fn category(&self, category: Category) -> Option<&CategoryConfig> {
        self.categories.get(&category)
    }

    /// The listing URL for `category`, if the site has that section.
    pub fn listing_url(&self, category: Category) -> Option<&str> {
        self.category(category).map(|c| c.listing_url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_cover_every_category() {
        let config = Config::default();
        for category in Category::ALL {
            assert!(config.listing_url(category).is_some(), "{category} missing");
        }
        assert_eq!(
            config.listing_url(Category::Tech),
            Some("https://abcnews.go.com/Technology")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config = Config::from_yaml("max_articles: 3\nextra_stopwords: [abc]\n").unwrap();
        assert_eq!(config.max_articles, 3);
        assert_eq!(config.extra_stopwords, vec!["abc".to_string()]);
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.min_paragraph_chars, 50);
    }

    #[test]
    fn yaml_categories_replace_default_table() {
        let yaml = r#"
categories:
  tech:
    listing_url: http://127.0.0.1:9000/tech
    link_selector: "a.story"
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.categories.len(), 1);
        assert_eq!(
            config.listing_url(Category::Tech),
            Some("http://127.0.0.1:9000/tech")
        );
        assert!(config.listing_url(Category::Politics).is_none());
    }

    #[test]
    fn validate_rejects_relative_listing_url() {
        let mut config = Config::default();
        config.categories.insert(
            Category::Politics,
            CategoryConfig {
                listing_url: "/Politics".to_string(),
                link_selector: "a".to_string(),
            },
        );
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("politics"));
    }

    #[test]
    fn validate_rejects_zero_limits() {
        let config = Config {
            max_articles: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn load_reads_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "site_name: Test Site\ntimeout_secs: 3").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.site_name, "Test Site");
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn load_reports_bad_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_articles: [not a number").unwrap();
        assert!(matches!(
            Config::load(Some(file.path())),
            Err(ConfigError::Yaml(_))
        ));
    }
}
