//! Error types for fetching, parsing, and configuration.
//!
//! Fetch failures are the only errors that cross component boundaries.
//! Parse failures on listing pages degrade to "no stubs", and article pages
//! never fail to parse: missing elements become empty fields.

use crate::models::Category;
use thiserror::Error;

/// A failed single-attempt HTTP GET.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("request to {url} timed out")]
    Timeout { url: String },
}

impl FetchError {
    /// Classify a transport error, splitting timeouts out of the generic case.
    pub fn from_transport(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else {
            Self::Http(err)
        }
    }
}

/// Listing markup did not have the structure the category selector expects.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid CSS selector \"{selector}\": {reason}")]
    Selector { selector: String, reason: String },

    #[error("no article links found on {url}")]
    NoArticleLinks { url: String },
}

/// Why a category's listing produced no stubs at all.
///
/// Any of these marks the category as unavailable for the run.
#[derive(Debug, Error)]
pub enum ListingError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("category {0} has no listing configured")]
    Unconfigured(Category),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid YAML in config file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
