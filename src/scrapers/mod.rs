//! Page-type extractors for the scraped site.
//!
//! Scraping follows a two-phase pattern:
//!
//! 1. **Indexing** ([`listing`]): fetch a category listing and pull out
//!    [`ArticleStub`](crate::models::ArticleStub)s
//! 2. **Fetching** ([`article`]): fetch each stub's page and parse it into
//!    [`ArticleContent`](crate::models::ArticleContent)
//!
//! Each page type has exactly one parse function, so a site redesign only
//! touches the selector table in [`Config`](crate::config::Config) or one
//! of these two files.

pub mod article;
pub mod listing;

pub use article::fetch_article;
pub use listing::index_articles;
