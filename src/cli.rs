//! Command-line interface definitions.
//!
//! Every option can be given as a flag; the config path can also come from
//! the environment.

use crate::models::Category;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Which sections to scrape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Politics,
    Business,
    Tech,
    All,
}

impl CategoryArg {
    pub fn expand(self) -> Vec<Category> {
        match self {
            CategoryArg::Politics => vec![Category::Politics],
            CategoryArg::Business => vec![Category::Business],
            CategoryArg::Tech => vec![Category::Tech],
            CategoryArg::All => Category::ALL.to_vec(),
        }
    }
}

/// Scrape news listings and score each article for sentiment, SEO, and readability.
///
/// # Examples
///
/// ```sh
/// # Everything, CSV to stdout
/// news_seo
///
/// # Tech stories mentioning "AI", all outputs
/// news_seo -c tech -f ai --csv tech.csv -j ./json -m report.md
///
/// # Markdown report from yesterday's export, no network
/// news_seo --from-csv tech.csv -m report.md
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Category to scrape (repeatable)
    #[arg(short, long = "category", value_enum, default_values_t = [CategoryArg::All])]
    pub categories: Vec<CategoryArg>,

    /// Only keep articles whose title contains this text (case-insensitive)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Write a CSV export to this path
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Output directory for the JSON report
    #[arg(short, long)]
    pub json_output_dir: Option<PathBuf>,

    /// Write a Markdown report to this path
    #[arg(short, long)]
    pub markdown: Option<PathBuf>,

    /// Re-render a previous CSV export instead of scraping
    #[arg(long, value_name = "CSV")]
    pub from_csv: Option<PathBuf>,

    /// Optional path to a YAML config file
    #[arg(long, env = "NEWS_SEO_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Requested categories in order, `all` expanded.
    pub fn selected_categories(&self) -> Vec<Category> {
        self.categories.iter().flat_map(|c| c.expand()).collect()
    }

    /// No file output requested; the CSV goes to stdout instead.
    pub fn stdout_only(&self) -> bool {
        self.csv.is_none() && self.json_output_dir.is_none() && self.markdown.is_none()
    }
}
