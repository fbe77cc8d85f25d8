//! Output generation for CSV, JSON, and Markdown.
//!
//! # Submodules
//!
//! - [`csv_export`]: one row per scored article, re-readable with `read_csv`
//! - [`json`]: the full [`Report`](crate::models::Report), grouped by date
//! - [`markdown`]: a readable report with summary table and SEO details
//!
//! # Output Structure
//!
//! ```text
//! export.csv                       # --csv
//! report.md                        # --markdown
//! json_output_dir/                 # --json-output-dir
//! └── 2025-05-06/
//!     └── politics-business-tech.json
//! ```

pub mod csv_export;
pub mod json;
pub mod markdown;
