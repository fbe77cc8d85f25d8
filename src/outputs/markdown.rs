//! Markdown rendering of a [`Report`]: summary table, sentiment distribution,
//! then per-article SEO details.

use crate::models::{Report, ResultRecord};
use crate::utils::preview;
use itertools::Itertools;
use std::fmt::Write;

const DETAIL_PREVIEW_CHARS: usize = 500;

/// Pipes and newlines would break a table row.
fn cell(s: &str) -> String {
    s.replace('|', "\\|").split_whitespace().join(" ")
}

fn or_none(value: &str) -> &str {
    if value.is_empty() { "(none)" } else { value }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

pub fn sentiment_distribution(records: &[ResultRecord]) -> SentimentDistribution {
    records
        .iter()
        .fold(SentimentDistribution::default(), |mut d, r| {
            let p = r.metrics.sentiment_polarity;
            if p > 0.0 {
                d.positive += 1;
            } else if p < 0.0 {
                d.negative += 1;
            } else {
                d.neutral += 1;
            }
            d
        })
}

pub fn report_to_markdown(report: &Report) -> String {
    let mut md = String::new();

    writeln!(md, "# {} SEO & Sentiment Report\n", report.site).unwrap();
    writeln!(
        md,
        "Generated {} at {}. Categories: {}.",
        report.local_date,
        report.local_time,
        report
            .categories
            .iter()
            .map(|&c| format!("{c} ({})", report.records_for(c).count()))
            .join(", ")
    )
    .unwrap();
    if let Some(filter) = &report.filter {
        writeln!(md, "Title filter: \"{filter}\".").unwrap();
    }
    md.push('\n');

    for category in &report.unavailable {
        writeln!(md, "> No data for this category: {category}\n").unwrap();
    }

    writeln!(md, "## News Articles ({})\n", report.records.len()).unwrap();
    if report.records.is_empty() {
        writeln!(md, "No data available for the selected filters.\n").unwrap();
        return md;
    }

    writeln!(
        md,
        "| Category | Title | Sentiment | Flesch Reading Ease | Flesch-Kincaid Grade | URL |"
    )
    .unwrap();
    writeln!(md, "|---|---|---:|---:|---:|---|").unwrap();
    for r in &report.records {
        writeln!(
            md,
            "| {} | {} | {:.3} | {:.2} | {:.2} | {} |",
            r.category,
            cell(&r.stub.title),
            r.metrics.sentiment_polarity,
            r.metrics.flesch_reading_ease,
            r.metrics.flesch_kincaid_grade,
            r.stub.url
        )
        .unwrap();
    }

    let dist = sentiment_distribution(&report.records);
    writeln!(md, "\n## Sentiment Distribution\n").unwrap();
    writeln!(md, "- Positive: {}", dist.positive).unwrap();
    writeln!(md, "- Neutral: {}", dist.neutral).unwrap();
    writeln!(md, "- Negative: {}", dist.negative).unwrap();

    writeln!(md, "\n## SEO Analysis Details\n").unwrap();
    for r in &report.records {
        let density = r
            .metrics
            .keyword_density
            .iter()
            .map(|(k, v)| format!("{k}: {:.2}%", v * 100.0))
            .join(", ");
        let terms = r
            .metrics
            .frequent_terms
            .iter()
            .sorted_by(|a, b| b.1.total_cmp(a.1).then_with(|| a.0.cmp(b.0)))
            .map(|(k, v)| format!("{k}: {:.2}%", v * 100.0))
            .join(", ");

        writeln!(md, "### {}\n", r.stub.title).unwrap();
        writeln!(md, "- **Category:** {}", r.category).unwrap();
        writeln!(
            md,
            "- **Sentiment:** polarity {:.3}, subjectivity {:.3}",
            r.metrics.sentiment_polarity, r.metrics.sentiment_subjectivity
        )
        .unwrap();
        writeln!(md, "- **Flesch Reading Ease:** {:.2}", r.metrics.flesch_reading_ease).unwrap();
        writeln!(md, "- **Flesch-Kincaid Grade:** {:.2}", r.metrics.flesch_kincaid_grade).unwrap();
        writeln!(md, "- **Meta Title:** {}", or_none(r.content.meta_title.as_deref().unwrap_or_default())).unwrap();
        writeln!(
            md,
            "- **Meta Description:** {}",
            or_none(r.content.meta_description.as_deref().unwrap_or_default())
        )
        .unwrap();
        writeln!(
            md,
            "- **Meta Keywords:** {}",
            or_none(&r.content.meta_keywords.join(", "))
        )
        .unwrap();
        writeln!(md, "- **Keyword Density:** {}", or_none(&density)).unwrap();
        writeln!(md, "- **Frequent Terms:** {}", or_none(&terms)).unwrap();
        writeln!(
            md,
            "\n{}\n",
            preview(&r.content.body_text, DETAIL_PREVIEW_CHARS)
        )
        .unwrap();
        writeln!(md, "[Read more]({})\n\n---\n", r.stub.url).unwrap();
    }

    md
}
