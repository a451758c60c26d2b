use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};

use crate::pipeline::{Analysis, LanguageTag, RankedEntry};

const BAR_WIDTH: usize = 30;
const TOKEN_COLUMN: usize = 24;

/// Chart input: category axis = tokens in ranked order, value series = counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    pub categories: Vec<String>,
    pub values: Vec<usize>,
}

impl ChartSeries {
    pub fn from_ranked(top: &[RankedEntry]) -> Self {
        ChartSeries {
            categories: top.iter().map(|e| e.token.clone()).collect(),
            values: top.iter().map(|e| e.count).collect(),
        }
    }
}

/// ECharts bar chart options for the ranked table.
pub fn bar_chart_options(series: &ChartSeries) -> Value {
    json!({
        "tooltip": {
            "trigger": "item",
            "formatter": "{b} : {c}"
        },
        "xAxis": [{
            "type": "category",
            "data": series.categories,
            "axisLabel": {
                "interval": 0,
                "rotate": 30
            }
        }],
        "yAxis": [{ "type": "value" }],
        "series": [{
            "type": "bar",
            "data": series.values
        }]
    })
}

/// Word-cloud input: the filtered token sequence, space-joined.
pub fn word_cloud_input(tokens: &[String]) -> String {
    tokens.join(" ")
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub source: String,
    pub language: LanguageTag,
    pub detected_code: Option<String>,
    pub analyzed_at: DateTime<Utc>,
    pub total_tokens: usize,
    pub distinct_tokens: usize,
    pub top: Vec<RankedEntry>,
    pub chart: ChartSeries,
}

impl Report {
    pub fn new(source: impl Into<String>, analysis: &Analysis) -> Self {
        Report {
            source: source.into(),
            language: analysis.language,
            detected_code: analysis.detected_code.clone(),
            analyzed_at: Utc::now(),
            total_tokens: analysis.tokens.len(),
            distinct_tokens: analysis.distinct_tokens,
            top: analysis.top.clone(),
            chart: ChartSeries::from_ranked(&analysis.top),
        }
    }
}

/// Plain-text table of the ranked entries with proportional bars.
pub fn render_table(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Source:   {}\nLanguage: {} ({})\nTokens:   {} total, {} distinct\n\n",
        report.source,
        report.language.as_str(),
        report.detected_code.as_deref().unwrap_or("undetected"),
        report.total_tokens,
        report.distinct_tokens,
    ));

    if report.top.is_empty() {
        out.push_str("No words found.\n");
        return out;
    }

    let max = report.top.iter().map(|e| e.count).max().unwrap_or(1).max(1);
    out.push_str(&format!(
        "{:>3} | {:<width$} | {:>6} |\n",
        "#",
        "Token",
        "Count",
        width = TOKEN_COLUMN
    ));
    out.push_str(&"-".repeat(TOKEN_COLUMN + 18 + BAR_WIDTH));
    out.push('\n');

    for (i, entry) in report.top.iter().enumerate() {
        let bar_len = (entry.count * BAR_WIDTH).div_ceil(max);
        out.push_str(&format!(
            "{:>3} | {:<width$} | {:>6} | {}\n",
            i + 1,
            truncate(&entry.token, TOKEN_COLUMN),
            entry.count,
            "#".repeat(bar_len),
            width = TOKEN_COLUMN
        ));
    }
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

// ── Tests ──
