//! Report assembly and formatting.
//!
//! Supports both a human-readable table and JSON for scripting.

use crate::datasets::EvalDataset;
use crate::scoring::{Role, ScoreRow};
use bescore_core::evaluation::EvalConfig;
use serde::Serialize;
use std::collections::BTreeMap;

/// Full evaluation report.
#[derive(Debug, Serialize)]
pub struct EvalReport {
    pub config: EvalConfig,
    pub dataset: DatasetInfo,
    pub rows: Vec<ScoreRow>,
    /// Per-summary means across topics, best first
    pub systems: Vec<SystemAverage>,
}

#[derive(Debug, Serialize)]
pub struct DatasetInfo {
    pub num_topics: usize,
    pub num_references: usize,
    pub num_peers: usize,
}

/// Mean score of one named summary over the topics it appears in.
#[derive(Debug, Clone, Serialize)]
pub struct SystemAverage {
    pub name: String,
    pub role: Role,
    pub topics: usize,
    pub mean_precision: f64,
    pub mean_score: f64,
}

impl EvalReport {
    pub fn new(config: EvalConfig, dataset: &EvalDataset, rows: Vec<ScoreRow>) -> Self {
        let systems = system_averages(&rows);
        Self {
            config,
            dataset: DatasetInfo {
                num_topics: dataset.num_topics(),
                num_references: dataset.num_references(),
                num_peers: dataset.num_peers(),
            },
            rows,
            systems,
        }
    }
}

fn system_averages(rows: &[ScoreRow]) -> Vec<SystemAverage> {
    let mut grouped: BTreeMap<(Role, &str), (usize, f64, f64)> = BTreeMap::new();
    for row in rows {
        let entry = grouped
            .entry((row.role, row.summary.as_str()))
            .or_insert((0, 0.0, 0.0));
        entry.0 += 1;
        entry.1 += row.precision;
        entry.2 += row.score;
    }

    let mut systems: Vec<SystemAverage> = grouped
        .into_iter()
        .map(|((role, name), (topics, precision, score))| SystemAverage {
            name: name.to_string(),
            role,
            topics,
            mean_precision: precision / topics as f64,
            mean_score: score / topics as f64,
        })
        .collect();
    systems.sort_by(|a, b| {
        b.mean_score
            .partial_cmp(&a.mean_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    systems
}

/// Formats the report as JSON.
pub fn format_json(report: &EvalReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}

/// Formats the report for terminal output.
pub fn format_human(report: &EvalReport) -> String {
    if report.rows.is_empty() {
        return format!(
            "No summaries to score in {} topic{}",
            report.dataset.num_topics,
            plural(report.dataset.num_topics)
        );
    }

    let mut output = format!(
        "Scored {} summar{} over {} topic{} (tally: {}, combiner: {})\n\n",
        report.rows.len(),
        if report.rows.len() == 1 { "y" } else { "ies" },
        report.dataset.num_topics,
        plural(report.dataset.num_topics),
        report.config.tally,
        report.config.combiner,
    );

    let topic_width = column_width("Topic", report.rows.iter().map(|r| r.topic.as_str()));
    let name_width = column_width("Summary", report.rows.iter().map(|r| r.summary.as_str()));

    output.push_str(&format!(
        "{:<topic_width$}  {:<name_width$}  {:<5}  {:>9}  {:>7}\n",
        "Topic", "Summary", "Role", "Precision", "Score"
    ));
    for row in &report.rows {
        output.push_str(&format!(
            "{:<topic_width$}  {:<name_width$}  {:<5}  {:>9.4}  {:>7.4}\n",
            row.topic,
            row.summary,
            row.role.as_str(),
            row.precision,
            row.score
        ));
    }

    output.push_str("\nAverages:\n");
    let system_width = column_width("Summary", report.systems.iter().map(|s| s.name.as_str()));
    for system in &report.systems {
        output.push_str(&format!(
            "  {:<system_width$}  {:<5}  {:>7.4}  ({} topic{})\n",
            system.name,
            system.role.as_str(),
            system.mean_score,
            system.topics,
            plural(system.topics)
        ));
    }

    output.trim_end().to_string()
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(header.len())
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
