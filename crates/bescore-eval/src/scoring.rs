//! Scoring every summary of every topic in a dataset.

use crate::datasets::{EvalDataset, Topic};
use anyhow::{Context, Result};
use bescore_core::evaluation::{Candidate, Evaluator, ReferencePool, SummaryScore};
use serde::Serialize;
use tracing::info;

/// Role of a scored summary in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Peer,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Peer => "peer",
            Self::Model => "model",
        }
    }
}

/// One scored summary.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreRow {
    pub topic: String,
    pub summary: String,
    pub role: Role,
    /// Mean precision over the compared references
    pub precision: f64,
    /// Combined score
    pub score: f64,
    /// Recall against each reference, in dataset order
    pub recall_by_reference: Vec<f64>,
}

impl ScoreRow {
    fn new(topic: &Topic, summary: &str, role: Role, result: SummaryScore) -> Self {
        Self {
            topic: topic.id.clone(),
            summary: summary.to_string(),
            role,
            precision: result.precision,
            score: result.score,
            recall_by_reference: result.per_reference.iter().map(|s| s.recall).collect(),
        }
    }
}

/// Scores one topic's peers, and its references too when `include_models`.
pub fn score_topic(
    evaluator: &Evaluator,
    topic: &Topic,
    include_models: bool,
) -> Result<Vec<ScoreRow>> {
    let references: Vec<&[_]> = topic.references.iter().map(|r| r.elements.as_slice()).collect();
    let pool = ReferencePool::new(&references);

    let mut candidates: Vec<Candidate<'_>> = topic
        .peers
        .iter()
        .map(|peer| Candidate::peer(&peer.elements))
        .collect();
    let mut labels: Vec<(&str, Role)> = topic
        .peers
        .iter()
        .map(|peer| (peer.name.as_str(), Role::Peer))
        .collect();

    if include_models {
        for (i, reference) in topic.references.iter().enumerate() {
            candidates.push(Candidate::model(&reference.elements, i));
            labels.push((reference.name.as_str(), Role::Model));
        }
    }

    let scores = evaluator
        .evaluate_batch(&candidates, &pool)
        .with_context(|| format!("Failed to score topic {:?}", topic.id))?;

    Ok(labels
        .into_iter()
        .zip(scores)
        .map(|((name, role), result)| ScoreRow::new(topic, name, role, result))
        .collect())
}

/// Scores the whole dataset, topic by topic.
pub fn score_dataset(
    evaluator: &Evaluator,
    dataset: &EvalDataset,
    include_models: bool,
) -> Result<Vec<ScoreRow>> {
    let mut rows = Vec::new();
    for topic in &dataset.topics {
        rows.extend(score_topic(evaluator, topic, include_models)?);
    }

    info!(
        topics = dataset.num_topics(),
        rows = rows.len(),
        "Scored dataset"
    );
    Ok(rows)
}
