//! Run-level scoring: configuration plus single and batch evaluation.
//!
//! An [`Evaluator`] fixes the tally function and combiner for a whole run,
//! then scores summaries against a [`ReferencePool`]. Scoring is pure, so a
//! batch fans out across threads with rayon and needs no coordination
//! beyond collecting results.

use super::aggregation::{ElementSet, PairScore, ReferencePool};
use super::combiner::Combiner;
use super::tally::TallyFunction;
use crate::config::SINGLE_REFERENCE_MODEL_SCORE;
use crate::element::BasicElement;
use crate::error::{ConfigError, ScoringError};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Scoring configuration for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalConfig {
    #[serde(default)]
    pub tally: TallyFunction,
    #[serde(default)]
    pub combiner: Combiner,
}

impl EvalConfig {
    pub fn new(tally: TallyFunction, combiner: Combiner) -> Self {
        Self { tally, combiner }
    }

    /// Resolves strategy names, failing on the first unknown one.
    pub fn from_names(tally: &str, combiner: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            tally: tally.parse()?,
            combiner: combiner.parse()?,
        })
    }
}

/// Whether a summary is a machine output or one of the references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SummaryKind {
    /// Machine summary under evaluation
    Peer,
    /// Human reference summary occupying slot `reference_index` in the pool
    Model { reference_index: usize },
}

impl SummaryKind {
    pub fn is_model(&self) -> bool {
        matches!(self, Self::Model { .. })
    }

    /// Reference slot to leave out when scoring this summary.
    pub fn excluded_reference(&self) -> Option<usize> {
        match self {
            Self::Peer => None,
            Self::Model { reference_index } => Some(*reference_index),
        }
    }
}

/// A summary to score: its BEs and its role.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub elements: &'a [BasicElement],
    pub kind: SummaryKind,
}

impl<'a> Candidate<'a> {
    pub fn peer(elements: &'a [BasicElement]) -> Self {
        Self {
            elements,
            kind: SummaryKind::Peer,
        }
    }

    pub fn model(elements: &'a [BasicElement], reference_index: usize) -> Self {
        Self {
            elements,
            kind: SummaryKind::Model { reference_index },
        }
    }
}

/// Final score of one summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryScore {
    /// Pair scores in reference order (self slot included for models)
    pub per_reference: Vec<PairScore>,
    /// Mean precision over the references the summary was compared with
    pub precision: f64,
    /// Combined recall-driven score
    pub score: f64,
}

/// Scores summaries under a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvalConfig,
}

impl Evaluator {
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Scores one summary against every reference in `pool`.
    ///
    /// # Errors
    ///
    /// Fails if the pool is empty, if a model summary names a slot outside
    /// the pool, or if the combiner rejects the per-reference scores.
    #[instrument(skip_all, fields(kind = ?candidate.kind, elements = candidate.elements.len()))]
    pub fn evaluate(
        &self,
        candidate: Candidate<'_>,
        pool: &ReferencePool,
    ) -> Result<SummaryScore, ScoringError> {
        if pool.is_empty() {
            return Err(ScoringError::EmptyPool);
        }

        let exclude = candidate.kind.excluded_reference();
        let elements = ElementSet::new(candidate.elements);
        let per_reference = pool.score_all(&elements, self.config.tally, exclude)?;

        let precision_scores: Vec<f64> = per_reference.iter().map(|s| s.precision).collect();
        let recall_scores: Vec<f64> = per_reference.iter().map(|s| s.recall).collect();
        let score = self.config.combiner.combine(
            &precision_scores,
            &recall_scores,
            candidate.kind.is_model(),
        )?;

        let compared: Vec<f64> = precision_scores
            .iter()
            .enumerate()
            .filter(|&(i, _)| Some(i) != exclude)
            .map(|(_, &p)| p)
            .collect();
        let precision = if compared.is_empty() {
            SINGLE_REFERENCE_MODEL_SCORE
        } else {
            compared.iter().sum::<f64>() / compared.len() as f64
        };

        debug!(
            score,
            precision,
            references = pool.len(),
            distinct_elements = elements.len(),
            "Scored summary"
        );

        Ok(SummaryScore {
            per_reference,
            precision,
            score,
        })
    }

    /// Scores many summaries against the same pool in parallel.
    ///
    /// Results are returned in input order. The first error aborts the batch.
    pub fn evaluate_batch(
        &self,
        candidates: &[Candidate<'_>],
        pool: &ReferencePool,
    ) -> Result<Vec<SummaryScore>, ScoringError> {
        let scores = candidates
            .par_iter()
            .map(|candidate| self.evaluate(*candidate, pool))
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            summaries = scores.len(),
            references = pool.len(),
            tally = %self.config.tally,
            combiner = %self.config.combiner,
            "Scored batch"
        );
        Ok(scores)
    }
}
