//! Per-reference precision and recall over basic elements.
//!
//! The [`ReferencePool`] holds the BEs of every reference summary for one
//! topic and knows, for each BE match key, how many references contain it.
//! Scoring a summary against one reference sums tally weights:
//!
//! ```text
//! recall    = Σ w(k) over reference keys found in the summary
//!             ─────────────────────────────────────────────
//!             Σ w(k) over all reference keys
//!
//! precision = Σ w(k) over summary keys found in the reference
//!             ─────────────────────────────────────────────
//!             Σ w'(k) over all summary keys
//! ```
//!
//! where `w(k) = tally(count(k), be)` and `w'(k)` uses `max(count(k), 1)` so
//! that summary content absent from every reference still costs precision.
//! Each key is counted once per summary, however often it repeats.
//!
//! When a model summary is scored, its own reference is left out of the
//! counts and its own slot scores [`MODEL_SELF_SCORE`].

use super::tally::TallyFunction;
use crate::config::MODEL_SELF_SCORE;
use crate::element::BasicElement;
use crate::error::ScoringError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Precision and recall of one summary against one reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairScore {
    pub precision: f64,
    pub recall: f64,
}

impl PairScore {
    /// Score of a model summary compared with its own reference slot.
    pub fn self_comparison() -> Self {
        Self {
            precision: MODEL_SELF_SCORE,
            recall: MODEL_SELF_SCORE,
        }
    }

    /// Harmonic mean of precision and recall (0 when both are 0).
    pub fn f1(&self) -> f64 {
        if self.precision + self.recall <= 0.0 {
            0.0
        } else {
            2.0 * self.precision * self.recall / (self.precision + self.recall)
        }
    }
}

/// Distinct BEs of one summary, keyed by match key.
///
/// The first BE seen for a key represents it.
#[derive(Debug, Clone, Default)]
pub struct ElementSet {
    units: BTreeMap<String, BasicElement>,
}

impl ElementSet {
    pub fn new(elements: &[BasicElement]) -> Self {
        let mut units = BTreeMap::new();
        for be in elements {
            units.entry(be.match_key()).or_insert_with(|| be.clone());
        }
        Self { units }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.units.contains_key(key)
    }

    /// Number of distinct BEs.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BasicElement)> {
        self.units.iter().map(|(k, be)| (k.as_str(), be))
    }
}

/// The reference summaries of one topic.
#[derive(Debug, Clone, Default)]
pub struct ReferencePool {
    references: Vec<ElementSet>,
    /// Match key -> number of references containing it
    key_counts: HashMap<String, usize>,
}

impl ReferencePool {
    /// Builds a pool from each reference's BEs.
    pub fn new<R: AsRef<[BasicElement]>>(references: &[R]) -> Self {
        let references: Vec<ElementSet> = references
            .iter()
            .map(|r| ElementSet::new(r.as_ref()))
            .collect();

        let mut key_counts: HashMap<String, usize> = HashMap::new();
        for reference in &references {
            for (key, _) in reference.iter() {
                *key_counts.entry(key.to_string()).or_default() += 1;
            }
        }

        Self {
            references,
            key_counts,
        }
    }

    /// Number of references in the pool.
    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    pub fn reference(&self, index: usize) -> Option<&ElementSet> {
        self.references.get(index)
    }

    /// Number of references containing `key`, optionally leaving one out.
    pub fn reference_count(&self, key: &str, exclude: Option<usize>) -> usize {
        let count = self.key_counts.get(key).copied().unwrap_or(0);
        match exclude.and_then(|i| self.references.get(i)) {
            Some(excluded) if excluded.contains(key) => count - 1,
            _ => count,
        }
    }

    /// Scores `candidate` against the reference at `reference_index`.
    ///
    /// `exclude` names the reference a model summary was drawn from; that
    /// reference is left out of the counts and scoring against it yields
    /// [`PairScore::self_comparison`].
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::ReferenceOutOfRange`] if either index is not
    /// in the pool.
    pub fn score_against(
        &self,
        candidate: &ElementSet,
        reference_index: usize,
        tally: TallyFunction,
        exclude: Option<usize>,
    ) -> Result<PairScore, ScoringError> {
        let reference = self.references.get(reference_index).ok_or(
            ScoringError::ReferenceOutOfRange {
                index: reference_index,
                len: self.references.len(),
            },
        )?;
        if let Some(index) = exclude {
            if index >= self.references.len() {
                return Err(ScoringError::ReferenceOutOfRange {
                    index,
                    len: self.references.len(),
                });
            }
        }
        if exclude == Some(reference_index) {
            return Ok(PairScore::self_comparison());
        }

        let count = |key: &str| self.reference_count(key, exclude) as f64;

        let mut recall_hit = 0.0;
        let mut recall_total = 0.0;
        for (key, be) in reference.iter() {
            let weight = tally.tally(count(key), be);
            recall_total += weight;
            if candidate.contains(key) {
                recall_hit += weight;
            }
        }

        let mut precision_hit = 0.0;
        let mut precision_total = 0.0;
        for (key, be) in candidate.iter() {
            let n = count(key);
            precision_total += tally.tally(n.max(1.0), be);
            if reference.contains(key) {
                precision_hit += tally.tally(n, be);
            }
        }

        Ok(PairScore {
            precision: ratio(precision_hit, precision_total),
            recall: ratio(recall_hit, recall_total),
        })
    }

    /// Scores `candidate` against every reference in pool order.
    pub fn score_all(
        &self,
        candidate: &ElementSet,
        tally: TallyFunction,
        exclude: Option<usize>,
    ) -> Result<Vec<PairScore>, ScoringError> {
        (0..self.references.len())
            .map(|i| self.score_against(candidate, i, tally, exclude))
            .collect()
    }
}

fn ratio(hit: f64, total: f64) -> f64 {
    if total > 0.0 {
        hit / total
    } else {
        0.0
    }
}
