//! Combining per-reference scores into one score per summary.
//!
//! A summary is scored against each of N references separately. The combiner
//! turns those N scores into a single number, with different rules for peer
//! (machine) summaries and model (human reference) summaries:
//!
//! | N | Peer summary | Model summary |
//! |---|--------------|---------------|
//! | 1 | `recall[0]` | 1.0 |
//! | >1 | mean of leave-one-out maxima | `max(recall)` |
//!
//! # Jackknifing
//!
//! For a peer summary each reference i is held out in turn and the best
//! recall among the remaining N−1 references is taken. The mean of those N
//! maxima estimates how the summary would score with one fewer reference,
//! which puts peers on the same footing as model summaries (a model summary
//! is always scored against the N−1 references other than its own).
//!
//! A model summary's own slot holds a non-positive self-score, so a plain
//! maximum skips it as long as some other reference scored higher. That
//! assumption is not checked.
//!
//! Precision scores are accepted and length-checked but never consulted:
//! the combined score is recall-driven. An empty precision slice is read as
//! "not supplied".
//!
//! # References
//!
//! - Efron (1982). "The Jackknife, the Bootstrap and Other Resampling Plans"
//! - Lin (2004). "ROUGE: A Package for Automatic Evaluation of Summaries"

use crate::config::SINGLE_REFERENCE_MODEL_SCORE;
use crate::error::{CombinerError, ConfigError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Strategy for combining per-reference scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Combiner {
    /// Leave-one-out maxima for peers, best match for models
    #[default]
    Jackknife,
    /// Arithmetic mean; model summaries skip their non-positive self slot
    Average,
}

impl Combiner {
    pub const ALL: [Combiner; 2] = [Self::Jackknife, Self::Average];

    /// Combines index-aligned precision/recall scores.
    ///
    /// # Errors
    ///
    /// Fails if no recall scores are given, if a non-empty `precision` does
    /// not match `recall` in length, if any recall score is not finite, or
    /// if a peer summary carries a negative recall score.
    ///
    /// An empty `precision` slice means precision was not supplied and is
    /// accepted for any number of references, so `combine(&[], &[0.2, 0.5,
    /// 0.8], false)` succeeds. Only a non-empty slice is length-checked.
    pub fn combine(
        &self,
        precision: &[f64],
        recall: &[f64],
        is_model: bool,
    ) -> Result<f64, CombinerError> {
        match self {
            Self::Jackknife => jackknife(precision, recall, is_model),
            Self::Average => average(precision, recall, is_model),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jackknife => "jackknife",
            Self::Average => "average",
        }
    }
}

impl fmt::Display for Combiner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Combiner {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "jackknife" | "jackknifing" => Ok(Self::Jackknife),
            "average" | "mean" => Ok(Self::Average),
            _ => Err(ConfigError::UnknownCombiner(value.to_string())),
        }
    }
}

/// Jackknife combination of per-reference scores.
///
/// # Example
///
/// ```
/// use bescore_core::evaluation::jackknife;
///
/// // Leave-one-out maxima are [0.8, 0.8, 0.5]
/// let score = jackknife(&[], &[0.2, 0.5, 0.8], false).unwrap();
/// assert!((score - 0.7).abs() < 1e-9);
///
/// // A model summary takes its best match; -1.0 is its self slot
/// let score = jackknife(&[], &[-1.0, 0.6, 0.9], true).unwrap();
/// assert_eq!(score, 0.9);
/// ```
pub fn jackknife(precision: &[f64], recall: &[f64], is_model: bool) -> Result<f64, CombinerError> {
    if let Some(score) = single_reference(precision, recall, is_model)? {
        return Ok(score);
    }
    validate_scores(recall, is_model)?;

    if is_model {
        return Ok(max_of(recall.iter().copied()));
    }

    let maxima = leave_one_out_maxima(recall);
    Ok(maxima.iter().sum::<f64>() / maxima.len() as f64)
}

/// Mean combination of per-reference scores.
///
/// Model summaries average only their strictly positive scores, which drops
/// the self slot; if none are positive the result is 0.0.
pub fn average(precision: &[f64], recall: &[f64], is_model: bool) -> Result<f64, CombinerError> {
    if let Some(score) = single_reference(precision, recall, is_model)? {
        return Ok(score);
    }
    validate_scores(recall, is_model)?;

    let kept: Vec<f64> = if is_model {
        recall.iter().copied().filter(|&s| s > 0.0).collect()
    } else {
        recall.to_vec()
    };

    if kept.is_empty() {
        return Ok(0.0);
    }
    Ok(kept.iter().sum::<f64>() / kept.len() as f64)
}

/// For each position i, the maximum of all scores except the one at i.
///
/// Returns an empty vector for fewer than two scores, since holding out the
/// only reference leaves nothing to take a maximum over.
pub fn leave_one_out_maxima(scores: &[f64]) -> Vec<f64> {
    if scores.len() < 2 {
        return Vec::new();
    }
    (0..scores.len())
        .map(|held_out| {
            max_of(
                scores
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != held_out)
                    .map(|(_, &s)| s),
            )
        })
        .collect()
}

/// Shared shape checks plus the N = 1 shortcut.
///
/// Returns `Ok(Some(score))` when there is exactly one reference.
fn single_reference(
    precision: &[f64],
    recall: &[f64],
    is_model: bool,
) -> Result<Option<f64>, CombinerError> {
    if recall.is_empty() {
        return Err(CombinerError::NoReferences);
    }
    if !precision.is_empty() && precision.len() != recall.len() {
        return Err(CombinerError::LengthMismatch {
            precision: precision.len(),
            recall: recall.len(),
        });
    }
    if recall.len() > 1 {
        return Ok(None);
    }

    if is_model {
        return Ok(Some(SINGLE_REFERENCE_MODEL_SCORE));
    }
    validate_scores(recall, is_model)?;
    Ok(Some(recall[0]))
}

fn validate_scores(recall: &[f64], is_model: bool) -> Result<(), CombinerError> {
    for (index, &value) in recall.iter().enumerate() {
        if !value.is_finite() {
            return Err(CombinerError::NonFiniteScore { index, value });
        }
        if !is_model && value < 0.0 {
            return Err(CombinerError::NegativeScore { index, value });
        }
    }
    Ok(())
}

fn max_of(scores: impl Iterator<Item = f64>) -> f64 {
    scores.fold(f64::NEG_INFINITY, f64::max)
}
