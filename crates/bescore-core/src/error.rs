//! Error types for bescore-core.
//!
//! This module defines the error types used across the core library:
//! combiner contract violations, configuration errors, and scoring errors.
//! Canonicalization never fails; unresolvable mentions pass through unchanged.

use thiserror::Error;

/// Errors raised when per-reference scores cannot be combined.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CombinerError {
    /// No reference scores were supplied
    #[error("Cannot combine scores from zero references")]
    NoReferences,
    /// Precision and recall sequences are not index-aligned
    #[error("Score length mismatch: {precision} precision scores, {recall} recall scores")]
    LengthMismatch {
        /// Number of precision scores supplied
        precision: usize,
        /// Number of recall scores supplied
        recall: usize,
    },
    /// A score was NaN or infinite
    #[error("Non-finite score {value} at reference {index}")]
    NonFiniteScore {
        /// Reference position of the offending score
        index: usize,
        /// The offending value
        value: f64,
    },
    /// A peer summary carried a negative score
    #[error("Negative score {value} at reference {index} for a peer summary")]
    NegativeScore {
        /// Reference position of the offending score
        index: usize,
        /// The offending value
        value: f64,
    },
}

/// Errors raised while resolving run-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Tally strategy name not recognized
    #[error("Unknown tally function: {0} (expected binary, log, root, total or be_length)")]
    UnknownTally(String),
    /// Combiner name not recognized
    #[error("Unknown combiner: {0} (expected jackknife or average)")]
    UnknownCombiner(String),
}

/// Errors raised while scoring a summary against its references.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    /// The reference pool holds no references
    #[error("Reference pool is empty")]
    EmptyPool,
    /// A model summary named a reference slot that does not exist
    #[error("Reference index {index} out of range for pool of {len}")]
    ReferenceOutOfRange {
        /// Requested reference index
        index: usize,
        /// Number of references in the pool
        len: usize,
    },
    /// Combining per-reference scores failed
    #[error("Failed to combine scores: {0}")]
    Combine(#[from] CombinerError),
}
