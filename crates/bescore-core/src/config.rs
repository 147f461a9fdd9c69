//! Scoring configuration constants.
//!
//! This module contains the constants that pin down the scoring contract
//! shared by the aggregator, the combiners and the evaluation binary.
//!
//! # Usage
//!
//! ```
//! use bescore_core::config::{BE_KEY_SEPARATOR, MODEL_SELF_SCORE};
//!
//! // A model summary compared with itself never outranks a real match
//! assert!(MODEL_SELF_SCORE <= 0.0);
//! assert_eq!(BE_KEY_SEPARATOR, '|');
//! ```

// =============================================================================
// Multi-reference scoring
// =============================================================================

/// Score recorded when a model summary is compared with its own reference slot.
///
/// The jackknife combiner takes the maximum over a model summary's recall
/// scores and relies on the self-comparison being non-positive so that it
/// never wins over a comparison with another reference.
pub const MODEL_SELF_SCORE: f64 = -1.0;

/// Score returned for a model summary when it is the only reference.
pub const SINGLE_REFERENCE_MODEL_SCORE: f64 = 1.0;

/// Minimum reference count a BE needs before step tallies give it credit.
pub const MATCH_THRESHOLD: f64 = 1.0;

// =============================================================================
// Basic element keys
// =============================================================================

/// Separator placed between part keys when building a BE match key.
pub const BE_KEY_SEPARATOR: char = '|';

// =============================================================================
// Run defaults
// =============================================================================

/// Tally strategy used when none is configured.
pub const DEFAULT_TALLY: &str = "binary";

/// Combiner used when none is configured.
pub const DEFAULT_COMBINER: &str = "jackknife";
