//! Multi-reference scoring of summaries over basic elements.
//!
//! This module turns BE matches into one score per summary:
//!
//! 1. [`ReferencePool`] counts how many references contain each BE
//! 2. [`TallyFunction`] converts each count into a weight
//! 3. The pool sums weights into precision/recall against each reference
//! 4. [`Combiner`] folds the per-reference scores into one number
//!
//! [`Evaluator`] wires the steps together under one run configuration.
//!
//! # Example
//!
//! ```
//! use bescore_core::element::BasicElement;
//! use bescore_core::evaluation::{Candidate, EvalConfig, Evaluator, ReferencePool};
//!
//! let references = vec![
//!     vec![BasicElement::from_words(&["prices", "rose"])],
//!     vec![BasicElement::from_words(&["prices", "rose"]), BasicElement::from_words(&["oil", "fell"])],
//! ];
//! let pool = ReferencePool::new(&references);
//!
//! let peer = vec![BasicElement::from_words(&["Prices", "rose"])];
//! let result = Evaluator::new(EvalConfig::default())
//!     .evaluate(Candidate::peer(&peer), &pool)
//!     .unwrap();
//!
//! // Recalls are [1.0, 0.5]; leave-one-out maxima are [0.5, 1.0]
//! assert!((result.score - 0.75).abs() < 1e-9);
//! ```
//!
//! # Tally Reference
//!
//! | Tally | Weight for count c | Use Case |
//! |-------|--------------------|----------|
//! | binary | 1 if c ≥ 1 | Plain BE recall |
//! | log | log₂(1 + c) | Reward consensus content, mildly |
//! | root | √c | Reward consensus content, moderately |
//! | total | c | Pyramid-style weighting |
//! | be_length | 1 + length if c ≥ 1 | Favor longer content units |

pub mod aggregation;
pub mod combiner;
pub mod evaluator;
pub mod tally;

pub use aggregation::{ElementSet, PairScore, ReferencePool};
pub use combiner::{average, jackknife, leave_one_out_maxima, Combiner};
pub use evaluator::{Candidate, EvalConfig, Evaluator, SummaryKind, SummaryScore};
pub use tally::TallyFunction;
