//! Tally functions: from reference counts to per-BE weights.
//!
//! A BE's reference count is the number of reference summaries that contain
//! a matching BE. The tally function turns that count into the weight the BE
//! contributes to precision and recall.
//!
//! | Strategy | Weight |
//! |----------|--------|
//! | Binary | 1 if count ≥ 1, else 0 |
//! | Log | log₂(1 + count) |
//! | Root | √count |
//! | Total | count |
//! | BeLength | 1 + BE character length if count ≥ 1, else 0 |

use crate::config::MATCH_THRESHOLD;
use crate::element::BasicElement;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Weighting strategy, chosen once per scoring run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TallyFunction {
    /// Any match earns full credit
    #[default]
    Binary,
    /// Diminishing returns for content repeated across references
    Log,
    /// Milder diminishing returns than `Log`
    Root,
    /// Linear in the number of references
    Total,
    /// Weighted by the BE's textual size instead of its count
    #[serde(alias = "length")]
    BeLength,
}

impl TallyFunction {
    /// All strategies, in declaration order.
    pub const ALL: [TallyFunction; 5] = [
        Self::Binary,
        Self::Log,
        Self::Root,
        Self::Total,
        Self::BeLength,
    ];

    /// Computes the weight of `be` given its reference count.
    ///
    /// Defined for every count including zero. Negative counts are treated
    /// as zero. The BE is only read.
    ///
    /// # Examples
    ///
    /// ```
    /// use bescore_core::element::BasicElement;
    /// use bescore_core::evaluation::TallyFunction;
    ///
    /// let be = BasicElement::from_words(&["rates", "fell"]);
    /// assert_eq!(TallyFunction::Log.tally(3.0, &be), 2.0);
    /// assert_eq!(TallyFunction::BeLength.tally(1.0, &be), 10.0);
    /// ```
    pub fn tally(&self, ref_count: f64, be: &BasicElement) -> f64 {
        let count = ref_count.max(0.0);
        match self {
            Self::Binary => {
                if count >= MATCH_THRESHOLD {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Log => (1.0 + count).log2(),
            Self::Root => count.sqrt(),
            Self::Total => count,
            Self::BeLength => {
                if count >= MATCH_THRESHOLD {
                    1.0 + be.text_len() as f64
                } else {
                    0.0
                }
            }
        }
    }

    /// Returns the snake_case name used in configuration and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Log => "log",
            Self::Root => "root",
            Self::Total => "total",
            Self::BeLength => "be_length",
        }
    }
}

impl fmt::Display for TallyFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TallyFunction {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "binary" => Ok(Self::Binary),
            "log" => Ok(Self::Log),
            "root" | "sqrt" => Ok(Self::Root),
            "total" => Ok(Self::Total),
            "be_length" | "belength" | "length" => Ok(Self::BeLength),
            _ => Err(ConfigError::UnknownTally(value.to_string())),
        }
    }
}
