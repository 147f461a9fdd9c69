//! Test utilities for bescore-core.
//!
//! Shared fixtures for unit tests. Only compiled when running tests.

use crate::element::BasicElement;

/// Builds an unannotated BE from words.
pub fn be(words: &[&str]) -> BasicElement {
    BasicElement::from_words(words)
}

/// Three reference summaries about one oil-price topic.
///
/// | Key | References containing it |
/// |-----|---------------------------|
/// | `prices rose` | 0, 1, 2 |
/// | `oil prices` | 0, 1 |
/// | `opec met` | 0 |
/// | `demand fell` | 2 |
pub fn sample_references() -> Vec<Vec<BasicElement>> {
    vec![
        vec![be(&["prices", "rose"]), be(&["oil", "prices"]), be(&["opec", "met"])],
        vec![be(&["prices", "rose"]), be(&["oil", "prices"])],
        vec![be(&["prices", "rose"]), be(&["demand", "fell"])],
    ]
}
