//! # bescore Core
//!
//! Scoring core for basic-element (BE) summary evaluation.
//!
//! A candidate summary is compared with one or more reference summaries by
//! matching the small content units extracted from each. This crate takes
//! those units as given and provides everything between extraction and the
//! final number.
//!
//! ## Modules
//!
//! - [`canonical`] - Normalization of numbers, money, percentages and dates
//! - [`element`] - Basic elements, their parts and match keys
//! - [`evaluation`] - Tally functions, per-reference aggregation and combiners
//! - [`config`] - Scoring constants shared across the workspace
//! - [`error`] - Error types for combining, configuration and scoring

pub mod canonical;
pub mod config;
pub mod element;
pub mod error;
pub mod evaluation;

#[cfg(test)]
pub(crate) mod test_utils;
