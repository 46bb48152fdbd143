//! Frequency analysis and bias detection.
//!
//! This module tallies byte frequencies over a bounded sample and
//! compares them against the uniform baseline. The check is a sanity
//! heuristic, not a statistical proof of randomness.

mod analyzer;
mod frequency;
mod report;

pub use analyzer::{Analyzer, AnalyzerError};
pub use frequency::FrequencyTable;
pub use report::{BiasDirection, Entry, Report};
