//! Modulo Bias Checker Library
//!
//! A statistical randomness sanity check: reads a bounded byte
//! stream, tabulates byte-value frequencies, and reports whether the
//! empirical distribution deviates from uniform by more than a
//! configurable threshold. This is a heuristic detector for the
//! modulo bias introduced when random values are reduced modulo a
//! non-power-of-two range.
//!
//! # Design Principles
//!
//! - **Heuristic, not proof**: no chi-squared test or confidence
//!   intervals; a passing report is a sanity check, nothing more
//! - **Bounded input**: at most `dataset` bytes are consumed
//! - **Report everything**: the analysis runs to completion and
//!   reports every byte value before deciding the exit code
//!
//! # Example
//!
//! ```
//! use modulobias::{Analyzer, AnalyzerConfig};
//!
//! let analyzer = Analyzer::new(AnalyzerConfig {
//!     dataset: 4,
//!     threshold: 0.0005,
//! });
//!
//! let report = analyzer.run(&b"AABB"[..]).unwrap();
//!
//! assert!(!report.biased);
//! assert_eq!(report.exit_code(), 0);
//! print!("{}", report);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;

// Re-export commonly used types at crate root
pub use analysis::{Analyzer, AnalyzerError, BiasDirection, Entry, FrequencyTable, Report};
pub use config::{AnalyzerConfig, ConfigError, FileConfig};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
