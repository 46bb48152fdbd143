//! The analysis pass.
//!
//! Acquires a bounded sample from a byte stream, tallies frequencies,
//! and compares each observed frequency against the uniform baseline.
//! The analysis always runs to completion and reports everything it
//! found; bias and truncation are soft conditions surfaced through the
//! [`Report`], never errors.

use super::frequency::FrequencyTable;
use super::report::{BiasDirection, Entry, Report};
use crate::config::AnalyzerConfig;
use std::io::{ErrorKind, Read};

/// Errors that abort an analysis run.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AnalyzerError {
    /// Zero bytes were read, so the uniform baseline is undefined.
    #[error("empty input: the uniform baseline is undefined for zero bytes")]
    EmptyInput,
}

/// Runs the bias check over a byte stream.
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Creates an analyzer with the given configuration.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this analyzer runs with.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Reads up to `dataset` bytes from `input` and produces a report.
    ///
    /// Returns [`AnalyzerError::EmptyInput`] if the stream yielded no
    /// bytes at all. Read errors other than `Interrupted` end the
    /// sample the same way end-of-input does.
    pub fn run<R: Read>(&self, input: R) -> Result<Report, AnalyzerError> {
        let (table, truncated) = self.acquire(input);

        tracing::debug!(
            total = table.total(),
            distinct = table.distinct(),
            truncated,
            "sample acquired"
        );

        if table.is_empty() {
            return Err(AnalyzerError::EmptyInput);
        }

        let uniform = 1.0 / table.distinct() as f64;
        let total = table.total() as f64;

        let mut biased = false;
        let entries: Vec<Entry> = table
            .sorted_entries()
            .into_iter()
            .map(|(token, count)| {
                let fraction = count as f64 / total;
                let delta = uniform - fraction;

                let label = if delta.abs() > self.config.threshold {
                    biased = true;
                    if delta > 0.0 {
                        Some(BiasDirection::Against)
                    } else {
                        Some(BiasDirection::Towards)
                    }
                } else {
                    None
                };

                Entry {
                    token,
                    count,
                    fraction,
                    label,
                }
            })
            .collect();

        Ok(Report {
            uniform,
            threshold: self.config.threshold,
            entries,
            biased,
            truncated,
        })
    }

    /// Reads up to `dataset` bytes into a frequency table.
    ///
    /// Returns the table and whether the input ended before the cap.
    fn acquire<R: Read>(&self, mut input: R) -> (FrequencyTable, bool) {
        let mut table = FrequencyTable::new();
        let mut remaining = self.config.dataset;
        let mut buf = [0u8; 8192];

        while remaining > 0 {
            let want = remaining.min(buf.len());
            match input.read(&mut buf[..want]) {
                Ok(0) => break,
                Ok(n) => {
                    for &byte in &buf[..n] {
                        table.record(byte);
                    }
                    remaining -= n;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    tracing::warn!(error = %e, "read failed, ending sample");
                    break;
                }
            }
        }

        (table, remaining > 0)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn analyzer(dataset: usize, threshold: f64) -> Analyzer {
        Analyzer::new(AnalyzerConfig { dataset, threshold })
    }

    #[test]
    fn test_uniform_pair_is_unbiased() {
        // Scenario: "AABB" with the cap set to the input length
        let report = analyzer(4, 0.0005).run(&b"AABB"[..]).unwrap();

        assert_eq!(report.uniform, 0.5);
        assert!(!report.biased);
        assert!(!report.truncated);
        assert_eq!(report.exit_code(), 0);
        for entry in &report.entries {
            assert_eq!(entry.fraction, 0.5);
            assert!(entry.label.is_none());
        }
    }

    #[test]
    fn test_skewed_pair_is_biased_both_directions() {
        // Scenario: "AAAB" — A over-represented, B under-represented
        let report = analyzer(4, 0.0005).run(&b"AAAB"[..]).unwrap();

        assert!(report.biased);
        assert!(!report.truncated);
        assert_eq!(report.exit_code(), 1);

        assert_eq!(report.entries[0].token, b'A');
        assert_eq!(report.entries[0].fraction, 0.75);
        assert_eq!(report.entries[0].label, Some(BiasDirection::Towards));

        assert_eq!(report.entries[1].token, b'B');
        assert_eq!(report.entries[1].fraction, 0.25);
        assert_eq!(report.entries[1].label, Some(BiasDirection::Against));
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let result = analyzer(4, 0.0005).run(&b""[..]);
        assert!(matches!(result, Err(AnalyzerError::EmptyInput)));
    }

    #[test]
    fn test_truncation_takes_precedence_over_verdict() {
        // Scenario: "AB" is perfectly uniform but shorter than the cap
        let report = analyzer(4, 0.0005).run(&b"AB"[..]).unwrap();

        assert!(!report.biased);
        assert!(report.truncated);
        assert_eq!(report.exit_code(), 2);
    }

    #[test]
    fn test_truncated_and_biased_exits_two() {
        let report = analyzer(8, 0.0005).run(&b"AAAB"[..]).unwrap();

        assert!(report.biased);
        assert!(report.truncated);
        assert_eq!(report.exit_code(), 2);
    }

    #[test]
    fn test_single_value_full_sample() {
        let report = analyzer(4, 0.0005).run(&b"AAAA"[..]).unwrap();

        assert_eq!(report.uniform, 1.0);
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].fraction, 1.0);
        assert!(!report.biased);
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_cap_stops_acquisition() {
        // Only the first 4 bytes count; the skewed tail is ignored
        let report = analyzer(4, 0.0005).run(&b"ABABZZZZZZZZ"[..]).unwrap();

        assert!(!report.truncated);
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.uniform, 0.5);
        assert!(!report.biased);
    }

    #[test]
    fn test_read_error_treated_as_end_of_input() {
        struct FailingReader {
            served: bool,
        }

        impl Read for FailingReader {
            fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
                if self.served {
                    Err(std::io::Error::new(ErrorKind::BrokenPipe, "gone"))
                } else {
                    self.served = true;
                    buf[..2].copy_from_slice(b"AB");
                    Ok(2)
                }
            }
        }

        let report = analyzer(4, 0.0005)
            .run(FailingReader { served: false })
            .unwrap();

        assert!(report.truncated);
        assert_eq!(report.exit_code(), 2);
    }

    proptest! {
        #[test]
        fn prop_fractions_sum_to_one(data in proptest::collection::vec(any::<u8>(), 1..4096)) {
            let report = analyzer(data.len(), 0.0005).run(data.as_slice()).unwrap();

            let sum: f64 = report.entries.iter().map(|e| e.fraction).sum();
            prop_assert!((sum - 1.0).abs() < 1e-9);
        }

        #[test]
        fn prop_entries_sorted_non_increasing(data in proptest::collection::vec(any::<u8>(), 1..4096)) {
            let report = analyzer(data.len(), 0.0005).run(data.as_slice()).unwrap();

            for pair in report.entries.windows(2) {
                prop_assert!(pair[0].count >= pair[1].count);
            }
        }

        #[test]
        fn prop_short_input_always_exits_two(data in proptest::collection::vec(any::<u8>(), 1..256)) {
            let report = analyzer(data.len() + 1, 0.0005).run(data.as_slice()).unwrap();

            prop_assert!(report.truncated);
            prop_assert_eq!(report.exit_code(), 2);
        }

        #[test]
        fn prop_generous_threshold_never_flags(data in proptest::collection::vec(any::<u8>(), 1..1024)) {
            // A threshold of 1.0 can never be exceeded by |uniform - observed|
            let report = analyzer(data.len(), 1.0).run(data.as_slice()).unwrap();

            prop_assert!(!report.biased);
            for entry in &report.entries {
                prop_assert!(entry.label.is_none());
            }
        }
    }
}
