//! Analysis report and verdict.
//!
//! A [`Report`] holds the structured outcome of one analysis run. Its
//! `Display` implementation renders the line-oriented text report, and
//! [`Report::exit_code`] maps the verdict onto the process exit status.

use std::fmt;

/// Direction of a detected bias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiasDirection {
    /// Observed frequency above the uniform baseline.
    Towards,
    /// Observed frequency below the uniform baseline.
    Against,
}

impl fmt::Display for BiasDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BiasDirection::Towards => write!(f, "BIASED TOWARDS"),
            BiasDirection::Against => write!(f, "BIASED AGAINST"),
        }
    }
}

/// One reported byte value.
#[derive(Debug, Clone)]
pub struct Entry {
    /// The byte value.
    pub token: u8,
    /// Occurrences in the sample.
    pub count: u64,
    /// Observed fraction of the sample (`count / total`).
    pub fraction: f64,
    /// Bias label, if the deviation exceeded the threshold.
    pub label: Option<BiasDirection>,
}

/// Structured result of one analysis run.
#[derive(Debug, Clone)]
pub struct Report {
    /// The uniform baseline fraction (`1 / distinct`).
    pub uniform: f64,
    /// The deviation threshold used for this run.
    pub threshold: f64,
    /// Entries in descending order of count.
    pub entries: Vec<Entry>,
    /// True if any entry exceeded the threshold.
    pub biased: bool,
    /// True if the input ended before the requested sample size.
    pub truncated: bool,
}

impl Report {
    /// Returns the process exit status for this report.
    ///
    /// `0` if neither check failed, `1` if only the bias check
    /// failed, `2` if the completeness check failed. Truncation
    /// overwrites the bias code rather than combining with it.
    pub fn exit_code(&self) -> i32 {
        let mut code = 0;
        if self.biased {
            code = 1;
        }
        if self.truncated {
            code = 2;
        }
        code
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "INFO: threshold bias towards = {}", self.uniform + self.threshold)?;
        writeln!(f, "INFO: unbiased distribution  = {}", self.uniform)?;
        writeln!(f, "INFO: threshold bias against = {}", self.uniform - self.threshold)?;
        writeln!(f)?;

        for entry in &self.entries {
            match entry.label {
                Some(label) => writeln!(
                    f,
                    "{} = {} ({})",
                    format_token(entry.token),
                    entry.fraction,
                    label
                )?,
                None => writeln!(f, "{} = {}", format_token(entry.token), entry.fraction)?,
            }
        }

        writeln!(f)?;
        if self.biased {
            writeln!(f, "ERROR: the provided byte distribution is biased")?;
        } else {
            writeln!(f, "INFO: the provided byte distribution is unbiased")?;
        }

        if self.truncated {
            writeln!(f)?;
            writeln!(f, "ERROR: the input did not provide the required number of bytes")?;
        }

        Ok(())
    }
}

/// Renders a byte for the report: ASCII graphic characters print as
/// themselves, everything else as a hex escape.
fn format_token(byte: u8) -> String {
    if byte.is_ascii_graphic() {
        (byte as char).to_string()
    } else {
        format!("0x{byte:02x}")
    }
}
