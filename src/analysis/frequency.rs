//! Byte-frequency table.
//!
//! The table is populated during the single acquisition pass and is
//! read-only afterwards. Reporting order is a stable descending sort
//! by count; bytes with equal counts keep the order in which they
//! were first seen.

/// Occurrence counts for byte values observed in a sample.
#[derive(Clone)]
pub struct FrequencyTable {
    /// Count per byte value.
    counts: [u64; 256],
    /// Distinct byte values in first-seen order.
    order: Vec<u8>,
    /// Total number of bytes recorded.
    total: u64,
}

impl FrequencyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            counts: [0; 256],
            order: Vec::new(),
            total: 0,
        }
    }

    /// Records one occurrence of a byte.
    pub fn record(&mut self, byte: u8) {
        if self.counts[byte as usize] == 0 {
            self.order.push(byte);
        }
        self.counts[byte as usize] += 1;
        self.total += 1;
    }

    /// Returns the count for a byte value.
    #[inline]
    pub fn count(&self, byte: u8) -> u64 {
        self.counts[byte as usize]
    }

    /// Returns the total number of bytes recorded.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Returns the number of distinct byte values seen.
    #[inline]
    pub fn distinct(&self) -> usize {
        self.order.len()
    }

    /// Returns true if no bytes have been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Returns (byte, count) pairs in descending order of count.
    ///
    /// The sort is stable over first-seen order, so ties appear in
    /// the order their bytes first occurred in the input.
    pub fn sorted_entries(&self) -> Vec<(u8, u64)> {
        let mut entries: Vec<(u8, u64)> = self
            .order
            .iter()
            .map(|&b| (b, self.counts[b as usize]))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FrequencyTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrequencyTable")
            .field("total", &self.total)
            .field("distinct", &self.order.len())
            .finish()
    }
}
