//! Point-in-time statistics for a Bloom filter
//!
//! ## Usage
//!
//! ```
//! use bloom_set::BloomFilter;
//!
//! let mut filter = BloomFilter::<str>::new(1024)?;
//! filter.insert("hello");
//!
//! let stats = filter.stats();
//! assert_eq!(stats.elements, 1);
//! assert_eq!(stats.hash_count, 709);
//! # Ok::<(), bloom_set::FilterError>(())
//! ```

use std::fmt;

/// Snapshot of a filter's size, load and estimated error rate
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterStats {
    /// Filter size in bits (m)
    pub size_bits: u32,
    /// Active hash functions (k)
    pub hash_count: usize,
    /// Accepted insertions (n)
    pub elements: u32,
    /// Bits currently set
    pub bits_set: usize,
    /// `bits_set / size_bits`
    pub fill_ratio: f64,
    /// `fill_ratio ^ k`, from the live bit array
    pub estimated_fpr: f64,
    /// `(1 - e^(-kn/m))^k` for the current triple
    ///
    /// Lower than `estimated_fpr` once the family has shrunk, because bits
    /// set under earlier, longer families are not accounted for.
    pub textbook_fpr: f64,
}

impl fmt::Display for FilterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "m={} k={} n={} set={} fill={:.3} fpr={:.6}",
            self.size_bits,
            self.hash_count,
            self.elements,
            self.bits_set,
            self.fill_ratio,
            self.estimated_fpr
        )
    }
}
