//! Core Bloom filter implementation
//!
//! INVARIANTS:
//! - No false negatives: once `insert(v)` accepted `v`, `contains(v)` is true
//!   for the rest of the filter's life (bits are never cleared).
//! - `element_count` increases by exactly one per insertion whose membership
//!   test was false.
//! - `size()` is the capacity given at construction.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use tracing::{debug, warn};

use super::bit_array::BitArray;
use super::config::FilterConfig;
use super::hash_functions::{HashFamily, HashFunction};
use super::key::encode_key;
use super::parameters::{calculate_fpr, estimate_fpr};
use crate::error::Result;
use crate::metrics::FilterStats;

/// Bloom filter for probabilistic membership testing of `T` values
///
/// The hash family starts at `floor(m * ln(2))` functions, the optimum for a
/// single element, and shrinks to `floor(m * ln(2)) / n` after the `n`-th
/// accepted insertion.
///
/// # Example
///
/// ```
/// use bloom_set::BloomFilter;
///
/// let mut filter = BloomFilter::<String>::new(1024)?;
/// filter.insert("hello");
///
/// assert!(filter.contains("hello"));
/// assert_eq!(filter.size(), 1024);
/// # Ok::<(), bloom_set::FilterError>(())
/// ```
pub struct BloomFilter<T: ?Sized> {
    bits: BitArray,
    hashes: HashFamily,
    /// Size in bits (m)
    m: u32,
    /// Number of accepted insertions (n)
    n: u32,
    _element: PhantomData<fn(&T)>,
}

impl<T: ?Sized> BloomFilter<T> {
    /// Create a filter of `bit_capacity` bits with the default seeds
    pub fn new(bit_capacity: u32) -> Result<Self> {
        Self::with_config(FilterConfig {
            bit_capacity,
            ..FilterConfig::default()
        })
    }

    /// Create a filter from a validated configuration
    pub fn with_config(config: FilterConfig) -> Result<Self> {
        config.validate()?;

        let bits = BitArray::new(config.bit_capacity as usize)?;
        let hashes = HashFamily::build_initial(config.bit_capacity, config.base_seed);

        debug!(
            bit_capacity = config.bit_capacity,
            hash_count = hashes.len(),
            base_seed = config.base_seed,
            "Created Bloom filter"
        );
        if hashes.is_empty() {
            warn!(
                bit_capacity = config.bit_capacity,
                "Bit capacity too small for any hash function; filter reports every value as present"
            );
        }

        Ok(Self {
            bits,
            hashes,
            m: config.bit_capacity,
            n: 0,
            _element: PhantomData,
        })
    }

    /// Insert an element into the filter
    ///
    /// Returns `false` without touching any state when the element already
    /// tests as present (including false positives). Otherwise sets one bit
    /// per active hash function, counts the element, and shrinks the hash
    /// family for later operations.
    pub fn insert<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + ?Sized,
    {
        let key = encode_key::<T, Q>(element);
        if self.contains_key(&key) {
            return false;
        }

        for h in &self.hashes {
            let pos = self.position(h, &key);
            self.bits.set_reduced(pos);
        }

        // Bounded by floor(m * ln 2) + 1: past that the family is empty and
        // every element tests as present.
        self.n += 1;
        self.hashes.adjust(self.m, self.n);

        if self.hashes.is_empty() {
            warn!(
                bit_capacity = self.m,
                element_count = self.n,
                "Hash family exhausted; filter now reports every value as present"
            );
        }

        true
    }

    /// Test if an element might be in the filter
    ///
    /// Returns:
    /// - `true` if the element might be in the set (could be false positive)
    /// - `false` if the element is definitely NOT in the set
    ///
    /// A filter whose hash family is empty returns `true` for everything.
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + ?Sized,
    {
        self.contains_key(&encode_key::<T, Q>(element))
    }

    fn contains_key(&self, key: &[u8]) -> bool {
        self.hashes
            .iter()
            .all(|h| self.bits.get_reduced(self.position(h, key)))
    }

    fn position(&self, h: &HashFunction, key: &[u8]) -> usize {
        (h.digest(key) % self.m) as usize
    }

    /// Filter size in bits
    pub fn size(&self) -> u32 {
        self.m
    }

    /// Number of distinct elements accepted so far
    pub fn element_count(&self) -> u32 {
        self.n
    }

    /// True until the first element is accepted
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Number of hash functions currently consulted (k)
    pub fn hash_count(&self) -> usize {
        self.hashes.len()
    }

    /// Active hash family
    pub fn hash_family(&self) -> &HashFamily {
        &self.hashes
    }

    /// Read-only view of the bit array
    pub fn bits(&self) -> &BitArray {
        &self.bits
    }

    /// Number of bits set in the filter
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Probability that a value never inserted tests as present
    ///
    /// Estimated from the live fill ratio as `(bits_set / m)^k`, which
    /// accounts for bits committed under earlier, longer hash families.
    pub fn false_positive_rate(&self) -> f64 {
        estimate_fpr(self.m, self.bits_set(), self.hashes.len() as u32)
    }

    /// Point-in-time statistics
    pub fn stats(&self) -> FilterStats {
        let bits_set = self.bits_set();
        let k = self.hashes.len() as u32;

        FilterStats {
            size_bits: self.m,
            hash_count: self.hashes.len(),
            elements: self.n,
            bits_set,
            fill_ratio: bits_set as f64 / f64::from(self.m),
            estimated_fpr: estimate_fpr(self.m, bits_set, k),
            textbook_fpr: calculate_fpr(self.m, self.n, k),
        }
    }
}

impl<T: ?Sized> Clone for BloomFilter<T> {
    fn clone(&self) -> Self {
        Self {
            bits: self.bits.clone(),
            hashes: self.hashes.clone(),
            m: self.m,
            n: self.n,
            _element: PhantomData,
        }
    }
}

impl<T: ?Sized> fmt::Debug for BloomFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomFilter")
            .field("m", &self.m)
            .field("n", &self.n)
            .field("k", &self.hashes.len())
            .field("bits_set", &self.bits_set())
            .finish()
    }
}
