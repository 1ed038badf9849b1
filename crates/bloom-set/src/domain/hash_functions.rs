//! Hash functions for Bloom filter
//!
//! Each function is SipHash-2-4 keyed with its own seed pair, truncated to a
//! 32-bit digest. The family is sized for a single element at construction and
//! only ever shrinks afterwards, following `k = (m/n) * ln(2)` as `n` grows.

use siphasher::sip::SipHasher24;
use std::hash::Hasher;
use tracing::debug;

use super::parameters::{optimal_hash_count, scaled_ln2};

/// Seed of the first function in a family
pub const DEFAULT_BASE_SEED: u64 = 1_337_420;

/// A single keyed hash function
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashFunction {
    k0: u64,
    k1: u64,
}

impl HashFunction {
    pub fn new(k0: u64, k1: u64) -> Self {
        Self { k0, k1 }
    }

    /// Seed pair `(k0, k1)`
    pub fn seeds(&self) -> (u64, u64) {
        (self.k0, self.k1)
    }

    /// 32-bit digest of `bytes`
    pub fn digest(&self, bytes: &[u8]) -> u32 {
        let mut hasher = SipHasher24::new_with_keys(self.k0, self.k1);
        hasher.write(bytes);
        hasher.finish() as u32
    }
}

/// Ordered, shrink-only set of hash functions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashFamily {
    functions: Vec<HashFunction>,
}

impl HashFamily {
    /// Build the family for a filter of `bit_capacity` bits holding one element
    ///
    /// Length is `floor(bit_capacity * ln(2))`. Function `i` is keyed with
    /// `(base_seed + i, base_seed + i)`, so equal inputs give equal families.
    pub fn build_initial(bit_capacity: u32, base_seed: u64) -> Self {
        let functions = (0..u64::from(scaled_ln2(bit_capacity)))
            .map(|i| {
                let seed = base_seed.wrapping_add(i);
                HashFunction::new(seed, seed)
            })
            .collect();

        Self { functions }
    }

    /// Re-derive the hash count after `element_count` accepted insertions
    ///
    /// Truncates to `floor(bit_capacity * ln(2)) / element_count` when that is
    /// shorter than the current family. Dropped functions are never restored.
    ///
    /// Bits already committed under the longer family stay set, so the
    /// resulting false positive rate is not the textbook rate for the new
    /// `(m, n, k)`. Only future hashing cost is reduced.
    pub fn adjust(&mut self, bit_capacity: u32, element_count: u32) {
        let target = optimal_hash_count(bit_capacity, element_count) as usize;
        if target < self.functions.len() {
            debug!(
                from = self.functions.len(),
                to = target,
                element_count,
                "Shrinking hash family"
            );
            self.functions.truncate(target);
        }
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HashFunction> {
        self.functions.iter()
    }

    pub fn functions(&self) -> &[HashFunction] {
        &self.functions
    }
}

impl<'a> IntoIterator for &'a HashFamily {
    type Item = &'a HashFunction;
    type IntoIter = std::slice::Iter<'a, HashFunction>;

    fn into_iter(self) -> Self::IntoIter {
        self.functions.iter()
    }
}
