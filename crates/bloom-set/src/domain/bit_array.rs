//! Fixed-size packed bit array
//!
//! Bit `i` lives in byte `i / 8` at position `i % 8` (least significant bit
//! first). Capacity is fixed at construction; every access outside
//! `[0, capacity)` is rejected and leaves the array untouched.

use bitvec::prelude::*;

use crate::error::{FilterError, Result};

/// Packed bit vector backing a Bloom filter
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitArray {
    bits: BitVec<u8, Lsb0>,
}

impl BitArray {
    /// Create a bit array with `capacity` addressable bits, all cleared
    ///
    /// Storage is `ceil(capacity / 8)` bytes.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(FilterError::InvalidCapacity { capacity });
        }

        Ok(Self {
            bits: bitvec![u8, Lsb0; 0; capacity],
        })
    }

    /// Number of addressable bits (not bytes)
    pub fn size(&self) -> usize {
        self.bits.len()
    }

    /// Set the bit at `index`
    pub fn set(&mut self, index: usize) -> Result<()> {
        self.check(index)?;
        self.bits.set(index, true);
        Ok(())
    }

    /// Clear the bit at `index`
    pub fn clear(&mut self, index: usize) -> Result<()> {
        self.check(index)?;
        self.bits.set(index, false);
        Ok(())
    }

    /// Flip the bit at `index`
    pub fn toggle(&mut self, index: usize) -> Result<()> {
        self.check(index)?;
        let current = self.bits[index];
        self.bits.set(index, !current);
        Ok(())
    }

    /// Test the bit at `index`
    pub fn is_set(&self, index: usize) -> Result<bool> {
        self.check(index)?;
        Ok(self.bits[index])
    }

    /// Number of set bits
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Packed backing bytes
    pub fn as_raw_slice(&self) -> &[u8] {
        self.bits.as_raw_slice()
    }

    /// Set a bit whose index is already reduced modulo `size()`
    pub(crate) fn set_reduced(&mut self, index: usize) {
        self.bits.set(index, true);
    }

    /// Test a bit whose index is already reduced modulo `size()`
    pub(crate) fn get_reduced(&self, index: usize) -> bool {
        self.bits[index]
    }

    fn check(&self, index: usize) -> Result<()> {
        if index >= self.bits.len() {
            return Err(FilterError::IndexOutOfRange {
                index,
                capacity: self.bits.len(),
            });
        }
        Ok(())
    }
}
