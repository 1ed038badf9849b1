//! Bloom filter configuration and validation
//!
//! # Example
//!
//! ```
//! use bloom_set::FilterConfigBuilder;
//!
//! let config = FilterConfigBuilder::new()
//!     .bit_capacity(4096)
//!     .base_seed(7)
//!     .build()
//!     .expect("Valid config");
//! assert_eq!(config.bit_capacity, 4096);
//! ```

use serde::{Deserialize, Serialize};

use super::hash_functions::DEFAULT_BASE_SEED;
use crate::error::FilterError;

/// Bloom filter configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Number of bits in the filter (m), must be > 0
    pub bit_capacity: u32,
    /// Seed of the first hash function; later functions count up from it
    pub base_seed: u64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            bit_capacity: 1024,
            base_seed: DEFAULT_BASE_SEED,
        }
    }
}

impl FilterConfig {
    /// Create a new configuration with validation
    pub fn new(bit_capacity: u32, base_seed: u64) -> Result<Self, FilterError> {
        let config = Self {
            bit_capacity,
            base_seed,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FilterError> {
        if self.bit_capacity == 0 {
            return Err(FilterError::InvalidCapacity { capacity: 0 });
        }
        Ok(())
    }

    /// Builder-style method to set the bit capacity
    pub fn with_bit_capacity(mut self, bits: u32) -> Self {
        self.bit_capacity = bits;
        self
    }

    /// Builder-style method to set the base seed
    pub fn with_base_seed(mut self, seed: u64) -> Self {
        self.base_seed = seed;
        self
    }
}

/// Builder for FilterConfig with validation
#[derive(Default)]
pub struct FilterConfigBuilder {
    bit_capacity: Option<u32>,
    base_seed: Option<u64>,
}

impl FilterConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter size in bits
    pub fn bit_capacity(mut self, bits: u32) -> Self {
        self.bit_capacity = Some(bits);
        self
    }

    /// Set the seed of the first hash function
    pub fn base_seed(mut self, seed: u64) -> Self {
        self.base_seed = Some(seed);
        self
    }

    /// Build the FilterConfig, validating all parameters
    pub fn build(self) -> Result<FilterConfig, FilterError> {
        let config = self.build_unchecked();
        config.validate()?;
        Ok(config)
    }

    /// Build without validation
    pub fn build_unchecked(self) -> FilterConfig {
        let defaults = FilterConfig::default();

        FilterConfig {
            bit_capacity: self.bit_capacity.unwrap_or(defaults.bit_capacity),
            base_seed: self.base_seed.unwrap_or(defaults.base_seed),
        }
    }
}
