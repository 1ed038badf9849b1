//! Domain Layer - Pure filter logic
//!
//! This layer contains:
//! - Packed bit array
//! - Hash functions and the shrink-only hash family
//! - Hash count sizing policy
//! - Element encoding
//! - Configuration
//! - Core Bloom filter implementation
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - No internal locking; callers sharing a filter across threads serialize
//!   `insert` themselves

pub mod bit_array;
pub mod bloom_filter;
pub mod config;
pub mod hash_functions;
pub mod key;
pub mod parameters;

pub use bit_array::BitArray;
pub use bloom_filter::BloomFilter;
pub use config::{FilterConfig, FilterConfigBuilder};
pub use hash_functions::{HashFamily, HashFunction, DEFAULT_BASE_SEED};
pub use key::encode_key;
pub use parameters::{calculate_fpr, estimate_fpr, optimal_hash_count, scaled_ln2};
