//! # Bloom Set
//!
//! Generic probabilistic set membership backed by a packed bit array and a
//! family of keyed SipHash functions.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `BitArray`: Fixed-size packed bit vector with range-checked access
//!   - `HashFamily`: Seeded SipHash-2-4 functions, shrink-only
//!   - `BloomFilter<T>`: Insert / contains over any `T: Hash`
//!   - `FilterConfig` / `FilterConfigBuilder`: Validated construction
//!
//! - **Metrics** (`metrics.rs`): `FilterStats` snapshots
//!
//! ## Invariants
//!
//! - **No false negatives**: if `insert(v)` was called, `contains(v)` returns true
//! - **Idempotent insertion**: a value that already tests present changes nothing
//! - **Shrink-only hash family**: `k = floor(m * ln 2) / n`, recomputed after
//!   each accepted insertion and never grown back
//!
//! ## Concurrency
//!
//! A filter has no internal locking. `insert` is a membership test followed by
//! bit writes and a family update; wrap a shared filter in a mutex when more
//! than one thread inserts. Concurrent `contains` through `&BloomFilter` is
//! safe while no insert is in flight.
//!
//! ## Usage Example
//!
//! ```
//! use bloom_set::{BloomFilter, FilterConfigBuilder};
//!
//! let config = FilterConfigBuilder::new().bit_capacity(2048).build()?;
//! let mut filter = BloomFilter::<u64>::with_config(config)?;
//!
//! for i in (0..100u64).step_by(10) {
//!     filter.insert(&i);
//! }
//!
//! assert!(filter.contains(&50u64));
//! assert_eq!(filter.size(), 2048);
//! # Ok::<(), bloom_set::FilterError>(())
//! ```

pub mod domain;
pub mod error;
pub mod metrics;

// Re-exports for convenience
pub use domain::{
    BitArray, BloomFilter, FilterConfig, FilterConfigBuilder, HashFamily, HashFunction,
    DEFAULT_BASE_SEED,
};
pub use error::{FilterError, Result};
pub use metrics::FilterStats;
