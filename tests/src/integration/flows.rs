//! # Integration Test Flows
//!
//! ## Flows Tested:
//!
//! 1. **Element types**: strings, integers and derived-`Hash` structs
//! 2. **Lifecycle**: construction failure, capacity invariant, saturation
//! 3. **Error rate**: live estimate vs observed false positives
//! 4. **Sharing**: external mutex around inserts, lock-free concurrent reads

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use parking_lot::Mutex;

    use bloom_set::domain::scaled_ln2;
    use bloom_set::{BloomFilter, FilterConfigBuilder, FilterError};

    use crate::integration::init_tracing;

    #[derive(Hash)]
    struct Person {
        name: String,
        age: u32,
    }

    fn person(name: &str, age: u32) -> Person {
        Person {
            name: name.to_string(),
            age,
        }
    }

    // =============================================================================
    // ELEMENT TYPES
    // =============================================================================

    #[test]
    fn test_string_filter_flow() {
        init_tracing();
        let mut filter = BloomFilter::<String>::new(1024).unwrap();

        for word in ["hello", "world", "bloom", "filter"] {
            filter.insert(word);
        }

        assert!(filter.contains("hello"));
        assert!(filter.contains("filter"));
        assert!(!filter.contains("goodbye"));
        assert_eq!(filter.size(), 1024);
    }

    #[test]
    fn test_integer_filter_flow() {
        init_tracing();
        let mut filter = BloomFilter::<i64>::new(2048).unwrap();

        for i in (0..100i64).step_by(10) {
            filter.insert(&i);
        }

        assert!(filter.contains(&50i64));
        assert!(!filter.contains(&51i64));
        assert_eq!(filter.element_count(), 10);
    }

    #[test]
    fn test_struct_filter_flow() {
        init_tracing();
        let mut filter = BloomFilter::<Person>::new(4096).unwrap();

        for p in [person("Alice", 30), person("Bob", 25), person("Charlie", 35)] {
            filter.insert(&p);
        }

        assert!(filter.contains(&person("Alice", 30)));
        assert!(!filter.contains(&person("Alice", 31)));
        assert!(!filter.contains(&person("Dave", 40)));
    }

    // =============================================================================
    // LIFECYCLE
    // =============================================================================

    #[test]
    fn test_zero_capacity_always_fails() {
        for _ in 0..5 {
            assert_eq!(
                BloomFilter::<str>::new(0).unwrap_err(),
                FilterError::InvalidCapacity { capacity: 0 }
            );
            assert!(FilterConfigBuilder::new().bit_capacity(0).build().is_err());
        }
    }

    #[test]
    fn test_large_dataset_has_no_false_negatives() {
        init_tracing();
        for (size, items) in [(1024u32, 100), (16384, 1000)] {
            let mut filter = BloomFilter::<String>::new(size).unwrap();
            let values: Vec<String> = (0..items).map(|i| format!("item_{}", i)).collect();

            for v in &values {
                filter.insert(v.as_str());
            }

            let missing = values.iter().filter(|v| !filter.contains(v.as_str())).count();
            assert_eq!(missing, 0, "{} items missing from {}-bit filter", missing, size);
            assert_eq!(filter.size(), size, "Capacity never changes");
        }
    }

    #[test]
    fn test_saturated_filter_keeps_every_insert() {
        init_tracing();
        let mut filter = BloomFilter::<u32>::new(16).unwrap();

        for i in 0..500u32 {
            filter.insert(&i);
        }

        let n = filter.element_count();
        assert!(n >= 1);
        assert!(n <= scaled_ln2(16) + 1, "Accepted {} elements", n);
        assert_eq!(filter.hash_count() as u32, scaled_ln2(16) / n);
        for i in 0..500u32 {
            assert!(filter.contains(&i), "False negative for {}", i);
        }
    }

    #[test]
    fn test_same_config_reproduces_bits() {
        let config = FilterConfigBuilder::new()
            .bit_capacity(512)
            .base_seed(7)
            .build()
            .unwrap();

        let mut a = BloomFilter::<str>::with_config(config.clone()).unwrap();
        let mut b = BloomFilter::<str>::with_config(config).unwrap();
        for word in ["alpha", "beta", "gamma"] {
            a.insert(word);
            b.insert(word);
        }

        assert_eq!(a.bits(), b.bits());
        assert_eq!(a.hash_family(), b.hash_family());
    }

    // =============================================================================
    // ERROR RATE
    // =============================================================================

    #[test]
    fn test_estimated_fpr_tracks_observed() {
        init_tracing();
        let mut filter = BloomFilter::<String>::new(1024).unwrap();
        for i in 0..50 {
            filter.insert(format!("member_{}", i).as_str());
        }

        let probes = 2000;
        let hits = (0..probes)
            .filter(|i| filter.contains(format!("probe_{}", i).as_str()))
            .count();
        let observed = hits as f64 / probes as f64;
        let stats = filter.stats();

        assert!(
            (observed - stats.estimated_fpr).abs() < 0.1,
            "observed {} vs estimated {}",
            observed,
            stats.estimated_fpr
        );
        // Bits committed under the early, long families are not undone by
        // shrinking, so the live rate sits above the textbook one.
        assert!(stats.estimated_fpr > stats.textbook_fpr);
    }

    // =============================================================================
    // SHARING
    // =============================================================================

    #[test]
    fn test_mutex_serialized_inserts_from_threads() {
        init_tracing();
        let filter = Arc::new(Mutex::new(BloomFilter::<u64>::new(1 << 16).unwrap()));

        let handles: Vec<_> = (0..4u64)
            .map(|t| {
                let filter = Arc::clone(&filter);
                thread::spawn(move || {
                    for i in 0..100u64 {
                        filter.lock().insert(&(t * 1000 + i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let filter = filter.lock();
        for t in 0..4u64 {
            for i in 0..100u64 {
                assert!(filter.contains(&(t * 1000 + i)));
            }
        }
    }

    #[test]
    fn test_concurrent_reads_without_writers() {
        let mut filter = BloomFilter::<u64>::new(8192).unwrap();
        for i in 0..64u64 {
            filter.insert(&i);
        }
        let filter = Arc::new(filter);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let filter = Arc::clone(&filter);
                thread::spawn(move || (0..64u64).all(|i| filter.contains(&i)))
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
