use chaintable::container::hash_function::{HashFunction, HashStrategy};

use crate::common::fixtures::ALL_STRATEGIES;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_function() {
        let hash_function = HashFunction::new(HashStrategy::Xxh3);
        let hash = hash_function.get_hash("test_key");
        assert_ne!(hash, 0);
    }

    #[test]
    fn test_default_is_additive() {
        let hash_function = HashFunction::default();
        assert_eq!(hash_function.strategy(), HashStrategy::Additive);
        assert_eq!(hash_function.get_hash("Rebecca"), 677);
        assert_eq!(hash_function.bucket_index("Rebecca", 10), 7);
    }

    #[test]
    fn test_sample_buckets_under_additive_hash() {
        let hash_function = HashFunction::new(HashStrategy::Additive);
        let expected = [("John", 9), ("Rebecca", 7), ("Amy", 5), ("May", 5), ("Chris", 5)];
        for (key, bucket) in expected {
            assert_eq!(hash_function.bucket_index(key, 10), bucket, "bucket for {}", key);
        }
    }

    #[test]
    fn test_index_in_range_for_every_size_and_strategy() {
        let keys: Vec<String> = (0..200)
            .map(|i| format!("key-{}-{}", i, "x".repeat(i % 17)))
            .chain(["".to_string(), "ünïcødé".to_string()])
            .collect();

        for strategy in ALL_STRATEGIES {
            let hash_function = HashFunction::new(strategy);
            for size in [1usize, 2, 3, 7, 10, 16, 97, 1024] {
                for key in &keys {
                    let index = hash_function.bucket_index(key, size);
                    assert!(index < size, "{} put '{}' at {} of {}", strategy, key, index, size);
                }
            }
        }
    }

    #[test]
    fn test_single_bucket_maps_everything_to_zero() {
        for strategy in ALL_STRATEGIES {
            let hash_function = HashFunction::new(strategy);
            assert_eq!(hash_function.bucket_index("anything", 1), 0);
        }
    }
}
