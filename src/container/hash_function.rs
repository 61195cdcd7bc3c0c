use std::fmt;
use std::str::FromStr;

use xxhash_rust::xxh3;

use crate::common::config::POLYNOMIAL_HASH_BASE;
use crate::common::exception::TableError;

/// The scheme used to turn a key into a bucket index.
///
/// `Additive` sums code points and therefore sends every permutation of the
/// same characters to the same bucket. The other two spread keys better; the
/// table behaves identically with any of them apart from chain lengths.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashStrategy {
    #[default]
    Additive,
    Polynomial,
    Xxh3,
}

impl HashStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashStrategy::Additive => "additive",
            HashStrategy::Polynomial => "polynomial",
            HashStrategy::Xxh3 => "xxh3",
        }
    }
}

impl fmt::Display for HashStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashStrategy {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "additive" => Ok(HashStrategy::Additive),
            "polynomial" => Ok(HashStrategy::Polynomial),
            "xxh3" => Ok(HashStrategy::Xxh3),
            other => Err(TableError::UnknownHashStrategy(other.to_string())),
        }
    }
}

/// Represents a hash function over text keys.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HashFunction {
    strategy: HashStrategy,
}

impl HashFunction {
    /// Creates a new `HashFunction`.
    ///
    /// # Parameters
    /// - `strategy`: The hashing scheme to apply.
    ///
    /// # Returns
    /// A new `HashFunction` instance.
    pub fn new(strategy: HashStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> HashStrategy {
        self.strategy
    }

    /// Returns the full-width hash value of the given key.
    ///
    /// Accumulation wraps, so the function is total for keys of any length.
    /// The empty key hashes to 0 under the additive and polynomial schemes.
    ///
    /// # Parameters
    /// - `key`: The key to be hashed.
    ///
    /// # Returns
    /// The hashed value.
    pub fn get_hash(&self, key: &str) -> u64 {
        match self.strategy {
            HashStrategy::Additive => key
                .chars()
                .fold(0u64, |acc, c| acc.wrapping_add(u64::from(c))),
            HashStrategy::Polynomial => key.chars().fold(0u64, |acc, c| {
                acc.wrapping_mul(POLYNOMIAL_HASH_BASE)
                    .wrapping_add(u64::from(c))
            }),
            HashStrategy::Xxh3 => xxh3::xxh3_64(key.as_bytes()),
        }
    }

    /// Reduces the hash of `key` into `[0, bucket_count)`.
    ///
    /// `bucket_count` must be non-zero; tables validate this at construction.
    pub fn bucket_index(&self, key: &str, bucket_count: usize) -> usize {
        debug_assert!(bucket_count > 0, "bucket count must be positive");
        (self.get_hash(key) % bucket_count as u64) as usize
    }
}
