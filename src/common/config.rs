use crate::common::exception::TableError;
use crate::container::hash_function::HashStrategy;

/** Number of buckets used when the caller does not choose one. */
pub const DEFAULT_BUCKET_COUNT: usize = 10;

/** Multiplier for the polynomial rolling hash. */
pub const POLYNOMIAL_HASH_BASE: u64 = 31;

/** File the interactive shell persists its line history to. */
pub const HISTORY_FILE: &str = ".chaintable_history";

pub const PROMPT: &str = "table> ";

/// Construction parameters for a [`ContactTable`](crate::container::hash_table::ContactTable).
///
/// The bucket count is fixed for the lifetime of the table; there is no
/// load-factor threshold because the table never rehashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    pub bucket_count: usize,
    pub hash_strategy: HashStrategy,
}

impl TableConfig {
    pub fn new(bucket_count: usize, hash_strategy: HashStrategy) -> Self {
        Self {
            bucket_count,
            hash_strategy,
        }
    }

    /// Rejects configurations that would leave the hash function with
    /// nothing to reduce into.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.bucket_count == 0 {
            return Err(TableError::InvalidBucketCount(self.bucket_count));
        }
        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
            hash_strategy: HashStrategy::default(),
        }
    }
}
