//! # Separate-Chaining Contact Table
//!
//! A fixed-size hash table mapping text keys to [`Contact`] records. Collisions
//! are resolved by chaining: every bucket owns an ordered sequence of entries,
//! and entries that hash to the same bucket are appended to its tail.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────────┐
//!   │                            ContactTable                                  │
//!   │                                                                          │
//!   │   hash_fn: HashFunction          (additive | polynomial | xxh3)          │
//!   │                                                                          │
//!   │   buckets: Vec<Vec<Entry>>       (length fixed at construction)          │
//!   │                                                                          │
//!   │   ┌─────────┬──────────────────────────────────────────────────────────┐ │
//!   │   │ Index 0 │ (empty)                                                  │ │
//!   │   │ Index 1 │ (empty)                                                  │ │
//!   │   │   ...   │                                                          │ │
//!   │   │ Index 5 │ [Amy: 111-222-3333] ─► [May: 222-333-1111]               │ │
//!   │   │ Index 6 │ (empty)                                                  │ │
//!   │   │ Index 7 │ [Rebecca: 999-444-9999]                                  │ │
//!   │   │ Index 8 │ (empty)                                                  │ │
//!   │   │ Index 9 │ [John: 909-876-1234]                                     │ │
//!   │   └─────────┴──────────────────────────────────────────────────────────┘ │
//!   │              head                              tail (newest)            │
//!   │                                                                          │
//!   │   len: usize                     (distinct keys across all chains)       │
//!   │   metrics: TableMetrics          (operation counters)                    │
//!   └──────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Insert Flow
//!
//! ```text
//!   insert(key, number)
//!        │
//!        ▼
//!   index = hash(key) % bucket_count
//!        │
//!        ▼
//!   ┌────────────────────────────────────────────────────────────────────────┐
//!   │ Walk chain at buckets[index] from head                                 │
//!   │                                                                        │
//!   │   key found  → replace Contact in place, stop    (InsertOutcome::Updated)
//!   │   reached end → push Entry at tail               (InsertOutcome::Inserted)
//!   └────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Core Operations
//!
//! | Method              | Complexity        | Description                           |
//! |---------------------|-------------------|---------------------------------------|
//! | `new(size)`         | O(size)           | Create table, reject `size == 0`      |
//! | `insert(k, number)` | O(1) avg, O(chain)| Insert or replace                     |
//! | `search(&k)`        | O(1) avg, O(chain)| Find contact, `None` when absent      |
//! | `print_table()`     | O(size + len)     | One line per bucket to stdout         |
//! | `len()`             | O(1)              | Distinct keys stored                  |
//! | `chain_len(i)`      | O(1)              | Entries in bucket `i`                 |
//!
//! ## Notes
//!
//! - The bucket count never changes. Heavy collision load degrades lookups to
//!   a linear walk of one chain; nothing rehashes.
//! - There is no removal. Entries live until the table is dropped.
//! - The table is not thread-safe: search counters use `Cell`, so the type is
//!   `!Sync`. Every operation touches exactly one bucket.
//! - The key doubles as the contact's name: `insert("John", n)` stores
//!   `Contact { name: "John", number: n }`.

use std::cell::Cell;
use std::fmt;
use std::io::{self, Write};

use log::{debug, trace};

use crate::common::config::TableConfig;
use crate::common::exception::TableError;
use crate::container::contact::Contact;
use crate::container::hash_function::{HashFunction, HashStrategy};

/// One link of a collision chain.
#[derive(Debug, Clone)]
struct Entry {
    key: String,
    contact: Contact,
}

/// Result of [`ContactTable::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The key was new; an entry was appended to its chain.
    Inserted,
    /// The key already existed; its contact was replaced.
    Updated,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TableMetricsSnapshot {
    pub insert_calls: u64,
    pub insert_new: u64,
    pub insert_updates: u64,

    pub search_calls: u64,
    pub search_hits: u64,
    pub search_misses: u64,
    pub search_chain_steps: u64, // entries compared while walking chains

    // gauges captured at snapshot time
    pub len: usize,
    pub bucket_count: usize,
    pub occupied_buckets: usize,
    pub longest_chain: usize,
}

#[derive(Debug, Default)]
struct TableMetrics {
    insert_calls: u64,
    insert_new: u64,
    insert_updates: u64,
    search_calls: MetricsCell,
    search_hits: MetricsCell,
    search_misses: MetricsCell,
    search_chain_steps: MetricsCell,
}

/// Counter that can be bumped through a shared reference.
#[repr(transparent)]
#[derive(Debug, Default)]
struct MetricsCell(Cell<u64>);

impl MetricsCell {
    #[inline]
    fn get(&self) -> u64 {
        self.0.get()
    }

    #[inline]
    fn add(&self, n: u64) {
        self.0.set(self.0.get() + n);
    }

    #[inline]
    fn incr(&self) {
        self.add(1);
    }
}

/// Fixed-size separate-chaining hash table of contacts.
///
/// See module-level documentation for details.
#[derive(Debug)]
pub struct ContactTable {
    hash_fn: HashFunction,
    buckets: Vec<Vec<Entry>>,
    len: usize,
    metrics: TableMetrics,
}

impl ContactTable {
    /// Creates a table with `bucket_count` buckets and the additive hash.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidBucketCount`] when `bucket_count` is zero.
    pub fn new(bucket_count: usize) -> Result<Self, TableError> {
        Self::with_config(TableConfig::new(bucket_count, HashStrategy::Additive))
    }

    /// Creates a table from a full [`TableConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidBucketCount`] when the configured bucket
    /// count is zero.
    pub fn with_config(config: TableConfig) -> Result<Self, TableError> {
        config.validate()?;

        let mut buckets = Vec::with_capacity(config.bucket_count);
        buckets.resize_with(config.bucket_count, Vec::new);

        debug!(
            "Created contact table with {} buckets using {} hashing",
            config.bucket_count, config.hash_strategy
        );

        Ok(Self {
            hash_fn: HashFunction::new(config.hash_strategy),
            buckets,
            len: 0,
            metrics: TableMetrics::default(),
        })
    }

    /// Index of the bucket `key` belongs to.
    pub fn bucket_index(&self, key: &str) -> usize {
        self.hash_fn.bucket_index(key, self.buckets.len())
    }

    /// Inserts a contact named `key`, or replaces the contact already stored
    /// under `key`.
    ///
    /// New keys are appended at the tail of their chain so chain order is
    /// insertion order. An update keeps the entry in its original position.
    pub fn insert(&mut self, key: impl Into<String>, number: impl Into<String>) -> InsertOutcome {
        let key = key.into();
        let number = number.into();
        let index = self.bucket_index(&key);
        self.metrics.insert_calls += 1;

        let chain = &mut self.buckets[index];
        if let Some(entry) = chain.iter_mut().find(|entry| entry.key == key) {
            trace!("Updating '{}' in bucket {}", key, index);
            entry.contact = Contact::new(key, number);
            self.metrics.insert_updates += 1;
            return InsertOutcome::Updated;
        }

        trace!(
            "Appending '{}' to bucket {} at chain position {}",
            key,
            index,
            chain.len()
        );
        let contact = Contact::new(key.clone(), number);
        chain.push(Entry { key, contact });
        self.len += 1;
        self.metrics.insert_new += 1;
        InsertOutcome::Inserted
    }

    /// Looks up the contact stored under `key`.
    ///
    /// A miss is a normal outcome and yields `None`.
    pub fn search(&self, key: &str) -> Option<&Contact> {
        let index = self.bucket_index(key);
        self.metrics.search_calls.incr();

        let mut steps = 0;
        let found = self.buckets[index].iter().find(|entry| {
            steps += 1;
            entry.key == key
        });
        self.metrics.search_chain_steps.add(steps);

        match found {
            Some(entry) => {
                trace!("Found '{}' in bucket {} after {} steps", key, index, steps);
                self.metrics.search_hits.incr();
                Some(&entry.contact)
            }
            None => {
                trace!("'{}' not in bucket {} ({} steps)", key, index, steps);
                self.metrics.search_misses.incr();
                None
            }
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.search(key).is_some()
    }

    /// Number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn hash_strategy(&self) -> HashStrategy {
        self.hash_fn.strategy()
    }

    /// Entries chained in bucket `index`, or `None` if the index is out of range.
    pub fn chain_len(&self, index: usize) -> Option<usize> {
        self.buckets.get(index).map(Vec::len)
    }

    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Ratio of stored entries to buckets. Reported only; never triggers a resize.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Iterates over `(key, contact)` pairs in bucket order, then chain order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Contact)> {
        self.buckets
            .iter()
            .flat_map(|chain| chain.iter().map(|entry| (entry.key.as_str(), &entry.contact)))
    }

    /// Writes the per-bucket listing produced by the `Display` impl to `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), TableError> {
        write!(out, "{}", self)?;
        out.flush()?;
        Ok(())
    }

    /// Prints one line per bucket to stdout.
    pub fn print_table(&self) -> Result<(), TableError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_to(&mut handle)
    }

    /// Returns snapshot metrics from the table.
    pub fn metrics_snapshot(&self) -> TableMetricsSnapshot {
        TableMetricsSnapshot {
            insert_calls: self.metrics.insert_calls,
            insert_new: self.metrics.insert_new,
            insert_updates: self.metrics.insert_updates,
            search_calls: self.metrics.search_calls.get(),
            search_hits: self.metrics.search_hits.get(),
            search_misses: self.metrics.search_misses.get(),
            search_chain_steps: self.metrics.search_chain_steps.get(),
            len: self.len,
            bucket_count: self.buckets.len(),
            occupied_buckets: self.buckets.iter().filter(|chain| !chain.is_empty()).count(),
            longest_chain: self.longest_chain(),
        }
    }
}

impl fmt::Display for ContactTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, chain) in self.buckets.iter().enumerate() {
            if chain.is_empty() {
                writeln!(f, "Index {}: empty", index)?;
                continue;
            }
            write!(f, "Index {}:", index)?;
            for entry in chain {
                write!(f, " - {}", entry.contact)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
