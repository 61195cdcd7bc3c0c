pub mod contact;
pub mod hash_function;
pub mod hash_table;

pub use contact::Contact;
pub use hash_function::{HashFunction, HashStrategy};
pub use hash_table::{ContactTable, InsertOutcome, TableMetricsSnapshot};
