use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Invalid bucket count {0}: a table needs at least one bucket")]
    InvalidBucketCount(usize),
    #[error("Unknown hash strategy '{0}' (expected additive, polynomial or xxh3)")]
    UnknownHashStrategy(String),
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
