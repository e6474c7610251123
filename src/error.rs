use thiserror::Error;

#[derive(Error, Debug)]
pub enum HashKeysError {
    /// Invalid search parameters.
    #[error("config error: {0}")]
    Config(String),

    /// Empty or malformed seed input.
    #[error("seed error: {0}")]
    Seed(String),

    /// Checkpoint could not be encoded, decoded or does not match the search.
    #[error("checkpoint error: {0}")]
    Checkpoint(String),

    /// Failure while writing the key report.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
