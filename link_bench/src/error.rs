use thiserror::Error;

/// Failure reported by a backend while executing a timed operation.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum OperationError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("could not allocate a {bytes} byte transfer buffer")]
    Allocation { bytes: u64 },

    #[error("operation not supported by this backend: {0}")]
    Unsupported(String),
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LinkBenchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Operation failed: {0}")]
    Operation(#[from] OperationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl LinkBenchError {
    pub fn invalid_input<T: ToString>(value: T) -> LinkBenchError {
        LinkBenchError::InvalidInput(value.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinkBenchError>;
