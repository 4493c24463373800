use thiserror::Error;

/// Failures reported by a contract-invocation capability.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WriterError {
    #[error("execution reverted: {0}")]
    Reverted(String),

    #[error("transaction rejected: {0}")]
    Rejected(String),

    #[error("gas error: {0}")]
    Gas(String),

    #[error("rpc error: {0}")]
    Rpc(String),
}

/// Errors returned by the executors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutorError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Writer(#[from] WriterError),
}
