use thiserror::Error;

/// Message canonicalization errors.
///
/// These are raised before any signing request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),
}
