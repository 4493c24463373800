use evvm_message::MessageError;
use thiserror::Error;

/// Failures reported by a wallet-signing capability.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignerError {
    #[error("signature request rejected: {0}")]
    Rejected(String),

    #[error("signer unavailable: {0}")]
    Unavailable(String),

    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    #[error("signing error: {0}")]
    SigningError(String),
}

/// Errors returned by the signature builders.
///
/// Both variants are transparent: validation and signer errors reach the
/// caller with their original message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error(transparent)]
    Message(#[from] MessageError),

    #[error(transparent)]
    Signer(#[from] SignerError),
}
