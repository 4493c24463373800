use evvm_executor::ExecutorError;
use evvm_message::MessageError;
use evvm_signature::{SignatureError, SignerError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid deployment: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("missing contract: {0}")]
    MissingContract(&'static str),
}

/// Any failure surfaced by the SDK.
#[derive(Debug, Error)]
pub enum SdkError {
    #[error(transparent)]
    Message(#[from] MessageError),

    #[error(transparent)]
    Signature(#[from] SignatureError),

    #[error(transparent)]
    Executor(#[from] ExecutorError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl From<SignerError> for SdkError {
    fn from(err: SignerError) -> Self {
        SdkError::Signature(SignatureError::Signer(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_missing_contract() {
        let err = SdkError::from(ConfigError::MissingContract("p2p_swap"));
        assert_eq!(err.to_string(), "config error: missing contract: p2p_swap");
    }

    #[test]
    fn signer_errors_pass_through() {
        let err = SdkError::from(SignerError::Rejected("user declined".into()));
        assert!(matches!(
            err,
            SdkError::Signature(SignatureError::Signer(SignerError::Rejected(_)))
        ));
        assert_eq!(
            err.to_string(),
            SignerError::Rejected("user declined".into()).to_string()
        );
    }

    #[test]
    fn message_errors_keep_their_text() {
        let err = SdkError::from(MessageError::InvalidArgument("recipient is required".into()));
        assert_eq!(err.to_string(), "invalid argument: recipient is required");
    }
}
