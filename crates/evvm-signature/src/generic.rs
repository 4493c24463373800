use alloy_primitives::U256;
use evvm_message::generic::generic_message;
use tracing::debug;

use crate::error::SignatureError;
use crate::signature::Signature;
use crate::signer::MessageSigner;

/// Fallback builder for services without a dedicated encoder.
#[derive(Debug, Clone)]
pub struct GenericSignatureBuilder<S> {
    signer: S,
    evvm_id: U256,
}

impl<S: MessageSigner> GenericSignatureBuilder<S> {
    pub fn new(signer: S, evvm_id: U256) -> Self {
        Self { signer, evvm_id }
    }

    pub fn signer(&self) -> &S {
        &self.signer
    }

    pub async fn sign_message(&self, message: &str) -> Result<Signature, SignatureError> {
        Ok(self.signer.sign_message(message).await?)
    }

    /// Signs `<tag>,<evvmId>,<inputs>`.
    pub async fn sign_generic(&self, tag: &str, inputs: &str) -> Result<Signature, SignatureError> {
        let message = generic_message(tag, self.evvm_id, inputs)?;
        debug!(tag, "requesting generic signature");
        self.sign_message(&message).await
    }
}
