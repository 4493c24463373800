use alloy_primitives::U256;
use evvm_message::evvm::{DispersePayMessage, PayMessage};
use tracing::{debug, warn};

use crate::error::SignatureError;
use crate::signature::Signature;
use crate::signer::MessageSigner;

/// Signs payments against the EVVM core.
#[derive(Debug, Clone)]
pub struct EvvmSignatureBuilder<S> {
    signer: S,
    evvm_id: U256,
}

impl<S: MessageSigner> EvvmSignatureBuilder<S> {
    pub fn new(signer: S, evvm_id: U256) -> Self {
        Self { signer, evvm_id }
    }

    pub fn signer(&self) -> &S {
        &self.signer
    }

    pub fn evvm_id(&self) -> U256 {
        self.evvm_id
    }

    /// Signs an arbitrary, already canonical message.
    pub async fn sign_message(&self, message: &str) -> Result<Signature, SignatureError> {
        Ok(self.signer.sign_message(message).await?)
    }

    pub async fn sign_pay(&self, pay: &PayMessage) -> Result<Signature, SignatureError> {
        let message = pay.message(self.evvm_id).inspect_err(|e| {
            warn!(error = %e, "rejected pay parameters");
        })?;
        debug!(operation = "pay", "requesting signature");
        self.sign_message(&message).await
    }

    pub async fn sign_disperse_pay(
        &self,
        disperse: &DispersePayMessage,
    ) -> Result<Signature, SignatureError> {
        let message = disperse.message(self.evvm_id).inspect_err(|e| {
            warn!(error = %e, "rejected dispersePay parameters");
        })?;
        debug!(
            operation = "dispersePay",
            recipients = disperse.recipients.len(),
            "requesting signature"
        );
        self.sign_message(&message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SignerError;
    use crate::signer::recover_signer;
    use crate::testing::RecordingSigner;
    use alloy_primitives::{address, Address};
    use evvm_message::hash::DisperseRecipient;
    use evvm_message::{MessageError, Recipient};

    fn pay() -> PayMessage {
        let to = address!("742d35Cc6634C0532925a3b8D138068fD4C1b7a1");
        PayMessage {
            to: Recipient::Address(to),
            token: Address::ZERO,
            amount: U256::from(1_000_000_000_000_000_000u128),
            priority_fee: U256::from(50_000_000_000_000_000u128),
            nonce: U256::from(1),
            priority_flag: true,
            executor: to,
        }
    }

    #[tokio::test]
    async fn sign_pay_signs_canonical_message() {
        let builder = EvvmSignatureBuilder::new(RecordingSigner::new(), U256::from(1));
        let sig = builder.sign_pay(&pay()).await.unwrap();

        let requests = builder.signer().requests();
        assert_eq!(requests, vec![pay().message(U256::from(1)).unwrap()]);
        assert_eq!(
            recover_signer(&requests[0], &sig).unwrap(),
            builder.signer().address()
        );
    }

    #[tokio::test]
    async fn missing_recipient_never_reaches_signer() {
        let builder = EvvmSignatureBuilder::new(RecordingSigner::new(), U256::from(1));
        let mut params = pay();
        params.to = Recipient::Identity(String::new());

        let err = builder.sign_pay(&params).await.unwrap_err();
        assert!(matches!(
            err,
            SignatureError::Message(MessageError::InvalidArgument(_))
        ));
        assert!(builder.signer().requests().is_empty());
    }

    #[tokio::test]
    async fn no_caching_between_calls() {
        let builder = EvvmSignatureBuilder::new(RecordingSigner::new(), U256::from(1));
        builder.sign_pay(&pay()).await.unwrap();
        builder.sign_pay(&pay()).await.unwrap();
        assert_eq!(builder.signer().requests().len(), 2);
    }

    #[tokio::test]
    async fn signer_rejection_propagates() {
        let builder = EvvmSignatureBuilder::new(RecordingSigner::rejecting(0), U256::from(1));
        let err = builder.sign_pay(&pay()).await.unwrap_err();
        assert_eq!(
            err,
            SignatureError::Signer(SignerError::Rejected("user declined".into()))
        );
    }

    #[tokio::test]
    async fn sign_disperse_pay() {
        let builder = EvvmSignatureBuilder::new(RecordingSigner::new(), U256::from(1));
        let disperse = DispersePayMessage {
            recipients: vec![
                DisperseRecipient::new(U256::from(10), Recipient::Identity("alice".into())),
                DisperseRecipient::new(U256::from(20), Address::ZERO),
            ],
            token: Address::ZERO,
            amount: U256::from(30),
            priority_fee: U256::ZERO,
            nonce: U256::from(4),
            priority_flag: false,
            executor: Address::ZERO,
        };
        builder.sign_disperse_pay(&disperse).await.unwrap();
        assert!(builder.signer().requests()[0].starts_with("73a7dd87,1,0x"));
    }

    #[tokio::test]
    async fn empty_disperse_list_is_rejected() {
        let builder = EvvmSignatureBuilder::new(RecordingSigner::new(), U256::from(1));
        let disperse = DispersePayMessage {
            recipients: Vec::new(),
            token: Address::ZERO,
            amount: U256::ZERO,
            priority_fee: U256::ZERO,
            nonce: U256::ZERO,
            priority_flag: false,
            executor: Address::ZERO,
        };
        assert!(builder.sign_disperse_pay(&disperse).await.is_err());
        assert!(builder.signer().requests().is_empty());
    }
}
