use alloy_primitives::{Address, U256};
use evvm_message::staking::{
    PresaleStakingMessage, PublicServiceStakingMessage, PublicStakingMessage,
};
use tracing::debug;

use crate::error::SignatureError;
use crate::payment::{PaymentTerms, ServicePayment, PRINCIPAL_TOKEN};
use crate::signature::{DualSignature, Signature};
use crate::signer::MessageSigner;

/// Principal tokens charged per staking unit: 5083 * 10^18.
pub fn price_of_staking() -> U256 {
    U256::from(5083u64) * U256::from(10u64).pow(U256::from(18u64))
}

/// Principal tokens to pay when staking `units`; unstaking costs nothing.
pub fn staking_cost(is_staking: bool, units: U256) -> U256 {
    if is_staking {
        units.saturating_mul(price_of_staking())
    } else {
        U256::ZERO
    }
}

/// Signs operations against the staking contract.
#[derive(Debug, Clone)]
pub struct StakingSignatureBuilder<S> {
    signer: S,
    payment: ServicePayment,
}

impl<S: MessageSigner> StakingSignatureBuilder<S> {
    pub fn new(signer: S, evvm_id: U256, staking: Address) -> Self {
        Self::with_token(signer, evvm_id, staking, PRINCIPAL_TOKEN)
    }

    pub fn with_token(signer: S, evvm_id: U256, staking: Address, token: Address) -> Self {
        Self {
            signer,
            payment: ServicePayment {
                evvm_id,
                service: staking,
                token,
            },
        }
    }

    pub fn signer(&self) -> &S {
        &self.signer
    }

    pub fn staking_address(&self) -> Address {
        self.payment.service
    }

    /// Golden staking is authorized by the payment alone: a pay of
    /// `total_price` to the staking contract with no priority fee.
    pub async fn sign_golden_staking(
        &self,
        total_price: U256,
        nonce_evvm: U256,
        priority_flag: bool,
    ) -> Result<Signature, SignatureError> {
        let terms = PaymentTerms {
            amount: total_price,
            priority_fee: U256::ZERO,
            nonce: nonce_evvm,
            priority_flag,
        };
        let message = terms
            .pay_message(self.payment.service, self.payment.token)
            .message(self.payment.evvm_id)?;
        debug!(operation = "goldenStaking", "requesting signature");
        Ok(self.signer.sign_message(&message).await?)
    }

    pub async fn sign_presale_staking(
        &self,
        staking: &PresaleStakingMessage,
        payment: &PaymentTerms,
    ) -> Result<DualSignature, SignatureError> {
        let message = staking.message(self.payment.evvm_id);
        self.payment
            .sign(&self.signer, "presaleStaking", &message, payment)
            .await
    }

    pub async fn sign_public_staking(
        &self,
        staking: &PublicStakingMessage,
        payment: &PaymentTerms,
    ) -> Result<DualSignature, SignatureError> {
        let message = staking.message(self.payment.evvm_id);
        self.payment
            .sign(&self.signer, "publicStaking", &message, payment)
            .await
    }

    pub async fn sign_public_service_staking(
        &self,
        staking: &PublicServiceStakingMessage,
        payment: &PaymentTerms,
    ) -> Result<DualSignature, SignatureError> {
        let message = staking.message(self.payment.evvm_id);
        self.payment
            .sign(&self.signer, "publicServiceStaking", &message, payment)
            .await
    }
}
