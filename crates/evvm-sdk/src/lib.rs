//! Client SDK for EVVM deployments.
//!
//! Wires a [`Deployment`], a wallet ([`MessageSigner`]) and a transaction
//! sender ([`ContractWriter`]) into the signature builders and executors of
//! the lower crates:
//!
//! ```text
//! parameters -> evvm-message -> evvm-signature -> calls -> evvm-executor
//! ```

pub mod calls;
pub mod config;
pub mod error;

pub use config::Deployment;
pub use error::{ConfigError, SdkError};

pub use evvm_executor::{
    abi, ContractCall, ContractWriter, EvvmExecutor, ExecutorError, NameServiceExecutor,
    P2pSwapExecutor, StakingExecutor, TxHash, WriterError,
};
pub use evvm_message::{self as message, MessageError, Recipient};
pub use evvm_signature::{
    DualSignature, EvvmSignatureBuilder, GenericSignatureBuilder, LocalSigner, MessageSigner,
    NameServiceSignatureBuilder, P2pSwapSignatureBuilder, PaymentTerms, Signature,
    SignatureError, SignerError, StakingSignatureBuilder, PRINCIPAL_TOKEN,
};

use evvm_executor::evvm::{disperse_pay_input, pay_input};
use evvm_message::evvm::{DispersePayMessage, PayMessage};
use tracing::info;

/// One account acting on one deployment.
#[derive(Debug, Clone)]
pub struct EvvmClient<S, W> {
    deployment: Deployment,
    signer: S,
    writer: W,
}

impl<S: MessageSigner, W: ContractWriter> EvvmClient<S, W> {
    pub fn new(deployment: Deployment, signer: S, writer: W) -> Self {
        Self {
            deployment,
            signer,
            writer,
        }
    }

    pub fn deployment(&self) -> &Deployment {
        &self.deployment
    }

    pub fn signer(&self) -> &S {
        &self.signer
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    // ─── Signature builders ────────────────────────────────────────

    pub fn evvm_signatures(&self) -> EvvmSignatureBuilder<&S> {
        EvvmSignatureBuilder::new(&self.signer, self.deployment.evvm_id)
    }

    pub fn staking_signatures(&self) -> StakingSignatureBuilder<&S> {
        StakingSignatureBuilder::with_token(
            &self.signer,
            self.deployment.evvm_id,
            self.deployment.staking,
            self.deployment.principal_token,
        )
    }

    pub fn name_service_signatures(&self) -> NameServiceSignatureBuilder<&S> {
        NameServiceSignatureBuilder::with_token(
            &self.signer,
            self.deployment.evvm_id,
            self.deployment.name_service,
            self.deployment.principal_token,
        )
    }

    pub fn p2p_swap_signatures(&self) -> P2pSwapSignatureBuilder<&S> {
        P2pSwapSignatureBuilder::new(&self.signer, self.deployment.evvm_id)
    }

    pub fn generic_signatures(&self) -> GenericSignatureBuilder<&S> {
        GenericSignatureBuilder::new(&self.signer, self.deployment.evvm_id)
    }

    // ─── Executors ─────────────────────────────────────────────────

    pub fn evvm_executor(&self) -> EvvmExecutor<&W> {
        EvvmExecutor::new(&self.writer, self.deployment.evvm)
    }

    pub fn staking_executor(&self) -> StakingExecutor<&W> {
        StakingExecutor::new(&self.writer, self.deployment.staking)
    }

    pub fn name_service_executor(&self) -> NameServiceExecutor<&W> {
        NameServiceExecutor::new(&self.writer, self.deployment.name_service)
    }

    /// Fails when the deployment has no P2P swap contract.
    pub fn p2p_swap_executor(&self) -> Result<P2pSwapExecutor<&W>, SdkError> {
        Ok(P2pSwapExecutor::new(&self.writer, self.deployment.p2p_swap()?))
    }

    // ─── End to end ────────────────────────────────────────────────

    /// Signs a payment from this account and submits it.
    pub async fn pay(&self, pay: &PayMessage) -> Result<TxHash, SdkError> {
        let signature = self.evvm_signatures().sign_pay(pay).await?;
        let from = self.signer.address();
        let tx_hash = self
            .evvm_executor()
            .pay(&pay_input(from, pay, signature))
            .await?;
        info!(%from, %tx_hash, "payment submitted");
        Ok(tx_hash)
    }

    pub async fn disperse_pay(&self, disperse: &DispersePayMessage) -> Result<TxHash, SdkError> {
        let signature = self.evvm_signatures().sign_disperse_pay(disperse).await?;
        let from = self.signer.address();
        let tx_hash = self
            .evvm_executor()
            .disperse_pay(&disperse_pay_input(from, disperse, signature))
            .await?;
        info!(%from, %tx_hash, recipients = disperse.recipients.len(), "dispersal submitted");
        Ok(tx_hash)
    }
}
