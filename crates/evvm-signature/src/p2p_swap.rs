use alloy_primitives::U256;
use evvm_message::p2p_swap::{CancelOrderMessage, DispatchOrderMessage, MakeOrderMessage};
use tracing::debug;

use crate::error::SignatureError;
use crate::signature::Signature;
use crate::signer::MessageSigner;

/// Signs order-book operations against the P2PSwap service.
///
/// Only the order message is signed here. Orders that move funds also need a
/// pay authorization from [`crate::EvvmSignatureBuilder::sign_pay`].
#[derive(Debug, Clone)]
pub struct P2pSwapSignatureBuilder<S> {
    signer: S,
    evvm_id: U256,
}

impl<S: MessageSigner> P2pSwapSignatureBuilder<S> {
    pub fn new(signer: S, evvm_id: U256) -> Self {
        Self { signer, evvm_id }
    }

    pub fn signer(&self) -> &S {
        &self.signer
    }

    async fn sign(&self, operation: &'static str, message: &str) -> Result<Signature, SignatureError> {
        debug!(operation, "requesting signature");
        Ok(self.signer.sign_message(message).await?)
    }

    pub async fn sign_make_order(&self, order: &MakeOrderMessage) -> Result<Signature, SignatureError> {
        self.sign("makeOrder", &order.message(self.evvm_id)).await
    }

    pub async fn sign_cancel_order(
        &self,
        order: &CancelOrderMessage,
    ) -> Result<Signature, SignatureError> {
        self.sign("cancelOrder", &order.message(self.evvm_id)).await
    }

    pub async fn sign_dispatch_order(
        &self,
        order: &DispatchOrderMessage,
    ) -> Result<Signature, SignatureError> {
        self.sign("dispatchOrder", &order.message(self.evvm_id)).await
    }
}
