use alloy_primitives::{Address, Bytes, U256};
use evvm_message::p2p_swap::{CancelOrderMessage, DispatchOrderMessage, MakeOrderMessage};

use crate::abi::IP2PSwap;
use crate::error::ExecutorError;
use crate::writer::{submit, ContractWriter, TxHash};

impl From<&MakeOrderMessage> for IP2PSwap::MetadataMakeOrder {
    fn from(message: &MakeOrderMessage) -> Self {
        Self {
            nonce: message.nonce,
            token_a: message.token_a,
            token_b: message.token_b,
            amount_a: message.amount_a,
            amount_b: message.amount_b,
        }
    }
}

impl IP2PSwap::MetadataCancelOrder {
    /// The cancel metadata embeds the user's swap signature.
    pub fn new(message: &CancelOrderMessage, signature: impl Into<Bytes>) -> Self {
        Self {
            nonce: message.nonce,
            token_a: message.token_a,
            token_b: message.token_b,
            order_id: message.order_id,
            signature: signature.into(),
        }
    }
}

impl IP2PSwap::MetadataDispatchOrder {
    pub fn new(
        message: &DispatchOrderMessage,
        amount_of_token_b_to_fill: U256,
        signature: impl Into<Bytes>,
    ) -> Self {
        Self {
            nonce: message.nonce,
            token_a: message.token_a,
            token_b: message.token_b,
            order_id: message.order_id,
            amount_of_token_b_to_fill,
            signature: signature.into(),
        }
    }
}

/// Submits order-book operations to the P2P swap contract.
#[derive(Debug, Clone)]
pub struct P2pSwapExecutor<W> {
    writer: W,
    address: Address,
}

impl<W: ContractWriter> P2pSwapExecutor<W> {
    pub fn new(writer: W, address: Address) -> Self {
        Self { writer, address }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub async fn make_order(
        &self,
        input: &IP2PSwap::makeOrderCall,
    ) -> Result<TxHash, ExecutorError> {
        submit(&self.writer, self.address, input).await
    }

    pub async fn cancel_order(
        &self,
        input: &IP2PSwap::cancelOrderCall,
    ) -> Result<TxHash, ExecutorError> {
        submit(&self.writer, self.address, input).await
    }

    /// Fills an order paying the fee as a proportion of the filled amount.
    pub async fn dispatch_order_fill_proportional_fee(
        &self,
        input: &IP2PSwap::dispatchOrder_fillPropotionalFeeCall,
    ) -> Result<TxHash, ExecutorError> {
        submit(&self.writer, self.address, input).await
    }

    /// Fills an order paying a fixed fee; `amount_out` is the expected output.
    pub async fn dispatch_order_fill_fixed_fee(
        &self,
        input: &IP2PSwap::dispatchOrder_fillFixedFeeCall,
    ) -> Result<TxHash, ExecutorError> {
        submit(&self.writer, self.address, input).await
    }
}
