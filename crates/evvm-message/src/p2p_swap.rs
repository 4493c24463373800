use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::fields::MessageFields;
use crate::tags;

/// Offer `amount_a` of `token_a` for `amount_b` of `token_b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeOrderMessage {
    pub nonce: U256,
    pub token_a: Address,
    pub token_b: Address,
    pub amount_a: U256,
    pub amount_b: U256,
}

impl MakeOrderMessage {
    /// `0b2b535c,<evvmId>,<nonce>,<tokenA>,<tokenB>,<amountA>,<amountB>`
    pub fn message(&self, evvm_id: U256) -> String {
        MessageFields::new(tags::MAKE_ORDER, evvm_id)
            .uint(self.nonce)
            .address(&self.token_a)
            .address(&self.token_b)
            .uint(self.amount_a)
            .uint(self.amount_b)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelOrderMessage {
    pub nonce: U256,
    pub token_a: Address,
    pub token_b: Address,
    pub order_id: U256,
}

impl CancelOrderMessage {
    /// `24b7694a,<evvmId>,<nonce>,<tokenA>,<tokenB>,<orderId>`
    pub fn message(&self, evvm_id: U256) -> String {
        MessageFields::new(tags::CANCEL_ORDER, evvm_id)
            .uint(self.nonce)
            .address(&self.token_a)
            .address(&self.token_b)
            .uint(self.order_id)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchOrderMessage {
    pub nonce: U256,
    pub token_a: Address,
    pub token_b: Address,
    pub order_id: U256,
}

impl DispatchOrderMessage {
    /// `31cbd6fa,<evvmId>,<nonce>,<tokenA>,<tokenB>,<orderId>`
    pub fn message(&self, evvm_id: U256) -> String {
        MessageFields::new(tags::DISPATCH_ORDER, evvm_id)
            .uint(self.nonce)
            .address(&self.token_a)
            .address(&self.token_b)
            .uint(self.order_id)
            .finish()
    }
}
