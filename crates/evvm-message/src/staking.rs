use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::fields::MessageFields;
use crate::tags;

/// Presale stakers move exactly one staking unit per call.
pub const PRESALE_STAKING_UNITS: u64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresaleStakingMessage {
    pub is_staking: bool,
    pub nonce: U256,
}

impl PresaleStakingMessage {
    /// `44068aee,<evvmId>,<isStaking>,1,<nonce>`
    pub fn message(&self, evvm_id: U256) -> String {
        MessageFields::new(tags::PRESALE_STAKING, evvm_id)
            .boolean(self.is_staking)
            .uint(U256::from(PRESALE_STAKING_UNITS))
            .uint(self.nonce)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicStakingMessage {
    pub is_staking: bool,
    pub amount_of_staking: U256,
    pub nonce: U256,
}

impl PublicStakingMessage {
    /// `e91b3f94,<evvmId>,<isStaking>,<amountOfStaking>,<nonce>`
    pub fn message(&self, evvm_id: U256) -> String {
        MessageFields::new(tags::PUBLIC_STAKING, evvm_id)
            .boolean(self.is_staking)
            .uint(self.amount_of_staking)
            .uint(self.nonce)
            .finish()
    }
}

/// Staking on behalf of a service contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicServiceStakingMessage {
    pub service: Address,
    pub is_staking: bool,
    pub amount_of_staking: U256,
    pub nonce: U256,
}

impl PublicServiceStakingMessage {
    /// `31ea0da5,<evvmId>,<service>,<isStaking>,<amountOfStaking>,<nonce>`
    pub fn message(&self, evvm_id: U256) -> String {
        MessageFields::new(tags::PUBLIC_SERVICE_STAKING, evvm_id)
            .address(&self.service)
            .boolean(self.is_staking)
            .uint(self.amount_of_staking)
            .uint(self.nonce)
            .finish()
    }
}
