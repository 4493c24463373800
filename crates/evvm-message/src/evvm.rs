use alloy_primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};

use crate::address::Recipient;
use crate::error::MessageError;
use crate::fields::MessageFields;
use crate::hash::{disperse_hash, DisperseRecipient};
use crate::tags;

/// Parameters of an EVVM `pay` authorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayMessage {
    pub to: Recipient,
    pub token: Address,
    pub amount: U256,
    pub priority_fee: U256,
    pub nonce: U256,
    /// `true` selects the asynchronous (caller-chosen) nonce space.
    pub priority_flag: bool,
    /// Only this address may submit the payment; zero means anyone.
    pub executor: Address,
}

impl PayMessage {
    /// `ef83c1d6,<evvmId>,<to>,<token>,<amount>,<priorityFee>,<nonce>,<priorityFlag>,<executor>`
    pub fn message(&self, evvm_id: U256) -> Result<String, MessageError> {
        let to = self.to.render()?;
        Ok(MessageFields::new(tags::PAY, evvm_id)
            .text(&to)
            .address(&self.token)
            .uint(self.amount)
            .uint(self.priority_fee)
            .uint(self.nonce)
            .boolean(self.priority_flag)
            .address(&self.executor)
            .finish())
    }
}

/// Parameters of an EVVM `dispersePay` authorization.
///
/// `amount` must equal the sum of the recipient amounts; the contract
/// enforces it, this crate does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispersePayMessage {
    pub recipients: Vec<DisperseRecipient>,
    pub token: Address,
    pub amount: U256,
    pub priority_fee: U256,
    pub nonce: U256,
    pub priority_flag: bool,
    pub executor: Address,
}

impl DispersePayMessage {
    /// Sum of the recipient amounts, saturating at `U256::MAX`.
    pub fn recipients_total(&self) -> U256 {
        self.recipients
            .iter()
            .fold(U256::ZERO, |acc, r| acc.saturating_add(r.amount))
    }

    pub fn hash_list(&self) -> Result<B256, MessageError> {
        disperse_hash(&self.recipients)
    }

    /// `73a7dd87,<evvmId>,<hashList>,<token>,<amount>,<priorityFee>,<nonce>,<priorityFlag>,<executor>`
    pub fn message(&self, evvm_id: U256) -> Result<String, MessageError> {
        let hash_list = self.hash_list()?;
        Ok(MessageFields::new(tags::DISPERSE_PAY, evvm_id)
            .digest(&hash_list)
            .address(&self.token)
            .uint(self.amount)
            .uint(self.priority_fee)
            .uint(self.nonce)
            .boolean(self.priority_flag)
            .address(&self.executor)
            .finish())
    }
}
