//! NameService (username registry) messages.
//!
//! Usernames, identities and metadata values are written raw. A comma in any
//! of them changes the field count the contract sees.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::fields::MessageFields;
use crate::hash::username_hash;
use crate::tags;

/// Commit phase of a username registration.
///
/// Only the hash of `(username, clown_number)` is signed, so the name stays
/// private until [`RegistrationUsernameMessage`] reveals it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreRegistrationUsernameMessage {
    pub username: String,
    pub clown_number: U256,
    pub nonce: U256,
}

impl PreRegistrationUsernameMessage {
    /// `72b33c2f,<evvmId>,<keccak256(username ++ clownNumber)>,<nonce>`
    pub fn message(&self, evvm_id: U256) -> String {
        let hash = username_hash(&self.username, self.clown_number);
        MessageFields::new(tags::PRE_REGISTRATION_USERNAME, evvm_id)
            .digest(&hash)
            .uint(self.nonce)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationUsernameMessage {
    pub username: String,
    pub clown_number: U256,
    pub nonce: U256,
}

impl RegistrationUsernameMessage {
    /// `e91b3f94,<evvmId>,<username>,<clownNumber>,<nonce>`
    pub fn message(&self, evvm_id: U256) -> String {
        MessageFields::new(tags::REGISTRATION_USERNAME, evvm_id)
            .text(&self.username)
            .uint(self.clown_number)
            .uint(self.nonce)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeOfferMessage {
    pub username: String,
    pub expire_date: U256,
    pub amount: U256,
    pub nonce: U256,
}

impl MakeOfferMessage {
    /// `3a962d3d,<evvmId>,<username>,<expireDate>,<amount>,<nonce>`
    pub fn message(&self, evvm_id: U256) -> String {
        MessageFields::new(tags::MAKE_OFFER, evvm_id)
            .text(&self.username)
            .uint(self.expire_date)
            .uint(self.amount)
            .uint(self.nonce)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawOfferMessage {
    pub username: String,
    pub offer_id: U256,
    pub nonce: U256,
}

impl WithdrawOfferMessage {
    /// `4f1ce4ec,<evvmId>,<username>,<offerId>,<nonce>`
    pub fn message(&self, evvm_id: U256) -> String {
        MessageFields::new(tags::WITHDRAW_OFFER, evvm_id)
            .text(&self.username)
            .uint(self.offer_id)
            .uint(self.nonce)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptOfferMessage {
    pub username: String,
    pub offer_id: U256,
    pub nonce: U256,
}

impl AcceptOfferMessage {
    /// `c01ea54a,<evvmId>,<username>,<offerId>,<nonce>`
    pub fn message(&self, evvm_id: U256) -> String {
        MessageFields::new(tags::ACCEPT_OFFER, evvm_id)
            .text(&self.username)
            .uint(self.offer_id)
            .uint(self.nonce)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenewUsernameMessage {
    pub username: String,
    pub nonce: U256,
}

impl RenewUsernameMessage {
    /// `6169d35b,<evvmId>,<username>,<nonce>`
    pub fn message(&self, evvm_id: U256) -> String {
        MessageFields::new(tags::RENEW_USERNAME, evvm_id)
            .text(&self.username)
            .uint(self.nonce)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddCustomMetadataMessage {
    pub identity: String,
    pub value: String,
    pub nonce: U256,
}

impl AddCustomMetadataMessage {
    /// `dd1b18e8,<evvmId>,<identity>,<value>,<nonce>`
    pub fn message(&self, evvm_id: U256) -> String {
        MessageFields::new(tags::ADD_CUSTOM_METADATA, evvm_id)
            .text(&self.identity)
            .text(&self.value)
            .uint(self.nonce)
            .finish()
    }
}

/// Removes the metadata entry at index `key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveCustomMetadataMessage {
    pub identity: String,
    pub key: U256,
    pub nonce: U256,
}

impl RemoveCustomMetadataMessage {
    /// `c448d38d,<evvmId>,<identity>,<key>,<nonce>`
    pub fn message(&self, evvm_id: U256) -> String {
        MessageFields::new(tags::REMOVE_CUSTOM_METADATA, evvm_id)
            .text(&self.identity)
            .uint(self.key)
            .uint(self.nonce)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlushCustomMetadataMessage {
    pub identity: String,
    pub nonce: U256,
}

impl FlushCustomMetadataMessage {
    /// `986f8525,<evvmId>,<identity>,<nonce>`
    pub fn message(&self, evvm_id: U256) -> String {
        MessageFields::new(tags::FLUSH_CUSTOM_METADATA, evvm_id)
            .text(&self.identity)
            .uint(self.nonce)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlushUsernameMessage {
    pub username: String,
    pub nonce: U256,
}

impl FlushUsernameMessage {
    /// `9c579b52,<evvmId>,<username>,<nonce>`
    pub fn message(&self, evvm_id: U256) -> String {
        MessageFields::new(tags::FLUSH_USERNAME, evvm_id)
            .text(&self.username)
            .uint(self.nonce)
            .finish()
    }
}
