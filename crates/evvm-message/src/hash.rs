use alloy_primitives::{B256, U256};
use alloy_sol_types::{sol, SolValue};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use sha3::Keccak256;

use crate::address::Recipient;
use crate::error::MessageError;

sol! {
    /// One leg of a disperse payment, in the layout the EVVM core hashes.
    struct DispersePayMetadata {
        uint256 amount;
        address to_address;
        string to_identity;
    }
}

/// A single recipient of a disperse payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisperseRecipient {
    pub amount: U256,
    pub to: Recipient,
}

impl DisperseRecipient {
    pub fn new(amount: U256, to: impl Into<Recipient>) -> Self {
        Self {
            amount,
            to: to.into(),
        }
    }

    fn metadata(&self) -> Result<DispersePayMetadata, MessageError> {
        // Rejects empty identities before they are hashed.
        self.to.render()?;
        let (to_address, to_identity) = self.to.to_parts();
        Ok(DispersePayMetadata {
            amount: self.amount,
            to_address,
            to_identity,
        })
    }
}

/// `sha256(abi.encode(DispersePayMetadata[]))` over the recipient list.
pub fn disperse_hash(recipients: &[DisperseRecipient]) -> Result<B256, MessageError> {
    if recipients.is_empty() {
        return Err(MessageError::InvalidArgument(
            "disperse recipient list is empty".into(),
        ));
    }

    let legs = recipients
        .iter()
        .map(DisperseRecipient::metadata)
        .collect::<Result<Vec<_>, _>>()?;

    let encoded = legs.abi_encode();
    Ok(B256::from_slice(&Sha256::digest(&encoded)))
}

/// `keccak256(abi.encodePacked(username, clowNumber))`, the commitment
/// published by a username pre-registration.
pub fn username_hash(username: &str, clown_number: U256) -> B256 {
    let mut hasher = Keccak256::new();
    hasher.update(username.as_bytes());
    hasher.update(clown_number.to_be_bytes::<32>());
    B256::from_slice(&hasher.finalize())
}
