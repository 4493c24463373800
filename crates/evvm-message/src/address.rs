use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::error::MessageError;

/// Parses a 0x-prefixed hex address string.
///
/// An empty string is reported as a missing argument rather than a malformed
/// address, so callers can tell "not provided" apart from "provided but wrong".
pub fn parse_address(address: &str) -> Result<Address, MessageError> {
    if address.trim().is_empty() {
        return Err(MessageError::InvalidArgument("address is required".into()));
    }

    let hex_str = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(|| MessageError::InvalidAddress("address must start with 0x".into()))?;

    if hex_str.len() != 40 {
        return Err(MessageError::InvalidAddress(format!(
            "expected 40 hex characters, got {}",
            hex_str.len()
        )));
    }

    let bytes = hex::decode(hex_str)
        .map_err(|e| MessageError::InvalidAddress(format!("invalid hex: {e}")))?;

    Ok(Address::from_slice(&bytes))
}

/// Renders an address the way the contracts do: `0x` + 40 lowercase hex digits.
pub fn format_address(address: &Address) -> String {
    format!("0x{}", hex::encode(address.as_slice()))
}

/// Destination of an EVVM payment.
///
/// The EVVM core accepts either a raw address or a NameService identity; when
/// an identity is given it takes precedence and is what ends up in the signed
/// message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recipient {
    Address(Address),
    Identity(String),
}

impl Recipient {
    /// Interprets an untyped recipient string.
    ///
    /// `0x`-prefixed input must be a well-formed address; anything else is
    /// taken as a username.
    pub fn parse(recipient: &str) -> Result<Self, MessageError> {
        if recipient.trim().is_empty() {
            return Err(MessageError::InvalidArgument(
                "recipient is required".into(),
            ));
        }

        if recipient.starts_with("0x") || recipient.starts_with("0X") {
            return parse_address(recipient).map(Recipient::Address);
        }

        Ok(Recipient::Identity(recipient.to_string()))
    }

    /// Field value used in the canonical message.
    pub fn render(&self) -> Result<String, MessageError> {
        match self {
            Recipient::Address(address) => Ok(format_address(address)),
            Recipient::Identity(identity) if identity.is_empty() => Err(
                MessageError::InvalidArgument("recipient identity is empty".into()),
            ),
            Recipient::Identity(identity) => Ok(identity.clone()),
        }
    }

    /// The `(to_address, to_identity)` pair taken by the contract functions.
    pub fn to_parts(&self) -> (Address, String) {
        match self {
            Recipient::Address(address) => (*address, String::new()),
            Recipient::Identity(identity) => (Address::ZERO, identity.clone()),
        }
    }
}

impl From<Address> for Recipient {
    fn from(address: Address) -> Self {
        Recipient::Address(address)
    }
}
