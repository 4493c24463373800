use std::fmt;

use alloy_primitives::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::SignerError;

/// An opaque signature as returned by the signing capability.
///
/// The builders never decode it; it is forwarded on-chain as `bytes`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signature(Bytes);

impl Signature {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    /// Parses a `0x`-prefixed (or bare) hex signature.
    pub fn from_hex(signature: &str) -> Result<Self, SignerError> {
        let hex_str = signature
            .strip_prefix("0x")
            .or_else(|| signature.strip_prefix("0X"))
            .unwrap_or(signature);
        let bytes = hex::decode(hex_str)
            .map_err(|e| SignerError::InvalidSignature(format!("invalid hex: {e}")))?;
        Ok(Self(bytes.into()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Bytes {
        self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0))
    }
}

impl From<Signature> for Bytes {
    fn from(signature: Signature) -> Self {
        signature.0
    }
}

/// Result of an operation that may need a companion payment.
///
/// `ActionAndPay` is only produced when the payment moves a non-zero amount
/// or priority fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DualSignature {
    ActionOnly(Signature),
    ActionAndPay { action: Signature, pay: Signature },
}

impl DualSignature {
    pub fn action(&self) -> &Signature {
        match self {
            DualSignature::ActionOnly(action) => action,
            DualSignature::ActionAndPay { action, .. } => action,
        }
    }

    pub fn pay(&self) -> Option<&Signature> {
        match self {
            DualSignature::ActionOnly(_) => None,
            DualSignature::ActionAndPay { pay, .. } => Some(pay),
        }
    }

    pub fn into_parts(self) -> (Signature, Option<Signature>) {
        match self {
            DualSignature::ActionOnly(action) => (action, None),
            DualSignature::ActionAndPay { action, pay } => (action, Some(pay)),
        }
    }
}
