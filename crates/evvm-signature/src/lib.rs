//! Signature builders for the EVVM contracts.
//!
//! Each builder canonicalizes an operation with `evvm-message` and asks an
//! injected [`MessageSigner`] for an EIP-191 signature over it. Operations
//! that move principal tokens into a service contract also get a companion
//! `pay` signature; see [`payment::PaymentTerms`].
//!
//! Builders never cache: every call produces fresh signing requests.

pub mod error;
pub mod evvm;
pub mod generic;
pub mod name_service;
pub mod p2p_swap;
pub mod payment;
pub mod signature;
pub mod signer;
pub mod staking;

pub use error::{SignatureError, SignerError};
pub use evvm::EvvmSignatureBuilder;
pub use generic::GenericSignatureBuilder;
pub use name_service::NameServiceSignatureBuilder;
pub use p2p_swap::P2pSwapSignatureBuilder;
pub use payment::{PaymentTerms, PRINCIPAL_TOKEN};
pub use signature::{DualSignature, Signature};
pub use signer::{LocalSigner, MessageSigner};
pub use staking::StakingSignatureBuilder;

#[cfg(test)]
pub(crate) mod testing;
