//! Canonical signed-message encoding for the EVVM contracts.
//!
//! Every EVVM entry point that accepts an off-chain signature rebuilds a
//! comma-separated message from its arguments and checks an EIP-191 signature
//! over it. This crate produces exactly that string on the client side:
//!
//! - [`evvm`]: `pay` and `dispersePay` messages
//! - [`staking`]: presale, public and service staking messages
//! - [`name_service`]: username registry messages
//! - [`p2p_swap`]: order book messages
//! - [`generic`]: free-form messages for contracts this crate does not know
//!
//! All encoders go through [`fields::MessageFields`], so the on-wire layout
//! lives in one place.

pub mod address;
pub mod error;
pub mod evvm;
pub mod fields;
pub mod generic;
pub mod hash;
pub mod name_service;
pub mod p2p_swap;
pub mod staking;
pub mod tags;

pub use address::Recipient;
pub use error::MessageError;
pub use fields::MessageFields;

pub use alloy_primitives::{Address, B256, U256};
