//! Submission of signed EVVM operations.
//!
//! Executors take a fully assembled call record (the `sol!` call struct of
//! the target function), ABI-encode it and hand it to an injected
//! [`ContractWriter`]. Positional argument order therefore always matches the
//! declarations in [`abi`].
//!
//! Executors never sign and never retry; writer errors reach the caller as is.

pub mod abi;
pub mod error;
pub mod evvm;
pub mod name_service;
pub mod p2p_swap;
pub mod staking;
pub mod writer;

pub use error::{ExecutorError, WriterError};
pub use evvm::EvvmExecutor;
pub use name_service::NameServiceExecutor;
pub use p2p_swap::P2pSwapExecutor;
pub use staking::StakingExecutor;
pub use writer::{ContractCall, ContractWriter, TxHash};

#[cfg(test)]
pub(crate) mod testing;
