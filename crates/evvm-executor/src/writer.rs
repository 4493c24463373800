use alloy_primitives::{Address, Bytes, B256};
use alloy_sol_types::SolCall;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::error::{ExecutorError, WriterError};

/// Hash of a submitted transaction.
pub type TxHash = B256;

/// A fully encoded contract invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCall {
    pub address: Address,
    pub function_name: &'static str,
    /// Canonical Solidity signature, e.g. `goldenStaking(bool,uint256,bytes)`.
    pub signature: &'static str,
    /// `selector || abi.encode(args)`.
    pub calldata: Bytes,
}

impl ContractCall {
    pub fn new<C: SolCall>(address: Address, call: &C) -> Self {
        let function_name = C::SIGNATURE
            .split_once('(')
            .map_or(C::SIGNATURE, |(name, _)| name);
        Self {
            address,
            function_name,
            signature: C::SIGNATURE,
            calldata: Bytes::from(call.abi_encode()),
        }
    }

    pub fn selector(&self) -> [u8; 4] {
        let mut selector = [0u8; 4];
        if let Some(head) = self.calldata.get(..4) {
            selector.copy_from_slice(head);
        }
        selector
    }

    /// Decode the calldata back into a typed call.
    pub fn decode<C: SolCall>(&self) -> Result<C, ExecutorError> {
        C::abi_decode(&self.calldata).map_err(|e| {
            ExecutorError::InvalidArgument(format!("calldata is not {}: {e}", C::SIGNATURE))
        })
    }
}

/// Capability that submits a contract call and reports its transaction hash.
///
/// Implementations own gas estimation, nonce management and broadcasting.
/// Errors are surfaced to the caller unchanged.
#[async_trait]
pub trait ContractWriter: Send + Sync {
    async fn write_contract(&self, call: ContractCall) -> Result<TxHash, WriterError>;
}

#[async_trait]
impl<T: ContractWriter + ?Sized> ContractWriter for Arc<T> {
    async fn write_contract(&self, call: ContractCall) -> Result<TxHash, WriterError> {
        (**self).write_contract(call).await
    }
}

#[async_trait]
impl<T: ContractWriter + ?Sized> ContractWriter for &T {
    async fn write_contract(&self, call: ContractCall) -> Result<TxHash, WriterError> {
        (**self).write_contract(call).await
    }
}

pub(crate) async fn submit<W, C>(
    writer: &W,
    address: Address,
    call: &C,
) -> Result<TxHash, ExecutorError>
where
    W: ContractWriter + ?Sized,
    C: SolCall,
{
    let call = ContractCall::new(address, call);
    let function = call.function_name;
    let tx_hash = writer.write_contract(call).await?;
    info!(
        contract = %address,
        function,
        tx_hash = %tx_hash,
        "submitted contract call"
    );
    Ok(tx_hash)
}
