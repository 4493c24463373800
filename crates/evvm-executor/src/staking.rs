use alloy_primitives::Address;

use crate::abi::IStaking;
use crate::error::ExecutorError;
use crate::writer::{submit, ContractWriter, TxHash};

/// Submits staking operations to the staking contract.
#[derive(Debug, Clone)]
pub struct StakingExecutor<W> {
    writer: W,
    address: Address,
}

impl<W: ContractWriter> StakingExecutor<W> {
    pub fn new(writer: W, address: Address) -> Self {
        Self { writer, address }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Golden staking is only accepted from the golden fisher account, which
    /// is also the transaction sender; the call therefore has no `user`.
    pub async fn golden_staking(
        &self,
        input: &IStaking::goldenStakingCall,
    ) -> Result<TxHash, ExecutorError> {
        submit(&self.writer, self.address, input).await
    }

    pub async fn presale_staking(
        &self,
        input: &IStaking::presaleStakingCall,
    ) -> Result<TxHash, ExecutorError> {
        submit(&self.writer, self.address, input).await
    }

    pub async fn public_staking(
        &self,
        input: &IStaking::publicStakingCall,
    ) -> Result<TxHash, ExecutorError> {
        submit(&self.writer, self.address, input).await
    }

    pub async fn public_service_staking(
        &self,
        input: &IStaking::publicServiceStakingCall,
    ) -> Result<TxHash, ExecutorError> {
        submit(&self.writer, self.address, input).await
    }
}
