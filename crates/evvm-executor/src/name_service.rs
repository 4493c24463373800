use alloy_primitives::Address;

use crate::abi::INameService;
use crate::error::ExecutorError;
use crate::writer::{submit, ContractWriter, TxHash};

/// Submits username registry operations.
#[derive(Debug, Clone)]
pub struct NameServiceExecutor<W> {
    writer: W,
    address: Address,
}

impl<W: ContractWriter> NameServiceExecutor<W> {
    pub fn new(writer: W, address: Address) -> Self {
        Self { writer, address }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub async fn pre_registration_username(
        &self,
        input: &INameService::preRegistrationUsernameCall,
    ) -> Result<TxHash, ExecutorError> {
        submit(&self.writer, self.address, input).await
    }

    pub async fn registration_username(
        &self,
        input: &INameService::registrationUsernameCall,
    ) -> Result<TxHash, ExecutorError> {
        submit(&self.writer, self.address, input).await
    }

    pub async fn make_offer(
        &self,
        input: &INameService::makeOfferCall,
    ) -> Result<TxHash, ExecutorError> {
        submit(&self.writer, self.address, input).await
    }

    pub async fn withdraw_offer(
        &self,
        input: &INameService::withdrawOfferCall,
    ) -> Result<TxHash, ExecutorError> {
        submit(&self.writer, self.address, input).await
    }

    pub async fn accept_offer(
        &self,
        input: &INameService::acceptOfferCall,
    ) -> Result<TxHash, ExecutorError> {
        submit(&self.writer, self.address, input).await
    }

    pub async fn renew_username(
        &self,
        input: &INameService::renewUsernameCall,
    ) -> Result<TxHash, ExecutorError> {
        submit(&self.writer, self.address, input).await
    }

    pub async fn add_custom_metadata(
        &self,
        input: &INameService::addCustomMetadataCall,
    ) -> Result<TxHash, ExecutorError> {
        submit(&self.writer, self.address, input).await
    }

    pub async fn remove_custom_metadata(
        &self,
        input: &INameService::removeCustomMetadataCall,
    ) -> Result<TxHash, ExecutorError> {
        submit(&self.writer, self.address, input).await
    }

    pub async fn flush_custom_metadata(
        &self,
        input: &INameService::flushCustomMetadataCall,
    ) -> Result<TxHash, ExecutorError> {
        submit(&self.writer, self.address, input).await
    }

    pub async fn flush_username(
        &self,
        input: &INameService::flushUsernameCall,
    ) -> Result<TxHash, ExecutorError> {
        submit(&self.writer, self.address, input).await
    }
}
