use alloy_primitives::{Address, U256};
use evvm_message::name_service::{
    AcceptOfferMessage, AddCustomMetadataMessage, FlushCustomMetadataMessage,
    FlushUsernameMessage, MakeOfferMessage, PreRegistrationUsernameMessage,
    RegistrationUsernameMessage, RemoveCustomMetadataMessage, RenewUsernameMessage,
    WithdrawOfferMessage,
};

use crate::error::SignatureError;
use crate::payment::{PaymentTerms, ServicePayment, PRINCIPAL_TOKEN};
use crate::signature::DualSignature;
use crate::signer::MessageSigner;

/// Signs operations against the NameService contract.
///
/// Every method returns the action signature plus, when `payment` is
/// non-zero, a pay authorization to the NameService. Prices (registration,
/// renewal, metadata) are read from the contract by the caller and passed as
/// `payment.amount`.
#[derive(Debug, Clone)]
pub struct NameServiceSignatureBuilder<S> {
    signer: S,
    payment: ServicePayment,
}

impl<S: MessageSigner> NameServiceSignatureBuilder<S> {
    pub fn new(signer: S, evvm_id: U256, name_service: Address) -> Self {
        Self::with_token(signer, evvm_id, name_service, PRINCIPAL_TOKEN)
    }

    pub fn with_token(signer: S, evvm_id: U256, name_service: Address, token: Address) -> Self {
        Self {
            signer,
            payment: ServicePayment {
                evvm_id,
                service: name_service,
                token,
            },
        }
    }

    pub fn signer(&self) -> &S {
        &self.signer
    }

    pub fn name_service_address(&self) -> Address {
        self.payment.service
    }

    async fn sign(
        &self,
        operation: &'static str,
        message: String,
        payment: &PaymentTerms,
    ) -> Result<DualSignature, SignatureError> {
        self.payment
            .sign(&self.signer, operation, &message, payment)
            .await
    }

    pub async fn sign_pre_registration_username(
        &self,
        params: &PreRegistrationUsernameMessage,
        payment: &PaymentTerms,
    ) -> Result<DualSignature, SignatureError> {
        let message = params.message(self.payment.evvm_id);
        self.sign("preRegistrationUsername", message, payment).await
    }

    pub async fn sign_registration_username(
        &self,
        params: &RegistrationUsernameMessage,
        payment: &PaymentTerms,
    ) -> Result<DualSignature, SignatureError> {
        let message = params.message(self.payment.evvm_id);
        self.sign("registrationUsername", message, payment).await
    }

    pub async fn sign_make_offer(
        &self,
        params: &MakeOfferMessage,
        payment: &PaymentTerms,
    ) -> Result<DualSignature, SignatureError> {
        let message = params.message(self.payment.evvm_id);
        self.sign("makeOffer", message, payment).await
    }

    pub async fn sign_withdraw_offer(
        &self,
        params: &WithdrawOfferMessage,
        payment: &PaymentTerms,
    ) -> Result<DualSignature, SignatureError> {
        let message = params.message(self.payment.evvm_id);
        self.sign("withdrawOffer", message, payment).await
    }

    pub async fn sign_accept_offer(
        &self,
        params: &AcceptOfferMessage,
        payment: &PaymentTerms,
    ) -> Result<DualSignature, SignatureError> {
        let message = params.message(self.payment.evvm_id);
        self.sign("acceptOffer", message, payment).await
    }

    pub async fn sign_renew_username(
        &self,
        params: &RenewUsernameMessage,
        payment: &PaymentTerms,
    ) -> Result<DualSignature, SignatureError> {
        let message = params.message(self.payment.evvm_id);
        self.sign("renewUsername", message, payment).await
    }

    pub async fn sign_add_custom_metadata(
        &self,
        params: &AddCustomMetadataMessage,
        payment: &PaymentTerms,
    ) -> Result<DualSignature, SignatureError> {
        let message = params.message(self.payment.evvm_id);
        self.sign("addCustomMetadata", message, payment).await
    }

    pub async fn sign_remove_custom_metadata(
        &self,
        params: &RemoveCustomMetadataMessage,
        payment: &PaymentTerms,
    ) -> Result<DualSignature, SignatureError> {
        let message = params.message(self.payment.evvm_id);
        self.sign("removeCustomMetadata", message, payment).await
    }

    pub async fn sign_flush_custom_metadata(
        &self,
        params: &FlushCustomMetadataMessage,
        payment: &PaymentTerms,
    ) -> Result<DualSignature, SignatureError> {
        let message = params.message(self.payment.evvm_id);
        self.sign("flushCustomMetadata", message, payment).await
    }

    pub async fn sign_flush_username(
        &self,
        params: &FlushUsernameMessage,
        payment: &PaymentTerms,
    ) -> Result<DualSignature, SignatureError> {
        let message = params.message(self.payment.evvm_id);
        self.sign("flushUsername", message, payment).await
    }
}
