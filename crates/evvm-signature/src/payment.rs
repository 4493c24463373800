//! Companion `pay` authorizations for service operations.

use alloy_primitives::{address, Address, U256};
use evvm_message::evvm::PayMessage;
use evvm_message::Recipient;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SignatureError;
use crate::signature::DualSignature;
use crate::signer::MessageSigner;

/// The EVVM principal token, in which service fees are paid.
pub const PRINCIPAL_TOKEN: Address = address!("0000000000000000000000000000000000000001");

/// What the user pays the service contract alongside an action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTerms {
    /// Principal tokens moved to the service (price, offer amount, ...).
    pub amount: U256,
    pub priority_fee: U256,
    /// Nonce in the EVVM core, independent of the service's own nonce.
    pub nonce: U256,
    pub priority_flag: bool,
}

impl PaymentTerms {
    /// Terms that only carry a priority fee.
    pub fn fee_only(priority_fee: U256, nonce: U256, priority_flag: bool) -> Self {
        Self {
            amount: U256::ZERO,
            priority_fee,
            nonce,
            priority_flag,
        }
    }

    /// A companion signature is only requested when something is paid.
    pub fn requires_signature(&self) -> bool {
        !self.amount.is_zero() || !self.priority_fee.is_zero()
    }

    /// The pay authorization the service submits to the EVVM core on the
    /// user's behalf. The service is both recipient and executor.
    pub fn pay_message(&self, service: Address, token: Address) -> PayMessage {
        PayMessage {
            to: Recipient::Address(service),
            token,
            amount: self.amount,
            priority_fee: self.priority_fee,
            nonce: self.nonce,
            priority_flag: self.priority_flag,
            executor: service,
        }
    }
}

/// Signing context shared by builders whose operations pay a service.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ServicePayment {
    pub(crate) evvm_id: U256,
    pub(crate) service: Address,
    pub(crate) token: Address,
}

impl ServicePayment {
    /// Signs `action_message`, then the companion payment if one is due.
    ///
    /// Both messages are built before the first signing request, so invalid
    /// input never reaches the wallet. A failure of the second request drops
    /// the first signature.
    pub(crate) async fn sign<S: MessageSigner + ?Sized>(
        &self,
        signer: &S,
        operation: &'static str,
        action_message: &str,
        terms: &PaymentTerms,
    ) -> Result<DualSignature, SignatureError> {
        let pay_message = if terms.requires_signature() {
            Some(terms.pay_message(self.service, self.token).message(self.evvm_id)?)
        } else {
            None
        };

        debug!(operation, service = %self.service, "requesting action signature");
        let action = signer.sign_message(action_message).await?;

        match pay_message {
            None => Ok(DualSignature::ActionOnly(action)),
            Some(pay_message) => {
                debug!(operation, service = %self.service, "requesting payment signature");
                let pay = signer.sign_message(&pay_message).await?;
                Ok(DualSignature::ActionAndPay { action, pay })
            }
        }
    }
}
