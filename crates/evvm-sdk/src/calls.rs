//! Assembly of executor inputs from signed operations.
//!
//! Each function takes the parameters the user signed, the signatures the
//! builders returned and the companion [`PaymentTerms`], and produces the
//! call struct the matching executor submits. An absent pay signature is
//! sent as empty `bytes`.

use alloy_primitives::{Address, Bytes, U256};
use evvm_executor::abi::{INameService, IP2PSwap, IStaking};
use evvm_message::hash::username_hash;
use evvm_message::name_service::{
    AcceptOfferMessage, AddCustomMetadataMessage, FlushCustomMetadataMessage,
    FlushUsernameMessage, MakeOfferMessage, PreRegistrationUsernameMessage,
    RegistrationUsernameMessage, RemoveCustomMetadataMessage, RenewUsernameMessage,
    WithdrawOfferMessage,
};
use evvm_message::p2p_swap::{CancelOrderMessage, DispatchOrderMessage, MakeOrderMessage};
use evvm_message::staking::{
    PresaleStakingMessage, PublicServiceStakingMessage, PublicStakingMessage,
};
use evvm_signature::{DualSignature, PaymentTerms, Signature};

/// The `*_evvm` tail shared by every service call.
struct EvvmPayment {
    priority_fee: U256,
    nonce: U256,
    priority_flag: bool,
    signature: Bytes,
}

impl EvvmPayment {
    fn new(terms: &PaymentTerms, pay: Option<&Signature>) -> Self {
        Self {
            priority_fee: terms.priority_fee,
            nonce: terms.nonce,
            priority_flag: terms.priority_flag,
            signature: pay.map(|s| s.clone().into_bytes()).unwrap_or_default(),
        }
    }
}

fn split(signatures: &DualSignature) -> (Bytes, Option<&Signature>) {
    (signatures.action().clone().into_bytes(), signatures.pay())
}

// ─── Staking ───────────────────────────────────────────────────────

pub fn golden_staking(
    is_staking: bool,
    amount_of_staking: U256,
    pay: &Signature,
) -> IStaking::goldenStakingCall {
    IStaking::goldenStakingCall {
        is_staking,
        amount_of_staking,
        signature_evvm: pay.clone().into_bytes(),
    }
}

pub fn presale_staking(
    user: Address,
    message: &PresaleStakingMessage,
    terms: &PaymentTerms,
    signatures: &DualSignature,
) -> IStaking::presaleStakingCall {
    let (signature, pay) = split(signatures);
    let evvm = EvvmPayment::new(terms, pay);
    IStaking::presaleStakingCall {
        user,
        is_staking: message.is_staking,
        nonce: message.nonce,
        signature,
        priority_fee_evvm: evvm.priority_fee,
        nonce_evvm: evvm.nonce,
        priority_flag_evvm: evvm.priority_flag,
        signature_evvm: evvm.signature,
    }
}

pub fn public_staking(
    user: Address,
    message: &PublicStakingMessage,
    terms: &PaymentTerms,
    signatures: &DualSignature,
) -> IStaking::publicStakingCall {
    let (signature, pay) = split(signatures);
    let evvm = EvvmPayment::new(terms, pay);
    IStaking::publicStakingCall {
        user,
        is_staking: message.is_staking,
        amount_of_staking: message.amount_of_staking,
        nonce: message.nonce,
        signature,
        priority_fee_evvm: evvm.priority_fee,
        nonce_evvm: evvm.nonce,
        priority_flag_evvm: evvm.priority_flag,
        signature_evvm: evvm.signature,
    }
}

pub fn public_service_staking(
    user: Address,
    message: &PublicServiceStakingMessage,
    terms: &PaymentTerms,
    signatures: &DualSignature,
) -> IStaking::publicServiceStakingCall {
    let (signature, pay) = split(signatures);
    let evvm = EvvmPayment::new(terms, pay);
    IStaking::publicServiceStakingCall {
        user,
        service: message.service,
        is_staking: message.is_staking,
        amount_of_staking: message.amount_of_staking,
        nonce: message.nonce,
        signature,
        priority_fee_evvm: evvm.priority_fee,
        nonce_evvm: evvm.nonce,
        priority_flag_evvm: evvm.priority_flag,
        signature_evvm: evvm.signature,
    }
}

// ─── NameService ───────────────────────────────────────────────────

/// The contract only ever sees the commitment hash, never the username.
pub fn pre_registration_username(
    user: Address,
    message: &PreRegistrationUsernameMessage,
    terms: &PaymentTerms,
    signatures: &DualSignature,
) -> INameService::preRegistrationUsernameCall {
    let (signature, pay) = split(signatures);
    let evvm = EvvmPayment::new(terms, pay);
    INameService::preRegistrationUsernameCall {
        user,
        hash_pre_registered_username: username_hash(&message.username, message.clown_number),
        nonce: message.nonce,
        signature,
        priority_fee_evvm: evvm.priority_fee,
        nonce_evvm: evvm.nonce,
        priority_flag_evvm: evvm.priority_flag,
        signature_evvm: evvm.signature,
    }
}

pub fn registration_username(
    user: Address,
    message: &RegistrationUsernameMessage,
    terms: &PaymentTerms,
    signatures: &DualSignature,
) -> INameService::registrationUsernameCall {
    let (signature, pay) = split(signatures);
    let evvm = EvvmPayment::new(terms, pay);
    INameService::registrationUsernameCall {
        user,
        username: message.username.clone(),
        clown_number: message.clown_number,
        nonce: message.nonce,
        signature,
        priority_fee_evvm: evvm.priority_fee,
        nonce_evvm: evvm.nonce,
        priority_flag_evvm: evvm.priority_flag,
        signature_evvm: evvm.signature,
    }
}

pub fn make_offer(
    user: Address,
    message: &MakeOfferMessage,
    terms: &PaymentTerms,
    signatures: &DualSignature,
) -> INameService::makeOfferCall {
    let (signature, pay) = split(signatures);
    let evvm = EvvmPayment::new(terms, pay);
    INameService::makeOfferCall {
        user,
        username: message.username.clone(),
        expire_date: message.expire_date,
        amount: message.amount,
        nonce: message.nonce,
        signature,
        priority_fee_evvm: evvm.priority_fee,
        nonce_evvm: evvm.nonce,
        priority_flag_evvm: evvm.priority_flag,
        signature_evvm: evvm.signature,
    }
}

pub fn withdraw_offer(
    user: Address,
    message: &WithdrawOfferMessage,
    terms: &PaymentTerms,
    signatures: &DualSignature,
) -> INameService::withdrawOfferCall {
    let (signature, pay) = split(signatures);
    let evvm = EvvmPayment::new(terms, pay);
    INameService::withdrawOfferCall {
        user,
        username: message.username.clone(),
        offer_id: message.offer_id,
        nonce: message.nonce,
        signature,
        priority_fee_evvm: evvm.priority_fee,
        nonce_evvm: evvm.nonce,
        priority_flag_evvm: evvm.priority_flag,
        signature_evvm: evvm.signature,
    }
}

pub fn accept_offer(
    user: Address,
    message: &AcceptOfferMessage,
    terms: &PaymentTerms,
    signatures: &DualSignature,
) -> INameService::acceptOfferCall {
    let (signature, pay) = split(signatures);
    let evvm = EvvmPayment::new(terms, pay);
    INameService::acceptOfferCall {
        user,
        username: message.username.clone(),
        offer_id: message.offer_id,
        nonce: message.nonce,
        signature,
        priority_fee_evvm: evvm.priority_fee,
        nonce_evvm: evvm.nonce,
        priority_flag_evvm: evvm.priority_flag,
        signature_evvm: evvm.signature,
    }
}

pub fn renew_username(
    user: Address,
    message: &RenewUsernameMessage,
    terms: &PaymentTerms,
    signatures: &DualSignature,
) -> INameService::renewUsernameCall {
    let (signature, pay) = split(signatures);
    let evvm = EvvmPayment::new(terms, pay);
    INameService::renewUsernameCall {
        user,
        username: message.username.clone(),
        nonce: message.nonce,
        signature,
        priority_fee_evvm: evvm.priority_fee,
        nonce_evvm: evvm.nonce,
        priority_flag_evvm: evvm.priority_flag,
        signature_evvm: evvm.signature,
    }
}

pub fn add_custom_metadata(
    user: Address,
    message: &AddCustomMetadataMessage,
    terms: &PaymentTerms,
    signatures: &DualSignature,
) -> INameService::addCustomMetadataCall {
    let (signature, pay) = split(signatures);
    let evvm = EvvmPayment::new(terms, pay);
    INameService::addCustomMetadataCall {
        user,
        identity: message.identity.clone(),
        value: message.value.clone(),
        nonce: message.nonce,
        signature,
        priority_fee_evvm: evvm.priority_fee,
        nonce_evvm: evvm.nonce,
        priority_flag_evvm: evvm.priority_flag,
        signature_evvm: evvm.signature,
    }
}

pub fn remove_custom_metadata(
    user: Address,
    message: &RemoveCustomMetadataMessage,
    terms: &PaymentTerms,
    signatures: &DualSignature,
) -> INameService::removeCustomMetadataCall {
    let (signature, pay) = split(signatures);
    let evvm = EvvmPayment::new(terms, pay);
    INameService::removeCustomMetadataCall {
        user,
        identity: message.identity.clone(),
        key: message.key,
        nonce: message.nonce,
        signature,
        priority_fee_evvm: evvm.priority_fee,
        nonce_evvm: evvm.nonce,
        priority_flag_evvm: evvm.priority_flag,
        signature_evvm: evvm.signature,
    }
}

pub fn flush_custom_metadata(
    user: Address,
    message: &FlushCustomMetadataMessage,
    terms: &PaymentTerms,
    signatures: &DualSignature,
) -> INameService::flushCustomMetadataCall {
    let (signature, pay) = split(signatures);
    let evvm = EvvmPayment::new(terms, pay);
    INameService::flushCustomMetadataCall {
        user,
        identity: message.identity.clone(),
        nonce: message.nonce,
        signature,
        priority_fee_evvm: evvm.priority_fee,
        nonce_evvm: evvm.nonce,
        priority_flag_evvm: evvm.priority_flag,
        signature_evvm: evvm.signature,
    }
}

pub fn flush_username(
    user: Address,
    message: &FlushUsernameMessage,
    terms: &PaymentTerms,
    signatures: &DualSignature,
) -> INameService::flushUsernameCall {
    let (signature, pay) = split(signatures);
    let evvm = EvvmPayment::new(terms, pay);
    INameService::flushUsernameCall {
        user,
        username: message.username.clone(),
        nonce: message.nonce,
        signature,
        priority_fee_evvm: evvm.priority_fee,
        nonce_evvm: evvm.nonce,
        priority_flag_evvm: evvm.priority_flag,
        signature_evvm: evvm.signature,
    }
}

// ─── P2PSwap ───────────────────────────────────────────────────────
//
// Order signatures are bare; the pay authorization, if any, comes from
// `EvvmSignatureBuilder::sign_pay` and is passed separately.

pub fn make_order(
    user: Address,
    message: &MakeOrderMessage,
    signature: &Signature,
    terms: &PaymentTerms,
    pay: Option<&Signature>,
) -> IP2PSwap::makeOrderCall {
    let evvm = EvvmPayment::new(terms, pay);
    IP2PSwap::makeOrderCall {
        user,
        metadata: message.into(),
        signature: signature.clone().into_bytes(),
        priority_fee_evvm: evvm.priority_fee,
        nonce_evvm: evvm.nonce,
        priority_flag_evvm: evvm.priority_flag,
        signature_evvm: evvm.signature,
    }
}

pub fn cancel_order(
    user: Address,
    message: &CancelOrderMessage,
    signature: &Signature,
    terms: &PaymentTerms,
    pay: Option<&Signature>,
) -> IP2PSwap::cancelOrderCall {
    let evvm = EvvmPayment::new(terms, pay);
    IP2PSwap::cancelOrderCall {
        user,
        metadata: IP2PSwap::MetadataCancelOrder::new(message, signature.clone()),
        priority_fee_evvm: evvm.priority_fee,
        nonce_evvm: evvm.nonce,
        priority_flag_evvm: evvm.priority_flag,
        signature_evvm: evvm.signature,
    }
}

pub fn dispatch_order_fill_proportional_fee(
    user: Address,
    message: &DispatchOrderMessage,
    amount_of_token_b_to_fill: U256,
    signature: &Signature,
    terms: &PaymentTerms,
    pay: Option<&Signature>,
) -> IP2PSwap::dispatchOrder_fillPropotionalFeeCall {
    let evvm = EvvmPayment::new(terms, pay);
    IP2PSwap::dispatchOrder_fillPropotionalFeeCall {
        user,
        metadata: IP2PSwap::MetadataDispatchOrder::new(
            message,
            amount_of_token_b_to_fill,
            signature.clone(),
        ),
        priority_fee_evvm: evvm.priority_fee,
        nonce_evvm: evvm.nonce,
        priority_flag_evvm: evvm.priority_flag,
        signature_evvm: evvm.signature,
    }
}

pub fn dispatch_order_fill_fixed_fee(
    user: Address,
    message: &DispatchOrderMessage,
    amount_of_token_b_to_fill: U256,
    amount_out: U256,
    signature: &Signature,
    terms: &PaymentTerms,
    pay: Option<&Signature>,
) -> IP2PSwap::dispatchOrder_fillFixedFeeCall {
    let evvm = EvvmPayment::new(terms, pay);
    IP2PSwap::dispatchOrder_fillFixedFeeCall {
        user,
        metadata: IP2PSwap::MetadataDispatchOrder::new(
            message,
            amount_of_token_b_to_fill,
            signature.clone(),
        ),
        priority_fee_evvm: evvm.priority_fee,
        nonce_evvm: evvm.nonce,
        priority_flag_evvm: evvm.priority_flag,
        signature_evvm: evvm.signature,
        amount_out,
    }
}
