//! ABI definitions of the EVVM contracts, using alloy's `sol!` macro.
//!
//! Parameter order here is the positional order on-chain; executors never
//! reorder arguments themselves.

use alloy_sol_types::sol;

sol! {
    /// EVVM core: the payment engine.
    #[sol(all_derives)]
    interface IEvvm {
        struct DispersePayMetadata {
            uint256 amount;
            address to_address;
            string to_identity;
        }

        struct PayData {
            address from;
            address to_address;
            string to_identity;
            address token;
            uint256 amount;
            uint256 priority_fee;
            uint256 nonce;
            bool priority_flag;
            address executor;
            bytes signature;
        }

        function pay(
            address from,
            address to_address,
            string to_identity,
            address token,
            uint256 amount,
            uint256 priority_fee,
            uint256 nonce,
            bool priority_flag,
            address executor,
            bytes signature
        ) external;

        function dispersePay(
            address from,
            DispersePayMetadata[] to_data,
            address token,
            uint256 amount,
            uint256 priority_fee,
            uint256 nonce,
            bool priority_flag,
            address executor,
            bytes signature
        ) external;

        function payMultiple(PayData[] data)
            external
            returns (uint256 successful_transactions, bool[] results);
    }
}

sol! {
    /// Staking module.
    #[sol(all_derives)]
    interface IStaking {
        function goldenStaking(bool is_staking, uint256 amount_of_staking, bytes signature_evvm) external;

        function presaleStaking(
            address user,
            bool is_staking,
            uint256 nonce,
            bytes signature,
            uint256 priority_fee_evvm,
            uint256 nonce_evvm,
            bool priority_flag_evvm,
            bytes signature_evvm
        ) external;

        function publicStaking(
            address user,
            bool is_staking,
            uint256 amount_of_staking,
            uint256 nonce,
            bytes signature,
            uint256 priority_fee_evvm,
            uint256 nonce_evvm,
            bool priority_flag_evvm,
            bytes signature_evvm
        ) external;

        function publicServiceStaking(
            address user,
            address service,
            bool is_staking,
            uint256 amount_of_staking,
            uint256 nonce,
            bytes signature,
            uint256 priority_fee_evvm,
            uint256 nonce_evvm,
            bool priority_flag_evvm,
            bytes signature_evvm
        ) external;
    }
}

sol! {
    /// Username registry.
    #[sol(all_derives)]
    interface INameService {
        function preRegistrationUsername(
            address user,
            bytes32 hash_pre_registered_username,
            uint256 nonce,
            bytes signature,
            uint256 priority_fee_evvm,
            uint256 nonce_evvm,
            bool priority_flag_evvm,
            bytes signature_evvm
        ) external;

        function registrationUsername(
            address user,
            string username,
            uint256 clown_number,
            uint256 nonce,
            bytes signature,
            uint256 priority_fee_evvm,
            uint256 nonce_evvm,
            bool priority_flag_evvm,
            bytes signature_evvm
        ) external;

        function makeOffer(
            address user,
            string username,
            uint256 expire_date,
            uint256 amount,
            uint256 nonce,
            bytes signature,
            uint256 priority_fee_evvm,
            uint256 nonce_evvm,
            bool priority_flag_evvm,
            bytes signature_evvm
        ) external returns (uint256 offer_id);

        function withdrawOffer(
            address user,
            string username,
            uint256 offer_id,
            uint256 nonce,
            bytes signature,
            uint256 priority_fee_evvm,
            uint256 nonce_evvm,
            bool priority_flag_evvm,
            bytes signature_evvm
        ) external;

        function acceptOffer(
            address user,
            string username,
            uint256 offer_id,
            uint256 nonce,
            bytes signature,
            uint256 priority_fee_evvm,
            uint256 nonce_evvm,
            bool priority_flag_evvm,
            bytes signature_evvm
        ) external;

        function renewUsername(
            address user,
            string username,
            uint256 nonce,
            bytes signature,
            uint256 priority_fee_evvm,
            uint256 nonce_evvm,
            bool priority_flag_evvm,
            bytes signature_evvm
        ) external;

        function addCustomMetadata(
            address user,
            string identity,
            string value,
            uint256 nonce,
            bytes signature,
            uint256 priority_fee_evvm,
            uint256 nonce_evvm,
            bool priority_flag_evvm,
            bytes signature_evvm
        ) external;

        function removeCustomMetadata(
            address user,
            string identity,
            uint256 key,
            uint256 nonce,
            bytes signature,
            uint256 priority_fee_evvm,
            uint256 nonce_evvm,
            bool priority_flag_evvm,
            bytes signature_evvm
        ) external;

        function flushCustomMetadata(
            address user,
            string identity,
            uint256 nonce,
            bytes signature,
            uint256 priority_fee_evvm,
            uint256 nonce_evvm,
            bool priority_flag_evvm,
            bytes signature_evvm
        ) external;

        function flushUsername(
            address user,
            string username,
            uint256 nonce,
            bytes signature,
            uint256 priority_fee_evvm,
            uint256 nonce_evvm,
            bool priority_flag_evvm,
            bytes signature_evvm
        ) external;
    }
}

sol! {
    /// Peer-to-peer order book.
    #[sol(all_derives)]
    interface IP2PSwap {
        struct MetadataMakeOrder {
            uint256 nonce;
            address token_a;
            address token_b;
            uint256 amount_a;
            uint256 amount_b;
        }

        struct MetadataCancelOrder {
            uint256 nonce;
            address token_a;
            address token_b;
            uint256 order_id;
            bytes signature;
        }

        struct MetadataDispatchOrder {
            uint256 nonce;
            address token_a;
            address token_b;
            uint256 order_id;
            uint256 amount_of_token_b_to_fill;
            bytes signature;
        }

        function makeOrder(
            address user,
            MetadataMakeOrder metadata,
            bytes signature,
            uint256 priority_fee_evvm,
            uint256 nonce_evvm,
            bool priority_flag_evvm,
            bytes signature_evvm
        ) external returns (uint256 market, uint256 order_id);

        function cancelOrder(
            address user,
            MetadataCancelOrder metadata,
            uint256 priority_fee_evvm,
            uint256 nonce_evvm,
            bool priority_flag_evvm,
            bytes signature_evvm
        ) external;

        function dispatchOrder_fillPropotionalFee(
            address user,
            MetadataDispatchOrder metadata,
            uint256 priority_fee_evvm,
            uint256 nonce_evvm,
            bool priority_flag_evvm,
            bytes signature_evvm
        ) external;

        function dispatchOrder_fillFixedFee(
            address user,
            MetadataDispatchOrder metadata,
            uint256 priority_fee_evvm,
            uint256 nonce_evvm,
            bool priority_flag_evvm,
            bytes signature_evvm,
            uint256 amount_out
        ) external;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_sol_types::SolCall;

    #[test]
    fn evvm_selectors() {
        assert_eq!(hex::encode(IEvvm::payCall::SELECTOR), "2e9621cb");
        assert_eq!(hex::encode(IEvvm::dispersePayCall::SELECTOR), "ef83c1d6");
        assert_eq!(hex::encode(IEvvm::payMultipleCall::SELECTOR), "8e006981");
    }

    #[test]
    fn evvm_signatures_expand_structs() {
        assert_eq!(
            IEvvm::dispersePayCall::SIGNATURE,
            "dispersePay(address,(uint256,address,string)[],address,uint256,uint256,uint256,bool,address,bytes)"
        );
    }

    #[test]
    fn staking_selectors() {
        assert_eq!(hex::encode(IStaking::goldenStakingCall::SELECTOR), "475c31ff");
        assert_eq!(hex::encode(IStaking::presaleStakingCall::SELECTOR), "c0f6e7d1");
        assert_eq!(hex::encode(IStaking::publicStakingCall::SELECTOR), "c769095c");
        assert_eq!(
            hex::encode(IStaking::publicServiceStakingCall::SELECTOR),
            "e2ccd470"
        );
    }

    #[test]
    fn name_service_selectors() {
        assert_eq!(
            hex::encode(INameService::preRegistrationUsernameCall::SELECTOR),
            "5d232a55"
        );
        assert_eq!(
            hex::encode(INameService::registrationUsernameCall::SELECTOR),
            "afabc8db"
        );
        assert_eq!(hex::encode(INameService::flushUsernameCall::SELECTOR), "044695cb");
    }

    #[test]
    fn p2p_swap_selectors() {
        assert_eq!(hex::encode(IP2PSwap::makeOrderCall::SELECTOR), "b9f4a5ac");
        assert_eq!(hex::encode(IP2PSwap::cancelOrderCall::SELECTOR), "6ae76d5b");
        assert_eq!(
            hex::encode(IP2PSwap::dispatchOrder_fillPropotionalFeeCall::SELECTOR),
            "701c70de"
        );
        assert_eq!(
            hex::encode(IP2PSwap::dispatchOrder_fillFixedFeeCall::SELECTOR),
            "d53723bd"
        );
    }
}
