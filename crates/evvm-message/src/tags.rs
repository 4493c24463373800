//! Operation tags, the first field of every signed message.
//!
//! `PUBLIC_STAKING` and `REGISTRATION_USERNAME` share a value; the two are
//! verified by different contracts, so the messages never meet.

pub const PAY: &str = "ef83c1d6";
pub const DISPERSE_PAY: &str = "73a7dd87";

pub const PRESALE_STAKING: &str = "44068aee";
pub const PUBLIC_STAKING: &str = "e91b3f94";
pub const PUBLIC_SERVICE_STAKING: &str = "31ea0da5";

pub const PRE_REGISTRATION_USERNAME: &str = "72b33c2f";
pub const REGISTRATION_USERNAME: &str = "e91b3f94";
pub const MAKE_OFFER: &str = "3a962d3d";
pub const WITHDRAW_OFFER: &str = "4f1ce4ec";
pub const ACCEPT_OFFER: &str = "c01ea54a";
pub const RENEW_USERNAME: &str = "6169d35b";
pub const ADD_CUSTOM_METADATA: &str = "dd1b18e8";
pub const REMOVE_CUSTOM_METADATA: &str = "c448d38d";
pub const FLUSH_CUSTOM_METADATA: &str = "986f8525";
pub const FLUSH_USERNAME: &str = "9c579b52";

pub const MAKE_ORDER: &str = "0b2b535c";
pub const CANCEL_ORDER: &str = "24b7694a";
pub const DISPATCH_ORDER: &str = "31cbd6fa";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_eight_lowercase_hex_digits() {
        let all = [
            PAY,
            DISPERSE_PAY,
            PRESALE_STAKING,
            PUBLIC_STAKING,
            PUBLIC_SERVICE_STAKING,
            PRE_REGISTRATION_USERNAME,
            REGISTRATION_USERNAME,
            MAKE_OFFER,
            WITHDRAW_OFFER,
            ACCEPT_OFFER,
            RENEW_USERNAME,
            ADD_CUSTOM_METADATA,
            REMOVE_CUSTOM_METADATA,
            FLUSH_CUSTOM_METADATA,
            FLUSH_USERNAME,
            MAKE_ORDER,
            CANCEL_ORDER,
            DISPATCH_ORDER,
        ];
        for tag in all {
            assert_eq!(tag.len(), 8, "{tag}");
            assert!(
                tag.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
                "{tag}"
            );
        }
    }
}
