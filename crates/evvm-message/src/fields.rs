use alloy_primitives::{Address, B256, U256};

use crate::address::format_address;

/// Field separator of the legacy message format.
pub const SEPARATOR: char = ',';

/// Writer for `<tag>,<evvmId>,<field>,...` messages.
///
/// Free-text fields are written unescaped, exactly as the contracts
/// concatenate them. A comma inside a username or metadata value therefore
/// shifts every following field; swapping this writer is the only change
/// needed to move to an escaped encoding.
#[derive(Debug, Clone)]
pub struct MessageFields {
    buf: String,
}

impl MessageFields {
    /// Starts a message with the operation tag and the EVVM id.
    pub fn new(tag: &str, evvm_id: U256) -> Self {
        let mut buf = String::with_capacity(256);
        buf.push_str(tag);
        let fields = Self { buf };
        fields.uint(evvm_id)
    }

    /// Decimal rendering, no separators or exponent.
    pub fn uint(self, value: U256) -> Self {
        self.raw(&value.to_string())
    }

    /// Lowercase `0x`-prefixed address.
    pub fn address(self, address: &Address) -> Self {
        self.raw(&format_address(address))
    }

    pub fn boolean(self, value: bool) -> Self {
        self.raw(if value { "true" } else { "false" })
    }

    /// Raw free text.
    pub fn text(self, value: &str) -> Self {
        self.raw(value)
    }

    /// Lowercase `0x`-prefixed 32-byte digest.
    pub fn digest(self, digest: &B256) -> Self {
        self.raw(&format!("0x{}", hex::encode(digest.as_slice())))
    }

    fn raw(mut self, value: &str) -> Self {
        self.buf.push(SEPARATOR);
        self.buf.push_str(value);
        self
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_only() {
        let msg = MessageFields::new("abcd0123", U256::from(7)).finish();
        assert_eq!(msg, "abcd0123,7");
    }

    #[test]
    fn large_uint_has_no_exponent() {
        let value = U256::from(10).pow(U256::from(30));
        let msg = MessageFields::new("t", U256::from(1)).uint(value).finish();
        assert_eq!(msg, "t,1,1000000000000000000000000000000");
    }

    #[test]
    fn max_uint_keeps_precision() {
        let msg = MessageFields::new("t", U256::from(1)).uint(U256::MAX).finish();
        assert!(msg.ends_with(
            ",115792089237316195423570985008687907853269984665640564039457584007913129639935"
        ));
    }

    #[test]
    fn booleans_are_literal() {
        let msg = MessageFields::new("t", U256::ZERO)
            .boolean(true)
            .boolean(false)
            .finish();
        assert_eq!(msg, "t,0,true,false");
    }

    #[test]
    fn text_is_not_escaped() {
        let msg = MessageFields::new("t", U256::from(1)).text("a,b").finish();
        assert_eq!(msg, "t,1,a,b");
    }

    #[test]
    fn digest_is_lowercase_hex() {
        let digest = B256::repeat_byte(0xAB);
        let msg = MessageFields::new("t", U256::from(1)).digest(&digest).finish();
        assert_eq!(msg, format!("t,1,0x{}", "ab".repeat(32)));
    }
}
