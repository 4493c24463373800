//! The wallet-signing capability and an in-process implementation of it.

use std::sync::Arc;

use alloy_primitives::{Address, B256};
use async_trait::async_trait;
use k256::ecdsa::signature::hazmat::PrehashSigner;
use k256::ecdsa::{RecoveryId, Signature as EcdsaSignature, SigningKey, VerifyingKey};
use sha3::{Digest, Keccak256};
use tracing::debug;
use zeroize::Zeroize;

use crate::error::SignerError;
use crate::signature::Signature;

/// Signs personal messages on behalf of one account.
///
/// Implementations apply EIP-191 framing themselves; callers pass the bare
/// message string. A wallet may prompt the user, so every call can fail with
/// [`SignerError::Rejected`].
#[async_trait]
pub trait MessageSigner: Send + Sync {
    /// Account the signatures are produced for.
    fn address(&self) -> Address;

    async fn sign_message(&self, message: &str) -> Result<Signature, SignerError>;
}

#[async_trait]
impl<T: MessageSigner + ?Sized> MessageSigner for Arc<T> {
    fn address(&self) -> Address {
        (**self).address()
    }

    async fn sign_message(&self, message: &str) -> Result<Signature, SignerError> {
        (**self).sign_message(message).await
    }
}

#[async_trait]
impl<T: MessageSigner + ?Sized> MessageSigner for &T {
    fn address(&self) -> Address {
        (**self).address()
    }

    async fn sign_message(&self, message: &str) -> Result<Signature, SignerError> {
        (**self).sign_message(message).await
    }
}

/// EIP-191 personal-message digest:
/// `keccak256("\x19Ethereum Signed Message:\n" + len(message) + message)`.
pub fn eip191_hash(message: &[u8]) -> B256 {
    let prefix = format!("\x19Ethereum Signed Message:\n{}", message.len());
    let mut hasher = Keccak256::new();
    hasher.update(prefix.as_bytes());
    hasher.update(message);
    B256::from_slice(&hasher.finalize())
}

/// Ethereum address of a secp256k1 public key: the last 20 bytes of the
/// Keccak-256 hash of the uncompressed key without its 0x04 prefix.
fn address_of(key: &VerifyingKey) -> Address {
    let uncompressed = key.to_encoded_point(false);
    let hash = Keccak256::digest(&uncompressed.as_bytes()[1..]);
    Address::from_slice(&hash[12..])
}

/// Recovers the account that produced a 65-byte `r || s || v` personal-message
/// signature. `v` may be 27/28 or 0/1.
pub fn recover_signer(message: &str, signature: &Signature) -> Result<Address, SignerError> {
    let bytes = signature.as_bytes();
    if bytes.len() != 65 {
        return Err(SignerError::InvalidSignature(format!(
            "expected 65 bytes, got {}",
            bytes.len()
        )));
    }

    let v = match bytes[64] {
        27 | 28 => bytes[64] - 27,
        0 | 1 => bytes[64],
        other => {
            return Err(SignerError::InvalidSignature(format!(
                "invalid recovery byte {other}"
            )))
        }
    };

    let sig = EcdsaSignature::from_slice(&bytes[..64])
        .map_err(|e| SignerError::InvalidSignature(e.to_string()))?;
    let recovery_id = RecoveryId::from_byte(v)
        .ok_or_else(|| SignerError::InvalidSignature("invalid recovery id".into()))?;

    let hash = eip191_hash(message.as_bytes());
    let key = VerifyingKey::recover_from_prehash(hash.as_slice(), &sig, recovery_id)
        .map_err(|e| SignerError::InvalidSignature(e.to_string()))?;

    Ok(address_of(&key))
}

/// Signs with a secp256k1 key held in process memory.
///
/// The key is zeroized when the signer is dropped.
pub struct LocalSigner {
    key: SigningKey,
    address: Address,
}

impl LocalSigner {
    pub fn from_bytes(private_key: &[u8; 32]) -> Result<Self, SignerError> {
        let mut key_bytes = *private_key;
        let key = SigningKey::from_bytes((&key_bytes).into())
            .map_err(|e| SignerError::InvalidPrivateKey(e.to_string()));
        key_bytes.zeroize();
        let key = key?;

        let address = address_of(key.verifying_key());
        Ok(Self { key, address })
    }

    /// Parses a 32-byte hex private key, with or without `0x`.
    pub fn from_hex(private_key: &str) -> Result<Self, SignerError> {
        let hex_str = private_key
            .strip_prefix("0x")
            .or_else(|| private_key.strip_prefix("0X"))
            .unwrap_or(private_key);

        let mut bytes = hex::decode(hex_str)
            .map_err(|e| SignerError::InvalidPrivateKey(format!("invalid hex: {e}")))?;

        if bytes.len() != 32 {
            let len = bytes.len();
            bytes.zeroize();
            return Err(SignerError::InvalidPrivateKey(format!(
                "expected 32 bytes, got {len}"
            )));
        }

        let mut key = [0u8; 32];
        key.copy_from_slice(&bytes);
        bytes.zeroize();

        let signer = Self::from_bytes(&key);
        key.zeroize();
        signer
    }

    /// Fresh key from the operating system RNG.
    pub fn random() -> Self {
        let key = SigningKey::random(&mut rand::rngs::OsRng);
        let address = address_of(key.verifying_key());
        Self { key, address }
    }

    /// Synchronous signing, returning `r || s || v` with `v` in {27, 28}.
    pub fn sign_message_sync(&self, message: &[u8]) -> Result<Signature, SignerError> {
        let msg_hash = eip191_hash(message);

        let (signature, recovery_id): (EcdsaSignature, RecoveryId) = self
            .key
            .sign_prehash(msg_hash.as_slice())
            .map_err(|e| SignerError::SigningError(e.to_string()))?;

        let mut sig = Vec::with_capacity(65);
        sig.extend_from_slice(&signature.r().to_bytes());
        sig.extend_from_slice(&signature.s().to_bytes());
        sig.push(recovery_id.is_y_odd() as u8 + 27);
        Ok(Signature::new(sig))
    }
}

impl std::fmt::Debug for LocalSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalSigner")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl MessageSigner for LocalSigner {
    fn address(&self) -> Address {
        self.address
    }

    async fn sign_message(&self, message: &str) -> Result<Signature, SignerError> {
        debug!(signer = %self.address, len = message.len(), "signing personal message");
        self.sign_message_sync(message.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Well-known test private key (DO NOT use on mainnet).
    const TEST_PRIVKEY: [u8; 32] = {
        let mut key = [0u8; 32];
        key[31] = 1;
        key
    };

    const TEST_ADDRESS: &str = "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf";

    #[test]
    fn address_of_known_key() {
        let signer = LocalSigner::from_bytes(&TEST_PRIVKEY).unwrap();
        assert_eq!(
            format!("0x{}", hex::encode(signer.address)),
            TEST_ADDRESS
        );
    }

    #[test]
    fn from_hex_matches_from_bytes() {
        let hex_key = format!("0x{}", hex::encode(TEST_PRIVKEY));
        let signer = LocalSigner::from_hex(&hex_key).unwrap();
        assert_eq!(
            signer.address,
            LocalSigner::from_bytes(&TEST_PRIVKEY).unwrap().address
        );
    }

    #[test]
    fn zero_key_is_rejected() {
        assert!(matches!(
            LocalSigner::from_bytes(&[0u8; 32]),
            Err(SignerError::InvalidPrivateKey(_))
        ));
    }

    #[test]
    fn short_hex_key_is_rejected() {
        assert!(matches!(
            LocalSigner::from_hex("0x01"),
            Err(SignerError::InvalidPrivateKey(_))
        ));
    }

    #[test]
    fn eip191_hash_of_hello_world() {
        // keccak256("\x19Ethereum Signed Message:\n11hello world")
        assert_eq!(
            hex::encode(eip191_hash(b"hello world")),
            "d9eba16ed0ecae432b71fe008c98cc872bb4cc214d3220a36f365326cf807d68"
        );
    }

    #[test]
    fn signature_layout() {
        let signer = LocalSigner::from_bytes(&TEST_PRIVKEY).unwrap();
        let sig = signer.sign_message_sync(b"hello").unwrap();
        assert_eq!(sig.as_bytes().len(), 65);
        let v = sig.as_bytes()[64];
        assert!(v == 27 || v == 28);
    }

    #[test]
    fn signing_is_deterministic() {
        let signer = LocalSigner::from_bytes(&TEST_PRIVKEY).unwrap();
        assert_eq!(
            signer.sign_message_sync(b"hello").unwrap(),
            signer.sign_message_sync(b"hello").unwrap()
        );
    }

    #[tokio::test]
    async fn recover_round_trip() {
        let signer = LocalSigner::random();
        let message = "e91b3f94,1,true,5083000000000000000000,1";
        let sig = signer.sign_message(message).await.unwrap();
        assert_eq!(recover_signer(message, &sig).unwrap(), signer.address());
    }

    #[tokio::test]
    async fn recover_with_other_message_yields_other_address() {
        let signer = LocalSigner::random();
        let sig = signer.sign_message("a").await.unwrap();
        let recovered = recover_signer("b", &sig).unwrap();
        assert_ne!(recovered, signer.address());
    }

    #[test]
    fn recover_rejects_bad_length() {
        let sig = Signature::new(vec![0u8; 64]);
        assert!(matches!(
            recover_signer("x", &sig),
            Err(SignerError::InvalidSignature(_))
        ));
    }

    #[tokio::test]
    async fn arc_signer_delegates() {
        let signer = Arc::new(LocalSigner::from_bytes(&TEST_PRIVKEY).unwrap());
        let direct = signer.sign_message_sync(b"m").unwrap();
        let via_arc = MessageSigner::sign_message(&signer, "m").await.unwrap();
        assert_eq!(direct, via_arc);
        assert_eq!(MessageSigner::address(&signer), signer.address);
    }

    #[test]
    fn debug_does_not_leak_key() {
        let signer = LocalSigner::from_bytes(&TEST_PRIVKEY).unwrap();
        let debug = format!("{signer:?}");
        assert!(debug.contains("address"));
        assert!(!debug.contains("key"));
    }
}
