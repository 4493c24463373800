use std::sync::Mutex;

use alloy_primitives::Address;
use async_trait::async_trait;

use crate::error::SignerError;
use crate::signature::Signature;
use crate::signer::{LocalSigner, MessageSigner};

/// Signer that records every request and can be told to reject the n-th one.
pub(crate) struct RecordingSigner {
    inner: LocalSigner,
    requests: Mutex<Vec<String>>,
    reject_call: Option<usize>,
}

impl RecordingSigner {
    pub(crate) fn new() -> Self {
        let mut key = [0u8; 32];
        key[31] = 7;
        Self {
            inner: LocalSigner::from_bytes(&key).unwrap(),
            requests: Mutex::new(Vec::new()),
            reject_call: None,
        }
    }

    /// Rejects the call with the given zero-based index.
    pub(crate) fn rejecting(call: usize) -> Self {
        Self {
            reject_call: Some(call),
            ..Self::new()
        }
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageSigner for RecordingSigner {
    fn address(&self) -> Address {
        self.inner.address()
    }

    async fn sign_message(&self, message: &str) -> Result<Signature, SignerError> {
        let index = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(message.to_string());
            requests.len() - 1
        };
        if self.reject_call == Some(index) {
            return Err(SignerError::Rejected("user declined".into()));
        }
        self.inner.sign_message(message).await
    }
}
