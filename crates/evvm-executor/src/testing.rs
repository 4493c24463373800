use std::sync::Mutex;

use alloy_primitives::B256;
use async_trait::async_trait;

use crate::error::WriterError;
use crate::writer::{ContractCall, ContractWriter, TxHash};

/// Writer that records calls and answers with a fixed hash or error.
pub(crate) struct RecordingWriter {
    calls: Mutex<Vec<ContractCall>>,
    failure: Option<WriterError>,
}

impl RecordingWriter {
    pub(crate) const TX_HASH: B256 = B256::repeat_byte(0x42);

    pub(crate) fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    pub(crate) fn failing(error: WriterError) -> Self {
        Self {
            failure: Some(error),
            ..Self::new()
        }
    }

    pub(crate) fn calls(&self) -> Vec<ContractCall> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn last_call(&self) -> ContractCall {
        self.calls().pop().expect("no call recorded")
    }
}

#[async_trait]
impl ContractWriter for RecordingWriter {
    async fn write_contract(&self, call: ContractCall) -> Result<TxHash, WriterError> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(Self::TX_HASH),
        }
    }
}
