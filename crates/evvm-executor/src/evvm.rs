use alloy_primitives::{Address, Bytes};
use evvm_message::evvm::{DispersePayMessage, PayMessage};
use evvm_message::hash::DisperseRecipient;
use tracing::warn;

use crate::abi::IEvvm;
use crate::error::ExecutorError;
use crate::writer::{submit, ContractWriter, TxHash};

impl From<&DisperseRecipient> for IEvvm::DispersePayMetadata {
    fn from(recipient: &DisperseRecipient) -> Self {
        let (to_address, to_identity) = recipient.to.to_parts();
        Self {
            amount: recipient.amount,
            to_address,
            to_identity,
        }
    }
}

/// Assemble a `pay` call from the message the user signed.
pub fn pay_input(from: Address, message: &PayMessage, signature: impl Into<Bytes>) -> IEvvm::payCall {
    let (to_address, to_identity) = message.to.to_parts();
    IEvvm::payCall {
        from,
        to_address,
        to_identity,
        token: message.token,
        amount: message.amount,
        priority_fee: message.priority_fee,
        nonce: message.nonce,
        priority_flag: message.priority_flag,
        executor: message.executor,
        signature: signature.into(),
    }
}

/// Assemble a `dispersePay` call from the message the user signed.
pub fn disperse_pay_input(
    from: Address,
    message: &DispersePayMessage,
    signature: impl Into<Bytes>,
) -> IEvvm::dispersePayCall {
    IEvvm::dispersePayCall {
        from,
        to_data: message.recipients.iter().map(Into::into).collect(),
        token: message.token,
        amount: message.amount,
        priority_fee: message.priority_fee,
        nonce: message.nonce,
        priority_flag: message.priority_flag,
        executor: message.executor,
        signature: signature.into(),
    }
}

/// Submits payments to the EVVM core contract.
#[derive(Debug, Clone)]
pub struct EvvmExecutor<W> {
    writer: W,
    address: Address,
}

impl<W: ContractWriter> EvvmExecutor<W> {
    pub fn new(writer: W, address: Address) -> Self {
        Self { writer, address }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub async fn pay(&self, input: &IEvvm::payCall) -> Result<TxHash, ExecutorError> {
        submit(&self.writer, self.address, input).await
    }

    pub async fn disperse_pay(
        &self,
        input: &IEvvm::dispersePayCall,
    ) -> Result<TxHash, ExecutorError> {
        if input.to_data.is_empty() {
            warn!("dispersePay called without recipients");
            return Err(ExecutorError::InvalidArgument(
                "no data to execute dispersePay".into(),
            ));
        }
        submit(&self.writer, self.address, input).await
    }

    /// Submits a batch of independent payments in one transaction.
    pub async fn pay_multiple(&self, data: Vec<IEvvm::PayData>) -> Result<TxHash, ExecutorError> {
        if data.is_empty() {
            warn!("payMultiple called with an empty batch");
            return Err(ExecutorError::InvalidArgument(
                "no data to execute payMultiple".into(),
            ));
        }
        submit(&self.writer, self.address, &IEvvm::payMultipleCall { data }).await
    }
}

impl From<IEvvm::payCall> for IEvvm::PayData {
    fn from(call: IEvvm::payCall) -> Self {
        Self {
            from: call.from,
            to_address: call.to_address,
            to_identity: call.to_identity,
            token: call.token,
            amount: call.amount,
            priority_fee: call.priority_fee,
            nonce: call.nonce,
            priority_flag: call.priority_flag,
            executor: call.executor,
            signature: call.signature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WriterError;
    use crate::testing::RecordingWriter;
    use alloy_primitives::{address, U256};
    use alloy_sol_types::SolCall;
    use evvm_message::Recipient;

    const EVVM: Address = address!("9999999999999999999999999999999999999999");
    const USER: Address = address!("742d35cc6634c0532925a3b8d138068fd4c1b7a1");

    fn pay_message(to: Recipient) -> PayMessage {
        PayMessage {
            to,
            token: Address::ZERO,
            amount: U256::from(1000),
            priority_fee: U256::from(5),
            nonce: U256::from(7),
            priority_flag: false,
            executor: Address::ZERO,
        }
    }

    #[tokio::test]
    async fn pay_submits_encoded_call() {
        let writer = RecordingWriter::new();
        let executor = EvvmExecutor::new(&writer, EVVM);
        let input = pay_input(USER, &pay_message(Recipient::Identity("alice".into())), vec![1u8; 65]);

        let tx = executor.pay(&input).await.unwrap();
        assert_eq!(tx, RecordingWriter::TX_HASH);

        let call = writer.last_call();
        assert_eq!(call.address, EVVM);
        assert_eq!(call.function_name, "pay");
        assert_eq!(call.selector(), IEvvm::payCall::SELECTOR);
        let decoded: IEvvm::payCall = call.decode().unwrap();
        assert_eq!(decoded, input);
        assert_eq!(decoded.to_address, Address::ZERO);
        assert_eq!(decoded.to_identity, "alice");
    }

    #[test]
    fn pay_input_with_address_recipient_has_empty_identity() {
        let input = pay_input(USER, &pay_message(Recipient::Address(USER)), Bytes::new());
        assert_eq!(input.to_address, USER);
        assert!(input.to_identity.is_empty());
        assert_eq!(input.amount, U256::from(1000));
        assert_eq!(input.nonce, U256::from(7));
    }

    #[tokio::test]
    async fn disperse_pay_keeps_recipient_order() {
        let writer = RecordingWriter::new();
        let executor = EvvmExecutor::new(&writer, EVVM);
        let message = DispersePayMessage {
            recipients: vec![
                DisperseRecipient::new(U256::from(500), USER),
                DisperseRecipient::new(U256::from(250), Recipient::Identity("bob".into())),
            ],
            token: Address::ZERO,
            amount: U256::from(750),
            priority_fee: U256::ZERO,
            nonce: U256::from(1),
            priority_flag: true,
            executor: Address::ZERO,
        };
        let input = disperse_pay_input(USER, &message, vec![2u8; 65]);

        executor.disperse_pay(&input).await.unwrap();

        let decoded: IEvvm::dispersePayCall = writer.last_call().decode().unwrap();
        assert_eq!(decoded.to_data.len(), 2);
        assert_eq!(decoded.to_data[0].to_address, USER);
        assert_eq!(decoded.to_data[1].to_identity, "bob");
        assert_eq!(decoded.amount, U256::from(750));
    }

    #[tokio::test]
    async fn disperse_pay_without_recipients_is_rejected() {
        let writer = RecordingWriter::new();
        let executor = EvvmExecutor::new(&writer, EVVM);
        let input = IEvvm::dispersePayCall {
            from: USER,
            to_data: vec![],
            token: Address::ZERO,
            amount: U256::ZERO,
            priority_fee: U256::ZERO,
            nonce: U256::ZERO,
            priority_flag: false,
            executor: Address::ZERO,
            signature: Bytes::new(),
        };

        let err = executor.disperse_pay(&input).await.unwrap_err();
        assert_eq!(
            err,
            ExecutorError::InvalidArgument("no data to execute dispersePay".into())
        );
        assert!(writer.calls().is_empty());
    }

    #[tokio::test]
    async fn pay_multiple_batches_payments() {
        let writer = RecordingWriter::new();
        let executor = EvvmExecutor::new(&writer, EVVM);
        let first = pay_input(USER, &pay_message(Recipient::Address(EVVM)), vec![3u8; 65]);
        let second = pay_input(USER, &pay_message(Recipient::Identity("carol".into())), vec![4u8; 65]);

        executor
            .pay_multiple(vec![first.clone().into(), second.into()])
            .await
            .unwrap();

        let call = writer.last_call();
        assert_eq!(call.function_name, "payMultiple");
        let decoded: IEvvm::payMultipleCall = call.decode().unwrap();
        assert_eq!(decoded.data.len(), 2);
        assert_eq!(decoded.data[0].to_address, first.to_address);
        assert_eq!(decoded.data[1].to_identity, "carol");
    }

    #[tokio::test]
    async fn pay_multiple_empty_is_rejected() {
        let writer = RecordingWriter::new();
        let executor = EvvmExecutor::new(&writer, EVVM);
        let err = executor.pay_multiple(vec![]).await.unwrap_err();
        assert_eq!(
            err,
            ExecutorError::InvalidArgument("no data to execute payMultiple".into())
        );
        assert!(writer.calls().is_empty());
    }

    #[tokio::test]
    async fn writer_failure_propagates() {
        let failure = WriterError::Reverted("Invalid signature".into());
        let writer = RecordingWriter::failing(failure.clone());
        let executor = EvvmExecutor::new(&writer, EVVM);
        let input = pay_input(USER, &pay_message(Recipient::Address(EVVM)), Bytes::new());

        let err = executor.pay(&input).await.unwrap_err();
        assert_eq!(err, ExecutorError::Writer(failure));
        assert_eq!(writer.calls().len(), 1);
    }
}
