use alloy_primitives::U256;

use crate::error::MessageError;
use crate::fields::MessageFields;

/// Message for a contract function this crate has no dedicated encoder for:
/// `<tag>,<evvmId>,<inputs>`.
///
/// `inputs` is appended verbatim; callers are responsible for producing it
/// in the exact layout the target contract rebuilds.
pub fn generic_message(tag: &str, evvm_id: U256, inputs: &str) -> Result<String, MessageError> {
    if tag.is_empty() {
        return Err(MessageError::InvalidArgument(
            "function tag is required".into(),
        ));
    }
    Ok(MessageFields::new(tag, evvm_id).text(inputs).finish())
}
