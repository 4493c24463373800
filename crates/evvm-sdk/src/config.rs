use std::path::Path;

use alloy_primitives::{Address, U256};
use evvm_signature::PRINCIPAL_TOKEN;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

fn default_principal_token() -> Address {
    PRINCIPAL_TOKEN
}

/// Addresses of one EVVM deployment.
///
/// ```json
/// {
///   "evvm_id": "0x438",
///   "evvm": "0x...",
///   "staking": "0x...",
///   "name_service": "0x...",
///   "p2p_swap": "0x..."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    pub evvm_id: U256,
    /// EVVM core contract.
    pub evvm: Address,
    pub staking: Address,
    pub name_service: Address,
    /// Not every deployment runs the order book.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p2p_swap: Option<Address>,
    #[serde(default = "default_principal_token")]
    pub principal_token: Address,
}

impl Deployment {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading deployment");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn p2p_swap(&self) -> Result<Address, ConfigError> {
        self.p2p_swap.ok_or(ConfigError::MissingContract("p2p_swap"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    const FULL: &str = r#"{
        "evvm_id": "0x438",
        "evvm": "0x9999999999999999999999999999999999999999",
        "staking": "0x2222222222222222222222222222222222222222",
        "name_service": "0x4444444444444444444444444444444444444444",
        "p2p_swap": "0x5555555555555555555555555555555555555555",
        "principal_token": "0x7777777777777777777777777777777777777777"
    }"#;

    #[test]
    fn parses_full_deployment() {
        let deployment = Deployment::from_json_str(FULL).unwrap();
        assert_eq!(deployment.evvm_id, U256::from(1080));
        assert_eq!(
            deployment.evvm,
            address!("9999999999999999999999999999999999999999")
        );
        assert_eq!(
            deployment.p2p_swap().unwrap(),
            address!("5555555555555555555555555555555555555555")
        );
        assert_eq!(
            deployment.principal_token,
            address!("7777777777777777777777777777777777777777")
        );
    }

    #[test]
    fn optional_fields_default() {
        let json = r#"{
            "evvm_id": "0x1",
            "evvm": "0x9999999999999999999999999999999999999999",
            "staking": "0x2222222222222222222222222222222222222222",
            "name_service": "0x4444444444444444444444444444444444444444"
        }"#;
        let deployment = Deployment::from_json_str(json).unwrap();
        assert_eq!(deployment.p2p_swap, None);
        assert_eq!(deployment.principal_token, PRINCIPAL_TOKEN);
        assert!(matches!(
            deployment.p2p_swap(),
            Err(ConfigError::MissingContract("p2p_swap"))
        ));
    }

    #[test]
    fn rejects_missing_core_address() {
        let err = Deployment::from_json_str(r#"{"evvm_id": "0x1"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn serde_roundtrip() {
        let deployment = Deployment::from_json_str(FULL).unwrap();
        let json = serde_json::to_string(&deployment).unwrap();
        assert_eq!(Deployment::from_json_str(&json).unwrap(), deployment);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Deployment::from_path("/nonexistent/deployment.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
