use std::collections::BTreeMap;

use account_utils::AccountKey;
use corvid_primitives::Address;
use serde::{Deserialize, Serialize};

/// Account state as reported by an access node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnChainAccount {
    pub address: Address,
    #[serde(default)]
    pub balance: u64,
    #[serde(default)]
    pub keys: Vec<AccountKey>,
    /// Deployed contract code by contract name.
    #[serde(default)]
    pub contracts: BTreeMap<String, String>,
}

/// Events emitted in a single block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlockEvents {
    pub height: u64,
    pub block_id: String,
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: String,
    pub transaction_id: String,
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub payload: serde_json::Value,
}

/// Contract code deployed together with a new account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractSource {
    pub name: String,
    pub code: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct LatestBlock {
    pub height: u64,
    pub id: String,
}

/// Body of an account creation request.
#[derive(Clone, Debug, Serialize)]
pub(crate) struct CreateAccountRequest<'a> {
    pub signer: Address,
    pub signer_keys: &'a [AccountKey],
    pub keys: &'a [AccountKey],
    pub contracts: &'a [ContractSource],
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn event_type_field_is_named_type() {
        let json = r#"{
            "type": "flow.AccountKeyAdded",
            "transaction_id": "ab",
            "payload": {"address": "0x01"}
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event.event_type, "flow.AccountKeyAdded");
        assert_eq!(event.index, 0);
        assert_eq!(event.payload["address"], "0x01");
    }

    #[test]
    fn account_defaults() {
        let json = r#"{"address":"0x01cf0e2f2f715450000000000000000000000000"}"#;
        let account: OnChainAccount = serde_json::from_str(json).unwrap();

        assert_eq!(account.balance, 0);
        assert!(account.keys.is_empty());
        assert!(account.contracts.is_empty());
    }
}
