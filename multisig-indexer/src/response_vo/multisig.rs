use multisig_utils::serde_func::{null_to_default, string_or_number_to_i64};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultisigStatus {
    /// awaiting approval
    Approving,
    Executed,
    Cancelled,
    Failed,
    #[serde(other)]
    Unknown,
}

impl MultisigStatus {
    pub fn is_awaiting_approval(&self) -> bool {
        matches!(self, MultisigStatus::Approving)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountDisplay {
    #[serde(default)]
    pub address: String,
}

/// One row of `api/scan/multisigs`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MultisigSummary {
    pub call_hash: String,
    pub multi_id: String,
    pub status: MultisigStatus,
    #[serde(deserialize_with = "string_or_number_to_i64")]
    pub threshold: i64,
    #[serde(default)]
    pub call_module: Option<String>,
    #[serde(default)]
    pub call_module_function: Option<String>,
    #[serde(default)]
    pub block_timestamp: Option<i64>,
    #[serde(default)]
    pub depositor: Option<AccountDisplay>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct MultisigList {
    #[serde(default)]
    pub count: i64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub multisig: Vec<MultisigSummary>,
}

/// One lifecycle event of a multisig call.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ApprovalEvent {
    #[serde(default)]
    pub account_display: AccountDisplay,
    #[serde(default)]
    pub status: String,
    /// epoch seconds
    #[serde(deserialize_with = "string_or_number_to_i64")]
    pub timestamp: i64,
    #[serde(default)]
    pub block_num: Option<i64>,
    #[serde(default)]
    pub extrinsic_index: Option<String>,
}

impl ApprovalEvent {
    pub fn address(&self) -> &str {
        &self.account_display.address
    }
}

/// Payload of `api/scan/multisig`.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct MultisigDetail {
    pub call_hash: String,
    pub multi_id: String,
    pub status: MultisigStatus,
    #[serde(deserialize_with = "string_or_number_to_i64")]
    pub threshold: i64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub process: Vec<ApprovalEvent>,
}

impl MultisigDetail {
    /// Addresses that approved, in event order, without duplicates.
    pub fn approvers(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for event in &self.process {
            let address = event.address();
            if address.is_empty() || out.iter().any(|a| a == address) {
                continue;
            }
            out.push(address.to_string());
        }
        out
    }
}
