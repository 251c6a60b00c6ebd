use chrono::{DateTime, Utc};
use multisig_database::{TransactionFields, TransactionMetadata};
use multisig_indexer::{MultisigStatus, MultisigSummary};
use multisig_types::Network;
use std::collections::BTreeMap;

/// One multisig call as the indexer reports it, enriched with off-chain metadata.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueEntry {
    pub call_hash: String,
    /// `block-extrinsic` id of the call's first appearance.
    pub multi_id: String,
    pub network: Network,
    pub status: MultisigStatus,
    pub threshold: i64,
    /// Earliest event of the approval timeline. `DateTime::<Utc>::MAX_UTC`
    /// when the timeline is empty or could not be fetched.
    pub created_at: DateTime<Utc>,
    pub approvals: Vec<String>,
    pub note: String,
    pub transaction_fields: TransactionFields,
    pub total_amount: Option<String>,
    pub notifications: BTreeMap<String, DateTime<Utc>>,
    /// Set when part of this entry could not be assembled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueueEntry {
    pub fn from_summary(network: Network, summary: &MultisigSummary) -> Self {
        Self {
            call_hash: summary.call_hash.clone(),
            multi_id: summary.multi_id.clone(),
            network,
            status: summary.status,
            threshold: summary.threshold,
            created_at: crate::domain::multisig::queue::CREATED_AT_UNKNOWN,
            approvals: Vec::new(),
            note: String::new(),
            transaction_fields: TransactionFields::default(),
            total_amount: None,
            notifications: BTreeMap::new(),
            error: None,
        }
    }

    pub fn with_metadata(mut self, metadata: Option<TransactionMetadata>) -> Self {
        let Some(metadata) = metadata else {
            return self;
        };
        self.note = metadata.note.unwrap_or_default();
        self.transaction_fields = metadata.transaction_fields.unwrap_or_default();
        self.total_amount = metadata.token_amount;
        self.notifications = metadata.notifications;
        self
    }

    /// Later failures are appended to the first one.
    pub fn push_error(&mut self, err: impl std::fmt::Display) {
        match self.error.as_mut() {
            Some(msg) => {
                msg.push_str("; ");
                msg.push_str(&err.to_string());
            }
            None => self.error = Some(err.to_string()),
        }
    }

    pub fn has_approved(&self, address: &str) -> bool {
        self.approvals.iter().any(|a| a == address)
    }
}
