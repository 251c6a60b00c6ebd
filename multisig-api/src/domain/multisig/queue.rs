use chrono::{DateTime, Utc};
use multisig_database::TransactionMetadata;
use multisig_indexer::{ApprovalEvent, MultisigDetail, MultisigSummary};
use multisig_types::Network;

use crate::response_vo::queue::QueueEntry;

/// Sorts after every real timestamp.
pub const CREATED_AT_UNKNOWN: DateTime<Utc> = DateTime::<Utc>::MAX_UTC;

pub struct QueueDomain;

impl QueueDomain {
    /// Earliest event time of a call, `CREATED_AT_UNKNOWN` for an empty timeline.
    pub fn created_at(events: &[ApprovalEvent]) -> DateTime<Utc> {
        let earliest = events
            .iter()
            .map(|event| event.timestamp)
            .fold(i64::MAX, i64::min);
        if earliest == i64::MAX {
            return CREATED_AT_UNKNOWN;
        }

        multisig_utils::time::timestamp_to_datetime(earliest).unwrap_or_else(|e| {
            tracing::warn!("approval timestamp {earliest} out of range: {e}");
            CREATED_AT_UNKNOWN
        })
    }

    /// Builds the entry for one record. A failed lookup leaves its part at the
    /// default and is reported through `QueueEntry::error`.
    pub fn assemble<E1, E2>(
        network: Network,
        summary: &MultisigSummary,
        timeline: Result<MultisigDetail, E1>,
        metadata: Result<Option<TransactionMetadata>, E2>,
    ) -> QueueEntry
    where
        E1: std::fmt::Display,
        E2: std::fmt::Display,
    {
        let mut entry = QueueEntry::from_summary(network, summary);

        match timeline {
            Ok(detail) => {
                entry.created_at = Self::created_at(&detail.process);
                entry.approvals = detail.approvers();
            }
            Err(e) => {
                tracing::warn!(call_hash = %summary.call_hash, "timeline lookup failed: {e}");
                entry.push_error(format!("timeline: {e}"));
            }
        }

        match metadata {
            Ok(metadata) => entry = entry.with_metadata(metadata),
            Err(e) => {
                tracing::warn!(call_hash = %summary.call_hash, "metadata lookup failed: {e}");
                entry.push_error(format!("metadata: {e}"));
            }
        }

        entry
    }

    /// Summary view of a call fetched directly by hash.
    pub fn summary_of(detail: &MultisigDetail) -> MultisigSummary {
        MultisigSummary {
            call_hash: detail.call_hash.clone(),
            multi_id: detail.multi_id.clone(),
            status: detail.status,
            threshold: detail.threshold,
            call_module: None,
            call_module_function: None,
            block_timestamp: None,
            depositor: None,
        }
    }
}
