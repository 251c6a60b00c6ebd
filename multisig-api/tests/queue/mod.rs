use std::{collections::BTreeMap, sync::Arc};

use chrono::{DateTime, Utc};
use httpmock::{Method::POST, MockServer};
use multisig_api::{
    domain::multisig::queue::CREATED_AT_UNKNOWN, MetadataStore, QueueManager, TransactionFields,
    TransactionMetadata,
};
use multisig_indexer::MultisigStatus;
use serde_json::json;

use crate::common::{approval, config, manager, mock_detail, mock_page, record, ACCOUNT};

#[tokio::test]
async fn test_queue_keeps_pending_calls_in_indexer_order() {
    let server = MockServer::start_async().await;
    mock_page(
        &server,
        0,
        10,
        vec![
            record("0x01", "100-1", "Approving"),
            record("0x02", "101-1", "Executed"),
            record("0x03", "102-4", "Approving"),
        ],
    )
    .await;
    mock_detail(
        &server,
        "0x01",
        "100-1",
        "Approving",
        vec![approval("Alice", 1700000300), approval("Bob", 1700000100)],
    )
    .await;
    mock_detail(&server, "0x03", "102-4", "Approving", vec![approval("Carol", 1700000500)]).await;

    let manager = manager(&server).await;
    let res = manager
        .multisig_queue_list(ACCOUNT.to_string(), "polkadot".to_string(), Some(1), Some(10))
        .await;

    assert!(res.is_ok(), "{:?}", res.error);
    let entries = res.data;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].call_hash, "0x01");
    assert_eq!(entries[1].call_hash, "0x03");
    assert_eq!(entries[0].created_at.timestamp(), 1700000100);
    assert_eq!(entries[0].approvals, vec!["Alice".to_string(), "Bob".to_string()]);
    assert_eq!(entries[1].created_at.timestamp(), 1700000500);
    for entry in &entries {
        assert_eq!(entry.status, MultisigStatus::Approving);
        assert_eq!(entry.note, "");
        assert_eq!(entry.transaction_fields, TransactionFields::default());
        assert!(entry.notifications.is_empty());
        assert!(entry.error.is_none());
    }
}

#[tokio::test]
async fn test_history_keeps_finished_calls() {
    let server = MockServer::start_async().await;
    mock_page(
        &server,
        0,
        10,
        vec![
            record("0x01", "100-1", "Approving"),
            record("0x02", "101-1", "Executed"),
            record("0x03", "102-4", "Cancelled"),
        ],
    )
    .await;
    mock_detail(&server, "0x02", "101-1", "Executed", vec![approval("Alice", 1700000000)]).await;
    mock_detail(&server, "0x03", "102-4", "Cancelled", vec![approval("Bob", 1700000200)]).await;

    let manager = manager(&server).await;
    let res = manager
        .multisig_history_list(ACCOUNT.to_string(), "polkadot".to_string(), Some(1), Some(10))
        .await;

    let hashes: Vec<_> = res.data.iter().map(|e| e.call_hash.as_str()).collect();
    assert_eq!(hashes, vec!["0x02", "0x03"]);
    assert_eq!(res.data[1].status, MultisigStatus::Cancelled);
}

#[tokio::test]
async fn test_indexer_failure_returns_empty_list_with_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/polkadot/api/scan/multisigs");
            then.status(500).body("upstream down");
        })
        .await;

    let manager = manager(&server).await;
    let res = manager
        .multisig_queue_list(ACCOUNT.to_string(), "polkadot".to_string(), Some(1), Some(10))
        .await;

    assert!(res.data.is_empty());
    assert!(res.error.is_some());
    assert_eq!(res.code, 502);
}

#[tokio::test]
async fn test_indexer_error_code_is_reported() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/polkadot/api/scan/multisigs");
            then.status(200)
                .json_body(json!({"code": 10004, "message": "Record Not Found", "data": null}));
        })
        .await;

    let manager = manager(&server).await;
    let res = manager
        .multisig_queue_list(ACCOUNT.to_string(), "polkadot".to_string(), None, None)
        .await;

    assert!(res.data.is_empty());
    assert_eq!(res.code, 530);
    assert!(res.error.unwrap().contains("Record Not Found"));
}

#[tokio::test]
async fn test_zero_page_size_requests_one_row() {
    let server = MockServer::start_async().await;
    let page = mock_page(&server, 0, 1, vec![]).await;

    let manager = manager(&server).await;
    let res = manager
        .multisig_queue_list(ACCOUNT.to_string(), "polkadot".to_string(), Some(1), Some(0))
        .await;

    page.assert_async().await;
    assert!(res.is_ok());
    assert!(res.data.is_empty());
}

#[tokio::test]
async fn test_page_zero_and_one_hit_the_same_offset() {
    let server = MockServer::start_async().await;
    let first = mock_page(&server, 0, 5, vec![]).await;
    let third = mock_page(&server, 2, 5, vec![]).await;

    let manager = manager(&server).await;
    for page in [Some(0), Some(1), None] {
        let res = manager
            .multisig_queue_list(ACCOUNT.to_string(), "polkadot".to_string(), page, Some(5))
            .await;
        assert!(res.is_ok());
    }
    manager
        .multisig_queue_list(ACCOUNT.to_string(), "polkadot".to_string(), Some(3), Some(5))
        .await;

    first.assert_hits_async(3).await;
    third.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_empty_timeline_sorts_last() {
    let server = MockServer::start_async().await;
    mock_page(&server, 0, 10, vec![record("0x01", "100-1", "Approving")]).await;
    mock_detail(&server, "0x01", "100-1", "Approving", vec![]).await;

    let manager = manager(&server).await;
    let res = manager
        .multisig_queue_list(ACCOUNT.to_string(), "polkadot".to_string(), Some(1), Some(10))
        .await;

    assert_eq!(res.data.len(), 1);
    assert_eq!(res.data[0].created_at, CREATED_AT_UNKNOWN);
    assert_eq!(res.data[0].created_at, DateTime::<Utc>::MAX_UTC);
    assert!(res.data[0].approvals.is_empty());
}

#[tokio::test]
async fn test_failed_timeline_only_marks_its_entry() {
    let server = MockServer::start_async().await;
    mock_page(
        &server,
        0,
        10,
        vec![
            record("0x01", "100-1", "Approving"),
            record("0x02", "101-1", "Approving"),
        ],
    )
    .await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/polkadot/api/scan/multisig")
                .json_body(json!({"call_hash": "0x01", "multi_id": "100-1"}));
            then.status(500).body("boom");
        })
        .await;
    mock_detail(&server, "0x02", "101-1", "Approving", vec![approval("Bob", 1700000100)]).await;

    let manager = manager(&server).await;
    manager
        .set_note("0x01".to_string(), Some("still annotated".to_string()))
        .await;
    let res = manager
        .multisig_queue_list(ACCOUNT.to_string(), "polkadot".to_string(), Some(1), Some(10))
        .await;

    assert!(res.is_ok());
    assert_eq!(res.data.len(), 2);
    let broken = &res.data[0];
    assert_eq!(broken.call_hash, "0x01");
    assert!(broken.error.as_deref().unwrap().starts_with("timeline:"));
    assert_eq!(broken.created_at, CREATED_AT_UNKNOWN);
    assert_eq!(broken.note, "still annotated");
    let healthy = &res.data[1];
    assert!(healthy.error.is_none());
    assert_eq!(healthy.approvals, vec!["Bob".to_string()]);
}

#[tokio::test]
async fn test_slow_indexer_times_out() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/polkadot/api/scan/multisigs");
            then.status(200)
                .delay(std::time::Duration::from_millis(2500))
                .json_body(json!({"code": 0, "message": "Success", "data": {"count": 0, "multisig": []}}));
        })
        .await;

    let manager = manager(&server).await;
    let res = manager
        .multisig_queue_list(ACCOUNT.to_string(), "polkadot".to_string(), Some(1), Some(10))
        .await;

    assert_eq!(res.code, 504);
    assert!(res.data.is_empty());
}

#[tokio::test]
async fn test_metadata_is_merged_per_call_hash() {
    let server = MockServer::start_async().await;
    mock_page(
        &server,
        0,
        10,
        vec![
            record("0x01", "100-1", "Approving"),
            record("0x02", "101-1", "Approving"),
        ],
    )
    .await;
    mock_detail(&server, "0x01", "100-1", "Approving", vec![approval("Alice", 1700000000)]).await;
    mock_detail(&server, "0x02", "101-1", "Approving", vec![approval("Bob", 1700000100)]).await;

    let manager = manager(&server).await;
    let fields = TransactionFields {
        category: "payroll".to_string(),
        subfields: BTreeMap::from([("employee".to_string(), "dave".to_string())]),
    };
    assert!(manager.set_note("0x01".to_string(), Some("march salary".to_string())).await.is_ok());
    assert!(manager.set_transaction_fields("0x01".to_string(), fields.clone()).await.is_ok());
    assert!(manager.set_token_amount("0x01".to_string(), Some("1500".to_string())).await.is_ok());
    assert!(manager.record_notification("0x01".to_string(), "Bob".to_string()).await.is_ok());

    let res = manager
        .multisig_queue_list(ACCOUNT.to_string(), "polkadot".to_string(), Some(1), Some(10))
        .await;

    let annotated = &res.data[0];
    assert_eq!(annotated.note, "march salary");
    assert_eq!(annotated.transaction_fields, fields);
    assert_eq!(annotated.total_amount.as_deref(), Some("1500"));
    assert!(annotated.notifications.contains_key("Bob"));

    let plain = &res.data[1];
    assert_eq!(plain.note, "");
    assert_eq!(plain.transaction_fields, TransactionFields::default());
    assert_eq!(plain.total_amount, None);
    assert!(plain.notifications.is_empty());
}

#[tokio::test]
async fn test_unknown_or_unindexed_network_is_rejected() {
    let server = MockServer::start_async().await;
    let any = server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(200);
        })
        .await;

    let manager = manager(&server).await;
    for network in ["dogecoin", "ethereum"] {
        let res = manager
            .multisig_queue_list(ACCOUNT.to_string(), network.to_string(), Some(1), Some(10))
            .await;
        assert_eq!(res.code, 3800, "{network}");
        assert!(res.data.is_empty());
        assert!(res.error.unwrap().contains("invalid network"));
    }

    let res = manager
        .multisig_queue_list(String::new(), "polkadot".to_string(), Some(1), Some(10))
        .await;
    assert_eq!(res.code, 422);

    any.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_notification_recipients_skip_approvers_and_recent_reminders() {
    let server = MockServer::start_async().await;
    mock_detail(&server, "0x01", "100-1", "Approving", vec![approval("Alice", 1700000000)]).await;

    let manager = manager(&server).await;
    let signatories = vec!["Alice".to_string(), "Bob".to_string(), "Carol".to_string()];

    let res = manager
        .notification_recipients(
            "polkadot".to_string(),
            "0x01".to_string(),
            "100-1".to_string(),
            signatories.clone(),
        )
        .await;
    assert_eq!(res.data, vec!["Bob".to_string(), "Carol".to_string()]);

    assert!(manager.record_notification("0x01".to_string(), "Bob".to_string()).await.is_ok());
    let res = manager
        .notification_recipients(
            "polkadot".to_string(),
            "0x01".to_string(),
            "100-1".to_string(),
            signatories,
        )
        .await;
    assert_eq!(res.data, vec!["Carol".to_string()]);
}

#[tokio::test]
async fn test_queue_entry_for_unknown_call() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/polkadot/api/scan/multisig");
            then.status(200)
                .json_body(json!({"code": 0, "message": "Success", "data": null}));
        })
        .await;

    let manager = manager(&server).await;
    let res = manager
        .multisig_queue_entry("polkadot".to_string(), "0xdead".to_string(), "1-1".to_string())
        .await;

    assert_eq!(res.code, 3801);
    assert!(res.data.is_none());
}

struct UnavailableStore;

#[async_trait::async_trait]
impl MetadataStore for UnavailableStore {
    async fn find(&self, _: &str) -> Result<Option<TransactionMetadata>, multisig_database::Error> {
        Err(multisig_database::Error::NotFound("store offline".to_string()))
    }

    async fn find_many(
        &self,
        _: &[String],
    ) -> Result<std::collections::HashMap<String, TransactionMetadata>, multisig_database::Error>
    {
        Err(multisig_database::Error::NotFound("store offline".to_string()))
    }

    async fn upsert_note(
        &self,
        _: &str,
        _: Option<&str>,
    ) -> Result<TransactionMetadata, multisig_database::Error> {
        Err(multisig_database::Error::NotFound("store offline".to_string()))
    }

    async fn upsert_transaction_fields(
        &self,
        _: &str,
        _: &TransactionFields,
    ) -> Result<TransactionMetadata, multisig_database::Error> {
        Err(multisig_database::Error::NotFound("store offline".to_string()))
    }

    async fn upsert_token_amount(
        &self,
        _: &str,
        _: Option<&str>,
    ) -> Result<TransactionMetadata, multisig_database::Error> {
        Err(multisig_database::Error::NotFound("store offline".to_string()))
    }

    async fn record_notification(
        &self,
        _: &str,
        _: &str,
        _: DateTime<Utc>,
    ) -> Result<TransactionMetadata, multisig_database::Error> {
        Err(multisig_database::Error::NotFound("store offline".to_string()))
    }
}

#[tokio::test]
async fn test_store_outage_still_lists_calls() {
    let server = MockServer::start_async().await;
    mock_page(&server, 0, 10, vec![record("0x01", "100-1", "Approving")]).await;
    mock_detail(&server, "0x01", "100-1", "Approving", vec![approval("Alice", 1700000000)]).await;

    let manager = QueueManager::with_store(config(&server), Arc::new(UnavailableStore)).unwrap();
    let res = manager
        .multisig_queue_list(ACCOUNT.to_string(), "polkadot".to_string(), Some(1), Some(10))
        .await;

    assert!(res.is_ok());
    let entry = &res.data[0];
    assert_eq!(entry.approvals, vec!["Alice".to_string()]);
    assert_eq!(entry.note, "");
    assert!(entry.error.as_deref().unwrap().contains("store offline"));

    let res = manager.set_note("0x01".to_string(), Some("x".to_string())).await;
    assert_eq!(res.code, 630);
}
