use std::collections::BTreeMap;

use anyhow::Result;
use httpmock::MockServer;
use multisig_api::{QueueManager, TransactionFields};

use crate::common::config;

#[tokio::test]
async fn test_unknown_call_hash_reads_as_empty_document() -> Result<()> {
    let server = MockServer::start_async().await;
    let manager = QueueManager::new(config(&server)).await?;

    let res = manager.transaction_metadata("0xabc".to_string()).await;

    assert!(res.is_ok());
    assert_eq!(res.data.call_hash, "0xabc");
    assert_eq!(res.data.note, None);
    assert_eq!(res.data.transaction_fields, None);
    assert!(res.data.notifications.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_setters_only_touch_their_own_field() -> Result<()> {
    let server = MockServer::start_async().await;
    let manager = QueueManager::new(config(&server)).await?;
    let fields = TransactionFields {
        category: "treasury".to_string(),
        subfields: BTreeMap::from([("proposal".to_string(), "42".to_string())]),
    };

    manager
        .set_note("0xabc".to_string(), Some("grant payout".to_string()))
        .await;
    manager
        .set_transaction_fields("0xabc".to_string(), fields.clone())
        .await;
    let res = manager
        .set_token_amount("0xabc".to_string(), Some(" 250 ".to_string()))
        .await;

    assert!(res.is_ok(), "{:?}", res.error);
    assert_eq!(res.data.note.as_deref(), Some("grant payout"));
    assert_eq!(res.data.transaction_fields, Some(fields));
    assert_eq!(res.data.token_amount.as_deref(), Some("250"));

    let res = manager.set_note("0xabc".to_string(), None).await;
    assert_eq!(res.data.note, None);
    assert_eq!(res.data.token_amount.as_deref(), Some("250"));
    Ok(())
}

#[tokio::test]
async fn test_notifications_accumulate_per_signatory() -> Result<()> {
    let server = MockServer::start_async().await;
    let manager = QueueManager::new(config(&server)).await?;

    manager
        .record_notification("0xabc".to_string(), "Alice".to_string())
        .await;
    let res = manager
        .record_notification("0xabc".to_string(), "Bob".to_string())
        .await;

    assert!(res.is_ok());
    let signatories: Vec<_> = res.data.notifications.keys().cloned().collect();
    assert_eq!(signatories, vec!["Alice".to_string(), "Bob".to_string()]);
    Ok(())
}

#[tokio::test]
async fn test_invalid_parameters() -> Result<()> {
    let server = MockServer::start_async().await;
    let manager = QueueManager::new(config(&server)).await?;

    let res = manager.set_note("  ".to_string(), Some("x".to_string())).await;
    assert_eq!(res.code, 422);

    let res = manager
        .set_transaction_fields(
            "0xabc".to_string(),
            TransactionFields {
                category: String::new(),
                subfields: BTreeMap::new(),
            },
        )
        .await;
    assert_eq!(res.code, 422);

    let res = manager
        .record_notification("0xabc".to_string(), String::new())
        .await;
    assert_eq!(res.code, 422);
    Ok(())
}
