use std::time::Duration;

use chrono::{DateTime, Utc};
use multisig_database::{MetadataStore, TransactionFields, TransactionMetadata};

use super::with_timeout;

pub struct TransactionMetadataService<'a> {
    store: &'a dyn MetadataStore,
    timeout: Duration,
}

impl<'a> TransactionMetadataService<'a> {
    pub fn new(store: &'a dyn MetadataStore, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    pub async fn get(&self, call_hash: &str) -> Result<TransactionMetadata, crate::ServiceError> {
        let call_hash = check_call_hash(call_hash)?;
        let found = with_timeout(self.timeout, "metadata store", self.store.find(call_hash)).await?;
        // an unknown hash reads as an empty document
        Ok(found.unwrap_or_else(|| TransactionMetadata {
            call_hash: call_hash.to_string(),
            ..Default::default()
        }))
    }

    /// `None` or an empty note clears it.
    pub async fn set_note(
        &self,
        call_hash: &str,
        note: Option<&str>,
    ) -> Result<TransactionMetadata, crate::ServiceError> {
        let call_hash = check_call_hash(call_hash)?;
        let note = note.filter(|n| !n.is_empty());
        with_timeout(
            self.timeout,
            "metadata store",
            self.store.upsert_note(call_hash, note),
        )
        .await
    }

    pub async fn set_transaction_fields(
        &self,
        call_hash: &str,
        fields: &TransactionFields,
    ) -> Result<TransactionMetadata, crate::ServiceError> {
        let call_hash = check_call_hash(call_hash)?;
        if fields.category.trim().is_empty() {
            return Err(crate::ServiceError::Parameter(
                "transaction category is empty".to_string(),
            ));
        }
        with_timeout(
            self.timeout,
            "metadata store",
            self.store.upsert_transaction_fields(call_hash, fields),
        )
        .await
    }

    pub async fn set_token_amount(
        &self,
        call_hash: &str,
        token_amount: Option<&str>,
    ) -> Result<TransactionMetadata, crate::ServiceError> {
        let call_hash = check_call_hash(call_hash)?;
        let token_amount = token_amount.map(str::trim).filter(|a| !a.is_empty());
        with_timeout(
            self.timeout,
            "metadata store",
            self.store.upsert_token_amount(call_hash, token_amount),
        )
        .await
    }

    pub async fn record_notification(
        &self,
        call_hash: &str,
        address: &str,
        at: DateTime<Utc>,
    ) -> Result<TransactionMetadata, crate::ServiceError> {
        let call_hash = check_call_hash(call_hash)?;
        let address = address.trim();
        if address.is_empty() {
            return Err(crate::ServiceError::Parameter(
                "signatory address is empty".to_string(),
            ));
        }
        tracing::info!(call_hash, address, "recording notification");
        with_timeout(
            self.timeout,
            "metadata store",
            self.store.record_notification(call_hash, address, at),
        )
        .await
    }
}

fn check_call_hash(call_hash: &str) -> Result<&str, crate::ServiceError> {
    let call_hash = call_hash.trim();
    if call_hash.is_empty() {
        return Err(crate::ServiceError::Parameter("call hash is empty".to_string()));
    }
    Ok(call_hash)
}
