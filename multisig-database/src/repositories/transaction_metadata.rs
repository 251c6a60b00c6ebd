use super::ResourcesRepo;
use crate::{
    dao::transaction_metadata::TransactionMetadataDao,
    entities::{
        timestamp::StoredTimestamp,
        transaction_metadata::{TransactionFields, TransactionMetadata},
    },
};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Keyed document store for off-chain transaction metadata.
#[async_trait::async_trait]
pub trait MetadataStore: Send + Sync {
    async fn find(&self, call_hash: &str) -> Result<Option<TransactionMetadata>, crate::Error>;

    async fn find_many(
        &self,
        call_hashes: &[String],
    ) -> Result<HashMap<String, TransactionMetadata>, crate::Error>;

    async fn upsert_note(
        &self,
        call_hash: &str,
        note: Option<&str>,
    ) -> Result<TransactionMetadata, crate::Error>;

    async fn upsert_transaction_fields(
        &self,
        call_hash: &str,
        fields: &TransactionFields,
    ) -> Result<TransactionMetadata, crate::Error>;

    async fn upsert_token_amount(
        &self,
        call_hash: &str,
        token_amount: Option<&str>,
    ) -> Result<TransactionMetadata, crate::Error>;

    async fn record_notification(
        &self,
        call_hash: &str,
        address: &str,
        at: DateTime<Utc>,
    ) -> Result<TransactionMetadata, crate::Error>;
}

pub struct TransactionMetadataRepo {
    repo: ResourcesRepo,
}

impl TransactionMetadataRepo {
    pub fn new(db_pool: crate::DbPool) -> Self {
        Self {
            repo: ResourcesRepo::new(db_pool),
        }
    }
}

#[async_trait::async_trait]
impl MetadataStore for TransactionMetadataRepo {
    async fn find(&self, call_hash: &str) -> Result<Option<TransactionMetadata>, crate::Error> {
        let pool = self.repo.pool_ref();
        TransactionMetadataDao::find_by_call_hash(call_hash, pool.as_ref())
            .await?
            .map(TransactionMetadata::try_from)
            .transpose()
    }

    async fn find_many(
        &self,
        call_hashes: &[String],
    ) -> Result<HashMap<String, TransactionMetadata>, crate::Error> {
        let pool = self.repo.pool_ref();
        let rows = TransactionMetadataDao::list_by_call_hashes(call_hashes, pool.as_ref()).await?;

        let mut res = HashMap::with_capacity(rows.len());
        for row in rows {
            let meta = TransactionMetadata::try_from(row)?;
            res.insert(meta.call_hash.clone(), meta);
        }
        Ok(res)
    }

    async fn upsert_note(
        &self,
        call_hash: &str,
        note: Option<&str>,
    ) -> Result<TransactionMetadata, crate::Error> {
        let now = multisig_utils::time::now();
        let pool = self.repo.pool_ref();
        let row = TransactionMetadataDao::upsert_note(call_hash, note, &now, pool.as_ref()).await?;
        TransactionMetadata::try_from(row)
    }

    async fn upsert_transaction_fields(
        &self,
        call_hash: &str,
        fields: &TransactionFields,
    ) -> Result<TransactionMetadata, crate::Error> {
        let now = multisig_utils::time::now();
        let pool = self.repo.pool_ref();
        let row = TransactionMetadataDao::upsert_fields(
            call_hash,
            &fields.category,
            &fields.subfields,
            &now,
            pool.as_ref(),
        )
        .await?;
        TransactionMetadata::try_from(row)
    }

    async fn upsert_token_amount(
        &self,
        call_hash: &str,
        token_amount: Option<&str>,
    ) -> Result<TransactionMetadata, crate::Error> {
        let now = multisig_utils::time::now();
        let pool = self.repo.pool_ref();
        let row =
            TransactionMetadataDao::upsert_token_amount(call_hash, token_amount, &now, pool.as_ref())
                .await?;
        TransactionMetadata::try_from(row)
    }

    async fn record_notification(
        &self,
        call_hash: &str,
        address: &str,
        at: DateTime<Utc>,
    ) -> Result<TransactionMetadata, crate::Error> {
        let now = multisig_utils::time::now();
        let pool = self.repo.pool_ref();
        let row = TransactionMetadataDao::merge_notification(
            call_hash,
            address,
            &StoredTimestamp::from_datetime(&at),
            &now,
            pool.as_ref(),
        )
        .await?;
        TransactionMetadata::try_from(row)
    }
}
