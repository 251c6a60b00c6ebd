use crate::{api::ReturnType, TransactionFields, TransactionMetadata};

impl crate::QueueManager {
    pub async fn transaction_metadata(&self, call_hash: String) -> ReturnType<TransactionMetadata> {
        self.metadata_service().get(&call_hash).await.into()
    }

    pub async fn set_note(
        &self,
        call_hash: String,
        note: Option<String>,
    ) -> ReturnType<TransactionMetadata> {
        self.metadata_service()
            .set_note(&call_hash, note.as_deref())
            .await
            .into()
    }

    pub async fn set_transaction_fields(
        &self,
        call_hash: String,
        fields: TransactionFields,
    ) -> ReturnType<TransactionMetadata> {
        self.metadata_service()
            .set_transaction_fields(&call_hash, &fields)
            .await
            .into()
    }

    pub async fn set_token_amount(
        &self,
        call_hash: String,
        token_amount: Option<String>,
    ) -> ReturnType<TransactionMetadata> {
        self.metadata_service()
            .set_token_amount(&call_hash, token_amount.as_deref())
            .await
            .into()
    }

    /// Stamps `address` as notified about `call_hash` at the current time.
    pub async fn record_notification(
        &self,
        call_hash: String,
        address: String,
    ) -> ReturnType<TransactionMetadata> {
        self.metadata_service()
            .record_notification(&call_hash, &address, multisig_utils::time::now())
            .await
            .into()
    }
}
