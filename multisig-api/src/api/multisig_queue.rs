use crate::{
    api::ReturnType,
    domain::multisig::notification::NotificationDomain,
    request::queue::{QueueFilter, QueueListReq},
    response_vo::queue::QueueEntry,
};

impl crate::QueueManager {
    /// Calls of `multisig_address` still awaiting approval, newest indexer page
    /// first. `page` is one-based, 0 is treated like 1.
    pub async fn multisig_queue_list(
        &self,
        multisig_address: String,
        network: String,
        page: Option<i64>,
        entries_per_page: Option<i64>,
    ) -> ReturnType<Vec<QueueEntry>> {
        self.queue_list(
            &multisig_address,
            &network,
            page,
            entries_per_page,
            QueueFilter::Pending,
        )
        .await
        .into()
    }

    /// Calls of `multisig_address` that were executed, cancelled or failed.
    pub async fn multisig_history_list(
        &self,
        multisig_address: String,
        network: String,
        page: Option<i64>,
        entries_per_page: Option<i64>,
    ) -> ReturnType<Vec<QueueEntry>> {
        self.queue_list(
            &multisig_address,
            &network,
            page,
            entries_per_page,
            QueueFilter::History,
        )
        .await
        .into()
    }

    pub async fn multisig_queue_entry(
        &self,
        network: String,
        call_hash: String,
        multi_id: String,
    ) -> ReturnType<Option<QueueEntry>> {
        self.queue_entry(&network, &call_hash, &multi_id)
            .await
            .map(Some)
            .into()
    }

    /// Signatories that should be reminded about `call_hash` now.
    pub async fn notification_recipients(
        &self,
        network: String,
        call_hash: String,
        multi_id: String,
        signatories: Vec<String>,
    ) -> ReturnType<Vec<String>> {
        let res = async {
            let entry = self.queue_entry(&network, &call_hash, &multi_id).await?;
            Ok::<_, crate::ServiceError>(NotificationDomain::recipients(
                &entry,
                &signatories,
                multisig_utils::time::now(),
                self.config.notification.cooldown(),
            ))
        };
        res.await.into()
    }

    async fn queue_list(
        &self,
        multisig_address: &str,
        network: &str,
        page: Option<i64>,
        entries_per_page: Option<i64>,
        filter: QueueFilter,
    ) -> Result<Vec<QueueEntry>, crate::ServiceError> {
        let req = QueueListReq::new(multisig_address, network, page, entries_per_page)?;
        let indexer = self.indexer(req.network).await?;
        self.queue_service(&indexer).queue_list(&req, filter).await
    }

    async fn queue_entry(
        &self,
        network: &str,
        call_hash: &str,
        multi_id: &str,
    ) -> Result<QueueEntry, crate::ServiceError> {
        if call_hash.trim().is_empty() || multi_id.trim().is_empty() {
            return Err(crate::ServiceError::Parameter(
                "call hash and multi id are required".to_string(),
            ));
        }
        let network = multisig_types::Network::try_from(network).map_err(|e| {
            crate::BusinessError::from(crate::QueueError::InvalidNetwork(e.to_string()))
        })?;
        let indexer = self.indexer(network).await?;
        self.queue_service(&indexer)
            .queue_entry(call_hash.trim(), multi_id.trim())
            .await
    }
}
