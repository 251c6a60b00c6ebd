use std::{collections::HashMap, time::Duration};

use futures::StreamExt as _;
use multisig_database::{MetadataStore, TransactionMetadata};
use multisig_indexer::{
    request::{MultisigReq, MultisigsReq},
    IndexerApi, MultisigDetail, MultisigSummary,
};

use super::with_timeout;
use crate::{
    domain::multisig::queue::QueueDomain,
    request::queue::{QueueFilter, QueueListReq},
    response_vo::queue::QueueEntry,
};

pub struct MultisigQueueService<'a> {
    indexer: &'a IndexerApi,
    store: &'a dyn MetadataStore,
    timeout: Duration,
    concurrency: usize,
}

impl<'a> MultisigQueueService<'a> {
    pub fn new(
        indexer: &'a IndexerApi,
        store: &'a dyn MetadataStore,
        timeout: Duration,
        concurrency: usize,
    ) -> Self {
        Self {
            indexer,
            store,
            timeout,
            concurrency: concurrency.max(1),
        }
    }

    /// One page of the account's multisig calls, in indexer order, restricted by `filter`.
    ///
    /// Only a failed page fetch fails the whole call. Timeline and metadata
    /// failures are reported on the affected entries.
    pub async fn queue_list(
        &self,
        req: &QueueListReq,
        filter: QueueFilter,
    ) -> Result<Vec<QueueEntry>, crate::ServiceError> {
        let list_req = MultisigsReq::new(&req.multisig_address, req.page.page, req.page.row);
        let list = with_timeout(
            self.timeout,
            "indexer multisigs",
            self.indexer.multisigs(&list_req),
        )
        .await?;

        let fetched = list.multisig.len();
        let records: Vec<MultisigSummary> = list
            .multisig
            .into_iter()
            .filter(|record| filter.accepts(record.status))
            .collect();
        tracing::debug!(
            network = %req.network,
            account = %req.multisig_address,
            page = req.page.page,
            row = req.page.row,
            fetched,
            kept = records.len(),
            "multisig page fetched"
        );
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let call_hashes: Vec<String> = records.iter().map(|r| r.call_hash.clone()).collect();
        let timelines = futures::stream::iter(records.iter())
            .map(|record| self.timeline(&record.call_hash, &record.multi_id))
            .buffered(self.concurrency)
            .collect::<Vec<_>>();
        let (timelines, metadata) = tokio::join!(timelines, self.metadata_many(&call_hashes));

        let entries = records
            .iter()
            .zip(timelines)
            .map(|(record, timeline)| {
                let metadata = metadata
                    .as_ref()
                    .map(|found| found.get(&record.call_hash).cloned());
                QueueDomain::assemble(self.indexer.network, record, timeline, metadata)
            })
            .collect();
        Ok(entries)
    }

    /// A single call looked up by hash. Unlike the list, any failure fails the call.
    pub async fn queue_entry(
        &self,
        call_hash: &str,
        multi_id: &str,
    ) -> Result<QueueEntry, crate::ServiceError> {
        let (timeline, metadata) =
            tokio::join!(self.timeline(call_hash, multi_id), self.metadata(call_hash));
        let detail = timeline.map_err(|e| match e {
            crate::ServiceError::Indexer(multisig_indexer::Error::EmptyData) => {
                crate::BusinessError::from(crate::QueueError::CallNotFound(call_hash.to_string()))
                    .into()
            }
            e => e,
        })?;
        let metadata = metadata?;

        let summary = QueueDomain::summary_of(&detail);
        Ok(QueueDomain::assemble(
            self.indexer.network,
            &summary,
            Ok::<_, crate::ServiceError>(detail),
            Ok::<_, crate::ServiceError>(metadata),
        ))
    }

    async fn timeline(
        &self,
        call_hash: &str,
        multi_id: &str,
    ) -> Result<MultisigDetail, crate::ServiceError> {
        let req = MultisigReq::new(call_hash, multi_id);
        with_timeout(self.timeout, "indexer multisig", self.indexer.multisig(&req)).await
    }

    async fn metadata(
        &self,
        call_hash: &str,
    ) -> Result<Option<TransactionMetadata>, crate::ServiceError> {
        with_timeout(self.timeout, "metadata store", self.store.find(call_hash)).await
    }

    async fn metadata_many(
        &self,
        call_hashes: &[String],
    ) -> Result<HashMap<String, TransactionMetadata>, crate::ServiceError> {
        with_timeout(
            self.timeout,
            "metadata store",
            self.store.find_many(call_hashes),
        )
        .await
    }
}
