use std::{collections::HashMap, sync::Arc};

use multisig_database::{factory::RepositoryFactory, MetadataStore, SqliteContext};
use multisig_indexer::IndexerApi;
use multisig_types::Network;
use tokio::sync::RwLock;

use crate::{
    config::Config,
    service::{
        multisig_queue::MultisigQueueService, transaction_metadata::TransactionMetadataService,
    },
};

/// Entry point of the crate: owns the configuration, the metadata store and
/// one indexer client per network.
pub struct QueueManager {
    pub(crate) config: Config,
    store: Arc<dyn MetadataStore>,
    indexers: RwLock<HashMap<Network, IndexerApi>>,
}

impl QueueManager {
    /// Opens (and migrates) the sqlite store named in `config.database`.
    pub async fn new(config: Config) -> Result<Self, crate::ServiceError> {
        config.validate()?;
        let context =
            SqliteContext::new(&config.database.uri, config.database.max_connections).await?;
        let store = RepositoryFactory::new(context.get_pool()).metadata_repo();
        tracing::info!(uri = %context.sqlite_provider.get_uri(), "metadata store ready");

        Self::with_store(config, Arc::new(store))
    }

    /// Uses a caller supplied store, e.g. a remote document database.
    pub fn with_store(
        config: Config,
        store: Arc<dyn MetadataStore>,
    ) -> Result<Self, crate::ServiceError> {
        config.validate()?;
        Ok(Self {
            config,
            store,
            indexers: RwLock::new(HashMap::new()),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn init_log(&self) -> Result<(), crate::ServiceError> {
        multisig_utils::init_log(self.config.log.level.as_deref())?;
        Ok(())
    }

    pub(crate) async fn indexer(&self, network: Network) -> Result<IndexerApi, crate::ServiceError> {
        if let Some(indexer) = self.indexers.read().await.get(&network) {
            return Ok(indexer.clone());
        }

        let mut indexers = self.indexers.write().await;
        if let Some(indexer) = indexers.get(&network) {
            return Ok(indexer.clone());
        }
        let indexer = IndexerApi::new(
            network,
            Some(&self.config.indexer.url_template),
            self.config.indexer.api_key.as_deref(),
            Some(self.config.indexer.timeout()),
        )?;
        tracing::debug!(%network, base_url = indexer.base_url(), "indexer client created");
        indexers.insert(network, indexer.clone());
        Ok(indexer)
    }

    pub(crate) fn queue_service<'a>(&'a self, indexer: &'a IndexerApi) -> MultisigQueueService<'a> {
        MultisigQueueService::new(
            indexer,
            self.store.as_ref(),
            self.config.indexer.timeout(),
            self.config.indexer.concurrency,
        )
    }

    pub(crate) fn metadata_service(&self) -> TransactionMetadataService<'_> {
        TransactionMetadataService::new(self.store.as_ref(), self.config.indexer.timeout())
    }
}
