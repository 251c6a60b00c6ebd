use crate::repositories::transaction_metadata::TransactionMetadataRepo;

#[derive(Debug, Clone)]
pub struct RepositoryFactory {
    db_pool: crate::DbPool,
}

impl RepositoryFactory {
    pub fn new(db_pool: crate::DbPool) -> Self {
        Self { db_pool }
    }

    pub fn metadata_repo(&self) -> TransactionMetadataRepo {
        TransactionMetadataRepo::new(self.db_pool.clone())
    }
}
