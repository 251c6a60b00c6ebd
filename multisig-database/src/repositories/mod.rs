pub mod transaction_metadata;

pub struct ResourcesRepo {
    db_pool: crate::DbPool,
}

impl ResourcesRepo {
    pub fn new(db_pool: crate::DbPool) -> Self {
        Self { db_pool }
    }

    pub fn pool_ref(&self) -> &crate::DbPool {
        &self.db_pool
    }
}
