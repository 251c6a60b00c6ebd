mod error;
pub use error::{DatabaseError, Error};
pub mod dao;
pub mod entities;
pub mod factory;
mod init;
pub mod repositories;

// database pool
pub type DbPool = std::sync::Arc<sqlx::Pool<sqlx::Sqlite>>;

pub use entities::transaction_metadata::{TransactionFields, TransactionMetadata};
pub use repositories::transaction_metadata::{MetadataStore, TransactionMetadataRepo};

#[derive(Debug, Clone)]
pub struct SqliteContext {
    pub sqlite_provider: crate::init::SqlitePoolProvider,
}

impl SqliteContext {
    /// `uri` is a sqlx sqlite url, e.g. `sqlite://data/metadata.db` or `sqlite::memory:`.
    pub async fn new(uri: &str, max_connections: u32) -> Result<Self, crate::Error> {
        let provider = crate::init::SqlitePoolProvider::new(uri, max_connections).await?;

        Ok(SqliteContext {
            sqlite_provider: provider,
        })
    }

    pub fn get_pool(&self) -> DbPool {
        self.sqlite_provider.get_pool()
    }
}

pub(crate) fn any_in_collection<T, I>(collection: I, placeholder: &str) -> String
where
    T: std::fmt::Display,
    I: IntoIterator<Item = T>,
{
    collection
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(placeholder)
}
