use crate::DbPool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::{str::FromStr as _, sync::Arc, time::Duration};

#[derive(Debug, Clone)]
pub struct SqlitePoolProvider {
    pub uri: String,
    pub conn: DbPool,
}

impl SqlitePoolProvider {
    pub async fn new(uri: &str, max_connections: u32) -> Result<Self, crate::Error> {
        let pool = Self::init_pool(uri, max_connections).await?;

        // run migrations
        Self::run_migrate(pool.clone()).await?;

        Ok(Self {
            uri: uri.to_string(),
            conn: pool,
        })
    }

    pub async fn run_migrate(pool: DbPool) -> Result<(), crate::Error> {
        if let Err(e) = sqlx::migrate!("./schema/migrations")
            .run(pool.as_ref())
            .await
        {
            tracing::error!("migrate failed: {e}");
            return Err(crate::DatabaseError::Migrate(e).into());
        }
        Ok(())
    }

    pub async fn init_pool(uri: &str, max_connections: u32) -> Result<DbPool, crate::Error> {
        tracing::debug!("[init_pool] data base uri: {uri}");

        let options = SqliteConnectOptions::from_str(uri)
            .map_err(crate::DatabaseError::Sqlx)?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5));

        // an in-memory database lives only as long as its single connection
        let in_memory = uri.contains(":memory:") || uri.contains("mode=memory");
        let mut pool_options = SqlitePoolOptions::new().max_connections(max_connections.max(1));
        if in_memory {
            pool_options = pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options.connect_with(options).await.map_err(|e| {
            tracing::error!("[init_database] connect error: {e}");
            crate::DatabaseError::DatabaseConnectFailed
        })?;

        Ok(Arc::new(pool))
    }

    pub fn get_pool(&self) -> DbPool {
        self.conn.clone()
    }

    pub fn get_uri(&self) -> String {
        self.uri.clone()
    }
}
