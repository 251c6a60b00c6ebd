#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Migrate error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("Database connect failed")]
    DatabaseConnectFailed,
    #[error("Returning none")]
    ReturningNone,
}
