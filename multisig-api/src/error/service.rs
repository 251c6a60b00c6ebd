#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Types error: `{0}`")]
    Types(#[from] multisig_types::Error),
    #[error("Utils error: `{0}`")]
    Utils(#[from] multisig_utils::error::Error),
    #[error("Indexer error: `{0}`")]
    Indexer(#[from] multisig_indexer::Error),
    #[error("Transport error: `{0}`")]
    Transport(#[from] multisig_transport::TransportError),
    #[error("System error: {0}")]
    System(#[from] crate::error::system::SystemError),
    #[error("Database error: {0}")]
    Database(#[from] multisig_database::Error),
    #[error("Business error: {0}")]
    Business(#[from] super::business::BusinessError),
    #[error("parameter error: {0}")]
    Parameter(String),
    #[error("timeout: {0}")]
    Timeout(String),
}

impl ServiceError {
    pub fn is_network_error(&self) -> bool {
        match self {
            ServiceError::Utils(err) => err.is_network_error(),
            ServiceError::Indexer(err) => err.is_network_error(),
            ServiceError::Transport(err) => err.is_network_error(),
            ServiceError::Database(err) => err.is_network_error(),
            ServiceError::Timeout(_) => true,
            _ => false,
        }
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            ServiceError::Timeout(_) => true,
            ServiceError::Indexer(err) => err.is_timeout(),
            ServiceError::Transport(err) => err.is_timeout(),
            _ => false,
        }
    }
}
