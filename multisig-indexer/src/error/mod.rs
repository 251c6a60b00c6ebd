use multisig_transport::errors::TransportError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Transport error: `{0}`")]
    Transport(#[from] TransportError),
    #[error("Indexer error: code = {code}, message = {message}")]
    Indexer { code: i64, message: String },
    #[error("Indexer returned no data")]
    EmptyData,
    #[error("Types error: `{0}`")]
    Types(#[from] multisig_types::Error),
    #[error("Utils error: `{0}`")]
    Utils(#[from] multisig_utils::error::Error),
}

impl Error {
    pub fn is_network_error(&self) -> bool {
        match self {
            Error::Transport(e) => e.is_network_error(),
            Error::Utils(e) => e.is_network_error(),
            _ => false,
        }
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Transport(e) => e.is_timeout(),
            Error::Utils(e) => e.is_timeout(),
            _ => false,
        }
    }
}
