use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("node response {0}")]
    NodeResponseError(String),
    #[error("request timed out")]
    Timeout,
    #[error("Utils error: {0}")]
    Utils(#[from] multisig_utils::error::Error),
}

impl TransportError {
    pub fn is_network_error(&self) -> bool {
        match self {
            TransportError::Timeout => true,
            TransportError::NodeResponseError(_) => true,
            TransportError::Utils(e) => e.is_network_error(),
        }
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            TransportError::Timeout => true,
            TransportError::Utils(e) => e.is_timeout(),
            _ => false,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return TransportError::Timeout;
        }
        TransportError::Utils(multisig_utils::Error::Http(e.into()))
    }
}
