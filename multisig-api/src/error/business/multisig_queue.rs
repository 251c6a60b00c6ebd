#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    #[error("invalid network: {0}")]
    InvalidNetwork(String),
    #[error("multisig call {0} not found")]
    CallNotFound(String),
}

impl QueueError {
    pub(crate) fn get_status_code(&self) -> u32 {
        match self {
            QueueError::InvalidNetwork(_) => 3800,
            QueueError::CallNotFound(_) => 3801,
        }
    }
}
